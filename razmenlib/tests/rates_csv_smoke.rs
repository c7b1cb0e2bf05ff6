use razmenlib::model::{Currency, RateTable};
use rust_decimal::Decimal;
use std::io::Cursor;

#[test]
fn rates_csv_read_minimal() {
    let input = "currency,rate\nRUB,1\nEUR,0.012\nUSD,0.014\n";
    let table = RateTable::from_csv(Cursor::new(input)).expect("read rates csv");
    assert_eq!(table.rate(Currency::Eur), Decimal::new(12, 3));
    assert_eq!(table, RateTable::default());
}

#[test]
fn rates_csv_accepts_lowercase_codes() {
    let input = "currency,rate\nrub,1\neur,0.02\nusd,0.014\n";
    let table = RateTable::from_csv(Cursor::new(input)).expect("read rates csv");
    assert_eq!(table.rate(Currency::Eur), Decimal::new(2, 2));
}

#[test]
fn rates_csv_rejects_missing_currency() {
    let input = "currency,rate\nRUB,1\nEUR,0.012\n";
    assert!(RateTable::from_csv(Cursor::new(input)).is_err());
}

#[test]
fn rates_csv_rejects_duplicate_currency() {
    let input = "currency,rate\nRUB,1\nEUR,0.012\nEUR,0.013\nUSD,0.014\n";
    assert!(RateTable::from_csv(Cursor::new(input)).is_err());
}

#[test]
fn rates_csv_rejects_unknown_currency() {
    let input = "currency,rate\nRUB,1\nEUR,0.012\nUSD,0.014\nGBP,0.011\n";
    assert!(RateTable::from_csv(Cursor::new(input)).is_err());
}

#[test]
fn rates_csv_rejects_non_unit_primary_rate() {
    let input = "currency,rate\nRUB,2\nEUR,0.012\nUSD,0.014\n";
    assert!(RateTable::from_csv(Cursor::new(input)).is_err());
}

#[test]
fn rates_csv_rejects_non_positive_rate() {
    let input = "currency,rate\nRUB,1\nEUR,-0.012\nUSD,0.014\n";
    assert!(RateTable::from_csv(Cursor::new(input)).is_err());
}

#[test]
fn rate_table_new_validates_directly() {
    assert!(RateTable::new(Decimal::ONE, Decimal::new(12, 3), Decimal::ZERO).is_err());
    assert!(RateTable::new(Decimal::TWO, Decimal::new(12, 3), Decimal::new(14, 3)).is_err());
}
