use razmenlib::{
    breakdown::breakdown,
    model::{Currency, RateTable},
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: размен 7777 RUB по встроенной таблице курсов
    let amount: Decimal = "7777".parse()?;
    println!("{}", breakdown(amount, Currency::Rub, &RateTable::default()));
    Ok(())
}
