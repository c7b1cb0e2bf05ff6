//! Размен сконвертированной суммы: целая часть — по купюрам, дробная — по монетам.

use crate::model::{Currency, RateTable, COINS, DENOMINATIONS};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Конвертирует `amount` по курсу и жадно раскладывает результат.
/// Купюры агрегируются в одну строку на номинал (`"5000 RUB - 2 bills"`),
/// неразменянный остаток идёт строкой `"Remaining: …"`, монеты печатаются
/// по одной строке на монету (`"10 minor-units"`), без агрегации.
///
/// Сумма должна быть конечной и неотрицательной; проверка на стороне
/// вызывающего, до вызова. Чистая функция, без состояния.
pub fn breakdown(amount: Decimal, currency: Currency, rates: &RateTable) -> String {
    let converted = amount * rates.rate(currency);
    let whole = converted.floor();

    // целая часть остаётся в Decimal: floor может не помещаться в u64
    let mut remaining = whole;
    let mut lines: Vec<String> = Vec::new();

    for d in DENOMINATIONS {
        let d = Decimal::from(d);
        if remaining >= d {
            let count = (remaining / d).floor();
            lines.push(format!("{d} {currency} - {count} bills"));
            remaining -= count * d;
        }
    }

    if remaining > Decimal::ZERO {
        lines.push(format!("Remaining: {remaining} {currency}"));
    }

    // дробная часть всегда даёт 0..=99, конверсия в u64 не теряет значение
    let cents = ((converted - whole) * Decimal::from(100))
        .floor()
        .to_u64()
        .unwrap_or(0);

    if cents > 0 {
        // двойная пустая строка отделяет секцию монет от купюр
        lines.push(String::new());
        lines.push(String::new());
        let mut remaining_cents = cents;
        for c in COINS {
            while remaining_cents >= c {
                lines.push(format!("{c} minor-units"));
                remaining_cents -= c;
            }
        }
    }

    lines.join("\n").trim().to_string()
}
