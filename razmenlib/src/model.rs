//! Доменные модели: валюты, таблица курсов, номиналы купюр и монет.

use crate::error::{RazmenError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Номиналы купюр по убыванию. Жадный разбор корректен только на
/// строго убывающем списке без повторов.
pub const DENOMINATIONS: [u64; 7] = [5000, 2000, 1000, 500, 200, 100, 50];

/// Номиналы монет в минорных единицах (100 минорных = 1 основная), по убыванию.
pub const COINS: [u64; 6] = [100, 50, 10, 5, 2, 1];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    Rub,
    Eur,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Eur, Currency::Usd];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = RazmenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RUB" => Ok(Currency::Rub),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(RazmenError::Parse(format!("unknown currency: {other}"))),
        }
    }
}

/// Таблица курсов: положительный множитель на каждую валюту.
/// Курс основной валюты (RUB) всегда ровно 1; после создания не меняется.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rub: Decimal,
    eur: Decimal,
    usd: Decimal,
}

impl RateTable {
    pub fn new(rub: Decimal, eur: Decimal, usd: Decimal) -> Result<Self> {
        let table = RateTable { rub, eur, usd };
        for c in Currency::ALL {
            if table.rate(c) <= Decimal::ZERO {
                return Err(RazmenError::Rate(format!("rate for {c} must be positive")));
            }
        }
        if table.rub != Decimal::ONE {
            return Err(RazmenError::Rate(format!(
                "rate for RUB must be exactly 1, got {rub}"
            )));
        }
        Ok(table)
    }

    pub fn rate(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Rub => self.rub,
            Currency::Eur => self.eur,
            Currency::Usd => self.usd,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            rub: Decimal::ONE,
            eur: Decimal::new(12, 3),
            usd: Decimal::new(14, 3),
        }
    }
}
