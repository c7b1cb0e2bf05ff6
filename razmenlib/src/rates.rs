//! Загрузка таблицы курсов из CSV. Заголовки: currency,rate

use crate::error::{RazmenError, Result};
use crate::model::{Currency, RateTable};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use std::io::BufRead;

#[derive(serde::Deserialize)]
struct RateRow {
    currency: String,
    rate: String,
}

impl RateTable {
    /// Читает таблицу курсов из CSV: каждая поддерживаемая валюта ровно
    /// один раз, курсы положительные, курс RUB ровно 1.
    pub fn from_csv<R: BufRead>(r: R) -> Result<RateTable> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(r);

        let mut rates: [Option<Decimal>; 3] = [None, None, None];

        for rec in rdr.deserialize::<RateRow>() {
            let row = rec?;
            let currency: Currency = row.currency.parse()?;
            let rate = row
                .rate
                .parse::<Decimal>()
                .map_err(|e| RazmenError::Parse(format!("rate for {currency}: {e}")))?;

            let slot = &mut rates[currency as usize];
            if slot.is_some() {
                return Err(RazmenError::Rate(format!("duplicate rate for {currency}")));
            }
            *slot = Some(rate);
        }

        let mut resolved = [Decimal::ZERO; 3];
        for c in Currency::ALL {
            resolved[c as usize] = rates[c as usize]
                .ok_or_else(|| RazmenError::Rate(format!("missing rate for {c}")))?;
        }

        RateTable::new(
            resolved[Currency::Rub as usize],
            resolved[Currency::Eur as usize],
            resolved[Currency::Usd as usize],
        )
    }
}
