//! razmenlib — библиотека конвертации суммы по курсу и размена на купюры и монеты (RUB, EUR, USD)

pub mod breakdown;
pub mod error;
pub mod model;
pub mod rates;
