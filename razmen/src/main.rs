use clap::{Parser, ValueEnum};
use razmenlib::{
    breakdown::breakdown,
    error::{RazmenError, Result},
    model::{Currency, RateTable},
};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Ccy {
    Rub,
    Eur,
    Usd,
}

impl From<Ccy> for Currency {
    fn from(c: Ccy) -> Currency {
        match c {
            Ccy::Rub => Currency::Rub,
            Ccy::Eur => Currency::Eur,
            Ccy::Usd => Currency::Usd,
        }
    }
}

/// Ответ при некорректной сумме; калькулятор при этом не вызывается.
const INVALID_AMOUNT: &str = "Please enter a valid monetary amount";

#[derive(Parser, Debug)]
#[command(name="razmen", version, about="Размен суммы на купюры и монеты")]
struct Cli {
    /// Сумма в основной валюте
    amount: String,

    /// Валюта конвертации
    #[arg(short='c', long="currency", value_enum, default_value="rub")]
    currency: Ccy,

    /// CSV с курсами (по умолчанию встроенная таблица)
    #[arg(long="rates")]
    rates: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short='o', long="output")]
    output: Option<String>,
}

/// Проверка суммы на стороне CLI: некорректная или отрицательная сумма
/// даёт фиксированное сообщение, калькулятор при этом не вызывается.
fn render_report(raw_amount: &str, currency: Currency, rates: &RateTable) -> String {
    match raw_amount.trim().parse::<Decimal>() {
        Ok(amount) if amount >= Decimal::ZERO => breakdown(amount, currency, rates),
        _ => INVALID_AMOUNT.to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rates = match cli.rates {
        Some(path) => RateTable::from_csv(BufReader::new(File::open(path)?))?,
        None => RateTable::default(),
    };

    // writer
    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    let report = render_report(&cli.amount, cli.currency.into(), &rates);

    writeln!(writer, "{report}")?;
    writer.flush().map_err(RazmenError::from)
}
