//! Пример CLI: читает CSV-выгрузку операций и печатает сводный отчёт.

use std::env;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sber_ops_report::{Money, Statement, payload};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let (Some(path), Some(date)) = (args.next(), args.next()) else {
        println!(
            "Usage: sber-ops-report <path-to-operations.csv> <YYYY-MM-DD HH:MM:SS> [reference.json]"
        );
        return Ok(());
    };

    let target = NaiveDateTime::parse_from_str(&date, "%Y-%m-%d %H:%M:%S")?;
    let (rates, snapshots) = match args.next() {
        Some(reference_path) => load_reference(&reference_path)?,
        None => (Vec::new(), Vec::new()),
    };

    let statement = Statement::from_path(&path)?;
    println!("Загружено операций: {}", statement.len());

    let report = statement.home_report(target, &rates, &snapshots);
    println!(
        "{}",
        serde_json::to_string_pretty(&payload::home_report(&report))?
    );

    let weekdays = payload::spending_by_weekday(statement.transactions(), Some(target.date()));
    println!("Расходы по дням недели: {}", serde_json::to_string(&weekdays)?);

    Ok(())
}

/// Читает справочные данные: объект `currency_rates` с курсами и список
/// `stock_prices` со снимками индекса.
fn load_reference(
    path: &str,
) -> Result<(Vec<(String, Money)>, Vec<Vec<(String, Money)>>), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;

    let mut rates = Vec::new();
    if let Some(object) = value.get("currency_rates").and_then(|v| v.as_object()) {
        for (currency, rate) in object {
            rates.push((currency.clone(), Decimal::from_str(&rate.to_string())?));
        }
    }

    let mut snapshots = Vec::new();
    if let Some(list) = value.get("stock_prices").and_then(|v| v.as_array()) {
        for snapshot in list {
            let Some(object) = snapshot.as_object() else {
                continue;
            };
            let mut fields = Vec::new();
            for (stock, price) in object {
                fields.push((stock.clone(), Decimal::from_str(&price.to_string())?));
            }
            snapshots.push(fields);
        }
    }

    Ok((rates, snapshots))
}
