//! Исходящие JSON-структуры: успешный ответ либо единый ответ об ошибке.
//!
//! Причина сбоя всегда остаётся во внутреннем логе и наружу не попадает;
//! вызывающая сторона видит только `{"error": "Internal server error"}`.
//! Все даты в исходящих данных — строки ISO-8601.

use crate::error::StatementError;
use crate::query;
use crate::types::{HomeReport, Money, Transaction};
use crate::utils::{format_iso, weekday_name};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use serde_json::{Value, json};

/// Дата без времени в ISO-8601.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Метка для отсутствующей категории или описания в отчёте.
const UNKNOWN_LABEL: &str = "Неизвестно";

/// Операция в исходящем виде.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionPayload {
    /// Дата-время операции в ISO-8601.
    pub date: Option<String>,
    /// Сумма операции со знаком.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub amount: Option<Money>,
    /// Категория.
    pub category: Option<String>,
    /// Описание.
    pub description: Option<String>,
    /// Последние 4 символа номера карты.
    pub card: Option<String>,
}

impl From<&Transaction> for TransactionPayload {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.timestamp.map(format_iso),
            amount: transaction.amount,
            category: transaction.category.clone(),
            description: transaction.description.clone(),
            card: transaction.card_suffix.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CategoryTotalPayload {
    category: String,
    #[serde(with = "rust_decimal::serde::float")]
    total: Money,
}

#[derive(Debug, Serialize)]
struct CardStatPayload {
    last_digits: String,
    #[serde(with = "rust_decimal::serde::float")]
    total_spent: Money,
    #[serde(with = "rust_decimal::serde::float")]
    cashback: Money,
}

#[derive(Debug, Serialize)]
struct TopTransactionPayload {
    date: String,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Money,
    category: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct CurrencyRatePayload {
    currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    rate: Money,
}

#[derive(Debug, Serialize)]
struct StockQuotePayload {
    stock: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Money,
}

/// Единый ответ об ошибке; причина уходит в лог.
fn internal_error(err: &StatementError) -> Value {
    log::error!("query failed: {err}");
    json!({ "error": "Internal server error" })
}

/// Топ-3 категории расходов за месяц, в порядке убывания сумм.
#[must_use]
pub fn profitable_categories(transactions: &[Transaction], year: i32, month: u32) -> Value {
    match query::profitable_categories(transactions, year, month) {
        Ok(totals) => {
            let items: Vec<CategoryTotalPayload> = totals
                .into_iter()
                .map(|t| CategoryTotalPayload {
                    category: t.category,
                    total: t.total,
                })
                .collect();
            json!({ "categories": items })
        }
        Err(err) => internal_error(&err),
    }
}

/// Сумма «Инвесткопилки» за месяц.
#[must_use]
pub fn investment_piggy_bank(
    transactions: &[Transaction],
    year: i32,
    month: u32,
    step: u32,
) -> Value {
    match query::investment_piggy_bank(transactions, year, month, step) {
        Ok(total) => json!({ "total_investment": money_value(total) }),
        Err(err) => internal_error(&err),
    }
}

/// Результаты простого поиска.
#[must_use]
pub fn simple_search(transactions: &[Transaction], text: &str) -> Value {
    results(query::simple_search(transactions, text))
}

/// Операции с телефонными номерами в описании.
#[must_use]
pub fn find_phone_numbers(transactions: &[Transaction]) -> Value {
    results(query::find_phone_numbers(transactions))
}

/// Переводы физическим лицам.
#[must_use]
pub fn find_personal_transfers(transactions: &[Transaction]) -> Value {
    results(query::find_personal_transfers(transactions))
}

/// Суммы по дням недели: объект «название дня — сумма».
#[must_use]
pub fn spending_by_weekday(transactions: &[Transaction], cutoff: Option<NaiveDate>) -> Value {
    let mut object = serde_json::Map::new();
    for (weekday, total) in query::spending_by_weekday(transactions, cutoff) {
        object.insert(weekday_name(weekday).to_string(), money_value(total));
    }
    Value::Object(object)
}

/// Дневной тренд по категории за 90 дней от начальной даты.
#[must_use]
pub fn spending_by_category(transactions: &[Transaction], category: &str, start: NaiveDate) -> Value {
    let trend: Vec<Value> = query::spending_by_category(transactions, category, start)
        .into_iter()
        .map(|day| {
            json!({
                "date": day.date.format(ISO_DATE_FORMAT).to_string(),
                "total": money_value(day.total),
            })
        })
        .collect();
    let end = start.checked_add_days(Days::new(query::CATEGORY_TREND_DAYS));
    json!({
        "category": category,
        "start_date": start.format(ISO_DATE_FORMAT).to_string(),
        "end_date": end.map(|date| date.format(ISO_DATE_FORMAT).to_string()),
        "spending_trend": trend,
    })
}

/// Сводный отчёт с фиксированными ключами.
///
/// Кэшбэк округляется до 2 знаков только здесь, при отображении.
#[must_use]
pub fn home_report(report: &HomeReport) -> Value {
    let cards: Vec<CardStatPayload> = report
        .cards
        .iter()
        .map(|card| CardStatPayload {
            last_digits: card.last_digits.clone(),
            total_spent: card.total_spent,
            cashback: card.cashback.round_dp(2),
        })
        .collect();

    let top: Vec<TopTransactionPayload> = report
        .top_transactions
        .iter()
        .map(|t| TopTransactionPayload {
            date: t.date.format(ISO_DATE_FORMAT).to_string(),
            amount: t.amount,
            category: t
                .category
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            description: t
                .description
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        })
        .collect();

    let rates: Vec<CurrencyRatePayload> = report
        .currency_rates
        .iter()
        .map(|rate| CurrencyRatePayload {
            currency: rate.currency.clone(),
            rate: rate.rate,
        })
        .collect();

    let stocks: Vec<StockQuotePayload> = report
        .stock_prices
        .iter()
        .map(|quote| StockQuotePayload {
            stock: quote.stock.clone(),
            price: quote.price,
        })
        .collect();

    json!({
        "greeting": report.greeting.text(),
        "cards": cards,
        "top_transactions": top,
        "currency_rates": rates,
        "stock_prices": stocks,
    })
}

fn results(found: Vec<&Transaction>) -> Value {
    let items: Vec<TransactionPayload> = found.into_iter().map(TransactionPayload::from).collect();
    json!({ "results": items })
}

fn money_value(value: Money) -> Value {
    use rust_decimal::prelude::ToPrimitive;
    value.to_f64().map_or(Value::Null, Value::from)
}
