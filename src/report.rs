//! Сводный отчёт «главной страницы»: приветствие, карты, топ операций
//! и внешние справочные данные.

use crate::types::{
    CardStat, CurrencyRate, Greeting, HomeReport, Money, StockQuote, TopTransaction, Transaction,
};
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Сколько операций попадает в топ.
const TOP_TRANSACTIONS: usize = 5;

/// Приветствие по часу целевой даты.
///
/// Интервалы полуоткрытые, ночной — с переходом через полночь.
#[must_use]
pub fn greeting_for(target: NaiveDateTime) -> Greeting {
    match target.hour() {
        5..=11 => Greeting::Morning,
        12..=17 => Greeting::Midday,
        18..=22 => Greeting::Evening,
        _ => Greeting::Night,
    }
}

/// Операции месяца целевой даты, от первого числа до целевой даты-времени
/// включительно. Строки без даты в окно не попадают.
#[must_use]
pub fn month_window(transactions: &[Transaction], target: NaiveDateTime) -> Vec<Transaction> {
    let Some(start) = target
        .date()
        .with_day(1)
        .map(|day| day.and_time(NaiveTime::MIN))
    else {
        return Vec::new();
    };

    transactions
        .iter()
        .filter(|t| {
            t.timestamp
                .is_some_and(|ts| ts >= start && ts <= target)
        })
        .cloned()
        .collect()
}

/// Статистика расходов по картам.
///
/// Учитываются только расходы с известным суффиксом карты; группы идут в
/// порядке первого появления. Кэшбэк считается без округления, 1% от
/// суммы расходов.
#[must_use]
pub fn card_stats(transactions: &[Transaction]) -> Vec<CardStat> {
    let mut stats: Vec<CardStat> = Vec::new();
    for transaction in transactions {
        if !transaction.is_expense() {
            continue;
        }
        let Some(suffix) = transaction.card_suffix.as_deref() else {
            continue;
        };
        let Some(amount) = transaction.amount else {
            continue;
        };

        let spent = amount.abs();
        match stats.iter_mut().find(|s| s.last_digits == suffix) {
            Some(entry) => entry.total_spent += spent,
            None => stats.push(CardStat {
                last_digits: suffix.to_string(),
                total_spent: spent,
                cashback: Money::ZERO,
            }),
        }
    }

    for entry in &mut stats {
        entry.cashback = entry.total_spent / Decimal::ONE_HUNDRED;
    }
    stats
}

/// Топ-5 операций по сумме расхода, по убыванию.
///
/// При равных суммах сохраняется исходный порядок. Строки без даты не
/// учитываются: операция без даты не может попасть в окно отчёта.
#[must_use]
pub fn top_transactions(transactions: &[Transaction]) -> Vec<TopTransaction> {
    let mut top: Vec<TopTransaction> = transactions
        .iter()
        .filter(|t| t.is_expense())
        .filter_map(|t| {
            let timestamp = t.timestamp?;
            let amount = t.amount?;
            Some(TopTransaction {
                date: timestamp.date(),
                amount: amount.abs(),
                category: t.category.clone(),
                description: t.description.clone(),
            })
        })
        .collect();

    top.sort_by(|a, b| b.amount.cmp(&a.amount));
    top.truncate(TOP_TRANSACTIONS);
    top
}

/// Приводит отображение «валюта — курс» к единому списку.
#[must_use]
pub fn format_currency_rates(rates: &[(String, Money)]) -> Vec<CurrencyRate> {
    rates
        .iter()
        .map(|(currency, rate)| CurrencyRate {
            currency: currency.clone(),
            rate: *rate,
        })
        .collect()
}

/// Приводит снимки индекса к списку котировок; используется только первый
/// снимок, отсутствие данных даёт пустой список.
#[must_use]
pub fn format_stock_prices(snapshots: &[Vec<(String, Money)>]) -> Vec<StockQuote> {
    snapshots.first().map_or_else(Vec::new, |snapshot| {
        snapshot
            .iter()
            .map(|(stock, price)| StockQuote {
                stock: stock.clone(),
                price: *price,
            })
            .collect()
    })
}

/// Собирает сводный отчёт для целевой даты-времени.
#[must_use]
pub fn compose(
    transactions: &[Transaction],
    target: NaiveDateTime,
    rates: &[(String, Money)],
    snapshots: &[Vec<(String, Money)>],
) -> HomeReport {
    let window = month_window(transactions, target);
    HomeReport {
        greeting: greeting_for(target),
        cards: card_stats(&window),
        top_transactions: top_transactions(&window),
        currency_rates: format_currency_rates(rates),
        stock_prices: format_stock_prices(snapshots),
    }
}
