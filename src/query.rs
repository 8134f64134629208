//! Чистые запросы по последовательности канонизированных операций.
//!
//! Каждая функция строит свои накопители с нуля и ничего не мутирует,
//! поэтому запросы можно выполнять повторно и из разных потоков без
//! координации.

use crate::error::StatementError;
use crate::matcher::{PERSON_NAME, PHONE_NUMBER};
use crate::types::{CategoryTotal, DailySpend, Money, Transaction};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Категория переводов физическим лицам.
pub const TRANSFERS_CATEGORY: &str = "Переводы";

/// Сколько категорий возвращает рейтинг.
const TOP_CATEGORIES: usize = 3;

/// Окно тренда по категории в днях.
pub const CATEGORY_TREND_DAYS: u64 = 90;

/// Дни недели в порядке с понедельника.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Топ-3 категории по сумме расходов за месяц.
///
/// Учитываются только расходы; суммы накапливаются по модулю. При равных
/// суммах порядок стабилен: раньше идёт категория, встретившаяся первой.
pub fn profitable_categories(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Result<Vec<CategoryTotal>, StatementError> {
    validate_month(month)?;

    let mut totals: Vec<CategoryTotal> = Vec::new();
    for transaction in transactions {
        let Some(timestamp) = transaction.timestamp else {
            continue;
        };
        if timestamp.year() != year || timestamp.month() != month {
            continue;
        }
        let Some(amount) = transaction.amount else {
            continue;
        };
        if amount >= Money::ZERO {
            continue;
        }
        let Some(category) = transaction.category.as_deref() else {
            continue;
        };

        match totals.iter_mut().find(|t| t.category == category) {
            Some(entry) => entry.total += amount.abs(),
            None => totals.push(CategoryTotal {
                category: category.to_string(),
                total: amount.abs(),
            }),
        }
    }

    // Стабильная сортировка сохраняет порядок первого появления при равенстве.
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals.truncate(TOP_CATEGORIES);
    Ok(totals)
}

/// Разница между суммой расхода и следующим кратным шага округления.
///
/// Округление всегда строго вверх: точное кратное даёт полный шаг,
/// а не ноль.
#[must_use]
pub fn round_up_difference(amount: Money, step: Money) -> Money {
    let absolute = amount.abs();
    ((absolute / step).floor() + Decimal::ONE) * step - absolute
}

/// «Инвесткопилка»: сумма разниц округления по расходам месяца.
pub fn investment_piggy_bank(
    transactions: &[Transaction],
    year: i32,
    month: u32,
    step: u32,
) -> Result<Money, StatementError> {
    validate_month(month)?;
    if step == 0 {
        return Err(StatementError::InvalidQuery {
            reason: "rounding step must be positive".to_string(),
        });
    }
    let step = Money::from(step);

    let mut total = Money::ZERO;
    for transaction in transactions {
        let Some(timestamp) = transaction.timestamp else {
            continue;
        };
        if timestamp.year() != year || timestamp.month() != month {
            continue;
        }
        let Some(amount) = transaction.amount else {
            continue;
        };
        if amount >= Money::ZERO {
            continue;
        }
        total += round_up_difference(amount, step);
    }
    Ok(total)
}

/// Простой поиск: подстрока без учёта регистра в описании или категории.
///
/// Пустой запрос совпадает с каждой операцией; порядок исходный.
#[must_use]
pub fn simple_search<'a>(transactions: &'a [Transaction], query: &str) -> Vec<&'a Transaction> {
    let needle = query.to_lowercase();
    transactions
        .iter()
        .filter(|t| {
            t.description_text().to_lowercase().contains(&needle)
                || t.category_text().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Операции, в описании которых встречается мобильный номер.
#[must_use]
pub fn find_phone_numbers(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| PHONE_NUMBER.matches(t.description_text()))
        .collect()
}

/// Переводы физическим лицам: категория «Переводы» и описание-имя.
#[must_use]
pub fn find_personal_transfers(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| {
            t.category_text() == TRANSFERS_CATEGORY && PERSON_NAME.matches(t.description_text())
        })
        .collect()
}

/// Суммы операций по дням недели, с понедельника.
///
/// Суммируются суммы со знаком: доходы и расходы внутри дня недели
/// взаимно гасятся. Строки без даты или суммы не учитываются;
/// `cutoff` — включительная верхняя граница по дню операции.
#[must_use]
pub fn spending_by_weekday(
    transactions: &[Transaction],
    cutoff: Option<NaiveDate>,
) -> Vec<(Weekday, Money)> {
    let mut buckets: BTreeMap<u32, Money> = BTreeMap::new();
    for transaction in transactions {
        let (Some(timestamp), Some(amount)) = (transaction.timestamp, transaction.amount) else {
            continue;
        };
        if cutoff.is_some_and(|limit| timestamp.date() > limit) {
            continue;
        }
        *buckets
            .entry(timestamp.weekday().num_days_from_monday())
            .or_insert(Money::ZERO) += amount;
    }

    buckets
        .into_iter()
        .map(|(ordinal, total)| (WEEKDAYS[ordinal as usize], total))
        .collect()
}

/// Дневные суммы по одной категории за 90 дней от начальной даты.
///
/// Окно включает обе границы; категория сравнивается точно.
#[must_use]
pub fn spending_by_category(
    transactions: &[Transaction],
    category: &str,
    start: NaiveDate,
) -> Vec<DailySpend> {
    let Some(end) = start.checked_add_days(Days::new(CATEGORY_TREND_DAYS)) else {
        return Vec::new();
    };

    let mut buckets: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for transaction in transactions {
        let (Some(timestamp), Some(amount)) = (transaction.timestamp, transaction.amount) else {
            continue;
        };
        let date = timestamp.date();
        if date < start || date > end {
            continue;
        }
        if transaction.category.as_deref() != Some(category) {
            continue;
        }
        *buckets.entry(date).or_insert(Money::ZERO) += amount;
    }

    buckets
        .into_iter()
        .map(|(date, total)| DailySpend { date, total })
        .collect()
}

fn validate_month(month: u32) -> Result<(), StatementError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(StatementError::InvalidQuery {
            reason: format!("month {month} out of range 1..=12"),
        })
    }
}
