//! Вспомогательные парсеры чисел, дат и форматирование для вывода.

use crate::error::StatementError;
use crate::types::Money;
use chrono::{NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Формат даты операции в выгрузке.
const OPERATION_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Формат ISO-8601 для дат в исходящих данных.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Нормализует числовую строку, удаляя пробелы, знак плюса итд.
/// Десятичная запятая из выгрузки приводится к точке.
fn normalize_number(input: &str) -> String {
    input
        .chars()
        .filter(|ch| !matches!(*ch, ' ' | '\u{a0}' | '\u{202f}' | '+'))
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Разбирает денежное значение; пустая или нечисловая строка — ошибка.
pub fn parse_money(value: &str, column: &'static str) -> Result<Money, StatementError> {
    let normalized = normalize_number(value);
    if normalized.is_empty() {
        return Err(StatementError::Amount {
            value: value.trim().to_string(),
            column,
        });
    }
    Decimal::from_str(&normalized).map_err(|_| StatementError::Amount {
        value: value.trim().to_string(),
        column,
    })
}

/// Разбирает дату операции в формате `dd.mm.yyyy HH:MM:SS`.
pub fn parse_operation_datetime(value: &str) -> Result<NaiveDateTime, StatementError> {
    NaiveDateTime::parse_from_str(value.trim(), OPERATION_DATE_FORMAT).map_err(|_| {
        StatementError::Date {
            value: value.trim().to_string(),
        }
    })
}

/// Выводит дату-время в ISO-8601.
#[must_use]
pub fn format_iso(value: NaiveDateTime) -> String {
    value.format(ISO_FORMAT).to_string()
}

/// Русское название дня недели для отображения.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Понедельник",
        Weekday::Tue => "Вторник",
        Weekday::Wed => "Среда",
        Weekday::Thu => "Четверг",
        Weekday::Fri => "Пятница",
        Weekday::Sat => "Суббота",
        Weekday::Sun => "Воскресенье",
    }
}
