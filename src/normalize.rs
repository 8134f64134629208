//! Нормализация сырых строк выгрузки в канонизированные операции.

use crate::error::StatementError;
use crate::raw::{RawRow, columns};
use crate::types::{Money, Transaction};
use crate::utils::{parse_money, parse_operation_datetime};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Строгая «полная» нормализация: четыре обязательные колонки должны
/// присутствовать, дата и сумма — разбираться.
pub fn normalize_row(row: &RawRow) -> Result<Transaction, StatementError> {
    let date_raw = require(row, columns::OPERATION_DATE)?;
    let amount_raw = require(row, columns::AMOUNT)?;
    let category = require(row, columns::CATEGORY)?;
    let description = require(row, columns::DESCRIPTION)?;

    let timestamp = parse_operation_datetime(date_raw)?;
    let amount = parse_money(amount_raw, columns::AMOUNT)?;

    Ok(Transaction {
        timestamp: Some(timestamp),
        amount: Some(amount),
        category: non_empty(category),
        description: non_empty(description),
        card_suffix: row.get(columns::CARD_NUMBER).and_then(card_suffix),
    })
}

/// Щадящая нормализация: никогда не падает, каждое нечитаемое поле
/// становится `None` и исключает строку только из запросов, которым оно
/// необходимо.
#[must_use]
pub fn normalize_row_lenient(row: &RawRow) -> Transaction {
    Transaction {
        timestamp: lenient_timestamp(row),
        amount: lenient_amount(row),
        category: row.get(columns::CATEGORY).and_then(non_empty),
        description: row.get(columns::DESCRIPTION).and_then(non_empty),
        card_suffix: row.get(columns::CARD_NUMBER).and_then(card_suffix),
    }
}

fn lenient_timestamp(row: &RawRow) -> Option<NaiveDateTime> {
    let value = row.get(columns::OPERATION_DATE)?;
    if value.trim().is_empty() {
        return None;
    }
    match parse_operation_datetime(value) {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            log::warn!("row retained without timestamp: {err}");
            None
        }
    }
}

fn lenient_amount(row: &RawRow) -> Option<Money> {
    let value = row.get(columns::AMOUNT)?;
    if value.trim().is_empty() {
        return None;
    }
    match parse_money(value, columns::AMOUNT) {
        Ok(amount) => Some(amount),
        Err(err) => {
            log::warn!("row retained without amount: {err}");
            None
        }
    }
}

fn require<'a>(row: &'a RawRow, column: &'static str) -> Result<&'a str, StatementError> {
    row.get(column)
        .ok_or(StatementError::MissingColumn { column })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Последние 4 символа номера карты.
///
/// Пустое значение, плейсхолдер `*` и NaN-подобные значения означают
/// операцию без карты. Числовая форма из экспорта (`1234567.0`) сначала
/// усекается до целой части.
fn card_suffix(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "*" || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    let normalized = Decimal::from_str(trimmed)
        .map_or_else(|_| trimmed.to_string(), |number| number.trunc().to_string());
    let chars: Vec<char> = normalized.chars().collect();
    let start = chars.len().saturating_sub(4);
    Some(chars[start..].iter().collect())
}
