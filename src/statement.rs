//! Снимок выгрузки операций и удобные методы запросов.

use crate::error::StatementError;
use crate::normalize::normalize_row_lenient;
use crate::query;
use crate::raw::{self, RawRow};
use crate::report;
use crate::types::{CategoryTotal, DailySpend, HomeReport, Money, Transaction};
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use std::io::Read;
use std::path::Path;

/// Один загруженный снимок выгрузки.
///
/// Операции нормализуются один раз при загрузке и далее не меняются;
/// новый снимок просто заменяет старый.
#[derive(Debug, Clone, Default)]
pub struct Statement {
    transactions: Vec<Transaction>,
}

impl Statement {
    /// Нормализует сырые строки в снимок по щадящей политике: строки с
    /// нечитаемыми полями сохраняются и исключаются только из запросов,
    /// которым эти поля нужны.
    ///
    /// # Пример
    ///
    /// ```
    /// use sber_ops_report::{RawRow, Statement, columns};
    ///
    /// let rows = vec![RawRow::from_pairs([
    ///     (columns::OPERATION_DATE, "12.05.2021 13:57:38"),
    ///     (columns::AMOUNT, "-7900"),
    ///     (columns::CATEGORY, "Фастфуд"),
    ///     (columns::DESCRIPTION, "МакДак"),
    /// ])];
    /// let statement = Statement::from_rows(&rows);
    /// assert_eq!(statement.simple_search("фастфуд").len(), 1);
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[RawRow]) -> Self {
        Self {
            transactions: rows.iter().map(normalize_row_lenient).collect(),
        }
    }

    /// Читает и нормализует CSV-выгрузку из произвольного `Read`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StatementError> {
        Ok(Self::from_rows(&raw::read_rows(reader)?))
    }

    /// Читает и нормализует CSV-выгрузку из файла.
    ///
    /// Отсутствующий файл даёт пустой снимок, а не ошибку.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StatementError> {
        Ok(Self::from_rows(&raw::read_rows_from_path(path)?))
    }

    /// Все операции снимка.
    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Число операций в снимке.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Пуст ли снимок.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// См. [`query::profitable_categories`].
    pub fn profitable_categories(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<CategoryTotal>, StatementError> {
        query::profitable_categories(&self.transactions, year, month)
    }

    /// См. [`query::investment_piggy_bank`].
    pub fn investment_piggy_bank(
        &self,
        year: i32,
        month: u32,
        step: u32,
    ) -> Result<Money, StatementError> {
        query::investment_piggy_bank(&self.transactions, year, month, step)
    }

    /// См. [`query::simple_search`].
    #[must_use]
    pub fn simple_search(&self, text: &str) -> Vec<&Transaction> {
        query::simple_search(&self.transactions, text)
    }

    /// См. [`query::find_phone_numbers`].
    #[must_use]
    pub fn find_phone_numbers(&self) -> Vec<&Transaction> {
        query::find_phone_numbers(&self.transactions)
    }

    /// См. [`query::find_personal_transfers`].
    #[must_use]
    pub fn find_personal_transfers(&self) -> Vec<&Transaction> {
        query::find_personal_transfers(&self.transactions)
    }

    /// См. [`query::spending_by_weekday`].
    #[must_use]
    pub fn spending_by_weekday(&self, cutoff: Option<NaiveDate>) -> Vec<(Weekday, Money)> {
        query::spending_by_weekday(&self.transactions, cutoff)
    }

    /// См. [`query::spending_by_category`].
    #[must_use]
    pub fn spending_by_category(&self, category: &str, start: NaiveDate) -> Vec<DailySpend> {
        query::spending_by_category(&self.transactions, category, start)
    }

    /// Сводный отчёт по снимку, см. [`report::compose`].
    #[must_use]
    pub fn home_report(
        &self,
        target: NaiveDateTime,
        rates: &[(String, Money)],
        snapshots: &[Vec<(String, Money)>],
    ) -> HomeReport {
        report::compose(&self.transactions, target, rates, snapshots)
    }
}
