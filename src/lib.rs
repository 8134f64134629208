#![warn(missing_docs)]
//! Библиотека для анализа выгрузки операций Сбербанка: нормализация строк,
//! запросы по операциям и сводные отчёты.

mod error;
mod matcher;
mod normalize;
pub mod payload;
pub mod query;
mod raw;
pub mod report;
mod statement;
mod types;
mod utils;

pub use crate::error::StatementError;
pub use crate::matcher::{MatchPolicy, TextMatcher};
pub use crate::normalize::{normalize_row, normalize_row_lenient};
pub use crate::raw::{RawRow, columns, read_rows, read_rows_from_path};
pub use crate::statement::Statement;
pub use crate::types::*;
