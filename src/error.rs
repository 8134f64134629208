//! Ошибки нормализации операций и выполнения запросов.

/// Ошибка обработки выгрузки операций.
#[derive(thiserror::Error, Debug)]
pub enum StatementError {
    /// Ошибка ввода-вывода при чтении исходного файла.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Ошибка чтения CSV-выгрузки.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// В строке отсутствует обязательная колонка.
    #[error("Required column '{column}' missing")]
    MissingColumn {
        /// Метка пропавшей колонки.
        column: &'static str,
    },
    /// Ошибка разбора даты операции.
    #[error("Invalid date '{value}'")]
    Date {
        /// Некорректная дата.
        value: String,
    },
    /// Ошибка разбора суммы.
    #[error("Invalid amount '{value}' in column '{column}'")]
    Amount {
        /// Некорректное исходное значение.
        value: String,
        /// Метка колонки.
        column: &'static str,
    },
    /// Некорректные параметры запроса.
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Причина отказа.
        reason: String,
    },
}
