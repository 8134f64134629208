//! Исходные строки выгрузки и чтение CSV-файла.

use crate::error::StatementError;
use std::io::Read;
use std::path::Path;

/// Метки колонок выгрузки. Сопоставление строгое, по точному совпадению.
pub mod columns {
    /// Дата операции.
    pub const OPERATION_DATE: &str = "Дата операции";
    /// Статус операции.
    pub const STATUS: &str = "Статус";
    /// Сумма операции.
    pub const AMOUNT: &str = "Сумма операции";
    /// Категория.
    pub const CATEGORY: &str = "Категория";
    /// Описание.
    pub const DESCRIPTION: &str = "Описание";
    /// Номер карты.
    pub const CARD_NUMBER: &str = "Номер карты";
}

/// Одна сырая строка выгрузки: упорядоченное отображение «метка колонки — значение».
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    values: Vec<(String, String)>,
}

impl RawRow {
    /// Собирает строку из пар «колонка — значение», сохраняя порядок.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Значение колонки по точному совпадению метки.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Итератор по парам «колонка — значение» в исходном порядке.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Читает строки выгрузки из произвольного `Read`.
///
/// Первая строка CSV считается заголовком и задаёт метки колонок.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, StatementError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row = RawRow::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        rows.push(row);
    }
    Ok(rows)
}

/// Читает строки выгрузки из файла.
///
/// Отсутствующий файл эквивалентен пустой выгрузке: источник недоступен —
/// значит данных нет.
pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>, StatementError> {
    let path = path.as_ref();
    if !path.is_file() {
        log::warn!("statement file {} not found, using empty set", path.display());
        return Ok(Vec::new());
    }
    let file = std::fs::File::open(path)?;
    read_rows(file)
}
