//! Доменные типы: канонизированная операция и результаты запросов.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Денежное значение, используем `Decimal` для точных расчётов.
pub type Money = Decimal;

/// Канонизированная операция из выгрузки.
///
/// Каждое поле может отсутствовать: строка с нечитаемой датой остаётся
/// доступной для текстового поиска, но исключается из запросов по датам.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Дата и время операции.
    pub timestamp: Option<NaiveDateTime>,
    /// Сумма операции, отрицательная — расход.
    pub amount: Option<Money>,
    /// Категория операции.
    pub category: Option<String>,
    /// Свободное описание.
    pub description: Option<String>,
    /// Последние 4 символа номера карты.
    pub card_suffix: Option<String>,
}

impl Transaction {
    /// Является ли операция расходом (строго отрицательная сумма).
    #[inline]
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.amount.is_some_and(|a| a < Money::ZERO)
    }

    /// Текст описания для поиска; отсутствие поля эквивалентно пустой строке.
    #[inline]
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Текст категории для поиска; отсутствие поля эквивалентно пустой строке.
    #[inline]
    #[must_use]
    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

/// Категория с накопленной суммой расходов за месяц.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Название категории.
    pub category: String,
    /// Сумма расходов по модулю.
    pub total: Money,
}

/// Сумма операций по категории за один день.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySpend {
    /// День.
    pub date: NaiveDate,
    /// Сумма операций за день со знаком.
    pub total: Money,
}

/// Статистика расходов по одной карте.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStat {
    /// Последние 4 символа номера карты.
    pub last_digits: String,
    /// Сумма расходов по модулю, без округления.
    pub total_spent: Money,
    /// Кэшбэк 1% от расходов, без округления.
    pub cashback: Money,
}

/// Одна из топ-5 операций по сумме расхода.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTransaction {
    /// День операции.
    pub date: NaiveDate,
    /// Сумма расхода по модулю.
    pub amount: Money,
    /// Категория операции.
    pub category: Option<String>,
    /// Описание операции.
    pub description: Option<String>,
}

/// Курс валюты из внешнего источника.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRate {
    /// Код валюты.
    pub currency: String,
    /// Курс.
    pub rate: Money,
}

/// Котировка из снимка фондового индекса.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuote {
    /// Тикер.
    pub stock: String,
    /// Цена.
    pub price: Money,
}

/// Приветствие по времени суток.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    /// 05:00–11:59.
    Morning,
    /// 12:00–17:59.
    Midday,
    /// 18:00–22:59.
    Evening,
    /// Остальные часы.
    Night,
}

impl Greeting {
    /// Текст приветствия.
    #[inline]
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Morning => "Доброе утро",
            Self::Midday => "Добрый день",
            Self::Evening => "Добрый вечер",
            Self::Night => "Доброй ночи",
        }
    }
}

/// Сводный отчёт «главной страницы» за период с начала месяца.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeReport {
    /// Приветствие по часу целевой даты.
    pub greeting: Greeting,
    /// Статистика по картам.
    pub cards: Vec<CardStat>,
    /// Топ-5 операций по сумме расхода.
    pub top_transactions: Vec<TopTransaction>,
    /// Курсы валют.
    pub currency_rates: Vec<CurrencyRate>,
    /// Снимок фондового индекса.
    pub stock_prices: Vec<StockQuote>,
}
