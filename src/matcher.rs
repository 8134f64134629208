//! Декларативные текстовые матчеры: шаблон плюс политика применения.

use regex::RegexBuilder;
use std::sync::LazyLock;

/// Политика применения шаблона к тексту.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Шаблон ищется как подстрока.
    Substring,
    /// Шаблон должен покрыть весь текст целиком (после обрезки пробелов).
    Anchored,
}

/// Текстовый матчер с фиксированной политикой.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    regex: regex::Regex,
    policy: MatchPolicy,
}

impl TextMatcher {
    /// Компилирует шаблон с указанной политикой.
    ///
    /// При `Anchored` шаблон оборачивается якорями `^…$` на этапе
    /// компиляции, так что частичное совпадение невозможно.
    pub fn new(
        pattern: &str,
        policy: MatchPolicy,
        case_insensitive: bool,
    ) -> Result<Self, regex::Error> {
        let source = match policy {
            MatchPolicy::Substring => pattern.to_string(),
            MatchPolicy::Anchored => format!("^(?:{pattern})$"),
        };
        let regex = RegexBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self { regex, policy })
    }

    /// Проверяет текст по шаблону согласно политике.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self.policy {
            MatchPolicy::Substring => self.regex.is_match(text),
            MatchPolicy::Anchored => self.regex.is_match(text.trim()),
        }
    }
}

/// Российский мобильный номер: `+7`, код из 3 цифр и номер через дефисы.
/// Регистронезависимость для цифр ничего не меняет и оставлена для
/// симметрии с остальными матчерами.
pub static PHONE_NUMBER: LazyLock<TextMatcher> = LazyLock::new(|| {
    TextMatcher::new(
        r"\+7\s?\d{3}\s?\d{2}-\d{2}-\d{2}",
        MatchPolicy::Substring,
        true,
    )
    .expect("valid phone pattern")
});

/// Имя человека: слово с заглавной буквы, затем инициал с точкой либо
/// второе слово с заглавной буквы.
pub static PERSON_NAME: LazyLock<TextMatcher> = LazyLock::new(|| {
    TextMatcher::new(
        r"[А-ЯЁ][а-яё]+ (?:[А-ЯЁ]\.|[А-ЯЁ][а-яё]+)",
        MatchPolicy::Anchored,
        false,
    )
    .expect("valid person name pattern")
});
