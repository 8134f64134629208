use chrono::{NaiveDate, NaiveDateTime, Weekday};
use sber_ops_report::{
    Money, RawRow, Statement, StatementError, columns, normalize_row, normalize_row_lenient,
};

fn load_fixture() -> Statement {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("operations.csv");
    Statement::from_path(path).expect("read fixture")
}

fn money(text: &str) -> Money {
    text.parse().expect("valid test amount")
}

#[test]
fn fixture_rows_are_all_retained() {
    let statement = load_fixture();
    assert_eq!(statement.len(), 7);
    assert!(!statement.is_empty());
}

#[test]
fn broken_date_row_is_searchable_but_undated() {
    let statement = load_fixture();

    let found = statement.simple_search("без даты");
    assert_eq!(found.len(), 1);
    assert!(found[0].timestamp.is_none());
    assert_eq!(found[0].amount, Some(money("-10")));
}

#[test]
fn broken_amount_row_keeps_card_placeholder_rules() {
    let statement = load_fixture();

    let found = statement.simple_search("Сумма нечитаемая");
    assert_eq!(found.len(), 1);
    assert!(found[0].amount.is_none());
    // `nan` в колонке карты означает операцию без карты.
    assert!(found[0].card_suffix.is_none());
}

#[test]
fn card_number_keeps_trailing_four_symbols() {
    let statement = load_fixture();

    let found = statement.simple_search("Валерий");
    assert_eq!(found[0].card_suffix.as_deref(), Some("7197"));
}

#[test]
fn fixture_top_categories_for_may() {
    let statement = load_fixture();

    let totals = statement.profitable_categories(2021, 5).unwrap();
    assert_eq!(totals.len(), 3);
    assert_eq!(totals[0].category, "Переводы");
    assert_eq!(totals[0].total, money("7900"));
    assert_eq!(totals[1].category, "Супермаркеты");
    assert_eq!(totals[1].total, money("200"));
    assert_eq!(totals[2].category, "Фастфуд");
    assert_eq!(totals[2].total, money("120"));
}

#[test]
fn fixture_piggy_bank_for_may() {
    let statement = load_fixture();

    // Расходы мая: 7900, 120, 200, 50; разницы до кратного 50: 50+30+50+50.
    let total = statement.investment_piggy_bank(2021, 5, 50).unwrap();
    assert_eq!(total, money("180"));
}

#[test]
fn fixture_detectors_find_single_matches() {
    let statement = load_fixture();

    let transfers = statement.find_personal_transfers();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].description.as_deref(), Some("Валерий А."));

    let phones = statement.find_phone_numbers();
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0].category.as_deref(), Some("Мобильная связь"));
}

#[test]
fn fixture_weekday_spending() {
    let statement = load_fixture();

    let buckets = statement.spending_by_weekday(None);
    assert_eq!(buckets, vec![
        (Weekday::Wed, money("-8020")),
        (Weekday::Thu, money("-200")),
        (Weekday::Fri, money("100")),
        (Weekday::Sat, money("-50")),
    ]);
}

#[test]
fn fixture_category_trend() {
    let statement = load_fixture();
    let start = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();

    let trend = statement.spending_by_category("Фастфуд", start);
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2021, 5, 12).unwrap());
    assert_eq!(trend[0].total, money("-120"));
}

#[test]
fn fixture_home_report_for_target_date() {
    let statement = load_fixture();
    let target =
        NaiveDateTime::parse_from_str("2021-05-20 15:30:00", "%Y-%m-%d %H:%M:%S").unwrap();

    let home = statement.home_report(target, &[], &[]);

    assert_eq!(home.cards.len(), 2);
    assert_eq!(home.cards[0].last_digits, "7197");
    assert_eq!(home.cards[0].total_spent, money("8070"));
    assert_eq!(home.cards[0].cashback, money("80.7"));
    assert_eq!(home.cards[1].last_digits, "4556");
    assert_eq!(home.cards[1].total_spent, money("200"));

    let amounts: Vec<Money> = home.top_transactions.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![
        money("7900"),
        money("200"),
        money("120"),
        money("50"),
    ]);
}

#[test]
fn missing_file_means_empty_statement() {
    let statement = Statement::from_path("tests/fixtures/no_such_file.csv").unwrap();
    assert!(statement.is_empty());
    assert!(statement.spending_by_weekday(None).is_empty());
}

#[test]
fn strict_normalization_reports_failure_reasons() {
    let missing = RawRow::from_pairs([
        (columns::AMOUNT, "-100"),
        (columns::CATEGORY, "Фастфуд"),
        (columns::DESCRIPTION, "KFC"),
    ]);
    assert!(matches!(
        normalize_row(&missing),
        Err(StatementError::MissingColumn {
            column: columns::OPERATION_DATE
        })
    ));

    let bad_date = RawRow::from_pairs([
        (columns::OPERATION_DATE, "2021-05-12 10:00:00"),
        (columns::AMOUNT, "-100"),
        (columns::CATEGORY, "Фастфуд"),
        (columns::DESCRIPTION, "KFC"),
    ]);
    assert!(matches!(
        normalize_row(&bad_date),
        Err(StatementError::Date { .. })
    ));

    let bad_amount = RawRow::from_pairs([
        (columns::OPERATION_DATE, "12.05.2021 10:00:00"),
        (columns::AMOUNT, "сто"),
        (columns::CATEGORY, "Фастфуд"),
        (columns::DESCRIPTION, "KFC"),
    ]);
    assert!(matches!(
        normalize_row(&bad_amount),
        Err(StatementError::Amount { .. })
    ));
}

#[test]
fn strict_normalization_builds_full_transaction() {
    let row = RawRow::from_pairs([
        (columns::OPERATION_DATE, "12.05.2021 13:57:38"),
        (columns::STATUS, "OK"),
        (columns::AMOUNT, "-7900,50"),
        (columns::CATEGORY, "Переводы"),
        (columns::DESCRIPTION, "Валерий А."),
        (columns::CARD_NUMBER, "1234567.0"),
    ]);

    let transaction = normalize_row(&row).unwrap();
    assert_eq!(
        transaction.timestamp,
        NaiveDateTime::parse_from_str("12.05.2021 13:57:38", "%d.%m.%Y %H:%M:%S").ok()
    );
    // Десятичная запятая выгрузки приводится к точке.
    assert_eq!(transaction.amount, Some(money("-7900.50")));
    // Числовая форма номера карты усекается до целой части.
    assert_eq!(transaction.card_suffix.as_deref(), Some("4567"));
}

#[test]
fn lenient_normalization_never_fails() {
    let row = RawRow::from_pairs([(columns::DESCRIPTION, "+7 921 11-22-33")]);

    let transaction = normalize_row_lenient(&row);
    assert!(transaction.timestamp.is_none());
    assert!(transaction.amount.is_none());
    assert_eq!(transaction.description.as_deref(), Some("+7 921 11-22-33"));
}
