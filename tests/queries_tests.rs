use abook::book::AddressBook;
use abook::model::Record;
use abook::queries::birthday_queries::upcoming_birthdays;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        let mut record = Record::create(*name);
        record.set_birthday(birthday).unwrap();
        book.add_record(record).unwrap();
    }
    book
}

// ==========================================================================
// WINDOW AND SHIFT
// ==========================================================================

#[test]
fn saturday_birthday_is_congratulated_on_monday() {
    // 2024-06-10 is a Monday, 2024-06-15 a Saturday.
    let book = book_with_birthdays(&[("Alice", "15.06.1990")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Alice");
    assert_eq!(upcoming[0].birthday, date(2024, 6, 15));
    assert_eq!(upcoming[0].congratulation, date(2024, 6, 17));
}

#[test]
fn sunday_birthday_is_congratulated_on_monday() {
    // 2024-06-16 is a Sunday.
    let book = book_with_birthdays(&[("Alice", "16.06.1990")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, date(2024, 6, 16));
    assert_eq!(upcoming[0].congratulation, date(2024, 6, 17));
}

#[test]
fn weekday_birthday_is_congratulated_same_day() {
    // 2024-06-13 is a Thursday.
    let book = book_with_birthdays(&[("Alice", "13.06.1990")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation, date(2024, 6, 13));
}

#[test]
fn birthday_today_is_included() {
    let book = book_with_birthdays(&[("Alice", "10.06.1985")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation, date(2024, 6, 10));
}

#[test]
fn birthday_beyond_the_window_is_excluded() {
    // 2024-06-20 is a Thursday, ten days out.
    let book = book_with_birthdays(&[("Bob", "20.06.1995")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

    assert!(upcoming.is_empty());
}

#[test]
fn birthday_exactly_seven_days_out_is_included() {
    // 2024-06-17 is a Monday.
    let book = book_with_birthdays(&[("Alice", "17.06.1990")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation, date(2024, 6, 17));
}

#[test]
fn passed_birthday_does_not_wrap_to_next_year() {
    // 2024-06-05 is a Wednesday, already behind a 2024-06-10 reference.
    let book = book_with_birthdays(&[("Alice", "05.06.1990")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

    assert!(upcoming.is_empty());
}

#[test]
fn saturday_birthday_seen_from_sunday_shifts_back_into_the_window() {
    // The shift is applied before the window test: a Saturday birthday one
    // day behind a Sunday reference lands on the coming Monday.
    let book = book_with_birthdays(&[("Alice", "15.06.1990")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 16));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, date(2024, 6, 15));
    assert_eq!(upcoming[0].congratulation, date(2024, 6, 17));
}

#[test]
fn saturday_birthday_near_window_end_is_pushed_out() {
    // From Sunday 2024-06-16, Saturday 2024-06-22 is six days away, but the
    // shifted count is eight.
    let book = book_with_birthdays(&[("Alice", "22.06.1990")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 16));

    assert!(upcoming.is_empty());
}

// ==========================================================================
// EDGE CASES
// ==========================================================================

#[test]
fn records_without_birthday_are_skipped() {
    let mut book = AddressBook::new();
    book.add_record(Record::create("Alice")).unwrap();

    assert!(upcoming_birthdays(&book, date(2024, 6, 10)).is_empty());
}

#[test]
fn empty_book_yields_empty_report() {
    let book = AddressBook::new();
    assert!(upcoming_birthdays(&book, date(2024, 6, 10)).is_empty());
}

#[test]
fn leap_day_birthday_is_observed_on_march_first_in_common_years() {
    // 2025 is a common year; 2025-03-01 is a Saturday, shifted to Monday.
    let book = book_with_birthdays(&[("Alice", "29.02.1996")]);
    let upcoming = upcoming_birthdays(&book, date(2025, 2, 24));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, date(2025, 3, 1));
    assert_eq!(upcoming[0].congratulation, date(2025, 3, 3));
}

#[test]
fn leap_day_birthday_uses_the_real_date_in_leap_years() {
    // 2024-02-29 is a Thursday.
    let book = book_with_birthdays(&[("Alice", "29.02.1996")]);
    let upcoming = upcoming_birthdays(&book, date(2024, 2, 26));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, date(2024, 2, 29));
    assert_eq!(upcoming[0].congratulation, date(2024, 2, 29));
}

// ==========================================================================
// ORDERING
// ==========================================================================

#[test]
fn report_is_ordered_by_congratulation_date_then_name() {
    let book = book_with_birthdays(&[
        ("Alice", "13.06.1990"),
        ("Carol", "11.06.1988"),
        ("Bob", "11.06.1992"),
    ]);
    let upcoming = upcoming_birthdays(&book, date(2024, 6, 10));

    let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Carol", "Alice"]);
}
