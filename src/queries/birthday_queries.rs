use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::book::AddressBook;

/// One entry of the congratulation report: whose birthday falls in the
/// coming week, the anniversary date itself, and the working day on which
/// to congratulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: NaiveDate,
    pub congratulation: NaiveDate,
}

/// Contacts whose birthday anniversary falls within the next 7 days of
/// `as_of`, with weekend anniversaries shifted to the following Monday.
///
/// A Saturday anniversary is congratulated 2 days later, a Sunday one 1 day
/// later; the shift is applied to the day count before the inclusive 0..=7
/// window test, so the window is measured in congratulation days. Contacts
/// without a birthday are skipped. The result is ordered by congratulation
/// date, then name.
pub fn upcoming_birthdays(book: &AddressBook, as_of: NaiveDate) -> Vec<UpcomingBirthday> {
    let mut upcoming: Vec<UpcomingBirthday> = book
        .iter()
        .filter_map(|record| {
            let birthday = record.birthday?;
            let this_year = anniversary(birthday.date(), as_of.year());

            let mut days_until = (this_year - as_of).num_days();
            days_until += match this_year.weekday() {
                Weekday::Sat => 2,
                Weekday::Sun => 1,
                _ => 0,
            };
            if !(0..=7).contains(&days_until) {
                return None;
            }

            Some(UpcomingBirthday {
                name: record.name.clone(),
                birthday: this_year,
                congratulation: as_of + Duration::days(days_until),
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.congratulation
            .cmp(&b.congratulation)
            .then_with(|| a.name.cmp(&b.name))
    });
    upcoming
}

/// The birthday's month and day in the given year. A 29.02 birthday in a
/// common year is observed on March 1.
fn anniversary(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birthday)
}
