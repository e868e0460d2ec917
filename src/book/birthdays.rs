//! Upcoming-birthdays report.
//!
//! Walks the address book and groups contacts whose birthday falls within
//! the next week under the weekday it should be celebrated on. Weekend
//! birthdays are shifted to the following Monday.

use super::AddressBook;
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

/// Forward window of the report: birthdays strictly less than this many
/// days away are included. A birthday exactly 7 days out is excluded.
const WINDOW_DAYS: i64 = 7;

/// One weekday's worth of upcoming birthdays.
///
/// `names` keeps the order in which contacts were stored in the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayBucket {
    /// Full weekday name, e.g. "Wednesday"
    pub weekday: &'static str,
    /// Contact names celebrating on that day
    pub names: Vec<String>,
}

/// Compute the upcoming-birthdays report for the next week.
///
/// `today` is an explicit parameter so the computation is deterministic
/// and testable; callers wanting the wall clock pass
/// `chrono::Local::now().date_naive()`.
///
/// For each contact with a birthday, the birthday is anchored onto the
/// current year (or the next one when it has already passed this year)
/// and included when it lands within the next 6 days. Saturday and Sunday
/// anchors both collapse into the "Monday" bucket. Buckets appear in
/// first-encounter order over the book's insertion order; weekdays with
/// no birthdays are omitted.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<BirthdayBucket> {
    let mut buckets: Vec<BirthdayBucket> = Vec::new();

    for contact in book.contacts() {
        let Some(birthday) = contact.birthday() else {
            continue;
        };

        let mut anchored = anchor_to_year(birthday.date(), today.year());
        if anchored < today {
            // Already passed this year; the next occurrence is next year.
            anchored = anchor_to_year(birthday.date(), today.year() + 1);
        }

        let delta_days = (anchored - today).num_days();
        if delta_days >= WINDOW_DAYS {
            continue;
        }

        let weekday = match anchored.weekday() {
            Weekday::Sat | Weekday::Sun => Weekday::Mon,
            day => day,
        };
        let weekday = weekday_name(weekday);

        debug!(
            contact = contact.name(),
            %anchored,
            delta_days,
            weekday,
            "birthday within window"
        );

        match buckets.iter_mut().find(|b| b.weekday == weekday) {
            Some(bucket) => bucket.names.push(contact.name().to_string()),
            None => buckets.push(BirthdayBucket {
                weekday,
                names: vec![contact.name().to_string()],
            }),
        }
    }

    buckets
}

/// Re-anchor a birthday onto the given year.
///
/// Feb 29 has no counterpart in a non-leap year; it anchors to Feb 28.
fn anchor_to_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday.with_year(year).unwrap_or_else(|| {
        // Only reachable for Feb 29; Feb 28 exists in every year.
        NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 is a valid date in every year")
    })
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
