//! End-to-end tests for the upcoming-birthdays report.
//!
//! The report takes an explicit `today`, so every scenario here pins the
//! clock and checks the exact buckets that come out.

use address_book::{upcoming_birthdays, AddressBook, Contact};
use chrono::NaiveDate;

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn add(book: &mut AddressBook, name: &str, birthday: Option<&str>) {
    let mut contact = Contact::new(name).unwrap();
    if let Some(birthday) = birthday {
        contact.add_birthday(birthday).unwrap();
    }
    book.add_record(contact);
}

#[test]
fn test_weekday_birthday_two_days_out() {
    // Monday 10.06.2024; Ann's birthday is Wednesday.
    let mut book = AddressBook::new();
    add(&mut book, "Ann", Some("12.06.1990"));

    let report = upcoming_birthdays(&book, date(10, 6, 2024));
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].weekday, "Wednesday");
    assert_eq!(report[0].names, vec!["Ann"]);
}

#[test]
fn test_sunday_birthday_shifts_to_monday() {
    // 16.06.2024 is a Sunday, 6 days out: inside the window, shifted.
    let mut book = AddressBook::new();
    add(&mut book, "Bo", Some("16.06.1985"));

    let report = upcoming_birthdays(&book, date(10, 6, 2024));
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].weekday, "Monday");
    assert_eq!(report[0].names, vec!["Bo"]);
}

#[test]
fn test_seven_days_out_is_excluded() {
    // Exactly 7 days away is outside the strict window.
    let mut book = AddressBook::new();
    add(&mut book, "Cy", Some("17.06.1970"));

    assert!(upcoming_birthdays(&book, date(10, 6, 2024)).is_empty());
}

#[test]
fn test_year_rollover_across_new_year() {
    // From New Year's Eve, a Jan 2 birthday is two days out next year.
    let mut book = AddressBook::new();
    add(&mut book, "Di", Some("02.01.1999"));

    let report = upcoming_birthdays(&book, date(31, 12, 2024));
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].names, vec!["Di"]);
}

#[test]
fn test_mixed_book_full_week() {
    let mut book = AddressBook::new();
    add(&mut book, "Ann", Some("12.06.1990")); // Wednesday
    add(&mut book, "Bo", Some("16.06.1985")); // Sunday -> Monday
    add(&mut book, "Cy", Some("17.06.1970")); // 7 days out -> excluded
    add(&mut book, "Ed", Some("12.06.2001")); // Wednesday, after Ann
    add(&mut book, "NoDate", None); // skipped

    let report = upcoming_birthdays(&book, date(10, 6, 2024));
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].weekday, "Wednesday");
    assert_eq!(report[0].names, vec!["Ann", "Ed"]);
    assert_eq!(report[1].weekday, "Monday");
    assert_eq!(report[1].names, vec!["Bo"]);
}

#[test]
fn test_leap_day_birthday_in_non_leap_year() {
    // No Feb 29 in 2025: the birthday anchors to Feb 28 (a Friday).
    let mut book = AddressBook::new();
    add(&mut book, "Leap", Some("29.02.2020"));

    let report = upcoming_birthdays(&book, date(24, 2, 2025));
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].weekday, "Friday");
    assert_eq!(report[0].names, vec!["Leap"]);
}
