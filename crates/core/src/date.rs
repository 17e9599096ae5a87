use std::fmt;

use chrono::{DateTime, Datelike, Days, NaiveDate};

use crate::error::{Error, Result};

/// Calendar components of a date, as Booking.com expects them.
/// `month` starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDate {
	pub year: i32,
	pub month: u32,
	pub day: u32,
}

impl From<NaiveDate> for BookingDate {
	fn from(date: NaiveDate) -> Self {
		Self {
			year: date.year(),
			month: date.month(),
			day: date.day(),
		}
	}
}

impl fmt::Display for BookingDate {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
	Date(NaiveDate),
	Text(&'a str),
}

impl From<NaiveDate> for DateInput<'_> {
	fn from(date: NaiveDate) -> Self {
		Self::Date(date)
	}
}

impl<'a> From<&'a str> for DateInput<'a> {
	fn from(text: &'a str) -> Self {
		Self::Text(text)
	}
}

impl<'a> From<&'a String> for DateInput<'a> {
	fn from(text: &'a String) -> Self {
		Self::Text(text)
	}
}

/// Parses `YYYY-MM-DD`, falling back to an RFC 3339 timestamp whose
/// calendar date is read in its own offset.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
	let text = text.trim();

	NaiveDate::parse_from_str(text, "%Y-%m-%d")
		.or_else(|err| {
			DateTime::parse_from_rfc3339(text)
				.map(|dt| dt.date_naive())
				.map_err(|_| err)
		})
		.map_err(|source| Error::InvalidDate {
			input: text.to_string(),
			source,
		})
}

/// Splits a date into year, 1-indexed month and day of month.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if text input is not a recognised date.
pub fn format_date_for_booking<'a>(input: impl Into<DateInput<'a>>) -> Result<BookingDate> {
	match input.into() {
		DateInput::Date(date) => Ok(date.into()),
		DateInput::Text(text) => parse_date(text).map(BookingDate::from),
	}
}

/// Default stay of one night starting `today`, as `YYYY-MM-DD` strings.
#[must_use]
pub fn default_stay(today: NaiveDate) -> (String, String) {
	// NaiveDate::MAX has no successor
	let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

	(
		today.format("%Y-%m-%d").to_string(),
		tomorrow.format("%Y-%m-%d").to_string(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn month_is_one_indexed() {
		let date = format_date_for_booking("2024-03-15").unwrap();

		assert_eq!(date, BookingDate { year: 2024, month: 3, day: 15 });
	}

	#[test]
	fn parsed_date_passes_through() {
		let date = format_date_for_booking(ymd(2025, 1, 31)).unwrap();

		assert_eq!(date, BookingDate { year: 2025, month: 1, day: 31 });
		assert_eq!(date.to_string(), "2025-01-31");
	}

	#[test]
	fn accepts_rfc3339_timestamps() {
		let date = format_date_for_booking("2024-12-31T23:30:00-05:00").unwrap();

		assert_eq!(date, BookingDate { year: 2024, month: 12, day: 31 });
	}

	#[test]
	fn rejects_garbage() {
		for input in ["", "tomorrow", "2024-02-30", "15/03/2024"] {
			assert!(
				matches!(format_date_for_booking(input), Err(Error::InvalidDate { .. })),
				"{input:?} should not parse"
			);
		}
	}

	#[test]
	fn default_stay_crosses_month_and_year() {
		assert_eq!(
			default_stay(ymd(2024, 12, 31)),
			("2024-12-31".to_string(), "2025-01-01".to_string())
		);
		assert_eq!(
			default_stay(ymd(2024, 2, 28)),
			("2024-02-28".to_string(), "2024-02-29".to_string())
		);
	}
}
