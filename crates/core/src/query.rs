use chrono::NaiveDate;

use crate::{date::default_stay, error::Result, search::build_search_url};

/// Overrides applied to a [`SearchQuery`]. Absent or empty fields leave the
/// query untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
	pub destination: Option<String>,
	pub check_in: Option<String>,
	pub check_out: Option<String>,
}

/// Destination and stay that drive the booking search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
	pub destination: String,
	/// `YYYY-MM-DD`
	pub check_in: Option<String>,
	/// `YYYY-MM-DD`
	pub check_out: Option<String>,
}

pub(crate) fn is_destination(destination: &str) -> bool {
	!destination.trim().is_empty()
}

fn present(value: Option<&String>) -> Option<&String> {
	value.filter(|v| !v.is_empty())
}

impl SearchQuery {
	#[must_use]
	pub fn new(destination: impl Into<String>) -> Self {
		Self {
			destination: destination.into(),
			..Self::default()
		}
	}

	/// Whether the destination has any non-whitespace text.
	#[must_use]
	pub fn has_destination(&self) -> bool {
		is_destination(&self.destination)
	}

	pub fn apply(&mut self, options: &SearchOptions) {
		if let Some(destination) = present(options.destination.as_ref()) {
			self.destination.clone_from(destination);
		}

		if let Some(check_in) = present(options.check_in.as_ref()) {
			self.check_in = Some(check_in.clone());
		}

		if let Some(check_out) = present(options.check_out.as_ref()) {
			self.check_out = Some(check_out.clone());
		}
	}

	#[must_use]
	pub fn with(mut self, options: &SearchOptions) -> Self {
		self.apply(options);
		self
	}

	/// Replaces both dates with a one-night stay from `today` when either is
	/// missing. Returns whether the query changed.
	pub fn fill_default_dates(&mut self, today: NaiveDate) -> bool {
		if present(self.check_in.as_ref()).is_some() && present(self.check_out.as_ref()).is_some() {
			return false;
		}

		let (check_in, check_out) = default_stay(today);

		self.check_in = Some(check_in);
		self.check_out = Some(check_out);

		true
	}

	/// # Errors
	///
	/// See [`build_search_url`].
	pub fn search_url(&self) -> Result<String> {
		build_search_url(
			&self.destination,
			present(self.check_in.as_ref()),
			present(self.check_out.as_ref()),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn options(destination: Option<&str>, check_in: Option<&str>, check_out: Option<&str>) -> SearchOptions {
		SearchOptions {
			destination: destination.map(String::from),
			check_in: check_in.map(String::from),
			check_out: check_out.map(String::from),
		}
	}

	#[test]
	fn apply_overwrites_only_present_fields() {
		let mut query = SearchQuery {
			destination: "London, UK".into(),
			check_in: Some("2024-03-20".into()),
			check_out: Some("2024-03-23".into()),
		};

		query.apply(&options(None, Some("2024-04-01"), Some("")));

		assert_eq!(query.destination, "London, UK");
		assert_eq!(query.check_in.as_deref(), Some("2024-04-01"));
		assert_eq!(query.check_out.as_deref(), Some("2024-03-23"));
	}

	#[test]
	fn defaults_fill_when_either_date_missing() {
		let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
		let mut query = SearchQuery::new("Oslo").with(&options(None, Some("2026-11-01"), None));

		assert!(query.fill_default_dates(today));
		assert_eq!(query.check_in.as_deref(), Some("2026-10-19"));
		assert_eq!(query.check_out.as_deref(), Some("2026-10-20"));

		assert!(!query.fill_default_dates(today.succ_opt().unwrap()));
		assert_eq!(query.check_in.as_deref(), Some("2026-10-19"));
	}

	#[test]
	fn blank_destination_is_not_a_destination() {
		assert!(SearchQuery::new("Oslo").has_destination());
		assert!(!SearchQuery::new(" \t ").has_destination());
		assert!(!SearchQuery::default().has_destination());
	}

	#[test]
	fn search_url_treats_empty_dates_as_missing() {
		let query = SearchQuery {
			destination: "Oslo".into(),
			check_in: Some(String::new()),
			check_out: Some("2026-10-20".into()),
		};

		assert!(query.search_url().is_err());
	}
}
