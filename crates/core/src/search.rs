use url::Url;

use crate::{
	date::{format_date_for_booking, DateInput},
	error::{Error, Result, Stay},
	query::is_destination,
};

pub const SEARCH_RESULTS_URL: &str = "https://www.booking.com/searchresults.html";

/// Builds the Booking.com search results URL for a destination and stay.
///
/// Query parameters are emitted in a fixed order: `ss`, then the check-in
/// year, month and day, then the check-out year, month and day. Values are
/// form-urlencoded, so `"Paris, France"` becomes `Paris%2C+France`.
///
/// A check-out date on or before check-in is logged but not rejected.
///
/// # Errors
///
/// Fails if the destination is blank, a date is absent, or a date cannot be
/// parsed. Each failure is also logged.
pub fn build_search_url<'a, 'b>(
	destination: &str,
	check_in: Option<impl Into<DateInput<'a>>>,
	check_out: Option<impl Into<DateInput<'b>>>,
) -> Result<String> {
	let url = try_build(destination, check_in, check_out).inspect_err(|err| {
		log::warn!("could not build booking url for {destination:?}: {err}");
	})?;

	Ok(url.into())
}

fn try_build<'a, 'b>(
	destination: &str,
	check_in: Option<impl Into<DateInput<'a>>>,
	check_out: Option<impl Into<DateInput<'b>>>,
) -> Result<Url> {
	if !is_destination(destination) {
		return Err(Error::MissingDestination);
	}

	let check_in = check_in.ok_or(Error::MissingDate(Stay::CheckIn))?;
	let check_out = check_out.ok_or(Error::MissingDate(Stay::CheckOut))?;

	let check_in = format_date_for_booking(check_in)?;
	let check_out = format_date_for_booking(check_out)?;

	if (check_out.year, check_out.month, check_out.day)
		<= (check_in.year, check_in.month, check_in.day)
	{
		log::warn!("check-out {check_out} is not after check-in {check_in}");
	}

	let url = Url::parse_with_params(SEARCH_RESULTS_URL, &[
		("ss", destination.to_string()),
		("checkin_year", check_in.year.to_string()),
		("checkin_month", check_in.month.to_string()),
		("checkin_day", check_in.day.to_string()),
		("checkout_year", check_out.year.to_string()),
		("checkout_month", check_out.month.to_string()),
		("checkout_day", check_out.day.to_string()),
	])?;

	Ok(url)
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;

	const PARIS: &str = "https://www.booking.com/searchresults.html?ss=Paris%2C+France&checkin_year=2024&checkin_month=3&checkin_day=15&checkout_year=2024&checkout_month=3&checkout_day=18";

	#[test]
	fn paris_matches_byte_for_byte() {
		let url = build_search_url("Paris, France", Some("2024-03-15"), Some("2024-03-18")).unwrap();

		assert_eq!(url, PARIS);
	}

	#[test]
	fn accepts_parsed_dates() {
		let url = build_search_url(
			"Paris, France",
			NaiveDate::from_ymd_opt(2024, 3, 15),
			NaiveDate::from_ymd_opt(2024, 3, 18),
		)
		.unwrap();

		assert_eq!(url, PARIS);
	}

	#[test]
	fn destination_decodes_back() {
		let url = build_search_url("São Paulo & Rio", Some("2024-01-09"), Some("2024-10-01")).unwrap();
		let url = Url::parse(&url).unwrap();
		let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();

		assert_eq!(pairs[0], ("ss".to_string(), "São Paulo & Rio".to_string()));
		assert_eq!(pairs[2], ("checkin_month".to_string(), "1".to_string()));
		assert_eq!(pairs[3], ("checkin_day".to_string(), "9".to_string()));
		assert_eq!(pairs.len(), 7);
	}

	#[test]
	fn empty_destination_fails() {
		for destination in ["", "   "] {
			let err = build_search_url(destination, Some("2024-03-15"), Some("2024-03-18")).unwrap_err();

			assert!(matches!(err, Error::MissingDestination));
		}
	}

	#[test]
	fn missing_dates_fail() {
		let err = build_search_url("Rome", None::<&str>, Some("2024-03-18")).unwrap_err();
		assert!(matches!(err, Error::MissingDate(Stay::CheckIn)));

		let err = build_search_url("Rome", Some("2024-03-15"), None::<&str>).unwrap_err();
		assert!(matches!(err, Error::MissingDate(Stay::CheckOut)));
	}

	#[test]
	fn unparseable_date_fails() {
		let err = build_search_url("Rome", Some("next friday"), Some("2024-03-18")).unwrap_err();

		assert!(matches!(err, Error::InvalidDate { ref input, .. } if input == "next friday"));
	}

	#[test]
	fn reversed_stay_is_still_built() {
		let url = build_search_url("Rome", Some("2024-03-18"), Some("2024-03-15")).unwrap();

		assert!(url.ends_with("checkout_year=2024&checkout_month=3&checkout_day=15"));
	}
}
