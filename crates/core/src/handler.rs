use chrono::{NaiveDate, Utc};

use crate::{error::Error, query::SearchQuery};

pub const MISSING_DESTINATION_MESSAGE: &str =
	"Please set the destination before searching for hotels.";
pub const INVALID_QUERY_MESSAGE: &str =
	"Unable to generate booking URL. Please check your search parameters.";

/// The environment a booking button runs in.
pub trait Host {
	/// Shows a blocking notification to the user.
	fn alert(&self, message: &str);

	/// Opens `url` in a new browsing context with no reference back to the
	/// opener.
	fn open(&self, url: &str);

	/// The calendar date default stays start on.
	fn today(&self) -> NaiveDate {
		Utc::now().date_naive()
	}
}

#[derive(Debug)]
pub enum ClickOutcome {
	Opened(String),
	MissingDestination,
	InvalidQuery(Error),
}

impl ClickOutcome {
	#[must_use]
	pub fn url(&self) -> Option<&str> {
		match self {
			Self::Opened(url) => Some(url),
			_ => None,
		}
	}
}

/// Runs a click on the booking button against `query`.
///
/// Missing dates are replaced by a one-night stay from [`Host::today`] and
/// the replacement is written back to `query`, so later clicks reuse it.
pub fn handle_book_hotel<H: Host + ?Sized>(query: &mut SearchQuery, host: &H) -> ClickOutcome {
	if !query.has_destination() {
		log::warn!("booking button clicked without a destination");
		host.alert(MISSING_DESTINATION_MESSAGE);

		return ClickOutcome::MissingDestination;
	}

	if query.fill_default_dates(host.today()) {
		log::info!(
			"using default stay {} to {}",
			query.check_in.as_deref().unwrap_or_default(),
			query.check_out.as_deref().unwrap_or_default()
		);
	}

	match query.search_url() {
		Ok(url) => {
			log::debug!("opening {url}");
			host.open(&url);

			ClickOutcome::Opened(url)
		}
		Err(err) => {
			host.alert(INVALID_QUERY_MESSAGE);

			ClickOutcome::InvalidQuery(err)
		}
	}
}
