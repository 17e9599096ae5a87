use std::fmt;

use thiserror::Error;

/// Which end of the stay a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stay {
	CheckIn,
	CheckOut,
}

impl fmt::Display for Stay {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			Self::CheckIn => "check-in",
			Self::CheckOut => "check-out",
		})
	}
}

#[derive(Debug, Error)]
pub enum Error {
	#[error("destination is empty")]
	MissingDestination,
	#[error("{0} date is missing")]
	MissingDate(Stay),
	#[error("invalid date {input:?}: {source}")]
	InvalidDate {
		input: String,
		#[source]
		source: chrono::ParseError,
	},
	#[error("failed to build search url: {0}")]
	Url(#[from] url::ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
