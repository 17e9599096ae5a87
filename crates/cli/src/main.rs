#![warn(clippy::pedantic)]

use std::{
	cell::RefCell,
	io::{self, Write},
	process::ExitCode,
};

use anyhow::{Context, Result};
use booking_button_core::{handle_book_hotel, ClickOutcome, Host, SearchOptions, SearchQuery};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Print the Booking.com search URL for a destination and stay")]
struct Args {
	/// City or destination name, e.g. "Paris, France"
	#[clap(env = "BOOKING_DESTINATION")]
	destination: String,
	/// Check-in date (YYYY-MM-DD). Unless both dates are given, the stay
	/// is today to tomorrow
	#[clap(short = 'i', long, env = "BOOKING_CHECKIN")]
	checkin: Option<String>,
	/// Check-out date (YYYY-MM-DD)
	#[clap(short = 'o', long, env = "BOOKING_CHECKOUT")]
	checkout: Option<String>,
	/// Time zone that decides what "today" is
	#[clap(short, long, env = "BOOKING_TIMEZONE", default_value = "UTC")]
	timezone: Tz,
}

/// Prints the URL to `out` and notifications to stderr. A failed write is
/// kept for [`Terminal::finish`].
struct Terminal<W> {
	timezone: Tz,
	out: RefCell<W>,
	write_error: RefCell<Option<io::Error>>,
}

impl<W: Write> Terminal<W> {
	fn new(timezone: Tz, out: W) -> Self {
		Self {
			timezone,
			out: RefCell::new(out),
			write_error: RefCell::default(),
		}
	}

	fn finish(self) -> io::Result<()> {
		match self.write_error.into_inner() {
			Some(err) => Err(err),
			None => self.out.borrow_mut().flush(),
		}
	}
}

impl<W: Write> Host for Terminal<W> {
	fn alert(&self, message: &str) {
		eprintln!("{message}");
	}

	fn open(&self, url: &str) {
		if let Err(err) = writeln!(self.out.borrow_mut(), "{url}") {
			self.write_error.borrow_mut().get_or_insert(err);
		}
	}

	fn today(&self) -> NaiveDate {
		Utc::now().with_timezone(&self.timezone).date_naive()
	}
}

fn main() -> Result<ExitCode> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = Args::parse();
	let mut query = SearchQuery::default().with(&SearchOptions {
		destination: Some(args.destination),
		check_in: args.checkin,
		check_out: args.checkout,
	});
	let terminal = Terminal::new(args.timezone, io::stdout().lock());

	// the user has already been told why through `Host::alert`
	let code = match handle_book_hotel(&mut query, &terminal) {
		ClickOutcome::Opened(_) => ExitCode::SUCCESS,
		ClickOutcome::MissingDestination | ClickOutcome::InvalidQuery(_) => ExitCode::FAILURE,
	};

	terminal.finish().context("failed to write booking url")?;

	Ok(code)
}
