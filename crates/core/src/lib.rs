#![warn(clippy::pedantic)]

pub mod button;
pub mod date;
pub mod error;
pub mod handler;
pub mod query;
pub mod search;

pub use date::{format_date_for_booking, BookingDate};
pub use error::{Error, Result, Stay};
pub use handler::{handle_book_hotel, ClickOutcome, Host};
pub use query::{SearchOptions, SearchQuery};
pub use search::build_search_url;
