#![warn(clippy::pedantic)]

use std::{cell::RefCell, rc::Rc};

use booking_button_core::{
	button::{ButtonStyle, BUTTON_CLASS, BUTTON_LABEL},
	handle_book_hotel, Host, SearchOptions, SearchQuery,
};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{HtmlButtonElement, HtmlElement};

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());
}

struct Browser;

impl Host for Browser {
	fn alert(&self, message: &str) {
		let Some(window) = web_sys::window() else {
			log::error!("no window to alert in: {message}");
			return;
		};

		if let Err(err) = window.alert_with_message(message) {
			log::error!("alert failed: {err:?}");
		}
	}

	fn open(&self, url: &str) {
		let Some(window) = web_sys::window() else {
			log::error!("no window to open {url} in");
			return;
		};

		if let Err(err) =
			window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
		{
			log::error!("failed to open {url}: {err:?}");
		}
	}
}

#[wasm_bindgen(js_name = BookingDate)]
#[derive(Debug, Clone, Copy)]
pub struct JsBookingDate {
	pub year: i32,
	pub month: u32,
	pub day: u32,
}

impl From<booking_button_core::BookingDate> for JsBookingDate {
	fn from(date: booking_button_core::BookingDate) -> Self {
		Self {
			year: date.year,
			month: date.month,
			day: date.day,
		}
	}
}

/// Accepts a `Date` (read in local time) or a date string.
#[wasm_bindgen(js_name = formatDateForBooking)]
#[must_use]
pub fn format_date_for_booking(date: &JsValue) -> Option<JsBookingDate> {
	if let Some(date) = date.dyn_ref::<js_sys::Date>() {
		if date.get_time().is_nan() {
			log::error!("invalid Date passed to formatDateForBooking");
			return None;
		}

		return Some(JsBookingDate {
			year: i32::try_from(date.get_full_year()).ok()?,
			month: date.get_month() + 1,
			day: date.get_date(),
		});
	}

	let Some(text) = date.as_string() else {
		log::error!("expected a Date or a string, got {date:?}");
		return None;
	};

	booking_button_core::format_date_for_booking(text.as_str())
		.inspect_err(|err| log::error!("{err}"))
		.ok()
		.map(JsBookingDate::from)
}

#[wasm_bindgen(js_name = buildSearchUrl)]
#[must_use]
pub fn build_search_url(
	destination: &str,
	check_in: Option<String>,
	check_out: Option<String>,
) -> Option<String> {
	let present = |date: &Option<String>| date.as_ref().filter(|d| !d.is_empty()).cloned();

	booking_button_core::build_search_url(destination, present(&check_in).as_ref(), present(&check_out).as_ref()).ok()
}

fn string_field(options: &JsValue, keys: &[&str]) -> Option<String> {
	keys.iter()
		.filter_map(|key| js_sys::Reflect::get(options, &JsValue::from_str(key)).ok())
		.find_map(|value| value.as_string().filter(|v| !v.is_empty()))
}

/// Reads `{ destination, checkInDate, checkOutDate }` from a plain object.
fn read_options(options: &JsValue) -> SearchOptions {
	if !options.is_object() {
		return SearchOptions::default();
	}

	SearchOptions {
		destination: string_field(options, &["destination"]),
		check_in: string_field(options, &["checkInDate", "checkinDate"]),
		check_out: string_field(options, &["checkOutDate", "checkoutDate"]),
	}
}

/// A set of booking buttons sharing one search query. Clones share the
/// query too.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct BookingWidget {
	query: Rc<RefCell<SearchQuery>>,
	style: ButtonStyle,
}

#[wasm_bindgen]
impl BookingWidget {
	#[wasm_bindgen(constructor)]
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[wasm_bindgen(getter)]
	#[must_use]
	pub fn destination(&self) -> String {
		self.query.borrow().destination.clone()
	}

	#[wasm_bindgen(getter, js_name = checkInDate)]
	#[must_use]
	pub fn check_in_date(&self) -> Option<String> {
		self.query.borrow().check_in.clone()
	}

	#[wasm_bindgen(getter, js_name = checkOutDate)]
	#[must_use]
	pub fn check_out_date(&self) -> Option<String> {
		self.query.borrow().check_out.clone()
	}

	/// Applies `options` to the shared query.
	pub fn configure(&self, options: &JsValue) {
		self.query.borrow_mut().apply(&read_options(options));
	}

	/// Runs a click against the shared query and returns the opened URL.
	#[wasm_bindgen(js_name = handleClick)]
	pub fn handle_click(&self) -> Option<String> {
		handle_click(&self.query).url().map(String::from)
	}

	/// Creates a detached button bound to this widget's query.
	///
	/// # Errors
	///
	/// Fails if there is no document or the DOM rejects the element.
	#[wasm_bindgen(js_name = createButton)]
	pub fn create_button(&self) -> Result<HtmlButtonElement, JsValue> {
		let document = web_sys::window()
			.and_then(|w| w.document())
			.ok_or_else(|| JsValue::from_str("no document"))?;
		let button = document
			.create_element("button")?
			.dyn_into::<HtmlButtonElement>()?;

		button.set_text_content(Some(BUTTON_LABEL));
		button.set_class_name(BUTTON_CLASS);
		button.style().set_css_text(&self.style.css_text());

		let query = Rc::clone(&self.query);
		let on_click = Closure::<dyn FnMut()>::new(move || {
			handle_click(&query);
		});
		button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
		on_click.forget();

		for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
			let target: HtmlElement = button.clone().into();
			let background = self.style.background_for(hovered);
			let listener = Closure::<dyn FnMut()>::new(move || {
				if let Err(err) = target.style().set_property("background-color", background) {
					log::error!("failed to set hover colour: {err:?}");
				}
			});
			button.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
			listener.forget();
		}

		Ok(button)
	}

	/// Applies `options` and appends a new button to the element with id
	/// `container_id`. Returns the button, or `undefined` if the container is
	/// missing.
	pub fn initialize(&self, container_id: &str, options: &JsValue) -> Option<HtmlButtonElement> {
		let container = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(container_id));
		let Some(container) = container else {
			log::error!("container with id {container_id:?} not found");
			return None;
		};

		self.configure(options);

		let button = self
			.create_button()
			.inspect_err(|err| log::error!("failed to create booking button: {err:?}"))
			.ok()?;

		if let Err(err) = container.append_child(&button) {
			log::error!("failed to append booking button: {err:?}");
			return None;
		}

		Some(button)
	}
}

fn handle_click(query: &RefCell<SearchQuery>) -> booking_button_core::ClickOutcome {
	handle_book_hotel(&mut query.borrow_mut(), &Browser)
}

thread_local! {
	static PAGE_WIDGET: BookingWidget = BookingWidget::new();
}

/// The widget behind [`initialize_booking_button`], whose query is shared by
/// every button it appends.
#[wasm_bindgen(js_name = pageWidget)]
#[must_use]
pub fn page_widget() -> BookingWidget {
	PAGE_WIDGET.with(BookingWidget::clone)
}

/// Appends a booking button to `container_id` using the page's shared
/// widget, so every button on the page sees the same query.
#[wasm_bindgen(js_name = initializeBookingButton)]
pub fn initialize_booking_button(container_id: &str, options: &JsValue) -> Option<HtmlButtonElement> {
	PAGE_WIDGET.with(|widget| widget.initialize(container_id, options))
}
