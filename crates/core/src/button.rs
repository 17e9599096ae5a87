pub const BUTTON_LABEL: &str = "Book Hotel";
pub const BUTTON_CLASS: &str = "booking-hotel-btn";

/// Fallback look of the booking button, used when the page does not style
/// `.booking-hotel-btn` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
	pub background: &'static str,
	pub hover_background: &'static str,
	pub color: &'static str,
	pub font_weight: u16,
	pub font_size: &'static str,
	pub padding: &'static str,
	pub border_radius: &'static str,
}

impl Default for ButtonStyle {
	fn default() -> Self {
		Self {
			background: "#2563eb",
			hover_background: "#1d4ed8",
			color: "white",
			font_weight: 600,
			font_size: "16px",
			padding: "12px 24px",
			border_radius: "6px",
		}
	}
}

impl ButtonStyle {
	/// Inline `style` attribute for the button at rest.
	#[must_use]
	pub fn css_text(&self) -> String {
		format!(
			"background-color: {}; color: {}; font-weight: {}; padding: {}; border: none; \
			 border-radius: {}; cursor: pointer; transition: background-color 0.2s; font-size: {};",
			self.background,
			self.color,
			self.font_weight,
			self.padding,
			self.border_radius,
			self.font_size,
		)
	}

	#[must_use]
	pub fn background_for(&self, hovered: bool) -> &'static str {
		if hovered {
			self.hover_background
		} else {
			self.background
		}
	}
}
