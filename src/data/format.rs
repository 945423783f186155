//! Locale-style number formatting for populations and areas.

/// Separator inserted between groups of three digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
	pub separator: char,
	pub decimal_point: char,
}

impl Default for Grouping {
	fn default() -> Self {
		Self {
			separator: ',',
			decimal_point: '.',
		}
	}
}

impl Grouping {
	#[must_use]
	pub fn with_separator(separator: char) -> Self {
		let decimal_point = if separator == '.' { ',' } else { '.' };
		Self {
			separator,
			decimal_point,
		}
	}

	/// Format an integer with grouped thousands, e.g. `67,391,582`.
	pub fn integer(&self, value: u64) -> String {
		group_digits(&value.to_string(), self.separator)
	}

	/// Format a decimal value keeping at most three fractional digits and
	/// trimming trailing zeros, e.g. `551,695` or `0.44`.
	pub fn decimal(&self, value: f64) -> String {
		if !value.is_finite() {
			return value.to_string();
		}

		let negative = value < 0.0;
		let rendered = format!("{:.3}", value.abs());
		let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
		let fraction = fraction.trim_end_matches('0');

		let mut out = String::new();
		if negative && (whole != "0" || !fraction.is_empty()) {
			out.push('-');
		}
		out.push_str(&group_digits(whole, self.separator));
		if !fraction.is_empty() {
			out.push(self.decimal_point);
			out.push_str(fraction);
		}
		out
	}

	/// Format an area in square kilometres.
	pub fn area(&self, value: f64) -> String {
		format!("{} km²", self.decimal(value))
	}
}

fn group_digits(digits: &str, separator: char) -> String {
	let len = digits.len();
	let mut out = String::with_capacity(len + len / 3);
	for (index, ch) in digits.chars().enumerate() {
		if index > 0 && (len - index) % 3 == 0 {
			out.push(separator);
		}
		out.push(ch);
	}
	out
}
