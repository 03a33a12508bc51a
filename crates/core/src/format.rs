// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Record rendering styles

use crate::error::Result;
use crate::record::Record;

/// How a backend renders a record to text.
///
/// The rendered text is what a persisting backend stores, so the style is
/// part of that backend's round-trip contract: under `MessageOnly` the
/// stored text equals the message payload exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
	/// The raw message payload, nothing else.
	#[default]
	MessageOnly,
	/// `<module> <timestamp>: <message>`, structured fields appended.
	Timeline,
	/// The full record as a single JSON object.
	Json,
}

impl FormatStyle {
	/// Render a record to its textual form.
	pub fn render(&self, record: &Record) -> Result<String> {
		match self {
			FormatStyle::MessageOnly => {
				Ok(record.message.clone())
			}
			FormatStyle::Timeline => {
				let mut text = format!(
					"{} {}: {}",
					record.module,
					record.timestamp
						.format("%Y-%m-%d %H:%M:%S%.3f"),
					record.message
				);
				let mut keys: Vec<&String> =
					record.fields.keys().collect();
				keys.sort();
				for key in keys {
					text.push_str(&format!(
						" {}={}",
						key, record.fields[key]
					));
				}
				Ok(text)
			}
			FormatStyle::Json => {
				Ok(serde_json::to_string(record)?)
			}
		}
	}
}
