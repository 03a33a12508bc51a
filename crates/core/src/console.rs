// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Colorized console backend

use std::io::Write as _;

use colored::Colorize;

use crate::backend::LogBackend;
use crate::error::{LogError, Result};
use crate::format::FormatStyle;
use crate::record::{LogLevel, Record};

/// Console backend with per-level coloring.
///
/// Writes to stdout by default; `stderr_for_errors` routes `Warn` and above
/// to stderr so they survive stdout redirection.
pub struct ConsoleBackend {
	level: LogLevel,
	style: FormatStyle,
	color: bool,
	stderr_for_errors: bool,
}

impl ConsoleBackend {
	pub fn new() -> Self {
		Self {
			level: LogLevel::Trace,
			style: FormatStyle::Timeline,
			color: true,
			stderr_for_errors: false,
		}
	}

	/// Minimum level this backend accepts.
	pub fn level(mut self, level: LogLevel) -> Self {
		self.level = level;
		self
	}

	pub fn format_style(mut self, style: FormatStyle) -> Self {
		self.style = style;
		self
	}

	pub fn color(mut self, enabled: bool) -> Self {
		self.color = enabled;
		self
	}

	pub fn stderr_for_errors(mut self, enabled: bool) -> Self {
		self.stderr_for_errors = enabled;
		self
	}

	fn paint(&self, level: LogLevel, line: &str) -> String {
		// Pad before coloring so ANSI escapes don't skew the width.
		let tag = format!("{:>8}", level.as_str());
		if !self.color {
			return format!("{} {}", tag, line);
		}
		let tag = match level {
			LogLevel::Trace => tag.dimmed(),
			LogLevel::Debug => tag.cyan(),
			LogLevel::Info => tag.green(),
			LogLevel::Warn => tag.yellow(),
			LogLevel::Error => tag.red(),
			LogLevel::Critical => tag.red().bold(),
		};
		format!("{} {}", tag, line)
	}
}

impl Default for ConsoleBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl LogBackend for ConsoleBackend {
	fn name(&self) -> &'static str {
		"console"
	}

	fn accepts(&self, record: &Record) -> bool {
		record.level >= self.level
	}

	fn write(&self, record: &Record) -> Result<()> {
		let line = self.paint(record.level, &self.style.render(record)?);

		let to_stderr =
			self.stderr_for_errors && record.level >= LogLevel::Warn;
		let result = if to_stderr {
			writeln!(std::io::stderr().lock(), "{}", line)
		} else {
			writeln!(std::io::stdout().lock(), "{}", line)
		};
		result.map_err(|e| LogError::backend(self.name(), e))
	}

	fn flush(&self) -> Result<()> {
		std::io::stdout()
			.flush()
			.map_err(|e| LogError::backend(self.name(), e))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accepts_respects_level() {
		let console = ConsoleBackend::new().level(LogLevel::Info);
		let debug = Record::new(LogLevel::Debug, "app", "x");
		let warn = Record::new(LogLevel::Warn, "app", "y");

		assert!(!console.accepts(&debug));
		assert!(console.accepts(&warn));
	}

	#[test]
	fn test_paint_without_color_keeps_plain_tag() {
		let console = ConsoleBackend::new().color(false);
		let line = console.paint(LogLevel::Warn, "careful");
		assert_eq!(line, "    WARN careful");
	}
}
