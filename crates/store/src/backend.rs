// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! `LogBackend` over the record store

use std::path::PathBuf;

use sqlog_core::{FormatStyle, LogBackend, LogError, LogLevel, Record};

use crate::error::StoreError;
use crate::store::RecordStore;

/// Persists every accepted record as one row in the record store.
///
/// The stored text is the record rendered under the configured
/// [`FormatStyle`]; the default `MessageOnly` stores the message payload
/// verbatim, so read-back equals what was emitted. Styles that embed
/// timestamps (`Timeline`, `Json`) are explicit opt-ins.
pub struct StoreBackend {
	store: RecordStore,
	style: FormatStyle,
	level: Option<LogLevel>,
}

impl StoreBackend {
	/// Open (or create) the store at `path` and validate its schema.
	///
	/// Schema mismatch is a configuration error: it propagates to the
	/// caller attaching the backend and stops setup.
	pub fn new(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		Ok(Self::with_store(RecordStore::open(path)?))
	}

	/// Wrap an already-opened store.
	pub fn with_store(store: RecordStore) -> Self {
		Self {
			store,
			style: FormatStyle::MessageOnly,
			level: None,
		}
	}

	pub fn format_style(mut self, style: FormatStyle) -> Self {
		self.style = style;
		self
	}

	/// Minimum level this backend accepts; `None` accepts everything.
	pub fn level(mut self, level: LogLevel) -> Self {
		self.level = Some(level);
		self
	}

	pub fn store(&self) -> &RecordStore {
		&self.store
	}
}

impl LogBackend for StoreBackend {
	fn name(&self) -> &'static str {
		"store"
	}

	fn accepts(&self, record: &Record) -> bool {
		self.level.is_none_or(|min| record.level >= min)
	}

	fn write(&self, record: &Record) -> sqlog_core::Result<()> {
		let text = self.style.render(record)?;
		self.store
			.append(&text)
			.map_err(|e| LogError::backend(self.name(), e))?;
		Ok(())
	}
}
