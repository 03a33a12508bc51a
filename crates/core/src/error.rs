// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Error types for record rendering and backend dispatch

use std::error::Error as StdError;

/// Errors surfaced while rendering or dispatching a log record.
///
/// Construction-time failures (a store that fails schema validation, an
/// unwritable path) are not represented here; backends propagate their own
/// error types from their constructors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
	/// The record could not be rendered to text.
	#[error("failed to render log record: {0}")]
	Render(#[from] serde_json::Error),

	/// A backend accepted the record but failed to write it.
	#[error("backend `{backend}` failed: {source}")]
	Backend {
		backend: &'static str,
		#[source]
		source: Box<dyn StdError + Send + Sync>,
	},
}

impl LogError {
	/// Wrap a backend's own failure, tagged with the backend name.
	pub fn backend(
		backend: &'static str,
		source: impl StdError + Send + Sync + 'static,
	) -> Self {
		LogError::Backend {
			backend,
			source: Box::new(source),
		}
	}
}

pub type Result<T> = std::result::Result<T, LogError>;
