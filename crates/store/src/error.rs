// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Store error classification

use std::path::{Path, PathBuf};

use rusqlite::ffi::ErrorCode;

/// Errors raised by the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	/// The store exists but its `records` table is missing or does not
	/// match the schema contract. Fatal to construction; the store is
	/// never written to in this state.
	#[error("store {path} has incompatible schema: {detail}")]
	Schema { path: PathBuf, detail: String },

	/// The store file could not be created, opened, or locked within
	/// the busy-timeout budget. Fatal to the specific operation and
	/// retryable; the store itself is intact.
	#[error("store {path} unavailable: {source}")]
	Unavailable {
		path: PathBuf,
		#[source]
		source: rusqlite::Error,
	},

	/// Any other engine failure.
	#[error(transparent)]
	Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
	pub(crate) fn schema(path: &Path, detail: impl Into<String>) -> Self {
		StoreError::Schema {
			path: path.to_path_buf(),
			detail: detail.into(),
		}
	}

	/// Classify a rusqlite failure: contention and open failures are
	/// `Unavailable` (retryable), everything else passes through.
	pub(crate) fn classify(path: &Path, source: rusqlite::Error) -> Self {
		match source.sqlite_error_code() {
			Some(ErrorCode::DatabaseBusy)
			| Some(ErrorCode::DatabaseLocked)
			| Some(ErrorCode::CannotOpen)
			| Some(ErrorCode::PermissionDenied)
			| Some(ErrorCode::DiskFull) => StoreError::Unavailable {
				path: path.to_path_buf(),
				source,
			},
			_ => StoreError::Sqlite(source),
		}
	}

	/// Whether retrying the operation later can succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self, StoreError::Unavailable { .. })
	}
}
