// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Core logging model: records, levels, format styles, the backend
//! capability, and the named-logger registry.
//!
//! Backends performing real persistence live in their own crates (see
//! `sqlog-store` for the SQLite record store).

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod backend;
pub mod console;
pub mod error;
pub mod format;
mod macros;
pub mod record;
pub mod registry;

pub use backend::LogBackend;
pub use console::ConsoleBackend;
pub use error::{LogError, Result};
pub use format::FormatStyle;
pub use record::{LogLevel, Record};
pub use registry::{
	default_registry, ErrorHook, Logger, LoggerRegistry,
};
