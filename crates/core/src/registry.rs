// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Named loggers and the registry that owns them

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use crate::backend::LogBackend;
use crate::error::LogError;
use crate::record::{LogLevel, Record};

/// Called with every backend failure the logger absorbs.
pub type ErrorHook = Box<dyn Fn(&LogError) + Send + Sync>;

/// A named logger dispatching records to its backends.
///
/// A backend failure never reaches the emitting thread as a panic or an
/// error: it is routed to the error hook (consecutive duplicates are
/// suppressed) and dispatch continues with the remaining backends, so one
/// broken sink cannot starve the others.
pub struct Logger {
	name: String,
	level: RwLock<LogLevel>,
	backends: RwLock<Vec<Box<dyn LogBackend>>>,
	error_hook: RwLock<ErrorHook>,
	last_error: Mutex<Option<String>>,
}

impl Logger {
	fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			level: RwLock::new(LogLevel::Trace),
			backends: RwLock::new(Vec::new()),
			error_hook: RwLock::new(Box::new(|err| {
				eprintln!("log backend error: {}", err);
			})),
			last_error: Mutex::new(None),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn level(&self) -> LogLevel {
		*self.level.read()
	}

	/// Minimum level this logger dispatches; records below it are dropped
	/// before any backend sees them.
	pub fn set_level(&self, level: LogLevel) {
		*self.level.write() = level;
	}

	pub fn add_backend(&self, backend: Box<dyn LogBackend>) {
		self.backends.write().push(backend);
	}

	pub fn clear_backends(&self) {
		self.backends.write().clear();
	}

	/// Replace the default stderr error hook.
	pub fn set_error_hook(
		&self,
		hook: impl Fn(&LogError) + Send + Sync + 'static,
	) {
		*self.error_hook.write() = Box::new(hook);
	}

	/// Dispatch one record to every backend that accepts it.
	pub fn log(&self, record: Record) {
		if record.level < self.level() {
			return;
		}
		for backend in self.backends.read().iter() {
			if !backend.accepts(&record) {
				continue;
			}
			if let Err(err) = backend.write(&record) {
				self.report(err);
			}
		}
	}

	/// Flush every backend, reporting failures through the error hook.
	pub fn flush(&self) {
		for backend in self.backends.read().iter() {
			if let Err(err) = backend.flush() {
				self.report(err);
			}
		}
	}

	fn report(&self, err: LogError) {
		let rendered = err.to_string();
		let mut last = self.last_error.lock();
		if last.as_deref() == Some(rendered.as_str()) {
			return;
		}
		*last = Some(rendered);
		(self.error_hook.read())(&err);
	}
}

/// Process-wide map of name to shared logger.
///
/// First access under a name creates the logger; it lives for the registry's
/// lifetime. Components that need a logger take the registry (or the logger
/// itself) by reference instead of reaching for a global by string name.
pub struct LoggerRegistry {
	loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
	pub fn new() -> Self {
		Self {
			loggers: RwLock::new(HashMap::new()),
		}
	}

	/// Fetch the logger registered under `name`, creating it on first use.
	pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
		if let Some(logger) = self.loggers.read().get(name) {
			return Arc::clone(logger);
		}
		let mut loggers = self.loggers.write();
		Arc::clone(
			loggers.entry(name.to_string())
				.or_insert_with(|| Arc::new(Logger::new(name))),
		)
	}

	/// The default namespace.
	pub fn root(&self) -> Arc<Logger> {
		self.get_or_create("root")
	}

	/// Names currently registered, unordered.
	pub fn names(&self) -> Vec<String> {
		self.loggers.read().keys().cloned().collect()
	}
}

impl Default for LoggerRegistry {
	fn default() -> Self {
		Self::new()
	}
}

static DEFAULT_REGISTRY: Lazy<LoggerRegistry> =
	Lazy::new(LoggerRegistry::new);

/// The process-wide default registry, for callers that want the standard
/// named-logger namespace without threading a registry through their code.
pub fn default_registry() -> &'static LoggerRegistry {
	&DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;
	use crate::error::Result;

	struct Capture(Arc<Mutex<Vec<String>>>);

	impl LogBackend for Capture {
		fn name(&self) -> &'static str {
			"capture"
		}

		fn write(&self, record: &Record) -> Result<()> {
			self.0.lock().push(record.message.clone());
			Ok(())
		}
	}

	struct Failing;

	impl LogBackend for Failing {
		fn name(&self) -> &'static str {
			"failing"
		}

		fn write(&self, _record: &Record) -> Result<()> {
			Err(LogError::backend(
				"failing",
				std::io::Error::other("disk on fire"),
			))
		}
	}

	fn capture() -> (Capture, Arc<Mutex<Vec<String>>>) {
		let seen = Arc::new(Mutex::new(Vec::new()));
		(Capture(Arc::clone(&seen)), seen)
	}

	#[test]
	fn test_same_name_returns_same_logger() {
		let registry = LoggerRegistry::new();
		let a = registry.get_or_create("net");
		let b = registry.get_or_create("net");
		let other = registry.get_or_create("disk");

		assert!(Arc::ptr_eq(&a, &b));
		assert!(!Arc::ptr_eq(&a, &other));

		let mut names = registry.names();
		names.sort();
		assert_eq!(names, ["disk", "net"]);
	}

	#[test]
	fn test_default_registry_is_shared() {
		let a = default_registry().get_or_create("shared");
		let b = default_registry().get_or_create("shared");
		assert!(Arc::ptr_eq(&a, &b));
	}

	#[test]
	fn test_level_filters_before_backends() {
		let registry = LoggerRegistry::new();
		let logger = registry.get_or_create("app");
		let (backend, seen) = capture();
		logger.add_backend(Box::new(backend));
		logger.set_level(LogLevel::Info);

		logger.log(Record::new(LogLevel::Debug, "app", "dropped"));
		logger.log(Record::new(LogLevel::Info, "app", "kept"));

		assert_eq!(*seen.lock(), vec!["kept".to_string()]);
	}

	#[test]
	fn test_failing_backend_does_not_starve_others() {
		let registry = LoggerRegistry::new();
		let logger = registry.get_or_create("app");
		let (backend, seen) = capture();
		logger.add_backend(Box::new(Failing));
		logger.add_backend(Box::new(backend));
		logger.set_error_hook(|_| {});

		logger.log(Record::new(LogLevel::Info, "app", "first"));
		logger.log(Record::new(LogLevel::Info, "app", "second"));

		assert_eq!(
			*seen.lock(),
			vec!["first".to_string(), "second".to_string()]
		);
	}

	#[test]
	fn test_consecutive_duplicate_failures_reported_once() {
		let registry = LoggerRegistry::new();
		let logger = registry.get_or_create("app");
		logger.add_backend(Box::new(Failing));

		let reported = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&reported);
		logger.set_error_hook(move |_| {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		for _ in 0..5 {
			logger.log(Record::new(LogLevel::Info, "app", "x"));
		}

		assert_eq!(reported.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_clear_backends_stops_dispatch() {
		let registry = LoggerRegistry::new();
		let logger = registry.get_or_create("app");
		let (backend, seen) = capture();
		logger.add_backend(Box::new(backend));

		logger.log(Record::new(LogLevel::Info, "app", "before"));
		logger.clear_backends();
		logger.log(Record::new(LogLevel::Info, "app", "after"));

		assert_eq!(*seen.lock(), vec!["before".to_string()]);
	}
}
