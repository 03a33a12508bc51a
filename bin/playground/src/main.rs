// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::env;

use sqlog_core::{
	critical, debug, error, info, info_with_fields, trace, warn,
	ConsoleBackend, FormatStyle, LogLevel, LoggerRegistry,
};
use sqlog_store::{RecordStore, StoreBackend};

fn main() {
	// `--debug` mirrors the usual verbosity toggle: without it the
	// logger drops everything below Info.
	let debug = env::args().any(|arg| arg == "--debug" || arg == "-d");

	let registry = LoggerRegistry::new();
	let logger = registry.get_or_create("playground");
	logger.set_level(if debug {
		LogLevel::Trace
	} else {
		LogLevel::Info
	});

	logger.add_backend(Box::new(
		ConsoleBackend::new()
			.color(true)
			.stderr_for_errors(true)
			.format_style(FormatStyle::Timeline),
	));

	let store_path = env::temp_dir().join("sqlog-playground.db");
	logger.add_backend(Box::new(
		StoreBackend::new(&store_path).unwrap(),
	));

	trace!(logger, "tracing the startup path");
	debug!(logger, "this is a debug message");
	info!(logger, "this is an info log record");
	info_with_fields!(logger, "store attached", "path" => store_path.display().to_string());
	warn!(logger, "running low on examples");
	error!(logger, "this one is serious");
	critical!(logger, "and this one is critical");

	logger.flush();

	let store = RecordStore::open(&store_path).unwrap();
	println!(
		"\n{} records persisted in {}",
		store.count().unwrap(),
		store_path.display()
	);
	for row in store.all().unwrap() {
		println!("  {:>4} {}", row.id, row.record);
	}
}
