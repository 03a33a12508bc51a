// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! End-to-end scenarios across logger, backends, and the record store.

use std::sync::Arc;
use std::thread;

use sqlog_core::{critical, info, LoggerRegistry};
use sqlog_store::{RecordStore, StoreBackend};
use sqlog_testing::tempdir::temp_dir;

#[test]
fn test_emit_through_logger_persists_in_order() {
	temp_dir(|dir| {
		let path = dir.join("records.db");

		let registry = LoggerRegistry::new();
		let logger = registry.get_or_create("scenario");
		logger.add_backend(Box::new(
			StoreBackend::new(&path).unwrap(),
		));

		critical!(logger, "hello");
		let rows = RecordStore::open(&path).unwrap().all().unwrap();
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].id, 1);
		assert_eq!(rows[0].record, "hello");

		info!(logger, "world");
		let rows = RecordStore::open(&path).unwrap().all().unwrap();
		let rows: Vec<(i64, &str)> = rows
			.iter()
			.map(|r| (r.id, r.record.as_str()))
			.collect();
		assert_eq!(rows, vec![(1, "hello"), (2, "world")]);
		Ok(())
	})
	.unwrap()
}

#[test]
fn test_concurrent_appends_lose_nothing() {
	const THREADS: usize = 8;
	const PER_THREAD: usize = 25;

	temp_dir(|dir| {
		let store = Arc::new(
			RecordStore::open(dir.join("records.db")).unwrap(),
		);

		thread::scope(|scope| {
			for t in 0..THREADS {
				let store = Arc::clone(&store);
				scope.spawn(move || {
					for i in 0..PER_THREAD {
						store.append(&format!(
							"thread {t} record {i}"
						))
						.unwrap();
					}
				});
			}
		});

		let rows = store.all().unwrap();
		assert_eq!(rows.len(), THREADS * PER_THREAD);

		// Ids are unique and strictly increasing.
		assert!(rows.windows(2).all(|w| w[0].id < w[1].id));

		// Per-thread emission order survives interleaving.
		for t in 0..THREADS {
			let prefix = format!("thread {t} ");
			let mine: Vec<&str> = rows
				.iter()
				.filter(|r| r.record.starts_with(&prefix))
				.map(|r| r.record.as_str())
				.collect();
			assert_eq!(mine.len(), PER_THREAD);
			for (i, record) in mine.iter().enumerate() {
				assert_eq!(
					*record,
					format!("thread {t} record {i}")
				);
			}
		}
		Ok(())
	})
	.unwrap()
}

#[test]
fn test_concurrent_open_is_safe() {
	temp_dir(|dir| {
		let path = dir.join("records.db");

		thread::scope(|scope| {
			for _ in 0..4 {
				let path = path.clone();
				scope.spawn(move || {
					let store =
						RecordStore::open(&path)
							.unwrap();
					store.append("probe").unwrap();
				});
			}
		});

		let store = RecordStore::open(&path).unwrap();
		assert_eq!(store.count().unwrap(), 4);
		Ok(())
	})
	.unwrap()
}

#[test]
fn test_two_handles_share_one_store() {
	temp_dir(|dir| {
		let path = dir.join("records.db");
		let first = RecordStore::open(&path).unwrap();
		let second = RecordStore::open(&path).unwrap();

		first.append("from first").unwrap();
		second.append("from second").unwrap();

		let rows = first.all().unwrap();
		let texts: Vec<&str> =
			rows.iter().map(|r| r.record.as_str()).collect();
		assert_eq!(texts, ["from first", "from second"]);
		Ok(())
	})
	.unwrap()
}
