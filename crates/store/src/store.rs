// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The record store: one SQLite file, one append-only table.
//!
//! Every operation opens its own scoped connection and closes it on exit,
//! so a store handle never pins the file between appends. Operations of one
//! store instance are serialized by a store-local mutex; cross-process
//! access rides on SQLite's own file locking plus the busy timeout.

use std::path::{Path, PathBuf};
use std::time::Duration;

use parking_lot::Mutex;
use rusqlite::{
	params, Connection, OptionalExtension, TransactionBehavior,
};

use crate::error::StoreError;

/// The schema contract. A store whose `records` table deviates from this
/// definition in any column is incompatible and is never written to.
pub const SCHEMA: &str =
	"CREATE TABLE records (id INTEGER PRIMARY KEY, record TEXT)";

/// How long a connection waits on a locked store before the operation
/// surfaces as retryable.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Expected column layout: name, declared type, primary key flag.
const COLUMNS: [(&str, &str, bool); 2] =
	[("id", "INTEGER", true), ("record", "TEXT", false)];

/// One persisted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
	/// Store-assigned, strictly increasing.
	pub id: i64,
	/// The rendered text of the log entry.
	pub record: String,
}

/// Append-only store for rendered log records.
#[derive(Debug)]
pub struct RecordStore {
	path: PathBuf,
	lock: Mutex<()>,
}

impl RecordStore {
	/// Open the store at `path`, creating file and table when the file
	/// is absent, then validate the live schema against [`SCHEMA`].
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let store = Self {
			path: path.into(),
			lock: Mutex::new(()),
		};
		store.check_schema()?;
		Ok(store)
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Append one rendered record, returning its assigned id.
	///
	/// A lone parameterized INSERT: it either commits or leaves the
	/// store unchanged, and binding keeps quotes and SQL metacharacters
	/// inert in the payload.
	pub fn append(&self, record: &str) -> Result<i64, StoreError> {
		let _guard = self.lock.lock();
		let conn = self.connect()?;
		conn.execute(
			"INSERT INTO records (record) VALUES (?1)",
			params![record],
		)
		.map_err(|e| StoreError::classify(&self.path, e))?;
		Ok(conn.last_insert_rowid())
	}

	/// All rows ordered by ascending id.
	pub fn all(&self) -> Result<Vec<StoredRecord>, StoreError> {
		let _guard = self.lock.lock();
		let conn = self.connect()?;
		let mut stmt = conn.prepare(
			"SELECT id, record FROM records ORDER BY id ASC",
		)?;
		let rows = stmt
			.query_map([], |row| {
				Ok(StoredRecord {
					id: row.get(0)?,
					record: row.get(1)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;
		Ok(rows)
	}

	/// The newest row, if any.
	pub fn last(&self) -> Result<Option<StoredRecord>, StoreError> {
		let _guard = self.lock.lock();
		let conn = self.connect()?;
		let row = conn
			.query_row(
				"SELECT id, record FROM records \
				 ORDER BY id DESC LIMIT 1",
				[],
				|row| {
					Ok(StoredRecord {
						id: row.get(0)?,
						record: row.get(1)?,
					})
				},
			)
			.optional()?;
		Ok(row)
	}

	pub fn count(&self) -> Result<u64, StoreError> {
		let _guard = self.lock.lock();
		let conn = self.connect()?;
		let count: i64 = conn.query_row(
			"SELECT count(*) FROM records",
			[],
			|row| row.get(0),
		)?;
		Ok(count as u64)
	}

	/// Open a scoped connection with the busy-timeout budget applied.
	/// Dropped (and the file released) on every exit path.
	fn connect(&self) -> Result<Connection, StoreError> {
		let conn = Connection::open(&self.path)
			.map_err(|e| StoreError::classify(&self.path, e))?;
		conn.busy_timeout(BUSY_TIMEOUT)
			.map_err(|e| StoreError::classify(&self.path, e))?;
		Ok(conn)
	}

	/// Create the table when the store is fresh, then validate the live
	/// definition against the contract.
	///
	/// The decision runs inside an IMMEDIATE transaction, so concurrent
	/// instances (or processes) racing through first use all observe
	/// committed catalog state: exactly one creates the table, the rest
	/// validate it. The table is only ever created for an empty
	/// database; an existing file carrying other tables but no
	/// `records` is somebody else's database and fails validation
	/// instead of being adopted.
	fn check_schema(&self) -> Result<(), StoreError> {
		let _guard = self.lock.lock();
		let mut conn = self.connect()?;
		let tx = conn
			.transaction_with_behavior(
				TransactionBehavior::Immediate,
			)
			.map_err(|e| StoreError::classify(&self.path, e))?;

		let present: i64 = tx.query_row(
			"SELECT count(*) FROM sqlite_master \
			 WHERE type = 'table' AND name = 'records'",
			[],
			|row| row.get(0),
		)?;
		if present == 0 {
			let tables: i64 = tx.query_row(
				"SELECT count(*) FROM sqlite_master \
				 WHERE type = 'table'",
				[],
				|row| row.get(0),
			)?;
			if tables > 0 {
				return Err(StoreError::schema(
					&self.path,
					"records table not found",
				));
			}
			tx.execute(
				"CREATE TABLE records \
				 (id INTEGER PRIMARY KEY, record TEXT)",
				[],
			)
			.map_err(|e| StoreError::classify(&self.path, e))?;
			return tx
				.commit()
				.map_err(|e| {
					StoreError::classify(&self.path, e)
				});
		}

		let mut stmt = tx.prepare("PRAGMA table_info(records)")?;
		let columns = stmt
			.query_map([], |row| {
				Ok((
					row.get::<_, String>(1)?,
					row.get::<_, String>(2)?,
					row.get::<_, i64>(5)? != 0,
				))
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		if columns.len() != COLUMNS.len() {
			return Err(StoreError::schema(
				&self.path,
				format!(
					"expected {} columns, found {}",
					COLUMNS.len(),
					columns.len()
				),
			));
		}
		for ((name, decl, pk), (want_name, want_decl, want_pk)) in
			columns.iter().zip(COLUMNS.iter())
		{
			if name != want_name
				|| !decl.eq_ignore_ascii_case(want_decl)
				|| pk != want_pk
			{
				return Err(StoreError::schema(
					&self.path,
					format!(
						"column `{} {}{}` does not \
						 match `{} {}{}`",
						name,
						decl,
						if *pk {
							" PRIMARY KEY"
						} else {
							""
						},
						want_name,
						want_decl,
						if *want_pk {
							" PRIMARY KEY"
						} else {
							""
						},
					),
				));
			}
		}
		Ok(())
	}
}
