// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! SQLite-backed record store and its log backend.
//!
//! The store is a single local file holding exactly one append-only table:
//!
//! ```sql
//! CREATE TABLE records (id INTEGER PRIMARY KEY, record TEXT)
//! ```
//!
//! That definition is the compatibility contract: [`RecordStore::open`]
//! validates the live table against it column for column and refuses to
//! touch anything that deviates.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod backend;
pub mod error;
pub mod store;

pub use backend::StoreBackend;
pub use error::StoreError;
pub use store::{RecordStore, StoredRecord, SCHEMA};
