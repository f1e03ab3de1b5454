//! # m2dg-storage
//!
//! Document storage for the M2DG platform.
//!
//! Every collection maps to a RocksDB column family. Documents are stored as
//! JSON keyed by their string identifier. Conditional writes (guarded
//! read-modify-write and uniqueness-checked batches) are serialized through a
//! single store-wide write lock so that a guard always observes the latest
//! committed state.

#![warn(clippy::all)]

pub mod column_families;
pub mod errors;
pub mod rocksdb_impl;
pub mod traits;

pub use column_families::*;
pub use errors::{Result, StorageError};
pub use rocksdb_impl::RocksDbStorage;
pub use traits::{Batch, BatchExt, Storage};
