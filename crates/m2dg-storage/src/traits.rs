//! Storage trait definitions.

use crate::errors::{Result, StorageError};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// Document storage interface
///
/// Each collection holds JSON documents keyed by an opaque string
/// identifier. The trait abstracts the underlying engine (RocksDB) so
/// services can be exercised against a throwaway store in tests.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get a document by key from a collection
    ///
    /// # Returns
    ///
    /// `Ok(Some(value))` if key exists, `Ok(None)` if not found
    async fn get<V>(&self, cf: &str, key: &str) -> Result<Option<V>>
    where
        V: DeserializeOwned + Send;

    /// Insert or overwrite a document (last writer wins)
    async fn put<V>(&self, cf: &str, key: &str, value: &V) -> Result<()>
    where
        V: Serialize + Send + Sync;

    /// Check if a key exists in a collection
    async fn exists(&self, cf: &str, key: &str) -> Result<bool>;

    /// List up to `limit` documents of a collection in key order
    async fn scan<V>(&self, cf: &str, limit: usize) -> Result<Vec<V>>
    where
        V: DeserializeOwned + Send;

    /// List up to `limit` documents whose top-level `field` equals `value`
    async fn find_by_field<V>(
        &self,
        cf: &str,
        field: &str,
        value: &serde_json::Value,
        limit: usize,
    ) -> Result<Vec<V>>
    where
        V: DeserializeOwned + Send;

    /// Atomically read, check and rewrite a single document
    ///
    /// `f` runs against the latest committed version of the document while
    /// the store-wide write lock is held. Returning `Ok` commits the mutated
    /// document, returning `Err` leaves the stored document untouched.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the key does not exist, otherwise the closure's outcome
    async fn update_with<V, T, E, F>(
        &self,
        cf: &str,
        key: &str,
        f: F,
    ) -> Result<Option<std::result::Result<T, E>>>
    where
        V: Serialize + DeserializeOwned + Send,
        T: Send,
        E: Send,
        F: FnOnce(&mut V) -> std::result::Result<T, E> + Send;

    /// Create a new batch for atomic multi-collection writes
    fn batch(&self) -> Box<dyn Batch>;
}

/// Batch interface for atomic operations
///
/// A batch collects writes and uniqueness preconditions. On commit the
/// preconditions are checked under the store's write lock and, only if all
/// hold, every write is applied in one atomic step.
///
/// Note: This trait works with pre-serialized bytes to maintain object safety.
/// Use the typed helpers from `BatchExt`.
#[async_trait]
pub trait Batch: Send {
    /// Put a pre-serialized document in the batch
    fn put_raw(&mut self, cf: &str, key: Vec<u8>, value: Vec<u8>) -> Result<()>;

    /// Require that `key` does not exist in `cf` when the batch commits
    fn require_absent_raw(&mut self, cf: &str, key: Vec<u8>) -> Result<()>;

    /// Commit the batch atomically
    ///
    /// Fails with `StorageError::AlreadyExists` without writing anything if
    /// any required-absent key is present.
    async fn commit(self: Box<Self>) -> Result<()>;
}

/// Extension trait providing type-safe methods for Batch
pub trait BatchExt: Batch {
    /// Put a document in the batch (type-safe)
    fn put<V>(&mut self, cf: &str, key: &str, value: &V) -> Result<()>
    where
        V: Serialize,
    {
        let value_bytes = serialize_value(value)?;
        self.put_raw(cf, key.as_bytes().to_vec(), value_bytes)
    }

    /// Add a uniqueness precondition on `key`
    fn require_absent(&mut self, cf: &str, key: &str) -> Result<()> {
        self.require_absent_raw(cf, key.as_bytes().to_vec())
    }
}

/// Automatically implement BatchExt for all types that implement Batch
impl<T: Batch + ?Sized> BatchExt for T {}

/// Helper function to serialize a document
pub(crate) fn serialize_value<V: Serialize + ?Sized>(value: &V) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Helper function to deserialize a document
pub(crate) fn deserialize_value<V: DeserializeOwned>(bytes: &[u8]) -> Result<V> {
    serde_json::from_slice(bytes).map_err(|e| StorageError::Deserialization(e.to_string()))
}
