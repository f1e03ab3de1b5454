//! RocksDB storage implementation.

use crate::{
    column_families::all_column_families,
    errors::{Result, StorageError},
    traits::{deserialize_value, serialize_value, Batch, Storage},
};
use async_trait::async_trait;
use rocksdb::{IteratorMode, Options, WriteBatch, DB};
use serde::{de::DeserializeOwned, Serialize};
use std::{path::Path, sync::Arc};
use tokio::sync::Mutex;
use tracing::debug;

/// RocksDB storage implementation
pub struct RocksDbStorage {
    db: Arc<DB>,
    write_lock: Arc<Mutex<()>>,
    // Keeps a test database directory alive for as long as the store.
    _temp_dir: Option<tempfile::TempDir>,
}

impl RocksDbStorage {
    /// Open RocksDB database at the specified path
    ///
    /// Creates all required column families if they don't exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open_cf(&opts, &path, all_column_families())
            .map_err(|e| StorageError::Database(e.to_string()))?;

        debug!("Opened RocksDB at {:?}", path.as_ref());

        Ok(Self {
            db: Arc::new(db),
            write_lock: Arc::new(Mutex::new(())),
            _temp_dir: None,
        })
    }

    /// Open a RocksDB database in a fresh temporary directory
    ///
    /// The directory is removed when the storage is dropped. This is public
    /// for use in other crates' test modules.
    pub fn open_test() -> Result<Self> {
        let temp_dir = tempfile::TempDir::new().map_err(StorageError::IoError)?;
        let mut storage = Self::open(temp_dir.path())?;
        storage._temp_dir = Some(temp_dir);
        Ok(storage)
    }

    /// Get column family handle
    fn cf_handle(&self, cf: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(cf)
            .ok_or_else(|| StorageError::InvalidColumnFamily(cf.to_string()))
    }

    fn read_raw(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let cf_handle = self.cf_handle(cf)?;
        self.db
            .get_cf(cf_handle, key)
            .map_err(|e| StorageError::Database(e.to_string()))
    }

    fn write_raw(&self, cf: &str, key: &[u8], value: &[u8]) -> Result<()> {
        let cf_handle = self.cf_handle(cf)?;
        self.db
            .put_cf(cf_handle, key, value)
            .map_err(|e| StorageError::Database(e.to_string()))
    }
}

#[async_trait]
impl Storage for RocksDbStorage {
    async fn get<V>(&self, cf: &str, key: &str) -> Result<Option<V>>
    where
        V: DeserializeOwned + Send,
    {
        match self.read_raw(cf, key.as_bytes())? {
            Some(bytes) => Ok(Some(deserialize_value(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn put<V>(&self, cf: &str, key: &str, value: &V) -> Result<()>
    where
        V: Serialize + Send + Sync,
    {
        let value_bytes = serialize_value(value)?;

        let _guard = self.write_lock.lock().await;
        self.write_raw(cf, key.as_bytes(), &value_bytes)
    }

    async fn exists(&self, cf: &str, key: &str) -> Result<bool> {
        Ok(self.read_raw(cf, key.as_bytes())?.is_some())
    }

    async fn scan<V>(&self, cf: &str, limit: usize) -> Result<Vec<V>>
    where
        V: DeserializeOwned + Send,
    {
        let cf_handle = self.cf_handle(cf)?;

        let mut results = Vec::new();
        for item in self.db.iterator_cf(cf_handle, IteratorMode::Start) {
            if results.len() >= limit {
                break;
            }
            let (_key, value) = item.map_err(|e| StorageError::Database(e.to_string()))?;
            results.push(deserialize_value(&value)?);
        }

        Ok(results)
    }

    async fn find_by_field<V>(
        &self,
        cf: &str,
        field: &str,
        value: &serde_json::Value,
        limit: usize,
    ) -> Result<Vec<V>>
    where
        V: DeserializeOwned + Send,
    {
        let cf_handle = self.cf_handle(cf)?;

        let mut results = Vec::new();
        for item in self.db.iterator_cf(cf_handle, IteratorMode::Start) {
            if results.len() >= limit {
                break;
            }
            let (_key, bytes) = item.map_err(|e| StorageError::Database(e.to_string()))?;
            let document: serde_json::Value = deserialize_value(&bytes)?;

            if document.get(field) == Some(value) {
                let typed = serde_json::from_value(document)
                    .map_err(|e| StorageError::Deserialization(e.to_string()))?;
                results.push(typed);
            }
        }

        Ok(results)
    }

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
        F: FnOnce(&mut V) -> std::result::Result<T, E> + Send,
    {
        let _guard = self.write_lock.lock().await;

        let Some(bytes) = self.read_raw(cf, key.as_bytes())? else {
            return Ok(None);
        };
        let mut document: V = deserialize_value(&bytes)?;

        match f(&mut document) {
            Ok(outcome) => {
                let value_bytes = serialize_value(&document)?;
                self.write_raw(cf, key.as_bytes(), &value_bytes)?;
                debug!(cf, key, "Guarded update committed");
                Ok(Some(Ok(outcome)))
            }
            Err(rejection) => {
                debug!(cf, key, "Guarded update rejected");
                Ok(Some(Err(rejection)))
            }
        }
    }

    fn batch(&self) -> Box<dyn Batch> {
        Box::new(RocksDbBatch {
            db: Arc::clone(&self.db),
            write_lock: Arc::clone(&self.write_lock),
            write_batch: WriteBatch::default(),
            required_absent: Vec::new(),
        })
    }
}

/// RocksDB batch implementation
pub struct RocksDbBatch {
    db: Arc<DB>,
    write_lock: Arc<Mutex<()>>,
    write_batch: WriteBatch,
    required_absent: Vec<(String, Vec<u8>)>,
}

#[async_trait]
impl Batch for RocksDbBatch {
    fn put_raw(&mut self, cf: &str, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        let cf_handle = self
            .db
            .cf_handle(cf)
            .ok_or_else(|| StorageError::InvalidColumnFamily(cf.to_string()))?;

        self.write_batch.put_cf(cf_handle, &key, &value);

        Ok(())
    }

    fn require_absent_raw(&mut self, cf: &str, key: Vec<u8>) -> Result<()> {
        if self.db.cf_handle(cf).is_none() {
            return Err(StorageError::InvalidColumnFamily(cf.to_string()));
        }

        self.required_absent.push((cf.to_string(), key));

        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let RocksDbBatch {
            db,
            write_lock,
            write_batch,
            required_absent,
        } = *self;

        let _guard = write_lock.lock().await;

        for (cf, key) in &required_absent {
            let cf_handle = db
                .cf_handle(cf)
                .ok_or_else(|| StorageError::InvalidColumnFamily(cf.clone()))?;
            let existing = db
                .get_cf(cf_handle, key)
                .map_err(|e| StorageError::Database(e.to_string()))?;
            if existing.is_some() {
                debug!(cf = %cf, "Batch precondition failed");
                return Err(StorageError::AlreadyExists {
                    collection: cf.clone(),
                });
            }
        }

        db.write(write_batch)
            .map_err(|e| StorageError::Database(e.to_string()))?;

        debug!("Batch committed successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column_families::{CF_COURTS, CF_TEAMS, CF_TEAMS_BY_REFERRAL_CODE};
    use crate::traits::BatchExt;
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        id: String,
        name: String,
        value: u64,
        tags: Vec<String>,
    }

    fn test_data(name: &str, value: u64) -> TestData {
        TestData {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            value,
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let storage = RocksDbStorage::open_test().unwrap();
        let data = test_data("test", 42);

        storage.put(CF_COURTS, &data.id, &data).await.unwrap();

        let result: Option<TestData> = storage.get(CF_COURTS, &data.id).await.unwrap();
        assert_eq!(result, Some(data));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let storage = RocksDbStorage::open_test().unwrap();

        let result: Option<TestData> = storage.get(CF_COURTS, "missing").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_exists() {
        let storage = RocksDbStorage::open_test().unwrap();
        let data = test_data("test", 42);

        assert!(!storage.exists(CF_COURTS, &data.id).await.unwrap());

        storage.put(CF_COURTS, &data.id, &data).await.unwrap();

        assert!(storage.exists(CF_COURTS, &data.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_column_family() {
        let storage = RocksDbStorage::open_test().unwrap();

        let result: Result<Option<TestData>> = storage.get("nope", "key").await;
        assert!(matches!(result, Err(StorageError::InvalidColumnFamily(_))));
    }

    #[tokio::test]
    async fn test_scan_respects_limit() {
        let storage = RocksDbStorage::open_test().unwrap();

        for i in 0..5 {
            let data = test_data("court", i);
            storage.put(CF_COURTS, &data.id, &data).await.unwrap();
        }

        let all: Vec<TestData> = storage.scan(CF_COURTS, 1000).await.unwrap();
        assert_eq!(all.len(), 5);

        let capped: Vec<TestData> = storage.scan(CF_COURTS, 3).await.unwrap();
        assert_eq!(capped.len(), 3);
    }

    #[tokio::test]
    async fn test_find_by_field() {
        let storage = RocksDbStorage::open_test().unwrap();

        let a = test_data("alpha", 1);
        let b = test_data("beta", 2);
        let c = test_data("alpha", 3);
        for data in [&a, &b, &c] {
            storage.put(CF_COURTS, &data.id, data).await.unwrap();
        }

        let found: Vec<TestData> = storage
            .find_by_field(CF_COURTS, "name", &serde_json::json!("alpha"), 1000)
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|d| d.name == "alpha"));

        let none: Vec<TestData> = storage
            .find_by_field(CF_COURTS, "name", &serde_json::json!("gamma"), 1000)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_with_commits_on_ok() {
        let storage = RocksDbStorage::open_test().unwrap();
        let data = test_data("test", 1);
        storage.put(CF_COURTS, &data.id, &data).await.unwrap();

        let outcome = storage
            .update_with(CF_COURTS, &data.id, |doc: &mut TestData| {
                doc.value += 1;
                Ok::<_, ()>(doc.value)
            })
            .await
            .unwrap();
        assert_eq!(outcome, Some(Ok(2)));

        let stored: TestData = storage.get(CF_COURTS, &data.id).await.unwrap().unwrap();
        assert_eq!(stored.value, 2);
    }

    #[tokio::test]
    async fn test_update_with_discards_on_err() {
        let storage = RocksDbStorage::open_test().unwrap();
        let data = test_data("test", 1);
        storage.put(CF_COURTS, &data.id, &data).await.unwrap();

        let outcome = storage
            .update_with(CF_COURTS, &data.id, |doc: &mut TestData| {
                doc.value = 100;
                Err::<(), _>("rejected")
            })
            .await
            .unwrap();
        assert_eq!(outcome, Some(Err("rejected")));

        let stored: TestData = storage.get(CF_COURTS, &data.id).await.unwrap().unwrap();
        assert_eq!(stored.value, 1);
    }

    #[tokio::test]
    async fn test_update_with_missing_key() {
        let storage = RocksDbStorage::open_test().unwrap();

        let outcome = storage
            .update_with(CF_COURTS, "missing", |_doc: &mut TestData| Ok::<_, ()>(()))
            .await
            .unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_update_with_is_serialized() {
        let storage = Arc::new(RocksDbStorage::open_test().unwrap());
        let data = test_data("counter", 0);
        storage.put(CF_COURTS, &data.id, &data).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..20 {
            let storage = Arc::clone(&storage);
            let id = data.id.clone();
            handles.push(tokio::spawn(async move {
                storage
                    .update_with(CF_COURTS, &id, |doc: &mut TestData| {
                        doc.value += 1;
                        Ok::<_, ()>(())
                    })
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stored: TestData = storage.get(CF_COURTS, &data.id).await.unwrap().unwrap();
        assert_eq!(stored.value, 20);
    }

    #[tokio::test]
    async fn test_batch_commit() {
        let storage = RocksDbStorage::open_test().unwrap();

        let data1 = test_data("test1", 1);
        let data2 = test_data("test2", 2);

        let mut batch = storage.batch();
        batch.put(CF_COURTS, &data1.id, &data1).unwrap();
        batch.put(CF_COURTS, &data2.id, &data2).unwrap();
        batch.commit().await.unwrap();

        let result1: Option<TestData> = storage.get(CF_COURTS, &data1.id).await.unwrap();
        let result2: Option<TestData> = storage.get(CF_COURTS, &data2.id).await.unwrap();

        assert_eq!(result1, Some(data1));
        assert_eq!(result2, Some(data2));
    }

    #[tokio::test]
    async fn test_batch_require_absent_blocks_whole_batch() {
        let storage = RocksDbStorage::open_test().unwrap();

        let first = test_data("first", 1);
        let mut batch = storage.batch();
        batch.require_absent(CF_TEAMS_BY_REFERRAL_CODE, "ABC123").unwrap();
        batch.put(CF_TEAMS, &first.id, &first).unwrap();
        batch.put(CF_TEAMS_BY_REFERRAL_CODE, "ABC123", &first.id).unwrap();
        batch.commit().await.unwrap();

        let second = test_data("second", 2);
        let mut batch = storage.batch();
        batch.require_absent(CF_TEAMS_BY_REFERRAL_CODE, "ABC123").unwrap();
        batch.put(CF_TEAMS, &second.id, &second).unwrap();
        batch.put(CF_TEAMS_BY_REFERRAL_CODE, "ABC123", &second.id).unwrap();
        let result = batch.commit().await;

        assert!(matches!(result, Err(StorageError::AlreadyExists { .. })));
        assert!(!storage.exists(CF_TEAMS, &second.id).await.unwrap());

        let owner: Option<String> = storage.get(CF_TEAMS_BY_REFERRAL_CODE, "ABC123").await.unwrap();
        assert_eq!(owner, Some(first.id));
    }

    #[tokio::test]
    async fn test_uncommitted_batch_writes_nothing() {
        let storage = RocksDbStorage::open_test().unwrap();
        let data = test_data("test", 42);

        let mut batch = storage.batch();
        batch.put(CF_COURTS, &data.id, &data).unwrap();
        drop(batch);

        let result: Option<TestData> = storage.get(CF_COURTS, &data.id).await.unwrap();
        assert_eq!(result, None);
    }
}
