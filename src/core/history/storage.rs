use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use redb::{Database, ReadableTable, TableDefinition};

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::project_dirs;

/// Redb table holding every persisted key
/// Key: storage key, Value: serialized payload
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("key_value");

/// Durable string key-value storage used by the history store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

fn storage_err(context: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Storage(format!("{}: {}", context, e))
}

/// Redb-based storage, one transaction per operation
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| storage_err("Failed to create data directory", e))?;
        }

        let db = Database::create(path)
            .map_err(|e| storage_err("Failed to create database", e))?;

        // Initialize table so reads never see a missing table
        let write_txn = db.begin_write()
            .map_err(|e| storage_err("Failed to begin write transaction", e))?;
        {
            let _table = write_txn.open_table(KV_TABLE)
                .map_err(|e| storage_err("Failed to open table", e))?;
        }
        write_txn.commit()
            .map_err(|e| storage_err("Failed to commit transaction", e))?;

        tracing::debug!(path = %path.display(), "opened history database");
        Ok(Self { db })
    }

    /// Open the database in the platform data directory
    pub fn open_default() -> AppResult<Self> {
        Self::open(&Self::default_path()?)
    }

    pub fn default_path() -> AppResult<PathBuf> {
        Ok(project_dirs()?.data_dir().join("history.redb"))
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let read_txn = self.db.begin_read()
            .map_err(|e| storage_err("Failed to begin read", e))?;
        let table = read_txn.open_table(KV_TABLE)
            .map_err(|e| storage_err("Failed to open table", e))?;
        let value = table.get(key)
            .map_err(|e| storage_err("Failed to read entry", e))?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let write_txn = self.db.begin_write()
            .map_err(|e| storage_err("Failed to begin write", e))?;
        {
            let mut table = write_txn.open_table(KV_TABLE)
                .map_err(|e| storage_err("Failed to open table", e))?;
            table.insert(key, value)
                .map_err(|e| storage_err("Failed to insert", e))?;
        }
        write_txn.commit()
            .map_err(|e| storage_err("Failed to commit", e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let write_txn = self.db.begin_write()
            .map_err(|e| storage_err("Failed to begin write", e))?;
        {
            let mut table = write_txn.open_table(KV_TABLE)
                .map_err(|e| storage_err("Failed to open table", e))?;
            table.remove(key)
                .map_err(|e| storage_err("Failed to remove key", e))?;
        }
        write_txn.commit()
            .map_err(|e| storage_err("Failed to commit", e))?;
        Ok(())
    }
}

/// In-memory fallback storage (used if the database cannot be opened)
#[derive(Default)]
pub struct InMemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let items = self.items.lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        Ok(items.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self.items.lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut items = self.items.lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        items.remove(key);
        Ok(())
    }
}
