//! Translation history
//!
//! Bounded, newest-first list of recent translations, mirrored to durable
//! key-value storage after every mutation.

pub mod storage;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::shared::error::AppError;
use crate::shared::types::{NewTranslation, TranslationRecord};

pub use storage::{InMemoryStore, KeyValueStore, RedbStore};

/// Maximum number of translations kept in history
pub const MAX_HISTORY_SIZE: usize = 5;

/// Storage key of the serialized history
pub const HISTORY_KEY: &str = "translation-history";

/// History manager; the only writer of [`HISTORY_KEY`]
pub struct HistoryStore {
    storage: Arc<dyn KeyValueStore>,
    items: Vec<TranslationRecord>,
}

impl HistoryStore {
    /// Load the persisted history.
    ///
    /// A missing, unreadable or corrupt value yields an empty history. The
    /// failure is logged and never returned.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let items = match storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TranslationRecord>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to parse translation history, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read translation history, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = items.len(), "loaded translation history");
        Self { storage, items }
    }

    /// Record a translation made now
    pub fn add(&mut self, translation: NewTranslation) -> TranslationRecord {
        self.add_at(translation, Utc::now())
    }

    /// Record a translation with an explicit creation instant
    pub fn add_at(&mut self, translation: NewTranslation, timestamp: DateTime<Utc>) -> TranslationRecord {
        let record = TranslationRecord::from_new(translation, timestamp);

        // Prepend, stable-sort newest first, keep the first MAX_HISTORY_SIZE.
        // Equal timestamps keep insertion order, so the new record wins ties.
        self.items.insert(0, record.clone());
        self.items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.items.truncate(MAX_HISTORY_SIZE);

        tracing::debug!(id = %record.id, count = self.items.len(), "added translation to history");
        self.persist();
        record
    }

    /// Drop every record and the persisted value
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
        tracing::debug!("cleared translation history");
    }

    /// Current history, newest first
    pub fn list(&self) -> &[TranslationRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write-through: full replace when non-empty, key removal when empty.
    /// Failures are logged and the in-memory state stands.
    fn persist(&self) {
        let result = if self.items.is_empty() {
            self.storage.remove(HISTORY_KEY)
        } else {
            serde_json::to_string(&self.items)
                .map_err(AppError::from)
                .and_then(|raw| self.storage.set(HISTORY_KEY, &raw))
        };

        if let Err(e) = result {
            tracing::error!(error = %e, "failed to persist translation history");
        }
    }
}
