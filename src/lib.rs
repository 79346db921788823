pub mod core;
pub mod shared;

use std::sync::Arc;

use crate::core::history::{HistoryStore, InMemoryStore, KeyValueStore, RedbStore};
use crate::core::translator::{MyMemoryClient, TranslatorSession};
use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;

/// Open the history database, falling back to memory if it is unavailable
pub fn open_history_storage(settings: &AppSettings) -> Arc<dyn KeyValueStore> {
    let opened = match &settings.storage.history_path {
        Some(path) => RedbStore::open(path),
        None => RedbStore::open_default(),
    };

    match opened {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize history database, using in-memory fallback");
            Arc::new(InMemoryStore::new())
        }
    }
}

/// Build a translator session from settings: MyMemory client plus persisted history
pub fn build_session(settings: &AppSettings) -> AppResult<TranslatorSession> {
    let client = MyMemoryClient::new(settings.api.base_url.clone())?;
    let history = HistoryStore::load(open_history_storage(settings));
    Ok(TranslatorSession::new(Arc::new(client), history, &settings.preferences))
}
