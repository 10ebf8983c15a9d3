use cuturl_core::{History, ShortenResult};
use cuturl_logging::{cut_info, cut_warn};
use serde::{Deserialize, Serialize};

use crate::{KeyValueStore, PersistError};

/// Storage key holding the serialized history.
pub const HISTORY_STORAGE_KEY: &str = "cuturl_history";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedEntry {
    id: String,
    original_url: String,
    short_url: String,
    short_code: String,
    created_at: String,
}

impl From<PersistedEntry> for ShortenResult {
    fn from(entry: PersistedEntry) -> Self {
        Self {
            id: entry.id,
            original_url: entry.original_url,
            short_url: entry.short_url,
            short_code: entry.short_code,
            created_at: entry.created_at,
        }
    }
}

impl From<&ShortenResult> for PersistedEntry {
    fn from(result: &ShortenResult) -> Self {
        Self {
            id: result.id.clone(),
            original_url: result.original_url.clone(),
            short_url: result.short_url.clone(),
            short_code: result.short_code.clone(),
            created_at: result.created_at.clone(),
        }
    }
}

/// Reads the persisted history. Missing or unreadable snapshots yield an empty list.
pub fn load_history(store: &dyn KeyValueStore) -> Vec<ShortenResult> {
    let content = match store.get(HISTORY_STORAGE_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            cut_warn!("Failed to read persisted history: {}", err);
            return Vec::new();
        }
    };

    let entries: Vec<PersistedEntry> = match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(err) => {
            cut_warn!("Failed to parse persisted history: {}", err);
            return Vec::new();
        }
    };

    let history = History::from_entries(entries.into_iter().map(ShortenResult::from).collect());
    cut_info!("Loaded {} history entries", history.len());
    history.entries().to_vec()
}

/// Overwrites the persisted history with `entries`.
pub fn save_history(store: &dyn KeyValueStore, entries: &[ShortenResult]) -> Result<(), PersistError> {
    let persisted: Vec<PersistedEntry> = entries.iter().map(PersistedEntry::from).collect();
    let content = serde_json::to_string(&persisted)?;
    store.set(HISTORY_STORAGE_KEY, &content)
}
