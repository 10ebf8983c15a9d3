//! CutURL engine: shortening service client, storage and effect execution.
mod client;
mod engine;
mod history_store;
mod persist;
mod types;

pub use client::{ClientSettings, Clock, Shortener, TinyUrlClient, DEFAULT_API_URL, DEFAULT_DOMAIN};
pub use engine::EngineHandle;
pub use history_store::{load_history, save_history, HISTORY_STORAGE_KEY};
pub use persist::{ensure_storage_dir, FileStore, KeyValueStore, MemoryStore, PersistError};
pub use types::{EngineEvent, RequestId, ShortenError};
