use std::sync::Arc;

use cuturl_core::{Effect, Msg, ShortenResult};
use cuturl_engine::{load_history, save_history, EngineEvent, EngineHandle, KeyValueStore, RequestId};
use cuturl_logging::{cut_error, cut_info, cut_warn};

use super::clipboard::Clipboard;

/// Executes effects emitted by the core and turns their outcomes back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<dyn KeyValueStore + Send + Sync>,
    clipboard: Arc<dyn Clipboard>,
    next_request_id: RequestId,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        store: Arc<dyn KeyValueStore + Send + Sync>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            engine,
            store,
            clipboard,
            next_request_id: 0,
        }
    }

    pub fn load_history(&self) -> Vec<ShortenResult> {
        load_history(&*self.store)
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::Shorten { url } => follow_ups.push(self.shorten(url)),
                Effect::PersistHistory(entries) => {
                    if let Err(err) = save_history(&*self.store, &entries) {
                        cut_error!("Failed to persist history: {}", err);
                    }
                }
                Effect::CopyToClipboard { target, text } => {
                    let ok = match self.clipboard.copy(&text) {
                        Ok(()) => true,
                        Err(err) => {
                            cut_warn!("Copy to clipboard failed: {}", err);
                            false
                        }
                    };
                    follow_ups.push(Msg::CopyFinished { target, ok });
                }
            }
        }
        follow_ups
    }

    /// Sends one request and waits for its completion.
    fn shorten(&mut self, url: String) -> Msg {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.engine.shorten(request_id, url);

        loop {
            match self.engine.recv() {
                Some(EngineEvent::ShortenCompleted {
                    request_id: completed,
                    result,
                }) => {
                    if completed != request_id {
                        cut_warn!("Dropping stale completion {}", completed);
                        continue;
                    }
                    return match result {
                        Ok(result) => {
                            cut_info!("Request {} shortened to {}", request_id, result.short_url);
                            Msg::ShortenSucceeded(result)
                        }
                        Err(err) => {
                            cut_warn!("Request {} failed: {}", request_id, err);
                            Msg::ShortenFailed(err.to_string())
                        }
                    };
                }
                None => {
                    cut_error!("Shortening engine stopped");
                    return Msg::ShortenFailed("Shortening engine stopped".to_string());
                }
            }
        }
    }
}
