use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use cuturl_logging::cut_info;

use crate::{EngineEvent, RequestId, Shortener};

enum EngineCommand {
    Shorten { request_id: RequestId, url: String },
}

/// Runs shortening requests on a background thread with its own tokio runtime.
///
/// Commands are handled one at a time, in the order they were sent.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(shortener: Arc<dyn Shortener>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("cuturl-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let event = runtime.block_on(handle_command(shortener.as_ref(), command));
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn shorten(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Shorten {
            request_id,
            url: url.into(),
        });
    }

    /// Blocks until the next completion arrives. `None` once the worker is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(shortener: &dyn Shortener, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Shorten { request_id, url } => {
            cut_info!("Shorten request_id={} url_len={}", request_id, url.len());
            let result = shortener.shorten(&url).await;
            EngineEvent::ShortenCompleted { request_id, result }
        }
    }
}
