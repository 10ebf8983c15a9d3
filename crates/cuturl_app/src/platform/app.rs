use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use cuturl_core::{update, AppState, AppViewModel, Effect, Msg};
use cuturl_engine::{EngineHandle, FileStore, TinyUrlClient};
use cuturl_logging::{cut_info, cut_warn};

use super::cli::Args;
use super::clipboard::SystemClipboard;
use super::commands::{self, Command};
use super::effects::EffectRunner;
use super::{logging, render};

pub fn run_app(args: Args) -> anyhow::Result<()> {
    logging::initialize(args.log, args.log_level, &args.data_dir);

    let settings = args.client_settings();
    cut_info!("Starting cuturl with {:?}, data dir {:?}", settings, args.data_dir);
    if settings.api_token.is_none() {
        cut_warn!("No API token configured; shortening requests will be refused");
    }

    let engine = EngineHandle::new(Arc::new(TinyUrlClient::new(settings)))
        .context("failed to start shortening engine")?;
    let runner = EffectRunner::new(
        engine,
        Arc::new(FileStore::new(&args.data_dir)),
        Arc::new(SystemClipboard),
    );
    let mut session = Session::new(runner);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    writeln!(out, "CutURL - type a URL to shorten it, `help` for commands.")?;
    print_views(&mut out, session.start())?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        let command = match commands::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Nothing => {}
            Command::Help => writeln!(out, "{}", commands::HELP)?,
            Command::History => {
                write!(out, "{}", render::render_history(&session.view(), Utc::now()))?;
            }
            Command::Clear => {
                if session.view().history_count == 0 {
                    writeln!(out, "History is already empty.")?;
                    continue;
                }
                write!(out, "Clear the whole history? [y/N] ")?;
                out.flush()?;
                let answer = lines.next().transpose()?.unwrap_or_default();
                if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                    print_views(&mut out, session.dispatch([Msg::ClearHistoryConfirmed]))?;
                }
            }
            other => match commands::to_messages(other, &session.view()) {
                Ok(msgs) => print_views(&mut out, session.dispatch(msgs))?,
                Err(message) => writeln!(out, "{message}")?,
            },
        }
    }

    cut_info!("Exiting cuturl");
    Ok(())
}

fn print_views(out: &mut impl Write, views: Vec<AppViewModel>) -> io::Result<()> {
    for view in views {
        writeln!(out, "{}", render::render(&view, Utc::now()).trim_end())?;
    }
    Ok(())
}

/// Owns the state machine and feeds effect outcomes back into it.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    pub fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    /// Restores persisted history.
    pub fn start(&mut self) -> Vec<AppViewModel> {
        let entries = self.runner.load_history();
        self.dispatch([Msg::RestoreHistory(entries)])
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Applies `msgs` and every follow-up they cause, returning the views worth rendering.
    pub fn dispatch(&mut self, msgs: impl IntoIterator<Item = Msg>) -> Vec<AppViewModel> {
        let mut inbox: VecDeque<Msg> = msgs.into_iter().collect();
        let mut views = Vec::new();

        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;

            // Show the pending state before blocking on the network.
            if effects.iter().any(|e| matches!(e, Effect::Shorten { .. })) {
                self.push_if_dirty(&mut views);
            }
            inbox.extend(self.runner.run(effects));
        }

        self.push_if_dirty(&mut views);
        views
    }

    fn push_if_dirty(&mut self, views: &mut Vec<AppViewModel>) {
        let view = self.state.view();
        if self.state.consume_dirty() {
            views.push(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::platform::clipboard::{Clipboard, ClipboardError};
    use cuturl_core::{SessionKind, ShortenResult, MAX_HISTORY_ITEMS};
    use cuturl_engine::{
        load_history, save_history, KeyValueStore, MemoryStore, ShortenError, Shortener,
        HISTORY_STORAGE_KEY,
    };
    use pretty_assertions::assert_eq;

    /// Returns a result per call, failing for URLs containing "reject".
    #[derive(Default)]
    struct FakeShortener {
        calls: Mutex<u32>,
    }

    #[async_trait::async_trait]
    impl Shortener for FakeShortener {
        async fn shorten(&self, original_url: &str) -> Result<ShortenResult, ShortenError> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if original_url.contains("reject") {
                return Err(ShortenError::RemoteService("Invalid URL".to_string()));
            }
            Ok(ShortenResult {
                id: format!("id-{calls}"),
                original_url: original_url.to_string(),
                short_url: format!("https://tinyurl.com/s{calls}"),
                short_code: format!("s{calls}"),
                created_at: format!("2026-10-17T12:00:{:02}.000Z", *calls % 60),
            })
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        copied: Mutex<Vec<String>>,
        broken: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            if self.broken {
                return Err(ClipboardError::Unavailable);
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Harness {
        session: Session,
        store: Arc<MemoryStore>,
        clipboard: Arc<FakeClipboard>,
    }

    fn harness_with(store: Arc<MemoryStore>, clipboard: FakeClipboard) -> Harness {
        cuturl_logging::initialize_for_tests();
        let engine = EngineHandle::new(Arc::new(FakeShortener::default())).unwrap();
        let clipboard = Arc::new(clipboard);
        let runner = EffectRunner::new(engine, store.clone(), clipboard.clone());
        let mut session = Session::new(runner);
        session.start();
        Harness {
            session,
            store,
            clipboard,
        }
    }

    fn harness() -> Harness {
        harness_with(Arc::new(MemoryStore::new()), FakeClipboard::default())
    }

    fn submit(session: &mut Session, input: &str) -> Vec<AppViewModel> {
        session.dispatch([Msg::InputChanged(input.to_string()), Msg::SubmitClicked])
    }

    #[test]
    fn invalid_url_reports_error_and_leaves_history_empty() {
        let mut h = harness();
        let views = submit(&mut h.session, "not a url");

        let last = views.last().unwrap();
        assert_eq!(last.error.as_deref(), Some("Invalid URL format"));
        assert_eq!(last.session, SessionKind::Idle);
        assert_eq!(last.history_count, 0);
        assert_eq!(h.store.get(HISTORY_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn successful_submit_shows_progress_then_result_and_persists() {
        let mut h = harness();
        let views = submit(&mut h.session, "https://example.com/a");

        assert_eq!(views.len(), 2);
        assert!(views[0].is_submitting);
        assert_eq!(views[1].session, SessionKind::Success);
        assert_eq!(
            views[1].current.as_ref().unwrap().short_url,
            "https://tinyurl.com/s1"
        );
        assert_eq!(views[1].input, "");

        let persisted = load_history(&*h.store);
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].original_url, "https://example.com/a");
    }

    #[test]
    fn submitting_same_url_twice_keeps_one_refreshed_record() {
        let mut h = harness();
        submit(&mut h.session, "https://example.com/a");
        submit(&mut h.session, "https://example.com/a");

        let persisted = load_history(&*h.store);
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, "id-1");
        assert_eq!(persisted[0].created_at, "2026-10-17T12:00:02.000Z");
    }

    #[test]
    fn fifty_one_urls_keep_fifty_records() {
        let mut h = harness();
        for i in 0..=MAX_HISTORY_ITEMS {
            submit(&mut h.session, &format!("https://example.com/{i}"));
        }

        let persisted = load_history(&*h.store);
        assert_eq!(persisted.len(), MAX_HISTORY_ITEMS);
        assert!(persisted
            .iter()
            .all(|e| e.original_url != "https://example.com/0"));
    }

    #[test]
    fn remote_error_message_becomes_failure_state() {
        let mut h = harness();
        let views = submit(&mut h.session, "https://example.com/reject");

        let last = views.last().unwrap();
        assert_eq!(last.session, SessionKind::Failed);
        assert_eq!(last.error.as_deref(), Some("Invalid URL"));
        assert_eq!(last.history_count, 0);
    }

    #[test]
    fn history_is_restored_at_start() {
        let store = Arc::new(MemoryStore::new());
        let existing = ShortenResult {
            id: "old".to_string(),
            original_url: "https://example.com/old".to_string(),
            short_url: "https://tinyurl.com/old".to_string(),
            short_code: "old".to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        };
        save_history(&*store, &[existing.clone()]).unwrap();

        let h = harness_with(store, FakeClipboard::default());
        let view = h.session.view();
        assert_eq!(view.history_count, 1);
        assert_eq!(view.history[0].id, "old");
    }

    #[test]
    fn copy_delete_and_clear_flow_through_effects() {
        let mut h = harness();
        submit(&mut h.session, "https://example.com/a");
        submit(&mut h.session, "https://example.com/b");

        let views = h.session.dispatch([Msg::CopyCurrentClicked]);
        assert!(views.last().unwrap().current_copied);
        assert_eq!(
            *h.clipboard.copied.lock().unwrap(),
            vec!["https://tinyurl.com/s2".to_string()]
        );

        h.session.dispatch([Msg::DeleteHistoryItem {
            id: "id-1".to_string(),
        }]);
        assert_eq!(load_history(&*h.store).len(), 1);

        h.session.dispatch([Msg::ClearHistoryConfirmed]);
        assert!(load_history(&*h.store).is_empty());
        assert_eq!(h.session.view().session, SessionKind::Success);
    }

    #[test]
    fn clipboard_failure_is_not_surfaced_as_error() {
        let mut h = harness_with(
            Arc::new(MemoryStore::new()),
            FakeClipboard {
                broken: true,
                ..FakeClipboard::default()
            },
        );
        submit(&mut h.session, "https://example.com/a");
        h.session.dispatch([Msg::CopyCurrentClicked]);

        let view = h.session.view();
        assert!(!view.current_copied);
        assert_eq!(view.error, None);
    }
}
