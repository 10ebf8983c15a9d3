use crate::view_model::{AppViewModel, HistoryRowView, SessionKind};
use crate::{History, ShortenResult, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Submitting,
    Success(ShortenResult),
    Failed(String),
}

/// What a clipboard write was for, so feedback lands on the right row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    Current,
    History(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    session: SessionState,
    validation_error: Option<ValidationError>,
    history: History,
    copied: Option<CopyTarget>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn copied(&self) -> Option<&CopyTarget> {
        self.copied.as_ref()
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let current = match &self.session {
            SessionState::Success(result) => Some(result.clone()),
            _ => None,
        };
        let error = match (&self.validation_error, &self.session) {
            (Some(err), _) => Some(err.to_string()),
            (None, SessionState::Failed(message)) => Some(message.clone()),
            _ => None,
        };
        let history = self
            .history
            .entries()
            .iter()
            .map(|entry| HistoryRowView {
                id: entry.id.clone(),
                original_url: entry.original_url.clone(),
                short_url: entry.short_url.clone(),
                short_code: entry.short_code.clone(),
                created_at: entry.created_at.clone(),
                copied: matches!(&self.copied, Some(CopyTarget::History(id)) if *id == entry.id),
            })
            .collect();

        AppViewModel {
            input: self.input.clone(),
            session: SessionKind::from(&self.session),
            current,
            error,
            is_submitting: self.session == SessionState::Submitting,
            current_copied: self.copied == Some(CopyTarget::Current),
            history_count: self.history.len(),
            history,
            dirty: self.dirty,
        }
    }

    pub fn history_snapshot(&self) -> Vec<ShortenResult> {
        self.history.entries().to_vec()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn reject_submission(&mut self, err: ValidationError) {
        self.validation_error = Some(err);
        self.copied = None;
        self.mark_dirty();
    }

    pub(crate) fn begin_submission(&mut self) {
        self.session = SessionState::Submitting;
        self.validation_error = None;
        self.copied = None;
        self.mark_dirty();
    }

    pub(crate) fn complete_submission(&mut self, result: ShortenResult) {
        self.history.upsert(result.clone());
        self.session = SessionState::Success(result);
        self.input.clear();
        self.mark_dirty();
    }

    pub(crate) fn fail_submission(&mut self, message: String) {
        self.session = SessionState::Failed(message);
        self.mark_dirty();
    }

    pub(crate) fn reset(&mut self) {
        self.session = SessionState::Idle;
        self.input.clear();
        self.validation_error = None;
        self.copied = None;
        self.mark_dirty();
    }

    pub(crate) fn set_copied(&mut self, target: Option<CopyTarget>) {
        if self.copied != target {
            self.copied = target;
            self.mark_dirty();
        }
    }

    pub(crate) fn remove_history_entry(&mut self, id: &str) -> bool {
        if !self.history.remove(id) {
            return false;
        }
        if matches!(&self.copied, Some(CopyTarget::History(copied)) if copied == id) {
            self.copied = None;
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn clear_history(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.history.clear();
        if matches!(self.copied, Some(CopyTarget::History(_))) {
            self.copied = None;
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn restore_history(&mut self, entries: Vec<ShortenResult>) {
        self.history = History::from_entries(entries);
        self.mark_dirty();
    }
}
