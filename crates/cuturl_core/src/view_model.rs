use crate::{SessionState, ShortenResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionKind {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl From<&SessionState> for SessionKind {
    fn from(state: &SessionState) -> Self {
        match state {
            SessionState::Idle => SessionKind::Idle,
            SessionState::Submitting => SessionKind::Submitting,
            SessionState::Success(_) => SessionKind::Success,
            SessionState::Failed(_) => SessionKind::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub session: SessionKind,
    /// Result card contents, present only after a successful submission.
    pub current: Option<ShortenResult>,
    /// Validation or service error to show under the form.
    pub error: Option<String>,
    /// The submit trigger must be disabled while this is set.
    pub is_submitting: bool,
    pub current_copied: bool,
    pub history: Vec<HistoryRowView>,
    pub history_count: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub created_at: String,
    pub copied: bool,
}
