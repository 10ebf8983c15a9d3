#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current input for shortening.
    SubmitClicked,
    /// The shortening service returned a result for the in-flight request.
    ShortenSucceeded(crate::ShortenResult),
    /// The in-flight request failed; carries the message to show.
    ShortenFailed(String),
    /// User dismissed the current result or error.
    ResetClicked,
    /// User asked to copy the current short URL.
    CopyCurrentClicked,
    /// User asked to copy a short URL from the history list.
    CopyHistoryClicked { id: String },
    /// Clipboard write finished.
    CopyFinished {
        target: crate::CopyTarget,
        ok: bool,
    },
    /// User deleted one history entry.
    DeleteHistoryItem { id: String },
    /// User confirmed clearing the whole history.
    ClearHistoryConfirmed,
    /// Seed history from the persisted snapshot at startup.
    RestoreHistory(Vec<crate::ShortenResult>),
}
