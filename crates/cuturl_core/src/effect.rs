use crate::{CopyTarget, ShortenResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the validated URL to the shortening service.
    Shorten { url: String },
    /// Overwrite the persisted history snapshot with these entries.
    PersistHistory(Vec<ShortenResult>),
    CopyToClipboard { target: CopyTarget, text: String },
}
