//! CutURL core: pure state machine, history collection and view-model helpers.
mod effect;
mod history;
mod msg;
mod result;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use history::{History, UpsertOutcome, MAX_HISTORY_ITEMS};
pub use msg::Msg;
pub use result::ShortenResult;
pub use state::{AppState, CopyTarget, SessionState};
pub use update::update;
pub use validate::{is_valid_url, validate_input, ValidationError};
pub use view_model::{AppViewModel, HistoryRowView, SessionKind};
