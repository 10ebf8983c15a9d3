use crate::{validate_input, AppState, CopyTarget, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(input) => {
            state.set_input(input);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The trigger is disabled while a request is in flight.
            if *state.session() == SessionState::Submitting {
                return (state, Vec::new());
            }
            match validate_input(state.input()) {
                Ok(url) => {
                    state.begin_submission();
                    vec![Effect::Shorten { url }]
                }
                Err(err) => {
                    state.reject_submission(err);
                    Vec::new()
                }
            }
        }
        Msg::ShortenSucceeded(result) => {
            if *state.session() != SessionState::Submitting {
                return (state, Vec::new());
            }
            state.complete_submission(result);
            vec![Effect::PersistHistory(state.history_snapshot())]
        }
        Msg::ShortenFailed(message) => {
            if *state.session() != SessionState::Submitting {
                return (state, Vec::new());
            }
            state.fail_submission(message);
            Vec::new()
        }
        Msg::ResetClicked => {
            if *state.session() != SessionState::Submitting {
                state.reset();
            }
            Vec::new()
        }
        Msg::CopyCurrentClicked => match state.session() {
            SessionState::Success(result) => vec![Effect::CopyToClipboard {
                target: CopyTarget::Current,
                text: result.short_url.clone(),
            }],
            _ => Vec::new(),
        },
        Msg::CopyHistoryClicked { id } => match state.history().get(&id) {
            Some(entry) => vec![Effect::CopyToClipboard {
                text: entry.short_url.clone(),
                target: CopyTarget::History(id),
            }],
            None => Vec::new(),
        },
        Msg::CopyFinished { target, ok } => {
            state.set_copied(ok.then_some(target));
            Vec::new()
        }
        Msg::DeleteHistoryItem { id } => {
            if state.remove_history_entry(&id) {
                vec![Effect::PersistHistory(state.history_snapshot())]
            } else {
                Vec::new()
            }
        }
        Msg::ClearHistoryConfirmed => {
            if state.clear_history() {
                vec![Effect::PersistHistory(Vec::new())]
            } else {
                Vec::new()
            }
        }
        Msg::RestoreHistory(entries) => {
            state.restore_history(entries);
            Vec::new()
        }
    };

    (state, effects)
}
