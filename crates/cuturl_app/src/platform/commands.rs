use cuturl_core::{AppViewModel, Msg};

pub const HELP: &str = "\
Commands:
  <url>                 shorten a URL (same as `shorten <url>`)
  shorten <url>         shorten a URL
  copy                  copy the current short URL
  copy <n|id>           copy a short URL from history
  delete <n|id>         remove a history entry
  clear                 remove all history entries
  reset                 dismiss the current result
  history               show the history list
  help                  show this help
  quit                  exit";

/// A history row addressed either by its 1-based position or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRef {
    Index(usize),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shorten(String),
    CopyCurrent,
    CopyHistory(RowRef),
    Delete(RowRef),
    Clear,
    Reset,
    History,
    Help,
    Quit,
    Nothing,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "shorten" => Command::Shorten(rest.to_string()),
        "copy" | "cp" if rest.is_empty() => Command::CopyCurrent,
        "copy" | "cp" => Command::CopyHistory(parse_row(rest)),
        "delete" | "del" | "rm" if rest.is_empty() => {
            return Err("Usage: delete <n|id>".to_string());
        }
        "delete" | "del" | "rm" => Command::Delete(parse_row(rest)),
        "clear" if rest.is_empty() => Command::Clear,
        "reset" | "new" if rest.is_empty() => Command::Reset,
        "history" | "ls" if rest.is_empty() => Command::History,
        "help" | "?" if rest.is_empty() => Command::Help,
        "quit" | "exit" | "q" if rest.is_empty() => Command::Quit,
        _ => Command::Shorten(line.to_string()),
    };
    Ok(command)
}

fn parse_row(text: &str) -> RowRef {
    match text.parse::<usize>() {
        Ok(index) => RowRef::Index(index),
        Err(_) => RowRef::Id(text.to_string()),
    }
}

/// Resolves a row reference against what the user currently sees.
pub fn resolve_row(row: &RowRef, view: &AppViewModel) -> Result<String, String> {
    match row {
        RowRef::Index(index) => index
            .checked_sub(1)
            .and_then(|i| view.history.get(i))
            .map(|entry| entry.id.clone())
            .ok_or_else(|| format!("No history entry #{index}")),
        RowRef::Id(id) => Ok(id.clone()),
    }
}

/// Messages to dispatch for commands that map directly onto the state machine.
pub fn to_messages(command: Command, view: &AppViewModel) -> Result<Vec<Msg>, String> {
    let msgs = match command {
        Command::Shorten(input) => {
            if view.is_submitting {
                return Err("A link is already being shortened".to_string());
            }
            vec![Msg::InputChanged(input), Msg::SubmitClicked]
        }
        Command::CopyCurrent => {
            if view.current.is_none() {
                return Err("Nothing to copy yet".to_string());
            }
            vec![Msg::CopyCurrentClicked]
        }
        Command::CopyHistory(row) => vec![Msg::CopyHistoryClicked {
            id: resolve_row(&row, view)?,
        }],
        Command::Delete(row) => vec![Msg::DeleteHistoryItem {
            id: resolve_row(&row, view)?,
        }],
        Command::Reset => vec![Msg::ResetClicked],
        Command::Clear | Command::History | Command::Help | Command::Quit | Command::Nothing => {
            Vec::new()
        }
    };
    Ok(msgs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuturl_core::HistoryRowView;

    fn view_with_rows(ids: &[&str]) -> AppViewModel {
        AppViewModel {
            history: ids
                .iter()
                .map(|id| HistoryRowView {
                    id: id.to_string(),
                    original_url: format!("https://example.com/{id}"),
                    short_url: format!("https://tinyurl.com/{id}"),
                    short_code: id.to_string(),
                    created_at: String::new(),
                    copied: false,
                })
                .collect(),
            history_count: ids.len(),
            ..AppViewModel::default()
        }
    }

    #[test]
    fn bare_text_is_a_shorten_request() {
        assert_eq!(
            parse("  https://example.com/a ").unwrap(),
            Command::Shorten("https://example.com/a".to_string())
        );
        assert_eq!(
            parse("not a url").unwrap(),
            Command::Shorten("not a url".to_string())
        );
        assert_eq!(parse("shorten").unwrap(), Command::Shorten(String::new()));
        assert_eq!(parse("   ").unwrap(), Command::Nothing);
    }

    #[test]
    fn keywords_parse_with_row_references() {
        assert_eq!(parse("copy").unwrap(), Command::CopyCurrent);
        assert_eq!(
            parse("copy 2").unwrap(),
            Command::CopyHistory(RowRef::Index(2))
        );
        assert_eq!(
            parse("DELETE abc-123").unwrap(),
            Command::Delete(RowRef::Id("abc-123".to_string()))
        );
        assert_eq!(parse("clear").unwrap(), Command::Clear);
        assert_eq!(parse("q").unwrap(), Command::Quit);
        assert!(parse("delete").is_err());
    }

    #[test]
    fn rows_resolve_by_position_or_id() {
        let view = view_with_rows(&["a", "b"]);
        assert_eq!(resolve_row(&RowRef::Index(2), &view), Ok("b".to_string()));
        assert!(resolve_row(&RowRef::Index(0), &view).is_err());
        assert!(resolve_row(&RowRef::Index(3), &view).is_err());
        assert_eq!(
            resolve_row(&RowRef::Id("zzz".to_string()), &view),
            Ok("zzz".to_string())
        );
    }

    #[test]
    fn shorten_maps_to_input_then_submit() {
        let view = view_with_rows(&[]);
        assert_eq!(
            to_messages(Command::Shorten("https://example.com".to_string()), &view).unwrap(),
            vec![
                Msg::InputChanged("https://example.com".to_string()),
                Msg::SubmitClicked
            ]
        );
        assert!(to_messages(Command::CopyCurrent, &view).is_err());
        assert_eq!(
            to_messages(Command::Delete(RowRef::Index(1)), &view_with_rows(&["x"])).unwrap(),
            vec![Msg::DeleteHistoryItem {
                id: "x".to_string()
            }]
        );
    }
}
