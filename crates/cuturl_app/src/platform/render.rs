use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use cuturl_core::{AppViewModel, HistoryRowView, ShortenResult};

const HISTORY_URL_WIDTH: usize = 50;

pub fn render(view: &AppViewModel, now: DateTime<Utc>) -> String {
    if view.is_submitting {
        return "Shortening ...".to_string();
    }

    let mut out = String::new();
    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }
    if let Some(current) = &view.current {
        out.push_str(&render_result(current, view.current_copied));
    }
    out.push_str(&render_history(view, now));
    out
}

fn render_result(result: &ShortenResult, copied: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Link shortened");
    let _ = writeln!(out, "  Original: {}", result.original_url);
    let marker = if copied { "  [copied]" } else { "" };
    let _ = writeln!(out, "  Short:    {}{marker}", result.short_url);
    let _ = writeln!(
        out,
        "  Code: {} | {}",
        result.short_code,
        format_timestamp(&result.created_at)
    );
    out
}

pub fn render_history(view: &AppViewModel, now: DateTime<Utc>) -> String {
    if view.history.is_empty() {
        return "History is empty. Shortened links will appear here.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "History ({})", view.history_count);
    for (index, row) in view.history.iter().enumerate() {
        out.push_str(&render_row(index + 1, row, now));
    }
    out
}

fn render_row(position: usize, row: &HistoryRowView, now: DateTime<Utc>) -> String {
    let marker = if row.copied { "  [copied]" } else { "" };
    format!(
        "{position:>3}. {}  <- {}  ({}){marker}\n",
        row.short_url,
        truncate_url(&row.original_url, HISTORY_URL_WIDTH),
        format_relative(&row.created_at, now)
    )
}

/// "just now", "5 min ago", "3 h ago", or the local date for anything older than a day.
pub fn format_relative(created_at: &str, now: DateTime<Utc>) -> String {
    let Ok(created) = DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };
    let elapsed = now.signed_duration_since(created.with_timezone(&Utc));
    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("{} min ago", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("{} h ago", elapsed.num_hours());
    }
    created
        .with_timezone(&Local)
        .format("%-d %b %Y, %H:%M")
        .to_string()
}

fn format_timestamp(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(created) => created
            .with_timezone(&Local)
            .format("%-d %b %Y, %H:%M:%S")
            .to_string(),
        Err(_) => created_at.to_string(),
    }
}

/// Cuts `url` to `max_chars` characters, marking the cut with "...".
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    match url.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &url[..byte_index]),
        None => url.to_string(),
    }
}
