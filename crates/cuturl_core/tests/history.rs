use cuturl_core::{History, ShortenResult, UpsertOutcome, MAX_HISTORY_ITEMS};
use pretty_assertions::assert_eq;

fn result(id: &str, url: &str, created_at: &str) -> ShortenResult {
    ShortenResult {
        id: id.to_string(),
        original_url: url.to_string(),
        short_url: format!("https://tinyurl.com/{id}"),
        short_code: id.to_string(),
        created_at: created_at.to_string(),
    }
}

fn urls(history: &History) -> Vec<&str> {
    history
        .entries()
        .iter()
        .map(|e| e.original_url.as_str())
        .collect()
}

#[test]
fn upsert_prepends_new_entries() {
    let mut history = History::new();
    assert_eq!(
        history.upsert(result("a", "https://a.example.com", "t1")),
        UpsertOutcome::Inserted
    );
    history.upsert(result("b", "https://b.example.com", "t2"));

    assert_eq!(urls(&history), vec!["https://b.example.com", "https://a.example.com"]);
}

#[test]
fn upsert_of_known_url_refreshes_timestamp_and_keeps_identity() {
    let mut history = History::new();
    history.upsert(result("a", "https://a.example.com", "t1"));
    history.upsert(result("b", "https://b.example.com", "t2"));

    let outcome = history.upsert(result("c", "https://a.example.com", "t3"));

    assert_eq!(outcome, UpsertOutcome::Refreshed);
    assert_eq!(history.len(), 2);
    let front = &history.entries()[0];
    assert_eq!(front.id, "a");
    assert_eq!(front.short_url, "https://tinyurl.com/a");
    assert_eq!(front.short_code, "a");
    assert_eq!(front.created_at, "t3");
}

#[test]
fn upsert_twice_with_same_result_is_idempotent() {
    let mut once = History::new();
    once.upsert(result("a", "https://a.example.com", "t1"));

    let mut twice = once.clone();
    twice.upsert(result("a", "https://a.example.com", "t1"));

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[test]
fn length_is_bounded_and_front_is_latest() {
    let mut history = History::new();
    for i in 0..(MAX_HISTORY_ITEMS + 25) {
        let url = format!("https://example.com/{i}");
        history.upsert(result(&i.to_string(), &url, &format!("t{i}")));
        assert!(history.len() <= MAX_HISTORY_ITEMS);
        assert_eq!(history.entries()[0].original_url, url);
    }
    assert_eq!(history.len(), MAX_HISTORY_ITEMS);
    assert_eq!(
        history.entries().last().unwrap().original_url,
        "https://example.com/25"
    );
}

#[test]
fn remove_twice_is_noop_the_second_time() {
    let mut history = History::new();
    history.upsert(result("a", "https://a.example.com", "t1"));
    history.upsert(result("b", "https://b.example.com", "t2"));

    assert!(history.remove("a"));
    let after_first = history.clone();
    assert!(!history.remove("a"));

    assert_eq!(history, after_first);
    assert_eq!(urls(&history), vec!["https://b.example.com"]);
}

#[test]
fn clear_empties_history() {
    let mut history = History::new();
    history.upsert(result("a", "https://a.example.com", "t1"));
    history.clear();
    assert!(history.is_empty());
    assert!(history.get("a").is_none());
}

#[test]
fn from_entries_drops_duplicates_and_truncates() {
    let mut entries = vec![
        result("a", "https://a.example.com", "t3"),
        result("b", "https://b.example.com", "t2"),
        result("c", "https://a.example.com", "t1"),
    ];
    for i in 0..MAX_HISTORY_ITEMS {
        entries.push(result(&format!("x{i}"), &format!("https://x.example.com/{i}"), "t0"));
    }

    let history = History::from_entries(entries);

    assert_eq!(history.len(), MAX_HISTORY_ITEMS);
    assert_eq!(history.entries()[0].id, "a");
    assert_eq!(history.entries()[1].id, "b");
    assert!(history.get("c").is_none());
}
