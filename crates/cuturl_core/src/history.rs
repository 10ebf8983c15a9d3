use crate::ShortenResult;

/// Upper bound on remembered shortenings.
pub const MAX_HISTORY_ITEMS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new entry was placed at the front.
    Inserted,
    /// An entry for the same original URL was moved to the front.
    Refreshed,
}

/// Past shortenings, most recent first, one entry per original URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History {
    entries: Vec<ShortenResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from an arbitrary list, e.g. a persisted snapshot.
    ///
    /// Later duplicates of an original URL are dropped and the list is cut to
    /// [`MAX_HISTORY_ITEMS`].
    pub fn from_entries(entries: Vec<ShortenResult>) -> Self {
        let mut kept: Vec<ShortenResult> = Vec::with_capacity(entries.len().min(MAX_HISTORY_ITEMS));
        for entry in entries {
            if kept.len() == MAX_HISTORY_ITEMS {
                break;
            }
            if kept.iter().any(|k| k.original_url == entry.original_url) {
                continue;
            }
            kept.push(entry);
        }
        Self { entries: kept }
    }

    /// Records `result` as the most recent shortening.
    ///
    /// When the original URL is already known, the existing entry keeps its
    /// id and short URL and only takes over the new timestamp.
    pub fn upsert(&mut self, result: ShortenResult) -> UpsertOutcome {
        let outcome = match self
            .entries
            .iter()
            .position(|entry| entry.original_url == result.original_url)
        {
            Some(index) => {
                let mut existing = self.entries.remove(index);
                existing.created_at = result.created_at;
                self.entries.insert(0, existing);
                UpsertOutcome::Refreshed
            }
            None => {
                self.entries.insert(0, result);
                UpsertOutcome::Inserted
            }
        };
        self.entries.truncate(MAX_HISTORY_ITEMS);
        outcome
    }

    /// Removes the entry with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &str) -> Option<&ShortenResult> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[ShortenResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
