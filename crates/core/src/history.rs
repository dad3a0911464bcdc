use tracing::{debug, warn};

use crate::storage::Storage;

/// Previously submitted lines plus the recall cursor.
///
/// Entries are kept in submission order: index 0 is the first line ever
/// pushed, `len() - 1` the most recent one. Recalling "older" therefore walks
/// indices downward, "newer" walks them upward.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
    browse: Option<usize>,
    draft: Option<String>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    /// Reads the slot once; anything unreadable counts as an empty history.
    pub fn load_or_default(storage: &Storage, slot: &str) -> Self {
        match storage.load_list(slot) {
            Ok(entries) => {
                debug!(target: "console", "history: loaded {} entries from '{}'", entries.len(), slot);
                Self::from_entries(entries)
            }
            Err(e) => {
                warn!(target: "console", "history: starting empty, {}", e);
                Self::new()
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn browse_index(&self) -> Option<usize> {
        self.browse
    }

    /// The entry currently being viewed, if any.
    pub fn selected(&self) -> Option<&str> {
        self.browse.and_then(|i| self.get(i))
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.reset_browse();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.reset_browse();
    }

    /// Leaves browse mode without touching the entries.
    pub fn reset_browse(&mut self) {
        self.browse = None;
        self.draft = None;
    }

    pub fn clamp_index(&mut self, requested: usize) {
        self.browse = if self.entries.is_empty() {
            None
        } else {
            Some(requested.min(self.entries.len() - 1))
        };
    }

    /// Steps toward older entries. The first step lands on the most recent
    /// entry; index 0 is a floor. `live` is kept as the draft so that
    /// stepping back out restores it.
    pub fn recall_older(&mut self, live: &str) -> Option<&str> {
        match self.browse {
            None => {
                if self.entries.is_empty() {
                    return None;
                }
                self.draft = Some(live.to_string());
                self.clamp_index(usize::MAX);
            }
            Some(i) => self.clamp_index(i.saturating_sub(1)),
        }
        self.selected()
    }

    /// Steps toward newer entries. Past the newest entry browsing ends and
    /// the saved draft comes back as `Recall::Draft`.
    pub fn recall_newer(&mut self) -> Option<Recall<'_>> {
        let i = self.browse?;
        if i + 1 < self.entries.len() {
            self.clamp_index(i + 1);
            return self.selected().map(Recall::Entry);
        }
        self.browse = None;
        Some(Recall::Draft(self.draft.take().unwrap_or_default()))
    }
}

/// Outcome of a step toward newer history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall<'a> {
    Entry(&'a str),
    Draft(String),
}
