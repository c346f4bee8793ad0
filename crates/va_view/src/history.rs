use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use va_core::ArticleResult;

pub const MAX_HISTORY_ITEMS: usize = 5;
pub const UNTITLED_VIDEO: &str = "Untitled Video";

/// A result that is known to carry a video id.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    video_id: String,
    result: ArticleResult,
    submitted_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn title(&self) -> &str {
        self.result.title().unwrap_or(UNTITLED_VIDEO)
    }

    pub fn result(&self) -> &ArticleResult {
        &self.result
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

impl TryFrom<ArticleResult> for HistoryEntry {
    /// The result is handed back when it has no video id.
    type Error = ArticleResult;

    fn try_from(result: ArticleResult) -> Result<Self, Self::Error> {
        match result.video_id().map(str::to_string) {
            Some(video_id) => Ok(Self {
                video_id,
                result,
                submitted_at: Utc::now(),
            }),
            None => Err(result),
        }
    }
}

/// Row of the rendered history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub index: usize,
    pub video_id: String,
    pub title: String,
    pub active: bool,
}

/// Most-recent-first list of past results, one per video id.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_ITEMS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Put `entry` at the front. An existing entry for the same video is
    /// removed first; returns the entry evicted past the capacity, if any.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        if let Some(existing) = self.position(entry.video_id()) {
            self.entries.remove(existing);
        }
        self.entries.push_front(entry);

        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, video_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.video_id() == video_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Rows for display, marking the entry of `active_video_id`.
    pub fn items(&self, active_video_id: Option<&str>) -> Vec<HistoryItem> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| HistoryItem {
                index,
                video_id: entry.video_id().to_string(),
                title: entry.title().to_string(),
                active: Some(entry.video_id()) == active_video_id,
            })
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
