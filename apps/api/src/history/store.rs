//! History Store — ordered list of saved recommendations, most recent first.
//!
//! The in-memory list is the source of truth. After every mutation the whole
//! list is written to the backend. Backend failures are logged and swallowed:
//! losing history never fails the caller's action.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::history::backend::HistoryBackend;
use crate::models::history::HistoryEntry;
use crate::models::profile::{Profile, Recommendation};

pub const UNTITLED: &str = "Untitled recommendation";

pub struct HistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
    backend: Arc<dyn HistoryBackend>,
}

impl HistoryStore {
    /// Reads the backend once. An unreadable backend starts with empty history.
    pub fn open(backend: Arc<dyn HistoryBackend>) -> Self {
        let entries = match backend.load() {
            Ok(entries) => {
                info!("Loaded {} history entries", entries.len());
                entries
            }
            Err(e) => {
                warn!("History unavailable, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            entries: Mutex::new(entries),
            backend,
        }
    }

    /// All entries, most recent first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.lock().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<HistoryEntry> {
        self.lock().iter().find(|e| e.id == id).cloned()
    }

    /// Records a new entry at the front of the list and persists the list.
    ///
    /// A blank title falls back to the first suggested career path.
    pub fn save(
        &self,
        title: &str,
        profile: Profile,
        recommendation: Recommendation,
    ) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            title: resolve_title(title, &recommendation),
            created_at: Utc::now(),
            profile,
            recommendation,
        };

        let mut entries = self.lock();
        entries.insert(0, entry.clone());
        self.persist(&entries);
        info!("Saved history entry {} ({} total)", entry.id, entries.len());

        entry
    }

    /// Removes the entry with `id`. Returns `false`, and leaves storage
    /// untouched, when no such entry exists.
    pub fn delete(&self, id: Uuid) -> bool {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return false;
        }

        self.persist(&entries);
        info!("Deleted history entry {id}");
        true
    }

    /// Empties the list. Safe to call on an already empty list.
    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.clear();
        self.persist(&entries);
        info!("Cleared history");
    }

    fn persist(&self, entries: &[HistoryEntry]) {
        if let Err(e) = self.backend.store(entries) {
            error!("Failed to persist history: {e}");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HistoryEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn resolve_title(title: &str, recommendation: &Recommendation) -> String {
    let title = title.trim();
    if !title.is_empty() {
        return title.to_string();
    }
    recommendation
        .career_paths
        .iter()
        .map(|p| p.trim())
        .find(|p| !p.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}
