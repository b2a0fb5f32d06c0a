//! Achievement progress document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::constants::ACHIEVEMENTS_VERSION;

/// Progress against one achievement id. The catalog (names, requirements,
/// rewards) lives with the observing collaborator, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementEntry {
    pub progress: f64,
    pub completed: bool,
    pub claimed: bool,
}

/// The persisted achievement document, keyed by achievement id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievements {
    pub version: u32,
    #[serde(default)]
    pub entries: BTreeMap<String, AchievementEntry>,
}

impl Default for Achievements {
    fn default() -> Self {
        Self {
            version: ACHIEVEMENTS_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

impl Achievements {
    /// Record observed progress for an id. Progress is monotonic: a lower
    /// observation never overwrites a higher one.
    pub fn update_progress(&mut self, id: &str, progress: f64) {
        if !progress.is_finite() {
            return;
        }
        let entry = self.entries.entry(id.to_string()).or_default();
        entry.progress = entry.progress.max(progress);
    }

    pub fn mark_completed(&mut self, id: &str) {
        self.entries.entry(id.to_string()).or_default().completed = true;
    }

    /// Claim a completed achievement. Returns false (no mutation) unless it
    /// is completed and unclaimed.
    pub fn claim(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.completed && !entry.claimed => {
                entry.claimed = true;
                true
            }
            _ => false,
        }
    }

    pub fn progress(&self, id: &str) -> f64 {
        self.entries.get(id).map(|e| e.progress).unwrap_or(0.0)
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.entries.get(id).map(|e| e.completed).unwrap_or(false)
    }

    /// Wipe all progress (invoked by the game-reset command).
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
