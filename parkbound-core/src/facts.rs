//! Progress facts: the raw interaction records trackers write and
//! predicates read.
//!
//! Each fact family is independently owned by one tracker. Absence of a key
//! always means the default value here; no fact depends on another fact
//! being present.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::keys;
use crate::store::{KeyValueStore, read_json, write_json};

/// Theme-toggle rate counter. The window is anchored at the first toggle of
/// the current run: a gap longer than [`TOGGLE_WINDOW_MS`] since that anchor
/// starts a fresh run of one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRate {
    #[serde(default)]
    pub count: u32,
    #[serde(rename = "timestampMs", default)]
    pub timestamp_ms: u64,
}

/// Width of the toggle-counting window, in milliseconds.
pub const TOGGLE_WINDOW_MS: u64 = 10_000;
/// Toggles required inside one window.
pub const TOGGLE_TARGET: u32 = 50;

impl ToggleRate {
    /// Record one toggle at `now_ms`.
    pub fn record(&mut self, now_ms: u64) {
        if self.count == 0 || now_ms.saturating_sub(self.timestamp_ms) > TOGGLE_WINDOW_MS {
            self.count = 1;
            self.timestamp_ms = now_ms;
        } else {
            self.count += 1;
        }
    }

    /// Whether the current run's window is still open at `now_ms`. Progress
    /// displays show zero for a stale run.
    #[must_use]
    pub fn window_active(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.timestamp_ms) <= TOGGLE_WINDOW_MS
    }
}

/// Calendar-day visit streak. No time-of-day component: two visits on the
/// same date are one visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitStreak {
    #[serde(rename = "streakDays", default)]
    pub streak_days: u32,
    #[serde(rename = "lastVisit", default)]
    pub last_visit: Option<NaiveDate>,
}

/// Consecutive days required for the streak achievement.
pub const STREAK_TARGET: u32 = 7;

impl VisitStreak {
    /// Record a visit on `today`. Returns true when the record changed.
    pub fn record(&mut self, today: NaiveDate) -> bool {
        match self.last_visit {
            Some(last) if last == today => false,
            Some(last) if last.succ_opt() == Some(today) => {
                self.streak_days += 1;
                self.last_visit = Some(today);
                true
            }
            _ => {
                // First visit ever, or a gap of more than one day.
                self.streak_days = 1;
                self.last_visit = Some(today);
                true
            }
        }
    }
}

/// An ordered, de-duplicated set of indices (seen tips, clicked coasters).
/// Insertion order is preserved so exports stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexSet(pub Vec<usize>);

impl IndexSet {
    /// Insert an index; returns false if it was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.0.contains(&index) {
            false
        } else {
            self.0.push(index);
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn seen_tips<S: KeyValueStore + ?Sized>(store: &S) -> IndexSet {
    read_json(store, keys::SEEN_TIPS)
}

pub fn save_seen_tips<S: KeyValueStore + ?Sized>(store: &S, tips: &IndexSet) {
    write_json(store, keys::SEEN_TIPS, tips);
}

pub fn toggle_rate<S: KeyValueStore + ?Sized>(store: &S) -> ToggleRate {
    read_json(store, keys::THEME_TOGGLES)
}

pub fn save_toggle_rate<S: KeyValueStore + ?Sized>(store: &S, rate: &ToggleRate) {
    write_json(store, keys::THEME_TOGGLES, rate);
}

pub fn visit_streak<S: KeyValueStore + ?Sized>(store: &S) -> VisitStreak {
    read_json(store, keys::VISIT_STREAK)
}

pub fn save_visit_streak<S: KeyValueStore + ?Sized>(store: &S, streak: &VisitStreak) {
    write_json(store, keys::VISIT_STREAK, streak);
}

pub fn clicked_coasters<S: KeyValueStore + ?Sized>(store: &S) -> IndexSet {
    read_json(store, keys::CLICKED_COASTERS)
}

pub fn save_clicked_coasters<S: KeyValueStore + ?Sized>(store: &S, clicked: &IndexSet) {
    write_json(store, keys::CLICKED_COASTERS, clicked);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().expect("test date")
    }

    #[test]
    fn toggle_run_accumulates_within_window() {
        let mut rate = ToggleRate::default();
        rate.record(1_000);
        assert_eq!(rate, ToggleRate { count: 1, timestamp_ms: 1_000 });
        rate.record(5_000);
        rate.record(9_900);
        assert_eq!(rate.count, 3);
        // Anchor stays at the first toggle of the run.
        assert_eq!(rate.timestamp_ms, 1_000);
    }

    #[test]
    fn toggle_run_resets_after_window_expires() {
        let mut rate = ToggleRate::default();
        rate.record(1_000);
        rate.record(12_000);
        assert_eq!(rate, ToggleRate { count: 1, timestamp_ms: 12_000 });
    }

    #[test]
    fn streak_counts_consecutive_days_only() {
        let mut streak = VisitStreak::default();
        assert!(streak.record(day("2026-03-01")));
        assert_eq!(streak.streak_days, 1);
        // Same day: no-op.
        assert!(!streak.record(day("2026-03-01")));
        assert_eq!(streak.streak_days, 1);
        assert!(streak.record(day("2026-03-02")));
        assert_eq!(streak.streak_days, 2);
        // Two-day gap breaks the streak.
        assert!(streak.record(day("2026-03-05")));
        assert_eq!(streak.streak_days, 1);
    }

    #[test]
    fn index_set_ignores_duplicates() {
        let mut set = IndexSet::default();
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert!(set.insert(2));
        assert_eq!(set.0, vec![7, 2]);
    }
}
