//! Progress reporting for the celebration hub's locked cards.

use crate::catalog::AchievementId;
use crate::coasters::COASTER_COUNT;
use crate::facts::{self, STREAK_TARGET, TOGGLE_TARGET};
use crate::store::KeyValueStore;
use crate::tips::TIP_COUNT;

/// Progress toward one achievement, for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    pub current: u32,
    pub total: u32,
}

impl ProgressReport {
    /// Rounded completion percentage, clamped to 100.
    #[must_use]
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.current * 100 + self.total / 2) / self.total).min(100)
    }
}

/// Compute progress for an achievement, or `None` for the one-shot ones
/// whose locked card shows no bar. `now_ms` decides whether the toggle run's
/// window is still active; a stale run displays as zero.
#[must_use]
pub fn progress<S: KeyValueStore + ?Sized>(
    store: &S,
    id: AchievementId,
    now_ms: u64,
) -> Option<ProgressReport> {
    #[allow(clippy::cast_possible_truncation)]
    match id {
        AchievementId::LoadingTipsMaster => Some(ProgressReport {
            current: facts::seen_tips(store).len().min(TIP_COUNT) as u32,
            total: TIP_COUNT as u32,
        }),
        AchievementId::EpilepsyWarning => {
            let rate = facts::toggle_rate(store);
            let current = if rate.window_active(now_ms) { rate.count } else { 0 };
            Some(ProgressReport {
                current: current.min(TOGGLE_TARGET),
                total: TOGGLE_TARGET,
            })
        }
        AchievementId::Dedicated => Some(ProgressReport {
            current: facts::visit_streak(store).streak_days.min(STREAK_TARGET),
            total: STREAK_TARGET,
        }),
        AchievementId::Educated => Some(ProgressReport {
            current: facts::clicked_coasters(store).len().min(COASTER_COUNT) as u32,
            total: COASTER_COUNT as u32,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{IndexSet, ToggleRate};
    use crate::store::MemoryStore;

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(ProgressReport { current: 1, total: 3 }.percent(), 33);
        assert_eq!(ProgressReport { current: 2, total: 3 }.percent(), 67);
        assert_eq!(ProgressReport { current: 9, total: 7 }.percent(), 100);
        assert_eq!(ProgressReport { current: 0, total: 0 }.percent(), 0);
    }

    #[test]
    fn tip_progress_counts_seen_tips() {
        let store = MemoryStore::new();
        let mut seen = IndexSet::default();
        for i in 0..10 {
            seen.insert(i);
        }
        facts::save_seen_tips(&store, &seen);
        let report = progress(&store, AchievementId::LoadingTipsMaster, 0).unwrap();
        assert_eq!(report, ProgressReport { current: 10, total: 50 });
        assert_eq!(report.percent(), 20);
    }

    #[test]
    fn toggle_progress_is_zero_once_the_window_lapses() {
        let store = MemoryStore::new();
        facts::save_toggle_rate(&store, &ToggleRate { count: 30, timestamp_ms: 1_000 });
        let active = progress(&store, AchievementId::EpilepsyWarning, 5_000).unwrap();
        assert_eq!(active.current, 30);
        let stale = progress(&store, AchievementId::EpilepsyWarning, 20_000).unwrap();
        assert_eq!(stale.current, 0);
    }

    #[test]
    fn one_shot_achievements_have_no_progress_bar() {
        let store = MemoryStore::new();
        assert!(progress(&store, AchievementId::BarrelRoll, 0).is_none());
        assert!(progress(&store, AchievementId::NotFound, 0).is_none());
        assert!(progress(&store, AchievementId::PayRespects, 0).is_none());
    }
}
