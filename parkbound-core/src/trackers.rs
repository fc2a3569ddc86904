//! Tracker operations: record a raw interaction fact, then re-evaluate the
//! catalog.
//!
//! Common contract: read the current fact (absent -> default), write the
//! updated fact, run `check_achievements`, return the newly pending ids so
//! the presenter can pick a banner. Every tracker is idempotent with respect
//! to its fact except the toggle-rate counter, which is a resetting counter
//! by design.
//!
//! The engine never reads a clock; callers pass `now_ms` / `today` in.

use chrono::NaiveDate;

use crate::catalog::AchievementId;
use crate::coasters::COASTER_COUNT;
use crate::facts;
use crate::keys;
use crate::manager::AchievementManager;
use crate::store::{KeyValueStore, latch_flag};
use crate::tips::TIP_COUNT;

/// Zoom percentage that latches the bad-vision fact.
pub const ZOOM_TARGET_PERCENT: u32 = 500;

impl<S: KeyValueStore> AchievementManager<S> {
    /// A loading tip was displayed.
    pub fn record_tip_seen(&mut self, index: usize) -> Vec<AchievementId> {
        if index >= TIP_COUNT {
            log::warn!("ignoring out-of-range tip index {index}");
            return Vec::new();
        }
        let mut seen = facts::seen_tips(self.store());
        if seen.insert(index) {
            facts::save_seen_tips(self.store(), &seen);
        }
        self.check_achievements()
    }

    /// The theme toggle was clicked at `now_ms` (epoch milliseconds).
    pub fn record_theme_toggle(&mut self, now_ms: u64) -> Vec<AchievementId> {
        let mut rate = facts::toggle_rate(self.store());
        rate.record(now_ms);
        facts::save_toggle_rate(self.store(), &rate);
        self.check_achievements()
    }

    /// The devtools console was detected open.
    pub fn record_console_opened(&mut self) -> Vec<AchievementId> {
        latch_flag(self.store(), keys::DEV_CONSOLE_OPENED);
        self.check_achievements()
    }

    /// The 404 page was rendered.
    pub fn record_404_visit(&mut self) -> Vec<AchievementId> {
        latch_flag(self.store(), keys::VISITED_404);
        self.check_achievements()
    }

    /// A page was loaded on `today` (visitor-local calendar date).
    pub fn record_daily_visit(&mut self, today: NaiveDate) -> Vec<AchievementId> {
        let mut streak = facts::visit_streak(self.store());
        if streak.record(today) {
            facts::save_visit_streak(self.store(), &streak);
        }
        self.check_achievements()
    }

    /// A coaster card was expanded (0-based position in the canonical list).
    pub fn record_coaster_click(&mut self, index: usize) -> Vec<AchievementId> {
        if index >= COASTER_COUNT {
            log::warn!("ignoring out-of-range coaster index {index}");
            return Vec::new();
        }
        let mut clicked = facts::clicked_coasters(self.store());
        if clicked.insert(index) {
            facts::save_clicked_coasters(self.store(), &clicked);
        }
        self.check_achievements()
    }

    /// `barrelRoll()` was executed from the console.
    pub fn record_barrel_roll(&mut self) -> Vec<AchievementId> {
        latch_flag(self.store(), keys::BARREL_ROLL_EXECUTED);
        self.check_achievements()
    }

    /// `bigBox()` was executed from the console.
    pub fn record_big_box(&mut self) -> Vec<AchievementId> {
        latch_flag(self.store(), keys::BIG_BOX_EXECUTED);
        self.check_achievements()
    }

    /// A zoom estimate was computed (on load or resize). Latches once the
    /// estimate reaches [`ZOOM_TARGET_PERCENT`]; lower readings later never
    /// un-latch the fact.
    pub fn record_zoom_level(&mut self, percent: u32) -> Vec<AchievementId> {
        if percent >= ZOOM_TARGET_PERCENT {
            latch_flag(self.store(), keys::BAD_VISION_UNLOCKED);
        }
        self.check_achievements()
    }

    /// The protected coaster was dropped into last place.
    pub fn record_blasphemy(&mut self) -> Vec<AchievementId> {
        latch_flag(self.store(), keys::BLASPHEMY_COMMITTED);
        self.check_achievements()
    }

    /// The visitor pressed F outside an editable element.
    pub fn record_pay_respects(&mut self) -> Vec<AchievementId> {
        latch_flag(self.store(), keys::PAY_RESPECTS);
        self.check_achievements()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn manager() -> AchievementManager<MemoryStore> {
        AchievementManager::new(MemoryStore::new())
    }

    #[test]
    fn tip_tracker_pends_after_all_tips() {
        let mut m = manager();
        for index in 0..TIP_COUNT - 1 {
            assert!(m.record_tip_seen(index).is_empty());
        }
        // Re-seeing an old tip does not finish the set.
        assert!(m.record_tip_seen(0).is_empty());
        let newly = m.record_tip_seen(TIP_COUNT - 1);
        assert_eq!(newly, vec![AchievementId::LoadingTipsMaster]);
    }

    #[test]
    fn out_of_range_tip_is_ignored() {
        let mut m = manager();
        assert!(m.record_tip_seen(TIP_COUNT).is_empty());
        assert!(facts::seen_tips(m.store()).is_empty());
    }

    #[test]
    fn fifty_fast_toggles_pend_epilepsy_warning() {
        let mut m = manager();
        // 49 toggles spread over 9 seconds, then one more at 9.9s.
        for i in 0..49u64 {
            let newly = m.record_theme_toggle(1_000 + i * 180);
            assert!(newly.is_empty(), "toggle {i} should not pend yet");
        }
        let newly = m.record_theme_toggle(1_000 + 9_900);
        assert_eq!(newly, vec![AchievementId::EpilepsyWarning]);
    }

    #[test]
    fn a_long_gap_before_the_fiftieth_toggle_resets_the_run() {
        let mut m = manager();
        for i in 0..49u64 {
            m.record_theme_toggle(1_000 + i * 180);
        }
        // 10.5s after the run's anchor: counter restarts at 1.
        assert!(m.record_theme_toggle(1_000 + 10_500).is_empty());
        assert_eq!(facts::toggle_rate(m.store()).count, 1);
    }

    #[test]
    fn seven_day_streak_pends_dedicated() {
        let mut m = manager();
        let start: NaiveDate = "2026-05-01".parse().unwrap();
        let mut day = start;
        for visit in 1..=6 {
            assert!(m.record_daily_visit(day).is_empty(), "day {visit}");
            day = day.succ_opt().unwrap();
        }
        let newly = m.record_daily_visit(day);
        assert_eq!(newly, vec![AchievementId::Dedicated]);
        assert_eq!(facts::visit_streak(m.store()).streak_days, 7);
    }

    #[test]
    fn skipping_a_day_resets_the_streak() {
        let mut m = manager();
        let d6: NaiveDate = "2026-05-06".parse().unwrap();
        let d8: NaiveDate = "2026-05-08".parse().unwrap();
        m.record_daily_visit(d6);
        m.record_daily_visit(d8);
        assert_eq!(facts::visit_streak(m.store()).streak_days, 1);
    }

    #[test]
    fn sixteen_distinct_coaster_clicks_pend_educated() {
        let mut m = manager();
        // Click them out of order, with repeats sprinkled in.
        for index in (0..COASTER_COUNT - 1).rev() {
            assert!(m.record_coaster_click(index).is_empty());
            assert!(m.record_coaster_click(index).is_empty());
        }
        let newly = m.record_coaster_click(COASTER_COUNT - 1);
        assert_eq!(newly, vec![AchievementId::Educated]);
        assert_eq!(facts::clicked_coasters(m.store()).len(), COASTER_COUNT);
    }

    #[test]
    fn zoom_latches_at_target_and_stays_latched() {
        let mut m = manager();
        assert!(m.record_zoom_level(499).is_empty());
        let newly = m.record_zoom_level(500);
        assert_eq!(newly, vec![AchievementId::BadVision]);
        // A lower reading later must not clear the fact.
        m.record_zoom_level(100);
        assert!(crate::store::read_flag(m.store(), keys::BAD_VISION_UNLOCKED));
    }

    #[test]
    fn one_shot_trackers_pend_exactly_once() {
        let mut m = manager();
        assert_eq!(m.record_404_visit(), vec![AchievementId::NotFound]);
        assert!(m.record_404_visit().is_empty());
        assert_eq!(m.record_barrel_roll(), vec![AchievementId::BarrelRoll]);
        assert_eq!(m.record_big_box(), vec![AchievementId::BigBox]);
        assert_eq!(m.record_blasphemy(), vec![AchievementId::Blasphemy]);
        assert_eq!(m.record_pay_respects(), vec![AchievementId::PayRespects]);
    }

    #[test]
    fn newly_pending_follow_catalog_order() {
        let mut m = manager();
        latch_flag(m.store(), keys::PAY_RESPECTS);
        latch_flag(m.store(), keys::VISITED_404);
        // Both facts are set; the 404 tracker's check reports both, catalog
        // order first.
        let newly = m.record_404_visit();
        assert_eq!(newly, vec![AchievementId::NotFound, AchievementId::PayRespects]);
    }
}
