//! End-to-end engine scenarios: a visitor's facts accumulate across
//! "page loads" (fresh managers over the same store), achievements move
//! through pending to unlocked, and resets return the store to a pristine
//! state.

use chrono::NaiveDate;
use parkbound_core::{
    AchievementId, AchievementManager, COASTER_COUNT, MemoryStore, TIP_COUNT, cosmetic_enabled,
    keys, progress, store::KeyValueStore,
};

fn day(s: &str) -> NaiveDate {
    s.parse().expect("test date")
}

#[test]
fn tips_then_banner_then_cosmetic_toggle() {
    let store = MemoryStore::new();

    // Visitor refreshes through all the tips over many loads.
    {
        let mut manager = AchievementManager::new(store.clone());
        for index in 0..TIP_COUNT {
            manager.record_tip_seen(index);
        }
        assert!(manager.is_pending(AchievementId::LoadingTipsMaster));
    }

    // Next page load: nothing newly pends, but the pending item is still
    // there for the presenter to re-show.
    {
        let mut manager = AchievementManager::new(store.clone());
        assert!(manager.check_achievements().is_empty());
        assert_eq!(manager.pending(), &[AchievementId::LoadingTipsMaster]);

        // Claim it from the banner.
        assert!(manager.acknowledge_pending(AchievementId::LoadingTipsMaster));
        assert!(manager.is_unlocked(AchievementId::LoadingTipsMaster));
        // Cosmetic defaults on once unlocked.
        assert!(cosmetic_enabled(&manager, AchievementId::LoadingTipsMaster));
    }

    // And the unlock survives another reload.
    let manager = AchievementManager::new(store);
    assert!(manager.is_unlocked(AchievementId::LoadingTipsMaster));
    assert!(manager.pending().is_empty());
}

#[test]
fn week_long_streak_across_reloads() {
    let store = MemoryStore::new();
    let mut date = day("2026-08-24");
    for _ in 0..6 {
        let mut manager = AchievementManager::new(store.clone());
        assert!(manager.record_daily_visit(date).is_empty());
        date = date.succ_opt().unwrap();
    }
    let mut manager = AchievementManager::new(store);
    assert_eq!(manager.record_daily_visit(date), vec![AchievementId::Dedicated]);

    let report = progress(manager.store(), AchievementId::Dedicated, 0).unwrap();
    assert_eq!((report.current, report.total), (7, 7));
}

#[test]
fn coaster_study_progress_feeds_the_hub_card() {
    let store = MemoryStore::new();
    let mut manager = AchievementManager::new(store.clone());
    for index in 0..COASTER_COUNT / 2 {
        manager.record_coaster_click(index);
    }
    let report = progress(&store, AchievementId::Educated, 0).unwrap();
    assert_eq!(report.current as usize, COASTER_COUNT / 2);
    assert_eq!(report.percent(), 50);
    assert!(!manager.is_pending(AchievementId::Educated));
}

#[test]
fn reset_single_achievement_restores_pre_unlock_state() {
    let store = MemoryStore::new();
    let mut manager = AchievementManager::new(store.clone());
    manager.record_404_visit();
    manager.acknowledge_pending(AchievementId::NotFound);
    assert!(manager.is_unlocked(AchievementId::NotFound));

    manager.reset_achievement(AchievementId::NotFound);
    assert!(!manager.is_unlocked(AchievementId::NotFound));
    assert!(store.get(keys::VISITED_404).is_none());

    // With the fact gone the predicate is false again, so nothing re-pends.
    assert!(manager.check_achievements().is_empty());

    // Other achievements are untouched by a single reset.
    manager.record_barrel_roll();
    manager.reset_achievement(AchievementId::NotFound);
    assert!(manager.is_pending(AchievementId::BarrelRoll));
}

#[test]
fn reset_all_clears_every_key_it_owns() {
    let store = MemoryStore::new();
    let mut manager = AchievementManager::new(store.clone());
    manager.record_tip_seen(3);
    manager.record_theme_toggle(1_000);
    manager.record_coaster_click(0);
    manager.record_pay_respects();
    manager.acknowledge_pending(AchievementId::PayRespects);
    store.set(keys::F_EMOJI_ENABLED, "false");
    // The theme choice itself is chrome, not achievement state.
    store.set(keys::THEME, "dark");

    manager.reset_all();
    for key in keys::PROGRESS_KEYS.iter().chain(keys::PREFERENCE_KEYS) {
        assert!(store.get(key).is_none(), "`{key}` should be cleared");
    }
    assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
}
