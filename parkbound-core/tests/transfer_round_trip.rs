//! Export/import round-trip properties.

use parkbound_core::{
    AchievementId, AchievementManager, MemoryStore, export_json, import_snapshot, keys,
    store::KeyValueStore,
};

const EXPORT_DATE: &str = "2026-08-30T12:00:00Z";

fn populated_store() -> MemoryStore {
    let store = MemoryStore::new();
    let mut manager = AchievementManager::new(store.clone());
    for index in 0..12 {
        manager.record_tip_seen(index);
    }
    manager.record_theme_toggle(5_000);
    manager.record_theme_toggle(5_200);
    manager.record_coaster_click(2);
    manager.record_404_visit();
    manager.acknowledge_pending(AchievementId::NotFound);
    manager.record_pay_respects(); // left pending on purpose
    store.set(keys::F_EMOJI_ENABLED, "false");
    store
}

#[test]
fn export_import_export_is_byte_identical() {
    let store = populated_store();
    let exported = export_json(&store, EXPORT_DATE);

    let fresh = MemoryStore::new();
    import_snapshot(&fresh, &exported).expect("import should succeed");
    let re_exported = export_json(&fresh, EXPORT_DATE);

    assert_eq!(exported, re_exported);
}

#[test]
fn import_reproduces_manager_state() {
    let exported = export_json(&populated_store(), EXPORT_DATE);

    let fresh = MemoryStore::new();
    import_snapshot(&fresh, &exported).unwrap();
    let manager = AchievementManager::new(fresh.clone());

    assert!(manager.is_unlocked(AchievementId::NotFound));
    assert!(manager.is_pending(AchievementId::PayRespects));
    assert_eq!(fresh.get(keys::F_EMOJI_ENABLED).as_deref(), Some("false"));
}

#[test]
fn import_overwrites_existing_progress() {
    let exported = export_json(&populated_store(), EXPORT_DATE);

    // A store with divergent, even nonsense, prior state.
    let target = MemoryStore::new();
    target.set(keys::SEEN_TIPS, "[49]");
    target.set(keys::BIG_BOX_EXECUTED, "true");
    target.set(keys::UNLOCKED_ACHIEVEMENTS, r#"["bigBox"]"#);

    import_snapshot(&target, &exported).unwrap();
    let manager = AchievementManager::new(target.clone());
    assert!(!manager.is_unlocked(AchievementId::BigBox));
    // Keys absent from the export end up absent from the store.
    assert!(target.get(keys::BIG_BOX_EXECUTED).is_none());
}

#[test]
fn import_rejection_leaves_prior_state_alone() {
    let target = MemoryStore::new();
    target.set(keys::SEEN_TIPS, "[0,1,2]");
    let doc = r#"{"version":1,"exportDate":"x","achievements":{},"progress":{}}"#;
    assert!(import_snapshot(&target, doc).is_err());
    assert_eq!(target.get(keys::SEEN_TIPS).as_deref(), Some("[0,1,2]"));
}
