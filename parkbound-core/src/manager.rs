//! The achievement manager: owns the unlocked and pending sets.
//!
//! Invariants the manager maintains at every observable point:
//! - the two sets are disjoint and free of duplicates
//! - an id enters `pending` only through a satisfied predicate
//! - an id enters `unlocked` only through acknowledgment (or the direct
//!   [`AchievementManager::unlock`] path kept for legacy imports)

use crate::catalog::{self, AchievementId, CATALOG};
use crate::keys;
use crate::store::{KeyValueStore, read_json, write_json};

pub struct AchievementManager<S: KeyValueStore> {
    store: S,
    unlocked: Vec<AchievementId>,
    pending: Vec<AchievementId>,
}

impl<S: KeyValueStore> AchievementManager<S> {
    /// Load both sets from the store. Ids that no longer resolve against the
    /// catalog are dropped with a warning rather than kept as dead weight.
    pub fn new(store: S) -> Self {
        let unlocked = Self::load_set(&store, keys::UNLOCKED_ACHIEVEMENTS);
        let pending = Self::load_set(&store, keys::PENDING_ACHIEVEMENTS);
        let mut manager = Self {
            store,
            unlocked,
            pending,
        };
        // A pre-engine save could hold an id in both sets; unlocked wins.
        let unlocked = manager.unlocked.clone();
        let before = manager.pending.len();
        manager.pending.retain(|id| !unlocked.contains(id));
        if manager.pending.len() != before {
            manager.persist_pending();
        }
        manager
    }

    fn load_set(store: &S, key: &str) -> Vec<AchievementId> {
        let raw: Vec<String> = read_json(store, key);
        raw.iter()
            .filter_map(|s| {
                let parsed = s.parse::<AchievementId>().ok();
                if parsed.is_none() {
                    log::warn!("dropping unknown achievement id `{s}` from `{key}`");
                }
                parsed
            })
            .collect()
    }

    fn persist_unlocked(&self) {
        let raw: Vec<&str> = self.unlocked.iter().map(|id| id.as_str()).collect();
        write_json(&self.store, keys::UNLOCKED_ACHIEVEMENTS, &raw);
    }

    fn persist_pending(&self) {
        let raw: Vec<&str> = self.pending.iter().map(|id| id.as_str()).collect();
        write_json(&self.store, keys::PENDING_ACHIEVEMENTS, &raw);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    #[must_use]
    pub fn is_pending(&self, id: AchievementId) -> bool {
        self.pending.contains(&id)
    }

    /// Unlocked ids in acknowledgment order.
    #[must_use]
    pub fn unlocked(&self) -> &[AchievementId] {
        &self.unlocked
    }

    /// Pending ids in the order they were earned.
    #[must_use]
    pub fn pending(&self) -> &[AchievementId] {
        &self.pending
    }

    #[must_use]
    pub fn any_unlocked(&self) -> bool {
        !self.unlocked.is_empty()
    }

    /// `(unlocked, total)` for the hub stats line.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.unlocked.len(), CATALOG.len())
    }

    /// Directly unlock an achievement, bypassing the pending stage. Returns
    /// true when the state changed. Kept for the legacy import path; normal
    /// flow goes through [`Self::acknowledge_pending`].
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if catalog::lookup(id).is_none() {
            log::warn!("unlock: achievement not found: {id}");
            return false;
        }
        if self.is_unlocked(id) {
            return false;
        }
        self.pending.retain(|p| *p != id);
        self.persist_pending();
        self.unlocked.push(id);
        self.persist_unlocked();
        true
    }

    /// Acknowledge a pending achievement: the banner's claim control.
    /// Returns false when the id was not pending; both sets are untouched.
    pub fn acknowledge_pending(&mut self, id: AchievementId) -> bool {
        if !self.is_pending(id) {
            return false;
        }
        self.pending.retain(|p| *p != id);
        self.persist_pending();
        self.unlock(id)
    }

    /// Evaluate every still-locked, still-unpending definition and move the
    /// newly satisfied ones to pending. Returns them in catalog order; the
    /// first one is the banner that gets shown. Calling this twice without a
    /// fact change returns an empty list the second time.
    pub fn check_achievements(&mut self) -> Vec<AchievementId> {
        let mut newly_pending = Vec::new();
        for def in &CATALOG {
            if self.is_unlocked(def.id) || self.is_pending(def.id) {
                continue;
            }
            if catalog::satisfied(def.id, &self.store) {
                self.pending.push(def.id);
                newly_pending.push(def.id);
            }
        }
        if !newly_pending.is_empty() {
            self.persist_pending();
        }
        newly_pending
    }

    /// Remove an achievement from both sets and clear its underlying facts
    /// and preference flag, so re-evaluating its predicate yields false.
    pub fn reset_achievement(&mut self, id: AchievementId) {
        if catalog::lookup(id).is_none() {
            log::warn!("reset: achievement not found: {id}");
            return;
        }
        self.unlocked.retain(|u| *u != id);
        self.pending.retain(|p| *p != id);
        self.persist_unlocked();
        self.persist_pending();
        for key in catalog::fact_keys(id) {
            self.store.remove(key);
        }
        if let Some(pref) = catalog::preference_key(id) {
            self.store.remove(pref);
        }
    }

    /// Clear both sets and every fact and preference key.
    pub fn reset_all(&mut self) {
        self.unlocked.clear();
        self.pending.clear();
        self.store.remove(keys::UNLOCKED_ACHIEVEMENTS);
        self.store.remove(keys::PENDING_ACHIEVEMENTS);
        for key in keys::PROGRESS_KEYS {
            self.store.remove(key);
        }
        for key in keys::PREFERENCE_KEYS {
            self.store.remove(key);
        }
    }
}
