//! Cosmetic preference flags.
//!
//! A cosmetic is active when its owning achievement is unlocked AND the
//! stored flag is not the explicit string `"false"`. The flag alone means
//! nothing while the achievement is locked.

use crate::catalog::{self, AchievementId};
use crate::manager::AchievementManager;
use crate::store::{KeyValueStore, pref_enabled};

/// Whether the cosmetic owned by `id` should currently be applied.
#[must_use]
pub fn cosmetic_enabled<S: KeyValueStore>(manager: &AchievementManager<S>, id: AchievementId) -> bool {
    let Some(key) = catalog::preference_key(id) else {
        return false;
    };
    manager.is_unlocked(id) && pref_enabled(manager.store(), key)
}

/// Flip the stored preference flag for `id`'s cosmetic. Returns the new
/// enabled state, or `None` when the achievement has no cosmetic.
pub fn toggle_cosmetic<S: KeyValueStore>(
    manager: &AchievementManager<S>,
    id: AchievementId,
) -> Option<bool> {
    let key = catalog::preference_key(id)?;
    let next = !pref_enabled(manager.store(), key);
    manager.store().set(key, if next { "true" } else { "false" });
    Some(cosmetic_enabled(manager, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn cosmetic_requires_unlocked_owner() {
        let store = MemoryStore::new();
        let mut manager = AchievementManager::new(store);
        assert!(!cosmetic_enabled(&manager, AchievementId::EpilepsyWarning));

        manager.unlock(AchievementId::EpilepsyWarning);
        // Default is enabled once unlocked.
        assert!(cosmetic_enabled(&manager, AchievementId::EpilepsyWarning));
    }

    #[test]
    fn toggle_flips_and_reports_effective_state() {
        let mut manager = AchievementManager::new(MemoryStore::new());
        manager.unlock(AchievementId::PayRespects);
        assert_eq!(toggle_cosmetic(&manager, AchievementId::PayRespects), Some(false));
        assert_eq!(toggle_cosmetic(&manager, AchievementId::PayRespects), Some(true));
    }

    #[test]
    fn achievements_without_rewards_have_no_toggle() {
        let manager = AchievementManager::new(MemoryStore::new());
        assert_eq!(toggle_cosmetic(&manager, AchievementId::NotFound), None);
        assert!(!cosmetic_enabled(&manager, AchievementId::NotFound));
    }
}
