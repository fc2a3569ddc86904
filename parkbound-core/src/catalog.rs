//! The achievement catalog: definitions and unlock predicates.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::coasters::COASTER_COUNT;
use crate::facts::{self, STREAK_TARGET, TOGGLE_TARGET};
use crate::keys;
use crate::store::{KeyValueStore, read_flag};
use crate::tips::TIP_COUNT;

/// Stable identity of an achievement. The string form (camelCase) is what
/// gets persisted and exported; do not reorder variants without checking
/// [`CATALOG`] iteration order, which decides which banner wins when several
/// achievements become pending in the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementId {
    LoadingTipsMaster,
    EpilepsyWarning,
    DeveloperConsole,
    NotFound,
    Dedicated,
    Educated,
    BarrelRoll,
    BigBox,
    BadVision,
    Blasphemy,
    PayRespects,
}

impl AchievementId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadingTipsMaster => "loadingTipsMaster",
            Self::EpilepsyWarning => "epilepsyWarning",
            Self::DeveloperConsole => "developerConsole",
            Self::NotFound => "notFound",
            Self::Dedicated => "dedicated",
            Self::Educated => "educated",
            Self::BarrelRoll => "barrelRoll",
            Self::BigBox => "bigBox",
            Self::BadVision => "badVision",
            Self::Blasphemy => "blasphemy",
            Self::PayRespects => "payRespects",
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .map(|def| def.id)
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

/// Static description of one achievement. Defined once at startup, never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Route the claim control navigates to.
    pub unlock_page: &'static str,
    /// Cosmetic the achievement gates, shown as a toggle on its hub card.
    pub reward: Option<&'static str>,
}

/// All achievements, in banner-priority order.
pub const CATALOG: [AchievementDef; 11] = [
    AchievementDef {
        id: AchievementId::LoadingTipsMaster,
        name: "Refresh Ranger",
        description: "You've seen all 50 loading tips!",
        icon: "🎉",
        unlock_page: "/celebration/loadingTipsMaster",
        reward: Some("Rainbow Loading Bar"),
    },
    AchievementDef {
        id: AchievementId::EpilepsyWarning,
        name: "Epilepsy Warning",
        description: "Toggled the theme 50 times in 10 seconds. Your eyes OK?",
        icon: "⚡",
        unlock_page: "/celebration/epilepsyWarning",
        reward: Some("Rainbow Text Effect"),
    },
    AchievementDef {
        id: AchievementId::DeveloperConsole,
        name: "Inspector Gadget",
        description: "Opened the developer console. Looking for something?",
        icon: "🔍",
        unlock_page: "/celebration/developerConsole",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::NotFound,
        name: "Lost and Found",
        description: "Visited a page that doesn't exist. On purpose?",
        icon: "🧭",
        unlock_page: "/celebration/notFound",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::Dedicated,
        name: "Dedicated",
        description: "Visited the site seven days in a row.",
        icon: "📅",
        unlock_page: "/celebration/dedicated",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::Educated,
        name: "Coaster Scholar",
        description: "Read the stats of every coaster on the list.",
        icon: "🎢",
        unlock_page: "/celebration/educated",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::BarrelRoll,
        name: "Do a Barrel Roll",
        description: "You asked the console, the page obliged.",
        icon: "🌀",
        unlock_page: "/celebration/barrelRoll",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::BigBox,
        name: "Big Box Energy",
        description: "Summoned an enormous box for no reason at all.",
        icon: "📦",
        unlock_page: "/celebration/bigBox",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::BadVision,
        name: "Bad Vision",
        description: "Zoomed to 500%. The pixels thank you for your attention.",
        icon: "👓",
        unlock_page: "/celebration/badVision",
        reward: Some("Screen Blur"),
    },
    AchievementDef {
        id: AchievementId::Blasphemy,
        name: "Blasphemy",
        description: "Tried to rank the author's favourite coaster last.",
        icon: "😤",
        unlock_page: "/celebration/blasphemy",
        reward: Some("Edit Mode"),
    },
    AchievementDef {
        id: AchievementId::PayRespects,
        name: "Press F",
        description: "Paid your respects.",
        icon: "🫡",
        unlock_page: "/celebration/payRespects",
        reward: Some("F Emoji"),
    },
];

static BY_ID: Lazy<HashMap<AchievementId, &'static AchievementDef>> =
    Lazy::new(|| CATALOG.iter().map(|def| (def.id, def)).collect());

/// Look up a definition. A miss is a caller bug (an id referenced somewhere
/// that is not in the catalog); callers log it and treat the operation as a
/// no-op.
#[must_use]
pub fn lookup(id: AchievementId) -> Option<&'static AchievementDef> {
    BY_ID.get(&id).copied()
}

/// Evaluate an achievement's unlock predicate against the recorded facts.
/// Pure read, no side effects, idempotent.
#[must_use]
pub fn satisfied<S: KeyValueStore + ?Sized>(id: AchievementId, store: &S) -> bool {
    match id {
        AchievementId::LoadingTipsMaster => facts::seen_tips(store).len() >= TIP_COUNT,
        AchievementId::EpilepsyWarning => facts::toggle_rate(store).count >= TOGGLE_TARGET,
        AchievementId::DeveloperConsole => read_flag(store, keys::DEV_CONSOLE_OPENED),
        AchievementId::NotFound => read_flag(store, keys::VISITED_404),
        AchievementId::Dedicated => facts::visit_streak(store).streak_days >= STREAK_TARGET,
        AchievementId::Educated => facts::clicked_coasters(store).len() >= COASTER_COUNT,
        AchievementId::BarrelRoll => read_flag(store, keys::BARREL_ROLL_EXECUTED),
        AchievementId::BigBox => read_flag(store, keys::BIG_BOX_EXECUTED),
        AchievementId::BadVision => read_flag(store, keys::BAD_VISION_UNLOCKED),
        AchievementId::Blasphemy => read_flag(store, keys::BLASPHEMY_COMMITTED),
        AchievementId::PayRespects => read_flag(store, keys::PAY_RESPECTS),
    }
}

/// Store keys holding an achievement's raw progress facts. Cleared when the
/// achievement is reset so its predicate goes back to false.
#[must_use]
pub fn fact_keys(id: AchievementId) -> &'static [&'static str] {
    match id {
        AchievementId::LoadingTipsMaster => &[keys::SEEN_TIPS],
        AchievementId::EpilepsyWarning => &[keys::THEME_TOGGLES],
        AchievementId::DeveloperConsole => &[keys::DEV_CONSOLE_OPENED],
        AchievementId::NotFound => &[keys::VISITED_404],
        AchievementId::Dedicated => &[keys::VISIT_STREAK],
        AchievementId::Educated => &[keys::CLICKED_COASTERS],
        AchievementId::BarrelRoll => &[keys::BARREL_ROLL_EXECUTED],
        AchievementId::BigBox => &[keys::BIG_BOX_EXECUTED],
        AchievementId::BadVision => &[keys::BAD_VISION_UNLOCKED],
        AchievementId::Blasphemy => &[keys::BLASPHEMY_COMMITTED],
        AchievementId::PayRespects => &[keys::PAY_RESPECTS],
    }
}

/// Preference flag gated by an achievement, if it has a cosmetic reward.
#[must_use]
pub const fn preference_key(id: AchievementId) -> Option<&'static str> {
    match id {
        AchievementId::LoadingTipsMaster => Some(keys::RAINBOW_LOADING_ENABLED),
        AchievementId::EpilepsyWarning => Some(keys::RAINBOW_TEXT_ENABLED),
        AchievementId::BadVision => Some(keys::BLUR_FILTER_ENABLED),
        AchievementId::Blasphemy => Some(keys::EDIT_MODE_ENABLED),
        AchievementId::PayRespects => Some(keys::F_EMOJI_ENABLED),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, latch_flag};

    #[test]
    fn catalog_ids_are_unique_and_resolvable() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
            assert_eq!(lookup(a.id).map(|d| d.id), Some(a.id));
            assert_eq!(a.id.as_str().parse::<AchievementId>(), Ok(a.id));
        }
    }

    #[test]
    fn string_form_is_camel_case() {
        assert_eq!(AchievementId::LoadingTipsMaster.to_string(), "loadingTipsMaster");
        assert_eq!("payRespects".parse::<AchievementId>(), Ok(AchievementId::PayRespects));
        assert!("pay_respects".parse::<AchievementId>().is_err());
    }

    #[test]
    fn predicates_default_to_false_on_empty_store() {
        let store = MemoryStore::new();
        for def in &CATALOG {
            assert!(!satisfied(def.id, &store), "{} on empty store", def.id);
        }
    }

    #[test]
    fn one_shot_predicate_follows_its_flag() {
        let store = MemoryStore::new();
        latch_flag(&store, keys::PAY_RESPECTS);
        assert!(satisfied(AchievementId::PayRespects, &store));
        assert!(!satisfied(AchievementId::BarrelRoll, &store));
    }

    #[test]
    fn rewarded_achievements_have_preference_keys() {
        for def in &CATALOG {
            assert_eq!(def.reward.is_some(), preference_key(def.id).is_some());
        }
    }
}
