//! State-to-view projection for the unlockable cosmetics.
//!
//! Components derive their own classes from the achievement context during
//! render; this module covers the pure text transforms and the pieces of
//! the document Yew does not own (the `<body>` blur class).

use parkbound_core::{AchievementId, AchievementManager, cosmetic_enabled};

use crate::storage::LocalStore;

/// Replacement glyph for the pay-respects cosmetic.
pub const F_EMOJI: &str = "🫡";

/// Apply the F-emoji cosmetic to a piece of display text.
#[must_use]
pub fn f_emoji_text(enabled: bool, original: &str) -> String {
    if !enabled {
        return original.to_string();
    }
    original
        .chars()
        .map(|c| {
            if c == 'f' || c == 'F' {
                F_EMOJI.to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Hero-title text after cosmetics.
#[must_use]
pub fn hero_title_text(manager: &AchievementManager<LocalStore>, original: &str) -> String {
    f_emoji_text(cosmetic_enabled(manager, AchievementId::PayRespects), original)
}

/// Class list for a hero title.
#[must_use]
pub fn hero_title_class(manager: &AchievementManager<LocalStore>) -> &'static str {
    if cosmetic_enabled(manager, AchievementId::EpilepsyWarning) {
        "hero-title rainbow-text"
    } else {
        "hero-title"
    }
}

/// Class list for the loading bar.
#[must_use]
pub fn loading_bar_class(manager: &AchievementManager<LocalStore>) -> &'static str {
    if cosmetic_enabled(manager, AchievementId::LoadingTipsMaster) {
        "loading-bar rainbow-loading"
    } else {
        "loading-bar"
    }
}

/// Sync the document-level cosmetics (the blur filter lives on `<body>`,
/// outside the Yew tree). Called after every achievement state transition.
pub fn project_document(manager: &AchievementManager<LocalStore>) {
    let blur = cosmetic_enabled(manager, AchievementId::BadVision);
    if let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    {
        let _ = if blur {
            body.class_list().add_1("blurred")
        } else {
            body.class_list().remove_1("blurred")
        };
    }
}
