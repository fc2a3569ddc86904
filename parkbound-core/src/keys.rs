//! Persisted-state layout: every store key the engine owns.
//!
//! Key names are part of the on-disk (well, in-browser) format and must not
//! change without a migration in `transfer`.

/// Ordered list of acknowledged achievement ids.
pub const UNLOCKED_ACHIEVEMENTS: &str = "unlockedAchievements";
/// Ordered list of earned-but-unacknowledged achievement ids.
pub const PENDING_ACHIEVEMENTS: &str = "pendingAchievements";

/// Set of loading-tip indices the visitor has seen.
pub const SEEN_TIPS: &str = "seenTips";
/// Theme-toggle rate counter, `{count, timestampMs}`.
pub const THEME_TOGGLES: &str = "themeToggles";
/// One-shot: devtools console detected open.
pub const DEV_CONSOLE_OPENED: &str = "devConsoleOpened";
/// One-shot: the 404 page was visited.
pub const VISITED_404: &str = "visited404";
/// Daily visit streak, `{streakDays, lastVisit}`.
pub const VISIT_STREAK: &str = "visitStreak";
/// Set of coaster-card indices the visitor has expanded.
pub const CLICKED_COASTERS: &str = "clickedCoasters";
/// One-shot: `barrelRoll()` executed from the console.
pub const BARREL_ROLL_EXECUTED: &str = "barrelRollExecuted";
/// One-shot: `bigBox()` executed from the console.
pub const BIG_BOX_EXECUTED: &str = "bigBoxExecuted";
/// Latched: zoom estimate reached 500%.
pub const BAD_VISION_UNLOCKED: &str = "badVisionUnlocked";
/// One-shot: the protected coaster was dragged to last place.
pub const BLASPHEMY_COMMITTED: &str = "blasphemyCommitted";
/// One-shot: the visitor pressed F.
pub const PAY_RESPECTS: &str = "payRespects";

/// Cosmetic preference flags, meaningful only while the owning achievement
/// is unlocked. Absent -> enabled.
pub const RAINBOW_TEXT_ENABLED: &str = "rainbowTextEnabled";
pub const RAINBOW_LOADING_ENABLED: &str = "rainbowLoadingEnabled";
pub const BLUR_FILTER_ENABLED: &str = "blurFilterEnabled";
pub const EDIT_MODE_ENABLED: &str = "editModeEnabled";
pub const F_EMOJI_ENABLED: &str = "fEmojiEnabled";

/// Visitor's custom coaster ranking as a sequence of coaster ids.
pub const CUSTOM_COASTER_ORDER: &str = "customCoasterOrder";
/// Saved color theme (`light` / `dark`), owned by the web chrome.
pub const THEME: &str = "theme";

/// Every progress-fact key, in export order.
pub const PROGRESS_KEYS: &[&str] = &[
    SEEN_TIPS,
    THEME_TOGGLES,
    DEV_CONSOLE_OPENED,
    VISITED_404,
    VISIT_STREAK,
    CLICKED_COASTERS,
    BARREL_ROLL_EXECUTED,
    BIG_BOX_EXECUTED,
    BAD_VISION_UNLOCKED,
    BLASPHEMY_COMMITTED,
    PAY_RESPECTS,
    CUSTOM_COASTER_ORDER,
];

/// Every preference-flag key, in export order.
pub const PREFERENCE_KEYS: &[&str] = &[
    RAINBOW_TEXT_ENABLED,
    RAINBOW_LOADING_ENABLED,
    BLUR_FILTER_ENABLED,
    EDIT_MODE_ENABLED,
    F_EMOJI_ENABLED,
];
