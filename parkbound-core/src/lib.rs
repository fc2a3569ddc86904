//! Parkbound Achievement Engine
//!
//! Platform-agnostic core for the Parkbound fan site: the achievement
//! catalog, the unlock/pending state machine, trackers, progress reporting,
//! the coaster ranking rules, and state export/import. No UI and no browser
//! dependencies; the web crate injects a `localStorage`-backed store and
//! tests inject [`MemoryStore`].

pub mod catalog;
pub mod coasters;
pub mod facts;
pub mod keys;
pub mod manager;
pub mod prefs;
pub mod progress;
pub mod store;
pub mod tips;
pub mod trackers;
pub mod transfer;

// Re-export commonly used types
pub use catalog::{AchievementDef, AchievementId, CATALOG};
pub use coasters::{COASTER_COUNT, COASTERS, Coaster, DropOutcome, apply_drop, load_order, save_order};
pub use facts::{IndexSet, STREAK_TARGET, TOGGLE_TARGET, TOGGLE_WINDOW_MS, ToggleRate, VisitStreak};
pub use manager::AchievementManager;
pub use prefs::{cosmetic_enabled, toggle_cosmetic};
pub use progress::{ProgressReport, progress};
pub use store::{KeyValueStore, MemoryStore};
pub use tips::{TIP_COUNT, TIPS, random_tip};
pub use trackers::ZOOM_TARGET_PERCENT;
pub use transfer::{ExportDocument, TransferError, export_json, export_snapshot, import_snapshot};
