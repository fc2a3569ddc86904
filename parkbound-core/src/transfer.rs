//! Export/import of the complete visitor state.
//!
//! The document is a single JSON object:
//! `{ version, exportDate, achievements: { unlockedAchievements,
//! acknowledgedAchievements, pendingAchievements }, progress, preferences }`.
//! `acknowledgedAchievements` mirrors the unlocked list; the field predates
//! the pending stage and is kept so older exports stay importable.
//!
//! Values are carried as JSON, keyed by store key, and written back
//! verbatim on import, so export -> import -> export is byte-identical.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::keys;
use crate::store::KeyValueStore;

/// Current document version.
pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("not a JSON object")]
    NotAnObject,
    #[error("missing required section `{0}`")]
    MissingSection(&'static str),
    #[error("unsupported export version {0}")]
    UnsupportedVersion(u64),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementsSection {
    #[serde(rename = "unlockedAchievements")]
    pub unlocked: Vec<String>,
    #[serde(rename = "acknowledgedAchievements")]
    pub acknowledged: Vec<String>,
    #[serde(rename = "pendingAchievements")]
    pub pending: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: u32,
    #[serde(rename = "exportDate")]
    pub export_date: String,
    pub achievements: AchievementsSection,
    pub progress: Map<String, Value>,
    pub preferences: Map<String, Value>,
}

/// Sections whose presence import insists on.
const REQUIRED_SECTIONS: [&str; 4] = ["version", "achievements", "progress", "preferences"];

fn stored_value<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Value> {
    let raw = store.get(key)?;
    // Stored values are JSON where structured and bare strings otherwise;
    // keep bare strings as JSON strings.
    Some(serde_json::from_str(&raw).unwrap_or(Value::String(raw)))
}

fn write_value<S: KeyValueStore + ?Sized>(store: &S, key: &str, value: &Value) {
    match value {
        Value::String(s) => store.set(key, s),
        other => match serde_json::to_string(other) {
            Ok(raw) => store.set(key, &raw),
            Err(err) => log::warn!("skipping unserializable import value for `{key}`: {err}"),
        },
    }
}

fn id_list<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<String> {
    crate::store::read_json(store, key)
}

/// Build the export document from the store's current contents. Only keys
/// actually present are included, so a fresh import reproduces the store
/// exactly.
#[must_use]
pub fn export_snapshot<S: KeyValueStore + ?Sized>(store: &S, export_date: &str) -> ExportDocument {
    let unlocked = id_list(store, keys::UNLOCKED_ACHIEVEMENTS);
    let pending = id_list(store, keys::PENDING_ACHIEVEMENTS);

    let mut progress = Map::new();
    for key in keys::PROGRESS_KEYS {
        if let Some(value) = stored_value(store, key) {
            progress.insert((*key).to_string(), value);
        }
    }
    let mut preferences = Map::new();
    for key in keys::PREFERENCE_KEYS {
        if let Some(value) = stored_value(store, key) {
            preferences.insert((*key).to_string(), value);
        }
    }

    ExportDocument {
        version: EXPORT_VERSION,
        export_date: export_date.to_string(),
        achievements: AchievementsSection {
            acknowledged: unlocked.clone(),
            unlocked,
            pending,
        },
        progress,
        preferences,
    }
}

/// Serialize the export document. Key order is deterministic, which is what
/// makes the round-trip property byte-for-byte.
#[must_use]
pub fn export_json<S: KeyValueStore + ?Sized>(store: &S, export_date: &str) -> String {
    serde_json::to_string_pretty(&export_snapshot(store, export_date))
        .unwrap_or_else(|_| String::from("{}"))
}

/// Validate and apply an exported document, overwriting every corresponding
/// store key verbatim. The caller is expected to reload its manager (and the
/// page) afterwards.
///
/// # Errors
/// Returns a [`TransferError`] when the document is not an object, a
/// required section is missing, the version is unsupported, or a section
/// has the wrong shape. The store is untouched on error.
pub fn import_snapshot<S: KeyValueStore + ?Sized>(store: &S, json: &str) -> Result<(), TransferError> {
    let value: Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(TransferError::NotAnObject)?;
    for section in REQUIRED_SECTIONS {
        if !object.contains_key(section) {
            return Err(TransferError::MissingSection(section));
        }
    }
    if let Some(version) = object.get("version").and_then(Value::as_u64) {
        if version > u64::from(EXPORT_VERSION) {
            return Err(TransferError::UnsupportedVersion(version));
        }
    }
    let document: ExportDocument = serde_json::from_value(value)?;

    // Validation passed; now overwrite. Clear first so keys absent from the
    // document end up absent from the store.
    for key in keys::PROGRESS_KEYS {
        store.remove(key);
    }
    for key in keys::PREFERENCE_KEYS {
        store.remove(key);
    }
    crate::store::write_json(store, keys::UNLOCKED_ACHIEVEMENTS, &document.achievements.unlocked);
    crate::store::write_json(store, keys::PENDING_ACHIEVEMENTS, &document.achievements.pending);
    for (key, value) in &document.progress {
        write_value(store, key, value);
    }
    for (key, value) in &document.preferences {
        write_value(store, key, value);
    }
    Ok(())
}
