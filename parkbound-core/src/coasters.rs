//! The ranked coaster list and the edit-mode reordering rules.
//!
//! Each coaster carries a stable `id` so a persisted custom order survives
//! renames and two coasters sharing a name or park never collide.

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::store::{KeyValueStore, read_json, write_json};

/// One card in the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coaster {
    pub id: &'static str,
    pub name: &'static str,
    pub park: &'static str,
    /// Height in meters, shown in the expanded card stats.
    pub height_m: u32,
    /// Top speed in km/h.
    pub speed_kmh: u32,
    pub inversions: u32,
}

/// The fixed list, in the author's canonical ranking order.
pub const COASTERS: [Coaster; 16] = [
    Coaster { id: "steel-vengeance", name: "Steel Vengeance", park: "Cedar Point", height_m: 62, speed_kmh: 119, inversions: 4 },
    Coaster { id: "expedition-geforce", name: "Expedition GeForce", park: "Holiday Park", height_m: 53, speed_kmh: 120, inversions: 0 },
    Coaster { id: "untamed", name: "Untamed", park: "Walibi Holland", height_m: 36, speed_kmh: 92, inversions: 5 },
    Coaster { id: "helix", name: "Helix", park: "Liseberg", height_m: 41, speed_kmh: 100, inversions: 7 },
    Coaster { id: "taron", name: "Taron", park: "Phantasialand", height_m: 30, speed_kmh: 117, inversions: 0 },
    Coaster { id: "shambhala", name: "Shambhala", park: "PortAventura", height_m: 76, speed_kmh: 134, inversions: 0 },
    Coaster { id: "zadra", name: "Zadra", park: "Energylandia", height_m: 63, speed_kmh: 121, inversions: 3 },
    Coaster { id: "wodan", name: "Wodan Timbur Coaster", park: "Europa-Park", height_m: 40, speed_kmh: 100, inversions: 0 },
    Coaster { id: "nemesis", name: "Nemesis", park: "Alton Towers", height_m: 13, speed_kmh: 81, inversions: 4 },
    Coaster { id: "balder", name: "Balder", park: "Liseberg", height_m: 36, speed_kmh: 90, inversions: 0 },
    Coaster { id: "velocicoaster", name: "VelociCoaster", park: "Islands of Adventure", height_m: 47, speed_kmh: 113, inversions: 4 },
    Coaster { id: "troy", name: "Troy", park: "Toverland", height_m: 32, speed_kmh: 87, inversions: 0 },
    Coaster { id: "karnan", name: "Kärnan", park: "Hansa-Park", height_m: 73, speed_kmh: 127, inversions: 1 },
    Coaster { id: "olympia-looping", name: "Olympia Looping", park: "Oktoberfest (travelling)", height_m: 33, speed_kmh: 85, inversions: 5 },
    Coaster { id: "joris-en-de-draak", name: "Joris en de Draak", park: "Efteling", height_m: 25, speed_kmh: 75, inversions: 0 },
    Coaster { id: "big-dipper", name: "Big Dipper", park: "Blackpool Pleasure Beach", height_m: 20, speed_kmh: 56, inversions: 0 },
];

/// Number of cards a completionist has to expand.
pub const COASTER_COUNT: usize = COASTERS.len();

/// The one coaster the author will not allow in last place.
pub const PROTECTED_COASTER_ID: &str = "expedition-geforce";

/// Result of dropping a card during edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The drop was applied as requested.
    Moved,
    /// The protected coaster was dropped into last place; the drop was
    /// intercepted and the coaster moved to first place instead. The caller
    /// should fire the blasphemy tracker.
    Blasphemy,
    /// Out-of-range positions; the order is unchanged.
    Ignored,
}

/// Persisted custom order, a sequence of coaster ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoasterOrder(pub Vec<String>);

/// Load the visitor's ranking. Unknown ids in the stored order are dropped
/// and coasters missing from it are appended in canonical order, so the
/// result always contains each coaster exactly once.
pub fn load_order<S: KeyValueStore + ?Sized>(store: &S) -> Vec<&'static Coaster> {
    let saved: CoasterOrder = read_json(store, keys::CUSTOM_COASTER_ORDER);
    let mut order: Vec<&'static Coaster> = saved
        .0
        .iter()
        .filter_map(|id| COASTERS.iter().find(|c| c.id == id))
        .collect();
    for coaster in &COASTERS {
        if !order.iter().any(|c| c.id == coaster.id) {
            order.push(coaster);
        }
    }
    order
}

/// Persist a ranking.
pub fn save_order<S: KeyValueStore + ?Sized>(store: &S, order: &[&Coaster]) {
    let ids = CoasterOrder(order.iter().map(|c| c.id.to_string()).collect());
    write_json(store, keys::CUSTOM_COASTER_ORDER, &ids);
}

/// Move the card at `from` so it lands at position `to`, applying the
/// protected-coaster rule.
pub fn apply_drop(order: &mut Vec<&'static Coaster>, from: usize, to: usize) -> DropOutcome {
    if from >= order.len() || to >= order.len() {
        return DropOutcome::Ignored;
    }
    let coaster = order.remove(from);
    if coaster.id == PROTECTED_COASTER_ID && to == order.len() {
        order.insert(0, coaster);
        DropOutcome::Blasphemy
    } else {
        order.insert(to, coaster);
        DropOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn ids_are_unique() {
        for (i, a) in COASTERS.iter().enumerate() {
            for b in &COASTERS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn default_order_is_canonical() {
        let store = MemoryStore::new();
        let order = load_order(&store);
        let ids: Vec<&str> = order.iter().map(|c| c.id).collect();
        let canonical: Vec<&str> = COASTERS.iter().map(|c| c.id).collect();
        assert_eq!(ids, canonical);
    }

    #[test]
    fn order_round_trips_and_heals_unknown_ids() {
        let store = MemoryStore::new();
        let mut order = load_order(&store);
        assert_eq!(apply_drop(&mut order, 3, 0), DropOutcome::Moved);
        save_order(&store, &order);

        // Corrupt the stored order with a stale id.
        let mut raw: CoasterOrder = read_json(&store, keys::CUSTOM_COASTER_ORDER);
        raw.0.insert(0, "retired-coaster".to_string());
        write_json(&store, keys::CUSTOM_COASTER_ORDER, &raw);

        let healed = load_order(&store);
        assert_eq!(healed.len(), COASTER_COUNT);
        assert_eq!(healed[0].id, "helix");
    }

    #[test]
    fn protected_coaster_cannot_be_ranked_last() {
        let store = MemoryStore::new();
        let mut order = load_order(&store);
        let from = order
            .iter()
            .position(|c| c.id == PROTECTED_COASTER_ID)
            .expect("protected coaster in list");
        let last = order.len() - 1;
        assert_eq!(apply_drop(&mut order, from, last), DropOutcome::Blasphemy);
        assert_eq!(order[0].id, PROTECTED_COASTER_ID);
        assert_eq!(order.len(), COASTER_COUNT);
    }

    #[test]
    fn out_of_range_drop_is_ignored() {
        let store = MemoryStore::new();
        let mut order = load_order(&store);
        let before: Vec<&str> = order.iter().map(|c| c.id).collect();
        assert_eq!(apply_drop(&mut order, 99, 0), DropOutcome::Ignored);
        let after: Vec<&str> = order.iter().map(|c| c.id).collect();
        assert_eq!(before, after);
    }
}
