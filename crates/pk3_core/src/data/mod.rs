//! Species, nature and name tables used by the stat engine and renderers.
//!
//! The codec never needs these tables; they are injected through
//! [`GameData`] so that records can be decoded without a full game data set.
//! Lookups that fall outside a table never fail: stat derivation clamps to the
//! last entry and display lookups return a sentinel name.

mod locations;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecErrorCode};

/// Display name for species and moves past the end of the table.
pub const GLITCHED: &str = "Glitched!";
/// Display name for unmapped items, locations, languages and origin games.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    SpAttack,
    SpDefense,
}

impl StatKind {
    /// Order used by the nature table: nature `n` raises `n / 5` and lowers `n % 5`.
    pub const NATURE_ORDER: [Self; 5] = [
        Self::Attack,
        Self::Defense,
        Self::Speed,
        Self::SpAttack,
        Self::SpDefense,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

impl BaseStats {
    pub fn get(&self, stat: StatKind) -> u16 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::SpAttack => self.sp_attack,
            StatKind::SpDefense => self.sp_defense,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    pub name: String,
    pub base_stats: BaseStats,
    /// Experience curve id, 0-5. See [`crate::stats::GrowthRate`].
    #[serde(default)]
    pub growth_rate: u8,
    /// Gender threshold compared against the low PID byte.
    #[serde(default)]
    pub gender_ratio: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatureInfo {
    pub name: String,
    #[serde(default)]
    pub increased: Option<StatKind>,
    #[serde(default)]
    pub decreased: Option<StatKind>,
}

impl NatureInfo {
    /// Multiplier for `stat` as a `numerator / 10` fraction.
    pub fn multiplier_tenths(&self, stat: StatKind) -> u32 {
        if self.increased == self.decreased {
            return 10;
        }
        if self.increased == Some(stat) {
            11
        } else if self.decreased == Some(stat) {
            9
        } else {
            10
        }
    }
}

/// Lookup provider injected into stat derivation and display code.
pub trait GameData {
    fn species(&self) -> &[SpeciesInfo];
    fn natures(&self) -> &[NatureInfo];

    fn move_name(&self, _id: u16) -> Option<&str> {
        None
    }

    fn item_name(&self, _id: u16) -> Option<&str> {
        None
    }

    fn location_name(&self, _id: u8) -> Option<&str> {
        None
    }

    /// Species entry for stat derivation. Out-of-range indices clamp to the last entry.
    fn species_info(&self, index: u16) -> Option<&SpeciesInfo> {
        let table = self.species();
        table.get(index as usize).or_else(|| table.last())
    }

    /// Nature entry for stat derivation. Out-of-range indices clamp to the last entry.
    fn nature(&self, index: usize) -> Option<&NatureInfo> {
        let table = self.natures();
        table.get(index).or_else(|| table.last())
    }

    fn species_name(&self, index: u16) -> &str {
        self.species()
            .get(index as usize)
            .map(|s| s.name.as_str())
            .unwrap_or(GLITCHED)
    }

    fn nature_name(&self, index: usize) -> &str {
        self.natures()
            .get(index)
            .map(|n| n.name.as_str())
            .unwrap_or(UNKNOWN)
    }

    fn move_display(&self, id: u16) -> &str {
        self.move_name(id).unwrap_or(GLITCHED)
    }

    fn item_display(&self, id: u16) -> &str {
        self.item_name(id).unwrap_or(UNKNOWN)
    }

    fn location_display(&self, id: u8) -> &str {
        self.location_name(id).unwrap_or(UNKNOWN)
    }
}

/// Serde-loadable implementation of [`GameData`].
///
/// Every table is optional in the JSON document; a missing nature table falls
/// back to the 25 standard natures and a missing location table to the
/// built-in Hoenn/Kanto names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTables {
    #[serde(default = "placeholder_species")]
    pub species: Vec<SpeciesInfo>,
    #[serde(default = "standard_natures")]
    pub natures: Vec<NatureInfo>,
    #[serde(default)]
    pub moves: BTreeMap<u16, String>,
    #[serde(default)]
    pub items: BTreeMap<u16, String>,
    #[serde(default = "builtin_locations")]
    pub locations: BTreeMap<u8, String>,
}

impl Default for DataTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DataTables {
    pub fn builtin() -> Self {
        Self {
            species: placeholder_species(),
            natures: standard_natures(),
            moves: BTreeMap::new(),
            items: BTreeMap::new(),
            locations: builtin_locations(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CodecError> {
        let tables: Self = serde_json::from_str(json)?;
        if tables.natures.is_empty() {
            return Err(CodecError::new(
                CodecErrorCode::DataTable,
                "nature table must not be empty",
            ));
        }
        if tables.species.is_empty() {
            return Err(CodecError::new(
                CodecErrorCode::DataTable,
                "species table must not be empty",
            ));
        }
        Ok(tables)
    }

    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let json = fs::read_to_string(path).map_err(|e| {
            CodecError::new(
                CodecErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        Self::from_json_str(&json)
    }
}

impl GameData for DataTables {
    fn species(&self) -> &[SpeciesInfo] {
        &self.species
    }

    fn natures(&self) -> &[NatureInfo] {
        &self.natures
    }

    fn move_name(&self, id: u16) -> Option<&str> {
        self.moves.get(&id).map(String::as_str)
    }

    fn item_name(&self, id: u16) -> Option<&str> {
        self.items.get(&id).map(String::as_str)
    }

    fn location_name(&self, id: u8) -> Option<&str> {
        self.locations.get(&id).map(String::as_str)
    }
}

const NATURE_NAMES: [&str; 25] = [
    "Hardy", "Lonely", "Brave", "Adamant", "Naughty", "Bold", "Docile", "Relaxed", "Impish",
    "Lax", "Timid", "Hasty", "Serious", "Jolly", "Naive", "Modest", "Mild", "Quiet", "Bashful",
    "Rash", "Calm", "Gentle", "Sassy", "Careful", "Quirky",
];

fn standard_natures() -> Vec<NatureInfo> {
    NATURE_NAMES
        .iter()
        .enumerate()
        .map(|(n, name)| {
            let up = StatKind::NATURE_ORDER[n / 5];
            let down = StatKind::NATURE_ORDER[n % 5];
            let neutral = up == down;
            NatureInfo {
                name: (*name).to_string(),
                increased: (!neutral).then_some(up),
                decreased: (!neutral).then_some(down),
            }
        })
        .collect()
}

fn placeholder_species() -> Vec<SpeciesInfo> {
    vec![SpeciesInfo {
        name: "??????????".to_string(),
        base_stats: BaseStats::default(),
        growth_rate: 0,
        gender_ratio: 0,
    }]
}

fn builtin_locations() -> BTreeMap<u8, String> {
    locations::BUILTIN_LOCATIONS
        .iter()
        .map(|&(id, name)| (id, name.to_string()))
        .collect()
}

const BALL_NAMES: [&str; 13] = [
    "None",
    "Master Ball",
    "Ultra Ball",
    "Great Ball",
    "Poke Ball",
    "Safari Ball",
    "Net Ball",
    "Dive Ball",
    "Nest Ball",
    "Repeat Ball",
    "Timer Ball",
    "Luxury Ball",
    "Premier Ball",
];

pub fn ball_name(ball: u8) -> &'static str {
    BALL_NAMES.get(ball as usize).copied().unwrap_or(UNKNOWN)
}

pub fn origin_game_name(game: u8) -> &'static str {
    match game {
        1 => "Sapphire",
        2 => "Ruby",
        3 => "Emerald",
        4 => "FireRed",
        5 => "LeafGreen",
        15 => "Colosseum/XD",
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_natures_follow_raise_lower_grid() {
        let natures = standard_natures();
        assert_eq!(natures.len(), 25);
        assert_eq!(natures[3].name, "Adamant");
        assert_eq!(natures[3].increased, Some(StatKind::Attack));
        assert_eq!(natures[3].decreased, Some(StatKind::SpAttack));
        assert_eq!(natures[15].name, "Modest");
        assert_eq!(natures[15].multiplier_tenths(StatKind::SpAttack), 11);
        assert_eq!(natures[15].multiplier_tenths(StatKind::Attack), 9);
        for neutral in [0, 6, 12, 18, 24] {
            assert_eq!(natures[neutral].increased, None);
            assert_eq!(natures[neutral].multiplier_tenths(StatKind::Speed), 10);
        }
    }

    #[test]
    fn lookups_degrade_to_sentinels() {
        let tables = DataTables::builtin();
        assert_eq!(tables.species_name(0), "??????????");
        assert_eq!(tables.species_name(500), GLITCHED);
        assert_eq!(tables.move_display(33), GLITCHED);
        assert_eq!(tables.item_display(13), UNKNOWN);
        assert_eq!(tables.location_display(0x10), "Route 101");
        assert_eq!(tables.location_display(0xF0), UNKNOWN);
        assert_eq!(ball_name(4), "Poke Ball");
        assert_eq!(ball_name(40), UNKNOWN);
        assert_eq!(origin_game_name(3), "Emerald");
        assert_eq!(origin_game_name(9), UNKNOWN);
    }

    #[test]
    fn stat_lookups_clamp_to_last_entry() {
        let tables = DataTables::builtin();
        assert_eq!(tables.species_info(412).map(|s| s.name.as_str()), Some("??????????"));
        assert_eq!(tables.nature(99).map(|n| n.name.as_str()), Some("Quirky"));
    }
}
