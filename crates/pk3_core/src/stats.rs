//! Level and battle-stat derivation.

use serde::{Deserialize, Serialize};

use crate::creature::CreatureRecord;
use crate::creature::substructure::StatSpread;
use crate::data::{BaseStats, GameData, NatureInfo, StatKind};
use crate::gender::Gender;

pub const MAX_LEVEL: u8 = 100;

/// Experience curve, numbered as stored in species data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRate {
    MediumFast = 0,
    Erratic = 1,
    Fluctuating = 2,
    MediumSlow = 3,
    Fast = 4,
    Slow = 5,
}

impl GrowthRate {
    const ALL: [Self; 6] = [
        Self::MediumFast,
        Self::Erratic,
        Self::Fluctuating,
        Self::MediumSlow,
        Self::Fast,
        Self::Slow,
    ];

    /// Out-of-range ids clamp to the last curve.
    pub fn from_id(id: u8) -> Self {
        Self::ALL[(id as usize).min(Self::ALL.len() - 1)]
    }

    /// `thresholds()[n]` is the total experience needed for level `n + 1`.
    pub fn thresholds(&self) -> &'static [u32; 100] {
        match self {
            Self::MediumFast => &MEDIUM_FAST,
            Self::Erratic => &ERRATIC,
            Self::Fluctuating => &FLUCTUATING,
            Self::MediumSlow => &MEDIUM_SLOW,
            Self::Fast => &FAST,
            Self::Slow => &SLOW,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MediumFast => "Medium Fast",
            Self::Erratic => "Erratic",
            Self::Fluctuating => "Fluctuating",
            Self::MediumSlow => "Medium Slow",
            Self::Fast => "Fast",
            Self::Slow => "Slow",
        }
    }
}

/// Number of thresholds at or below `experience`.
pub fn level_from_experience(experience: u32, rate: GrowthRate) -> u8 {
    rate.thresholds()
        .iter()
        .take_while(|&&threshold| threshold <= experience)
        .count() as u8
}

/// Minimum experience for `level`, clamped to 1..=100.
pub fn experience_for_level(level: u8, rate: GrowthRate) -> u32 {
    let index = level.clamp(1, MAX_LEVEL) as usize - 1;
    rate.thresholds()[index]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattleStats {
    pub total_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

fn iv_for(ivs: &StatSpread, stat: StatKind) -> u8 {
    match stat {
        StatKind::Attack => ivs.attack,
        StatKind::Defense => ivs.defense,
        StatKind::Speed => ivs.speed,
        StatKind::SpAttack => ivs.sp_attack,
        StatKind::SpDefense => ivs.sp_defense,
    }
}

fn core_value(base: u16, iv: u8, ev: u8, level: u8) -> u32 {
    (2 * base as u32 + iv as u32 + ev as u32 / 4) * level as u32 / 100
}

pub fn hp_stat(base: u16, iv: u8, ev: u8, level: u8) -> u16 {
    let hp = core_value(base, iv, ev, level) + level as u32 + 10;
    hp.min(u16::MAX as u32) as u16
}

pub fn other_stat(base: u16, iv: u8, ev: u8, level: u8, nature_tenths: u32) -> u16 {
    let stat = (core_value(base, iv, ev, level) + 5) * nature_tenths / 10;
    stat.min(u16::MAX as u32) as u16
}

pub fn calculate_stats(
    record: &CreatureRecord,
    level: u8,
    base: &BaseStats,
    nature: &NatureInfo,
) -> BattleStats {
    let ivs = &record.misc.genes.ivs;
    let evs = &record.condition.evs;
    let stat = |kind: StatKind, ev: u8| {
        other_stat(
            base.get(kind),
            iv_for(ivs, kind),
            ev,
            level,
            nature.multiplier_tenths(kind),
        )
    };

    BattleStats {
        total_hp: hp_stat(base.hp, ivs.hp, evs.hp, level),
        attack: stat(StatKind::Attack, evs.attack),
        defense: stat(StatKind::Defense, evs.defense),
        speed: stat(StatKind::Speed, evs.speed),
        sp_attack: stat(StatKind::SpAttack, evs.sp_attack),
        sp_defense: stat(StatKind::SpDefense, evs.sp_defense),
    }
}

/// Level and stats for `record` from its species and nature, or `None` when
/// either table is empty.
pub fn derive(record: &CreatureRecord, data: &dyn GameData) -> Option<(u8, BattleStats)> {
    let species = data.species_info(record.growth.species)?;
    let nature = data.nature(record.nature_index())?;
    let rate = GrowthRate::from_id(species.growth_rate);
    let level = level_from_experience(record.growth.experience, rate);
    Some((level, calculate_stats(record, level, &species.base_stats, nature)))
}

/// Overwrite the party block's level and computed stats with derived values.
/// Status, mail and current HP are left alone. Eggs have no level to derive
/// and are left untouched.
pub fn populate(record: &mut CreatureRecord, data: &dyn GameData) -> bool {
    if record.is_egg() {
        return false;
    }
    let Some((level, stats)) = derive(record, data) else {
        return false;
    };
    let party = &mut record.party;
    party.level = level;
    party.total_hp = stats.total_hp;
    party.attack = stats.attack;
    party.defense = stats.defense;
    party.speed = stats.speed;
    party.sp_attack = stats.sp_attack;
    party.sp_defense = stats.sp_defense;
    true
}

pub fn gender(record: &CreatureRecord, data: &dyn GameData) -> Gender {
    let ratio = data
        .species_info(record.growth.species)
        .map(|s| s.gender_ratio)
        .unwrap_or(Gender::RATIO_GENDERLESS);
    Gender::from_pid(record.pid, ratio)
}

#[rustfmt::skip]
const MEDIUM_FAST: [u32; 100] = [
    0, 8, 27, 64, 125, 216, 343, 512, 729, 1000,
    1331, 1728, 2197, 2744, 3375, 4096, 4913, 5832, 6859, 8000,
    9261, 10648, 12167, 13824, 15625, 17576, 19683, 21952, 24389, 27000,
    29791, 32768, 35937, 39304, 42875, 46656, 50653, 54872, 59319, 64000,
    68921, 74088, 79507, 85184, 91125, 97336, 103823, 110592, 117649, 125000,
    132651, 140608, 148877, 157464, 166375, 175616, 185193, 195112, 205379, 216000,
    226981, 238328, 250047, 262144, 274625, 287496, 300763, 314432, 328509, 343000,
    357911, 373248, 389017, 405224, 421875, 438976, 456533, 474552, 493039, 512000,
    531441, 551368, 571787, 592704, 614125, 636056, 658503, 681472, 704969, 729000,
    753571, 778688, 804357, 830584, 857375, 884736, 912673, 941192, 970299, 1000000,
];

#[rustfmt::skip]
const ERRATIC: [u32; 100] = [
    0, 15, 52, 122, 237, 406, 637, 942, 1326, 1800,
    2369, 3041, 3822, 4719, 5737, 6881, 8155, 9564, 11111, 12800,
    14632, 16610, 18737, 21012, 23437, 26012, 28737, 31610, 34632, 37800,
    41111, 44564, 48155, 51881, 55737, 59719, 63822, 68041, 72369, 76800,
    81326, 85942, 90637, 95406, 100237, 105122, 110052, 115015, 120001, 125000,
    131324, 137795, 144410, 151165, 158056, 165079, 172229, 179503, 186894, 194400,
    202013, 209728, 217540, 225443, 233431, 241496, 249633, 257834, 267406, 276458,
    286328, 296358, 305767, 316074, 326531, 336255, 346965, 357812, 367807, 378880,
    390077, 400293, 411686, 423190, 433572, 445239, 457001, 467489, 479378, 491346,
    501878, 513934, 526049, 536557, 548720, 560922, 571333, 583539, 591882, 600000,
];

#[rustfmt::skip]
const FLUCTUATING: [u32; 100] = [
    0, 4, 13, 32, 65, 112, 178, 276, 393, 540,
    745, 967, 1230, 1591, 1957, 2457, 3046, 3732, 4526, 5440,
    6482, 7666, 9003, 10506, 12187, 14060, 16140, 18439, 20974, 23760,
    26811, 30146, 33780, 37731, 42017, 46656, 50653, 55969, 60505, 66560,
    71677, 78533, 84277, 91998, 98415, 107069, 114205, 123863, 131766, 142500,
    151222, 163105, 172697, 185807, 196322, 210739, 222231, 238036, 250562, 267840,
    281456, 300293, 315059, 335544, 351520, 373744, 390991, 415050, 433631, 459620,
    479600, 507617, 529063, 559209, 582187, 614566, 639146, 673863, 700115, 737280,
    765275, 804997, 834809, 877201, 908905, 954084, 987754, 1035837, 1071552, 1122660,
    1160499, 1214753, 1254796, 1312322, 1354652, 1415577, 1460276, 1524731, 1571884, 1640000,
];

#[rustfmt::skip]
const MEDIUM_SLOW: [u32; 100] = [
    0, 9, 57, 96, 135, 179, 236, 314, 419, 560,
    742, 973, 1261, 1612, 2035, 2535, 3120, 3798, 4575, 5460,
    6458, 7577, 8825, 10208, 11735, 13411, 15244, 17242, 19411, 21760,
    24294, 27021, 29949, 33084, 36435, 40007, 43808, 47846, 52127, 56660,
    61450, 66505, 71833, 77440, 83335, 89523, 96012, 102810, 109923, 117360,
    125126, 133229, 141677, 150476, 159635, 169159, 179056, 189334, 199999, 211060,
    222522, 234393, 246681, 259392, 272535, 286115, 300140, 314618, 329555, 344960,
    360838, 377197, 394045, 411388, 429235, 447591, 466464, 485862, 505791, 526260,
    547274, 568841, 590969, 613664, 636935, 660787, 685228, 710266, 735907, 762160,
    789030, 816525, 844653, 873420, 902835, 932903, 963632, 995030, 1027103, 1059860,
];

#[rustfmt::skip]
const FAST: [u32; 100] = [
    0, 6, 21, 51, 100, 172, 274, 409, 583, 800,
    1064, 1382, 1757, 2195, 2700, 3276, 3930, 4665, 5487, 6400,
    7408, 8518, 9733, 11059, 12500, 14060, 15746, 17561, 19511, 21600,
    23832, 26214, 28749, 31443, 34300, 37324, 40522, 43897, 47455, 51200,
    55136, 59270, 63605, 68147, 72900, 77868, 83058, 88473, 94119, 100000,
    106120, 112486, 119101, 125971, 133100, 140492, 148154, 156089, 164303, 172800,
    181584, 190662, 200037, 209715, 219700, 229996, 240610, 251545, 262807, 274400,
    286328, 298598, 311213, 324179, 337500, 351180, 365226, 379641, 394431, 409600,
    425152, 441094, 457429, 474163, 491300, 508844, 526802, 545177, 563975, 583200,
    602856, 622950, 643485, 664467, 685900, 707788, 730138, 752953, 776239, 800000,
];

#[rustfmt::skip]
const SLOW: [u32; 100] = [
    0, 10, 33, 80, 156, 270, 428, 640, 911, 1250,
    1663, 2160, 2746, 3430, 4218, 5120, 6141, 7290, 8573, 10000,
    11576, 13310, 15208, 17280, 19531, 21970, 24603, 27440, 30486, 33750,
    37238, 40960, 44921, 49130, 53593, 58320, 63316, 68590, 74148, 80000,
    86151, 92610, 99383, 106480, 113906, 121670, 129778, 138240, 147061, 156250,
    165813, 175760, 186096, 196830, 207968, 219520, 231491, 243890, 256723, 270000,
    283726, 297910, 312558, 327680, 343281, 359370, 375953, 393040, 410636, 428750,
    447388, 466560, 486271, 506530, 527343, 548720, 570666, 593190, 616298, 640000,
    664301, 689210, 714733, 740880, 767656, 795070, 823128, 851840, 881211, 911250,
    941963, 973360, 1005446, 1038230, 1071718, 1105920, 1140841, 1176490, 1212873, 1250000,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_starts_at_zero_and_is_strictly_increasing() {
        for rate in GrowthRate::ALL {
            let table = rate.thresholds();
            assert_eq!(table[0], 0, "{rate:?}");
            assert!(table.windows(2).all(|w| w[0] < w[1]), "{rate:?}");
        }
    }

    #[test]
    fn level_counts_thresholds_at_or_below_experience() {
        assert_eq!(level_from_experience(0, GrowthRate::MediumFast), 1);
        assert_eq!(level_from_experience(7, GrowthRate::MediumFast), 1);
        assert_eq!(level_from_experience(8, GrowthRate::MediumFast), 2);
        assert_eq!(level_from_experience(125_000, GrowthRate::MediumFast), 50);
        assert_eq!(level_from_experience(1_000_000, GrowthRate::MediumFast), 100);
        assert_eq!(level_from_experience(u32::MAX, GrowthRate::Slow), 100);
        assert_eq!(level_from_experience(1_326, GrowthRate::Erratic), 9);
    }

    #[test]
    fn experience_for_level_is_inverse_of_level_lookup() {
        for rate in GrowthRate::ALL {
            for level in 1..=MAX_LEVEL {
                assert_eq!(level_from_experience(experience_for_level(level, rate), rate), level);
            }
        }
    }

    #[test]
    fn growth_id_clamps_to_last_curve() {
        assert_eq!(GrowthRate::from_id(3), GrowthRate::MediumSlow);
        assert_eq!(GrowthRate::from_id(200), GrowthRate::Slow);
    }

    #[test]
    fn nature_multiplier_truncates() {
        // (2*100 + 31 + 63) * 50 / 100 + 5 = 152
        assert_eq!(other_stat(100, 31, 252, 50, 10), 152);
        assert_eq!(other_stat(100, 31, 252, 50, 11), 167);
        assert_eq!(other_stat(100, 31, 252, 50, 9), 136);
    }
}
