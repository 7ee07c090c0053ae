//! The four 12-byte substructures and the packed words inside `Misc`.

use super::SUBSTRUCTURE_SIZE;

pub type Block = [u8; SUBSTRUCTURE_SIZE];

fn u16_at(b: &Block, offset: usize) -> u16 {
    u16::from_le_bytes([b[offset], b[offset + 1]])
}

fn u32_at(b: &Block, offset: usize) -> u32 {
    u32::from_le_bytes([b[offset], b[offset + 1], b[offset + 2], b[offset + 3]])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstructureKind {
    Growth = 0,
    Attacks = 1,
    Condition = 2,
    Misc = 3,
}

impl SubstructureKind {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One value per battle stat, in the record's storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatSpread {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Growth {
    pub species: u16,
    pub held_item: u16,
    pub experience: u32,
    pub pp_bonuses: u8,
    pub friendship: u8,
    pub filler: u16,
}

impl Growth {
    pub fn from_block(b: &Block) -> Self {
        Self {
            species: u16_at(b, 0x0),
            held_item: u16_at(b, 0x2),
            experience: u32_at(b, 0x4),
            pp_bonuses: b[0x8],
            friendship: b[0x9],
            filler: u16_at(b, 0xA),
        }
    }

    pub fn to_block(&self) -> Block {
        let mut b = [0u8; SUBSTRUCTURE_SIZE];
        b[0x0..0x2].copy_from_slice(&self.species.to_le_bytes());
        b[0x2..0x4].copy_from_slice(&self.held_item.to_le_bytes());
        b[0x4..0x8].copy_from_slice(&self.experience.to_le_bytes());
        b[0x8] = self.pp_bonuses;
        b[0x9] = self.friendship;
        b[0xA..0xC].copy_from_slice(&self.filler.to_le_bytes());
        b
    }

    /// PP-up count (0..=3) applied to move `slot`, two bits per move.
    pub fn pp_bonus(&self, slot: usize) -> u8 {
        (self.pp_bonuses >> (slot * 2)) & 0b11
    }

    pub fn set_pp_bonus(&mut self, slot: usize, value: u8) {
        let shift = slot * 2;
        self.pp_bonuses = (self.pp_bonuses & !(0b11 << shift)) | ((value & 0b11) << shift);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attacks {
    pub moves: [u16; 4],
    pub pp: [u8; 4],
}

impl Attacks {
    pub fn from_block(b: &Block) -> Self {
        Self {
            moves: [u16_at(b, 0x0), u16_at(b, 0x2), u16_at(b, 0x4), u16_at(b, 0x6)],
            pp: [b[0x8], b[0x9], b[0xA], b[0xB]],
        }
    }

    pub fn to_block(&self) -> Block {
        let mut b = [0u8; SUBSTRUCTURE_SIZE];
        for (i, mv) in self.moves.iter().enumerate() {
            b[i * 2..i * 2 + 2].copy_from_slice(&mv.to_le_bytes());
        }
        b[0x8..0xC].copy_from_slice(&self.pp);
        b
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Condition {
    pub evs: StatSpread,
    pub cool: u8,
    pub beauty: u8,
    pub cute: u8,
    pub smart: u8,
    pub tough: u8,
    pub sheen: u8,
}

impl Condition {
    pub fn from_block(b: &Block) -> Self {
        Self {
            evs: StatSpread {
                hp: b[0x0],
                attack: b[0x1],
                defense: b[0x2],
                speed: b[0x3],
                sp_attack: b[0x4],
                sp_defense: b[0x5],
            },
            cool: b[0x6],
            beauty: b[0x7],
            cute: b[0x8],
            smart: b[0x9],
            tough: b[0xA],
            sheen: b[0xB],
        }
    }

    pub fn to_block(&self) -> Block {
        let e = &self.evs;
        [
            e.hp,
            e.attack,
            e.defense,
            e.speed,
            e.sp_attack,
            e.sp_defense,
            self.cool,
            self.beauty,
            self.cute,
            self.smart,
            self.tough,
            self.sheen,
        ]
    }
}

/// Packed 16-bit origin word: met level (7), met game (4), ball (4), trainer gender (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Origin {
    pub met_level: u8,
    pub met_game: u8,
    pub ball: u8,
    pub trainer_gender: u8,
}

impl Origin {
    const MET_LEVEL_MASK: u16 = 0x007F;
    const MET_GAME_SHIFT: u16 = 7;
    const BALL_SHIFT: u16 = 11;
    const TRAINER_GENDER_SHIFT: u16 = 15;

    pub fn from_raw(raw: u16) -> Self {
        Self {
            met_level: (raw & Self::MET_LEVEL_MASK) as u8,
            met_game: ((raw >> Self::MET_GAME_SHIFT) & 0xF) as u8,
            ball: ((raw >> Self::BALL_SHIFT) & 0xF) as u8,
            trainer_gender: ((raw >> Self::TRAINER_GENDER_SHIFT) & 0x1) as u8,
        }
    }

    pub fn raw(&self) -> u16 {
        (self.met_level as u16 & Self::MET_LEVEL_MASK)
            | ((self.met_game as u16 & 0xF) << Self::MET_GAME_SHIFT)
            | ((self.ball as u16 & 0xF) << Self::BALL_SHIFT)
            | ((self.trainer_gender as u16 & 0x1) << Self::TRAINER_GENDER_SHIFT)
    }
}

/// Packed 32-bit word: six 5-bit IVs, the egg bit and the ability slot bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Genes {
    pub ivs: StatSpread,
    pub is_egg: bool,
    pub ability_slot: u8,
}

impl Genes {
    const IV_MASK: u32 = 0x1F;

    pub fn from_raw(raw: u32) -> Self {
        let iv = |shift: u32| ((raw >> shift) & Self::IV_MASK) as u8;
        Self {
            ivs: StatSpread {
                hp: iv(0),
                attack: iv(5),
                defense: iv(10),
                speed: iv(15),
                sp_attack: iv(20),
                sp_defense: iv(25),
            },
            is_egg: (raw >> 30) & 1 != 0,
            ability_slot: ((raw >> 31) & 1) as u8,
        }
    }

    pub fn raw(&self) -> u32 {
        let iv = |value: u8, shift: u32| (value as u32 & Self::IV_MASK) << shift;
        let v = &self.ivs;
        iv(v.hp, 0)
            | iv(v.attack, 5)
            | iv(v.defense, 10)
            | iv(v.speed, 15)
            | iv(v.sp_attack, 20)
            | iv(v.sp_defense, 25)
            | ((self.is_egg as u32) << 30)
            | ((self.ability_slot as u32 & 1) << 31)
    }
}

/// Packed 32-bit ribbon word. Contest ribbons are 3-bit rank counters;
/// the rest are single flags. Bits 27..=30 are unused but kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ribbons {
    pub cool: u8,
    pub beauty: u8,
    pub cute: u8,
    pub smart: u8,
    pub tough: u8,
    pub champion: bool,
    pub winning: bool,
    pub victory: bool,
    pub artist: bool,
    pub effort: bool,
    pub battle_champion: bool,
    pub regional_champion: bool,
    pub national_champion: bool,
    pub country: bool,
    pub national: bool,
    pub earth: bool,
    pub world: bool,
    pub unused: u8,
    pub fateful_encounter: bool,
}

impl Ribbons {
    pub fn from_raw(raw: u32) -> Self {
        let rank = |shift: u32| ((raw >> shift) & 0x7) as u8;
        let flag = |bit: u32| (raw >> bit) & 1 != 0;
        Self {
            cool: rank(0),
            beauty: rank(3),
            cute: rank(6),
            smart: rank(9),
            tough: rank(12),
            champion: flag(15),
            winning: flag(16),
            victory: flag(17),
            artist: flag(18),
            effort: flag(19),
            battle_champion: flag(20),
            regional_champion: flag(21),
            national_champion: flag(22),
            country: flag(23),
            national: flag(24),
            earth: flag(25),
            world: flag(26),
            unused: ((raw >> 27) & 0xF) as u8,
            fateful_encounter: flag(31),
        }
    }

    pub fn raw(&self) -> u32 {
        let rank = |value: u8, shift: u32| (value as u32 & 0x7) << shift;
        let flag = |value: bool, bit: u32| (value as u32) << bit;
        rank(self.cool, 0)
            | rank(self.beauty, 3)
            | rank(self.cute, 6)
            | rank(self.smart, 9)
            | rank(self.tough, 12)
            | flag(self.champion, 15)
            | flag(self.winning, 16)
            | flag(self.victory, 17)
            | flag(self.artist, 18)
            | flag(self.effort, 19)
            | flag(self.battle_champion, 20)
            | flag(self.regional_champion, 21)
            | flag(self.national_champion, 22)
            | flag(self.country, 23)
            | flag(self.national, 24)
            | flag(self.earth, 25)
            | flag(self.world, 26)
            | ((self.unused as u32 & 0xF) << 27)
            | flag(self.fateful_encounter, 31)
    }

    /// Count of ribbons held, contest ranks counted individually.
    pub fn count(&self) -> u32 {
        let ranks = [self.cool, self.beauty, self.cute, self.smart, self.tough]
            .iter()
            .map(|&r| r.min(4) as u32)
            .sum::<u32>();
        let flags = [
            self.champion,
            self.winning,
            self.victory,
            self.artist,
            self.effort,
            self.battle_champion,
            self.regional_champion,
            self.national_champion,
            self.country,
            self.national,
            self.earth,
            self.world,
        ]
        .iter()
        .filter(|&&f| f)
        .count() as u32;
        ranks + flags
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Misc {
    pub pokerus: u8,
    pub met_location: u8,
    pub origin: Origin,
    pub genes: Genes,
    pub ribbons: Ribbons,
}

impl Misc {
    pub fn from_block(b: &Block) -> Self {
        Self {
            pokerus: b[0x0],
            met_location: b[0x1],
            origin: Origin::from_raw(u16_at(b, 0x2)),
            genes: Genes::from_raw(u32_at(b, 0x4)),
            ribbons: Ribbons::from_raw(u32_at(b, 0x8)),
        }
    }

    pub fn to_block(&self) -> Block {
        let mut b = [0u8; SUBSTRUCTURE_SIZE];
        b[0x0] = self.pokerus;
        b[0x1] = self.met_location;
        b[0x2..0x4].copy_from_slice(&self.origin.raw().to_le_bytes());
        b[0x4..0x8].copy_from_slice(&self.genes.raw().to_le_bytes());
        b[0x8..0xC].copy_from_slice(&self.ribbons.raw().to_le_bytes());
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_word_covers_all_sixteen_bits() {
        for raw in [0x0000, 0xFFFF, 0x8000, 0x7F80, 0x1234, 0xABCD] {
            assert_eq!(Origin::from_raw(raw).raw(), raw);
        }
        let origin = Origin::from_raw(0b1_0100_0011_0000101);
        assert_eq!(origin.met_level, 5);
        assert_eq!(origin.met_game, 3);
        assert_eq!(origin.ball, 4);
        assert_eq!(origin.trainer_gender, 1);
    }

    #[test]
    fn genes_unpack_ivs_in_storage_order() {
        let raw = 31 | (30 << 5) | (29 << 10) | (28 << 15) | (27 << 20) | (26 << 25) | (1 << 31);
        let genes = Genes::from_raw(raw);
        assert_eq!(genes.ivs.hp, 31);
        assert_eq!(genes.ivs.attack, 30);
        assert_eq!(genes.ivs.defense, 29);
        assert_eq!(genes.ivs.speed, 28);
        assert_eq!(genes.ivs.sp_attack, 27);
        assert_eq!(genes.ivs.sp_defense, 26);
        assert!(!genes.is_egg);
        assert_eq!(genes.ability_slot, 1);
        assert_eq!(genes.raw(), raw);
    }

    #[test]
    fn ribbon_word_keeps_unused_bits() {
        for raw in [0u32, u32::MAX, 0x7800_0000, 0x8000_8001, 0x0400_7FFF] {
            assert_eq!(Ribbons::from_raw(raw).raw(), raw);
        }
        let ribbons = Ribbons::from_raw(1 << 18);
        assert!(ribbons.artist);
        assert_eq!(ribbons.count(), 1);
    }

    #[test]
    fn pp_bonus_slots() {
        let mut growth = Growth::default();
        growth.set_pp_bonus(2, 3);
        growth.set_pp_bonus(0, 1);
        assert_eq!(growth.pp_bonuses, 0b0011_0001);
        assert_eq!(growth.pp_bonus(2), 3);
        assert_eq!(growth.pp_bonus(1), 0);
    }
}
