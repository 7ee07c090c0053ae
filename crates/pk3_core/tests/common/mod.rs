#![allow(dead_code)]

use pk3_core::creature::substructure::{Genes, Origin, StatSpread};
use pk3_core::layout::{GENERATION_A_OFFSET, GENERATION_B_OFFSET, SAVE_IMAGE_SIZE};
use pk3_core::save::box_region::contributed_range;
use pk3_core::save::section::{
    CHECKSUM_OFFSET, FIRST_BOX_ID, LAST_BOX_ID, SAVE_COUNTER_OFFSET, SECTION_COUNT,
    SECTION_ID_OFFSET, SECTION_SIZE, SIGNATURE, SIGNATURE_OFFSET, section_checksum,
};
use pk3_core::text::{Charset, GameText};
use pk3_core::{CreatureRecord, Encryption, RecordLayout};

/// One generation described by logical section ID.
pub struct GenerationBuilder {
    pub counter: u32,
    /// `order[slot]` is the section ID written to physical slot `slot`.
    pub order: [u16; SECTION_COUNT],
    payloads: Vec<Vec<u8>>,
}

impl GenerationBuilder {
    pub fn new(counter: u32) -> Self {
        let mut order = [0u16; SECTION_COUNT];
        for (slot, id) in order.iter_mut().enumerate() {
            *id = slot as u16;
        }
        Self {
            counter,
            order,
            payloads: vec![vec![0u8; SECTION_ID_OFFSET]; SECTION_COUNT],
        }
    }

    /// Physical slots rotated by `by`, as the game does between saves.
    pub fn rotated(mut self, by: usize) -> Self {
        self.order.rotate_left(by);
        self
    }

    pub fn payload_mut(&mut self, id: u16) -> &mut [u8] {
        &mut self.payloads[id as usize]
    }

    pub fn write_into(&self, image: &mut [u8], generation_offset: usize) {
        for (slot, &id) in self.order.iter().enumerate() {
            let start = generation_offset + slot * SECTION_SIZE;
            let section = &mut image[start..start + SECTION_SIZE];
            if let Some(payload) = self.payloads.get(id as usize) {
                section[..payload.len()].copy_from_slice(payload);
            }

            let checksum = section_checksum(id, section).unwrap_or(0);
            section[SECTION_ID_OFFSET..SECTION_ID_OFFSET + 2].copy_from_slice(&id.to_le_bytes());
            section[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2].copy_from_slice(&checksum.to_le_bytes());
            section[SIGNATURE_OFFSET..SIGNATURE_OFFSET + 4].copy_from_slice(&SIGNATURE);
            section[SAVE_COUNTER_OFFSET..SAVE_COUNTER_OFFSET + 4]
                .copy_from_slice(&self.counter.to_le_bytes());
        }
    }

    /// Write `bytes` at `offset` of the box stream, splitting across sections.
    pub fn write_box_stream(&mut self, offset: usize, bytes: &[u8]) {
        let mut cursor = 0usize;
        for id in FIRST_BOX_ID..=LAST_BOX_ID {
            let range = contributed_range(id).unwrap_or_else(|| panic!("box section {id}"));
            for (i, byte) in bytes.iter().enumerate() {
                let stream_pos = offset + i;
                if stream_pos >= cursor && stream_pos < cursor + range.len() {
                    self.payloads[id as usize][range.start + stream_pos - cursor] = *byte;
                }
            }
            cursor += range.len();
        }
    }

    pub fn put_boxed_record(&mut self, box_index: usize, slot: usize, bytes: &[u8]) {
        self.write_box_stream(box_index * 30 * 0x50 + slot * 0x50, bytes);
    }
}

pub fn build_image(a: &GenerationBuilder, b: &GenerationBuilder) -> Vec<u8> {
    let mut image = vec![0u8; SAVE_IMAGE_SIZE];
    a.write_into(&mut image, GENERATION_A_OFFSET);
    b.write_into(&mut image, GENERATION_B_OFFSET);
    image
}

pub fn put_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

pub fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// A populated record with distinct values in every substructure.
pub fn sample_record() -> CreatureRecord {
    let mut record = CreatureRecord {
        pid: 0x11E1_A47A,
        otid: 0x9ABC_DEF0,
        language: 2,
        flags: 0x2,
        ..CreatureRecord::default()
    };
    record.nickname = GameText::encode("SPARKY", Charset::Western).expect("nickname");
    record.trainer_name = GameText::encode("ASH", Charset::Western).expect("trainer");
    record.markings = 0b0101;
    record.growth.species = 25;
    record.growth.held_item = 13;
    record.growth.experience = 125_000;
    record.growth.pp_bonuses = 0b11_10_01_00;
    record.growth.friendship = 70;
    record.attacks.moves = [84, 45, 86, 98];
    record.attacks.pp = [30, 40, 20, 30];
    record.condition.evs = StatSpread {
        hp: 252,
        attack: 4,
        defense: 0,
        speed: 252,
        sp_attack: 0,
        sp_defense: 0,
    };
    record.condition.cool = 10;
    record.condition.sheen = 255;
    record.misc.pokerus = 0x13;
    record.misc.met_location = 0x10;
    record.misc.origin = Origin {
        met_level: 5,
        met_game: 3,
        ball: 4,
        trainer_gender: 0,
    };
    record.misc.genes = Genes {
        ivs: StatSpread {
            hp: 31,
            attack: 30,
            defense: 29,
            speed: 28,
            sp_attack: 27,
            sp_defense: 26,
        },
        is_egg: false,
        ability_slot: 1,
    };
    record.misc.ribbons.cool = 4;
    record.misc.ribbons.champion = true;
    record.misc.ribbons.fateful_encounter = true;
    record.party.level = 50;
    record.party.current_hp = 100;
    record.party.total_hp = 120;
    record
}

/// `sample_record` encoded as a boxed, encrypted slot.
pub fn sample_boxed_bytes() -> Vec<u8> {
    sample_record().encode(RecordLayout::Boxed, Encryption::Encrypted)
}
