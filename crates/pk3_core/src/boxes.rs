//! Slicing PC storage into boxes and slots.

use tracing::debug;

use crate::creature::{BOX_RECORD_SIZE, CreatureRecord, Encryption, RecordLayout};
use crate::data::GameData;
use crate::save::box_region::{BOX_NAME_LEN, BoxRegion};
use crate::stats;
use crate::text::{Charset, GameText};

pub const BOX_COUNT: usize = 9;
pub const SLOTS_PER_BOX: usize = 30;
pub const BOX_SIZE: usize = SLOTS_PER_BOX * BOX_RECORD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcBox {
    /// Zero-based box index.
    pub number: usize,
    pub name: GameText<BOX_NAME_LEN>,
    pub wallpaper: u8,
    pub slots: Vec<CreatureRecord>,
}

impl PcBox {
    pub fn name_string(&self) -> String {
        self.name.decode(Charset::Western)
    }

    /// Slot indices and records of the non-empty slots.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &CreatureRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, record)| !record.is_blank())
    }
}

fn decode_boxed(bytes: &[u8], data: &dyn GameData) -> CreatureRecord {
    let mut record =
        CreatureRecord::decode_or_blank(bytes, RecordLayout::Boxed, Encryption::Encrypted);
    if !record.is_blank() {
        stats::populate(&mut record, data);
    }
    record
}

pub struct BoxExtractor<'a> {
    region: &'a BoxRegion,
}

impl<'a> BoxExtractor<'a> {
    pub fn new(region: &'a BoxRegion) -> Self {
        Self { region }
    }

    pub fn current_box(&self) -> u32 {
        self.region.current_box
    }

    /// Raw bytes of one box, or `None` past the last box.
    pub fn box_bytes(&self, index: usize) -> Option<&'a [u8]> {
        if index >= BOX_COUNT {
            return None;
        }
        let start = index * BOX_SIZE;
        self.region.data.get(start..start + BOX_SIZE)
    }

    pub fn slot_bytes(&self, index: usize, slot: usize) -> Option<&'a [u8]> {
        if slot >= SLOTS_PER_BOX {
            return None;
        }
        let start = slot * BOX_RECORD_SIZE;
        self.box_bytes(index)?.get(start..start + BOX_RECORD_SIZE)
    }

    /// One decoded slot with level and stats derived from `data`.
    /// Out-of-range indices give `None`; short or empty slots give the blank record.
    pub fn extract_slot(
        &self,
        index: usize,
        slot: usize,
        data: &dyn GameData,
    ) -> Option<CreatureRecord> {
        self.slot_bytes(index, slot)
            .map(|bytes| decode_boxed(bytes, data))
    }

    /// Decoded records of one box with level and stats derived from `data`.
    /// An out-of-range box gives an empty slot list.
    pub fn extract_box(&self, index: usize, data: &dyn GameData) -> PcBox {
        let slots: Vec<CreatureRecord> = match self.box_bytes(index) {
            Some(bytes) => bytes
                .chunks_exact(BOX_RECORD_SIZE)
                .map(|chunk| decode_boxed(chunk, data))
                .collect(),
            None => Vec::new(),
        };

        let occupied = slots.iter().filter(|r| !r.is_blank()).count();
        debug!(box_index = index, occupied, "extracted box");

        PcBox {
            number: index,
            name: self.region.names.get(index).copied().unwrap_or_default(),
            wallpaper: self.region.wallpapers.get(index).copied().unwrap_or(0),
            slots,
        }
    }

    pub fn extract_all(&self, data: &dyn GameData) -> Vec<PcBox> {
        (0..BOX_COUNT).map(|i| self.extract_box(i, data)).collect()
    }
}
