//! Save image container: generation selection, section validation and the
//! fixed-offset views (trainer info, inventory, PC storage) built on top.

pub mod box_region;
pub mod inventory;
pub mod section;
pub mod trainer;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{CodecError, CodecErrorCode};
use crate::layout::{
    FileLayout, GENERATION_A_OFFSET, GENERATION_B_OFFSET, RegionId, SAVE_IMAGE_SIZE,
};
use box_region::BoxRegion;
use inventory::Inventory;
use section::{
    FIRST_BOX_ID, LAST_BOX_ID, SAVE_COUNTER_OFFSET, SECTION_COUNT, SECTION_SIZE, Section,
    TEAM_AND_ITEMS_ID, TRAINER_INFO_ID,
};
use trainer::TrainerInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    A,
    B,
}

impl Generation {
    pub fn offset(&self) -> usize {
        match self {
            Self::A => GENERATION_A_OFFSET,
            Self::B => GENERATION_B_OFFSET,
        }
    }

    pub fn region(&self) -> RegionId {
        match self {
            Self::A => RegionId::GenerationA,
            Self::B => RegionId::GenerationB,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ties go to the second generation. Counter wraparound is not handled.
pub fn select_generation(counter_a: u32, counter_b: u32) -> Generation {
    if counter_b >= counter_a {
        Generation::B
    } else {
        Generation::A
    }
}

#[derive(Debug, Clone)]
pub struct SaveContainer {
    bytes: Vec<u8>,
    layout: FileLayout,
    active: Generation,
    counters: [u32; 2],
    /// Physical order within the active generation.
    sections: Vec<Section>,
    /// Declared section ID to index in `sections`; first occurrence wins.
    by_id: BTreeMap<u16, usize>,
}

impl SaveContainer {
    pub fn parse(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != SAVE_IMAGE_SIZE {
            return Err(CodecError::size_mismatch(
                "save image",
                SAVE_IMAGE_SIZE,
                bytes.len(),
            ));
        }

        let layout = FileLayout::save_image();
        layout.validate()?;

        let counter_at = |generation: Generation| -> Result<u32, CodecError> {
            let offset = generation.offset() + SAVE_COUNTER_OFFSET;
            let raw: [u8; 4] = bytes
                .get(offset..offset + 4)
                .and_then(|b| b.try_into().ok())
                .ok_or_else(|| CodecError::size_mismatch("save counter", offset + 4, bytes.len()))?;
            Ok(u32::from_le_bytes(raw))
        };
        let counters = [counter_at(Generation::A)?, counter_at(Generation::B)?];
        let active = select_generation(counters[0], counters[1]);
        debug!(
            counter_a = counters[0],
            counter_b = counters[1],
            active = active.as_str(),
            "selected save generation"
        );

        let mut sections = Vec::with_capacity(SECTION_COUNT);
        let mut by_id = BTreeMap::new();
        for slot in 0..SECTION_COUNT {
            let start = active.offset() + slot * SECTION_SIZE;
            let section = Section::parse(slot, &bytes[start..start + SECTION_SIZE])?;

            if !section.id_known() {
                warn!(slot, id = section.id, "section declares an out-of-range ID");
            } else if by_id.contains_key(&section.id) {
                warn!(slot, id = section.id, "duplicate section ID, keeping first");
            } else {
                by_id.insert(section.id, slot);
            }
            if !section.is_valid() {
                warn!(
                    slot,
                    id = section.id,
                    signature_valid = section.signature_valid(),
                    checksum_valid = section.checksum_valid(),
                    "section failed validation"
                );
            }
            sections.push(section);
        }

        Ok(Self {
            bytes: bytes.to_vec(),
            layout,
            active,
            counters,
            sections,
            by_id,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let bytes = fs::read(path).map_err(|e| {
            CodecError::new(
                CodecErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        Self::parse(&bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn layout(&self) -> &FileLayout {
        &self.layout
    }

    pub fn active_generation(&self) -> Generation {
        self.active
    }

    pub fn save_counter(&self, generation: Generation) -> u32 {
        match generation {
            Generation::A => self.counters[0],
            Generation::B => self.counters[1],
        }
    }

    /// Sections of the active generation in physical order, valid or not.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: u16) -> Option<&Section> {
        self.by_id.get(&id).map(|&slot| &self.sections[slot])
    }

    pub fn require_section(&self, id: u16) -> Result<&Section, CodecError> {
        self.section(id).ok_or_else(|| {
            CodecError::new(
                CodecErrorCode::MissingSection,
                format!("section {id} not present in generation {}", self.active),
            )
        })
    }

    pub fn all_sections_valid(&self) -> bool {
        self.by_id.len() == SECTION_COUNT && self.sections.iter().all(Section::is_valid)
    }

    /// Raw bytes of one fixed image region (either generation or a trailing region).
    pub fn region(&self, id: RegionId) -> Option<&[u8]> {
        self.layout.region(id).and_then(|range| range.slice(&self.bytes))
    }

    pub fn trainer_info(&self) -> Result<TrainerInfo, CodecError> {
        let section = self.require_section(TRAINER_INFO_ID)?;
        Ok(trainer::parse_trainer_info(section.payload())?)
    }

    pub fn inventory(&self) -> Result<Inventory, CodecError> {
        let info = self.trainer_info()?;
        let section = self.require_section(TEAM_AND_ITEMS_ID)?;
        Ok(inventory::parse_inventory(
            section.payload(),
            info.variant,
            info.security_key,
        )?)
    }

    pub fn box_region(&self) -> Result<BoxRegion, CodecError> {
        let mut payloads = Vec::new();
        for id in FIRST_BOX_ID..=LAST_BOX_ID {
            payloads.push(self.require_section(id)?.payload());
        }
        Ok(BoxRegion::assemble(&payloads)?)
    }
}
