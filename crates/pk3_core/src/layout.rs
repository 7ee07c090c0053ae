use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecErrorCode};
use crate::save::section::{SECTION_COUNT, SECTION_SIZE};

pub const SAVE_IMAGE_SIZE: usize = 0x20000;
pub const GENERATION_A_OFFSET: usize = 0x0;
pub const GENERATION_B_OFFSET: usize = 0xE000;
pub const HALL_OF_FAME_OFFSET: usize = 0x1C000;
pub const TRAINER_HILL_OFFSET: usize = 0x1E000;
pub const RECORDED_BATTLE_OFFSET: usize = 0x1F000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub const fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a>(&self, bytes: &'a [u8]) -> Option<&'a [u8]> {
        bytes.get(self.start..self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionId {
    GenerationA,
    GenerationB,
    HallOfFame,
    TrainerHill,
    RecordedBattle,
}

impl RegionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenerationA => "generation_a",
            Self::GenerationB => "generation_b",
            Self::HallOfFame => "hall_of_fame",
            Self::TrainerHill => "trainer_hill",
            Self::RecordedBattle => "recorded_battle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionLayout {
    pub id: RegionId,
    pub range: ByteRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLayout {
    pub file_len: usize,
    pub regions: Vec<RegionLayout>,
}

impl FileLayout {
    /// Fixed region map of a save image.
    pub fn save_image() -> Self {
        let region = |id, start: usize, end: usize| RegionLayout {
            id,
            range: ByteRange { start, end },
        };
        Self {
            file_len: SAVE_IMAGE_SIZE,
            regions: vec![
                region(RegionId::GenerationA, GENERATION_A_OFFSET, GENERATION_B_OFFSET),
                region(RegionId::GenerationB, GENERATION_B_OFFSET, HALL_OF_FAME_OFFSET),
                region(RegionId::HallOfFame, HALL_OF_FAME_OFFSET, TRAINER_HILL_OFFSET),
                region(RegionId::TrainerHill, TRAINER_HILL_OFFSET, RECORDED_BATTLE_OFFSET),
                region(RegionId::RecordedBattle, RECORDED_BATTLE_OFFSET, SAVE_IMAGE_SIZE),
            ],
        }
    }

    pub fn region(&self, id: RegionId) -> Option<ByteRange> {
        self.regions.iter().find(|r| r.id == id).map(|r| r.range)
    }

    /// A save map must tile the whole 128 KiB image, and each generation must
    /// hold exactly one full set of sections.
    pub fn validate(&self) -> Result<(), CodecError> {
        let invalid = |message: String| Err(CodecError::new(CodecErrorCode::InvalidInput, message));

        if self.file_len != SAVE_IMAGE_SIZE {
            return invalid(format!(
                "save layout covers {:#x} bytes, image is {SAVE_IMAGE_SIZE:#x}",
                self.file_len
            ));
        }
        let (Some(first), Some(last)) = (self.regions.first(), self.regions.last()) else {
            return invalid("save layout has no regions".to_string());
        };
        if first.range.start != 0 || last.range.end != self.file_len {
            return invalid(format!(
                "save layout spans {:#x}..{:#x}, not the whole image",
                first.range.start, last.range.end
            ));
        }
        if let Some(pair) = self.regions.windows(2).find(|w| w[0].range.end != w[1].range.start) {
            return invalid(format!(
                "{} ends at {:#x} but {} starts at {:#x}",
                pair[0].id.as_str(),
                pair[0].range.end,
                pair[1].id.as_str(),
                pair[1].range.start
            ));
        }

        let generation_len = SECTION_COUNT * SECTION_SIZE;
        for id in [RegionId::GenerationA, RegionId::GenerationB] {
            match self.region(id) {
                Some(range) if range.len() == generation_len => {}
                Some(range) => {
                    return invalid(format!(
                        "{} is {:#x} bytes, a generation needs {generation_len:#x}",
                        id.as_str(),
                        range.len()
                    ));
                }
                None => return invalid(format!("save layout is missing {}", id.as_str())),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_image_layout_is_valid() {
        let layout = FileLayout::save_image();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.region(RegionId::HallOfFame).map(|r| r.len()), Some(0x2000));
    }

    #[test]
    fn short_generation_is_rejected() {
        let mut layout = FileLayout::save_image();
        layout.regions[0].range.end -= SECTION_SIZE;
        layout.regions[1].range.start -= SECTION_SIZE;
        let err = layout.validate().unwrap_err();
        assert_eq!(err.code, CodecErrorCode::InvalidInput);
        assert!(err.message.contains("generation_a"));
    }

    #[test]
    fn gaps_and_missing_generations_are_rejected() {
        let mut gap = FileLayout::save_image();
        gap.regions[2].range.start += 1;
        assert!(gap.validate().unwrap_err().message.contains("hall_of_fame"));

        let mut missing = FileLayout::save_image();
        missing.regions[1].id = RegionId::HallOfFame;
        assert!(missing.validate().unwrap_err().message.contains("generation_b"));

        let mut wrong_size = FileLayout::save_image();
        wrong_size.file_len = 0x10000;
        assert!(wrong_size.validate().is_err());
    }
}
