use std::io;

use crate::layout::ByteRange;
use crate::reader::LittleEndianReader;
use crate::text::GameText;

use super::section::{FIRST_BOX_ID, LAST_BOX_ID};

/// Boxes the storage system reserves names and wallpapers for.
pub const STORED_BOX_COUNT: usize = 14;
pub const BOX_NAME_LEN: usize = 9;

/// Span each box section contributes to the box stream. Section 5 starts with
/// the current-box word; section 13 stops where its checksummed payload ends.
pub fn contributed_range(section_id: u16) -> Option<ByteRange> {
    match section_id {
        FIRST_BOX_ID => Some(ByteRange { start: 0x4, end: 0xF80 }),
        LAST_BOX_ID => Some(ByteRange { start: 0x0, end: 0x7D0 }),
        id if (FIRST_BOX_ID..LAST_BOX_ID).contains(&id) => {
            Some(ByteRange { start: 0x0, end: 0xF80 })
        }
        _ => None,
    }
}

const CURRENT_BOX_OFFSET: usize = 0x0;
const BOX_NAMES_OFFSET: usize = 0x744;
const WALLPAPERS_OFFSET: usize = 0x7C2;

/// The PC storage stream reassembled from sections 5-13.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxRegion {
    pub current_box: u32,
    /// Concatenated record bytes, box-major, 30 slots of 0x50 bytes per box.
    pub data: Vec<u8>,
    pub names: Vec<GameText<BOX_NAME_LEN>>,
    pub wallpapers: Vec<u8>,
}

impl BoxRegion {
    /// Builds the region from the payloads of sections 5..=13, in ID order.
    pub fn assemble(sections: &[&[u8]]) -> io::Result<Self> {
        let expected = (LAST_BOX_ID - FIRST_BOX_ID + 1) as usize;
        if sections.len() != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("box region needs {expected} sections, got {}", sections.len()),
            ));
        }

        let current_box = LittleEndianReader::at(sections[0], CURRENT_BOX_OFFSET)?.read_u32()?;

        let mut data = Vec::new();
        for (id, bytes) in (FIRST_BOX_ID..=LAST_BOX_ID).zip(sections) {
            let piece = contributed_range(id)
                .and_then(|range| range.slice(bytes))
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::UnexpectedEof, format!("box section {id} is short"))
                })?;
            data.extend_from_slice(piece);
        }

        let last = sections[expected - 1];
        let mut r = LittleEndianReader::at(last, BOX_NAMES_OFFSET)?;
        let mut names = Vec::with_capacity(STORED_BOX_COUNT);
        for _ in 0..STORED_BOX_COUNT {
            names.push(GameText::from_raw(r.read_array::<BOX_NAME_LEN>()?));
        }
        let wallpapers = LittleEndianReader::at(last, WALLPAPERS_OFFSET)?.read_bytes(STORED_BOX_COUNT)?;

        Ok(Self {
            current_box,
            data,
            names,
            wallpapers,
        })
    }
}
