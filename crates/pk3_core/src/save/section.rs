use std::io;

use crate::reader::LittleEndianReader;

pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_COUNT: usize = 14;

pub const SECTION_ID_OFFSET: usize = 0xFF4;
pub const CHECKSUM_OFFSET: usize = 0xFF6;
pub const SIGNATURE_OFFSET: usize = 0xFF8;
pub const SAVE_COUNTER_OFFSET: usize = 0xFFC;
pub const SIGNATURE: [u8; 4] = [0x25, 0x20, 0x01, 0x08];

/// Bytes covered by the checksum, indexed by section ID.
pub const PAYLOAD_LENGTHS: [usize; SECTION_COUNT] = [
    3884, 3968, 3968, 3968, 3848, 3968, 3968, 3968, 3968, 3968, 3968, 3968, 3968, 2000,
];

pub const TRAINER_INFO_ID: u16 = 0;
pub const TEAM_AND_ITEMS_ID: u16 = 1;
pub const FIRST_BOX_ID: u16 = 5;
pub const LAST_BOX_ID: u16 = 13;

pub fn payload_len(section_id: u16) -> Option<usize> {
    PAYLOAD_LENGTHS.get(section_id as usize).copied()
}

/// Sum of little-endian u32 words over `data`, folded to 16 bits as `high + low`.
pub fn fold_checksum(data: &[u8]) -> u16 {
    let sum = data.chunks_exact(4).fold(0u32, |acc, w| {
        acc.wrapping_add(u32::from_le_bytes([w[0], w[1], w[2], w[3]]))
    });
    ((sum >> 16) as u16).wrapping_add(sum as u16)
}

/// Checksum of a section's payload, using the length its ID calls for.
/// `None` for IDs outside the known 14.
pub fn section_checksum(section_id: u16, data: &[u8]) -> Option<u16> {
    let len = payload_len(section_id)?;
    data.get(..len).map(fold_checksum)
}

/// One physical 0x1000-byte slot of the active generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Physical position within the generation, 0-13.
    pub slot: usize,
    pub id: u16,
    pub stored_checksum: u16,
    pub computed_checksum: Option<u16>,
    pub signature: [u8; 4],
    pub save_counter: u32,
    pub data: Vec<u8>,
}

impl Section {
    pub fn parse(slot: usize, bytes: &[u8]) -> io::Result<Self> {
        let mut r = LittleEndianReader::at(bytes, SECTION_ID_OFFSET)?;
        let id = r.read_u16()?;
        let stored_checksum = r.read_u16()?;
        let signature = r.read_array::<4>()?;
        let save_counter = r.read_u32()?;

        let data = bytes
            .get(..SECTION_SIZE)
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "short section"))?
            .to_vec();

        Ok(Self {
            slot,
            id,
            stored_checksum,
            computed_checksum: section_checksum(id, &data),
            signature,
            save_counter,
            data,
        })
    }

    pub fn signature_valid(&self) -> bool {
        self.signature == SIGNATURE
    }

    pub fn checksum_valid(&self) -> bool {
        self.computed_checksum == Some(self.stored_checksum)
    }

    pub fn id_known(&self) -> bool {
        (self.id as usize) < SECTION_COUNT
    }

    pub fn is_valid(&self) -> bool {
        self.signature_valid() && self.checksum_valid()
    }

    /// The checksummed part of the section; the whole section for unknown IDs.
    pub fn payload(&self) -> &[u8] {
        let len = payload_len(self.id).unwrap_or(self.data.len());
        &self.data[..len.min(self.data.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_adds_high_and_low_halves() {
        let mut data = vec![0u8; 8];
        data[0..4].copy_from_slice(&0x0001_FFFFu32.to_le_bytes());
        data[4..8].copy_from_slice(&0x0000_0002u32.to_le_bytes());
        // sum = 0x0002_0001 -> 0x0002 + 0x0001
        assert_eq!(fold_checksum(&data), 0x0003);
    }

    #[test]
    fn unknown_section_ids_have_no_checksum() {
        let data = vec![0u8; SECTION_SIZE];
        assert_eq!(section_checksum(14, &data), None);
        assert_eq!(section_checksum(13, &data), Some(0));
    }

    #[test]
    fn only_the_id_specific_length_is_summed() {
        let mut data = vec![0u8; SECTION_SIZE];
        data[2000] = 0xAA;
        assert_eq!(section_checksum(13, &data), Some(0));
        assert_eq!(section_checksum(12, &data), Some(0xAA));
    }

    #[test]
    fn payload_stops_at_the_id_specific_length() {
        let mut bytes = vec![0u8; SECTION_SIZE];
        bytes[SECTION_ID_OFFSET..SECTION_ID_OFFSET + 2].copy_from_slice(&13u16.to_le_bytes());
        let section = Section::parse(0, &bytes).unwrap();
        assert_eq!(section.payload().len(), 2000);

        bytes[SECTION_ID_OFFSET..SECTION_ID_OFFSET + 2].copy_from_slice(&0u16.to_le_bytes());
        assert_eq!(Section::parse(0, &bytes).unwrap().payload().len(), 3884);

        bytes[SECTION_ID_OFFSET..SECTION_ID_OFFSET + 2].copy_from_slice(&99u16.to_le_bytes());
        assert_eq!(Section::parse(0, &bytes).unwrap().payload().len(), SECTION_SIZE);
    }
}
