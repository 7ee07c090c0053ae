//! Substructure ordering and the XOR cipher.

use super::SUBSTRUCTURE_SIZE;

pub const ORDER_COUNT: usize = 24;

/// `PERMUTATIONS[pid % 24][slot]` is the substructure kind stored in `slot`.
/// Kinds: 0 = growth, 1 = attacks, 2 = condition (EVs/contest), 3 = misc.
/// The row order is the game's own enumeration and must not be regenerated.
pub static PERMUTATIONS: [[usize; 4]; ORDER_COUNT] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 2, 1, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [0, 3, 2, 1],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 2, 3, 0],
    [1, 3, 0, 2],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 0, 3, 1],
    [2, 1, 0, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [2, 3, 1, 0],
    [3, 0, 1, 2],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 1, 2, 0],
    [3, 2, 0, 1],
    [3, 2, 1, 0],
];

pub const ORDER_NAMES: [&str; ORDER_COUNT] = [
    "GAEM", "GAME", "GEAM", "GEMA", "GMAE", "GMEA", "AGEM", "AGME", "AEGM", "AEMG", "AMGE", "AMEG",
    "EGAM", "EGMA", "EAGM", "EAMG", "EMGA", "EMAG", "MGAE", "MGEA", "MAGE", "MAEG", "MEGA", "MEAG",
];

pub fn order_index(pid: u32) -> usize {
    (pid % ORDER_COUNT as u32) as usize
}

pub fn order_for(pid: u32) -> &'static [usize; 4] {
    &PERMUTATIONS[order_index(pid)]
}

/// Physical slot holding `kind` within `order`.
pub fn find_slot(order: &[usize; 4], kind: usize) -> Option<usize> {
    order.iter().position(|&k| k == kind)
}

/// XOR every little-endian 32-bit word of `data` with `key`. Self-inverse.
/// A trailing partial word is left untouched.
pub fn xor_words(data: &mut [u8], key: u32) {
    for chunk in data.chunks_exact_mut(4) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ key;
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

pub fn xor_block(block: &[u8; SUBSTRUCTURE_SIZE], key: u32) -> [u8; SUBSTRUCTURE_SIZE] {
    let mut out = *block;
    xor_words(&mut out, key);
    out
}

/// Wrapping sum of every little-endian 16-bit word.
pub fn checksum(data: &[u8]) -> u16 {
    data.chunks_exact(2)
        .fold(0u16, |acc, w| acc.wrapping_add(u16::from_le_bytes([w[0], w[1]])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_is_a_bijection() {
        for (n, row) in PERMUTATIONS.iter().enumerate() {
            let mut seen = [false; 4];
            for &kind in row {
                assert!(!seen[kind], "row {n} repeats kind {kind}");
                seen[kind] = true;
            }
            for kind in 0..4 {
                let slot = find_slot(row, kind).unwrap();
                assert_eq!(row[slot], kind);
            }
        }
    }

    #[test]
    fn names_match_rows() {
        const LETTERS: [char; 4] = ['G', 'A', 'E', 'M'];
        for (row, name) in PERMUTATIONS.iter().zip(ORDER_NAMES) {
            let spelled: String = row.iter().map(|&k| LETTERS[k]).collect();
            assert_eq!(spelled, name);
        }
    }

    #[test]
    fn xor_is_self_inverse() {
        let block = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x10, 0x32, 0x54, 0x76];
        for key in [0, 1, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(xor_block(&xor_block(&block, key), key), block);
        }
    }

    #[test]
    fn checksum_wraps() {
        let data = [0xFF, 0xFF, 0x02, 0x00];
        assert_eq!(checksum(&data), 1);
    }
}
