pub mod crypto;
pub mod substructure;

use std::io;

use crate::error::{CodecError, CodecErrorCode};
use crate::language::Language;
use crate::layout::ByteRange;
use crate::reader::{LittleEndianReader, put_u16, put_u32};
use crate::text::{Charset, GameText};
use substructure::{Attacks, Block, Condition, Growth, Misc, SubstructureKind};

pub const PARTY_RECORD_SIZE: usize = 0x64;
pub const BOX_RECORD_SIZE: usize = 0x50;
pub const SUBSTRUCTURE_SIZE: usize = 12;
pub const NICKNAME_LEN: usize = 10;
pub const TRAINER_NAME_LEN: usize = 7;

pub const SUBSTRUCTURE_REGION: ByteRange = ByteRange::new(0x20, 4 * SUBSTRUCTURE_SIZE);
const CHECKSUM_OFFSET: usize = 0x1C;
const PARTY_BLOCK_OFFSET: usize = 0x50;

const BAD_EGG_FLAG: u8 = 0x1;
const HAS_SPECIES_FLAG: u8 = 0x2;
const USE_EGG_NAME_FLAG: u8 = 0x4;
const BLOCK_BOX_FLAG: u8 = 0x8;

/// Which byte layout a record is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    /// 0x64 bytes, with the trailing party block.
    Party,
    /// 0x50 bytes, as stored in a PC box.
    Boxed,
}

impl RecordLayout {
    pub fn size(&self) -> usize {
        match self {
            Self::Party => PARTY_RECORD_SIZE,
            Self::Boxed => BOX_RECORD_SIZE,
        }
    }
}

/// Whether the substructure region is ciphered and permuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encryption {
    /// Substructures in canonical order, unencrypted (`.pk3`).
    Plaintext,
    /// Substructures XOR'd with `PID ^ OTID` and permuted by `PID % 24` (`.ek3`, boxes, party).
    Encrypted,
}

impl Encryption {
    /// Heuristic only: a zero key makes the cipher an identity, so `PID == OTID`
    /// records are assumed plaintext. Callers that know the form should say so.
    pub fn guess(pid: u32, otid: u32) -> Self {
        if pid == otid {
            Self::Plaintext
        } else {
            Self::Encrypted
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFlags {
    pub bad_egg: bool,
    pub has_species: bool,
    pub use_egg_name: bool,
    pub block_box: bool,
}

impl RecordFlags {
    pub fn from_raw(raw: u8) -> Self {
        Self {
            bad_egg: raw & BAD_EGG_FLAG != 0,
            has_species: raw & HAS_SPECIES_FLAG != 0,
            use_egg_name: raw & USE_EGG_NAME_FLAG != 0,
            block_box: raw & BLOCK_BOX_FLAG != 0,
        }
    }
}

/// Trailing party-only block. Meaningful only for party members; boxed
/// records get level and stats recomputed instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartyStats {
    pub status: u32,
    pub level: u8,
    pub mail_id: u8,
    pub current_hp: u16,
    pub total_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

impl PartyStats {
    fn read(r: &mut LittleEndianReader<'_>) -> io::Result<Self> {
        Ok(Self {
            status: r.read_u32()?,
            level: r.read_u8()?,
            mail_id: r.read_u8()?,
            current_hp: r.read_u16()?,
            total_hp: r.read_u16()?,
            attack: r.read_u16()?,
            defense: r.read_u16()?,
            speed: r.read_u16()?,
            sp_attack: r.read_u16()?,
            sp_defense: r.read_u16()?,
        })
    }

    fn write(&self, out: &mut [u8]) {
        put_u32(out, 0x0, self.status);
        out[0x4] = self.level;
        out[0x5] = self.mail_id;
        put_u16(out, 0x6, self.current_hp);
        put_u16(out, 0x8, self.total_hp);
        put_u16(out, 0xA, self.attack);
        put_u16(out, 0xC, self.defense);
        put_u16(out, 0xE, self.speed);
        put_u16(out, 0x10, self.sp_attack);
        put_u16(out, 0x12, self.sp_defense);
    }

    fn is_blank(&self) -> bool {
        self.status == 0
            && self.level == 0
            && self.mail_id == 0
            && self.current_hp == 0
            && self.total_hp == 0
            && self.attack == 0
            && self.defense == 0
            && self.speed == 0
            && self.sp_attack == 0
            && self.sp_defense == 0
    }
}

/// A decoded creature record. Always held in plaintext form; the encryption
/// state only exists in the byte layout chosen on decode/encode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreatureRecord {
    pub pid: u32,
    pub otid: u32,
    pub nickname: GameText<NICKNAME_LEN>,
    pub language: u8,
    pub flags: u8,
    pub trainer_name: GameText<TRAINER_NAME_LEN>,
    pub markings: u8,
    pub checksum: u16,
    pub filler: u16,
    pub growth: Growth,
    pub attacks: Attacks,
    pub condition: Condition,
    pub misc: Misc,
    pub party: PartyStats,
}

impl CreatureRecord {
    pub fn decode(
        bytes: &[u8],
        layout: RecordLayout,
        encryption: Encryption,
    ) -> Result<Self, CodecError> {
        if bytes.len() < layout.size() {
            return Err(CodecError::new(
                CodecErrorCode::MalformedRecord,
                format!(
                    "{layout:?} record needs {:#x} bytes, got {:#x}",
                    layout.size(),
                    bytes.len()
                ),
            ));
        }
        decode_internal(bytes, layout, encryption).map_err(|e| {
            CodecError::new(
                CodecErrorCode::MalformedRecord,
                format!("failed to decode {layout:?} record: {e}"),
            )
        })
    }

    /// Decode, substituting the blank record for a slice too short to hold one.
    pub fn decode_or_blank(bytes: &[u8], layout: RecordLayout, encryption: Encryption) -> Self {
        Self::decode(bytes, layout, encryption).unwrap_or_default()
    }

    /// Serialize to `layout.size()` bytes. The checksum field is recomputed
    /// over the substructure region exactly as written (after encryption).
    pub fn encode(&self, layout: RecordLayout, encryption: Encryption) -> Vec<u8> {
        let mut out = vec![0u8; layout.size()];
        self.write_header(&mut out);

        let region = self.substructure_region(encryption);
        out[SUBSTRUCTURE_REGION.start..SUBSTRUCTURE_REGION.end].copy_from_slice(&region);
        put_u16(&mut out, CHECKSUM_OFFSET, crypto::checksum(&region));

        if layout == RecordLayout::Party {
            self.party.write(&mut out[PARTY_BLOCK_OFFSET..]);
        }
        out
    }

    /// Reproduces the in-game mail quirk: the substructures are ciphered and
    /// ordered under the record's current identity, then the header PID/OTID
    /// are overwritten with the new values. Only valid while `PID == OTID`.
    pub fn encode_with_mail(&self, new_pid: u32, new_otid: u32) -> Result<Vec<u8>, CodecError> {
        if !self.is_decrypted() {
            return Err(CodecError::new(
                CodecErrorCode::InvalidInput,
                format!(
                    "mail edit needs PID == OTID, record has PID {:#010x} OTID {:#010x}",
                    self.pid, self.otid
                ),
            ));
        }

        let mut out = self.encode(RecordLayout::Party, Encryption::Encrypted);
        put_u32(&mut out, 0x0, new_pid);
        put_u32(&mut out, 0x4, new_otid);
        Ok(out)
    }

    /// Explicit comparison against the zero record; empty box slots decode to this.
    pub fn is_blank(&self) -> bool {
        self.pid == 0
            && self.otid == 0
            && self.nickname.is_zeroed()
            && self.language == 0
            && self.flags == 0
            && self.trainer_name.is_zeroed()
            && self.markings == 0
            && self.checksum == 0
            && self.filler == 0
            && self.growth == Growth::default()
            && self.attacks == Attacks::default()
            && self.condition == Condition::default()
            && self.misc == Misc::default()
            && self.party.is_blank()
    }

    pub fn encryption_key(&self) -> u32 {
        self.pid ^ self.otid
    }

    pub fn is_decrypted(&self) -> bool {
        self.pid == self.otid
    }

    pub fn order_index(&self) -> usize {
        crypto::order_index(self.pid)
    }

    pub fn order_name(&self) -> &'static str {
        crypto::ORDER_NAMES[self.order_index()]
    }

    pub fn nature_index(&self) -> usize {
        (self.pid % 25) as usize
    }

    pub fn trainer_id(&self) -> u16 {
        (self.otid & 0xFFFF) as u16
    }

    pub fn secret_id(&self) -> u16 {
        (self.otid >> 16) as u16
    }

    pub fn is_shiny(&self) -> bool {
        let pid_hi = (self.pid >> 16) as u16;
        let pid_lo = (self.pid & 0xFFFF) as u16;
        (self.trainer_id() ^ self.secret_id() ^ pid_hi ^ pid_lo) < 8
    }

    pub fn record_flags(&self) -> RecordFlags {
        RecordFlags::from_raw(self.flags)
    }

    pub fn language(&self) -> Language {
        Language::from_raw(self.language)
    }

    pub fn charset(&self) -> Charset {
        self.language().charset()
    }

    pub fn nickname_string(&self) -> String {
        self.nickname.decode(self.charset())
    }

    pub fn trainer_name_string(&self) -> String {
        self.trainer_name.decode(self.charset())
    }

    pub fn set_nickname(&mut self, name: &str) -> Result<(), CodecError> {
        self.nickname = GameText::encode(name, self.charset())?;
        Ok(())
    }

    pub fn set_trainer_name(&mut self, name: &str) -> Result<(), CodecError> {
        self.trainer_name = GameText::encode(name, self.charset())?;
        Ok(())
    }

    pub fn is_egg(&self) -> bool {
        self.misc.genes.is_egg
    }

    /// The checksum the game itself validates: the word sum of the plaintext substructures.
    pub fn plaintext_checksum(&self) -> u16 {
        crypto::checksum(&self.substructure_region(Encryption::Plaintext))
    }

    pub fn checksum_matches(&self) -> bool {
        self.checksum == self.plaintext_checksum()
    }

    fn blocks(&self) -> [Block; 4] {
        [
            self.growth.to_block(),
            self.attacks.to_block(),
            self.condition.to_block(),
            self.misc.to_block(),
        ]
    }

    fn substructure_region(&self, encryption: Encryption) -> [u8; 4 * SUBSTRUCTURE_SIZE] {
        let blocks = self.blocks();
        let mut region = [0u8; 4 * SUBSTRUCTURE_SIZE];
        match encryption {
            Encryption::Plaintext => {
                for (slot, block) in blocks.iter().enumerate() {
                    region[slot * SUBSTRUCTURE_SIZE..(slot + 1) * SUBSTRUCTURE_SIZE]
                        .copy_from_slice(block);
                }
            }
            Encryption::Encrypted => {
                let key = self.encryption_key();
                for (slot, &kind) in crypto::order_for(self.pid).iter().enumerate() {
                    let block = crypto::xor_block(&blocks[kind], key);
                    region[slot * SUBSTRUCTURE_SIZE..(slot + 1) * SUBSTRUCTURE_SIZE]
                        .copy_from_slice(&block);
                }
            }
        }
        region
    }

    fn write_header(&self, out: &mut [u8]) {
        put_u32(out, 0x00, self.pid);
        put_u32(out, 0x04, self.otid);
        out[0x08..0x12].copy_from_slice(self.nickname.raw());
        out[0x12] = self.language;
        out[0x13] = self.flags;
        out[0x14..0x1B].copy_from_slice(self.trainer_name.raw());
        out[0x1B] = self.markings;
        put_u16(out, CHECKSUM_OFFSET, self.checksum);
        put_u16(out, 0x1E, self.filler);
    }
}

fn decode_internal(
    bytes: &[u8],
    layout: RecordLayout,
    encryption: Encryption,
) -> io::Result<CreatureRecord> {
    let mut r = LittleEndianReader::new(bytes);
    let pid = r.read_u32()?;
    let otid = r.read_u32()?;
    let nickname = GameText::from_raw(r.read_array::<NICKNAME_LEN>()?);
    let language = r.read_u8()?;
    let flags = r.read_u8()?;
    let trainer_name = GameText::from_raw(r.read_array::<TRAINER_NAME_LEN>()?);
    let markings = r.read_u8()?;
    let checksum = r.read_u16()?;
    let filler = r.read_u16()?;

    let mut region = r.read_array::<{ 4 * SUBSTRUCTURE_SIZE }>()?;
    let order = match encryption {
        Encryption::Plaintext => &crypto::PERMUTATIONS[0],
        Encryption::Encrypted => {
            crypto::xor_words(&mut region, pid ^ otid);
            crypto::order_for(pid)
        }
    };

    let block = |kind: SubstructureKind| -> io::Result<Block> {
        let slot = crypto::find_slot(order, kind.index()).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "substructure order table is not a permutation")
        })?;
        let mut out = [0u8; SUBSTRUCTURE_SIZE];
        out.copy_from_slice(&region[slot * SUBSTRUCTURE_SIZE..(slot + 1) * SUBSTRUCTURE_SIZE]);
        Ok(out)
    };

    let growth = Growth::from_block(&block(SubstructureKind::Growth)?);
    let attacks = Attacks::from_block(&block(SubstructureKind::Attacks)?);
    let condition = Condition::from_block(&block(SubstructureKind::Condition)?);
    let misc = Misc::from_block(&block(SubstructureKind::Misc)?);

    let party = match layout {
        RecordLayout::Party => PartyStats::read(&mut r)?,
        RecordLayout::Boxed => PartyStats::default(),
    };

    Ok(CreatureRecord {
        pid,
        otid,
        nickname,
        language,
        flags,
        trainer_name,
        markings,
        checksum,
        filler,
        growth,
        attacks,
        condition,
        misc,
        party,
    })
}
