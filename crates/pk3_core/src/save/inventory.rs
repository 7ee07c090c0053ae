use std::io;

use crate::creature::{CreatureRecord, Encryption, PARTY_RECORD_SIZE, RecordLayout};
use crate::reader::{LittleEndianReader, slice_at};

use super::trainer::GameVariant;

pub const PARTY_CAPACITY: usize = 6;
const ITEM_SLOT_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PocketKind {
    PcItems,
    Items,
    KeyItems,
    Balls,
    TmCase,
    Berries,
}

impl PocketKind {
    pub const ALL: [Self; 6] = [
        Self::PcItems,
        Self::Items,
        Self::KeyItems,
        Self::Balls,
        Self::TmCase,
        Self::Berries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PcItems => "pc_items",
            Self::Items => "items",
            Self::KeyItems => "key_items",
            Self::Balls => "balls",
            Self::TmCase => "tm_case",
            Self::Berries => "berries",
        }
    }

    /// PC storage is not obfuscated; every bag pocket is.
    fn quantity_is_keyed(&self) -> bool {
        !matches!(self, Self::PcItems)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemSlot {
    pub item: u16,
    pub quantity: u16,
}

impl ItemSlot {
    pub fn is_empty(&self) -> bool {
        self.item == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pocket {
    pub kind: PocketKind,
    pub slots: Vec<ItemSlot>,
}

impl Pocket {
    pub fn occupied(&self) -> impl Iterator<Item = &ItemSlot> {
        self.slots.iter().filter(|slot| !slot.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub team_size: u32,
    /// All six party slots; only the first `team_size` are meaningful.
    pub party: Vec<CreatureRecord>,
    pub money: u32,
    pub coins: u16,
    pub pockets: Vec<Pocket>,
}

impl Inventory {
    pub fn team(&self) -> &[CreatureRecord] {
        let len = (self.team_size as usize).min(self.party.len());
        &self.party[..len]
    }

    pub fn pocket(&self, kind: PocketKind) -> Option<&Pocket> {
        self.pockets.iter().find(|p| p.kind == kind)
    }
}

struct InventoryLayout {
    team_size: usize,
    party: usize,
    money: usize,
    coins: usize,
    /// (offset, byte length) per pocket, in `PocketKind::ALL` order.
    pockets: [(usize, usize); 6],
}

const FRLG_LAYOUT: InventoryLayout = InventoryLayout {
    team_size: 0x034,
    party: 0x038,
    money: 0x290,
    coins: 0x294,
    pockets: [
        (0x298, 120),
        (0x310, 168),
        (0x3B8, 120),
        (0x430, 52),
        (0x464, 232),
        (0x54C, 172),
    ],
};

const RS_LAYOUT: InventoryLayout = InventoryLayout {
    team_size: 0x234,
    party: 0x238,
    money: 0x490,
    coins: 0x494,
    pockets: [
        (0x498, 200),
        (0x560, 80),
        (0x5B0, 80),
        (0x600, 64),
        (0x640, 256),
        (0x740, 184),
    ],
};

const EMERALD_LAYOUT: InventoryLayout = InventoryLayout {
    team_size: 0x234,
    party: 0x238,
    money: 0x490,
    coins: 0x494,
    pockets: [
        (0x498, 200),
        (0x560, 120),
        (0x5D8, 120),
        (0x650, 64),
        (0x690, 256),
        (0x790, 184),
    ],
};

fn layout_for(variant: GameVariant) -> &'static InventoryLayout {
    match variant {
        GameVariant::FireRedLeafGreen => &FRLG_LAYOUT,
        GameVariant::RubySapphire => &RS_LAYOUT,
        GameVariant::Emerald => &EMERALD_LAYOUT,
    }
}

pub fn parse_inventory(
    section: &[u8],
    variant: GameVariant,
    security_key: u32,
) -> io::Result<Inventory> {
    let layout = layout_for(variant);
    let quantity_key = security_key as u16;

    let team_size = LittleEndianReader::at(section, layout.team_size)?.read_u32()?;

    let party_bytes = slice_at(section, layout.party, PARTY_CAPACITY * PARTY_RECORD_SIZE)
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "party list out of range"))?;
    let party = party_bytes
        .chunks_exact(PARTY_RECORD_SIZE)
        .map(|chunk| {
            CreatureRecord::decode_or_blank(chunk, RecordLayout::Party, Encryption::Encrypted)
        })
        .collect();

    let money = LittleEndianReader::at(section, layout.money)?.read_u32()? ^ security_key;
    let coins = LittleEndianReader::at(section, layout.coins)?.read_u16()? ^ quantity_key;

    let mut pockets = Vec::with_capacity(PocketKind::ALL.len());
    for (kind, &(offset, len)) in PocketKind::ALL.iter().zip(layout.pockets.iter()) {
        let bytes = slice_at(section, offset, len).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{} pocket out of range", kind.as_str()),
            )
        })?;
        let key = if kind.quantity_is_keyed() { quantity_key } else { 0 };
        let slots = bytes
            .chunks_exact(ITEM_SLOT_SIZE)
            .map(|s| ItemSlot {
                item: u16::from_le_bytes([s[0], s[1]]),
                quantity: u16::from_le_bytes([s[2], s[3]]) ^ key,
            })
            .collect();
        pockets.push(Pocket { kind: *kind, slots });
    }

    Ok(Inventory {
        team_size,
        party,
        money,
        coins,
        pockets,
    })
}
