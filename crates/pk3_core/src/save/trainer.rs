use std::fmt;
use std::io;

use crate::reader::LittleEndianReader;
use crate::text::{Charset, GameText};

const NAME_OFFSET: usize = 0x0;
const GENDER_OFFSET: usize = 0x8;
const TRAINER_ID_OFFSET: usize = 0xA;
const PLAY_TIME_OFFSET: usize = 0xE;
const OPTIONS_OFFSET: usize = 0x13;
const GAME_CODE_OFFSET: usize = 0xAC;
const FRLG_SECURITY_KEY_OFFSET: usize = 0xAF8;

pub const TRAINER_NAME_LEN: usize = 7;

/// Which third-generation game wrote the image, from the section-0 game code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameVariant {
    RubySapphire,
    FireRedLeafGreen,
    Emerald,
}

impl GameVariant {
    pub fn from_game_code(code: u32) -> Self {
        match code {
            0 => Self::RubySapphire,
            1 => Self::FireRedLeafGreen,
            _ => Self::Emerald,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RubySapphire => "Ruby/Sapphire",
            Self::FireRedLeafGreen => "FireRed/LeafGreen",
            Self::Emerald => "Emerald",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player character sex. The save byte and the origin word of a creature
/// both carry it in the low bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainerGender {
    #[default]
    Male,
    Female,
}

impl TrainerGender {
    pub fn from_bit(raw: u8) -> Self {
        if raw & 1 == 0 { Self::Male } else { Self::Female }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for TrainerGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayTime {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl fmt::Display for PlayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSpeed {
    Slow,
    Medium,
    Fast,
    Unknown(u8),
}

impl TextSpeed {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Slow,
            1 => Self::Medium,
            2 => Self::Fast,
            other => Self::Unknown(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Medium => "Medium",
            Self::Fast => "Fast",
            Self::Unknown(_) => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMode {
    Help,
    LR,
    LEqualsA,
    Unknown(u8),
}

impl ButtonMode {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Help,
            1 => Self::LR,
            2 => Self::LEqualsA,
            other => Self::Unknown(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Help => "HELP",
            Self::LR => "LR",
            Self::LEqualsA => "L=A",
            Self::Unknown(_) => "Unknown",
        }
    }
}

/// The three option bytes. Byte 0 is the button mode; byte 1 packs text
/// speed (bits 0-2) and window frame (bits 3-7); byte 2 packs sound, battle
/// style and battle scene as single bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainerOptions {
    pub raw: [u8; 3],
}

impl TrainerOptions {
    pub fn button_mode(&self) -> ButtonMode {
        ButtonMode::from_raw(self.raw[0])
    }

    pub fn text_speed(&self) -> TextSpeed {
        TextSpeed::from_raw(self.raw[1] & 0x7)
    }

    pub fn window_frame(&self) -> u8 {
        self.raw[1] >> 3
    }

    pub fn stereo(&self) -> bool {
        self.raw[2] & 0x1 != 0
    }

    pub fn battle_style_set(&self) -> bool {
        self.raw[2] & 0x2 != 0
    }

    pub fn battle_scene_off(&self) -> bool {
        self.raw[2] & 0x4 != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerInfo {
    pub name: GameText<TRAINER_NAME_LEN>,
    pub gender: TrainerGender,
    pub trainer_id: u16,
    pub secret_id: u16,
    pub play_time: PlayTime,
    pub options: TrainerOptions,
    pub game_code: u32,
    pub variant: GameVariant,
    /// XOR key for money, coins and bag quantities. Zero on Ruby/Sapphire.
    pub security_key: u32,
}

impl TrainerInfo {
    pub fn name_string(&self) -> String {
        self.name.decode(Charset::Western)
    }

    /// Trainer ID and secret ID packed the way creature records store them.
    pub fn otid(&self) -> u32 {
        (self.secret_id as u32) << 16 | self.trainer_id as u32
    }
}

pub fn parse_trainer_info(section: &[u8]) -> io::Result<TrainerInfo> {
    let mut r = LittleEndianReader::at(section, NAME_OFFSET)?;
    let name = GameText::from_raw(r.read_array::<TRAINER_NAME_LEN>()?);

    r.seek_to(GENDER_OFFSET)?;
    let gender = TrainerGender::from_bit(r.read_u8()?);

    r.seek_to(TRAINER_ID_OFFSET)?;
    let trainer_id = r.read_u16()?;
    let secret_id = r.read_u16()?;

    r.seek_to(PLAY_TIME_OFFSET)?;
    let play_time = PlayTime {
        hours: r.read_u16()?,
        minutes: r.read_u8()?,
        seconds: r.read_u8()?,
        frames: r.read_u8()?,
    };

    r.seek_to(OPTIONS_OFFSET)?;
    let options = TrainerOptions {
        raw: r.read_array::<3>()?,
    };

    r.seek_to(GAME_CODE_OFFSET)?;
    let game_code = r.read_u32()?;
    let variant = GameVariant::from_game_code(game_code);

    let security_key = match variant {
        GameVariant::RubySapphire => 0,
        GameVariant::FireRedLeafGreen => {
            r.seek_to(FRLG_SECURITY_KEY_OFFSET)?;
            r.read_u32()?
        }
        GameVariant::Emerald => game_code,
    };

    Ok(TrainerInfo {
        name,
        gender,
        trainer_id,
        secret_id,
        play_time,
        options,
        game_code,
        variant,
        security_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_uses_only_the_low_bit() {
        assert_eq!(TrainerGender::from_bit(0), TrainerGender::Male);
        assert_eq!(TrainerGender::from_bit(1), TrainerGender::Female);
        assert_eq!(TrainerGender::from_bit(0xFE), TrainerGender::Male);
        assert_eq!(TrainerGender::Female.to_string(), "Female");
    }
}
