use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::Charset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Japanese,
    English,
    French,
    Italian,
    German,
    Korean,
    Spanish,
    Unknown(u8),
}

impl Language {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Japanese,
            2 => Self::English,
            3 => Self::French,
            4 => Self::Italian,
            5 => Self::German,
            6 => Self::Korean,
            7 => Self::Spanish,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(&self) -> u8 {
        match *self {
            Self::Japanese => 1,
            Self::English => 2,
            Self::French => 3,
            Self::Italian => 4,
            Self::German => 5,
            Self::Korean => 6,
            Self::Spanish => 7,
            Self::Unknown(other) => other,
        }
    }

    /// Name fields of Japanese records use the kana table.
    pub fn charset(&self) -> Charset {
        match self {
            Self::Japanese => Charset::Japanese,
            _ => Charset::Western,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Japanese => "Japanese",
            Self::English => "English",
            Self::French => "French",
            Self::Italian => "Italian",
            Self::German => "German",
            Self::Korean => "Korean",
            Self::Spanish => "Spanish",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unknown(v) => write!(f, "Unknown ({})", v),
            _ => f.write_str(self.as_str()),
        }
    }
}
