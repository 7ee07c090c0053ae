use std::fmt;

use serde::{Deserialize, Serialize};

/// Creature gender, derived from the PID and the species gender ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl Gender {
    pub const RATIO_ALWAYS_MALE: u8 = 0;
    pub const RATIO_ALWAYS_FEMALE: u8 = 254;
    pub const RATIO_GENDERLESS: u8 = 255;

    /// Low PID byte below the ratio threshold is female.
    pub fn from_pid(pid: u32, ratio: u8) -> Self {
        match ratio {
            Self::RATIO_GENDERLESS => Self::Genderless,
            Self::RATIO_ALWAYS_FEMALE => Self::Female,
            Self::RATIO_ALWAYS_MALE => Self::Male,
            threshold if ((pid & 0xFF) as u8) < threshold => Self::Female,
            _ => Self::Male,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Genderless => "Genderless",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
