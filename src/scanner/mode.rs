//! Source format state and fixed-format zones
//!
//! The format mode is the only state the scanner carries from one call to the next. A grammar
//! runtime saves it at every point it may later resume from and restores it before resuming,
//! so it has a one byte external form.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which layout rules apply to the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatMode {
    /// Column zones are in effect.
    #[default]
    Fixed,
    /// No column zones.
    Free,
}

impl FormatMode {
    /// Size of the serialized state in bytes.
    pub const SERIALIZED_LEN: usize = 1;

    pub fn is_free(self) -> bool {
        self == FormatMode::Free
    }

    pub fn to_byte(self) -> u8 {
        match self {
            FormatMode::Fixed => 0,
            FormatMode::Free => 1,
        }
    }

    /// Any non-zero byte reads as free format.
    pub fn from_byte(byte: u8) -> Self {
        if byte != 0 {
            FormatMode::Free
        } else {
            FormatMode::Fixed
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormatMode::Fixed => "fixed",
            FormatMode::Free => "free",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fixed") {
            Ok(FormatMode::Fixed)
        } else if s.eq_ignore_ascii_case("free") {
            Ok(FormatMode::Free)
        } else {
            Err(Error::InvalidFormatMode(s.to_string()))
        }
    }
}

/// Fixed-format column zones of a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Columns 0-5.
    Sequence,
    /// Column 6.
    Indicator,
    /// Columns 7-71.
    Program,
    /// Columns 72 and beyond.
    Identification,
}

impl Zone {
    pub const INDICATOR_COLUMN: u32 = 6;
    pub const PROGRAM_START: u32 = 7;
    /// Last column a comment entry is scanned to.
    pub const PROGRAM_LAST: u32 = 71;
    pub const IDENTIFICATION_START: u32 = 72;

    pub fn of(column: u32) -> Zone {
        match column {
            0..=5 => Zone::Sequence,
            Zone::INDICATOR_COLUMN => Zone::Indicator,
            Zone::PROGRAM_START..=Zone::PROGRAM_LAST => Zone::Program,
            _ => Zone::Identification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fixed() {
        assert_eq!(FormatMode::default(), FormatMode::Fixed);
    }

    #[test]
    fn test_byte_form() {
        assert_eq!(FormatMode::Fixed.to_byte(), 0);
        assert_eq!(FormatMode::Free.to_byte(), 1);
        assert_eq!(FormatMode::from_byte(0), FormatMode::Fixed);
        assert_eq!(FormatMode::from_byte(1), FormatMode::Free);
        assert_eq!(FormatMode::from_byte(0xff), FormatMode::Free);
    }

    #[test]
    fn test_parse() {
        assert_eq!("FREE".parse::<FormatMode>().unwrap(), FormatMode::Free);
        assert_eq!("fixed".parse::<FormatMode>().unwrap(), FormatMode::Fixed);
        assert!("variable".parse::<FormatMode>().is_err());
    }

    #[test]
    fn test_zones() {
        assert_eq!(Zone::of(0), Zone::Sequence);
        assert_eq!(Zone::of(5), Zone::Sequence);
        assert_eq!(Zone::of(6), Zone::Indicator);
        assert_eq!(Zone::of(7), Zone::Program);
        assert_eq!(Zone::of(71), Zone::Program);
        assert_eq!(Zone::of(72), Zone::Identification);
        assert_eq!(Zone::of(200), Zone::Identification);
    }
}
