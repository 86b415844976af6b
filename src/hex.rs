//! Hex notation for 8-bit sRGB colors.
//!
//! Accepted input is an optional leading `#` followed by either 3 or 6 hex
//! digits, in any case. The short form doubles each digit. Output is always
//! the canonical uppercase `#RRGGBB`.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::models::Rgb8;

/// An error returned when a string is not a valid hex color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseHexError {
    /// The number of digits after the optional `#` was neither 3 nor 6.
    InvalidLength(usize),
    /// A character that is not a hex digit was found.
    InvalidDigit(char),
}

impl fmt::Display for ParseHexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseHexError::InvalidLength(len) => {
                write!(f, "expected 3 or 6 hex digits, found {len}")
            }
            ParseHexError::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ParseHexError {}

fn digit(c: char) -> Result<u8, ParseHexError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ParseHexError::InvalidDigit(c))
}

impl FromStr for Rgb8 {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        let mut values = [0_u8; 6];
        let len = digits.chars().count();
        match len {
            3 => {
                for (i, c) in digits.chars().enumerate() {
                    let d = digit(c)?;
                    values[i * 2] = d;
                    values[i * 2 + 1] = d;
                }
            }
            6 => {
                for (i, c) in digits.chars().enumerate() {
                    values[i] = digit(c)?;
                }
            }
            _ => return Err(ParseHexError::InvalidLength(len)),
        }

        Ok(Rgb8::new(
            (values[0] << 4) | values[1],
            (values[2] << 4) | values[3],
            (values[4] << 4) | values[5],
        ))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl Rgb8 {
    /// Parse a hex color, logging and discarding the reason on failure.
    pub fn from_hex(hex: &str) -> Option<Self> {
        match hex.parse::<Rgb8>() {
            Ok(rgb) => Some(rgb),
            Err(err) => {
                tracing::debug!(input = hex, %err, "rejected hex color");
                None
            }
        }
    }

    /// Format this color as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl Serialize for Rgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Rgb8>().map_err(de::Error::custom)
    }
}
