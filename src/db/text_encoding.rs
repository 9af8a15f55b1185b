use super::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16le,
    Utf16be,
}

impl TextEncoding {
    pub(super) fn new(value: u32) -> Result<Self> {
        value.try_into()
    }
}

impl TryFrom<u32> for TextEncoding {
    type Error = Error;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Utf8),
            2 => Ok(Self::Utf16le),
            3 => Ok(Self::Utf16be),
            found => Err(Error::UnexpectedValue {
                name: "TextEncoding",
                found,
                expected: "1, 2 or 3",
            }),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf16le => write!(f, "UTF-16le"),
            Self::Utf16be => write!(f, "UTF-16be"),
        }
    }
}
