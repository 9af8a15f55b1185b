use super::layout::{FieldKind, FieldSpec};
use bytes::{Buf, Bytes};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Uint(u32),
    Bytes(Bytes),
}

impl FieldValue {
    pub fn as_uint(&self) -> Option<u32> {
        match self {
            Self::Uint(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(t) => write!(f, "{t}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Bytes(bytes) => bytes.iter().try_for_each(|b| write!(f, "{b:02x}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    pub offset: usize,
    pub name: &'static str,
    pub raw: Bytes,
    pub value: FieldValue,
}

impl DecodedField {
    /// Decodes the field described by `spec` out of `raw`, which must be
    /// exactly `spec.width()` bytes long.
    pub(super) fn new(spec: &FieldSpec, raw: Bytes) -> Self {
        debug_assert_eq!(raw.len(), spec.width());
        let mut buf = raw.clone();

        let value = match spec.kind {
            FieldKind::FixedString(_) => {
                let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
                FieldValue::Text(String::from_utf8_lossy(&raw[..end]).into_owned())
            }
            FieldKind::Uint8 => FieldValue::Uint(buf.get_u8() as u32),
            FieldKind::Uint16 => FieldValue::Uint(buf.get_u16() as u32),
            FieldKind::Uint32 => FieldValue::Uint(buf.get_u32()),
            FieldKind::RawBytes(_) => FieldValue::Bytes(raw.clone()),
        };

        Self {
            offset: spec.offset,
            name: spec.name,
            raw,
            value,
        }
    }

    pub fn display(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for DecodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}={}", self.offset, self.name, self.value)
    }
}
