use crate::db::HEADER_SIZE;
use std::io;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("ERR - io: {0}")]
    Io(#[from] io::Error),

    #[error("ERR - truncated input: header needs {size} bytes, got {0}", size = HEADER_SIZE)]
    TruncatedInput(usize),

    #[error("ERR - invalid signature: {0:?}")]
    InvalidSignature(String),

    #[error("ERR - invalid page size: {0}")]
    InvalidPageSize(u16),

    #[error("ERR - unexpected value for {name}: {found} (expected {expected})")]
    UnexpectedValue {
        name: &'static str,
        found: u32,
        expected: &'static str,
    },

    #[error("ERR - reserved bytes are not zero")]
    NonZeroReserved,

    #[error("ERR - other: {0}")]
    Other(#[from] anyhow::Error),
}
