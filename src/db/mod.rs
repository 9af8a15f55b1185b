mod encode;
mod field;
pub mod file_header;
pub mod layout;
mod page_size;
mod text_encoding;

use super::{Error, Result};
use log::debug;
use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::Path,
};

pub use encode::encode;
pub use field::{DecodedField, FieldValue};
pub use file_header::{decode, HeaderDecodeResult, HEADER_SIZE, SIGNATURE};
pub use layout::{field_spec, FieldKind, FieldSpec, HEADER_LAYOUT};
pub use page_size::{validate_page_size, PageSize};
pub use text_encoding::TextEncoding;

pub type DbFile = Db<File>;

impl Db<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening {}", path.as_ref().display());
        File::open(path).map(Self::new).map_err(Error::from)
    }
}

/// A database file, of which only the header is ever read.
#[derive(Debug)]
pub struct Db<R: Read + Seek>(R);

impl<R: Read + Seek> Db<R> {
    pub fn new(r: R) -> Self {
        Self(r)
    }

    pub fn file_header(&mut self) -> Result<HeaderDecodeResult> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        self.0.seek(SeekFrom::Start(0))?;
        (&mut self.0)
            .take(HEADER_SIZE as u64)
            .read_to_end(&mut buf)?;
        decode(&buf)
    }
}
