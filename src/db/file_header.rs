use super::{
    field::{DecodedField, FieldValue},
    layout::HEADER_LAYOUT,
    page_size::{validate_page_size, PageSize},
    text_encoding::TextEncoding,
    Error, Result,
};
use bytes::Bytes;
use log::{debug, trace};
use std::fmt;

pub const HEADER_SIZE: usize = 100;
pub const SIGNATURE: &str = "SQLite format 3";

/// Decodes every header field from the first [`HEADER_SIZE`] bytes of `buf`.
///
/// Anything past the header is ignored. Field contents are never validated
/// here, see [`HeaderDecodeResult::check`].
pub fn decode(buf: &[u8]) -> Result<HeaderDecodeResult> {
    if buf.len() < HEADER_SIZE {
        return Err(Error::TruncatedInput(buf.len()));
    }

    let header = Bytes::copy_from_slice(&buf[..HEADER_SIZE]);
    let fields = HEADER_LAYOUT
        .iter()
        .map(|spec| {
            let field = DecodedField::new(spec, header.slice(spec.range()));
            trace!("Decoded {} at offset {}: {}", field.name, field.offset, field.value);
            field
        })
        .collect::<Vec<DecodedField>>();

    debug!("Decoded {} header fields", fields.len());
    Ok(HeaderDecodeResult(fields))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDecodeResult(Vec<DecodedField>);

impl HeaderDecodeResult {
    pub fn iter(&self) -> std::slice::Iter<'_, DecodedField> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DecodedField> {
        self.0.iter().find(|field| field.name == name)
    }

    pub fn uint(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(|field| field.value.as_uint())
    }

    pub fn header_string(&self) -> &str {
        self.0[0].value.as_text().unwrap_or_default()
    }

    pub fn page_size_raw(&self) -> u16 {
        // PageSize is two bytes wide, so the decoded value always fits.
        self.uint("PageSize").unwrap_or_default() as u16
    }

    pub fn page_size(&self) -> Result<PageSize> {
        validate_page_size(self.page_size_raw())
    }

    pub fn text_encoding_raw(&self) -> u32 {
        self.uint("TextEncoding").unwrap_or_default()
    }

    pub fn text_encoding(&self) -> Result<TextEncoding> {
        TextEncoding::new(self.text_encoding_raw())
    }

    /// Field values in layout order, suitable for [`super::encode`].
    pub fn values(&self) -> Vec<FieldValue> {
        self.0.iter().map(|field| field.value.clone()).collect()
    }

    /// Reports every anomaly found in the decoded header. An empty list means
    /// the header looks like one written by a well-behaved library.
    pub fn check(&self) -> Vec<Error> {
        let mut findings = vec![];

        if self.header_string() != SIGNATURE {
            findings.push(Error::InvalidSignature(self.header_string().to_string()));
        }
        if let Err(e) = self.page_size() {
            findings.push(e);
        }

        let expectations: [(&'static str, fn(u32) -> bool, &'static str); 6] = [
            ("WriteVersion", |n| n == 1 || n == 2, "1 or 2"),
            ("ReadVersion", |n| n == 1 || n == 2, "1 or 2"),
            ("MaxEmbeddedPayloadFraction", |n| n == 64, "64"),
            ("MinEmbeddedPayloadFraction", |n| n == 32, "32"),
            ("LeafPayloadFraction", |n| n == 32, "32"),
            ("SchemaFormatNumber", |n| (1..=4).contains(&n), "1 to 4"),
        ];
        for (name, accepts, expected) in expectations {
            let found = self.uint(name).unwrap_or_default();
            if !accepts(found) {
                findings.push(Error::UnexpectedValue {
                    name,
                    found,
                    expected,
                });
            }
        }

        if let Err(e) = self.text_encoding() {
            findings.push(e);
        }

        let reserved_is_zero = self
            .get("ReservedForExpansion")
            .is_some_and(|field| field.raw.iter().all(|&b| b == 0));
        if !reserved_is_zero {
            findings.push(Error::NonZeroReserved);
        }

        findings
    }
}

impl<'a> IntoIterator for &'a HeaderDecodeResult {
    type Item = &'a DecodedField;
    type IntoIter = std::slice::Iter<'a, DecodedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for HeaderDecodeResult {
    type Item = DecodedField;
    type IntoIter = std::vec::IntoIter<DecodedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for HeaderDecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|field| writeln!(f, "{field}"))
    }
}
