//! Static description of the database file header.
//!
//! | Offset | Size | Description                                                   |
//! |--------|------|---------------------------------------------------------------|
//! |      0 |   16 | The header string: "SQLite format 3\000"                      |
//! |     16 |    2 | The database page size in bytes                               |
//! |     18 |    6 | File format versions and payload fractions, one byte each     |
//! |     24 |   44 | Eleven big-endian 32 bit counters and settings                |
//! |     68 |   24 | Reserved for expansion. Must be zero.                         |
//! |     92 |    8 | The version-valid-for number and SQLITE_VERSION_NUMBER        |

use super::HEADER_SIZE;
use static_assertions::const_assert_eq;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    FixedString(usize),
    Uint8,
    Uint16,
    Uint32,
    RawBytes(usize),
}

impl FieldKind {
    pub const fn width(&self) -> usize {
        match self {
            Self::FixedString(n) | Self::RawBytes(n) => *n,
            Self::Uint8 => 1,
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub kind: FieldKind,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn width(&self) -> usize {
        self.kind.width()
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width()
    }
}

pub const FIELD_COUNT: usize = 22;

type FieldDef = (&'static str, FieldKind, &'static str);

const LAYOUT: [FieldSpec; FIELD_COUNT] = with_offsets([
    (
        "HeaderString",
        FieldKind::FixedString(16),
        "The header string: \"SQLite format 3\\000\".",
    ),
    (
        "PageSize",
        FieldKind::Uint16,
        "The database page size in bytes. Must be a power of two between 512 and 32768 inclusive, or the value 1 representing a page size of 65536.",
    ),
    ("WriteVersion", FieldKind::Uint8, "File format write version. 1 for legacy; 2 for WAL."),
    ("ReadVersion", FieldKind::Uint8, "File format read version. 1 for legacy; 2 for WAL."),
    (
        "ReservedSpace",
        FieldKind::Uint8,
        "Bytes of unused \"reserved\" space at the end of each page. Usually 0.",
    ),
    ("MaxEmbeddedPayloadFraction", FieldKind::Uint8, "Maximum embedded payload fraction. Must be 64."),
    ("MinEmbeddedPayloadFraction", FieldKind::Uint8, "Minimum embedded payload fraction. Must be 32."),
    ("LeafPayloadFraction", FieldKind::Uint8, "Leaf payload fraction. Must be 32."),
    ("FileChangeCounter", FieldKind::Uint32, "File change counter."),
    (
        "SizeInPages",
        FieldKind::Uint32,
        "Size of the database file in pages. The \"in-header database size\".",
    ),
    ("FirstFreelistPage", FieldKind::Uint32, "Page number of the first freelist trunk page."),
    ("FreelistTotal", FieldKind::Uint32, "Total number of freelist pages."),
    ("SchemaCookie", FieldKind::Uint32, "The schema cookie."),
    (
        "SchemaFormatNumber",
        FieldKind::Uint32,
        "The schema format number. Supported schema formats are 1, 2, 3, and 4.",
    ),
    ("DefaultPageCacheSize", FieldKind::Uint32, "Default page cache size."),
    (
        "MagicPageNumber",
        FieldKind::Uint32,
        "The page number of the largest root b-tree page when in auto-vacuum or incremental-vacuum modes, or zero otherwise.",
    ),
    (
        "TextEncoding",
        FieldKind::Uint32,
        "The database text encoding. A value of 1 means UTF-8. A value of 2 means UTF-16le. A value of 3 means UTF-16be.",
    ),
    (
        "UserVersion",
        FieldKind::Uint32,
        "The \"user version\" as read and set by the user_version pragma.",
    ),
    (
        "IncrementalVacuumMode",
        FieldKind::Uint32,
        "True (non-zero) for incremental-vacuum mode. False (zero) otherwise.",
    ),
    ("ReservedForExpansion", FieldKind::RawBytes(24), "Reserved for expansion. Must be zero."),
    ("VersionValidFor", FieldKind::Uint32, "The version-valid-for number."),
    ("SqliteVersion", FieldKind::Uint32, "SQLITE_VERSION_NUMBER"),
]);

const_assert_eq!(total_width(&LAYOUT), HEADER_SIZE);

/// Every header field in on-disk order.
pub static HEADER_LAYOUT: [FieldSpec; FIELD_COUNT] = LAYOUT;

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    HEADER_LAYOUT.iter().find(|spec| spec.name == name)
}

const fn with_offsets(defs: [FieldDef; FIELD_COUNT]) -> [FieldSpec; FIELD_COUNT] {
    let mut specs = [FieldSpec {
        name: "",
        offset: 0,
        kind: FieldKind::Uint8,
        description: "",
    }; FIELD_COUNT];

    let mut offset = 0;
    let mut i = 0;
    while i < FIELD_COUNT {
        let (name, kind, description) = defs[i];
        specs[i] = FieldSpec {
            name,
            offset,
            kind,
            description,
        };
        offset += kind.width();
        i += 1;
    }
    specs
}

const fn total_width(specs: &[FieldSpec]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < specs.len() {
        total += specs[i].width();
        i += 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_places_fields_at_documented_offsets() {
        let offsets = HEADER_LAYOUT
            .iter()
            .map(|spec| spec.offset)
            .collect::<Vec<usize>>();
        let expected = vec![
            0, 16, 18, 19, 20, 21, 22, 23, 24, 28, 32, 36, 40, 44, 48, 52, 56, 60, 64, 68, 92, 96,
        ];
        assert_eq!(offsets, expected);
    }

    #[test]
    fn it_covers_the_header_without_gaps() {
        let mut next = 0;
        for spec in HEADER_LAYOUT.iter() {
            assert_eq!(spec.offset, next, "gap or overlap before {}", spec.name);
            next = spec.range().end;
        }
        assert_eq!(next, HEADER_SIZE);
    }

    #[test]
    fn it_has_unique_names() {
        for (i, spec) in HEADER_LAYOUT.iter().enumerate() {
            assert!(HEADER_LAYOUT[i + 1..].iter().all(|s| s.name != spec.name));
        }
    }

    #[test]
    fn it_looks_up_fields_by_name() {
        let spec = field_spec("TextEncoding").unwrap();
        assert_eq!(spec.offset, 56);
        assert_eq!(spec.kind, FieldKind::Uint32);
        assert_eq!(field_spec("ReservedForExpansion").unwrap().width(), 24);
        assert!(field_spec("ApplicationId").is_none());
    }

    #[test]
    fn it_describes_each_field() {
        assert!(HEADER_LAYOUT.iter().all(|spec| !spec.description.is_empty()));
        assert!(field_spec("PageSize")
            .unwrap()
            .description
            .contains("power of two"));
    }
}
