use super::{Error, Result};

const MIN_PAGE_SIZE: u16 = 512;
const MAX_PAGE_SIZE: u16 = 32768;
/// Raw value standing in for a 65536 byte page, which does not fit in two bytes.
const LARGEST_PAGE_SENTINEL: u16 = 1;

/// Effective page size of a database file, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u16> for PageSize {
    type Error = Error;

    fn try_from(raw: u16) -> std::result::Result<Self, Self::Error> {
        match raw {
            LARGEST_PAGE_SENTINEL => Ok(Self(65536)),
            n if n.is_power_of_two() && (MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&n) => {
                Ok(Self(n as u32))
            }
            n => Err(Error::InvalidPageSize(n)),
        }
    }
}

pub fn validate_page_size(raw: u16) -> Result<PageSize> {
    PageSize::try_from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_resolves_the_sentinel() {
        assert_eq!(validate_page_size(1).unwrap().get(), 65536);
    }

    #[test]
    fn it_accepts_powers_of_two_in_range() {
        assert_eq!(validate_page_size(512).unwrap().get(), 512);
        assert_eq!(validate_page_size(1024).unwrap().get(), 1024);
        assert_eq!(validate_page_size(4096).unwrap().get(), 4096);
        assert_eq!(validate_page_size(32768).unwrap().get(), 32768);
    }

    #[test]
    fn it_rejects_invalid_sizes() {
        for raw in [0, 2, 256, 513, 1000, 40000, u16::MAX] {
            assert!(
                matches!(validate_page_size(raw), Err(Error::InvalidPageSize(n)) if n == raw),
                "{raw} should be rejected"
            );
        }
    }
}
