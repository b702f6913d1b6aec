//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// Identifies a page in a reference sequence.
///
/// Page identifiers are non-negative, so `u32` is enough. Empty frame slots
/// are `None` rather than a sentinel page id.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id: PageId = "42".parse().unwrap();
/// assert_eq!(page_id, PageId::new(42));
/// assert!("-1".parse::<PageId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(PageId)
            .map_err(|_| Error::InvalidPage(s.to_string()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

/// Convert raw ids into a reference sequence.
pub fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_parse() {
        assert_eq!(" 7 ".parse::<PageId>().unwrap(), PageId(7));
        assert!(matches!("x".parse::<PageId>(), Err(Error::InvalidPage(_))));
        assert!("-1".parse::<PageId>().is_err());
        assert!("".parse::<PageId>().is_err());
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
    }

    #[test]
    fn test_pages_helper() {
        assert_eq!(pages(&[1, 2]), vec![PageId(1), PageId(2)]);
        assert!(pages(&[]).is_empty());
    }
}
