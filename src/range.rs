//! Verse ranges within a surah.

use crate::{Error, Result};
use serde::Serialize;

/// Inclusive, 1-based verse range. Always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseRange {
    start: u32,
    end: u32,
}

impl VerseRange {
    /// Build a range; an omitted end, or one before `start`, collapses the
    /// range to the single verse `start`.
    pub fn new(start: u32, end: Option<u32>) -> Self {
        let end = match end {
            Some(e) if e >= start => e,
            _ => start,
        };
        Self { start, end }
    }

    pub fn single(verse: u32) -> Self {
        Self::new(verse, None)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Reject ranges that cannot address any verse.
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 {
            return Err(Error::InvalidRange("verse numbers start at 1".into()));
        }
        Ok(())
    }

    /// Cap `end` at the surah's verse count.
    pub fn clamp_to(self, total: u32) -> Result<Self> {
        if self.start > total {
            return Err(Error::InvalidRange(format!(
                "verse {} is past the end of a {}-verse surah",
                self.start, total
            )));
        }
        Ok(Self {
            start: self.start,
            end: self.end.min(total),
        })
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-based offset of `start`, as the verse API expects it.
    pub fn offset(&self) -> u32 {
        self.start.saturating_sub(1)
    }

    pub fn contains(&self, verse: u32) -> bool {
        (self.start..=self.end).contains(&verse)
    }
}

impl std::fmt::Display for VerseRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_or_reversed_end_collapses_to_start() {
        assert_eq!(VerseRange::new(5, None), VerseRange { start: 5, end: 5 });
        let reversed = VerseRange::new(5, Some(2));
        assert_eq!((reversed.start(), reversed.end()), (5, 5));
        assert_eq!(reversed.len(), 1);
        assert!(!reversed.is_empty());
        assert_eq!(VerseRange::new(5, Some(8)).len(), 4);
    }

    #[test]
    fn clamps_to_surah_length() {
        let r = VerseRange::new(3, Some(50)).clamp_to(7).unwrap();
        assert_eq!(r, VerseRange { start: 3, end: 7 });
        assert!(VerseRange::single(8).clamp_to(7).is_err());
    }

    #[test]
    fn zero_start_is_invalid() {
        assert!(VerseRange::single(0).validate().is_err());
        assert!(VerseRange::single(1).validate().is_ok());
    }

    #[test]
    fn offset_and_display() {
        let r = VerseRange::new(1, Some(7));
        assert_eq!(r.offset(), 0);
        assert_eq!(r.to_string(), "1-7");
        assert_eq!(VerseRange::single(255).to_string(), "255");
    }
}
