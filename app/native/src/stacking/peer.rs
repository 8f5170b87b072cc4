//! Peer identity encoded in window titles.
//!
//! Every instance of the pet titles its window `"<base>"` (index 0) or
//! `"<base> (<N>)"` (index N). `N` is a signed 32-bit decimal, optionally
//! with a leading `+`; negative or out-of-range values, like any other title,
//! belong to a foreign window.
//! The grammar is kept behind [`PeerNaming`] so the resolver never depends on
//! how the index travels between processes.

use regex::Regex;

/// Largest index (exclusive) considered when looking for the next peer above.
pub const MAX_PEER_INDEX: u32 = 2048;

/// Encodes and decodes a peer index.
pub trait PeerNaming {
    /// Index of the peer owning a window with this title, or `None` for foreign windows.
    fn parse(&self, title: &str) -> Option<u32>;

    /// Title an instance with `index` should use.
    fn format(&self, index: u32) -> String;
}

/// Title-suffix peer naming: `"Pet"`, `"Pet (1)"`, `"Pet (2)"`, ...
#[derive(Debug, Clone)]
pub struct TitlePeerNaming {
    base: String,
    /// `None` only if the escaped pattern failed to compile; no title matches then.
    pattern: Option<Regex>,
}

impl TitlePeerNaming {
    /// Creates the naming scheme for the given base title.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let source = format!(r"^{}(?: \(([+-]?[0-9]+)\))?$", regex::escape(&base));
        let pattern = Regex::new(&source).ok();
        if pattern.is_none() {
            tracing::error!(base = %base, "failed to compile peer title pattern");
        }
        Self { base, pattern }
    }

    #[must_use]
    pub fn base(&self) -> &str { &self.base }
}

impl PeerNaming for TitlePeerNaming {
    fn parse(&self, title: &str) -> Option<u32> {
        let captures = self.pattern.as_ref()?.captures(title)?;
        match captures.get(1) {
            None => Some(0),
            Some(number) => {
                let signed = number.as_str().parse::<i32>().ok();
                let index = signed.and_then(|n| u32::try_from(n).ok());
                if index.is_none() {
                    tracing::debug!(title, "peer title index out of range");
                }
                index
            }
        }
    }

    fn format(&self, index: u32) -> String {
        if index == 0 { self.base.clone() } else { format!("{} ({index})", self.base) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naming() -> TitlePeerNaming { TitlePeerNaming::new("Pet") }

    #[test]
    fn test_parse_base_title_is_zero() {
        assert_eq!(naming().parse("Pet"), Some(0));
    }

    #[test]
    fn test_parse_suffixed_title() {
        assert_eq!(naming().parse("Pet (3)"), Some(3));
        assert_eq!(naming().parse("Pet (12)"), Some(12));
    }

    #[test]
    fn test_parse_rejects_non_numeric_suffix() {
        assert_eq!(naming().parse("Pet (abc)"), None);
        assert_eq!(naming().parse("Pet (-1)"), None);
        assert_eq!(naming().parse("Pet ()"), None);
    }

    #[test]
    fn test_parse_rejects_foreign_titles() {
        assert_eq!(naming().parse("Other App"), None);
        assert_eq!(naming().parse(""), None);
        assert_eq!(naming().parse("Pet (3) "), None);
        assert_eq!(naming().parse("My Pet"), None);
        assert_eq!(naming().parse("Pet(3)"), None);
    }

    #[test]
    fn test_parse_overflow_is_not_peer() {
        assert_eq!(naming().parse("Pet (99999999999999999999)"), None);
        assert_eq!(naming().parse("Pet (3000000000)"), None);
        assert_eq!(naming().parse("Pet (2147483647)"), Some(2_147_483_647));
    }

    #[test]
    fn test_parse_signed_suffix() {
        assert_eq!(naming().parse("Pet (+3)"), Some(3));
        assert_eq!(naming().parse("Pet (-0)"), Some(0));
        assert_eq!(naming().parse("Pet (-7)"), None);
        assert_eq!(naming().parse("Pet (+)"), None);
    }

    #[test]
    fn test_base_title_with_regex_metacharacters() {
        let naming = TitlePeerNaming::new("Pet.exe [x]");
        assert_eq!(naming.parse("Pet.exe [x] (2)"), Some(2));
        assert_eq!(naming.parse("PetAexe [x]"), None);
    }

    #[test]
    fn test_format_parse_pair() {
        let naming = naming();
        assert_eq!(naming.format(0), "Pet");
        assert_eq!(naming.format(4), "Pet (4)");
        for index in [0, 1, 7, 2047] {
            assert_eq!(naming.parse(&naming.format(index)), Some(index));
        }
    }
}
