use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canon division a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "Old",
            Testament::New => "New",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a string names no testament.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown testament: {0:?} (expected old, new, ot or nt)")]
pub struct ParseTestamentError(pub String);

impl FromStr for Testament {
    type Err = ParseTestamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" | "ot" => Ok(Testament::Old),
            "new" | "nt" => Ok(Testament::New),
            _ => Err(ParseTestamentError(s.to_string())),
        }
    }
}

/// Validated, case-folded book name used as a lookup key.
///
/// Construction goes through [`BookKey::parse`], which rejects empty and
/// whitespace-only input. Surrounding whitespace is kept, so `" Genesis"`
/// does not match `"Genesis"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookKey(String);

impl BookKey {
    /// Parse a raw book name. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(fold(raw)))
    }

    /// Whether `name` refers to the same book, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        fold(name) == self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testament_parses_aliases() {
        assert_eq!("old".parse::<Testament>().unwrap(), Testament::Old);
        assert_eq!("NT".parse::<Testament>().unwrap(), Testament::New);
        assert_eq!(" New ".parse::<Testament>().unwrap(), Testament::New);
        assert!("apocrypha".parse::<Testament>().is_err());
    }

    #[test]
    fn testament_serializes_as_name() {
        let json = serde_json::to_string(&Testament::Old).unwrap();
        assert_eq!(json, "\"Old\"");
        let back: Testament = serde_json::from_str("\"New\"").unwrap();
        assert_eq!(back, Testament::New);
    }

    #[test]
    fn book_key_rejects_blank() {
        assert!(BookKey::parse("").is_none());
        assert!(BookKey::parse("   ").is_none());
        assert!(BookKey::parse("\t\n").is_none());
    }

    #[test]
    fn book_key_is_case_insensitive() {
        let key = BookKey::parse("GeNeSiS").unwrap();
        assert_eq!(key.as_str(), "genesis");
        assert!(key.matches("Genesis"));
        assert!(key.matches("GENESIS"));
        assert!(!key.matches("Exodus"));
    }

    #[test]
    fn book_key_does_not_strip_padding() {
        let padded = BookKey::parse("  Genesis\t").unwrap();
        assert_eq!(padded.as_str(), "  genesis\t");
        assert!(!padded.matches("Genesis"));

        let key = BookKey::parse("Genesis").unwrap();
        assert!(!key.matches(" Genesis"));
        assert!(!key.matches("genesis "));
    }

    #[test]
    fn book_key_keeps_inner_spaces() {
        let key = BookKey::parse("Song of Songs").unwrap();
        assert!(key.matches("song of songs"));
        assert!(!key.matches("songofsongs"));
    }
}
