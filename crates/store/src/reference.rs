//! Textual scripture references such as `John 3:16` or `Psalms 23:1-4`.

use std::fmt;
use std::str::FromStr;

use crate::model::{Book, Chapter, Verse};
use crate::source::ScriptureSource;
use crate::store::ScriptureStore;

/// A parsed reference: a book, optionally narrowed to a chapter and a verse
/// range. A single verse is stored as a range with equal bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub book: String,
    pub chapter: Option<u32>,
    pub verses: Option<(u32, u32)>,
}

/// Errors from parsing a [`Reference`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    #[error("empty reference")]
    Empty,
    #[error("reference has no book name")]
    MissingBook,
    #[error("invalid number in reference: {0:?}")]
    InvalidNumber(String),
    #[error("chapter and verse numbers start at 1")]
    ZeroNumber,
    #[error("verse range {start}-{end} runs backwards")]
    InvertedRange { start: u32, end: u32 },
}

impl Reference {
    pub fn book(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: None,
            verses: None,
        }
    }

    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            chapter: Some(chapter),
            ..Self::book(book)
        }
    }

    pub fn verse(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            verses: Some((verse, verse)),
            ..Self::chapter(book, chapter)
        }
    }
}

impl FromStr for Reference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReferenceError::Empty);
        }

        // The locator is the last whitespace-separated token, if it starts
        // with a digit. Leading digits belong to the book ("1 John").
        let (book, locator) = match s.rsplit_once(char::is_whitespace) {
            Some((head, tail)) if starts_with_digit(tail) => (head.trim(), Some(tail)),
            None if starts_with_digit(s) => ("", Some(s)),
            _ => (s, None),
        };
        if book.is_empty() {
            return Err(ReferenceError::MissingBook);
        }

        let mut reference = Reference::book(book);
        let Some(locator) = locator else {
            return Ok(reference);
        };

        let (chapter, verses) = match locator.split_once(':') {
            Some((c, v)) => (c, Some(v)),
            None => (locator, None),
        };
        reference.chapter = Some(parse_number(chapter)?);

        if let Some(verses) = verses {
            let (start, end) = match verses.split_once('-') {
                Some((a, b)) => (parse_number(a)?, parse_number(b)?),
                None => {
                    let v = parse_number(verses)?;
                    (v, v)
                }
            };
            if end < start {
                return Err(ReferenceError::InvertedRange { start, end });
            }
            reference.verses = Some((start, end));
        }

        Ok(reference)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.book)?;
        if let Some(chapter) = self.chapter {
            write!(f, " {chapter}")?;
            match self.verses {
                Some((start, end)) if start == end => write!(f, ":{start}")?,
                Some((start, end)) => write!(f, ":{start}-{end}")?,
                None => {}
            }
        }
        Ok(())
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn parse_number(raw: &str) -> Result<u32, ReferenceError> {
    let n: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ReferenceError::InvalidNumber(raw.to_string()))?;
    if n == 0 {
        return Err(ReferenceError::ZeroNumber);
    }
    Ok(n)
}

/// What a [`Reference`] points at in a store.
#[derive(Debug, Clone, PartialEq)]
pub enum Passage<'a> {
    Book(&'a Book),
    Chapter {
        book: &'a Book,
        chapter: &'a Chapter,
    },
    Verses {
        book: &'a Book,
        chapter: &'a Chapter,
        verses: Vec<&'a Verse>,
    },
}

impl ScriptureStore {
    /// Resolve a reference. Any missing part, or a verse range with no
    /// populated verses, is not found.
    pub fn resolve(&self, reference: &Reference) -> Option<Passage<'_>> {
        let book = self.book(&reference.book)?;
        let Some(number) = reference.chapter else {
            return Some(Passage::Book(book));
        };
        let chapter = book.chapter(number)?;
        let Some((start, end)) = reference.verses else {
            return Some(Passage::Chapter { book, chapter });
        };
        let verses: Vec<&Verse> = chapter
            .verses
            .iter()
            .filter(|v| (start..=end).contains(&v.number))
            .collect();
        if verses.is_empty() {
            return None;
        }
        Some(Passage::Verses {
            book,
            chapter,
            verses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Reference, ReferenceError> {
        s.parse()
    }

    #[test]
    fn parses_book_chapter_and_verse_forms() {
        assert_eq!(parse("Genesis").unwrap(), Reference::book("Genesis"));
        assert_eq!(parse("Genesis 1").unwrap(), Reference::chapter("Genesis", 1));
        assert_eq!(parse("John 3:16").unwrap(), Reference::verse("John", 3, 16));
        assert_eq!(
            parse("  Psalms 23:1-4 ").unwrap(),
            Reference {
                book: "Psalms".into(),
                chapter: Some(23),
                verses: Some((1, 4)),
            }
        );
    }

    #[test]
    fn numbered_and_multi_word_books() {
        assert_eq!(parse("1 John 4:8").unwrap(), Reference::verse("1 John", 4, 8));
        assert_eq!(parse("1 John").unwrap(), Reference::book("1 John"));
        assert_eq!(
            parse("Song of Songs 2").unwrap(),
            Reference::chapter("Song of Songs", 2)
        );
    }

    #[test]
    fn rejects_malformed_references() {
        assert_eq!(parse(""), Err(ReferenceError::Empty));
        assert_eq!(parse("   "), Err(ReferenceError::Empty));
        assert_eq!(parse("3:16"), Err(ReferenceError::MissingBook));
        assert_eq!(
            parse("John 3:x"),
            Err(ReferenceError::InvalidNumber("x".into()))
        );
        assert_eq!(
            parse("John 3a"),
            Err(ReferenceError::InvalidNumber("3a".into()))
        );
        assert_eq!(parse("John 0"), Err(ReferenceError::ZeroNumber));
        assert_eq!(
            parse("John 3:16-2"),
            Err(ReferenceError::InvertedRange { start: 16, end: 2 })
        );
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(parse("john   3:16").unwrap().to_string(), "john 3:16");
        assert_eq!(parse("Psalms 23:1-4").unwrap().to_string(), "Psalms 23:1-4");
        assert_eq!(Reference::chapter("Genesis", 1).to_string(), "Genesis 1");
    }

    #[test]
    fn resolves_against_store() {
        let store = ScriptureStore::builtin();

        match store.resolve(&parse("genesis").unwrap()) {
            Some(Passage::Book(book)) => assert_eq!(book.name, "Genesis"),
            other => panic!("expected book, got {other:?}"),
        }

        match store.resolve(&parse("Genesis 1").unwrap()) {
            Some(Passage::Chapter { chapter, .. }) => assert_eq!(chapter.number, 1),
            other => panic!("expected chapter, got {other:?}"),
        }

        match store.resolve(&parse("Genesis 1:1-3").unwrap()) {
            Some(Passage::Verses { verses, .. }) => {
                let numbers: Vec<u32> = verses.iter().map(|v| v.number).collect();
                assert_eq!(numbers, vec![1, 2, 3]);
            }
            other => panic!("expected verses, got {other:?}"),
        }
    }

    #[test]
    fn unresolvable_references_are_not_found() {
        let store = ScriptureStore::builtin();
        assert!(store.resolve(&Reference::book("Nonexistent Book")).is_none());
        assert!(store.resolve(&Reference::chapter("Genesis", 49)).is_none());
        assert!(store.resolve(&Reference::verse("Genesis", 1, 999)).is_none());
    }
}
