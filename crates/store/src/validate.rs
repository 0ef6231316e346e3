//! On-demand checks of the structural invariants a corpus is expected to hold.
//!
//! Nothing here runs implicitly during lookups. A partially populated book
//! (fewer `chapters_data` entries than its stated `chapters`) is normal and is
//! not reported.

use std::collections::HashSet;

use crate::model::{Book, Chapter};

/// A single invariant violation found in a corpus.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Issue {
    #[error("book #{index} has an empty name")]
    EmptyBookName { index: usize },
    #[error("duplicate book name: {name}")]
    DuplicateBook { name: String },
    #[error("{book}: chapter number 0")]
    ZeroChapterNumber { book: String },
    #[error("{book} {chapter}: verse number 0")]
    ZeroVerseNumber { book: String, chapter: u32 },
    #[error("{book}: duplicate chapter {chapter}")]
    DuplicateChapter { book: String, chapter: u32 },
    #[error("{book} {chapter}: duplicate verse {verse}")]
    DuplicateVerse {
        book: String,
        chapter: u32,
        verse: u32,
    },
    #[error("{book} {chapter}: verse {next} follows verse {previous}")]
    VersesOutOfOrder {
        book: String,
        chapter: u32,
        previous: u32,
        next: u32,
    },
    #[error("{book}: chapter {chapter} exceeds stated chapter count {stated}")]
    ChapterBeyondStatedCount {
        book: String,
        chapter: u32,
        stated: u32,
    },
    #[error("{book} {chapter}: key verse {verse} is not populated")]
    MissingKeyVerse {
        book: String,
        chapter: u32,
        verse: u32,
    },
}

/// Check every book and return all violations in corpus order.
pub fn validate(books: &[Book]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen_names = HashSet::new();

    for (index, book) in books.iter().enumerate() {
        if book.name.trim().is_empty() {
            issues.push(Issue::EmptyBookName { index });
        } else if !seen_names.insert(book.name.to_lowercase()) {
            issues.push(Issue::DuplicateBook {
                name: book.name.clone(),
            });
        }
        check_book(book, &mut issues);
    }

    issues
}

fn check_book(book: &Book, issues: &mut Vec<Issue>) {
    let mut seen = HashSet::new();
    for chapter in &book.chapters_data {
        if chapter.number == 0 {
            issues.push(Issue::ZeroChapterNumber {
                book: book.name.clone(),
            });
        } else if chapter.number > book.chapters {
            issues.push(Issue::ChapterBeyondStatedCount {
                book: book.name.clone(),
                chapter: chapter.number,
                stated: book.chapters,
            });
        }
        if !seen.insert(chapter.number) {
            issues.push(Issue::DuplicateChapter {
                book: book.name.clone(),
                chapter: chapter.number,
            });
        }
        check_chapter(&book.name, chapter, issues);
    }
}

fn check_chapter(book: &str, chapter: &Chapter, issues: &mut Vec<Issue>) {
    let mut seen = HashSet::new();
    let mut previous: Option<u32> = None;

    for verse in &chapter.verses {
        if verse.number == 0 {
            issues.push(Issue::ZeroVerseNumber {
                book: book.to_string(),
                chapter: chapter.number,
            });
        }
        if !seen.insert(verse.number) {
            issues.push(Issue::DuplicateVerse {
                book: book.to_string(),
                chapter: chapter.number,
                verse: verse.number,
            });
        } else if let Some(prev) = previous.filter(|&p| p > verse.number) {
            issues.push(Issue::VersesOutOfOrder {
                book: book.to_string(),
                chapter: chapter.number,
                previous: prev,
                next: verse.number,
            });
        }
        previous = Some(verse.number);
    }

    for &key in &chapter.key_verses {
        if !seen.contains(&key) {
            issues.push(Issue::MissingKeyVerse {
                book: book.to_string(),
                chapter: chapter.number,
                verse: key,
            });
        }
    }
}
