use std::collections::HashMap;

use scripture_common::{BookKey, Testament};
use sha2::{Digest, Sha256};

use crate::model::{Book, Chapter, Verse};
use crate::source::ScriptureSource;
use crate::validate::{self, Issue};

/// Immutable in-memory scripture lookup table.
///
/// Books are kept in insertion order. A name index maps each case-folded book
/// name to the first book carrying it, so duplicate names resolve the same way
/// a linear scan would. Chapter and verse lookups scan their (small) vectors.
///
/// The store is never mutated after construction; share it with `Arc` when
/// several owners need it.
#[derive(Debug, Clone, Default)]
pub struct ScriptureStore {
    books: Vec<Book>,
    by_name: HashMap<String, usize>,
}

impl ScriptureStore {
    /// Build a store over `books`. Never fails; duplicates are left for
    /// [`validate`](Self::validate) to report.
    pub fn new(books: Vec<Book>) -> Self {
        let mut by_name = HashMap::with_capacity(books.len());
        for (idx, book) in books.iter().enumerate() {
            if let Some(key) = BookKey::parse(&book.name) {
                by_name.entry(key.as_str().to_string()).or_insert(idx);
            }
        }
        tracing::debug!(
            books = books.len(),
            indexed = by_name.len(),
            "scripture store built"
        );
        Self { books, by_name }
    }

    /// Store over the built-in sample corpus.
    pub fn builtin() -> Self {
        Self::new(crate::seed::books())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books belonging to one testament, in corpus order.
    pub fn books_in(&self, testament: Testament) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(move |b| b.testament == testament)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for book in &self.books {
            if !out.contains(&book.category.as_str()) {
                out.push(&book.category);
            }
        }
        out
    }

    /// Populated key verses of a chapter. Empty when the chapter is absent.
    pub fn key_verses(&self, book: &str, chapter: u32) -> Vec<&Verse> {
        self.chapter(book, chapter)
            .map(Chapter::key_verse_entries)
            .unwrap_or_default()
    }

    /// Check the corpus invariants. See [`validate::validate`].
    pub fn validate(&self) -> Vec<Issue> {
        validate::validate(&self.books)
    }

    /// SHA-256 (hex) of the canonical JSON form of the corpus.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(&self.books)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Give back the owned books.
    pub fn into_books(self) -> Vec<Book> {
        self.books
    }
}

impl ScriptureSource for ScriptureStore {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn book(&self, name: &str) -> Option<&Book> {
        let key = BookKey::parse(name)?;
        self.by_name.get(key.as_str()).map(|&idx| &self.books[idx])
    }
}

impl From<Vec<Book>> for ScriptureStore {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}
