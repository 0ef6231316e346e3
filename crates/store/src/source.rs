use scripture_common::BookKey;

use crate::model::{Book, Chapter, Verse};

/// Read-only access to a scripture corpus.
///
/// Every accessor is total: an unknown book, chapter or verse, or a blank
/// book name, yields `None` or an empty slice. Implementers only have to
/// provide [`books`](ScriptureSource::books); the remaining accessors scan it.
pub trait ScriptureSource {
    /// All books in corpus order.
    fn books(&self) -> &[Book];

    /// Case-insensitive exact match on the book name. First match wins.
    fn book(&self, name: &str) -> Option<&Book> {
        let key = BookKey::parse(name)?;
        self.books().iter().find(|b| key.matches(&b.name))
    }

    fn chapters(&self, book: &str) -> &[Chapter] {
        self.book(book)
            .map(|b| b.chapters_data.as_slice())
            .unwrap_or(&[])
    }

    fn chapter(&self, book: &str, chapter: u32) -> Option<&Chapter> {
        self.book(book)?.chapter(chapter)
    }

    fn verses(&self, book: &str, chapter: u32) -> &[Verse] {
        self.chapter(book, chapter)
            .map(|c| c.verses.as_slice())
            .unwrap_or(&[])
    }

    fn verse(&self, book: &str, chapter: u32, verse: u32) -> Option<&Verse> {
        self.chapter(book, chapter)?.verse(verse)
    }
}

impl ScriptureSource for [Book] {
    fn books(&self) -> &[Book] {
        self
    }
}

impl ScriptureSource for Vec<Book> {
    fn books(&self) -> &[Book] {
        self
    }
}
