use crate::model::{Book, Chapter, Verse};
use crate::source::ScriptureSource;
use crate::store::ScriptureStore;

/// A verse matched by [`ScriptureStore::search_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct VerseHit<'a> {
    pub book: &'a Book,
    pub chapter: &'a Chapter,
    pub verse: &'a Verse,
}

impl ScriptureStore {
    /// Case-insensitive substring search over verse text, in corpus order.
    /// A blank query matches nothing.
    pub fn search_text(&self, query: &str) -> Vec<VerseHit<'_>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let _span = tracing::debug_span!("search_text", query = %needle).entered();

        let mut hits = Vec::new();
        for book in self.books() {
            for chapter in &book.chapters_data {
                for verse in &chapter.verses {
                    if verse.text.to_lowercase().contains(&needle) {
                        hits.push(VerseHit {
                            book,
                            chapter,
                            verse,
                        });
                    }
                }
            }
        }
        tracing::debug!(hits = hits.len(), "search finished");
        hits
    }

    /// Chapters tagged with `theme` (case-insensitive exact match).
    pub fn chapters_with_theme(&self, theme: &str) -> Vec<(&Book, &Chapter)> {
        self.books()
            .iter()
            .flat_map(|book| {
                book.chapters_data
                    .iter()
                    .filter(move |c| c.has_theme(theme))
                    .map(move |c| (book, c))
            })
            .collect()
    }
}
