use scripture_common::Testament;
use serde::{Deserialize, Serialize};

/// A numbered unit of scripture text.
///
/// `translation` is carried alongside `text` as-is; the two are not assumed to
/// differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
    pub translation: String,
}

impl Verse {
    /// Verse whose translation is the same as its text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            number,
            translation: text.clone(),
            text,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }
}

/// A numbered subdivision of a book. `verses` may be sparse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub number: u32,
    pub verses: Vec<Verse>,
    pub summary: String,
    #[serde(default)]
    pub themes: Vec<String>,
    /// Verse numbers expected to appear in `verses`; not checked here.
    #[serde(default)]
    pub key_verses: Vec<u32>,
}

impl Chapter {
    pub fn new(number: u32, summary: impl Into<String>) -> Self {
        Self {
            number,
            verses: Vec::new(),
            summary: summary.into(),
            themes: Vec::new(),
            key_verses: Vec::new(),
        }
    }

    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes.extend(themes.into_iter().map(Into::into));
        self
    }

    pub fn with_key_verses(mut self, key_verses: impl IntoIterator<Item = u32>) -> Self {
        self.key_verses.extend(key_verses);
        self
    }

    /// Append a verse whose translation mirrors its text.
    pub fn with_verse(mut self, number: u32, text: impl Into<String>) -> Self {
        self.verses.push(Verse::new(number, text));
        self
    }

    /// Find a verse by number (linear scan).
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.number == number)
    }

    /// Key verses that are actually present, in `key_verses` order.
    pub fn key_verse_entries(&self) -> Vec<&Verse> {
        self.key_verses
            .iter()
            .filter_map(|&n| self.verse(n))
            .collect()
    }

    pub fn has_theme(&self, theme: &str) -> bool {
        let wanted = theme.trim().to_lowercase();
        !wanted.is_empty() && self.themes.iter().any(|t| t.to_lowercase() == wanted)
    }
}

/// A named scripture volume.
///
/// `chapters` is the stated chapter count of the whole book. `chapters_data`
/// holds only the chapters that are populated and is usually shorter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub name: String,
    pub testament: Testament,
    pub category: String,
    pub chapters: u32,
    pub summary: String,
    pub author: String,
    pub date_written: String,
    #[serde(default)]
    pub chapters_data: Vec<Chapter>,
}

impl Book {
    pub fn new(
        name: impl Into<String>,
        testament: Testament,
        category: impl Into<String>,
        chapters: u32,
    ) -> Self {
        Self {
            name: name.into(),
            testament,
            category: category.into(),
            chapters,
            summary: String::new(),
            author: String::new(),
            date_written: String::new(),
            chapters_data: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_date_written(mut self, date_written: impl Into<String>) -> Self {
        self.date_written = date_written.into();
        self
    }

    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters_data.push(chapter);
        self
    }

    /// Find a populated chapter by number (linear scan).
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters_data.iter().find(|c| c.number == number)
    }

    /// Whether fewer chapters are populated than the book states.
    pub fn is_partial(&self) -> bool {
        (self.chapters_data.len() as u64) < u64::from(self.chapters)
    }

    /// Total number of populated verses across all chapters.
    pub fn verse_count(&self) -> usize {
        self.chapters_data.iter().map(|c| c.verses.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chapter() -> Chapter {
        Chapter::new(3, "New birth")
            .with_themes(["Salvation", "Love"])
            .with_key_verses([16, 40])
            .with_verse(3, "Very truly I tell you...")
            .with_verse(16, "For God so loved the world...")
    }

    #[test]
    fn verse_translation_mirrors_text() {
        let v = Verse::new(1, "text");
        assert_eq!(v.text, v.translation);
        let v = v.with_translation("other");
        assert_eq!(v.translation, "other");
        assert_eq!(v.text, "text");
    }

    #[test]
    fn chapter_verse_lookup_is_sparse() {
        let ch = sample_chapter();
        assert!(ch.verse(3).is_some());
        assert!(ch.verse(4).is_none());
        assert!(ch.verse(0).is_none());
    }

    #[test]
    fn key_verse_entries_skip_missing() {
        let ch = sample_chapter();
        let keys = ch.key_verse_entries();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].number, 16);
    }

    #[test]
    fn theme_match_ignores_case() {
        let ch = sample_chapter();
        assert!(ch.has_theme("salvation"));
        assert!(ch.has_theme(" LOVE "));
        assert!(!ch.has_theme(""));
        assert!(!ch.has_theme("Law"));
    }

    #[test]
    fn book_partial_when_fewer_chapters_populated() {
        let book = Book::new("John", Testament::New, "Gospel", 21).with_chapter(sample_chapter());
        assert!(book.is_partial());
        assert_eq!(book.verse_count(), 2);
        assert!(book.chapter(3).is_some());
        assert!(book.chapter(1).is_none());

        let whole = Book::new("Obadiah", Testament::Old, "Minor Prophets", 1)
            .with_chapter(Chapter::new(1, "Edom"));
        assert!(!whole.is_partial());
    }

    #[test]
    fn serialized_field_names_are_camel_case() {
        let book = Book::new("John", Testament::New, "Gospel", 21)
            .with_date_written("c. 90 AD")
            .with_chapter(sample_chapter());
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("chaptersData").is_some());
        assert!(json.get("dateWritten").is_some());
        assert_eq!(json["testament"], "New");
        assert!(json["chaptersData"][0].get("keyVerses").is_some());
    }
}
