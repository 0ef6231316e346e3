use scripture_common::Testament;
use scripture_store::{Book, ScriptureSource};

/// Corpus inspector for developer tooling.
///
/// Provides read-only queries against any scripture source for debugging
/// and reporting how much of each book is actually populated.
pub struct CorpusInspector;

impl CorpusInspector {
    /// Produce a summary of the whole corpus.
    pub fn summary<S: ScriptureSource + ?Sized>(source: &S) -> CorpusSummary {
        let books = source.books();
        let summary = CorpusSummary {
            books: books.len(),
            old_testament: books.iter().filter(|b| b.testament == Testament::Old).count(),
            new_testament: books.iter().filter(|b| b.testament == Testament::New).count(),
            populated_chapters: books.iter().map(|b| b.chapters_data.len()).sum(),
            stated_chapters: books.iter().map(|b| u64::from(b.chapters)).sum(),
            verses: books.iter().map(Book::verse_count).sum(),
        };
        tracing::debug!(books = summary.books, verses = summary.verses, "corpus summarized");
        summary
    }

    /// Per-book populated vs stated chapter counts, in corpus order.
    pub fn coverage<S: ScriptureSource + ?Sized>(source: &S) -> Vec<BookCoverage> {
        source.books().iter().map(BookCoverage::of).collect()
    }

    /// Details for a single book, looked up like any other book access.
    pub fn inspect_book<S: ScriptureSource + ?Sized>(source: &S, name: &str) -> Option<BookInfo> {
        source.book(name).map(|book| BookInfo {
            name: book.name.clone(),
            testament: book.testament,
            category: book.category.clone(),
            author: book.author.clone(),
            date_written: book.date_written.clone(),
            stated_chapters: book.chapters,
            populated: book.chapters_data.iter().map(|c| c.number).collect(),
        })
    }
}

/// Summary of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSummary {
    pub books: usize,
    pub old_testament: usize,
    pub new_testament: usize,
    pub populated_chapters: usize,
    pub stated_chapters: u64,
    pub verses: usize,
}

impl std::fmt::Display for CorpusSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Corpus: books={} (old={} new={}) chapters={}/{} verses={}",
            self.books,
            self.old_testament,
            self.new_testament,
            self.populated_chapters,
            self.stated_chapters,
            self.verses
        )
    }
}

/// How much of one book is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCoverage {
    pub name: String,
    pub testament: Testament,
    pub populated: usize,
    pub stated: u32,
    pub verses: usize,
}

impl BookCoverage {
    fn of(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            testament: book.testament,
            populated: book.chapters_data.len(),
            stated: book.chapters,
            verses: book.verse_count(),
        }
    }

    /// Populated share of the stated chapters, in percent.
    pub fn percent(&self) -> f64 {
        if self.stated == 0 {
            return 0.0;
        }
        self.populated as f64 * 100.0 / f64::from(self.stated)
    }
}

impl std::fmt::Display for BookCoverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<16} {:<3} {:>3}/{:<3} chapters ({:>5.1}%) {:>3} verses",
            self.name,
            self.testament,
            self.populated,
            self.stated,
            self.percent(),
            self.verses
        )
    }
}

/// Detailed info about a single book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInfo {
    pub name: String,
    pub testament: Testament,
    pub category: String,
    pub author: String,
    pub date_written: String,
    pub stated_chapters: u32,
    pub populated: Vec<u32>,
}

impl std::fmt::Display for BookInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let populated: Vec<String> = self.populated.iter().map(u32::to_string).collect();
        write!(
            f,
            "{} [{} Testament, {}] by {} ({}) chapters={} populated=[{}]",
            self.name,
            self.testament,
            self.category,
            self.author,
            self.date_written,
            self.stated_chapters,
            populated.join(", ")
        )
    }
}
