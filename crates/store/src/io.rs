//! Loading a corpus from disk and exporting it again.
//!
//! A corpus file holds a top-level array of books. The format follows the
//! file extension:
//! ```text
//! *.json        - serde_json, pretty-printed on save
//! *.yaml, *.yml - serde_yaml
//! ```
//! This is the only fallible path in the crate; lookups never fail.

use std::path::{Path, PathBuf};

use crate::model::Book;
use crate::source::ScriptureSource;
use crate::store::ScriptureStore;
use crate::validate::Issue;

/// Errors from loading or saving a corpus file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported corpus format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("corpus failed validation with {} issue(s)", issues.len())]
    Invalid { issues: Vec<Issue> },
}

/// How loading treats invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Skip validation.
    Off,
    /// Log every issue at warn level and keep the corpus.
    #[default]
    Warn,
    /// Reject the corpus if any issue is found.
    Strict,
}

/// Options for [`load`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub validation: ValidationMode,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Result<Format, StoreError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(Format::Json),
        Some("yaml" | "yml") => Ok(Format::Yaml),
        _ => Err(StoreError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load a corpus file into a store.
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<ScriptureStore, StoreError> {
    let path = path.as_ref();
    let _span = tracing::info_span!("load_corpus", path = %path.display()).entered();

    let format = format_of(path)?;
    let file = std::fs::File::open(path)?;
    let books: Vec<Book> = match format {
        Format::Json => serde_json::from_reader(file)?,
        Format::Yaml => serde_yaml::from_reader(file)?,
    };

    check(&books, options.validation)?;
    tracing::info!(books = books.len(), "corpus loaded");
    Ok(ScriptureStore::new(books))
}

/// Write the store's books to `path` in the format named by its extension.
pub fn save(store: &ScriptureStore, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    let format = format_of(path)?;
    let file = std::fs::File::create(path)?;
    match format {
        Format::Json => serde_json::to_writer_pretty(file, store.books())?,
        Format::Yaml => serde_yaml::to_writer(file, store.books())?,
    }
    tracing::debug!(path = %path.display(), books = store.len(), "corpus saved");
    Ok(())
}

fn check(books: &[Book], mode: ValidationMode) -> Result<(), StoreError> {
    if mode == ValidationMode::Off {
        return Ok(());
    }
    let issues = crate::validate::validate(books);
    if issues.is_empty() {
        return Ok(());
    }
    match mode {
        ValidationMode::Strict => Err(StoreError::Invalid { issues }),
        _ => {
            for issue in &issues {
                tracing::warn!(%issue, "corpus issue");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chapter;
    use scripture_common::Testament;

    fn broken_books() -> Vec<Book> {
        vec![
            Book::new("Genesis", Testament::Old, "Law", 50)
                .with_chapter(Chapter::new(1, "Creation").with_key_verses([31])),
            Book::new("genesis", Testament::Old, "Law", 50),
        ]
    }

    #[test]
    fn json_round_trip_preserves_fingerprint() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("corpus.json");
        let store = ScriptureStore::builtin();
        save(&store, &path).unwrap();

        let loaded = load(&path, &LoadOptions::strict()).unwrap();
        assert_eq!(loaded.len(), store.len());
        assert_eq!(loaded.fingerprint().unwrap(), store.fingerprint().unwrap());
        assert_eq!(
            loaded.verse("Genesis", 1, 1),
            store.verse("Genesis", 1, 1)
        );
    }

    #[test]
    fn yaml_round_trip_preserves_fingerprint() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("corpus.YML");
        let store = ScriptureStore::builtin();
        save(&store, &path).unwrap();

        let loaded = load(&path, &LoadOptions::default()).unwrap();
        assert_eq!(loaded.fingerprint().unwrap(), store.fingerprint().unwrap());
    }

    #[test]
    fn loads_hand_written_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ruth.json");
        std::fs::write(
            &path,
            r#"[{
                "name": "Ruth",
                "testament": "Old",
                "category": "History",
                "chapters": 4,
                "summary": "A story of loyalty.",
                "author": "Unknown",
                "dateWritten": "c. 1000 BC",
                "chaptersData": [{
                    "number": 1,
                    "summary": "Naomi and Ruth",
                    "themes": ["Loyalty"],
                    "keyVerses": [16],
                    "verses": [{
                        "number": 16,
                        "text": "Where you go I will go.",
                        "translation": "Where you go I will go."
                    }]
                }]
            }]"#,
        )
        .unwrap();

        let store = load(&path, &LoadOptions::strict()).unwrap();
        assert_eq!(store.book("RUTH").unwrap().date_written, "c. 1000 BC");
        assert_eq!(store.verse("ruth", 1, 16).unwrap().text, "Where you go I will go.");
        assert!(store.book("ruth").unwrap().is_partial());
    }

    #[test]
    fn strict_mode_rejects_invalid_corpus() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        save(&ScriptureStore::new(broken_books()), &path).unwrap();

        match load(&path, &LoadOptions::strict()) {
            Err(StoreError::Invalid { issues }) => assert_eq!(issues.len(), 2),
            Err(e) => panic!("expected Invalid, got: {e}"),
            Ok(_) => panic!("expected error, got Ok"),
        }
    }

    #[test]
    fn warn_and_off_modes_keep_invalid_corpus() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        save(&ScriptureStore::new(broken_books()), &path).unwrap();

        let warned = load(&path, &LoadOptions::default()).unwrap();
        assert_eq!(warned.len(), 2);
        let off = load(
            &path,
            &LoadOptions {
                validation: ValidationMode::Off,
            },
        )
        .unwrap();
        assert_eq!(off.book("GENESIS").unwrap().chapters_data.len(), 1);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("corpus.toml");
        assert!(matches!(
            save(&ScriptureStore::builtin(), &path),
            Err(StoreError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            load(&path, &LoadOptions::default()),
            Err(StoreError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = load(tmp.path().join("absent.json"), &LoadOptions::default());
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{ not a corpus").unwrap();
        assert!(matches!(
            load(&path, &LoadOptions::default()),
            Err(StoreError::Json(_))
        ));
    }
}
