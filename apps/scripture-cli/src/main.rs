use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use scripture_common::Testament;
use scripture_store::{
    Book, Chapter, LoadOptions, Passage, Reference, ScriptureSource, ScriptureStore,
    ValidationMode, Verse,
};
use scripture_tools::CorpusInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scripture-cli", about = "CLI tool for scripture lookups")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Corpus file (.json, .yaml, .yml); the built-in corpus is used when unset
    #[arg(short, long, env = "SCRIPTURE_DATA", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and a corpus summary
    Info,
    /// List books, optionally for one testament
    Books {
        /// old, new, ot or nt
        #[arg(short, long)]
        testament: Option<Testament>,
    },
    /// Show a book and its populated chapters
    Book { name: String },
    /// Show a chapter and its verses
    Chapter { book: String, chapter: u32 },
    /// Show a single verse
    Verse {
        book: String,
        chapter: u32,
        verse: u32,
    },
    /// Resolve a reference such as "John 3:16" or "Psalms 23:1-4"
    Lookup { reference: String },
    /// Search verse text (case-insensitive)
    Search { query: String },
    /// List chapters tagged with a theme
    Theme { theme: String },
    /// Check corpus invariants
    Validate {
        /// Exit with an error if any issue is found
        #[arg(long)]
        strict: bool,
    },
    /// Write the corpus to a .json or .yaml file
    Export { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let validation = match cli.command {
        // Validate reports issues itself instead of logging them on load.
        Commands::Validate { .. } => ValidationMode::Off,
        _ => ValidationMode::Warn,
    };
    let store = open_store(cli.data.as_deref(), validation)?;

    match cli.command {
        Commands::Info => {
            println!("scripture-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("store: {}", scripture_store::crate_info());
            println!("tools: {}", scripture_tools::crate_info());
            println!("{}", CorpusInspector::summary(&store));
            println!("fingerprint: {}", store.fingerprint()?);
        }
        Commands::Books { testament } => {
            for coverage in CorpusInspector::coverage(&store)
                .into_iter()
                .filter(|c| testament.is_none_or(|t| c.testament == t))
            {
                println!("{coverage}");
            }
        }
        Commands::Book { name } => match store.book(&name) {
            Some(book) => print_book(book),
            None => not_available(&name),
        },
        Commands::Chapter { book, chapter } => match store.chapter(&book, chapter) {
            Some(ch) => print_chapter(ch),
            None => not_available(&format!("{book} {chapter}")),
        },
        Commands::Verse {
            book,
            chapter,
            verse,
        } => match store.verse(&book, chapter, verse) {
            Some(v) => println!("{}", format_verse(v)),
            None => not_available(&format!("{book} {chapter}:{verse}")),
        },
        Commands::Lookup { reference } => {
            let parsed: Reference = reference
                .parse()
                .with_context(|| format!("invalid reference {reference:?}"))?;
            match store.resolve(&parsed) {
                Some(Passage::Book(book)) => print_book(book),
                Some(Passage::Chapter { chapter, .. }) => print_chapter(chapter),
                Some(Passage::Verses { verses, .. }) => {
                    for v in verses {
                        println!("{}", format_verse(v));
                    }
                }
                None => not_available(&parsed.to_string()),
            }
        }
        Commands::Search { query } => {
            let hits = store.search_text(&query);
            for hit in &hits {
                println!(
                    "{} {}:{}  {}",
                    hit.book.name, hit.chapter.number, hit.verse.number, hit.verse.text
                );
            }
            println!("{} match(es)", hits.len());
        }
        Commands::Theme { theme } => {
            let found = store.chapters_with_theme(&theme);
            if found.is_empty() {
                not_available(&theme);
            }
            for (book, chapter) in found {
                println!("{} {}: {}", book.name, chapter.number, chapter.summary);
            }
        }
        Commands::Validate { strict } => {
            let issues = store.validate();
            for issue in &issues {
                println!("{issue}");
            }
            if issues.is_empty() {
                println!("OK: {} books, no issues", store.len());
            } else if strict {
                anyhow::bail!("corpus has {} issue(s)", issues.len());
            } else {
                println!("{} issue(s)", issues.len());
            }
        }
        Commands::Export { path } => {
            scripture_store::io::save(&store, &path)
                .with_context(|| format!("exporting corpus to {}", path.display()))?;
            println!(
                "Exported {} books to {} (fingerprint {})",
                store.len(),
                path.display(),
                store.fingerprint()?
            );
        }
    }

    Ok(())
}

fn open_store(data: Option<&Path>, validation: ValidationMode) -> anyhow::Result<ScriptureStore> {
    match data {
        Some(path) => {
            tracing::info!(path = %path.display(), ?validation, "using corpus file");
            scripture_store::io::load(path, &LoadOptions { validation })
                .with_context(|| format!("loading corpus from {}", path.display()))
        }
        None => {
            tracing::info!("using built-in corpus");
            Ok(ScriptureStore::builtin())
        }
    }
}

fn print_book(book: &Book) {
    println!(
        "{} ({} Testament, {}), {} chapters",
        book.name, book.testament, book.category, book.chapters
    );
    if !book.author.is_empty() {
        println!("Author: {}  Written: {}", book.author, book.date_written);
    }
    if !book.summary.is_empty() {
        println!("{}", book.summary);
    }
    for chapter in &book.chapters_data {
        println!(
            "  {:>3}  {} ({} verses)",
            chapter.number,
            chapter.summary,
            chapter.verses.len()
        );
    }
}

fn print_chapter(chapter: &Chapter) {
    println!("Chapter {}: {}", chapter.number, chapter.summary);
    if !chapter.themes.is_empty() {
        println!("Themes: {}", chapter.themes.join(", "));
    }
    for verse in &chapter.verses {
        let marker = if chapter.key_verses.contains(&verse.number) {
            "*"
        } else {
            " "
        };
        println!("{marker}{}", format_verse(verse));
    }
}

fn format_verse(verse: &Verse) -> String {
    format!("{:>3}  {}", verse.number, verse.text)
}

fn not_available(what: &str) {
    println!("{what}: not available");
}
