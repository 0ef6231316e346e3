//! Scripture store: an immutable, in-memory Book → Chapter → Verse lookup table.
//!
//! # Invariants
//! - The store is built once and never mutated; readers need no locking.
//! - Every lookup is total: unknown or blank input yields `None` or an empty
//!   slice, never an error or a panic.
//! - Book names match case-insensitively; the first book with a name wins.
//! - `Book::chapters` is metadata. `chapters_data` is not assumed exhaustive.
//!
//! Loading a corpus from a file ([`io::load`]) is the only fallible path.

pub mod io;
pub mod model;
pub mod reference;
pub mod search;
mod seed;
pub mod source;
pub mod store;
pub mod validate;

pub use io::{LoadOptions, StoreError, ValidationMode};
pub use model::{Book, Chapter, Verse};
pub use reference::{Passage, Reference, ReferenceError};
pub use scripture_common::{BookKey, Testament};
pub use search::VerseHit;
pub use source::ScriptureSource;
pub use store::ScriptureStore;
pub use validate::Issue;

pub fn crate_info() -> &'static str {
    "scripture-store v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("store"));
    }
}
