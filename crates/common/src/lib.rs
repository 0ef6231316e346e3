//! Shared value types used by the store, tooling, and CLI crates.

mod types;

pub use types::{BookKey, ParseTestamentError, Testament};
