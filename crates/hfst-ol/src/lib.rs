//! Runtime for HFST "optimized-lookup" finite state transducers.
//!
//! This crate loads a precompiled transducer from its binary optimized-lookup
//! representation and answers lookup queries: given an input string, it
//! returns every (output string, weight) analysis the transducer accepts.
//! It is strictly read-only; transducers are neither compiled nor modified.
//!
//! # Architecture
//!
//! - [`cursor`] -- Little-endian byte cursor over the raw file
//! - [`header`] -- Fixed header and optional `HFST\0` preamble parsing
//! - [`alphabet`] -- Symbol table and flag diacritic detection
//! - [`tables`] -- Packed index and transition tables
//! - [`flags`] -- Flag diacritic operations (P, N, R, D, C, U) and state stack
//! - [`tokenizer`] -- Longest-match symbol tokenization
//! - [`lookup`] -- Recursive two-table traversal engine
//! - [`transducer`] -- Loading facade and lookup entry point
//! - [`cache`] -- Per-input memoization wrapper

pub mod alphabet;
pub mod cache;
pub mod cursor;
pub mod flags;
pub mod header;
pub mod lookup;
pub mod tables;
pub mod tokenizer;
pub mod transducer;

pub use cache::CachedTransducer;
pub use lookup::Analysis;
pub use transducer::Transducer;

/// Symbol identifier, an index into the alphabet's key table.
pub type SymbolId = u16;

/// Position in the index or transition table.
pub type TableIndex = u32;

/// Transition and final-state weight.
pub type Weight = f32;

/// Sentinel symbol: unknown input, end-of-tape marker, and the input field
/// of finality rows.
pub const NO_SYMBOL: SymbolId = u16::MAX;

/// Sentinel table position.
pub const NO_TABLE_INDEX: TableIndex = u32::MAX;

/// Targets at or above this value point into the transition table (after
/// subtracting it); smaller targets point into the index table.
pub const TRANSITION_TARGET_TABLE_START: TableIndex = 1 << 31;

/// Maximum traversal recursion depth.
///
/// The format permits epsilon cycles, so unbounded traversal may not
/// terminate; branches deeper than this are abandoned. Depth is otherwise
/// bounded by the input length plus the longest epsilon chain.
pub const MAX_RECURSION_DEPTH: usize = 1024;

/// Error type for transducer decoding and loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transducer file too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("invalid UTF-8 in alphabet symbol {index}")]
    InvalidSymbol { index: SymbolId },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
