// Loading facade and the lookup entry point.

use std::path::Path;

use log::debug;

use crate::alphabet::Alphabet;
use crate::cursor::Cursor;
use crate::header::{self, Header};
use crate::lookup::{self, Analysis};
use crate::tables::{IndexTable, TransitionTable};
use crate::tokenizer::SymbolTrie;
use crate::{Error, NO_SYMBOL};

/// A loaded optimized-lookup transducer.
///
/// Immutable after construction; safe to share read-only across threads.
/// Each [`lookup`](Self::lookup) call owns its own traversal state.
pub struct Transducer {
    header: Header,
    alphabet: Alphabet,
    index_table: IndexTable,
    transition_table: TransitionTable,
    trie: SymbolTrie,
}

impl std::fmt::Debug for Transducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transducer")
            .field("symbol_count", &self.alphabet.len())
            .field("index_table_len", &self.index_table.len())
            .field("transition_table_len", &self.transition_table.len())
            .field("weighted", &self.header.weighted)
            .finish()
    }
}

impl Transducer {
    /// Read and decode a transducer file. The file is consumed in one read;
    /// no handle is retained.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Transducer, Error> {
        let data = std::fs::read(path)?;
        Transducer::from_bytes(&data)
    }

    /// Decode a transducer from its serialized bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Transducer, Error> {
        let mut cur = Cursor::new(data);
        let header = header::parse(&mut cur)?;
        let alphabet = Alphabet::parse(&mut cur, header.symbol_count)?;
        let index_table = IndexTable::parse(&mut cur, header.index_table_len)?;
        let transition_table =
            TransitionTable::parse(&mut cur, header.transition_table_len, header.weighted)?;
        let trie = SymbolTrie::new(alphabet.key_table(), header.input_symbol_count);

        debug!(
            "loaded transducer: {} symbols, {} index entries, {} transitions, weighted={}",
            alphabet.len(),
            index_table.len(),
            transition_table.len(),
            header.weighted,
        );

        Ok(Transducer {
            header,
            alphabet,
            index_table,
            transition_table,
            trie,
        })
    }

    /// All analyses the transducer accepts for `input`, in traversal order.
    ///
    /// Returns an empty vector when the input cannot be tokenized at its
    /// first position or no accepting path exists. Never fails on a
    /// well-formed transducer.
    pub fn lookup(&self, input: &str) -> Vec<Analysis> {
        let tokens = self.trie.tokenize(input);
        if !input.is_empty() && tokens[0] == NO_SYMBOL {
            return Vec::new();
        }
        lookup::run(self, tokens)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The printable strings of the alphabet, indexed by symbol id.
    pub fn key_table(&self) -> &[String] {
        self.alphabet.key_table()
    }

    pub fn is_weighted(&self) -> bool {
        self.header.weighted
    }

    pub(crate) fn index_table(&self) -> &IndexTable {
        &self.index_table
    }

    pub(crate) fn transition_table(&self) -> &TransitionTable {
        &self.transition_table
    }
}
