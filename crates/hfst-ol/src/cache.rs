// Per-input memoization of lookup results.

use hashbrown::HashMap;

use crate::lookup::Analysis;
use crate::transducer::Transducer;

/// A transducer paired with a memo of previous lookups.
///
/// Lookup is pure, so cached result lists are returned verbatim, preserving
/// traversal order and bitwise weights. The memo grows without bound; it is
/// meant for workloads that re-query a bounded vocabulary, such as the
/// line-oriented front-end.
pub struct CachedTransducer {
    transducer: Transducer,
    memo: HashMap<String, Vec<Analysis>>,
}

impl CachedTransducer {
    pub fn new(transducer: Transducer) -> CachedTransducer {
        CachedTransducer {
            transducer,
            memo: HashMap::new(),
        }
    }

    /// Like [`Transducer::lookup`], consulting and filling the memo.
    pub fn lookup(&mut self, input: &str) -> &[Analysis] {
        if !self.memo.contains_key(input) {
            let analyses = self.transducer.lookup(input);
            self.memo.insert(input.to_string(), analyses);
        }
        self.memo.get(input).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn transducer(&self) -> &Transducer {
        &self.transducer
    }

    /// Number of memoized inputs.
    pub fn cached_queries(&self) -> usize {
        self.memo.len()
    }

    /// Drop all memoized results, keeping the transducer.
    pub fn clear(&mut self) {
        self.memo.clear();
    }
}
