// Packed index and transition tables.
//
// Accessors are total: positions past the end read as the sentinels, so the
// engine's scan loops stop at the table boundary without bounds errors.

use crate::cursor::Cursor;
use crate::{Error, NO_SYMBOL, NO_TABLE_INDEX, SymbolId, TableIndex, Weight};

/// The transition index table: a perfect-hash-like dispatch structure.
///
/// The arc labelled `s` out of a state whose block begins at `i` is stored
/// at slot `i + s`. An entry is final iff its input is [`NO_SYMBOL`] and its
/// target is not [`NO_TABLE_INDEX`]; the final weight is the target field's
/// bit pattern reinterpreted as an f32.
pub struct IndexTable {
    inputs: Vec<SymbolId>,
    targets: Vec<TableIndex>,
}

impl IndexTable {
    /// Decode `len` records of 6 bytes: `(u16 input, u32 target)`.
    pub fn parse(cur: &mut Cursor, len: u32) -> Result<IndexTable, Error> {
        let mut inputs = Vec::with_capacity(len as usize);
        let mut targets = Vec::with_capacity(len as usize);
        for _ in 0..len {
            inputs.push(cur.u16_le()?);
            targets.push(cur.u32_le()?);
        }
        Ok(IndexTable { inputs, targets })
    }

    pub fn input(&self, i: TableIndex) -> SymbolId {
        self.inputs.get(i as usize).copied().unwrap_or(NO_SYMBOL)
    }

    pub fn target(&self, i: TableIndex) -> TableIndex {
        self.targets
            .get(i as usize)
            .copied()
            .unwrap_or(NO_TABLE_INDEX)
    }

    pub fn is_final(&self, i: TableIndex) -> bool {
        self.input(i) == NO_SYMBOL && self.target(i) != NO_TABLE_INDEX
    }

    /// Final weight of entry `i`: the target bits as an f32. Meaningful only
    /// for weighted transducers at entries satisfying [`is_final`](Self::is_final).
    pub fn final_weight(&self, i: TableIndex) -> Weight {
        f32::from_bits(self.target(i))
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// The transition table: runs of arcs, each run ending at a finality row.
///
/// A row is final iff its input and output are [`NO_SYMBOL`] and its target
/// is exactly 1; the final weight is the row's weight field. Rows are 12
/// bytes when the transducer is weighted, 8 bytes otherwise.
pub struct TransitionTable {
    weighted: bool,
    inputs: Vec<SymbolId>,
    outputs: Vec<SymbolId>,
    targets: Vec<TableIndex>,
    weights: Vec<Weight>,
}

impl TransitionTable {
    /// Decode `len` records of `(u16 input, u16 output, u32 target[, f32 weight])`.
    pub fn parse(cur: &mut Cursor, len: u32, weighted: bool) -> Result<TransitionTable, Error> {
        let mut inputs = Vec::with_capacity(len as usize);
        let mut outputs = Vec::with_capacity(len as usize);
        let mut targets = Vec::with_capacity(len as usize);
        let mut weights = Vec::with_capacity(if weighted { len as usize } else { 0 });
        for _ in 0..len {
            inputs.push(cur.u16_le()?);
            outputs.push(cur.u16_le()?);
            targets.push(cur.u32_le()?);
            if weighted {
                weights.push(cur.f32_le()?);
            }
        }
        Ok(TransitionTable {
            weighted,
            inputs,
            outputs,
            targets,
            weights,
        })
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn input(&self, i: TableIndex) -> SymbolId {
        self.inputs.get(i as usize).copied().unwrap_or(NO_SYMBOL)
    }

    pub fn output(&self, i: TableIndex) -> SymbolId {
        self.outputs.get(i as usize).copied().unwrap_or(NO_SYMBOL)
    }

    pub fn target(&self, i: TableIndex) -> TableIndex {
        self.targets
            .get(i as usize)
            .copied()
            .unwrap_or(NO_TABLE_INDEX)
    }

    /// Weight of row `i`; `None` for unweighted tables and past the end.
    pub fn weight(&self, i: TableIndex) -> Option<Weight> {
        self.weights.get(i as usize).copied()
    }

    pub fn is_final(&self, i: TableIndex) -> bool {
        self.input(i) == NO_SYMBOL && self.output(i) == NO_SYMBOL && self.target(i) == 1
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
