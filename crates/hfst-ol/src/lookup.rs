// The recursive two-table traversal engine.
//
// Targets at or above TRANSITION_TARGET_TABLE_START point into the
// transition table, the rest into the index table. From a node the engine
// first walks every epsilon and admissible flag arc, then consumes one input
// symbol through the index dispatch slot or the contiguous transition run,
// undoing output, weight and flag effects as each branch unwinds.

use crate::flags::FlagStack;
use crate::transducer::Transducer;
use crate::{
    MAX_RECURSION_DEPTH, NO_SYMBOL, SymbolId, TableIndex, TRANSITION_TARGET_TABLE_START, Weight,
};

/// One accepted analysis: the output tape and the path weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    symbols: Vec<String>,
    weight: Weight,
}

impl Analysis {
    /// The output tape, one printable string per emitted symbol. Epsilon and
    /// flag diacritic symbols appear as empty strings.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Cumulative path weight, or 1.0 on an unweighted transducer.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The output tape concatenated.
    pub fn text(&self) -> String {
        self.symbols.concat()
    }
}

fn pivot(i: TableIndex) -> TableIndex {
    if i >= TRANSITION_TARGET_TABLE_START {
        i - TRANSITION_TARGET_TABLE_START
    } else {
        i
    }
}

/// Per-query traversal state over a borrowed transducer.
pub(crate) struct LookupState<'a> {
    tr: &'a Transducer,
    input: Vec<SymbolId>,
    input_pos: usize,
    output: Vec<SymbolId>,
    output_pos: usize,
    weight: Weight,
    flags: FlagStack,
    depth: usize,
    results: Vec<Analysis>,
}

/// Run a full lookup over tokenized input.
///
/// `input` must end with the [`NO_SYMBOL`] sentinel. The caller is expected
/// to have rejected inputs whose first real token is unknown.
pub(crate) fn run(tr: &Transducer, input: Vec<SymbolId>) -> Vec<Analysis> {
    debug_assert_eq!(input.last(), Some(&NO_SYMBOL));
    let mut state = LookupState {
        tr,
        input,
        input_pos: 0,
        output: Vec::new(),
        output_pos: 0,
        weight: 0.0,
        flags: FlagStack::new(tr.alphabet().feature_count()),
        depth: 0,
        results: Vec::new(),
    };
    state.get_analyses(0);

    debug_assert_eq!(state.flags.depth(), 1);
    debug_assert_eq!(state.input_pos, 0);
    debug_assert_eq!(state.output_pos, 0);

    state.results
}

impl LookupState<'_> {
    fn get_analyses(&mut self, raw_target: TableIndex) {
        if self.depth >= MAX_RECURSION_DEPTH {
            return;
        }
        self.depth += 1;

        let in_transition_table = raw_target >= TRANSITION_TARGET_TABLE_START;
        let index = pivot(raw_target);

        if in_transition_table {
            self.try_epsilon_transitions(index + 1);
        } else {
            self.try_epsilon_indices(index + 1);
        }

        if self.input[self.input_pos] == NO_SYMBOL {
            // Input consumed: terminate the tape and emit if the node is final.
            self.seal_output();
            let (is_final, final_weight) = if in_transition_table {
                let table = self.tr.transition_table();
                (table.is_final(index), table.weight(index).unwrap_or(0.0))
            } else {
                let table = self.tr.index_table();
                let w = if self.tr.is_weighted() {
                    table.final_weight(index)
                } else {
                    0.0
                };
                (table.is_final(index), w)
            };
            if is_final {
                self.weight += final_weight;
                self.note_analysis();
                self.weight -= final_weight;
            }
            self.depth -= 1;
            return;
        }

        self.input_pos += 1;
        if in_transition_table {
            self.find_transitions(index + 1);
        } else {
            self.find_index(index + 1);
        }
        self.input_pos -= 1;
        self.seal_output();
        self.depth -= 1;
    }

    /// Index tables keep a state's sole epsilon arc at a dedicated slot.
    fn try_epsilon_indices(&mut self, index: TableIndex) {
        let table = self.tr.index_table();
        if table.input(index) == 0 {
            self.try_epsilon_transitions(pivot(table.target(index)));
        }
    }

    /// Walk the run of epsilon and flag arcs beginning at `index`.
    fn try_epsilon_transitions(&mut self, mut index: TableIndex) {
        loop {
            let input = self.tr.transition_table().input(index);
            if let Some(&flag) = self.tr.alphabet().operation(input) {
                if self.flags.push_state(&flag) {
                    self.follow_transition(index);
                    self.flags.pop();
                }
                index += 1;
            } else if input == 0 {
                self.follow_transition(index);
                index += 1;
            } else {
                break;
            }
        }
    }

    /// The input-labelled arc for symbol `s` from a block at `index` lives
    /// at slot `index + s`.
    fn find_index(&mut self, index: TableIndex) {
        let symbol = self.input[self.input_pos - 1];
        let table = self.tr.index_table();
        let slot = index + TableIndex::from(symbol);
        if table.input(slot) == symbol {
            self.find_transitions(pivot(table.target(slot)));
        }
    }

    /// Transitions sharing an input symbol are contiguous from `index`.
    fn find_transitions(&mut self, mut index: TableIndex) {
        let symbol = self.input[self.input_pos - 1];
        while self.tr.transition_table().input(index) != NO_SYMBOL {
            if self.tr.transition_table().input(index) != symbol {
                return;
            }
            self.follow_transition(index);
            index += 1;
        }
    }

    /// Emit a transition's output, add its weight, recurse into its target,
    /// then undo.
    fn follow_transition(&mut self, index: TableIndex) {
        let table = self.tr.transition_table();
        let output = table.output(index);
        let weight = table.weight(index).unwrap_or(0.0);
        let target = table.target(index);

        self.emit_output(output);
        self.weight += weight;
        self.get_analyses(target);
        self.weight -= weight;
        self.output_pos -= 1;
    }

    /// Write at the output pointer, growing the tape by one if at its end.
    fn emit_output(&mut self, symbol: SymbolId) {
        if self.output_pos == self.output.len() {
            self.output.push(symbol);
        } else {
            self.output[self.output_pos] = symbol;
        }
        self.output_pos += 1;
    }

    /// Terminate the tape at the output pointer without moving it.
    fn seal_output(&mut self) {
        if self.output_pos == self.output.len() {
            self.output.push(NO_SYMBOL);
        } else {
            self.output[self.output_pos] = NO_SYMBOL;
        }
    }

    /// Materialize the current path as a result.
    fn note_analysis(&mut self) {
        let alphabet = self.tr.alphabet();
        let symbols = self.output[..self.output_pos]
            .iter()
            .filter(|&&symbol| symbol != NO_SYMBOL)
            .map(|&symbol| alphabet.key(symbol).to_string())
            .collect();
        let weight = if self.tr.is_weighted() {
            self.weight
        } else {
            1.0
        };
        self.results.push(Analysis { symbols, weight });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_partitions_the_target_space() {
        assert_eq!(pivot(0), 0);
        assert_eq!(pivot(17), 17);
        assert_eq!(pivot(TRANSITION_TARGET_TABLE_START), 0);
        assert_eq!(pivot(TRANSITION_TARGET_TABLE_START + 42), 42);
    }

    #[test]
    fn analysis_text_concatenates_symbols() {
        let a = Analysis {
            symbols: vec!["k".into(), "".into(), "oira".into(), "+N".into()],
            weight: 0.5,
        };
        assert_eq!(a.text(), "koira+N");
        assert_eq!(a.weight(), 0.5);
        assert_eq!(a.symbols().len(), 4);
    }
}
