// Alphabet section: symbol strings and flag diacritic interning.

use hashbrown::HashMap;
use log::warn;

use crate::cursor::Cursor;
use crate::flags::{FlagDiacriticOperation, FlagOp};
use crate::{Error, SymbolId};

/// The transducer's symbol inventory.
///
/// `key_table[i]` is the printable string for symbol `i`. Epsilon (symbol 0)
/// and flag diacritics print as the empty string, so they vanish when an
/// output tape is concatenated. Flag diacritic symbols additionally carry an
/// entry in `operations`.
#[derive(Debug)]
pub struct Alphabet {
    key_table: Vec<String>,
    operations: HashMap<SymbolId, FlagDiacriticOperation>,
    feature_count: u16,
}

impl Alphabet {
    /// Decode `symbol_count` NUL-terminated UTF-8 symbol strings.
    ///
    /// A symbol is flag-shaped when it is longer than five characters,
    /// starts and ends with `@`, and has `.` as its third character. The
    /// interior splits on `.` into operator code, feature name and optional
    /// value name. Features are interned in order of first appearance from
    /// id 0; values from id 1, with the absent value mapped to the
    /// pre-registered neutral id 0. A flag-shaped symbol with an unknown
    /// operator code or a missing feature segment is demoted to an ordinary
    /// symbol with an empty display string.
    pub fn parse(cur: &mut Cursor, symbol_count: u16) -> Result<Alphabet, Error> {
        let mut key_table: Vec<String> = Vec::with_capacity(symbol_count as usize);
        let mut operations = HashMap::new();
        let mut feature_bucket: HashMap<String, u16> = HashMap::new();
        let mut value_bucket: HashMap<String, i32> = HashMap::new();
        value_bucket.insert(String::new(), 0); // neutral value

        for i in 0..symbol_count {
            let bytes = cur.cstr_bytes()?;
            let symbol =
                std::str::from_utf8(bytes).map_err(|_| Error::InvalidSymbol { index: i })?;

            if is_flag_shaped(symbol) {
                match parse_flag(symbol, &mut feature_bucket, &mut value_bucket) {
                    Some(operation) => {
                        operations.insert(i, operation);
                    }
                    None => warn!("demoting malformed flag diacritic symbol {symbol:?}"),
                }
                // Flag-shaped symbols never print, valid or not.
                key_table.push(String::new());
            } else {
                key_table.push(symbol.to_string());
            }
        }

        if let Some(first) = key_table.first_mut() {
            // Epsilon prints as nothing no matter how it is spelled.
            first.clear();
        }

        Ok(Alphabet {
            key_table,
            operations,
            feature_count: feature_bucket.len() as u16,
        })
    }

    /// Printable string for a symbol; empty for epsilon, flags and
    /// out-of-range ids.
    pub fn key(&self, symbol: SymbolId) -> &str {
        self.key_table
            .get(symbol as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn key_table(&self) -> &[String] {
        &self.key_table
    }

    pub fn operation(&self, symbol: SymbolId) -> Option<&FlagDiacriticOperation> {
        self.operations.get(&symbol)
    }

    pub fn is_flag(&self, symbol: SymbolId) -> bool {
        self.operations.contains_key(&symbol)
    }

    /// Number of distinct flag features; the width of a flag state vector.
    pub fn feature_count(&self) -> u16 {
        self.feature_count
    }

    pub fn len(&self) -> usize {
        self.key_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_table.is_empty()
    }
}

fn is_flag_shaped(symbol: &str) -> bool {
    symbol.chars().count() > 5
        && symbol.starts_with('@')
        && symbol.ends_with('@')
        && symbol.chars().nth(2) == Some('.')
}

fn parse_flag(
    symbol: &str,
    feature_bucket: &mut HashMap<String, u16>,
    value_bucket: &mut HashMap<String, i32>,
) -> Option<FlagDiacriticOperation> {
    let interior = &symbol[1..symbol.len() - 1];
    let mut parts = interior.split('.');

    let op = FlagOp::from_code(parts.next()?)?;
    let feature_name = parts.next()?;
    let value_name = parts.next().unwrap_or("");

    let next_feature = feature_bucket.len() as u16;
    let feature = *feature_bucket
        .entry(feature_name.to_string())
        .or_insert(next_feature);

    let next_value = value_bucket.len() as i32;
    let value = *value_bucket
        .entry(value_name.to_string())
        .or_insert(next_value);

    Some(FlagDiacriticOperation { op, feature, value })
}
