// Transducer header: optional HFST preamble plus the 56-byte fixed block.

use crate::Error;
use crate::cursor::Cursor;

/// Magic bytes opening the optional preamble.
const PREAMBLE_MAGIC: &[u8; 5] = b"HFST\0";

/// Size of the fixed header block in bytes.
pub const FIXED_HEADER_SIZE: usize = 56;

/// Parsed transducer header.
///
/// Newer tools prepend a preamble (`HFST\0`, a little-endian u16 length,
/// then that many bytes of opaque metadata); older files begin with the
/// fixed block directly. The fixed block carries two u16 symbol counts,
/// four u32 table dimensions and nine u32-encoded booleans describing the
/// transducer. The runtime consumes the counts, the table lengths and
/// `weighted`; the remaining booleans are retained for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub input_symbol_count: u16,
    pub symbol_count: u16,
    pub index_table_len: u32,
    pub transition_table_len: u32,
    pub state_count: u32,
    pub transition_count: u32,
    pub weighted: bool,
    pub deterministic: bool,
    pub input_deterministic: bool,
    pub minimized: bool,
    pub cyclic: bool,
    pub has_epsilon_epsilon_transitions: bool,
    pub has_input_epsilon_transitions: bool,
    pub has_input_epsilon_cycles: bool,
    pub has_unweighted_input_epsilon_cycles: bool,
}

/// Parse the header, leaving the cursor at the first alphabet byte.
pub fn parse(cur: &mut Cursor) -> Result<Header, Error> {
    if cur.peek(PREAMBLE_MAGIC.len()) == Some(PREAMBLE_MAGIC) {
        cur.skip(PREAMBLE_MAGIC.len())?;
        let metadata_len = cur.u16_le()?;
        cur.skip(metadata_len as usize)?;
    }

    Ok(Header {
        input_symbol_count: cur.u16_le()?,
        symbol_count: cur.u16_le()?,
        index_table_len: cur.u32_le()?,
        transition_table_len: cur.u32_le()?,
        state_count: cur.u32_le()?,
        transition_count: cur.u32_le()?,
        weighted: cur.bool_u32()?,
        deterministic: cur.bool_u32()?,
        input_deterministic: cur.bool_u32()?,
        minimized: cur.bool_u32()?,
        cyclic: cur.bool_u32()?,
        has_epsilon_epsilon_transitions: cur.bool_u32()?,
        has_input_epsilon_transitions: cur.bool_u32()?,
        has_input_epsilon_cycles: cur.bool_u32()?,
        has_unweighted_input_epsilon_cycles: cur.bool_u32()?,
    })
}
