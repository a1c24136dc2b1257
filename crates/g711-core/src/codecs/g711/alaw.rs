//! G.711 A-law (PCMA) encoder and decoder

use super::tables::{alaw_decode_table, alaw_encode_table, DecodeTable, EncodeTable};
use super::{SampleDecoder, SampleEncoder};

/// Linear PCM → A-law
///
/// Stateless; every instance shares the process-wide table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlawEncoder;

impl AlawEncoder {
    /// Create a new A-law encoder
    pub fn new() -> Self {
        Self
    }
}

impl SampleEncoder for AlawEncoder {
    fn encode_table(&self) -> &'static EncodeTable {
        alaw_encode_table()
    }
}

/// A-law → linear PCM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlawDecoder;

impl AlawDecoder {
    /// Create a new A-law decoder
    pub fn new() -> Self {
        Self
    }
}

impl SampleDecoder for AlawDecoder {
    fn decode_table(&self) -> &'static DecodeTable {
        alaw_decode_table()
    }
}
