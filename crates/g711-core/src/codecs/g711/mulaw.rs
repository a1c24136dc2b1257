//! G.711 μ-law (PCMU) encoder and decoder
//!
//! The encoder carries the zero-trap option. Some legacy T1 equipment reads a
//! long run of all-zero bytes as a signaling condition, so with zero-trap on
//! the encoder emits [`ZERO_TRAP_CODE`](super::tables::ZERO_TRAP_CODE)
//! wherever it would emit `0x00`.
//!
//! Toggling never rewrites a table. Both variants are built once and the
//! encoder only switches which one it reads.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::tables::{
    mulaw_decode_table, mulaw_encode_table, mulaw_encode_table_zero_trap, DecodeTable, EncodeTable,
};
use super::{SampleDecoder, SampleEncoder};

/// Linear PCM → μ-law
#[derive(Debug, Default)]
pub struct MulawEncoder {
    zero_trap: AtomicBool,
}

impl MulawEncoder {
    /// Create a new μ-law encoder with zero-trap disabled
    pub fn new() -> Self {
        Self::with_zero_trap(false)
    }

    /// Create a new μ-law encoder with the given zero-trap setting
    pub fn with_zero_trap(zero_trap: bool) -> Self {
        Self {
            zero_trap: AtomicBool::new(zero_trap),
        }
    }

    /// Whether the all-zero code is currently trapped
    pub fn zero_trap(&self) -> bool {
        self.zero_trap.load(Ordering::Acquire)
    }

    /// Enable or disable zero-trap
    ///
    /// Takes effect for every call that starts afterwards. A batch call that
    /// is already running finishes with the table it started with.
    pub fn set_zero_trap(&self, zero_trap: bool) {
        let previous = self.zero_trap.swap(zero_trap, Ordering::AcqRel);
        if previous != zero_trap {
            debug!("μ-law zero-trap {}", if zero_trap { "enabled" } else { "disabled" });
        }
    }
}

impl Clone for MulawEncoder {
    fn clone(&self) -> Self {
        Self::with_zero_trap(self.zero_trap())
    }
}

impl SampleEncoder for MulawEncoder {
    fn encode_table(&self) -> &'static EncodeTable {
        if self.zero_trap() {
            mulaw_encode_table_zero_trap()
        } else {
            mulaw_encode_table()
        }
    }
}

/// μ-law → linear PCM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MulawDecoder;

impl MulawDecoder {
    /// Create a new μ-law decoder
    pub fn new() -> Self {
        Self
    }
}

impl SampleDecoder for MulawDecoder {
    fn decode_table(&self) -> &'static DecodeTable {
        mulaw_decode_table()
    }
}
