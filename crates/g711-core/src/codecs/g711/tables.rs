//! Lookup tables evaluated from the formulas in [`super::reference`]
//!
//! Every table is built on first access and never mutated afterwards, so a
//! `&'static` reference to one can be handed to any thread.
//!
//! ## Layout
//!
//! Encode tables are indexed by the unsigned 16-bit representation of the
//! sample (`sample as u16`), so `-1` lives at index `0xFFFF`. Decode tables are
//! indexed by the code byte.
//!
//! ## Footprint
//!
//! Three 64KiB encode tables (A-law, μ-law, μ-law with zero-trap) and two
//! 512-byte decode tables, about 193KiB for the process lifetime.

use crate::codecs::g711::reference::{alaw_decode, alaw_encode, mulaw_decode, mulaw_encode};
use once_cell::sync::Lazy;
use std::ops::RangeInclusive;
use tracing::debug;

/// Number of entries in an encode table (every 16-bit pattern)
pub const ENCODE_TABLE_SIZE: usize = 1 << 16;

/// Number of entries in a decode table (every code byte)
pub const DECODE_TABLE_SIZE: usize = 1 << 8;

/// Encode table indices rewritten when μ-law zero-trap is enabled.
///
/// These are the samples `-32768..=-31612`, the only ones whose plain μ-law
/// code is the all-zero byte.
pub const ZERO_TRAP_RANGE: RangeInclusive<usize> = 32768..=33924;

/// Code emitted in place of `0x00` when μ-law zero-trap is enabled
pub const ZERO_TRAP_CODE: u8 = 0x02;

/// Lookup table type for 16-bit linear → 8-bit code
pub type EncodeTable = [u8; ENCODE_TABLE_SIZE];

/// Lookup table type for 8-bit code → 16-bit linear
pub type DecodeTable = [i16; DECODE_TABLE_SIZE];

/// Table index of a sample
#[inline]
pub fn encode_index(sample: i16) -> usize {
    usize::from(sample as u16)
}

fn build_encode_table(encode: fn(i16) -> u8) -> EncodeTable {
    let mut table = [0u8; ENCODE_TABLE_SIZE];
    for (index, entry) in table.iter_mut().enumerate() {
        *entry = encode(index as u16 as i16);
    }
    table
}

fn build_decode_table(decode: fn(u8) -> i16) -> DecodeTable {
    let mut table = [0i16; DECODE_TABLE_SIZE];
    for (code, entry) in table.iter_mut().enumerate() {
        *entry = decode(code as u8);
    }
    table
}

/// Sample → A-law code
static ALAW_ENCODE_TABLE: Lazy<EncodeTable> = Lazy::new(|| {
    debug!("Building A-law encode table ({} entries)", ENCODE_TABLE_SIZE);
    build_encode_table(alaw_encode)
});

/// A-law code → sample
static ALAW_DECODE_TABLE: Lazy<DecodeTable> = Lazy::new(|| {
    debug!("Building A-law decode table ({} entries)", DECODE_TABLE_SIZE);
    build_decode_table(alaw_decode)
});

/// Sample → μ-law code
static MULAW_ENCODE_TABLE: Lazy<EncodeTable> = Lazy::new(|| {
    debug!("Building μ-law encode table ({} entries)", ENCODE_TABLE_SIZE);
    build_encode_table(mulaw_encode)
});

/// μ-law encoding table with the all-zero code trapped to [`ZERO_TRAP_CODE`]
///
/// Derived from the plain table; only [`ZERO_TRAP_RANGE`] differs.
static MULAW_ENCODE_TABLE_ZERO_TRAP: Lazy<EncodeTable> = Lazy::new(|| {
    debug!("Building μ-law zero-trap encode table");
    let mut table = *MULAW_ENCODE_TABLE;
    table[ZERO_TRAP_RANGE].fill(ZERO_TRAP_CODE);
    table
});

/// μ-law code → sample
static MULAW_DECODE_TABLE: Lazy<DecodeTable> = Lazy::new(|| {
    debug!("Building μ-law decode table ({} entries)", DECODE_TABLE_SIZE);
    build_decode_table(mulaw_decode)
});

/// Shared A-law encode table
pub fn alaw_encode_table() -> &'static EncodeTable {
    &ALAW_ENCODE_TABLE
}

/// Shared A-law decode table
pub fn alaw_decode_table() -> &'static DecodeTable {
    &ALAW_DECODE_TABLE
}

/// Shared μ-law encode table
pub fn mulaw_encode_table() -> &'static EncodeTable {
    &MULAW_ENCODE_TABLE
}

/// Shared μ-law encode table with zero-trap applied
pub fn mulaw_encode_table_zero_trap() -> &'static EncodeTable {
    &MULAW_ENCODE_TABLE_ZERO_TRAP
}

/// Shared μ-law decode table
pub fn mulaw_decode_table() -> &'static DecodeTable {
    &MULAW_DECODE_TABLE
}

/// Force construction of every table
///
/// Tables are otherwise built on first use. Calling this at startup moves the
/// one-time cost out of the audio path. Safe to call any number of times.
pub fn init_tables() {
    Lazy::force(&ALAW_ENCODE_TABLE);
    Lazy::force(&ALAW_DECODE_TABLE);
    Lazy::force(&MULAW_ENCODE_TABLE);
    Lazy::force(&MULAW_ENCODE_TABLE_ZERO_TRAP);
    Lazy::force(&MULAW_DECODE_TABLE);
}
