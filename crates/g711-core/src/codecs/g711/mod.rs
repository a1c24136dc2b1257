//! G.711 Audio Codec Implementation
//!
//! This module implements ITU-T G.711 A-law (PCMA) and μ-law (PCMU)
//! companding. Each law is split into an encoder and a decoder, and each of
//! the four is a thin view over a lookup table built once per process from
//! the scalar formulas in [`reference`].
//!
//! The two laws share the sign/segment/mantissa byte layout but differ in
//! bias and transmission inversion, so they are kept as independent
//! implementations of [`SampleEncoder`] and [`SampleDecoder`] rather than one
//! parameterized transform.
//!
//! ## Usage
//!
//! ```rust
//! use g711_core::codecs::g711::{AlawDecoder, AlawEncoder, SampleDecoder, SampleEncoder};
//!
//! let encoder = AlawEncoder::new();
//! let decoder = AlawDecoder::new();
//!
//! let encoded = encoder.encode_slice(&[0, 100, -100]);
//! assert_eq!(encoded, vec![0xD5, 0xD3, 0x53]);
//!
//! let decoded = decoder.decode_slice(&encoded);
//! assert_eq!(decoded, vec![8, 104, -104]);
//! ```

use bytes::{Buf, BufMut};

use crate::error::{CodecError, Result};

pub mod alaw;
pub mod mulaw;
pub mod reference;
pub mod tables;

#[cfg(test)]
mod tests;

pub use alaw::{AlawDecoder, AlawEncoder};
pub use mulaw::{MulawDecoder, MulawEncoder};
pub use reference::{alaw_decode, alaw_encode, mulaw_decode, mulaw_encode};
pub use tables::{init_tables, DecodeTable, EncodeTable, ZERO_TRAP_CODE, ZERO_TRAP_RANGE};

use tables::encode_index;

/// Linear PCM → companded code
///
/// Implementors only supply their lookup table. Every operation reads the
/// table reference once, so a batch is always encoded with a single table.
pub trait SampleEncoder {
    /// The table this encoder currently reads
    fn encode_table(&self) -> &'static EncodeTable;

    /// Encode one sample
    fn encode(&self, sample: i16) -> u8 {
        self.encode_table()[encode_index(sample)]
    }

    /// Encode one sample held in an `i32`
    ///
    /// Only the low 16 bits are used, as a two's complement sample.
    fn encode_i32(&self, pcm: i32) -> u8 {
        self.encode_table()[(pcm & 0xFFFF) as usize]
    }

    /// Encode a slice of samples, one code per sample
    fn encode_slice(&self, samples: &[i16]) -> Vec<u8> {
        let table = self.encode_table();
        samples.iter().map(|&sample| table[encode_index(sample)]).collect()
    }

    /// Encode a slice of `i32` samples, using the low 16 bits of each
    fn encode_i32_slice(&self, samples: &[i32]) -> Vec<u8> {
        let table = self.encode_table();
        samples.iter().map(|&pcm| table[(pcm & 0xFFFF) as usize]).collect()
    }

    /// Encode into a caller-supplied buffer
    ///
    /// # Returns
    ///
    /// Number of codes written (`samples.len()`)
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferTooSmall`] if `output` is shorter than
    /// `samples`. Nothing is written in that case.
    fn encode_into(&self, samples: &[i16], output: &mut [u8]) -> Result<usize> {
        if output.len() < samples.len() {
            return Err(CodecError::buffer_too_small(samples.len(), output.len()));
        }

        let table = self.encode_table();
        for (code, &sample) in output.iter_mut().zip(samples) {
            *code = table[encode_index(sample)];
        }
        Ok(samples.len())
    }

    /// Encode little-endian 16-bit PCM bytes
    ///
    /// Each pair of bytes (low byte first) becomes one code, so the output is
    /// half the input length. A trailing odd byte is ignored.
    fn encode_le_bytes(&self, data: &[u8]) -> Vec<u8> {
        let table = self.encode_table();
        let mut input = data;
        let mut output = Vec::with_capacity(data.len() / 2);
        while input.remaining() >= 2 {
            output.push(table[encode_index(input.get_i16_le())]);
        }
        output
    }

    /// Encode little-endian 16-bit PCM bytes into a caller-supplied buffer
    ///
    /// # Returns
    ///
    /// Number of codes written (`data.len() / 2`)
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferTooSmall`] if `output` holds fewer than
    /// `data.len() / 2` bytes. Nothing is written in that case.
    fn encode_le_bytes_into(&self, data: &[u8], output: &mut [u8]) -> Result<usize> {
        let needed = data.len() / 2;
        if output.len() < needed {
            return Err(CodecError::buffer_too_small(needed, output.len()));
        }

        let table = self.encode_table();
        let mut input = data;
        for code in &mut output[..needed] {
            *code = table[encode_index(input.get_i16_le())];
        }
        Ok(needed)
    }
}

/// Companded code → linear PCM
pub trait SampleDecoder {
    /// The table this decoder reads
    fn decode_table(&self) -> &'static DecodeTable;

    /// Decode one code
    fn decode(&self, code: u8) -> i16 {
        self.decode_table()[usize::from(code)]
    }

    /// Decode a slice of codes, one sample per code
    fn decode_slice(&self, data: &[u8]) -> Vec<i16> {
        let table = self.decode_table();
        data.iter().map(|&code| table[usize::from(code)]).collect()
    }

    /// Decode into a caller-supplied sample buffer
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferTooSmall`] if `output` is shorter than
    /// `data`. Nothing is written in that case.
    fn decode_into(&self, data: &[u8], output: &mut [i16]) -> Result<usize> {
        if output.len() < data.len() {
            return Err(CodecError::buffer_too_small(data.len(), output.len()));
        }

        let table = self.decode_table();
        for (sample, &code) in output.iter_mut().zip(data) {
            *sample = table[usize::from(code)];
        }
        Ok(data.len())
    }

    /// Decode to little-endian 16-bit PCM bytes (two bytes per code)
    fn decode_to_le_bytes(&self, data: &[u8]) -> Vec<u8> {
        let table = self.decode_table();
        let mut output = Vec::with_capacity(data.len() * 2);
        for &code in data {
            output.put_i16_le(table[usize::from(code)]);
        }
        output
    }

    /// Decode to little-endian 16-bit PCM bytes in a caller-supplied buffer
    ///
    /// # Returns
    ///
    /// Number of bytes written (`data.len() * 2`)
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferTooSmall`] if `output` holds fewer than
    /// `data.len() * 2` bytes. Nothing is written in that case.
    fn decode_to_le_bytes_into(&self, data: &[u8], output: &mut [u8]) -> Result<usize> {
        let needed = data.len() * 2;
        if output.len() < needed {
            return Err(CodecError::buffer_too_small(needed, output.len()));
        }

        let table = self.decode_table();
        let mut dst = &mut output[..needed];
        for &code in data {
            dst.put_i16_le(table[usize::from(code)]);
        }
        Ok(needed)
    }
}
