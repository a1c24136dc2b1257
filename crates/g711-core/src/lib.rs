//! # g711-core
//!
//! Conversion between linear 16-bit PCM and the two 8-bit companding
//! formats of ITU-T G.711: A-law (PCMA) and μ-law (PCMU).
//!
//! The crate is organised in three layers:
//!
//! - [`codecs::g711::reference`] holds the bit-level formulas
//! - [`codecs::g711::tables`] evaluates them once into lookup tables
//! - [`AlawEncoder`], [`MulawDecoder`] and friends read those tables,
//!   one sample or one batch at a time
//!
//! μ-law encoders optionally apply the zero-trap, which keeps the all-zero
//! code off the wire by switching between two immutable tables.
//!
//! ```rust
//! use g711_core::{MulawDecoder, MulawEncoder, SampleDecoder, SampleEncoder};
//!
//! let encoder = MulawEncoder::new();
//! let decoder = MulawDecoder::new();
//!
//! let silence = vec![0i16; 160];
//! let payload = encoder.encode_slice(&silence);
//! assert!(payload.iter().all(|&code| code == 0xFF));
//! assert_eq!(decoder.decode_slice(&payload), silence);
//! ```

#![deny(missing_docs)]

pub mod codecs;
pub mod error;

pub use codecs::g711::{
    AlawDecoder, AlawEncoder, MulawDecoder, MulawEncoder, SampleDecoder, SampleEncoder,
};
pub use error::{CodecError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prepare the library for use on a real-time path
///
/// Installs a `tracing` fmt subscriber if the application has not set one and
/// builds every lookup table, so the first encode on an audio thread does not
/// pay for table construction. It's safe to call multiple times.
pub fn init() {
    // An application subscriber wins over ours
    if tracing_subscriber::fmt::try_init().is_err() {
        tracing::trace!("tracing subscriber already installed");
    }

    codecs::g711::init_tables();
    tracing::info!(version = VERSION, "g711-core ready");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_repeatable() {
        init();
        init();

        let encoder = AlawEncoder::new();
        assert_eq!(encoder.encode(0), 0xD5);
    }
}
