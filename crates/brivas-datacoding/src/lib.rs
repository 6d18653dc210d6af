//! # Brivas Data Coding
//!
//! Message body codecs for SMPP / GSM short messages:
//!
//! - **GSM 7-bit** - default alphabet, unpacked and packed forms
//! - **UCS2** - UTF-16BE with surrogate pairs
//! - **Single-byte** - ASCII, Latin-1, Cyrillic, Hebrew
//! - **UTF-16** - BE/LE transcoders with and without byte-order mark
//!
//! Variable-size codecs also split long bodies into segments for
//! concatenated messages, never dividing an escape sequence or a
//! surrogate pair.
//!
//! ## Example
//! ```rust
//! use brivas_datacoding::{EncDec, GSM7BITPACKED};
//!
//! let codec = &GSM7BITPACKED;
//! let encoded = codec.encode("Hello").unwrap();
//! assert_eq!(encoded, [0xC8, 0x32, 0x9B, 0xFD, 0x06]);
//!
//! let splitter = codec.as_splitter().unwrap();
//! assert!(!splitter.should_split("Hello", 134));
//! ```

pub mod charmap;
pub mod coding;
pub mod config;
pub mod errors;
pub mod gsm7;
pub mod registry;
pub mod segment;
pub mod ucs2;
pub mod utf16;

// Re-exports
pub use coding::{DataCoding, EncDec, Splitter};
pub use config::SegmentationConfig;
pub use errors::{CodingError, Result};
pub use registry::{from_data_coding, CustomEncoding};
pub use segment::split_message;

// Codec singletons
pub use charmap::{ASCII, CYRILLIC, HEBREW, LATIN1};
pub use gsm7::{GSM7BIT, GSM7BITPACKED};
pub use ucs2::UCS2;
pub use utf16::{UTF16BE, UTF16BEM, UTF16LE, UTF16LEM};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
