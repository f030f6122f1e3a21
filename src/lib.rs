//! huffy - Fast canonical-Huffman decoding
//!
//! A reusable decoding core for the canonical Huffman codes found in
//! DEFLATE, JPEG, HTTP/2 HPACK, Brotli and friends. The crate turns a
//! table of per-symbol codeword bit-lengths into a decode-ready structure
//! and decodes individual symbols from a bit-level input at high
//! throughput.
//!
//! ## Structure
//!
//! - **Fast table**: a 256-entry direct lookup keyed by the next 8 bits of
//!   the stream resolves every codeword of 8 bits or less in one load.
//! - **Slow path**: longer codes walk per-length sentinel/offset arrays,
//!   one bit per length, exactly reproducing a canonical tree walk.
//! - **Bit orders**: [`LsbTable`] consumes LSB-first streams (DEFLATE,
//!   HPACK); [`MsbTable`] consumes MSB-first streams (JPEG).
//! - **Extra bits**: [`LsbExtTable`] folds DEFLATE-style "base + extra
//!   bits" decoding into the same single lookup.
//!
//! ## Usage
//!
//! ```
//! use huffy::{BitCursor, LsbTable};
//!
//! // Four symbols, all with 2-bit codes: 0, 2, 1, 3 packed LSB-first.
//! let table = LsbTable::build(&[2, 2, 2, 2], None).unwrap();
//!
//! let data = [0b1110_0100u8];
//! let mut cursor = BitCursor::new();
//! let (word, avail) = cursor.read(&data);
//! let (sym, used) = table.decode(word, avail);
//! assert_eq!((sym, used), (0, 2));
//! cursor.rewind(avail - used);
//! ```
//!
//! Tables are immutable after build and may be shared across threads;
//! decoding is pure computation on caller-provided buffers and never
//! allocates.

mod bit_reader;
mod bit_reverse;
mod canonical;
pub mod deflate_tables;
mod error;
mod ext_table;
mod lsb_table;
mod msb_table;

#[cfg(test)]
mod test_utils;

pub use bit_reader::BitCursor;
pub use bit_reverse::{rbit64, rev64_swar, rev8, rev8_full, rev_word};
pub use canonical::{
    Completeness, FastEntry, FAST_BITS, FAST_SIZE, INVALID_SYMBOL, MAX_CODE_LENGTH, MAX_SYMBOLS,
};
pub use error::HuffError;
pub use ext_table::{Extra, LsbExtTable};
pub use lsb_table::{LsbFastTable, LsbTable};
pub use msb_table::MsbTable;

/// Working bitstream word. `u64` by default; the `bits128` feature widens
/// it to `u128` for decoders that want deeper lookahead per refill.
#[cfg(not(feature = "bits128"))]
pub type Bits = u64;

/// Working bitstream word (128-bit build).
#[cfg(feature = "bits128")]
pub type Bits = u128;

/// Width of the working bitstream word in bits.
pub const WORD_BITS: u32 = Bits::BITS;
