//! MSB-first decode table
//!
//! Decode table for bitstreams that consume the most-significant bit of
//! each byte first, as JPEG does. The stream word is expected top-aligned:
//! the next bit to consume is the most significant bit of the word. Words
//! read through the little-endian [`BitCursor`](crate::BitCursor) get
//! there with one [`rev_word`](crate::rev_word).
//!
//! Since canonical codes already count upward MSB-first, the fast table
//! fills contiguous ranges with no bit reversal, and the slow path is a
//! single magnitude comparison per length: the code window is held
//! top-aligned in a [`MAX_CODE_LENGTH`]-bit frame and compared against
//! sentinels pre-shifted into the same frame.

use crate::bit_reverse::rev8_full;
use crate::canonical::{CodeSpace, Completeness, FastEntry};
use crate::error::HuffError;
use crate::{Bits, FAST_BITS, FAST_SIZE, INVALID_SYMBOL, MAX_CODE_LENGTH, WORD_BITS};

/// Canonical-Huffman decode table for MSB-first bitstreams.
///
/// Immutable after [`build`](Self::build) and safe to share across
/// threads; decoding is stateless.
#[derive(Clone)]
pub struct MsbTable {
    fast: [FastEntry; FAST_SIZE],
    /// Exclusive upper bound per length, left-aligned in a
    /// `MAX_CODE_LENGTH`-bit frame for direct comparison.
    sentinels: [u32; MAX_CODE_LENGTH + 1],
    offsets: [i32; MAX_CODE_LENGTH + 1],
    syms: Vec<u16>,
}

impl MsbTable {
    /// Build a decode table from per-symbol codeword lengths.
    ///
    /// Same input contract as [`LsbTable::build`](crate::LsbTable::build):
    /// zero lengths mark absent symbols, `symbols` optionally remaps the
    /// dense index, incomplete and over-subscribed tables are accepted.
    pub fn build(lengths: &[u8], symbols: Option<&[u16]>) -> Result<Self, HuffError> {
        let space = CodeSpace::new(lengths, symbols)?;

        let mut table = Self {
            fast: [FastEntry::default(); FAST_SIZE],
            sentinels: [0; MAX_CODE_LENGTH + 1],
            offsets: [0; MAX_CODE_LENGTH + 1],
            syms: vec![0; space.num_symbols],
        };

        for l in 1..=MAX_CODE_LENGTH {
            let bound = space.code[l] + space.count[l] as u32;
            table.sentinels[l] = bound << (MAX_CODE_LENGTH - l);
            table.offsets[l] = space.sym_idx[l] as i32 - space.code[l] as i32;
        }

        let mut next_code = space.code;
        let mut next_idx = space.sym_idx;
        for (i, &len) in lengths.iter().enumerate() {
            if len == 0 {
                continue;
            }
            let l = len as usize;
            let sym = symbols.map_or(i as u16, |s| s[i]);
            table.syms[next_idx[l] as usize] = sym;
            next_idx[l] += 1;

            let code = next_code[l];
            next_code[l] += 1;

            if l <= FAST_BITS as usize {
                // Codes already run MSB-first: each one owns a contiguous
                // index range. Over-subscribed garbage can push the range
                // past the table; those codes just stay on the slow path.
                let start = (code << (FAST_BITS as usize - l)) as usize;
                let end = start + (1usize << (FAST_BITS as usize - l));
                if end <= FAST_SIZE {
                    for entry in &mut table.fast[start..end] {
                        *entry = FastEntry { sym, len, rev: 0 };
                    }
                }
            }
        }

        for (i, entry) in table.fast.iter_mut().enumerate() {
            if entry.len == 0 {
                entry.rev = rev8_full(i as u8);
            }
        }

        Ok(table)
    }

    /// Build, rejecting tables that do not satisfy Kraft with equality.
    pub fn build_strict(lengths: &[u8], symbols: Option<&[u16]>) -> Result<Self, HuffError> {
        let space = CodeSpace::new(lengths, symbols)?;
        match space.completeness()? {
            Completeness::Complete => Self::build(lengths, symbols),
            Completeness::Incomplete => Err(HuffError::Incomplete),
        }
    }

    /// Decode one symbol from a top-aligned MSB-first word.
    ///
    /// `bits` holds the stream with the next bit in the most significant
    /// position and `avail` valid bits below it; unused low positions must
    /// be zero, which is what [`rev_word`](crate::rev_word) applied to a
    /// [`BitCursor`](crate::BitCursor) word produces. Returns
    /// `(symbol, bits_consumed)` or `(INVALID_SYMBOL, 0)` on failure.
    #[inline(always)]
    pub fn decode(&self, bits: Bits, avail: u8) -> (u16, u8) {
        let fe = self.fast[(bits >> (WORD_BITS - FAST_BITS)) as usize];
        if fe.len != 0 {
            if fe.len <= avail {
                return (fe.sym, fe.len);
            }
            return (INVALID_SYMBOL, 0);
        }

        // Top MAX_CODE_LENGTH bits of the stream as one top-aligned
        // window; a code terminates at the first length whose sentinel
        // exceeds it.
        let win = (bits >> (WORD_BITS - MAX_CODE_LENGTH as u32)) as u32;
        for l in (FAST_BITS as usize + 1)..=MAX_CODE_LENGTH {
            if win < self.sentinels[l] {
                if l as u8 > avail {
                    return (INVALID_SYMBOL, 0);
                }
                let code = (win >> (MAX_CODE_LENGTH - l)) as i32;
                let idx = self.offsets[l] + code;
                return match self.syms.get(idx as usize) {
                    Some(&sym) => (sym, l as u8),
                    None => (INVALID_SYMBOL, 0),
                };
            }
        }

        (INVALID_SYMBOL, 0)
    }

    /// Number of coded symbols in the table.
    pub fn num_symbols(&self) -> usize {
        self.syms.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
