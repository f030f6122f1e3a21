use thiserror::Error;

use crate::canonical::{MAX_CODE_LENGTH, MAX_SYMBOLS};

/// Errors reported while building a decode table.
///
/// Only construction can fail. Decoding signals malformed input through
/// the `(INVALID_SYMBOL, 0)` return pair instead of a `Result` so the hot
/// path stays branch-light and allocation-free.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffError {
    #[error("code length {0} exceeds the supported maximum of {max}", max = MAX_CODE_LENGTH)]
    InvalidLength(u8),

    #[error("alphabet has {0} symbols, the maximum is {max}", max = MAX_SYMBOLS)]
    TooManySymbols(usize),

    #[error("symbol remap has {0} entries for {1} code lengths")]
    TooFewSymbols(usize, usize),

    #[error("length table is over-subscribed (Kraft sum exceeds one)")]
    OverSubscribed,

    #[error("length table is incomplete (Kraft sum falls short of one)")]
    Incomplete,
}
