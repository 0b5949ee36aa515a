use thiserror::Error;

/// Core error type shared across elfproef crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A candidate string or digit slice does not hold exactly 9 digits.
    #[error("invalid length: expected 9 digits, got {0}")]
    InvalidLength(usize),
    /// A character outside '0'..='9' appeared in a candidate string.
    #[error("invalid digit: {0:?}")]
    InvalidDigit(char),
    /// A digit value outside 0..=9 appeared in a candidate sequence.
    #[error("digit value out of range: {0}")]
    DigitOutOfRange(u8),
    /// An integer too large to hold 9 decimal digits.
    #[error("value out of range for 9 digits: {0}")]
    OutOfRange(u64),
}

/// Convenience alias for results returned by elfproef crates.
pub type Result<T> = std::result::Result<T, Error>;
