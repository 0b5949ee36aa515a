use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of digits in a BSN candidate.
pub const BSN_LENGTH: usize = 9;

/// Largest integer that fits in 9 decimal digits.
const MAX_VALUE: u64 = 999_999_999;

/// A 9-digit BSN candidate.
///
/// The candidate is an ordered digit sequence, not an integer: leading
/// zeros are significant and preserved through parsing and formatting.
/// Whether the candidate passes the 11-test is a separate question
/// answered by [`crate::validation::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bsn([u8; BSN_LENGTH]);

impl Bsn {
    /// Build a candidate from raw digit values.
    pub fn from_digits(digits: [u8; BSN_LENGTH]) -> Result<Self> {
        for digit in digits {
            if digit > 9 {
                return Err(Error::DigitOutOfRange(digit));
            }
        }
        Ok(Self(digits))
    }

    /// Build a candidate from its straight integer value, restoring
    /// leading zeros.
    pub fn from_u64(value: u64) -> Result<Self> {
        if value > MAX_VALUE {
            return Err(Error::OutOfRange(value));
        }
        let mut digits = [0_u8; BSN_LENGTH];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &[u8; BSN_LENGTH] {
        &self.0
    }

    /// The straight integer value of the digit sequence.
    pub fn to_u64(&self) -> u64 {
        self.0.iter().fold(0_u64, |acc, d| acc * 10 + u64::from(*d))
    }
}

impl FromStr for Bsn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.chars().count() != BSN_LENGTH {
            return Err(Error::InvalidLength(s.chars().count()));
        }
        let mut digits = [0_u8; BSN_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(s.chars()) {
            let value = ch.to_digit(10).ok_or(Error::InvalidDigit(ch))?;
            *slot = value as u8;
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for Bsn {
    /// Zero-padded 9-character rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
