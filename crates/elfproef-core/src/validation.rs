use crate::types::{Bsn, BSN_LENGTH};

/// Positional weights of the 11-test, BSN variant: 9..2 for the first
/// eight digits, -1 for the check digit.
const WEIGHTS: [i32; BSN_LENGTH] = [9, 8, 7, 6, 5, 4, 3, 2, -1];

/// Run the 11-test over a candidate.
///
/// A candidate passes when its signed weighted sum is divisible by 11.
/// The all-zero sequence trivially sums to zero but is not a meaningful
/// identifier and is rejected explicitly.
pub fn is_valid(bsn: &Bsn) -> bool {
    let digits = bsn.digits();
    if digits.iter().all(|digit| *digit == 0) {
        return false;
    }
    weighted_sum(digits) % 11 == 0
}

/// The check digit completing an 8-digit prefix into a passing
/// candidate, or `None` when the required value would be 10, which the
/// BSN rule disallows.
pub fn check_digit(prefix: &[u8; BSN_LENGTH - 1]) -> Option<u8> {
    let sum: i32 = prefix
        .iter()
        .zip(WEIGHTS)
        .map(|(digit, weight)| i32::from(*digit) * weight)
        .sum();
    match sum % 11 {
        10 => None,
        check => Some(check as u8),
    }
}

fn weighted_sum(digits: &[u8; BSN_LENGTH]) -> i32 {
    digits
        .iter()
        .zip(WEIGHTS)
        .map(|(digit, weight)| i32::from(*digit) * weight)
        .sum()
}
