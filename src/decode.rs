use bc_crypto::memzero;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    ShamirError,
    shamir_error::Result,
    constants::{SHAMIR_MAX_BASE, SHAMIR_MIN_BASE},
};

pub(crate) fn validate_base(base: u32) -> Result<()> {
    if !(SHAMIR_MIN_BASE..=SHAMIR_MAX_BASE).contains(&base) {
        return Err(ShamirError::InvalidBase { base });
    }
    Ok(())
}

/// Parses the textual `base` of a share entry, e.g. `"16"`.
pub fn parse_base(text: &str) -> Result<u32> {
    let base = text
        .parse::<u32>()
        .map_err(|_| ShamirError::MalformedInput(format!("base {:?} is not an integer", text)))?;
    validate_base(base)?;
    Ok(base)
}

/// Decodes a digit string in radix `base` (2..=36) into an unbounded
/// non-negative integer.
///
/// Digits are `0-9` then `a-z` (either case) for the values 10 to 35. The
/// string is evaluated left to right as `result = result * base + digit`.
pub fn decode(digits: &str, base: u32) -> Result<BigUint> {
    validate_base(base)?;
    if digits.is_empty() {
        return Err(ShamirError::EmptyValue);
    }

    let mut values = Vec::with_capacity(digits.len());
    for (position, digit) in digits.chars().enumerate() {
        match digit.to_digit(base) {
            Some(value) => values.push(value as u8),
            None => {
                memzero(values.as_mut_slice());
                return Err(ShamirError::InvalidDigit { digit, position, base });
            }
        }
    }

    let result = values
        .iter()
        .fold(BigUint::zero(), |acc, &value| acc * base + value);

    // clean up the digit scratch buffer
    memzero(values.as_mut_slice());

    Ok(result)
}
