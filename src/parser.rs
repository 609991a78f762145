//! Identity number parsing.
//!
//! The accepted shape is `YYMMDD[-|+]XXXX`, eleven characters:
//!
//! ```text
//!  0 1   2 3   4 5   6     7 8 9 10
//!  Y Y   M M   D D   -/+   X X X X
//! ```
//!
//! Validation is a strict left-to-right sequence; the first failing check
//! decides the error:
//!
//! ```text
//! length ─▶ separator ─▶ year ─▶ month ─▶ day ─▶ code (verbatim)
//! ```
//!
//! The century is resolved from the two-digit year and the separator as soon
//! as both are known (see [`resolve_century`]).

use crate::identity::{IdentityNumber, Separator, resolve_century};
use crate::ParseError;

const LEN: usize = 11;
const SEPARATOR_AT: usize = 6;

/// Parse an identity number.
///
/// # Example
/// ```
/// use swedish_ssn::parse;
///
/// let id = parse("810504-8303").unwrap();
/// assert_eq!(id.year(), 1981);
/// assert_eq!(id.month_name(), "May");
/// assert_eq!(id.day(), 4);
/// assert_eq!(id.code(), "8303");
/// ```
pub fn parse(input: &str) -> Result<IdentityNumber, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != LEN {
        return Err(ParseError::InvalidLength);
    }

    let separator = Separator::from_char(chars[SEPARATOR_AT]).ok_or(ParseError::InvalidSeparator)?;

    let yy = two_digits(&chars[0..2]).ok_or(ParseError::InvalidYear)?;
    let year = resolve_century(yy, separator).ok_or(ParseError::InvalidYear)?;

    let month = two_digits(&chars[2..4]).filter(|m| (1..=12).contains(m)).ok_or(ParseError::InvalidMonth)?;
    let day = two_digits(&chars[4..6]).filter(|d| (1..=31).contains(d)).ok_or(ParseError::InvalidDay)?;

    let code: String = chars[SEPARATOR_AT + 1..].iter().collect();

    Ok(IdentityNumber::new(year, month, day, code))
}

/// Read two ASCII digits as a number in `0..=99`. Signs are not digits.
fn two_digits(pair: &[char]) -> Option<u32> {
    pair.iter().try_fold(0, |acc, c| Some(acc * 10 + c.to_digit(10)?))
}

#[cfg(test)]
mod tests;
