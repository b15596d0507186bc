//! Roman numeral decoding and validation.
//!
//! Decoding is permissive: any sequence of the seven classical letters is
//! accepted and evaluated with subtractive notation, so non-canonical forms
//! such as `IIX` or `VX` decode without error.

use crate::error::NumeralError;

/// Returns the value of a single Roman numeral letter, case-insensitively.
pub fn symbol_value(ch: char) -> Option<i64> {
    match ch.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Returns `true` if every character of `token` is a Roman numeral letter.
///
/// Ordering is not checked.
pub fn is_valid(token: &str) -> bool {
    validate(token).is_ok()
}

/// Like [`is_valid`], but reports the first offending character.
pub fn validate(token: &str) -> Result<(), NumeralError> {
    match token
        .chars()
        .enumerate()
        .find(|&(_, c)| symbol_value(c).is_none())
    {
        Some((position, ch)) => Err(NumeralError::InvalidCharacter {
            token: token.to_string(),
            ch,
            position,
        }),
        None => Ok(()),
    }
}

/// Decodes a Roman numeral into an integer.
///
/// A letter is subtracted when the letter after it has a larger value and
/// added otherwise. Fails on the first character outside `IVXLCDM`.
///
/// # Examples
///
/// ```
/// use roman_calc::numeral::decode;
///
/// assert_eq!(decode("MCMXCIV").unwrap(), 1994);
/// assert!(decode("X1").is_err());
/// ```
pub fn decode(token: &str) -> Result<i64, NumeralError> {
    let chars: Vec<char> = token.chars().collect();
    let mut total: i64 = 0;

    for (position, &ch) in chars.iter().enumerate() {
        let current = symbol_value(ch).ok_or_else(|| NumeralError::InvalidCharacter {
            token: token.to_string(),
            ch,
            position,
        })?;

        // An unmappable follower counts as 0; it fails on its own turn.
        let next = chars
            .get(position + 1)
            .and_then(|&c| symbol_value(c))
            .unwrap_or(0);

        if current < next {
            total -= current;
        } else {
            total += current;
        }
    }

    Ok(total)
}
