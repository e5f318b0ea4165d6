//! Hex-encoded program input.
//!
//! Decodes strings such as `"a9028531"` into bytes for feeding a
//! [`StreamDecoder`](crate::StreamDecoder).

use thiserror::Error;

/// Errors from [`decode_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// The input holds an odd number of hex digits.
    #[error("hex input has an odd number of digits ({len})")]
    OddLength { len: usize },

    /// A character other than a hex digit or whitespace was found.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Decode a hex string into bytes, two digits per byte.
///
/// Digits may be upper or lower case; ASCII whitespace is ignored.
///
/// ```
/// use lib65c02dasm::decode_hex;
///
/// assert_eq!(decode_hex("A9 2a").unwrap(), vec![0xA9, 0x2A]);
/// assert!(decode_hex("A9 2").is_err());
/// ```
pub fn decode_hex(input: &str) -> Result<Vec<u8>, HexError> {
    let digits = input
        .char_indices()
        .filter(|(_, c)| !c.is_ascii_whitespace())
        .map(|(position, found)| {
            found
                .to_digit(16)
                .map(|digit| digit as u8)
                .ok_or(HexError::InvalidDigit { position, found })
        })
        .collect::<Result<Vec<u8>, HexError>>()?;

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
