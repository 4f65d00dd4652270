//! Reading the integer sequence from a byte stream.

use std::io::Read;

use crate::error::InputError;

/// Consume `reader` to the end and parse its whitespace-separated tokens.
pub fn read_integers<R: Read>(mut reader: R) -> Result<Vec<i64>, InputError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_integers(&buf)
}

/// Parse whitespace-separated integers.
///
/// Blank input is [`InputError::Empty`]; the first token that is not a
/// valid `i64` is reported as [`InputError::NotAnInteger`].
pub fn parse_integers(text: &str) -> Result<Vec<i64>, InputError> {
    let mut tokens = text.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(InputError::Empty);
    }

    tokens
        .map(|token| {
            token.parse::<i64>().map_err(|_| InputError::NotAnInteger {
                token: token.to_string(),
            })
        })
        .collect()
}
