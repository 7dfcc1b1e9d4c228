//! RF version parsing
//!
//! The bootloader hands the value over as text. Parsing follows C++
//! `std::stoi`: leading whitespace is skipped, an optional sign is accepted
//! and the longest run of decimal digits is converted. Trailing garbage is
//! ignored, so `"12abc"` reads as 12.

use crate::error::{InitError, InitResult};

/// `isspace` in the C locale
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Parse an RF version string into an integer.
pub fn parse_rf_version(value: &str) -> InitResult<i32> {
    let trimmed = value.trim_start_matches(is_c_space);

    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return Err(InitError::InvalidRfVersion {
            value: value.to_owned(),
        });
    }

    // Only sign and digits remain, so the sole failure mode is overflow
    trimmed[..sign_len + digits_len]
        .parse::<i32>()
        .map_err(|_| InitError::RfVersionOutOfRange {
            value: value.to_owned(),
        })
}
