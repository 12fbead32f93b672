// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Strict decimal integer parsing.
//!
//! Accepted grammar, applied to a byte span:
//!
//! ```text
//! blank* [ '+' | '-' ] digit+ blank*
//! blank = ' ' | '\t'
//! digit = '0'..='9'
//! ```
//!
//! Anything else is a syntax error: interior blanks, repeated signs, radix
//! prefixes, digit separators, NUL bytes, or non-ASCII digits. Leading zeros
//! are accepted. A well-formed number whose value does not fit the target
//! width is a range error.
//!
//! The magnitude is accumulated in the unsigned type of the target width and
//! checked against `2^(w-1)` after every digit, so an oversized digit run is
//! reported as a range error as soon as it is detected, before the remaining
//! input is validated. The sign is applied once at the end through
//! `FixedWidth::from_magnitude`, which maps a negative magnitude of exactly
//! `2^(w-1)` to the minimum value.

use crate::num::{
    constants::{Ten, Zero},
    width::FixedWidth,
};
use num_traits::{CheckedAdd, CheckedMul};

/// The outcome category of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStatus {
    /// The text was parsed into a value.
    Ok,
    /// The text is not a signed decimal integer.
    SyntaxError,
    /// The text is a signed decimal integer that does not fit the target width.
    RangeError,
}

impl ParseStatus {
    /// Returns the status describing a parse result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intcheck_core::parse::strtoint::{parse_int, ParseStatus};
    /// assert_eq!(ParseStatus::of(&parse_int::<i16>("12")), ParseStatus::Ok);
    /// assert_eq!(ParseStatus::of(&parse_int::<i16>("1 2")), ParseStatus::SyntaxError);
    /// ```
    #[inline]
    pub fn of<T>(result: &Result<T, ParseIntError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => Self::from(*e),
        }
    }

    /// Returns `true` if the status is `Ok`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::SyntaxError => "SyntaxError",
            Self::RangeError => "RangeError",
        }
    }
}

impl core::fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error type for a failed parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseIntError {
    /// The text does not match `[sign] digit+` after blank stripping.
    Syntax,
    /// The text is well-formed but its value is outside the target range.
    Range,
}

impl core::fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Syntax => write!(f, "invalid digit or sign in integer text"),
            Self::Range => write!(f, "integer text out of range for target width"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseIntError {}

impl From<ParseIntError> for ParseStatus {
    #[inline]
    fn from(e: ParseIntError) -> Self {
        match e {
            ParseIntError::Syntax => Self::SyntaxError,
            ParseIntError::Range => Self::RangeError,
        }
    }
}

#[inline(always)]
fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Parses decimal text into a fixed-width signed integer.
///
/// # Errors
///
/// Returns `ParseIntError::Syntax` if the text is not of the form
/// `[sign] digit+` surrounded by optional spaces or tabs, and
/// `ParseIntError::Range` if the value does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::parse::strtoint::{parse_int, ParseIntError};
/// assert_eq!(parse_int::<i16>("  42  "), Ok(42));
/// assert_eq!(parse_int::<i16>("-32768"), Ok(i16::MIN));
/// assert_eq!(parse_int::<i16>("-32769"), Err(ParseIntError::Range));
/// assert_eq!(parse_int::<i16>("+"), Err(ParseIntError::Syntax));
/// assert_eq!(parse_int::<i64>(b"9223372036854775807"), Ok(i64::MAX));
/// ```
#[inline]
pub fn parse_int<T: FixedWidth>(text: impl AsRef<[u8]>) -> Result<T, ParseIntError> {
    parse_bytes(text.as_ref())
}

fn parse_bytes<T: FixedWidth>(bytes: &[u8]) -> Result<T, ParseIntError> {
    let start = bytes
        .iter()
        .position(|&b| !is_blank(b))
        .unwrap_or(bytes.len());
    let rest = &bytes[start..];

    let (negative, rest) = match rest.split_first() {
        Some((b'-', tail)) => (true, tail),
        Some((b'+', tail)) => (false, tail),
        _ => (false, rest),
    };

    let num_digits = rest
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if num_digits == 0 {
        return Err(ParseIntError::Syntax);
    }
    let (digits, trailer) = rest.split_at(num_digits);

    let ten = T::Magnitude::TEN;
    let mut magnitude = T::Magnitude::ZERO;
    for &byte in digits {
        let digit: T::Magnitude = (byte - b'0').into();
        magnitude = magnitude
            .checked_mul(&ten)
            .and_then(|m| m.checked_add(&digit))
            .filter(|m| *m <= T::MIN_MAGNITUDE)
            .ok_or(ParseIntError::Range)?;
    }

    if !trailer.iter().all(|&b| is_blank(b)) {
        return Err(ParseIntError::Syntax);
    }

    T::from_magnitude(magnitude, negative).ok_or(ParseIntError::Range)
}

/// Parses decimal text, returning the status together with the value.
///
/// The value is `0` whenever the status is not `ParseStatus::Ok`.
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::parse::strtoint::{strtoint, ParseStatus};
/// assert_eq!(strtoint::<i32>("\t-17"), (ParseStatus::Ok, -17));
/// assert_eq!(strtoint::<i16>("99999"), (ParseStatus::RangeError, 0));
/// assert_eq!(strtoint::<i64>(""), (ParseStatus::SyntaxError, 0));
/// ```
#[inline]
pub fn strtoint<T: FixedWidth>(text: impl AsRef<[u8]>) -> (ParseStatus, T) {
    match parse_int::<T>(text) {
        Ok(value) => (ParseStatus::Ok, value),
        Err(e) => (e.into(), T::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn syntax<T: FixedWidth>(text: &str) {
        assert_eq!(parse_int::<T>(text), Err(ParseIntError::Syntax), "{text:?}");
    }

    fn range<T: FixedWidth>(text: &str) {
        assert_eq!(parse_int::<T>(text), Err(ParseIntError::Range), "{text:?}");
    }

    #[test]
    fn test_accepts_plain_and_signed_digits() {
        assert_eq!(parse_int::<i16>("0"), Ok(0));
        assert_eq!(parse_int::<i16>("+0"), Ok(0));
        assert_eq!(parse_int::<i16>("-0"), Ok(0));
        assert_eq!(parse_int::<i16>("+123"), Ok(123));
        assert_eq!(parse_int::<i32>("-123"), Ok(-123));
        assert_eq!(parse_int::<i64>("1234567890123"), Ok(1_234_567_890_123));
    }

    #[test]
    fn test_accepts_leading_zeros() {
        assert_eq!(parse_int::<i16>("007"), Ok(7));
        assert_eq!(parse_int::<i16>("-0000000000000000000000032768"), Ok(i16::MIN));
        assert_eq!(parse_int::<i64>("000000000000000000009223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn test_strips_spaces_and_tabs() {
        assert_eq!(parse_int::<i16>("  42  "), Ok(42));
        assert_eq!(parse_int::<i16>("\t42\t"), Ok(42));
        assert_eq!(parse_int::<i32>(" \t -7 \t "), Ok(-7));
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in [
            "", " ", "\t\t", "+", "-", " - ", "12a", "a12", "--1", "+-1", "-+1", "++1",
            "1 2", "4 2", "- 1", "1-", "0x10", "1_000", "1,000", "1.0", "1e3", "\n1", "1\n",
            "\r1", "1\0", "\u{0663}", "\u{00a0}1", "\u{ff11}",
        ] {
            syntax::<i16>(text);
            syntax::<i32>(text);
            syntax::<i64>(text);
        }
    }

    #[test]
    fn test_rejects_embedded_nul_in_byte_span() {
        assert_eq!(parse_int::<i32>(b"12\x0034"), Err(ParseIntError::Syntax));
        assert_eq!(parse_int::<i32>(&b"12\x0034"[..2]), Ok(12));
    }

    #[test]
    fn test_i16_boundaries() {
        assert_eq!(parse_int::<i16>("32767"), Ok(i16::MAX));
        assert_eq!(parse_int::<i16>("-32768"), Ok(i16::MIN));
        range::<i16>("32768");
        range::<i16>("-32769");
        range::<i16>("99999");
        range::<i16>("65535");
        range::<i16>("65536");
        range::<i16>("-99999999999999999999999");
    }

    #[test]
    fn test_i32_boundaries() {
        assert_eq!(parse_int::<i32>("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_int::<i32>("-2147483648"), Ok(i32::MIN));
        range::<i32>("2147483648");
        range::<i32>("-2147483649");
        range::<i32>("4294967296");
    }

    #[test]
    fn test_i64_boundaries() {
        assert_eq!(parse_int::<i64>("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_int::<i64>("-9223372036854775808"), Ok(i64::MIN));
        range::<i64>("9223372036854775808");
        range::<i64>("-9223372036854775809");
        range::<i64>("18446744073709551615");
        range::<i64>("18446744073709551616");
    }

    #[test]
    fn test_range_error_reported_before_trailing_garbage() {
        range::<i16>("99999x");
        range::<i16>("32769 garbage");
        range::<i64>("99999999999999999999z");
        // Still within magnitude 2^(w-1) when the garbage is reached.
        syntax::<i16>("32768x");
        syntax::<i16>("-32768x");
    }

    fn assert_magnitude_limit<T: FixedWidth>() {
        let limit = format!("{:?}", T::MIN_MAGNITUDE);
        assert_eq!(parse_int::<T>(format!("-{limit}")), Ok(T::min_value()));
        range::<T>(&limit);
        range::<T>(&format!("{limit}0"));
        range::<T>(&format!("-{limit}0"));
        assert_eq!(strtoint::<T>(format!("+{limit}")), (ParseStatus::RangeError, T::ZERO));
    }

    #[test]
    fn test_magnitude_limit_every_width() {
        assert_magnitude_limit::<i16>();
        assert_magnitude_limit::<i32>();
        assert_magnitude_limit::<i64>();
    }

    #[test]
    fn test_i16_round_trip_every_value() {
        for v in i16::MIN..=i16::MAX {
            assert_eq!(parse_int::<i16>(v.to_string()), Ok(v));
        }
    }

    #[test]
    fn test_i32_i64_round_trip_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50_000 {
            let v = rng.gen::<i32>() >> rng.gen_range(0..32);
            assert_eq!(parse_int::<i32>(v.to_string()), Ok(v));
            let w = rng.gen::<i64>() >> rng.gen_range(0..64);
            assert_eq!(parse_int::<i64>(w.to_string()), Ok(w));
        }
        for v in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX] {
            assert_eq!(parse_int::<i32>(v.to_string()), Ok(v));
        }
        for v in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
            assert_eq!(parse_int::<i64>(v.to_string()), Ok(v));
        }
    }

    #[test]
    fn test_cross_width_consistency() {
        let mut rng = StdRng::seed_from_u64(0xc0ffee);
        for _ in 0..20_000 {
            let v = rng.gen::<i16>();
            let text = v.to_string();
            assert_eq!(parse_int::<i32>(&text), Ok(i32::from(v)));
            assert_eq!(parse_int::<i64>(&text), Ok(i64::from(v)));
        }
        let text = i32::MIN.to_string();
        range::<i16>(&text);
        assert_eq!(parse_int::<i64>(&text), Ok(i64::from(i32::MIN)));
    }

    #[test]
    fn test_strtoint_tuple_shape() {
        assert_eq!(strtoint::<i16>("  42  "), (ParseStatus::Ok, 42));
        assert_eq!(strtoint::<i16>("12a"), (ParseStatus::SyntaxError, 0));
        assert_eq!(strtoint::<i16>("-32769"), (ParseStatus::RangeError, 0));
        assert_eq!(strtoint::<i64>("-9223372036854775808"), (ParseStatus::Ok, i64::MIN));
    }

    #[test]
    fn test_parse_is_idempotent() {
        for text in ["17", "-32768", "x", "99999"] {
            assert_eq!(parse_int::<i16>(text), parse_int::<i16>(text));
        }
    }

    #[test]
    fn test_status_and_error_display() {
        assert_eq!(ParseStatus::from(ParseIntError::Syntax), ParseStatus::SyntaxError);
        assert_eq!(ParseStatus::from(ParseIntError::Range), ParseStatus::RangeError);
        assert!(ParseStatus::Ok.is_ok());
        assert!(!ParseStatus::RangeError.is_ok());
        assert_eq!(ParseStatus::RangeError.to_string(), "RangeError");
        assert_eq!(
            ParseIntError::Range.to_string(),
            "integer text out of range for target width"
        );
    }
}
