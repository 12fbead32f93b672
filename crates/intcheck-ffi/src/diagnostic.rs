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

//! Host-facing parse diagnostics.
//!
//! The core reports only *which* kind of parse failure happened. This module
//! attaches the offending input and the host type name and renders the two
//! messages hosts show to users:
//!
//! * `value "<input>" is out of range for type <type>`
//! * `invalid input syntax for type <type>: "<input>"`
//!
//! `intcheck_parse_diagnostic` exposes the rendered message to C callers as
//! an owned string released with `intcheck_diagnostic_free`.

use crate::parse::{FfiIntegerType, HostInteger};
use intcheck_core::parse::strtoint::{parse_int, ParseIntError};
use libc::c_char;
use std::ffi::{CStr, CString};

/// A parse failure with the context needed to report it to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntegerError {
    /// The text that failed to parse, lossily decoded as UTF-8.
    pub input: String,
    /// The host name of the target type (e.g., "smallint").
    pub type_name: &'static str,
    /// The kind of failure reported by the core parser.
    pub kind: ParseIntError,
}

impl ParseIntegerError {
    #[inline]
    pub fn new(input: &[u8], integer_type: FfiIntegerType, kind: ParseIntError) -> Self {
        Self {
            input: String::from_utf8_lossy(input).into_owned(),
            type_name: integer_type.type_name(),
            kind,
        }
    }
}

impl std::fmt::Display for ParseIntegerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ParseIntError::Range => write!(
                f,
                "value \"{}\" is out of range for type {}",
                self.input, self.type_name
            ),
            ParseIntError::Syntax => write!(
                f,
                "invalid input syntax for type {}: \"{}\"",
                self.type_name, self.input
            ),
        }
    }
}

impl std::error::Error for ParseIntegerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Parses host text into `T`, attaching diagnostic context on failure.
///
/// # Examples
///
/// ```rust
/// # use intcheck_ffi::diagnostic::parse_host;
/// assert_eq!(parse_host::<i32>(b" 7 "), Ok(7));
///
/// let err = parse_host::<i16>(b"40000").unwrap_err();
/// assert_eq!(err.to_string(), "value \"40000\" is out of range for type smallint");
/// ```
#[inline]
pub fn parse_host<T: HostInteger>(input: &[u8]) -> Result<T, ParseIntegerError> {
    parse_int::<T>(input).map_err(|kind| ParseIntegerError::new(input, T::HOST_TYPE, kind))
}

/// Parses host text at the width selected by `integer_type`, widening the
/// result to `i64`.
#[inline]
pub fn parse_host_as(input: &[u8], integer_type: FfiIntegerType) -> Result<i64, ParseIntegerError> {
    match integer_type {
        FfiIntegerType::SmallInt => parse_host::<i16>(input).map(i64::from),
        FfiIntegerType::Integer => parse_host::<i32>(input).map(i64::from),
        FfiIntegerType::BigInt => parse_host::<i64>(input),
    }
}

/// Parses `text` as `integer_type` and returns a diagnostic message if it fails.
///
/// Returns a null pointer when the text parses successfully. A non-null result
/// is owned by the caller and must be released with `intcheck_diagnostic_free`.
///
/// # Panics
///
/// This function will panic if called with a null pointer, or if the
/// message cannot be converted into a C string.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `text` points to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn intcheck_parse_diagnostic(
    text: *const c_char,
    integer_type: FfiIntegerType,
) -> *mut c_char {
    assert!(
        !text.is_null(),
        "called `intcheck_parse_diagnostic` with null pointer"
    );

    match parse_host_as(CStr::from_ptr(text).to_bytes(), integer_type) {
        Ok(_) => std::ptr::null_mut(),
        Err(e) => CString::new(e.to_string())
            .expect("`CString::new` should create valid C string")
            .into_raw(),
    }
}

/// Frees a diagnostic string returned by `intcheck_parse_diagnostic`.
///
/// # Safety
///
/// This function is unsafe because it takes ownership of a raw pointer.
/// The caller must ensure that the pointer was returned by
/// `intcheck_parse_diagnostic` and has not been freed already.
#[no_mangle]
pub unsafe extern "C" fn intcheck_diagnostic_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    unsafe fn diagnostic(text: &str, integer_type: FfiIntegerType) -> Option<String> {
        let text = CString::new(text).unwrap();
        let ptr = intcheck_parse_diagnostic(text.as_ptr(), integer_type);
        if ptr.is_null() {
            return None;
        }
        let message = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        intcheck_diagnostic_free(ptr);
        Some(message)
    }

    #[test]
    fn test_range_message_names_input_and_type() {
        let err = parse_host::<i16>(b"99999").unwrap_err();
        assert_eq!(err.kind, ParseIntError::Range);
        assert_eq!(err.to_string(), "value \"99999\" is out of range for type smallint");

        let err = parse_host::<i64>(b"9223372036854775808").unwrap_err();
        assert_eq!(
            err.to_string(),
            "value \"9223372036854775808\" is out of range for type bigint"
        );
    }

    #[test]
    fn test_syntax_message_names_type_and_input() {
        let err = parse_host::<i32>(b"12a").unwrap_err();
        assert_eq!(err.to_string(), "invalid input syntax for type integer: \"12a\"");

        let err = parse_host::<i16>(b"").unwrap_err();
        assert_eq!(err.to_string(), "invalid input syntax for type smallint: \"\"");
    }

    #[test]
    fn test_source_is_core_error() {
        let err = parse_host::<i16>(b"+").unwrap_err();
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), ParseIntError::Syntax.to_string());
    }

    #[test]
    fn test_parse_host_as_widens() {
        assert_eq!(parse_host_as(b"-32768", FfiIntegerType::SmallInt), Ok(-32768));
        assert_eq!(parse_host_as(b"-32769", FfiIntegerType::Integer), Ok(-32769));
        assert_eq!(
            parse_host_as(b"-32769", FfiIntegerType::SmallInt).map_err(|e| e.kind),
            Err(ParseIntError::Range)
        );
    }

    #[test]
    fn test_parse_diagnostic_c_api() {
        unsafe {
            assert_eq!(diagnostic(" 17 ", FfiIntegerType::SmallInt), None);
            assert_eq!(
                diagnostic("-32769", FfiIntegerType::SmallInt).as_deref(),
                Some("value \"-32769\" is out of range for type smallint")
            );
            assert_eq!(
                diagnostic("1 2", FfiIntegerType::BigInt).as_deref(),
                Some("invalid input syntax for type bigint: \"1 2\"")
            );
        }
    }

    #[test]
    fn test_parse_diagnostic_present_for_every_failure() {
        let types = [
            FfiIntegerType::SmallInt,
            FfiIntegerType::Integer,
            FfiIntegerType::BigInt,
        ];
        for integer_type in types {
            for text in ["", "+", "12a", "99999999999999999999", "-99999999999999999999"] {
                let message = unsafe { diagnostic(text, integer_type) };
                let message = message.unwrap_or_else(|| panic!("no diagnostic for {text:?}"));
                assert!(message.contains(integer_type.type_name()), "{message}");
                assert!(message.contains(&format!("\"{text}\"")), "{message}");
            }
        }
    }

    #[test]
    fn test_free_accepts_null() {
        unsafe { intcheck_diagnostic_free(std::ptr::null_mut()) };
    }
}
