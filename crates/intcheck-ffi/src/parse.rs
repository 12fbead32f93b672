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

//! # Foreign Function Interface for Integer Parsing
//!
//! Parses NUL-terminated C strings into 16-, 32-, or 64-bit integers. The
//! bytes before the terminator are handed to the core parser unchanged, so
//! the accepted grammar is exactly the core's: optional spaces or tabs, an
//! optional single sign, one or more ASCII digits, optional spaces or tabs.
//!
//! ## Exported API
//!
//! * `intcheck_string_to_int16`
//! * `intcheck_string_to_int32`
//! * `intcheck_string_to_int64`
//!
//! ## Data Structures
//!
//! * `FfiParseStatus`
//! * `FfiIntegerType`

use intcheck_core::{
    num::width::FixedWidth,
    parse::strtoint::{strtoint, ParseStatus},
};
use libc::c_char;
use std::ffi::CStr;

/// FFI-compatible enum for the outcome of a parse.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiParseStatus {
    Ok = 0,
    SyntaxError = 1,
    RangeError = 2,
}

impl FfiParseStatus {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::SyntaxError => "SyntaxError",
            Self::RangeError => "RangeError",
        }
    }
}

impl From<ParseStatus> for FfiParseStatus {
    #[inline]
    fn from(status: ParseStatus) -> Self {
        match status {
            ParseStatus::Ok => FfiParseStatus::Ok,
            ParseStatus::SyntaxError => FfiParseStatus::SyntaxError,
            ParseStatus::RangeError => FfiParseStatus::RangeError,
        }
    }
}

impl std::fmt::Display for FfiParseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// FFI-compatible enum selecting the target integer width by its host type.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiIntegerType {
    /// 16-bit signed integer.
    SmallInt = 0,
    /// 32-bit signed integer.
    Integer = 1,
    /// 64-bit signed integer.
    BigInt = 2,
}

impl FfiIntegerType {
    /// Returns the host-facing type name used in diagnostics.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SmallInt => "smallint",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
        }
    }
}

impl std::fmt::Display for FfiIntegerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A native integer type with a host-facing counterpart.
pub trait HostInteger: FixedWidth {
    /// The host type this width is exposed as.
    const HOST_TYPE: FfiIntegerType;
}

impl HostInteger for i16 {
    const HOST_TYPE: FfiIntegerType = FfiIntegerType::SmallInt;
}

impl HostInteger for i32 {
    const HOST_TYPE: FfiIntegerType = FfiIntegerType::Integer;
}

impl HostInteger for i64 {
    const HOST_TYPE: FfiIntegerType = FfiIntegerType::BigInt;
}

#[inline]
unsafe fn string_to_int<T: HostInteger>(
    fn_name: &str,
    text: *const c_char,
    out_value: *mut T,
) -> FfiParseStatus {
    assert!(!text.is_null(), "called `{}` with null text pointer", fn_name);
    assert!(
        !out_value.is_null(),
        "called `{}` with null output pointer",
        fn_name
    );

    let (status, value) = strtoint::<T>(CStr::from_ptr(text).to_bytes());
    if status.is_ok() {
        *out_value = value;
    }
    status.into()
}

/// Parses a C string as a 16-bit integer (`smallint`).
///
/// On `FfiParseStatus::Ok` the value is written to `out_value`; otherwise
/// `out_value` is left untouched.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// The caller must ensure that `text` points to a valid NUL-terminated
/// string and that `out_value` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn intcheck_string_to_int16(
    text: *const c_char,
    out_value: *mut i16,
) -> FfiParseStatus {
    string_to_int("intcheck_string_to_int16", text, out_value)
}

/// Parses a C string as a 32-bit integer (`integer`).
///
/// On `FfiParseStatus::Ok` the value is written to `out_value`; otherwise
/// `out_value` is left untouched.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// The caller must ensure that `text` points to a valid NUL-terminated
/// string and that `out_value` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn intcheck_string_to_int32(
    text: *const c_char,
    out_value: *mut i32,
) -> FfiParseStatus {
    string_to_int("intcheck_string_to_int32", text, out_value)
}

/// Parses a C string as a 64-bit integer (`bigint`).
///
/// On `FfiParseStatus::Ok` the value is written to `out_value`; otherwise
/// `out_value` is left untouched.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// The caller must ensure that `text` points to a valid NUL-terminated
/// string and that `out_value` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn intcheck_string_to_int64(
    text: *const c_char,
    out_value: *mut i64,
) -> FfiParseStatus {
    string_to_int("intcheck_string_to_int64", text, out_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn parse16(text: &str, out: &mut i16) -> FfiParseStatus {
        let text = CString::new(text).unwrap();
        unsafe { intcheck_string_to_int16(text.as_ptr(), out) }
    }

    fn parse32(text: &str, out: &mut i32) -> FfiParseStatus {
        let text = CString::new(text).unwrap();
        unsafe { intcheck_string_to_int32(text.as_ptr(), out) }
    }

    fn parse64(text: &str, out: &mut i64) -> FfiParseStatus {
        let text = CString::new(text).unwrap();
        unsafe { intcheck_string_to_int64(text.as_ptr(), out) }
    }

    #[test]
    fn test_string_to_int16() {
        let mut out = 0i16;
        assert_eq!(parse16("  42  ", &mut out), FfiParseStatus::Ok);
        assert_eq!(out, 42);
        assert_eq!(parse16("-32768", &mut out), FfiParseStatus::Ok);
        assert_eq!(out, i16::MIN);

        assert_eq!(parse16("99999", &mut out), FfiParseStatus::RangeError);
        assert_eq!(parse16("-32769", &mut out), FfiParseStatus::RangeError);
        assert_eq!(parse16("12a", &mut out), FfiParseStatus::SyntaxError);
        assert_eq!(parse16("", &mut out), FfiParseStatus::SyntaxError);
        assert_eq!(parse16("+", &mut out), FfiParseStatus::SyntaxError);
        assert_eq!(out, i16::MIN);
    }

    #[test]
    fn test_string_to_int32_and_int64() {
        let mut out32 = 0i32;
        let mut out64 = 0i64;

        assert_eq!(parse32("-2147483648", &mut out32), FfiParseStatus::Ok);
        assert_eq!(parse32("2147483648", &mut out32), FfiParseStatus::RangeError);
        assert_eq!(out32, i32::MIN);

        assert_eq!(parse64("2147483648", &mut out64), FfiParseStatus::Ok);
        assert_eq!(parse64("\t-9223372036854775808\t", &mut out64), FfiParseStatus::Ok);
        assert_eq!(out64, i64::MIN);
        assert_eq!(parse64("9223372036854775808", &mut out64), FfiParseStatus::RangeError);
        assert_eq!(parse64("--1", &mut out64), FfiParseStatus::SyntaxError);
        assert_eq!(out64, i64::MIN);
    }

    #[test]
    fn test_host_types() {
        assert_eq!(<i16 as HostInteger>::HOST_TYPE, FfiIntegerType::SmallInt);
        assert_eq!(<i64 as HostInteger>::HOST_TYPE.type_name(), "bigint");
        assert_eq!(<i32 as HostInteger>::HOST_TYPE, FfiIntegerType::Integer);
        assert_eq!(FfiIntegerType::SmallInt.to_string(), "smallint");
        assert_eq!(FfiParseStatus::from(ParseStatus::RangeError).as_str(), "RangeError");
    }
}
