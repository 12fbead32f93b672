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

//! # Intcheck Core
//!
//! Overflow-aware integer primitives for numeric processing layers that work
//! on bounded signed integers and accept untrusted text. Every operation is a
//! pure, allocation-free function over `i16`, `i32`, or `i64`, and every
//! failure is reported as a value rather than a panic.
//!
//! ## Modules
//!
//! - `num`: Width abstraction (`FixedWidth`), associated constant traits
//!   (`Zero`, `Ten`), and by-value overflowing arithmetic
//!   traits (`OverflowingAddVal`, `OverflowingSubVal`, `OverflowingMulVal`)
//!   together with `Option`-returning `checked_add`/`checked_sub`/`checked_mul`.
//! - `parse`: Strict, locale-independent decimal parsing (`parse_int`,
//!   `strtoint`) distinguishing syntax errors from range errors.
//!
//! ## Example
//!
//! ```rust
//! use intcheck_core::num::ops::overflowing_arithmetic::{checked_mul, OverflowingAddVal};
//! use intcheck_core::parse::strtoint::{parse_int, ParseIntError};
//!
//! assert_eq!(i16::MAX.overflowing_add_val(1), (i16::MIN, true));
//! assert_eq!(checked_mul(-1i64, i64::MIN), None);
//!
//! assert_eq!(parse_int::<i16>("  -32768 "), Ok(i16::MIN));
//! assert_eq!(parse_int::<i16>("32768"), Err(ParseIntError::Range));
//! assert_eq!(parse_int::<i32>("12a"), Err(ParseIntError::Syntax));
//! ```
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for the parse error type.
//!   Without it the crate is `no_std`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod num;
pub mod parse;
