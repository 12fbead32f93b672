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

//! # Numeric Foundations
//!
//! Traits and utilities for fixed-width signed integers. This module groups
//! the width abstraction, compile-time constants, and overflow-detecting
//! arithmetic that reports whether the exact result fits the operand width.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Zero`, `Ten`)
//!   implemented for the supported widths.
//! - `width`: The `FixedWidth` trait tying `i16`, `i32`, and `i64` to their
//!   unsigned magnitude type and its two's-complement magnitude bounds.
//! - `ops`: By-value overflowing arithmetic traits (add, sub, mul) returning
//!   `(wrapped, overflowed)`, plus `Option`-returning checked wrappers.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod ops;
pub mod width;
