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

//! # Intcheck FFI
//!
//! **C-Compatible Bindings for the Intcheck Overflow and Parsing Primitives.**
//!
//! This crate is the adaptation layer between host environments (C, C++, database
//! extensions, language runtimes) and the pure Rust core. The core works on native
//! fixed-width integers and byte spans; this crate marshals host values into those
//! types and turns the core's discriminated results into host-facing shapes.
//!
//! ## Core Design Principles
//!
//! 1.  **Plain Values**: Integers cross the boundary by value. Every arithmetic
//!     entry point is a boolean predicate ("did this overflow?"), optionally
//!     writing the exact result through an out-pointer.
//! 2.  **Discriminated Parsing**: Text parsing returns a `#[repr(C)]` status that
//!     keeps syntax errors and range errors apart, so hosts can phrase distinct
//!     diagnostics.
//! 3.  **Owned Diagnostics**: Human-readable messages naming the offending text and
//!     the host type (`smallint`, `integer`, `bigint`) are returned as heap-allocated
//!     C strings that the host releases with `intcheck_diagnostic_free`.
//! 4.  **Fail-Fast Safety**: Passing `NULL` where a pointer is required results in
//!     an immediate panic naming the called function rather than undefined behavior.

pub mod arith;
pub mod diagnostic;
pub mod parse;
