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

//! # Numeric Operations Traits
//!
//! By-value overflow-detecting arithmetic for the supported signed widths.
//!
//! ## Submodules
//!
//! - `overflowing_arithmetic`: Traits `OverflowingAddVal`, `OverflowingSubVal`,
//!   `OverflowingMulVal` returning the wrapped result together with an
//!   overflow flag, and free functions `checked_add`, `checked_sub`,
//!   `checked_mul` returning `Option<T>`.
//!
//! The 16- and 32-bit widths compute the exact result in the next wider
//! native type. The 64-bit width decides overflow by sign-based bounds
//! analysis so that no 128-bit intermediate is required.

pub mod overflowing_arithmetic;
