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

//! # Fixed-Width Signed Integers
//!
//! `FixedWidth` collects everything width-generic code needs to know about
//! one of the supported signed integer types (`i16`, `i32`, `i64`): its bit
//! count, the unsigned type of equal width used to hold magnitudes, and the
//! asymmetric magnitude bounds of two's complement.
//!
//! The representable range of a width `w` is exactly `[-2^(w-1), 2^(w-1) - 1]`,
//! so the largest negative magnitude (`MIN_MAGNITUDE`) is one greater than the
//! largest positive magnitude (`MAX_MAGNITUDE`). `from_magnitude` is the single
//! place where a magnitude and a sign are turned back into a value.
//!
//! `i8`, `i128`, and `isize` are intentionally not supported.

use crate::num::{
    constants::{Ten, Zero},
    ops::overflowing_arithmetic::{OverflowingAddVal, OverflowingMulVal, OverflowingSubVal},
};
use num_traits::{AsPrimitive, CheckedAdd, CheckedMul, PrimInt, Signed, Unsigned};

/// A signed integer type of one of the supported widths (16, 32, or 64 bits).
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::num::width::FixedWidth;
/// assert_eq!(<i16 as FixedWidth>::MIN_MAGNITUDE, 32768u16);
/// assert_eq!(<i16 as FixedWidth>::MAX_MAGNITUDE, 32767u16);
///
/// assert_eq!(i16::from_magnitude(32768, true), Some(i16::MIN));
/// assert_eq!(i16::from_magnitude(32768, false), None);
/// ```
pub trait FixedWidth:
    PrimInt
    + Signed
    + Zero
    + OverflowingAddVal
    + OverflowingSubVal
    + OverflowingMulVal
    + core::fmt::Debug
    + core::fmt::Display
    + Send
    + Sync
    + 'static
{
    /// The unsigned type of equal width, wide enough for every magnitude
    /// up to and including `MIN_MAGNITUDE`.
    type Magnitude: PrimInt
        + Unsigned
        + CheckedAdd
        + CheckedMul
        + Zero
        + Ten
        + From<u8>
        + AsPrimitive<Self>
        + core::fmt::Debug;

    /// The number of bits of the type.
    const BITS: u32;

    /// The magnitude of the minimum value, `2^(BITS - 1)`.
    const MIN_MAGNITUDE: Self::Magnitude;

    /// The magnitude of the maximum value, `2^(BITS - 1) - 1`.
    const MAX_MAGNITUDE: Self::Magnitude;

    /// Applies a sign to a magnitude, returning `None` if the signed result
    /// is not representable.
    ///
    /// A negative magnitude of exactly `MIN_MAGNITUDE` maps to the minimum
    /// value directly, since it has no positive counterpart to negate.
    #[inline]
    fn from_magnitude(magnitude: Self::Magnitude, negative: bool) -> Option<Self> {
        if negative {
            if magnitude == Self::MIN_MAGNITUDE {
                Some(Self::min_value())
            } else if magnitude < Self::MIN_MAGNITUDE {
                let positive: Self = magnitude.as_();
                Some(-positive)
            } else {
                None
            }
        } else if magnitude <= Self::MAX_MAGNITUDE {
            Some(magnitude.as_())
        } else {
            None
        }
    }
}

macro_rules! impl_fixed_width {
    ($t:ty, $magnitude:ty) => {
        impl FixedWidth for $t {
            type Magnitude = $magnitude;

            const BITS: u32 = <$t>::BITS;
            const MIN_MAGNITUDE: $magnitude = <$t>::MIN.unsigned_abs();
            const MAX_MAGNITUDE: $magnitude = <$t>::MAX as $magnitude;
        }
    };
}

impl_fixed_width!(i16, u16);
impl_fixed_width!(i32, u32);
impl_fixed_width!(i64, u64);
