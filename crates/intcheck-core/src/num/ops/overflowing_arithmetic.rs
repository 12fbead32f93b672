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

use core::ops::{Add, Mul, Sub};
use num_traits::{AsPrimitive, PrimInt};

/// A trait for types that support overflow-detecting addition by value.
///
/// Returns the two's-complement wrapped sum together with a flag that is
/// `true` exactly when the mathematical sum is not representable in `Self`.
/// The wrapped value carries no meaning when the flag is set.
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::num::ops::overflowing_arithmetic::OverflowingAddVal;
/// assert_eq!(30000i16.overflowing_add_val(2767), (32767, false));
/// assert_eq!(i16::MAX.overflowing_add_val(1).1, true); // Overflow occurs
/// assert_eq!(i64::MIN.overflowing_add_val(i64::MIN).1, true);
/// ```
pub trait OverflowingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs addition by value, returning `(wrapped, overflowed)`.
    fn overflowing_add_val(self, v: Self) -> (Self, bool);
}

/// A trait for types that support overflow-detecting subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::num::ops::overflowing_arithmetic::OverflowingSubVal;
/// assert_eq!(0i32.overflowing_sub_val(i32::MAX), (-i32::MAX, false));
/// assert_eq!(0i32.overflowing_sub_val(i32::MIN).1, true); // -MIN is not representable
/// assert_eq!(i64::MIN.overflowing_sub_val(1).1, true);
/// ```
pub trait OverflowingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs subtraction by value, returning `(wrapped, overflowed)`.
    fn overflowing_sub_val(self, v: Self) -> (Self, bool);
}

/// A trait for types that support overflow-detecting multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::num::ops::overflowing_arithmetic::OverflowingMulVal;
/// assert_eq!((-1i16).overflowing_mul_val(-1), (1, false));
/// assert_eq!(i16::MIN.overflowing_mul_val(-1).1, true); // 2^15 is one past MAX
/// assert_eq!(0i64.overflowing_mul_val(i64::MIN), (0, false));
/// ```
pub trait OverflowingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs multiplication by value, returning `(wrapped, overflowed)`.
    fn overflowing_mul_val(self, v: Self) -> (Self, bool);
}

/// Truncates an exact result computed in a wider type `W` back to `N`,
/// flagging whether it fell outside the range of `N`.
#[inline(always)]
fn narrow<N, W>(exact: W) -> (N, bool)
where
    N: PrimInt + Into<W> + 'static,
    W: PrimInt + AsPrimitive<N>,
{
    let overflowed = exact < N::min_value().into() || exact > N::max_value().into();
    (exact.as_(), overflowed)
}

macro_rules! overflowing_widening_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $wide:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> ($t, bool) {
                narrow::<$t, $wide>(<$wide>::from(self) $op <$wide>::from(v))
            }
        }
    };
}

overflowing_widening_impl_val!(OverflowingAddVal, overflowing_add_val, i16, i32, +);
overflowing_widening_impl_val!(OverflowingSubVal, overflowing_sub_val, i16, i32, -);
overflowing_widening_impl_val!(OverflowingMulVal, overflowing_mul_val, i16, i32, *);

overflowing_widening_impl_val!(OverflowingAddVal, overflowing_add_val, i32, i64, +);
overflowing_widening_impl_val!(OverflowingSubVal, overflowing_sub_val, i32, i64, -);
overflowing_widening_impl_val!(OverflowingMulVal, overflowing_mul_val, i32, i64, *);

// The 64-bit width is the widest supported type, so every check below is
// phrased against the bounds instead of an exact wider result.

impl OverflowingAddVal for i64 {
    #[inline(always)]
    fn overflowing_add_val(self, v: i64) -> (i64, bool) {
        let overflowed = (v > 0 && self > i64::MAX - v) || (v < 0 && self < i64::MIN - v);
        (self.wrapping_add(v), overflowed)
    }
}

impl OverflowingSubVal for i64 {
    #[inline(always)]
    fn overflowing_sub_val(self, v: i64) -> (i64, bool) {
        let overflowed = (v < 0 && self > i64::MAX + v) || (v > 0 && self < i64::MIN + v);
        (self.wrapping_sub(v), overflowed)
    }
}

impl OverflowingMulVal for i64 {
    #[inline(always)]
    fn overflowing_mul_val(self, v: i64) -> (i64, bool) {
        let product = self.wrapping_mul(v);
        if self == 0 || v == 0 {
            return (product, false);
        }

        // Divisors are never zero and never -1 with a MIN dividend.
        let overflowed = match (self > 0, v > 0) {
            (true, true) => self > i64::MAX / v,
            (true, false) => v < i64::MIN / self,
            (false, true) => self < i64::MIN / v,
            (false, false) => self < i64::MAX / v,
        };
        (product, overflowed)
    }
}

/// Checked addition: `None` if the sum overflows.
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::num::ops::overflowing_arithmetic::checked_add;
/// assert_eq!(checked_add(i32::MAX - 1, 1), Some(i32::MAX));
/// assert_eq!(checked_add(i32::MAX, 1), None);
/// ```
#[inline]
pub fn checked_add<T: OverflowingAddVal>(a: T, b: T) -> Option<T> {
    match a.overflowing_add_val(b) {
        (sum, false) => Some(sum),
        (_, true) => None,
    }
}

/// Checked subtraction: `None` if the difference overflows.
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::num::ops::overflowing_arithmetic::checked_sub;
/// assert_eq!(checked_sub(-1i16, i16::MAX), Some(i16::MIN));
/// assert_eq!(checked_sub(i16::MIN, 1), None);
/// ```
#[inline]
pub fn checked_sub<T: OverflowingSubVal>(a: T, b: T) -> Option<T> {
    match a.overflowing_sub_val(b) {
        (difference, false) => Some(difference),
        (_, true) => None,
    }
}

/// Checked multiplication: `None` if the product overflows.
///
/// # Examples
///
/// ```rust
/// # use intcheck_core::num::ops::overflowing_arithmetic::checked_mul;
/// assert_eq!(checked_mul(-1i64, -1), Some(1));
/// assert_eq!(checked_mul(i64::MIN, -1), None);
/// ```
#[inline]
pub fn checked_mul<T: OverflowingMulVal>(a: T, b: T) -> Option<T> {
    match a.overflowing_mul_val(b) {
        (product, false) => Some(product),
        (_, true) => None,
    }
}
