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

//! Sentinel constants for the fixed-width integer types used by the parser
//! and the arithmetic helpers.

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that have a constant representing 10,
/// the radix of decimal text.
pub trait Ten {
    /// The constant representing 10 for the implementing type.
    const TEN: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                const $const_name: Self = $value;
            }
        )+
    };
}

impl_const_for!(Zero, ZERO, 0, i16, u16, i32, u32, i64, u64);
impl_const_for!(Ten, TEN, 10, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal_shift<T: Zero + Ten + core::ops::Mul<Output = T> + core::ops::Add<Output = T>>(
        value: T,
        digit: T,
    ) -> T {
        T::ZERO + value * T::TEN + digit
    }

    #[test]
    fn test_signed_zero() {
        assert_eq!(<i16 as Zero>::ZERO, 0);
        assert_eq!(<i32 as Zero>::ZERO, 0);
        assert_eq!(<i64 as Zero>::ZERO, 0);
    }

    #[test]
    fn test_unsigned_radix_constant() {
        assert_eq!(decimal_shift(12u16, 3), 123);
        assert_eq!(decimal_shift(12u32, 3), 123);
        assert_eq!(decimal_shift(12u64, 3), 123);
    }
}
