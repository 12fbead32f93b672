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

//! # Foreign Function Interface for Overflow-Checked Arithmetic
//!
//! Boolean predicates reporting whether `a OP b` overflows the operand width,
//! for `OP` in {add, sub, mul} and widths 16, 32, and 64 bits.
//!
//! ## Exported API
//!
//! ### Predicates
//! * `intcheck_{add,sub,mul}_int16_overflow`
//! * `intcheck_{add,sub,mul}_int32_overflow`
//! * `intcheck_{add,sub,mul}_int64_overflow`
//!
//! ### With result
//! * `intcheck_{add,sub,mul}_int16`
//! * `intcheck_{add,sub,mul}_int32`
//! * `intcheck_{add,sub,mul}_int64`
//!
//! The `_overflow` predicates discard the numeric result. The result-writing
//! variants store it only when no overflow occurred and leave the target
//! untouched otherwise, so hosts never observe a wrapped value.

use intcheck_core::num::ops::overflowing_arithmetic::{
    OverflowingAddVal, OverflowingMulVal, OverflowingSubVal,
};

macro_rules! overflow_predicate {
    ($name:ident, $t:ty, $method:ident, $op:literal) => {
        #[doc = concat!("Returns `true` if `a ", $op, " b` overflows `", stringify!($t), "`.")]
        #[no_mangle]
        pub extern "C" fn $name(a: $t, b: $t) -> bool {
            a.$method(b).1
        }
    };
}

macro_rules! overflow_with_result {
    ($name:ident, $t:ty, $method:ident, $op:literal) => {
        #[doc = concat!("Computes `a ", $op, " b` in `", stringify!($t), "`, writing it to `result` ")]
        #[doc = "unless the operation overflows. Returns `true` on overflow."]
        ///
        /// # Panics
        ///
        /// This function will panic if called with a null pointer.
        ///
        /// # Safety
        ///
        /// This function is unsafe because it dereferences a raw pointer.
        /// The caller must ensure that `result` is valid for writes.
        #[no_mangle]
        pub unsafe extern "C" fn $name(a: $t, b: $t, result: *mut $t) -> bool {
            assert!(
                !result.is_null(),
                concat!("called `", stringify!($name), "` with null pointer")
            );

            let (value, overflowed) = a.$method(b);
            if !overflowed {
                *result = value;
            }
            overflowed
        }
    };
}

overflow_predicate!(intcheck_add_int16_overflow, i16, overflowing_add_val, "+");
overflow_predicate!(intcheck_sub_int16_overflow, i16, overflowing_sub_val, "-");
overflow_predicate!(intcheck_mul_int16_overflow, i16, overflowing_mul_val, "*");

overflow_predicate!(intcheck_add_int32_overflow, i32, overflowing_add_val, "+");
overflow_predicate!(intcheck_sub_int32_overflow, i32, overflowing_sub_val, "-");
overflow_predicate!(intcheck_mul_int32_overflow, i32, overflowing_mul_val, "*");

overflow_predicate!(intcheck_add_int64_overflow, i64, overflowing_add_val, "+");
overflow_predicate!(intcheck_sub_int64_overflow, i64, overflowing_sub_val, "-");
overflow_predicate!(intcheck_mul_int64_overflow, i64, overflowing_mul_val, "*");

overflow_with_result!(intcheck_add_int16, i16, overflowing_add_val, "+");
overflow_with_result!(intcheck_sub_int16, i16, overflowing_sub_val, "-");
overflow_with_result!(intcheck_mul_int16, i16, overflowing_mul_val, "*");

overflow_with_result!(intcheck_add_int32, i32, overflowing_add_val, "+");
overflow_with_result!(intcheck_sub_int32, i32, overflowing_sub_val, "-");
overflow_with_result!(intcheck_mul_int32, i32, overflowing_mul_val, "*");

overflow_with_result!(intcheck_add_int64, i64, overflowing_add_val, "+");
overflow_with_result!(intcheck_sub_int64, i64, overflowing_sub_val, "-");
overflow_with_result!(intcheck_mul_int64, i64, overflowing_mul_val, "*");
