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

/// A trait exposing compile-time family markers for numeric scalar types.
///
/// The markers let generic code distinguish the scalar families whose
/// arithmetic edge cases differ: unsigned integers wrap around on
/// subtraction below zero, and floating-point types round. Both constants
/// are `false` for signed integers.
pub trait ScalarKind {
    /// `true` for floating-point implementations.
    const IS_FLOAT: bool;
    /// `true` for unsigned integer implementations.
    const IS_UNSIGNED: bool;
}

macro_rules! impl_kind_for {
    ($t:ty, $float:expr, $unsigned:expr) => {
        impl ScalarKind for $t {
            const IS_FLOAT: bool = $float;
            const IS_UNSIGNED: bool = $unsigned;
        }
    };
}

macro_rules! impl_signed_kind_for {
    ($t:ty) => {
        impl_kind_for!($t, false, false);
    };
}

macro_rules! impl_unsigned_kind_for {
    ($t:ty) => {
        impl_kind_for!($t, false, true);
    };
}

macro_rules! impl_float_kind_for {
    ($t:ty) => {
        impl_kind_for!($t, true, false);
    };
}

impl_signed_kind_for!(i8);
impl_signed_kind_for!(i16);
impl_signed_kind_for!(i32);
impl_signed_kind_for!(i64);
impl_signed_kind_for!(i128);
impl_signed_kind_for!(isize);

impl_unsigned_kind_for!(u8);
impl_unsigned_kind_for!(u16);
impl_unsigned_kind_for!(u32);
impl_unsigned_kind_for!(u64);
impl_unsigned_kind_for!(u128);
impl_unsigned_kind_for!(usize);

impl_float_kind_for!(f32);
impl_float_kind_for!(f64);
