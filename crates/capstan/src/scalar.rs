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

//! # Range Scalar Trait
//!
//! Unified numeric bounds for the range operations. `RangeScalar` specifies
//! the scalar capabilities the algorithms require: ordering, by-value
//! arithmetic via `num_traits::Num`, value semantics, text rendering, and
//! the `ScalarKind` family markers from `capstan_core`.
//!
//! ## Motivation
//!
//! The range algorithms are one implementation regardless of scalar width.
//! Collecting the necessary bounds into a single alias keeps the operation
//! signatures readable and guarantees that every operation agrees on what a
//! scalar can do.
//!
//! ## Highlights
//!
//! - Requires `num_traits::Num` for zero and by-value `+`/`-`.
//! - Requires `PartialOrd` rather than `Ord` so floats qualify.
//! - Requires `Display` for range notation and error messages, with exact
//!   minimal-digit rendering for every primitive.
//! - Includes the `ScalarKind` family markers (`IS_FLOAT`, `IS_UNSIGNED`)
//!   distinguishing wrap-around and signedness edge cases.
//!
//! The blanket impl covers every primitive numeric type, including the
//! 128-bit widths.

use capstan_core::kind::ScalarKind;
use num_traits::Num;

/// A trait alias for numeric scalar types usable with the range operations.
///
/// These are all primitive integer types (signed and unsigned) plus `f32`
/// and `f64`. The blanket impl picks up any type satisfying the bounds, so
/// there is nothing to implement manually for a new scalar beyond
/// `ScalarKind`.
pub trait RangeScalar:
    Num + PartialOrd + Copy + std::fmt::Debug + std::fmt::Display + ScalarKind
{
}

impl<T> RangeScalar for T where
    T: Num + PartialOrd + Copy + std::fmt::Debug + std::fmt::Display + ScalarKind
{
}
