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

//! # Capstan Core
//!
//! Numeric foundations for the capstan range arithmetic crates. This crate
//! consolidates the small, reusable scalar building blocks that the range
//! operations are generic over, keeping the higher-level crate focused on
//! interval semantics rather than per-type plumbing.
//!
//! ## Modules
//!
//! - `cmp`: By-value `min_val`/`max_val` helpers over `PartialOrd`. Unlike
//!   `std::cmp::{min, max}` these do not require `Ord`, so they work for
//!   floating-point scalars as well as integers.
//! - `kind`: The `ScalarKind` trait exposing compile-time family markers
//!   (`IS_FLOAT`, `IS_UNSIGNED`) implemented for every primitive numeric
//!   type. Generic code uses these to distinguish wrap-around and signedness
//!   edge cases without naming concrete types.
//!
//! ## Purpose
//!
//! Range normalization and membership checks are one algorithm regardless of
//! scalar width. These primitives let a single generic implementation cover
//! every signed, unsigned, and floating-point width while still being able to
//! tell the families apart where their arithmetic differs.
//!
//! Refer to each module for detailed APIs and examples.

pub mod cmp;
pub mod kind;
