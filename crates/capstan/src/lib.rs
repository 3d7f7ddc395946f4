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

//! # Capstan
//!
//! **Generic range arithmetic over numeric scalars.**
//!
//! This crate normalizes, clamps, and validates values against a range whose
//! endpoints may independently be inclusive or exclusive. One generic
//! implementation covers every signed, unsigned, and floating-point width;
//! there is no per-type code to keep in sync.
//!
//! ## Modules
//!
//! - `ops`: The free functions — `wrap`, `clamp`, `test`, `validate`,
//!   `to_string`, and the `min_max`/`min_max_exclusive` canonicalizers that
//!   every other operation funnels through.
//! - `range`: The [`Range`](range::Range) value object bundling the four
//!   defining parameters and exposing the operations as methods.
//! - `scalar`: The [`RangeScalar`](scalar::RangeScalar) bound collecting the
//!   numeric capabilities the operations require.
//! - `error`: The [`OutOfRangeError`](error::OutOfRangeError) returned by
//!   failed validations.
//!
//! ## Design Philosophy
//!
//! 1. **Canonicalize at use-time**: a range constructed with `min > max`
//!    stays valid; every operation transparently swaps the endpoints (and
//!    their exclusivity flags, in lockstep) before doing anything else.
//! 2. **Total functions**: only `validate` has an error path. `wrap`,
//!    `clamp`, `test`, and `to_string` accept any input of the scalar type.
//! 3. **Pure values**: nothing is mutated and nothing is shared; every call
//!    is a single-step function of its inputs and is safe from any thread.
//!
//! ## Examples
//!
//! ```rust
//! use capstan::{ops, range::Range};
//!
//! // Angle normalization into [0, 360).
//! assert_eq!(ops::wrap(0.0, 360.0, 361.5), 1.5);
//!
//! // Bounded counter, endpoints swapped by the caller.
//! assert_eq!(ops::clamp(100, 0, -20), 0);
//!
//! // Membership with an exclusive lower endpoint.
//! let r = Range::new(0, 100, true, false);
//! assert!(!r.test(0));
//! assert!(r.test(100));
//! assert_eq!(r.to_string(), "(0,100]");
//! ```

pub mod error;
pub mod ops;
pub mod range;
pub mod scalar;
