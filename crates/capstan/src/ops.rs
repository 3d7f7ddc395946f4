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

//! Free functions for range arithmetic over any [`RangeScalar`].
//!
//! Every operation accepts its endpoints in either order. The
//! [`min_max`]/[`min_max_exclusive`] canonicalizers are the single place the
//! ordering rule lives: endpoints are swapped so the effective lower bound is
//! first, and when exclusivity flags are present they travel with their
//! endpoint. All other functions call a canonicalizer before doing anything
//! else, so no operation ever assumes pre-sorted input.
//!
//! [`wrap`] and [`clamp`] deliberately take no exclusivity flags: wrapping
//! always targets the half-open `[min, max)` interval and clamping the
//! closed `[min, max]` interval, regardless of how a surrounding
//! [`Range`](crate::range::Range) was configured. [`test`], [`validate`],
//! and [`to_string`] honor the flags.

use crate::{error::OutOfRangeError, scalar::RangeScalar};
use capstan_core::cmp::{max_val, min_val};

/// Orders a pair of endpoints so that the first is the lower bound.
///
/// Returns the pair unchanged if already ordered. This is invoked at the
/// start of every operation that takes no exclusivity flags.
///
/// # Examples
///
/// ```rust
/// # use capstan::ops;
///
/// assert_eq!(ops::min_max(0, 100), (0, 100));
/// assert_eq!(ops::min_max(100, 0), (0, 100));
/// ```
#[inline]
pub fn min_max<S: RangeScalar>(min: S, max: S) -> (S, S) {
    if min > max { (max, min) } else { (min, max) }
}

/// Orders a pair of endpoints together with their exclusivity flags.
///
/// When the endpoints are swapped, the flags are swapped in lockstep: the
/// flag attached to the original `max` stays attached to that endpoint in
/// its new position, and vice versa. "This endpoint is open" is a property
/// of the endpoint, not of the parameter name it arrived under.
///
/// # Examples
///
/// ```rust
/// # use capstan::ops;
///
/// assert_eq!(
///     ops::min_max_exclusive(0, 100, true, false),
///     (0, 100, true, false)
/// );
/// // Swapped endpoints carry their flags with them.
/// assert_eq!(
///     ops::min_max_exclusive(100, 0, false, true),
///     (0, 100, true, false)
/// );
/// ```
#[inline]
pub fn min_max_exclusive<S: RangeScalar>(
    min: S,
    max: S,
    min_exclusive: bool,
    max_exclusive: bool,
) -> (S, S, bool, bool) {
    if min > max {
        (max, min, max_exclusive, min_exclusive)
    } else {
        (min, max, min_exclusive, max_exclusive)
    }
}

/// Normalizes a value that wraps around within the `[min, max)` range.
///
/// The low endpoint is always treated as inclusive and the high endpoint as
/// exclusive; exclusivity flags do not apply to wrapping. The span is added
/// to the value until it reaches the lower bound, then subtracted until it
/// falls below the upper bound, so the result is periodic in the span.
///
/// If `min == max` the span is empty and `min` is returned immediately.
///
/// The intermediate steps never leave the scalar type's domain, but the
/// span itself (`max - min`) must be representable; for signed integers a
/// range as wide as the whole type overflows the subtraction. Runtime is
/// proportional to the distance between the value and the range, divided by
/// the span. A modulo-based shortcut is deliberately not used: remainder
/// arithmetic misbehaves for unsigned scalars when the value sits below the
/// lower bound.
///
/// # Examples
///
/// ```rust
/// # use capstan::ops;
///
/// assert_eq!(ops::wrap(0, 100, 120), 20);
/// assert_eq!(ops::wrap(100, 0, 120), 20); // swapped endpoints are fine
/// assert_eq!(ops::wrap(0, 100, 100), 0);
/// assert_eq!(ops::wrap(0, 100, -10), 90);
/// assert_eq!(ops::wrap(0.0, 360.0, 361.5), 1.5);
/// assert_eq!(ops::wrap(5, 5, 42), 5); // empty span
/// ```
pub fn wrap<S: RangeScalar>(min: S, max: S, value: S) -> S {
    let (lo, hi) = min_max(min, max);
    let span = hi - lo;
    if span == S::zero() {
        return lo;
    }
    let mut value = value;
    while value < lo {
        value = value + span;
    }
    while value >= hi {
        value = value - span;
    }
    value
}

/// Returns the value capped to the closed `[min, max]` range.
///
/// Both endpoints are treated as inclusive; exclusivity flags do not apply
/// to clamping.
///
/// # Examples
///
/// ```rust
/// # use capstan::ops;
///
/// assert_eq!(ops::clamp(0, 100, 120), 100);
/// assert_eq!(ops::clamp(0, 100, -20), 0);
/// assert_eq!(ops::clamp(100, 0, -20), 0); // swapped endpoints are fine
/// assert_eq!(ops::clamp(0, 100, 42), 42);
/// ```
#[inline]
pub fn clamp<S: RangeScalar>(min: S, max: S, value: S) -> S {
    let (lo, hi) = min_max(min, max);
    max_val(lo, min_val(hi, value))
}

/// Returns `true` if the value is within the range, honoring the
/// exclusivity flags.
///
/// With both flags `false` the interval is closed. The check is written as
/// a negated disjunction of the failure conditions; for floats this means a
/// NaN value is never rejected (every comparison with NaN is false), the
/// same behavior the per-width original had.
///
/// # Examples
///
/// ```rust
/// # use capstan::ops;
///
/// assert!(ops::test(0, 100, 0, false, false));
/// assert!(!ops::test(0, 100, 0, true, false)); // lower endpoint open
/// assert!(ops::test(0, 100, 100, true, false));
/// assert!(ops::test(100, 0, 100, false, true)); // flags travel on swap
/// ```
#[inline]
pub fn test<S: RangeScalar>(
    min: S,
    max: S,
    value: S,
    min_exclusive: bool,
    max_exclusive: bool,
) -> bool {
    let (lo, hi, lo_exclusive, hi_exclusive) =
        min_max_exclusive(min, max, min_exclusive, max_exclusive);
    !(value < lo
        || value > hi
        || (hi_exclusive && value == hi)
        || (lo_exclusive && value == lo))
}

/// Returns the value if it is within the range, otherwise an
/// [`OutOfRangeError`] describing the violation.
///
/// This is a pass-or-fail gate: the value is never adjusted. The error
/// message embeds the value and the canonical notation of the range, e.g.
/// `"101 is outside of range [0,100]"`.
///
/// # Examples
///
/// ```rust
/// # use capstan::ops;
///
/// assert_eq!(ops::validate(0, 100, 100, true, false), Ok(100));
///
/// let err = ops::validate(0, 100, 101, false, false).unwrap_err();
/// assert_eq!(err.to_string(), "101 is outside of range [0,100]");
/// ```
pub fn validate<S: RangeScalar>(
    min: S,
    max: S,
    value: S,
    min_exclusive: bool,
    max_exclusive: bool,
) -> Result<S, OutOfRangeError<S>> {
    if !test(min, max, value, min_exclusive, max_exclusive) {
        return Err(OutOfRangeError::new(
            value,
            to_string(min, max, min_exclusive, max_exclusive),
        ));
    }
    Ok(value)
}

/// Renders the canonicalized range in interval notation.
///
/// `[` / `]` mark inclusive endpoints and `(` / `)` exclusive ones, so a
/// closed range renders as `"[0,100]"` and an open one as `"(0,100)"`.
/// Scalars render via `Display`, which for the primitives is exact: minimal
/// digits and no scientific notation for floats, plain decimal for
/// integers.
///
/// # Examples
///
/// ```rust
/// # use capstan::ops;
///
/// assert_eq!(ops::to_string(0, 100, true, true), "(0,100)");
/// assert_eq!(ops::to_string(0, 100, false, true), "[0,100)");
/// assert_eq!(ops::to_string(0.5, 99.25, false, false), "[0.5,99.25]");
/// ```
pub fn to_string<S: RangeScalar>(
    min: S,
    max: S,
    min_exclusive: bool,
    max_exclusive: bool,
) -> String {
    let (lo, hi, lo_exclusive, hi_exclusive) =
        min_max_exclusive(min, max, min_exclusive, max_exclusive);
    let lo_bracket = if lo_exclusive { '(' } else { '[' };
    let hi_bracket = if hi_exclusive { ')' } else { ']' };
    format!("{lo_bracket}{lo},{hi}{hi_bracket}")
}
