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

use crate::{error::OutOfRangeError, ops, scalar::RangeScalar};

/// A numeric range defined by two endpoints and their exclusivity flags.
///
/// This is a plain value bundling the four parameters of the free functions
/// in [`ops`]; every method delegates to the corresponding function with the
/// stored parameters. There is no additional behavior and no mutation.
///
/// # Invariants
///
/// None at construction: a range created with `min > max` ("inverted") is
/// valid. Every operation canonicalizes first, swapping the endpoints and
/// their exclusivity flags in lockstep, so an inverted range behaves exactly
/// like its ordered counterpart.
#[derive(Clone, Copy, PartialEq)]
pub struct Range<S>
where
    S: RangeScalar,
{
    min: S,
    max: S,
    min_exclusive: bool,
    max_exclusive: bool,
}

impl<S> Range<S>
where
    S: RangeScalar,
{
    /// Creates a new `Range` from its four defining parameters.
    ///
    /// The endpoints may arrive in either order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan::range::Range;
    ///
    /// let r = Range::new(0, 100, true, false);
    /// assert!(!r.test(0));
    /// assert!(r.test(100));
    /// ```
    #[inline]
    pub const fn new(min: S, max: S, min_exclusive: bool, max_exclusive: bool) -> Self {
        Self {
            min,
            max,
            min_exclusive,
            max_exclusive,
        }
    }

    /// Creates a closed range `[min, max]` (both endpoints inclusive).
    ///
    /// This is the default flag combination.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan::range::Range;
    ///
    /// let r = Range::closed(0, 100);
    /// assert!(r.test(0));
    /// assert!(r.test(100));
    /// ```
    #[inline]
    pub const fn closed(min: S, max: S) -> Self {
        Self::new(min, max, false, false)
    }

    /// Creates an open range `(min, max)` (both endpoints exclusive).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan::range::Range;
    ///
    /// let r = Range::open(0, 100);
    /// assert!(!r.test(0));
    /// assert!(!r.test(100));
    /// assert!(r.test(50));
    /// ```
    #[inline]
    pub const fn open(min: S, max: S) -> Self {
        Self::new(min, max, true, true)
    }

    /// Returns the `min` endpoint as constructed (not canonicalized).
    #[inline]
    pub const fn min(&self) -> S {
        self.min
    }

    /// Returns the `max` endpoint as constructed (not canonicalized).
    #[inline]
    pub const fn max(&self) -> S {
        self.max
    }

    /// Returns the exclusivity flag of the `min` endpoint as constructed.
    #[inline]
    pub const fn min_exclusive(&self) -> bool {
        self.min_exclusive
    }

    /// Returns the exclusivity flag of the `max` endpoint as constructed.
    #[inline]
    pub const fn max_exclusive(&self) -> bool {
        self.max_exclusive
    }

    /// Returns this range with its endpoints ordered and the exclusivity
    /// flags carried along.
    ///
    /// For an already-ordered range this is an identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan::range::Range;
    ///
    /// let r = Range::new(100, 0, false, true).canonical();
    /// assert_eq!(r.min(), 0);
    /// assert_eq!(r.max(), 100);
    /// assert!(r.min_exclusive());
    /// assert!(!r.max_exclusive());
    /// ```
    #[inline]
    pub fn canonical(&self) -> Self {
        let (min, max, min_exclusive, max_exclusive) =
            ops::min_max_exclusive(self.min, self.max, self.min_exclusive, self.max_exclusive);
        Self::new(min, max, min_exclusive, max_exclusive)
    }

    /// Normalizes `value` into this range treated as half-open `[min, max)`.
    ///
    /// Exclusivity flags do not apply to wrapping; see [`ops::wrap`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan::range::Range;
    ///
    /// let degrees = Range::closed(0.0, 360.0);
    /// assert_eq!(degrees.wrap(361.5), 1.5);
    /// assert_eq!(degrees.wrap(-100.0), 260.0);
    /// ```
    #[inline]
    pub fn wrap(&self, value: S) -> S {
        ops::wrap(self.min, self.max, value)
    }

    /// Caps `value` to this range treated as closed `[min, max]`.
    ///
    /// Exclusivity flags do not apply to clamping; see [`ops::clamp`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan::range::Range;
    ///
    /// let r = Range::closed(0, 100);
    /// assert_eq!(r.clamp(120), 100);
    /// assert_eq!(r.clamp(-20), 0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: S) -> S {
        ops::clamp(self.min, self.max, value)
    }

    /// Returns `true` if `value` is within this range, honoring the
    /// exclusivity flags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan::range::Range;
    ///
    /// let r = Range::new(0, 100, false, true);
    /// assert!(r.test(0));
    /// assert!(!r.test(100));
    /// ```
    #[inline]
    pub fn test(&self, value: S) -> bool {
        ops::test(
            self.min,
            self.max,
            value,
            self.min_exclusive,
            self.max_exclusive,
        )
    }

    /// Returns `value` if it is within this range, otherwise an
    /// [`OutOfRangeError`] describing the violation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan::range::Range;
    ///
    /// let r = Range::closed(0, 100);
    /// assert_eq!(r.validate(50), Ok(50));
    ///
    /// let err = r.validate(101).unwrap_err();
    /// assert_eq!(err.to_string(), "101 is outside of range [0,100]");
    /// ```
    #[inline]
    pub fn validate(&self, value: S) -> Result<S, OutOfRangeError<S>> {
        ops::validate(
            self.min,
            self.max,
            value,
            self.min_exclusive,
            self.max_exclusive,
        )
    }
}

impl<S> Default for Range<S>
where
    S: RangeScalar,
{
    /// The empty closed range `[0, 0]`.
    #[inline]
    fn default() -> Self {
        Self::closed(S::zero(), S::zero())
    }
}

impl<S> std::fmt::Debug for Range<S>
where
    S: RangeScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Range")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("min_exclusive", &self.min_exclusive)
            .field("max_exclusive", &self.max_exclusive)
            .finish()
    }
}

impl<S> std::fmt::Display for Range<S>
where
    S: RangeScalar,
{
    /// Renders the canonical interval notation, e.g. `"[0,100)"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&ops::to_string(
            self.min,
            self.max,
            self.min_exclusive,
            self.max_exclusive,
        ))
    }
}

impl<S> std::ops::RangeBounds<S> for Range<S>
where
    S: RangeScalar,
{
    fn start_bound(&self) -> std::ops::Bound<&S> {
        // Canonical lower endpoint; the stored `max` field holds it when the
        // range is inverted.
        let (lo, lo_exclusive) = if self.min > self.max {
            (&self.max, self.max_exclusive)
        } else {
            (&self.min, self.min_exclusive)
        };
        if lo_exclusive {
            std::ops::Bound::Excluded(lo)
        } else {
            std::ops::Bound::Included(lo)
        }
    }

    fn end_bound(&self) -> std::ops::Bound<&S> {
        let (hi, hi_exclusive) = if self.min > self.max {
            (&self.min, self.min_exclusive)
        } else {
            (&self.max, self.max_exclusive)
        };
        if hi_exclusive {
            std::ops::Bound::Excluded(hi)
        } else {
            std::ops::Bound::Included(hi)
        }
    }
}

impl<S> From<std::ops::Range<S>> for Range<S>
where
    S: RangeScalar,
{
    /// A half-open `start..end` becomes `[start, end)`.
    #[inline]
    fn from(range: std::ops::Range<S>) -> Self {
        Self::new(range.start, range.end, false, true)
    }
}

impl<S> From<std::ops::RangeInclusive<S>> for Range<S>
where
    S: RangeScalar,
{
    /// A closed `start..=end` becomes `[start, end]`.
    #[inline]
    fn from(range: std::ops::RangeInclusive<S>) -> Self {
        Self::closed(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    #[test]
    fn test_construction_and_accessors() {
        let r = Range::new(0, 100, true, false);
        assert_eq!(r.min(), 0);
        assert_eq!(r.max(), 100);
        assert!(r.min_exclusive());
        assert!(!r.max_exclusive());
    }

    #[test]
    fn test_convenience_constructors() {
        let closed = Range::closed(0, 100);
        assert!(!closed.min_exclusive());
        assert!(!closed.max_exclusive());
        assert!(closed.test(0));
        assert!(closed.test(100));

        let open = Range::open(0, 100);
        assert!(open.min_exclusive());
        assert!(open.max_exclusive());
        assert!(!open.test(0));
        assert!(!open.test(100));
    }

    #[test]
    fn test_inverted_range_stays_valid() {
        // min > max is not an error; every operation canonicalizes.
        let r = Range::new(100, 0, false, true);
        assert_eq!(r.wrap(120), 20);
        assert_eq!(r.clamp(-20), 0);
        assert!(r.test(100));
        assert_eq!(r.to_string(), "(0,100]");
    }

    #[test]
    fn test_canonical() {
        let r = Range::new(100, 0, false, true).canonical();
        assert_eq!(r.min(), 0);
        assert_eq!(r.max(), 100);
        assert!(r.min_exclusive());
        assert!(!r.max_exclusive());

        // Ordered input is an identity.
        let r = Range::new(0, 100, true, false);
        assert_eq!(r.canonical(), r);
    }

    #[test]
    fn test_methods_delegate_to_free_functions() {
        let r = Range::closed(0, 100);
        assert_eq!(r.wrap(120), crate::ops::wrap(0, 100, 120));
        assert_eq!(r.clamp(120), crate::ops::clamp(0, 100, 120));
        assert_eq!(r.test(100), crate::ops::test(0, 100, 100, false, false));
        assert_eq!(
            r.validate(101),
            crate::ops::validate(0, 100, 101, false, false)
        );
    }

    #[test]
    fn test_validate_error_message() {
        let r = Range::closed(0, 100);
        let err = r.validate(101).unwrap_err();
        assert_eq!(err.to_string(), "101 is outside of range [0,100]");
    }

    #[test]
    fn test_default_is_empty_closed_range() {
        let r: Range<i32> = Default::default();
        assert_eq!(r.min(), 0);
        assert_eq!(r.max(), 0);
        assert!(!r.min_exclusive());
        assert!(!r.max_exclusive());
        assert!(r.test(0));
        assert_eq!(r.wrap(42), 0); // empty span collapses to the bound
    }

    #[test]
    fn test_display_renders_canonical_notation() {
        assert_eq!(Range::new(0, 100, true, true).to_string(), "(0,100)");
        assert_eq!(Range::new(0, 100, false, true).to_string(), "[0,100)");
        assert_eq!(Range::new(100, 0, true, false).to_string(), "[0,100)");
        assert_eq!(
            Range::closed(0.5f64, 99.25).to_string(),
            "[0.5,99.25]"
        );
    }

    #[test]
    fn test_debug_shows_stored_parameters() {
        let r = Range::new(100, 0, true, false);
        assert_eq!(
            format!("{:?}", r),
            "Range { min: 100, max: 0, min_exclusive: true, max_exclusive: false }"
        );
    }

    #[test]
    fn test_range_bounds_reports_canonical_bounds() {
        let r = Range::new(0, 100, true, false);
        match r.start_bound() {
            Bound::Excluded(&x) => assert_eq!(x, 0),
            _ => panic!("Wrong start bound"),
        }
        match r.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 100),
            _ => panic!("Wrong end bound"),
        }

        // Inverted range: bounds come from the canonical orientation.
        let r = Range::new(100, 0, true, false);
        match r.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 0),
            _ => panic!("Wrong start bound"),
        }
        match r.end_bound() {
            Bound::Excluded(&x) => assert_eq!(x, 100),
            _ => panic!("Wrong end bound"),
        }
    }

    #[test]
    fn test_from_std_ranges() {
        let r: Range<i32> = (0..100).into();
        assert!(r.test(0));
        assert!(!r.test(100));
        assert_eq!(r.to_string(), "[0,100)");

        let r: Range<i32> = (0..=100).into();
        assert!(r.test(100));
        assert_eq!(r.to_string(), "[0,100]");
    }
}
