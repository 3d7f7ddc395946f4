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

/// Returns the bigger of two values by value (no references).
///
/// Works over `PartialOrd`, so floating-point scalars are accepted. If the
/// comparison is undecided (e.g. one operand is NaN), the first operand is
/// returned.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::cmp::max_val;
///
/// assert_eq!(max_val(3, 7), 7);
/// assert_eq!(max_val(7.5, 3.5), 7.5);
/// ```
#[inline]
pub fn max_val<T: PartialOrd>(x: T, y: T) -> T {
    if x < y { y } else { x }
}

/// Returns the smaller of two values by value (no references).
///
/// Works over `PartialOrd`, so floating-point scalars are accepted. If the
/// comparison is undecided (e.g. one operand is NaN), the first operand is
/// returned.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::cmp::min_val;
///
/// assert_eq!(min_val(3, 7), 3);
/// assert_eq!(min_val(7.5, 3.5), 3.5);
/// ```
#[inline]
pub fn min_val<T: PartialOrd>(x: T, y: T) -> T {
    if x > y { y } else { x }
}
