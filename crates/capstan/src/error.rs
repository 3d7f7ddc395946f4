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

/// The error returned when a value fails range validation.
///
/// Carries the offending value and the canonical notation of the violated
/// range. Raised only by the validate operation; every other range operation
/// is total.
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfRangeError<S> {
    /// The value that failed the membership test.
    pub value: S,
    /// The canonical range notation, e.g. `"[0,100)"`.
    pub range: String,
}

impl<S> OutOfRangeError<S> {
    /// Creates a new `OutOfRangeError` from the offending value and the
    /// canonical range notation.
    #[inline]
    pub fn new(value: S, range: String) -> Self {
        Self { value, range }
    }
}

impl<S> std::fmt::Display for OutOfRangeError<S>
where
    S: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is outside of range {}", self.value, self.range)
    }
}

impl<S> std::error::Error for OutOfRangeError<S> where S: std::fmt::Debug + std::fmt::Display {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_format() {
        let err = OutOfRangeError::new(101, "[0,100]".to_string());
        assert_eq!(err.to_string(), "101 is outside of range [0,100]");
    }

    #[test]
    fn test_display_message_format_float() {
        // Float values render with minimal digits, matching the notation.
        let err = OutOfRangeError::new(100.5f64, "[0,100]".to_string());
        assert_eq!(err.to_string(), "100.5 is outside of range [0,100]");
    }

    #[test]
    fn test_fields_are_accessible() {
        let err = OutOfRangeError::new(-3i64, "(0,10)".to_string());
        assert_eq!(err.value, -3);
        assert_eq!(err.range, "(0,10)");
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> =
            Box::new(OutOfRangeError::new(7u8, "[0,5]".to_string()));
        assert_eq!(err.to_string(), "7 is outside of range [0,5]");
    }
}
