// api.rs - Idiomatic convenience layer on Text.
//
// Wraps the nullable, sentinel-returning operation set (ops) with
// Rust-native signatures for callers that never deal in nulls: ranges
// instead of start/len pairs, Option<usize> instead of -1, Ordering
// instead of sign values.

use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};

use crate::error::{Error, Result};
use crate::ops::{self, Parts, TrimEnds};
use crate::text::Text;

impl Text {
    /// Extract the sub-buffer covered by `range`.
    ///
    /// The full range aliases the input instead of copying.
    ///
    /// # Examples
    ///
    /// ```
    /// use svelto::text::Text;
    ///
    /// let text = Text::from("hello world");
    /// assert_eq!(text.slice(6..).unwrap(), "world");
    /// assert_eq!(text.slice(..5).unwrap(), "hello");
    /// assert!(text.slice(4..20).is_err());
    /// ```
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Text> {
        let start = match range.start_bound() {
            Bound::Included(&at) => at,
            Bound::Excluded(&at) => at + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&at) => at + 1,
            Bound::Excluded(&at) => at,
            Bound::Unbounded => self.len(),
        };
        if start > self.len() {
            return Err(Error::Range { param: "start" });
        }
        let len = end.checked_sub(start).ok_or(Error::Range { param: "len" })?;
        ops::substring(Some(self), start, Some(len))
    }

    /// ASCII-lowercased copy of the buffer.
    ///
    /// ```
    /// use svelto::text::Text;
    ///
    /// assert_eq!(Text::from("Lorem IPSUM").to_lower(), "lorem ipsum");
    /// ```
    pub fn to_lower(&self) -> Text {
        ops::fold_case(self, b'A', b'Z', 32)
    }

    /// ASCII-uppercased copy of the buffer.
    pub fn to_upper(&self) -> Text {
        ops::fold_case(self, b'a', b'z', 32u8.wrapping_neg())
    }

    /// Strip leading and trailing spaces (literal 0x20 only).
    ///
    /// ```
    /// use svelto::text::Text;
    ///
    /// assert_eq!(Text::from("  a b  ").trim(), "a b");
    /// ```
    pub fn trim(&self) -> Text {
        ops::trim_core(self, TrimEnds::all())
    }

    /// Strip leading spaces only.
    pub fn trim_start(&self) -> Text {
        ops::trim_core(self, TrimEnds::START)
    }

    /// Strip trailing spaces only.
    pub fn trim_end(&self) -> Text {
        ops::trim_core(self, TrimEnds::END)
    }

    /// Offset of the first occurrence of `part`, or `None`. An empty
    /// needle never matches.
    ///
    /// ```
    /// use svelto::text::Text;
    ///
    /// let text = Text::from("abcabc");
    /// assert_eq!(text.index_of("bc"), Some(1));
    /// assert_eq!(text.index_of("xyz"), None);
    /// assert_eq!(text.index_of(""), None);
    /// ```
    pub fn index_of(&self, part: impl AsRef<[u8]>) -> Option<usize> {
        ops::find_forward(self.as_bytes(), part.as_ref())
    }

    /// Offset of the last occurrence of `part`, or `None`.
    pub fn last_index_of(&self, part: impl AsRef<[u8]>) -> Option<usize> {
        ops::find_backward(self.as_bytes(), part.as_ref())
    }

    /// Whether `part` occurs in the buffer. An empty needle is not
    /// contained.
    pub fn contains_part(&self, part: impl AsRef<[u8]>) -> bool {
        ops::find_forward(self.as_bytes(), part.as_ref()).is_some()
    }

    /// Compare `len` units of `self` at `start` against `other` at
    /// `other_start`, as an [`Ordering`]. When one side runs out of units
    /// inside a matching region, the deficient side compares as less.
    pub fn compare_part(
        &self,
        start: usize,
        other: &Text,
        other_start: usize,
        len: usize,
    ) -> Result<Ordering> {
        let sign = ops::compare_part(Some(self), start, Some(other), other_start, len)?;
        Ok(sign.cmp(&0))
    }

    /// Split on `delimiter`, dropping empty spans. An empty delimiter is
    /// substituted with a single space.
    ///
    /// ```
    /// use svelto::text::Text;
    ///
    /// let parts = Text::from("a, b, c").split_to_strings(", ");
    /// assert_eq!(parts.len(), 3);
    /// assert_eq!(parts[2], "c");
    /// ```
    pub fn split_to_strings(&self, delimiter: impl AsRef<[u8]>) -> Parts<Text> {
        let mut parts = Parts::new();
        self.scan(delimiter.as_ref(), |span| parts.push(span));
        parts
    }

    /// Split on `delimiter` and parse each span as a base-10 `i32`; any
    /// invalid span fails the whole call.
    ///
    /// ```
    /// use svelto::text::Text;
    ///
    /// let ints = Text::from("1, 43, 11, 2").split_to_ints(", ").unwrap();
    /// assert_eq!(&ints[..], &[1, 43, 11, 2]);
    /// ```
    pub fn split_to_ints(&self, delimiter: impl AsRef<[u8]>) -> Result<Parts<i32>> {
        let delim = Text::from(delimiter.as_ref());
        ops::split_to_ints(Some(self), Some(&delim))
    }

    /// Split on `delimiter` and map each span through `transform`,
    /// preserving occurrence order.
    pub fn split_map<T>(
        &self,
        delimiter: impl AsRef<[u8]>,
        mut transform: impl FnMut(Text) -> T,
    ) -> Parts<T> {
        let mut parts = Parts::new();
        self.scan(delimiter.as_ref(), |span| parts.push(transform(span)));
        parts
    }

    // Shared span scan over a byte delimiter; the ops scanner wants the
    // delimiter as a Text so the substitution rule lives in one place.
    fn scan(&self, delimiter: &[u8], mut consume: impl FnMut(Text)) {
        let delim = Text::from(delimiter);
        let delim = (!delim.is_empty()).then_some(&delim);
        // scan_spans only fails when the consumer does, and this one never
        // does.
        let _ = ops::scan_spans(self, delim, |start, end| {
            consume(ops::substring_core(self, start, end - start));
            Ok(())
        });
    }
}
