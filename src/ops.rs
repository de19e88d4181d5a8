// ops.rs - The contract operations over nullable text buffers.
//
// Every operation takes its receiver as Option<&Text> (None is the null of
// the contract), validates before allocating, and allocates at most one
// result buffer through the capability pair. Null handling is deliberately
// operation-specific and must not be normalized:
//
//   - comparisons treat a null argument as "receiver is greater" (+1)
//   - searches treat a null or empty needle as "not found" (-1)
//   - contains treats a null needle as an argument error
//   - the split family substitutes a single space for a null or empty
//     delimiter

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::raw;
use crate::text::Text;

/// Sentinel returned by the search family when no match exists. A success
/// value, never an error.
pub const NOT_FOUND: isize = -1;

/// Result sequence of the split family, in left-to-right span order.
pub type Parts<T> = SmallVec<[T; 8]>;

bitflags::bitflags! {
    /// Which ends the shared trim routine strips spaces from.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct TrimEnds: u8 {
        /// Strip leading spaces.
        const START = 1 << 0;
        /// Strip trailing spaces.
        const END = 1 << 1;
    }
}

// === Substring ===

/// Extract `len` units starting at `start`; `len` defaults to the
/// remainder of the buffer.
///
/// Fails with [`Error::Range`] when `start` exceeds the source length or
/// the requested range runs past the end. `start == len()` is a valid
/// empty remainder. A full-range request returns an alias of the input
/// instead of copying.
pub fn substring(text: Option<&Text>, start: usize, len: Option<usize>) -> Result<Text> {
    let text = text.ok_or(Error::NullInput)?;
    let total = text.len();
    if start > total {
        return Err(Error::Range { param: "start" });
    }
    let len = len.unwrap_or(total - start);
    if len > total - start {
        return Err(Error::Range { param: "len" });
    }
    Ok(substring_core(text, start, len))
}

// Validation-free substring shared by substring, trim, and the split
// family. Callers guarantee start + len <= text.len().
pub(crate) fn substring_core(text: &Text, start: usize, len: usize) -> Text {
    if len == 0 {
        return Text::empty();
    }
    if start == 0 && len == text.len() {
        return text.clone();
    }
    let provider = raw::primitives();
    let mut buf = provider.allocate(len);
    raw::copy_units(provider, &mut buf, &text.as_bytes()[start..start + len]);
    Text::from_vec(buf)
}

// === Case conversion ===

/// ASCII-lowercase the buffer: units in `A..=Z` become `a..=z`, everything
/// else is untouched. Fails with [`Error::NullInput`] on a null receiver.
pub fn to_lower(text: Option<&Text>) -> Result<Text> {
    let text = text.ok_or(Error::NullInput)?;
    Ok(fold_case(text, b'A', b'Z', 32))
}

/// ASCII-uppercase the buffer: units in `a..=z` become `A..=Z`, everything
/// else is untouched. Fails with [`Error::NullInput`] on a null receiver.
pub fn to_upper(text: Option<&Text>) -> Result<Text> {
    let text = text.ok_or(Error::NullInput)?;
    Ok(fold_case(text, b'a', b'z', 32u8.wrapping_neg()))
}

// Copy the whole buffer in one bulk move, then patch the units in
// [lo, hi] by wrapping-adding delta. Everything outside the range is
// already correct from the copy, so the rescan is a single predictable
// branch per unit.
pub(crate) fn fold_case(text: &Text, lo: u8, hi: u8, delta: u8) -> Text {
    let provider = raw::primitives();
    let mut buf = provider.allocate(text.len());
    raw::copy_units(provider, &mut buf, text.as_bytes());
    for unit in buf.iter_mut() {
        if *unit >= lo && *unit <= hi {
            *unit = unit.wrapping_add(delta);
        }
    }
    Text::from_vec(buf)
}

// === Trim ===

/// Strip leading and trailing spaces (the literal 0x20 only).
pub fn trim(text: Option<&Text>) -> Result<Text> {
    let text = text.ok_or(Error::NullInput)?;
    Ok(trim_core(text, TrimEnds::all()))
}

/// Strip leading spaces only.
pub fn trim_start(text: Option<&Text>) -> Result<Text> {
    let text = text.ok_or(Error::NullInput)?;
    Ok(trim_core(text, TrimEnds::START))
}

/// Strip trailing spaces only.
pub fn trim_end(text: Option<&Text>) -> Result<Text> {
    let text = text.ok_or(Error::NullInput)?;
    Ok(trim_core(text, TrimEnds::END))
}

// Walk a cursor in from each requested end while the unit is a space,
// then hand the surviving range to the substring core. All-spaces input
// collapses to the empty buffer; nothing-to-strip input comes back as the
// aliased instance via the core's full-range fast path.
pub(crate) fn trim_core(text: &Text, ends: TrimEnds) -> Text {
    let units = text.as_bytes();
    let mut first = 0;
    let mut last = units.len();
    if ends.contains(TrimEnds::START) {
        while first < last && units[first] == b' ' {
            first += 1;
        }
    }
    if ends.contains(TrimEnds::END) {
        while last > first && units[last - 1] == b' ' {
            last -= 1;
        }
    }
    substring_core(text, first, last - first)
}

// === Comparison ===

/// Ordinal comparison, returning a sign value in {-1, 0, +1}.
///
/// A null receiver fails with [`Error::NullInput`]; a null `other` returns
/// `+1` without failing. The asymmetry is contractual. The identical
/// buffer instance short-circuits to 0 before any scan.
pub fn compare_to(text: Option<&Text>, other: Option<&Text>) -> Result<i32> {
    let text = text.ok_or(Error::NullInput)?;
    let Some(other) = other else {
        return Ok(1);
    };
    if text.same_instance(other) {
        return Ok(0);
    }
    let a = text.as_bytes();
    let b = other.as_bytes();
    let min_len = a.len().min(b.len());
    for i in 0..min_len {
        if a[i] != b[i] {
            return Ok(if a[i] < b[i] { -1 } else { 1 });
        }
    }
    Ok(match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    })
}

/// Ordinal comparison of two sub-ranges of up to `len` units.
///
/// Null handling matches [`compare_to`]. Both start offsets must lie
/// within their buffers ([`Error::Range`] otherwise). The requested
/// length is clamped to the shorter remainder, recording which operand
/// ran out: the receiver first (-1), then the other (+1). On a full match
/// of the clamped region that deficiency sign is the final tie-break;
/// equal deficiency keeps the receiver's -1.
pub fn compare_part(
    text: Option<&Text>,
    text_start: usize,
    other: Option<&Text>,
    other_start: usize,
    len: usize,
) -> Result<i32> {
    let text = text.ok_or(Error::NullInput)?;
    let Some(other) = other else {
        return Ok(1);
    };
    if text_start > text.len() {
        return Err(Error::Range { param: "text_start" });
    }
    if other_start > other.len() {
        return Err(Error::Range { param: "other_start" });
    }

    let mut min_len = len;
    let mut deficiency = 0;
    if text.len() - text_start < min_len {
        min_len = text.len() - text_start;
        deficiency = -1;
    }
    if other.len() - other_start < min_len {
        min_len = other.len() - other_start;
        deficiency = 1;
    }

    let a = &text.as_bytes()[text_start..text_start + min_len];
    let b = &other.as_bytes()[other_start..other_start + min_len];
    for i in 0..min_len {
        if a[i] != b[i] {
            return Ok(if a[i] < b[i] { -1 } else { 1 });
        }
    }
    Ok(deficiency)
}

// === Search ===

/// Offset of the first occurrence of `part`, or [`NOT_FOUND`].
///
/// A null receiver fails with [`Error::NullInput`]; a null or empty
/// needle returns [`NOT_FOUND`] without failing. This deliberately
/// differs from the split family's delimiter substitution.
pub fn index_of(text: Option<&Text>, part: Option<&Text>) -> Result<isize> {
    let text = text.ok_or(Error::NullInput)?;
    let Some(part) = part else {
        return Ok(NOT_FOUND);
    };
    Ok(match find_forward(text.as_bytes(), part.as_bytes()) {
        Some(at) => at as isize,
        None => NOT_FOUND,
    })
}

/// Offset of the last occurrence of `part`, or [`NOT_FOUND`]. Null
/// handling matches [`index_of`].
pub fn last_index_of(text: Option<&Text>, part: Option<&Text>) -> Result<isize> {
    let text = text.ok_or(Error::NullInput)?;
    let Some(part) = part else {
        return Ok(NOT_FOUND);
    };
    Ok(match find_backward(text.as_bytes(), part.as_bytes()) {
        Some(at) => at as isize,
        None => NOT_FOUND,
    })
}

/// Whether `part` occurs in the buffer.
///
/// Unlike the index operations, a null needle here is an argument error
/// ([`Error::NullArgument`]); an empty needle is simply not contained.
pub fn contains(text: Option<&Text>, part: Option<&Text>) -> Result<bool> {
    let text = text.ok_or(Error::NullInput)?;
    let part = part.ok_or(Error::NullArgument { param: "part" })?;
    Ok(find_forward(text.as_bytes(), part.as_bytes()).is_some())
}

// Skip-scan for the needle's first unit with memchr, verify the rest
// contiguously, resume past the candidate on a near-miss. Candidate
// starts run over 0..=len-needle_len inclusive.
pub(crate) fn find_forward(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    let first = needle[0];
    let mut from = 0;
    while from <= last_start {
        let offset = memchr::memchr(first, &haystack[from..=last_start])?;
        let at = from + offset;
        if haystack[at + 1..at + needle.len()] == needle[1..] {
            return Some(at);
        }
        from = at + 1;
    }
    None
}

// Mirror of find_forward: memrchr from the last feasible start downward.
pub(crate) fn find_backward(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    let first = needle[0];
    let mut upto = last_start + 1;
    while upto > 0 {
        let at = memchr::memrchr(first, &haystack[..upto])?;
        if haystack[at + 1..at + needle.len()] == needle[1..] {
            return Some(at);
        }
        upto = at;
    }
    None
}

// === Split family ===

/// Split on `delimiter`, emitting each non-empty span as a fresh buffer
/// in left-to-right order.
///
/// A null receiver fails with [`Error::NullInput`]; a null or empty
/// delimiter is substituted with a single space (contrast with the search
/// family). Consecutive, leading, or trailing delimiters never produce
/// empty elements.
pub fn split_to_strings(text: Option<&Text>, delimiter: Option<&Text>) -> Result<Parts<Text>> {
    let text = text.ok_or(Error::NullInput)?;
    let mut parts = Parts::new();
    scan_spans(text, delimiter, |start, end| {
        parts.push(substring_core(text, start, end - start));
        Ok(())
    })?;
    Ok(parts)
}

/// Split on `delimiter` and parse each span as a base-10 signed integer.
///
/// Any span that is not a valid `i32` literal fails the whole call with
/// [`Error::Parse`]; no partial result is returned. Null handling matches
/// [`split_to_strings`].
pub fn split_to_ints(text: Option<&Text>, delimiter: Option<&Text>) -> Result<Parts<i32>> {
    let text = text.ok_or(Error::NullInput)?;
    let mut parts = Parts::new();
    scan_spans(text, delimiter, |start, end| {
        parts.push(parse_int_span(&text.as_bytes()[start..end])?);
        Ok(())
    })?;
    Ok(parts)
}

/// Split on `delimiter` and map each span through `transform`, preserving
/// occurrence order. The scan holds no shared mutable state, so a
/// reentrant mapping function cannot corrupt it. Null handling matches
/// [`split_to_strings`].
pub fn split_and_transform<T>(
    text: Option<&Text>,
    delimiter: Option<&Text>,
    mut transform: impl FnMut(Text) -> T,
) -> Result<Parts<T>> {
    let text = text.ok_or(Error::NullInput)?;
    let mut parts = Parts::new();
    scan_spans(text, delimiter, |start, end| {
        parts.push(transform(substring_core(text, start, end - start)));
        Ok(())
    })?;
    Ok(parts)
}

// The one scanning routine behind the split family. Walks (span_start,
// cursor); a delimiter match emits the non-empty span before it and jumps
// the cursor past the delimiter; the trailing non-empty span is emitted at
// end of input. The consumers differ only in what they do with a span.
pub(crate) fn scan_spans(
    text: &Text,
    delimiter: Option<&Text>,
    mut emit: impl FnMut(usize, usize) -> Result<()>,
) -> Result<()> {
    const SPACE: &[u8] = b" ";
    let delim = match delimiter {
        Some(d) if !d.is_empty() => d.as_bytes(),
        _ => SPACE,
    };
    let units = text.as_bytes();
    let mut span_start = 0;
    let mut cursor = 0;
    while cursor < units.len() {
        if units[cursor..].starts_with(delim) {
            if cursor > span_start {
                emit(span_start, cursor)?;
            }
            cursor += delim.len();
            span_start = cursor;
        } else {
            cursor += 1;
        }
    }
    if cursor > span_start {
        emit(span_start, cursor)?;
    }
    Ok(())
}

// Base-10 signed i32: optional +/- sign followed by ASCII digits, no
// interior whitespace, overflow rejected.
fn parse_int_span(span: &[u8]) -> Result<i32> {
    std::str::from_utf8(span)
        .ok()
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(|| Error::Parse {
            span: String::from_utf8_lossy(span).into_owned(),
        })
}
