// text.rs - Immutable text buffer.
//
// A Text is an ordered sequence of fixed-width code units (bytes here)
// behind a shared backing vector. It is never mutated after construction,
// so clones alias the same backing for free and cross-thread reads need no
// synchronization. "Same instance" in the operation contracts means
// data-pointer identity, observable via as_ptr().

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::raw;

/// An immutable buffer of code units.
///
/// Transforming operations always produce a fresh `Text`, except the
/// substring-of-whole-string fast path, which returns an alias of its
/// input. Aliasing is safe because no `Text` is ever mutated in place.
///
/// # Examples
///
/// ```
/// use svelto::text::Text;
///
/// let text = Text::from("hello");
/// assert_eq!(text.len(), 5);
/// assert_eq!(text.as_bytes(), b"hello");
/// assert_eq!(text, "hello");
/// ```
#[derive(Clone)]
pub struct Text {
    data: Arc<Vec<u8>>,
}

impl Text {
    /// The empty buffer.
    pub fn empty() -> Text {
        // Vec::new() does not allocate a backing store.
        Text::from_vec(Vec::new())
    }

    /// Copy `units` into a fresh buffer through the resolved capability
    /// pair (one allocation, one bulk copy).
    pub fn from_units(units: &[u8]) -> Text {
        let provider = raw::primitives();
        let mut buf = provider.allocate(units.len());
        raw::copy_units(provider, &mut buf, units);
        Text::from_vec(buf)
    }

    /// Wrap an already-populated vector without copying.
    pub(crate) fn from_vec(units: Vec<u8>) -> Text {
        Text {
            data: Arc::new(units),
        }
    }

    /// Number of code units.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no units.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The units as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The units as `&str`, or `None` if they are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// Pointer to the backing store. Two `Text`s with equal pointers are
    /// the same instance in the sense of the aliasing contract.
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Whether `self` and `other` share one backing buffer.
    pub(crate) fn same_instance(&self, other: &Text) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Default for Text {
    fn default() -> Text {
        Text::empty()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Text {
        Text::from_units(s.as_bytes())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Text {
        Text::from_vec(s.into_bytes())
    }
}

impl From<&[u8]> for Text {
    fn from(units: &[u8]) -> Text {
        Text::from_units(units)
    }
}

impl From<Vec<u8>> for Text {
    fn from(units: Vec<u8>) -> Text {
        Text::from_vec(units)
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Text) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Text) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Ordinal: raw code-unit values, shorter prefix compares as smaller.
impl Ord for Text {
    fn cmp(&self, other: &Text) -> std::cmp::Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match String::from_utf8_lossy(&self.data) {
            Cow::Borrowed(s) => f.write_str(s),
            Cow::Owned(s) => f.write_str(&s),
        }
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", String::from_utf8_lossy(&self.data))
    }
}
