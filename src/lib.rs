//! # Svelto
//!
//! Micro-optimized string operations on immutable buffers: substring
//! extraction, ASCII case folding, space trimming, ordinal comparison,
//! delimiter splitting, and substring search, with SIMD-accelerated
//! scanning via [`memchr`](https://crates.io/crates/memchr).
//!
//! Every transforming operation is built on two swappable primitives, a
//! raw bulk copy and a raw buffer allocation, so a host-provided faster
//! pair can be installed without touching algorithm code. Buffers are
//! never mutated after construction; full-range extractions alias their
//! input instead of copying.
//!
//! ## Quick Start
//!
//! ```rust
//! use svelto::prelude::*;
//!
//! let text = Text::from("  1, 43, 11, 2   ");
//! let trimmed = text.trim();
//! assert_eq!(trimmed, "1, 43, 11, 2");
//!
//! let ints = trimmed.split_to_ints(", ").unwrap();
//! assert_eq!(&ints[..], &[1, 43, 11, 2]);
//! ```
//!
//! ## Low-Level Nullable API
//!
//! The full contract surface, with `Option<&Text>` receivers (`None` is
//! the null of the contract), sign-value comparisons, and the -1
//! not-found sentinel, lives in [`ops`]:
//!
//! ```rust
//! use svelto::ops;
//! use svelto::text::Text;
//!
//! let text = Text::from("needle in haystack");
//!
//! // The receiver compares greater than a null argument; no error.
//! assert_eq!(ops::compare_to(Some(&text), None), Ok(1));
//!
//! // A null needle is "not found", not an error.
//! assert_eq!(ops::index_of(Some(&text), None), Ok(ops::NOT_FOUND));
//!
//! // A null receiver always is one.
//! assert!(ops::trim(None).is_err());
//! ```
//!
//! ## Module Structure
//!
//! | Module    | Purpose                                             |
//! |-----------|-----------------------------------------------------|
//! | [`raw`]   | Capability pair: raw allocation + raw bulk copy     |
//! | [`text`]  | [`Text`](text::Text), the immutable buffer type     |
//! | [`error`] | Error taxonomy                                      |
//! | [`ops`]   | The nullable contract operations                    |
//! | `api`     | Idiomatic inherent methods on `Text`                |
//! | [`prelude`] | One-line import of the idiomatic surface          |

mod api;
pub mod error;
pub mod ops;
pub mod prelude;
pub mod raw;
pub mod text;
