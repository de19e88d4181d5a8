// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use svelto::prelude::*;
//!
//! let text = Text::from("  Lorem ipsum  ");
//! assert_eq!(text.trim(), "Lorem ipsum");
//! assert_eq!(text.index_of("ipsum"), Some(8));
//! ```

pub use crate::error::Error;
pub use crate::ops::{Parts, TrimEnds, NOT_FOUND};
pub use crate::text::Text;
