//! Small generic helpers for working with sequences:
//! joining strings, generating fixed size arrays from an index
//! and `for_each` variants with access to an index value.
//!
//! # Joining
//! ```rust
//! use sequtil_core::join::join_strings;
//!
//! assert_eq!(join_strings(["a", "b", "c"], ", "), "a, b, c");
//! ```
//!
//! # Indexed Iteration
//! ```rust
//! use sequtil_core::{for_each::for_each_n, idx_newtype};
//!
//! idx_newtype! {
//!     struct Row(u32);
//! }
//!
//! let mut rows = Vec::new();
//! let mut rest = for_each_n(["x", "y", "z"], Row(2), |s, row| rows.push((row, s)));
//! assert_eq!(rows, [(Row(0), "x"), (Row(1), "y")]);
//! assert_eq!(rest.next(), Some("z"));
//! ```
//!
//! # Logging
//! With the `debug_logging` feature enabled, every operation emits
//! [`tracing`](https://docs.rs/tracing) events.
//! No subscriber is installed by this crate.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

mod debug_log;

pub mod error;
pub mod for_each;
pub mod generate;
pub mod idx;
pub mod idx_enumerate;
pub mod iter_ext;
pub mod join;

pub use crate::idx::*;
pub use error::SequenceError;
pub use for_each::{
    for_each_n, indexed_for, indexed_for_idx, indexed_for_n, try_for_each_n,
    try_indexed_for_idx, try_indexed_for_n,
};
pub use generate::{
    generate_sequence, generate_sequence_idx, try_generate_sequence,
};
pub use idx_enumerate::IdxEnumerate;
pub use iter_ext::SequenceExt;
pub use join::{
    join_byte_strings, join_display, join_display_into, join_strings,
    join_strings_default, join_strings_into, DEFAULT_SEPARATOR,
};
