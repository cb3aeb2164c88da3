//! Small generic sequence helpers: joining strings, generating fixed size
//! arrays and `for_each` variants with access to an index value.
//!
//! See [`sequtil_core`] for the full documentation.

pub use sequtil_core::*;
