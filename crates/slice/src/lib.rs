//! Prefix/suffix matching and trimming over ordered sequences.
//!
//! This crate provides:
//! - `starts_with` / `ends_with` checks for slices, single items and iterators
//! - `drop_first` / `drop_last` / `drop_prefix` / `drop_suffix` trims
//! - Extension traits for method-call syntax on slices, vectors and arrays
//! - Text splitting into line, comma or word elements
//! - Batch stripping with optional parallelism
//! - WASM bindings for browser usage
//!
//! Matching is plain elementwise equality. A pattern longer than the
//! sequence never matches, an empty pattern always does, and prefixes and
//! suffixes are removed at most once per call.
//!
//! # Example
//!
//! ```
//! use foodshare_slice::{drop_prefix, starts_with, SequenceExt};
//!
//! assert!(starts_with(&[1, 2, 3, 4], &[1, 2]));
//! assert_eq!(drop_prefix(&[1, 2, 3], &[1, 2]), vec![3]);
//!
//! let args = vec!["--", "build", "--release"];
//! assert_eq!(args.drop_prefix_item(&"--"), vec!["build", "--release"]);
//! assert!(args.drop_first(-1).is_err());
//! ```

pub mod batch;
mod error;
pub mod ext;
pub mod slice;
mod text;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{strip_all, StripResult};
pub use error::{Result, SliceError, SliceErrorCode};
pub use ext::{OptionSequenceExt, SequenceExt};
pub use slice::{
    drop_first, drop_last, drop_prefix, drop_suffix, ends_with, ends_with_iter, starts_with,
    starts_with_iter, strip_first, strip_last, strip_prefix, strip_suffix,
};
pub use text::Separator;
