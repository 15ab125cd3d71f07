//! # strcnv
//!
//! A small library for converting between textual representations and typed
//! values, with configurable formatting and a configurable failure policy.
//!
//! ## Features
//!
//! - Pluggable, interchangeable conversion back-ends behind one trait
//! - Explicit "value or nothing" results instead of sentinel numbers
//! - Base, width, fill, alignment, case and prefix formatting options
//! - Raising and default-substituting extraction policies, chosen per call
//!   site rather than per back-end
//! - Batch conversion over ordered sequences
//!
//! ## Quick Start
//!
//! ```
//! use strcnv::{convert, Base, RadixConverter};
//!
//! let cnv = RadixConverter::new().base(Base::Hex).skip_whitespace(true);
//!
//! // Substituting policy: failed conversions become the chosen default.
//! assert_eq!(convert::<i32, _, _>(" 5", &cnv)?.value_or(-1), 5);
//! assert_eq!(convert::<i32, _, _>("garbage", &cnv)?.value_or(-1), -1);
//!
//! // Raising policy: the same result, extracted loudly.
//! assert!(convert::<i32, _, _>("garbage", &cnv)?.value().is_err());
//! # Ok::<(), strcnv::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The library is a small dispatch mechanism plus a family of back-ends:
//! 1. **[`Maybe`]**: holds a converted value, or nothing, explicitly
//! 2. **[`Format`]**: the per-call-immutable formatting configuration
//! 3. **[`Converter`]**: the back-end capability every variant implements
//! 4. **[`convert`]** / **[`convert_all`]**: the generic entry points
//!
//! Back-ends differ in grammar and failure discipline:
//! [`RadixConverter`] scans base-aware integer text, [`StreamConverter`]
//! runs through a shared internal buffer, and [`LexicalCast`] is the strict
//! baseline that raises on any malformed input.

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod batch;
mod convert;
mod error;
mod format;
mod lexical;
mod maybe;
mod radix;
mod stream;

pub use batch::{convert_all, convert_all_or, BatchStats};
pub use convert::{convert, Converter};
pub use error::{Error, Result};
pub use format::{Adjustment, Base, Format};
pub use lexical::LexicalCast;
pub use maybe::Maybe;
pub use radix::RadixConverter;
pub use stream::StreamConverter;

/// Strictly parses `input` into `T`, raising on any malformed input.
///
/// This is the one-shot convenience over [`LexicalCast`]: no formatting
/// options, no non-raising flow. Use [`convert`] with a configurable
/// back-end when failure should be recoverable.
///
/// # Errors
///
/// Returns [`Error::Cast`] when `input` does not parse as `T`.
///
/// # Examples
///
/// ```
/// use strcnv::cast;
///
/// assert_eq!(cast::<i32>("-11")?, -11);
/// assert!(cast::<i32>("not an int").is_err());
/// # Ok::<(), strcnv::Error>(())
/// ```
pub fn cast<T: std::str::FromStr>(input: &str) -> Result<T> {
    convert::<T, _, _>(input, &LexicalCast)?.value()
}
