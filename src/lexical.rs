use crate::convert::Converter;
use crate::error::{Error, Result};
use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

/// Strict cast back-end wrapping [`FromStr`] and [`Display`].
///
/// Offers no formatting options and no tolerance: any malformed input
/// raises [`Error::Cast`] instead of reporting an absent result, so there
/// is no non-raising process flow through this back-end. It exists as the
/// baseline the configurable back-ends improve on; prefer
/// [`RadixConverter`](crate::RadixConverter) or
/// [`StreamConverter`](crate::StreamConverter) when per-element failure
/// should not abort a batch.
///
/// # Examples
///
/// ```
/// use strcnv::{convert, LexicalCast};
///
/// assert_eq!(convert::<i32, _, _>("-11", &LexicalCast)?.value()?, -11);
///
/// // No whitespace skipping, no base handling: this raises.
/// assert!(convert::<i32, _, _>(" 5", &LexicalCast).is_err());
/// # Ok::<(), strcnv::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalCast;

impl LexicalCast {
    /// Creates the cast back-end.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<T: FromStr> Converter<str, T> for LexicalCast {
    fn try_convert(&self, input: &str) -> Result<Option<T>> {
        input
            .parse()
            .map(Some)
            .map_err(|_| Error::cast(input, type_name::<T>()))
    }
}

impl<T: Display> Converter<T, String> for LexicalCast {
    fn try_convert(&self, input: &T) -> Result<Option<String>> {
        Ok(Some(input.to_string()))
    }
}
