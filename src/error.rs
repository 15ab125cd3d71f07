use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the strcnv library.
///
/// Note that an ordinary conversion failure (bad characters, out-of-range
/// value, base mismatch) is *not* an error: the non-raising back-ends report
/// it as an absent [`Maybe`](crate::Maybe) and it only becomes
/// [`Error::BadAccess`] when the caller extracts with the raising policy.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Value extraction was attempted on an empty conversion result.
    #[error("no converted value to extract")]
    BadAccess,

    /// A strict cast back-end rejected its input.
    ///
    /// Raised by [`LexicalCast`](crate::LexicalCast) on any malformed input.
    /// Unlike the non-raising back-ends, there is no way to opt out of this
    /// short of not using that back-end.
    #[error("failed to cast '{input}' to {target}")]
    Cast {
        /// The input text that was rejected
        input: String,
        /// Name of the requested target type
        target: &'static str,
    },

    /// Invalid configuration text at the option surface.
    #[error("invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },
}

impl Error {
    /// Creates a cast error for the given input and target type name.
    #[must_use]
    pub fn cast(input: impl Into<String>, target: &'static str) -> Self {
        Self::Cast {
            input: input.into(),
            target,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true if this is a bad access error.
    #[must_use]
    pub const fn is_bad_access(&self) -> bool {
        matches!(self, Self::BadAccess)
    }

    /// Returns true if this is a cast error.
    #[must_use]
    pub const fn is_cast(&self) -> bool {
        matches!(self, Self::Cast { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}
