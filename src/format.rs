use crate::error::Error;
use std::fmt;
use std::str::FromStr;

const DEFAULT_FILL: char = ' ';

/// Numeric base used when parsing and rendering integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Base 10
    Dec,
    /// Base 16
    Hex,
    /// Base 8
    Oct,
}

impl Base {
    /// Returns the radix as a number.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Dec => 10,
            Self::Hex => 16,
            Self::Oct => 8,
        }
    }

    /// Returns the conventional textual prefix for this base.
    ///
    /// Empty for decimal; the prefix is only emitted when
    /// [`Format::show_base`] is enabled.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Dec => "",
            Self::Hex => "0x",
            Self::Oct => "0",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dec => "dec",
            Self::Hex => "hex",
            Self::Oct => "oct",
        };
        f.write_str(name)
    }
}

impl FromStr for Base {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dec" => Ok(Self::Dec),
            "hex" => Ok(Self::Hex),
            "oct" => Ok(Self::Oct),
            other => Err(Error::config(format!(
                "unknown base '{other}', expected one of: dec, hex, oct"
            ))),
        }
    }
}

/// Side on which rendered text is padded out to the configured width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Pad on the right, text flush left
    Left,
    /// Pad on the left, text flush right (default)
    Right,
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Adjustment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(Error::config(format!(
                "unknown adjustment '{other}', expected 'left' or 'right'"
            ))),
        }
    }
}

/// Formatting options interpreted by the configurable back-ends.
///
/// A `Format` is logically immutable per conversion call: no back-end call
/// mutates it, and a value constructed once may be reused across any number
/// of conversions. Reuse behaves identically to reconstruction.
///
/// Unset options take the defaults of [`Format::default`]; individual
/// back-ends may start from different defaults where their textual grammar
/// calls for it (see [`RadixConverter`](crate::RadixConverter)).
///
/// # Examples
///
/// ```
/// use strcnv::{Adjustment, Base, Format};
///
/// let fmt = Format::default()
///     .base(Base::Hex)
///     .width(5)
///     .fill('*')
///     .adjustment(Adjustment::Right);
///
/// assert_eq!(fmt.width, 5);
/// assert_eq!(fmt.fill, '*');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Format {
    /// Numeric base for parsing and rendering
    pub base: Base,

    /// Minimum rendered width in characters; 0 disables padding
    pub width: usize,

    /// Fill character used to pad out to `width`
    pub fill: char,

    /// Which side rendered text is padded on
    pub adjustment: Adjustment,

    /// Render digits (and base prefixes) in upper case
    pub uppercase: bool,

    /// Emit the conventional base prefix when rendering
    pub show_base: bool,

    /// Skip leading whitespace when parsing
    pub skip_whitespace: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            base: Base::Dec,
            width: 0,
            fill: DEFAULT_FILL,
            adjustment: Adjustment::Right,
            uppercase: false,
            show_base: false,
            skip_whitespace: false,
        }
    }
}

impl Format {
    /// Sets the numeric base.
    #[must_use]
    pub const fn base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    /// Sets the minimum rendered width.
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the fill character.
    #[must_use]
    pub const fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the padding side.
    #[must_use]
    pub const fn adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// Enables or disables upper-case rendering.
    #[must_use]
    pub const fn uppercase(mut self, enabled: bool) -> Self {
        self.uppercase = enabled;
        self
    }

    /// Enables or disables the base prefix when rendering.
    #[must_use]
    pub const fn show_base(mut self, enabled: bool) -> Self {
        self.show_base = enabled;
        self
    }

    /// Enables or disables skipping of leading whitespace when parsing.
    #[must_use]
    pub const fn skip_whitespace(mut self, enabled: bool) -> Self {
        self.skip_whitespace = enabled;
        self
    }

    /// Pads `body` out to the configured width with the fill character.
    ///
    /// Text already at or beyond the width is returned unchanged.
    pub(crate) fn pad(&self, body: &str) -> String {
        let len = body.chars().count();
        if self.width <= len {
            return body.to_string();
        }

        let padding: String = std::iter::repeat(self.fill)
            .take(self.width - len)
            .collect();

        match self.adjustment {
            Adjustment::Right => format!("{padding}{body}"),
            Adjustment::Left => format!("{body}{padding}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let fmt = Format::default();
        assert_eq!(fmt.base, Base::Dec);
        assert_eq!(fmt.width, 0);
        assert_eq!(fmt.fill, ' ');
        assert_eq!(fmt.adjustment, Adjustment::Right);
        assert!(!fmt.uppercase);
        assert!(!fmt.show_base);
        assert!(!fmt.skip_whitespace);
    }

    #[test]
    fn test_chained_setters() {
        let fmt = Format::default()
            .base(Base::Oct)
            .width(8)
            .fill('0')
            .adjustment(Adjustment::Left)
            .uppercase(true)
            .show_base(true)
            .skip_whitespace(true);

        assert_eq!(fmt.base, Base::Oct);
        assert_eq!(fmt.width, 8);
        assert_eq!(fmt.fill, '0');
        assert_eq!(fmt.adjustment, Adjustment::Left);
        assert!(fmt.uppercase);
        assert!(fmt.show_base);
        assert!(fmt.skip_whitespace);
    }

    #[test]
    fn test_pad_right() {
        let fmt = Format::default().width(4);
        assert_eq!(fmt.pad("12"), "  12");
    }

    #[test]
    fn test_pad_left_with_fill() {
        let fmt = Format::default()
            .width(5)
            .fill('x')
            .adjustment(Adjustment::Left);
        assert_eq!(fmt.pad("12"), "12xxx");
    }

    #[test]
    fn test_pad_no_truncation() {
        let fmt = Format::default().width(2);
        assert_eq!(fmt.pad("12345"), "12345");
    }

    #[test]
    fn test_base_radix_and_prefix() {
        assert_eq!(Base::Dec.radix(), 10);
        assert_eq!(Base::Hex.radix(), 16);
        assert_eq!(Base::Oct.radix(), 8);
        assert_eq!(Base::Hex.prefix(), "0x");
        assert_eq!(Base::Oct.prefix(), "0");
        assert_eq!(Base::Dec.prefix(), "");
    }

    #[test]
    fn test_base_from_str() {
        assert_eq!("hex".parse::<Base>().unwrap(), Base::Hex);
        assert_eq!("dec".parse::<Base>().unwrap(), Base::Dec);
        assert_eq!("oct".parse::<Base>().unwrap(), Base::Oct);
        assert!("binary".parse::<Base>().unwrap_err().is_config());
    }

    #[test]
    fn test_adjustment_from_str() {
        assert_eq!("left".parse::<Adjustment>().unwrap(), Adjustment::Left);
        assert_eq!("right".parse::<Adjustment>().unwrap(), Adjustment::Right);
        assert!("center".parse::<Adjustment>().unwrap_err().is_config());
    }

    #[test]
    fn test_display_round_trip() {
        for base in [Base::Dec, Base::Hex, Base::Oct] {
            assert_eq!(base.to_string().parse::<Base>().unwrap(), base);
        }
        for adj in [Adjustment::Left, Adjustment::Right] {
            assert_eq!(adj.to_string().parse::<Adjustment>().unwrap(), adj);
        }
    }
}
