use crate::convert::Converter;
use crate::error::Result;
use crate::format::{Adjustment, Base, Format};

/// Base-aware integer converter built on plain text scanning.
///
/// Parses integers from text with an optional sign, an optional base prefix
/// (`0x`/`0X` for hex) and case-insensitive digits; a scan that consumes no
/// digits or leaves unconsumed trailing non-whitespace is a conversion
/// failure, as is an out-of-range value. Renders integers honoring base,
/// case, base prefix, width, fill and adjustment.
///
/// Hexadecimal output defaults to upper-case digits; use
/// [`uppercase`](Self::uppercase) to change that.
///
/// # Examples
///
/// ```
/// use strcnv::{convert, Base, RadixConverter};
///
/// let cnv = RadixConverter::new().base(Base::Hex);
///
/// assert_eq!(convert::<String, _, _>(&255, &cnv)?.value()?, "FF");
/// assert_eq!(convert::<i32, _, _>("ff", &cnv)?.value()?, 255);
/// # Ok::<(), strcnv::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadixConverter {
    fmt: Format,
}

impl Default for RadixConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixConverter {
    /// Creates a converter with default options (decimal, no padding,
    /// upper-case hex digits).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fmt: Format {
                base: Base::Dec,
                width: 0,
                fill: ' ',
                adjustment: Adjustment::Right,
                uppercase: true,
                show_base: false,
                skip_whitespace: false,
            },
        }
    }

    /// Creates a converter from an existing formatting configuration.
    #[must_use]
    pub const fn with_format(fmt: Format) -> Self {
        Self { fmt }
    }

    /// Returns the current formatting configuration.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.fmt
    }

    /// Sets the numeric base.
    #[must_use]
    pub const fn base(mut self, base: Base) -> Self {
        self.fmt = self.fmt.base(base);
        self
    }

    /// Sets the minimum rendered width.
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.fmt = self.fmt.width(width);
        self
    }

    /// Sets the fill character.
    #[must_use]
    pub const fn fill(mut self, fill: char) -> Self {
        self.fmt = self.fmt.fill(fill);
        self
    }

    /// Sets the padding side.
    #[must_use]
    pub const fn adjustment(mut self, adjustment: Adjustment) -> Self {
        self.fmt = self.fmt.adjustment(adjustment);
        self
    }

    /// Enables or disables upper-case rendering.
    #[must_use]
    pub const fn uppercase(mut self, enabled: bool) -> Self {
        self.fmt = self.fmt.uppercase(enabled);
        self
    }

    /// Enables or disables the base prefix when rendering.
    #[must_use]
    pub const fn show_base(mut self, enabled: bool) -> Self {
        self.fmt = self.fmt.show_base(enabled);
        self
    }

    /// Enables or disables skipping of leading whitespace when parsing.
    #[must_use]
    pub const fn skip_whitespace(mut self, enabled: bool) -> Self {
        self.fmt = self.fmt.skip_whitespace(enabled);
        self
    }
}

/// Integer types expressible as a sign plus a `u128` magnitude.
///
/// Shared by the scanning back-ends so that range checking lives in one
/// place per type.
pub(crate) trait ScannedInt: Sized {
    /// Builds a value from scanned parts; `None` when out of range.
    fn from_parts(negative: bool, magnitude: u128) -> Option<Self>;

    /// Splits a value into its sign and magnitude.
    fn to_parts(&self) -> (bool, u128);
}

macro_rules! impl_scanned_signed {
    ($($t:ty),* $(,)?) => {$(
        impl ScannedInt for $t {
            fn from_parts(negative: bool, magnitude: u128) -> Option<Self> {
                let value = i128::try_from(magnitude).ok()?;
                Self::try_from(if negative { -value } else { value }).ok()
            }

            fn to_parts(&self) -> (bool, u128) {
                (*self < 0, self.unsigned_abs() as u128)
            }
        }
    )*};
}

macro_rules! impl_scanned_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl ScannedInt for $t {
            fn from_parts(negative: bool, magnitude: u128) -> Option<Self> {
                if negative && magnitude != 0 {
                    return None;
                }
                Self::try_from(magnitude).ok()
            }

            fn to_parts(&self) -> (bool, u128) {
                (false, *self as u128)
            }
        }
    )*};
}

impl_scanned_signed!(i8, i16, i32, i64, isize);
impl_scanned_unsigned!(u8, u16, u32, u64, usize);

/// Scans an integer out of `input` under the given configuration.
///
/// Returns the sign and magnitude, or `None` when no digits were consumed,
/// the value overflows the accumulator, or disallowed trailing characters
/// remain.
pub(crate) fn scan_integer(
    input: &str,
    fmt: &Format,
    trailing_whitespace_ok: bool,
) -> Option<(bool, u128)> {
    let mut rest = input;
    if fmt.skip_whitespace {
        rest = rest.trim_start();
    }

    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    if fmt.base == Base::Hex {
        if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            rest = stripped;
        }
    }

    let radix = fmt.base.radix();
    let mut magnitude: u128 = 0;
    let mut digits = 0usize;
    let mut end = rest.len();

    for (i, c) in rest.char_indices() {
        if let Some(digit) = c.to_digit(radix) {
            magnitude = magnitude
                .checked_mul(u128::from(radix))?
                .checked_add(u128::from(digit))?;
            digits += 1;
        } else {
            end = i;
            break;
        }
    }

    if digits == 0 {
        tracing::trace!(input, "integer scan consumed no digits");
        return None;
    }

    let tail = &rest[end..];
    let tail_ok =
        tail.is_empty() || (trailing_whitespace_ok && tail.chars().all(char::is_whitespace));
    if !tail_ok {
        tracing::trace!(input, tail, "integer scan left trailing characters");
        return None;
    }

    Some((negative, magnitude))
}

/// Renders a sign/magnitude pair as text under the given configuration.
pub(crate) fn render_integer(negative: bool, magnitude: u128, fmt: &Format) -> String {
    let digits = match (fmt.base, fmt.uppercase) {
        (Base::Dec, _) => magnitude.to_string(),
        (Base::Hex, true) => format!("{magnitude:X}"),
        (Base::Hex, false) => format!("{magnitude:x}"),
        (Base::Oct, _) => format!("{magnitude:o}"),
    };

    let mut body = String::new();
    if negative {
        body.push('-');
    }
    // Zero takes no prefix in any base.
    if fmt.show_base && magnitude != 0 {
        match fmt.base {
            Base::Hex => body.push_str(if fmt.uppercase { "0X" } else { "0x" }),
            Base::Oct => body.push('0'),
            Base::Dec => {}
        }
    }
    body.push_str(&digits);

    fmt.pad(&body)
}

macro_rules! impl_radix_converter {
    ($($t:ty),* $(,)?) => {$(
        impl Converter<str, $t> for RadixConverter {
            fn try_convert(&self, input: &str) -> Result<Option<$t>> {
                Ok(scan_integer(input, &self.fmt, true)
                    .and_then(|(negative, magnitude)| <$t>::from_parts(negative, magnitude)))
            }
        }

        impl Converter<String, $t> for RadixConverter {
            fn try_convert(&self, input: &String) -> Result<Option<$t>> {
                Converter::<str, $t>::try_convert(self, input.as_str())
            }
        }

        impl Converter<$t, String> for RadixConverter {
            fn try_convert(&self, input: &$t) -> Result<Option<String>> {
                let (negative, magnitude) = input.to_parts();
                Ok(Some(render_integer(negative, magnitude, &self.fmt)))
            }
        }
    )*};
}

impl_radix_converter!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    #[test]
    fn test_base_rendering() {
        let cnv = RadixConverter::new();
        assert_eq!(
            convert::<String, _, _>(&255, &cnv.base(Base::Dec))
                .unwrap()
                .value()
                .unwrap(),
            "255"
        );
        assert_eq!(
            convert::<String, _, _>(&255, &cnv.base(Base::Hex))
                .unwrap()
                .value()
                .unwrap(),
            "FF"
        );
        assert_eq!(
            convert::<String, _, _>(&255, &cnv.base(Base::Oct))
                .unwrap()
                .value()
                .unwrap(),
            "377"
        );
    }

    #[test]
    fn test_width_fill_adjustment() {
        let s01 = convert::<String, _, _>(&12, &RadixConverter::new().width(4))
            .unwrap()
            .value()
            .unwrap();
        let s02 = convert::<String, _, _>(&12, &RadixConverter::new().width(5).fill('*'))
            .unwrap()
            .value()
            .unwrap();
        let s03 = convert::<String, _, _>(
            &12,
            &RadixConverter::new()
                .width(5)
                .fill('x')
                .adjustment(Adjustment::Left),
        )
        .unwrap()
        .value()
        .unwrap();

        assert_eq!(s01, "  12");
        assert_eq!(s02, "***12");
        assert_eq!(s03, "12xxx");
    }

    #[test]
    fn test_str_to_int_with_fallback() {
        let cnv = RadixConverter::new();

        let not_int_str = String::from("not an int");
        let std_str = String::from("-11");
        let c_str = "-12";

        assert_eq!(
            convert::<i32, _, _>(&not_int_str, &cnv).unwrap().value_or(-1),
            -1
        );
        assert_eq!(convert::<i32, _, _>(&std_str, &cnv).unwrap().value_or(-1), -11);
        assert_eq!(convert::<i32, _, _>(c_str, &cnv).unwrap().value_or(-1), -12);
    }

    #[test]
    fn test_round_trip() {
        for base in [Base::Dec, Base::Hex, Base::Oct] {
            let cnv = RadixConverter::new().base(base);
            for value in [0i64, 1, 7, 8, 12, 255, 4096, -1, -255, i64::MAX, i64::MIN] {
                let rendered = convert::<String, _, _>(&value, &cnv)
                    .unwrap()
                    .value()
                    .unwrap();
                let parsed = convert::<i64, _, _>(rendered.as_str(), &cnv)
                    .unwrap()
                    .value()
                    .unwrap();
                assert_eq!(parsed, value, "round trip in base {base}");
            }
        }
    }

    #[test]
    fn test_hex_prefix_and_case_insensitive_digits() {
        let cnv = RadixConverter::new().base(Base::Hex);
        assert_eq!(convert::<i32, _, _>("0XF", &cnv).unwrap().value().unwrap(), 15);
        assert_eq!(convert::<i32, _, _>("0xf", &cnv).unwrap().value().unwrap(), 15);
        assert_eq!(convert::<i32, _, _>("Ff", &cnv).unwrap().value().unwrap(), 255);
    }

    #[test]
    fn test_skip_whitespace() {
        let strict = RadixConverter::new();
        let lenient = strict.skip_whitespace(true);

        assert!(!convert::<i32, _, _>(" 5", &strict).unwrap().has_value());
        assert_eq!(convert::<i32, _, _>(" 5", &lenient).unwrap().value().unwrap(), 5);
    }

    #[test]
    fn test_trailing_characters_fail() {
        let cnv = RadixConverter::new();
        assert!(!convert::<i32, _, _>("12abc", &cnv).unwrap().has_value());
        // Trailing whitespace is tolerated.
        assert_eq!(convert::<i32, _, _>("12  ", &cnv).unwrap().value().unwrap(), 12);
    }

    #[test]
    fn test_out_of_range_is_absent_not_error() {
        let cnv = RadixConverter::new();
        assert!(!convert::<u8, _, _>("256", &cnv).unwrap().has_value());
        assert!(!convert::<i8, _, _>("-129", &cnv).unwrap().has_value());
        assert_eq!(convert::<u8, _, _>("255", &cnv).unwrap().value().unwrap(), 255);
        assert_eq!(convert::<i8, _, _>("-128", &cnv).unwrap().value().unwrap(), -128);
    }

    #[test]
    fn test_negative_into_unsigned_fails() {
        let cnv = RadixConverter::new();
        assert!(!convert::<u32, _, _>("-5", &cnv).unwrap().has_value());
        // "-0" is still zero.
        assert_eq!(convert::<u32, _, _>("-0", &cnv).unwrap().value().unwrap(), 0);
    }

    #[test]
    fn test_sign_only_and_empty_fail() {
        let cnv = RadixConverter::new();
        for input in ["", "-", "+", "  "] {
            assert!(!convert::<i32, _, _>(input, &cnv).unwrap().has_value());
        }
    }

    #[test]
    fn test_show_base_rendering() {
        let cnv = RadixConverter::new().base(Base::Hex).show_base(true);
        assert_eq!(
            convert::<String, _, _>(&255, &cnv).unwrap().value().unwrap(),
            "0XFF"
        );
        assert_eq!(
            convert::<String, _, _>(&255, &cnv.uppercase(false))
                .unwrap()
                .value()
                .unwrap(),
            "0xff"
        );
        // Zero carries no prefix.
        assert_eq!(convert::<String, _, _>(&0, &cnv).unwrap().value().unwrap(), "0");
    }

    #[test]
    fn test_configuration_reuse_matches_reconstruction() {
        let reused = RadixConverter::new().base(Base::Hex).width(4);
        let first = convert::<String, _, _>(&255, &reused).unwrap().value().unwrap();
        let second = convert::<String, _, _>(&255, &reused).unwrap().value().unwrap();
        let fresh = convert::<String, _, _>(&255, &RadixConverter::new().base(Base::Hex).width(4))
            .unwrap()
            .value()
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first, fresh);
    }
}
