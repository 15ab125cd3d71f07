use crate::convert::Converter;
use crate::error::Result;
use crate::format::{Adjustment, Base, Format};
use crate::radix::{scan_integer, ScannedInt};
use std::cell::{Cell, RefCell};
use std::fmt::Write as _;

/// Stream-style converter that renders and parses through an internal,
/// reusable text buffer.
///
/// The buffer is a live, non-duplicable resource: `StreamConverter` is not
/// [`Clone`], and a batch of conversions must hold one instance by shared
/// reference so that its configuration and buffer carry across calls. The
/// interior mutability also makes the type `!Sync`; concurrent use from
/// multiple threads requires external synchronization by the caller.
///
/// Parsing fails when the scan consumes no digits or leaves unconvertible
/// trailing characters; the outcome of the most recent call is queryable
/// through [`failed`](Self::failed), mirroring a stream's error flag.
/// Hexadecimal parsing accepts an optional `0x`/`0X` prefix. Rendering
/// honors base, case (digits and prefix), base prefix, width, fill and
/// adjustment; hex digits default to lower case.
///
/// # Examples
///
/// ```
/// use strcnv::{convert, Base, StreamConverter};
///
/// let cnv = StreamConverter::new()
///     .base(Base::Hex)
///     .uppercase(true)
///     .show_base(true);
///
/// assert_eq!(convert::<String, _, _>(&15, &cnv)?.value()?, "0XF");
/// assert_eq!(convert::<String, _, _>(&16, &cnv)?.value()?, "0X10");
/// # Ok::<(), strcnv::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct StreamConverter {
    fmt: Format,
    buf: RefCell<String>,
    failed: Cell<bool>,
}

impl StreamConverter {
    /// Creates a converter with default options (decimal, no padding,
    /// lower-case hex digits).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter from an existing formatting configuration.
    #[must_use]
    pub fn with_format(fmt: Format) -> Self {
        Self {
            fmt,
            buf: RefCell::new(String::new()),
            failed: Cell::new(false),
        }
    }

    /// Returns the current formatting configuration.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.fmt
    }

    /// Mutable access to the formatting configuration, for reconfiguring
    /// a long-lived instance between batches.
    pub fn format_mut(&mut self) -> &mut Format {
        &mut self.fmt
    }

    /// Returns true if the most recent conversion through this instance
    /// failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed.get()
    }

    /// Resets the failure flag and the internal buffer.
    pub fn clear(&self) {
        self.failed.set(false);
        self.buf.borrow_mut().clear();
    }

    /// Sets the numeric base.
    #[must_use]
    pub fn base(mut self, base: Base) -> Self {
        self.fmt = self.fmt.base(base);
        self
    }

    /// Sets the minimum rendered width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.fmt = self.fmt.width(width);
        self
    }

    /// Sets the fill character.
    #[must_use]
    pub fn fill(mut self, fill: char) -> Self {
        self.fmt = self.fmt.fill(fill);
        self
    }

    /// Sets the padding side.
    #[must_use]
    pub fn adjustment(mut self, adjustment: Adjustment) -> Self {
        self.fmt = self.fmt.adjustment(adjustment);
        self
    }

    /// Enables or disables upper-case rendering.
    #[must_use]
    pub fn uppercase(mut self, enabled: bool) -> Self {
        self.fmt = self.fmt.uppercase(enabled);
        self
    }

    /// Enables or disables the base prefix when rendering.
    #[must_use]
    pub fn show_base(mut self, enabled: bool) -> Self {
        self.fmt = self.fmt.show_base(enabled);
        self
    }

    /// Enables or disables skipping of leading whitespace when parsing.
    #[must_use]
    pub fn skip_whitespace(mut self, enabled: bool) -> Self {
        self.fmt = self.fmt.skip_whitespace(enabled);
        self
    }

    /// Scans an integer from `input`, recording the outcome in the
    /// failure flag.
    fn scan<T: ScannedInt>(&self, input: &str) -> Option<T> {
        let value = scan_integer(input, &self.fmt, self.fmt.skip_whitespace)
            .and_then(|(negative, magnitude)| T::from_parts(negative, magnitude));
        self.failed.set(value.is_none());
        value
    }

    /// Renders an integer into the shared buffer, recording the outcome in
    /// the failure flag.
    fn render<T: ScannedInt>(&self, input: &T) -> Option<String> {
        let rendered = self.render_into_buffer(input.to_parts());
        self.failed.set(rendered.is_none());
        rendered
    }

    fn render_into_buffer(&self, (negative, magnitude): (bool, u128)) -> Option<String> {
        let mut buf = self.buf.borrow_mut();
        buf.clear();

        if negative {
            buf.push('-');
        }
        // Zero takes no prefix in any base.
        if self.fmt.show_base && magnitude != 0 {
            match self.fmt.base {
                Base::Hex => buf.push_str(if self.fmt.uppercase { "0X" } else { "0x" }),
                Base::Oct => buf.push('0'),
                Base::Dec => {}
            }
        }

        let written = match (self.fmt.base, self.fmt.uppercase) {
            (Base::Dec, _) => write!(buf, "{magnitude}"),
            (Base::Hex, true) => write!(buf, "{magnitude:X}"),
            (Base::Hex, false) => write!(buf, "{magnitude:x}"),
            (Base::Oct, _) => write!(buf, "{magnitude:o}"),
        };
        written.ok()?;

        Some(self.fmt.pad(&buf))
    }
}

macro_rules! impl_stream_converter {
    ($($t:ty),* $(,)?) => {$(
        impl Converter<str, $t> for StreamConverter {
            fn try_convert(&self, input: &str) -> Result<Option<$t>> {
                Ok(self.scan(input))
            }
        }

        impl Converter<String, $t> for StreamConverter {
            fn try_convert(&self, input: &String) -> Result<Option<$t>> {
                Ok(self.scan(input.as_str()))
            }
        }

        impl Converter<$t, String> for StreamConverter {
            fn try_convert(&self, input: &$t) -> Result<Option<String>> {
                Ok(self.render(input))
            }
        }
    )*};
}

impl_stream_converter!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    #[test]
    fn test_hex_parse_with_skipped_whitespace() {
        let cnv = StreamConverter::new().base(Base::Hex).skip_whitespace(true);

        assert_eq!(convert::<i32, _, _>(" 5", &cnv).unwrap().value().unwrap(), 5);
        assert_eq!(convert::<i32, _, _>("0XF", &cnv).unwrap().value().unwrap(), 15);
        assert!(!convert::<i32, _, _>("not an int", &cnv).unwrap().has_value());
    }

    #[test]
    fn test_uppercase_show_base_rendering() {
        let cnv = StreamConverter::new()
            .base(Base::Hex)
            .uppercase(true)
            .show_base(true);

        let rendered: Vec<String> = [15, 16, 17, 18]
            .iter()
            .map(|v| convert::<String, _, _>(v, &cnv).unwrap().value().unwrap())
            .collect();

        assert_eq!(rendered, ["0XF", "0X10", "0X11", "0X12"]);
    }

    #[test]
    fn test_hex_defaults_to_lower_case() {
        let cnv = StreamConverter::new().base(Base::Hex);
        assert_eq!(
            convert::<String, _, _>(&255, &cnv).unwrap().value().unwrap(),
            "ff"
        );
    }

    #[test]
    fn test_trailing_characters_fail_without_skipws() {
        let cnv = StreamConverter::new();
        assert!(!convert::<i32, _, _>("12 ", &cnv).unwrap().has_value());
        assert!(!convert::<i32, _, _>("12abc", &cnv).unwrap().has_value());

        let lenient = StreamConverter::new().skip_whitespace(true);
        assert_eq!(
            convert::<i32, _, _>("12 ", &lenient).unwrap().value().unwrap(),
            12
        );
    }

    #[test]
    fn test_failure_flag_tracks_latest_call() {
        let cnv = StreamConverter::new();

        assert!(!convert::<i32, _, _>("bad", &cnv).unwrap().has_value());
        assert!(cnv.failed());

        assert_eq!(convert::<i32, _, _>("7", &cnv).unwrap().value().unwrap(), 7);
        assert!(!cnv.failed());

        assert!(!convert::<i32, _, _>("bad again", &cnv).unwrap().has_value());
        assert!(cnv.failed());
        cnv.clear();
        assert!(!cnv.failed());
    }

    #[test]
    fn test_shared_instance_across_batch() {
        // One instance, held by reference, carries configuration across calls.
        let cnv = StreamConverter::new().base(Base::Hex).skip_whitespace(true);

        let results: Vec<i32> = [" 5", "0XF"]
            .iter()
            .map(|s| convert::<i32, _, _>(*s, &cnv).unwrap().value().unwrap())
            .collect();

        assert_eq!(results, [5, 15]);
    }

    #[test]
    fn test_reconfigure_between_batches() {
        let mut cnv = StreamConverter::new();
        assert_eq!(
            convert::<String, _, _>(&255, &cnv).unwrap().value().unwrap(),
            "255"
        );

        *cnv.format_mut() = cnv.format().base(Base::Oct);
        assert_eq!(
            convert::<String, _, _>(&255, &cnv).unwrap().value().unwrap(),
            "377"
        );
    }

    #[test]
    fn test_width_and_fill_apply() {
        let cnv = StreamConverter::new().width(5).fill('*');
        assert_eq!(
            convert::<String, _, _>(&12, &cnv).unwrap().value().unwrap(),
            "***12"
        );
    }

    #[test]
    fn test_string_source() {
        let cnv = StreamConverter::new();
        let input = String::from("-42");
        assert_eq!(
            convert::<i64, _, _>(&input, &cnv).unwrap().value().unwrap(),
            -42
        );
    }
}
