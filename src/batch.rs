//! Batch application of a converter across an ordered sequence of inputs.

use crate::convert::{convert, Converter};
use crate::error::Result;
use crate::maybe::Maybe;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Converts every input through the given back-end, preserving order.
///
/// Per-element conversion failure does not abort the batch: failed entries
/// come back as `Maybe::Absent` and the caller applies an extraction policy
/// afterwards — chosen once, outside the loop. Only a back-end-intrinsic
/// raise (the strict cast variant) aborts the whole batch.
///
/// # Errors
///
/// Propagates the first back-end-intrinsic error, discarding any partial
/// results.
///
/// # Examples
///
/// ```
/// use strcnv::{convert_all, Base, RadixConverter};
///
/// let cnv = RadixConverter::new().base(Base::Hex).skip_whitespace(true);
/// let results = convert_all::<i32, _, _, _>([" 5", "0XF", "not an int"], &cnv)?;
///
/// let ints: Vec<i32> = results.into_iter().map(|r| r.value_or(i32::MAX)).collect();
/// assert_eq!(ints, [5, 15, i32::MAX]);
/// # Ok::<(), strcnv::Error>(())
/// ```
#[instrument(skip_all)]
pub fn convert_all<'a, T, S, C, I>(inputs: I, converter: &C) -> Result<Vec<Maybe<T>>>
where
    S: ?Sized + 'a,
    C: Converter<S, T>,
    I: IntoIterator<Item = &'a S>,
{
    let results: Vec<Maybe<T>> = inputs
        .into_iter()
        .map(|input| convert(input, converter))
        .collect::<Result<_>>()?;

    debug!(
        total = results.len(),
        converted = results.iter().filter(|r| r.has_value()).count(),
        "batch conversion finished"
    );

    Ok(results)
}

/// Converts every input, substituting `default` for entries that fail.
///
/// Equivalent to [`convert_all`] followed by
/// [`value_or`](Maybe::value_or) on each element.
///
/// # Errors
///
/// Propagates back-end-intrinsic errors, as [`convert_all`] does.
pub fn convert_all_or<'a, T, S, C, I>(inputs: I, converter: &C, default: T) -> Result<Vec<T>>
where
    T: Clone,
    S: ?Sized + 'a,
    C: Converter<S, T>,
    I: IntoIterator<Item = &'a S>,
{
    Ok(convert_all(inputs, converter)?
        .into_iter()
        .map(|result| result.value_or(default.clone()))
        .collect())
}

/// Statistics describing one batch conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchStats {
    /// Number of inputs processed
    pub total: usize,

    /// Number of inputs that converted successfully
    pub converted: usize,

    /// Number of inputs that failed conversion
    pub failed: usize,

    /// Wall-clock time spent converting
    pub duration: Duration,
}

impl BatchStats {
    /// Builds statistics from batch results and the measured duration.
    #[must_use]
    pub fn from_results<T>(results: &[Maybe<T>], duration: Duration) -> Self {
        let converted = results.iter().filter(|r| r.has_value()).count();
        Self {
            total: results.len(),
            converted,
            failed: results.len() - converted,
            duration,
        }
    }

    /// Fraction of inputs that converted successfully, in `0.0..=1.0`.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.converted as f64 / self.total as f64
    }

    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════╗");
        println!("║         Batch Conversion             ║");
        println!("╠══════════════════════════════════════╣");
        println!("║ Inputs:        {:>8}              ║", self.total);
        println!("║ Converted:     {:>8}              ║", self.converted);
        println!("║ Failed:        {:>8}              ║", self.failed);
        println!(
            "║ Duration:      {:>8.3}s             ║",
            self.duration.as_secs_f64()
        );
        println!("╚══════════════════════════════════════╝\n");
    }
}
