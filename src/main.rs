use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use strcnv::{
    convert, Adjustment, Base, BatchStats, Converter, Format, LexicalCast, RadixConverter,
    StreamConverter,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "strcnv",
    version,
    author,
    about = "Convert between text and typed integer values",
    long_about = "Convert between textual representations and integer values with \
    configurable formatting and failure policy.\n\n\
    Inputs are converted through a pluggable back-end; entries that fail to \
    convert are reported explicitly, substituted with a chosen default, or \
    abort the run, depending on the selected policy.\n\n\
    USAGE EXAMPLES:\n  \
      # Parse hexadecimal inputs, substituting -1 for failures\n  \
      strcnv --base hex --skip-ws --default -1 ' 5' 0XF 'not an int'\n\n  \
      # Render integers as prefixed upper-case hex\n  \
      strcnv --mode render --base hex --uppercase --show-base 15 16 17 18\n\n  \
      # Strict parsing through the cast back-end\n  \
      strcnv --backend lexical --strict -- -11 -12\n\n  \
      # Emit a JSON report\n  \
      strcnv --base oct --json 377 255"
)]
struct Cli {
    /// Values to convert
    #[arg(required = true, value_name = "VALUE", allow_hyphen_values = true)]
    inputs: Vec<String>,

    /// Conversion direction
    #[arg(short, long, value_enum, default_value = "parse")]
    mode: CliMode,

    /// Conversion back-end
    #[arg(short, long, value_enum, default_value = "radix")]
    backend: CliBackend,

    /// Numeric base for parsing and rendering
    #[arg(short = 'B', long, value_enum, default_value = "dec")]
    base: CliBase,

    /// Minimum rendered width (0 disables padding)
    #[arg(long, default_value_t = 0)]
    width: usize,

    /// Fill character used to pad rendered output
    #[arg(long, default_value_t = ' ')]
    fill: char,

    /// Side rendered text is padded on
    #[arg(long, value_enum, default_value = "right")]
    adjust: CliAdjustment,

    /// Render digits and base prefixes in upper case
    #[arg(short, long)]
    uppercase: bool,

    /// Emit the conventional base prefix when rendering
    #[arg(long)]
    show_base: bool,

    /// Skip leading whitespace when parsing
    #[arg(long)]
    skip_ws: bool,

    /// Substitute this value for inputs that fail to parse
    #[arg(short, long, value_name = "VALUE", conflicts_with = "strict", allow_hyphen_values = true)]
    default: Option<i64>,

    /// Abort on the first input that fails to convert
    #[arg(long)]
    strict: bool,

    /// Emit a JSON report instead of plain lines
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliMode {
    /// Text to integers
    Parse,
    /// Integers to text
    Render,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliBackend {
    /// Base-aware integer text scanning
    Radix,
    /// Buffered stream-style conversion
    Stream,
    /// Strict cast; raises on any malformed input
    Lexical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliBase {
    Dec,
    Hex,
    Oct,
}

impl From<CliBase> for Base {
    fn from(base: CliBase) -> Self {
        match base {
            CliBase::Dec => Self::Dec,
            CliBase::Hex => Self::Hex,
            CliBase::Oct => Self::Oct,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliAdjustment {
    Left,
    Right,
}

impl From<CliAdjustment> for Adjustment {
    fn from(adjustment: CliAdjustment) -> Self {
        match adjustment {
            CliAdjustment::Left => Self::Left,
            CliAdjustment::Right => Self::Right,
        }
    }
}

/// Failure policy applied to parse results, chosen once for the whole run.
#[derive(Debug, Clone, Copy)]
enum Policy {
    /// Report failed entries as absent
    Show,
    /// Substitute a default for failed entries
    Default(i64),
    /// Abort on the first failed entry
    Strict,
}

#[derive(Debug, Serialize)]
struct Report {
    results: Vec<Value>,
    stats: BatchStats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    if matches!(cli.backend, CliBackend::Lexical)
        && (cli.width > 0
            || cli.uppercase
            || cli.show_base
            || cli.skip_ws
            || cli.base != CliBase::Dec)
    {
        tracing::warn!("the lexical back-end ignores formatting options");
    }

    let format = Format::default()
        .base(cli.base.into())
        .width(cli.width)
        .fill(cli.fill)
        .adjustment(cli.adjust.into())
        .uppercase(cli.uppercase)
        .show_base(cli.show_base)
        .skip_whitespace(cli.skip_ws);

    let policy = if cli.strict {
        Policy::Strict
    } else if let Some(default) = cli.default {
        Policy::Default(default)
    } else {
        Policy::Show
    };

    let report = match (cli.mode, cli.backend) {
        (CliMode::Parse, CliBackend::Radix) => {
            parse_inputs(&cli.inputs, &RadixConverter::with_format(format), policy)?
        }
        (CliMode::Parse, CliBackend::Stream) => {
            parse_inputs(&cli.inputs, &StreamConverter::with_format(format), policy)?
        }
        (CliMode::Parse, CliBackend::Lexical) => parse_inputs(&cli.inputs, &LexicalCast, policy)?,
        (CliMode::Render, CliBackend::Radix) => {
            render_inputs(&cli.inputs, &RadixConverter::with_format(format))?
        }
        (CliMode::Render, CliBackend::Stream) => {
            render_inputs(&cli.inputs, &StreamConverter::with_format(format))?
        }
        (CliMode::Render, CliBackend::Lexical) => render_inputs(&cli.inputs, &LexicalCast)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (input, value) in cli.inputs.iter().zip(&report.results) {
            match value {
                Value::Null => println!("{input} -> (none)"),
                Value::String(s) => println!("{input} -> {s}"),
                other => println!("{input} -> {other}"),
            }
        }
        report.stats.print_summary();
    }

    Ok(())
}

/// Parses every input as an `i64` through the given back-end.
fn parse_inputs<C>(inputs: &[String], converter: &C, policy: Policy) -> anyhow::Result<Report>
where
    C: Converter<str, i64>,
{
    let start = Instant::now();

    let mut raw = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let maybe = convert::<i64, _, _>(input.as_str(), converter)
            .with_context(|| format!("converting input #{index} ('{input}')"))?;
        raw.push(maybe);
    }

    // Statistics describe the raw conversion outcomes, before any
    // substitution policy rewrites them.
    let stats = BatchStats::from_results(&raw, start.elapsed());

    let mut results = Vec::with_capacity(raw.len());
    for (index, maybe) in raw.into_iter().enumerate() {
        let value = match policy {
            Policy::Strict => Some(maybe.value().with_context(|| {
                format!("input #{index} ('{}') failed to parse", inputs[index])
            })?),
            Policy::Default(default) => Some(maybe.value_or(default)),
            Policy::Show => maybe.into_option(),
        };
        results.push(value.map_or(Value::Null, Value::from));
    }

    Ok(Report { results, stats })
}

/// Renders every input (a decimal integer) as text through the given
/// back-end.
fn render_inputs<C>(inputs: &[String], converter: &C) -> anyhow::Result<Report>
where
    C: Converter<i64, String>,
{
    let start = Instant::now();

    let mut raw = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let value: i64 = input
            .trim()
            .parse()
            .with_context(|| format!("input #{index} ('{input}') is not a decimal integer"))?;
        let maybe = convert::<String, _, _>(&value, converter)
            .with_context(|| format!("rendering input #{index} ('{input}')"))?;
        raw.push(maybe);
    }

    let stats = BatchStats::from_results(&raw, start.elapsed());
    let results = raw
        .into_iter()
        .map(|maybe| maybe.into_option().map_or(Value::Null, Value::from))
        .collect();

    Ok(Report { results, stats })
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("strcnv=info"),
        1 => EnvFilter::new("strcnv=debug"),
        _ => EnvFilter::new("strcnv=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .init();

    Ok(())
}
