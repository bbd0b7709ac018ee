//! CLI helpers.

pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

pub use self::error::{error_context, LineCol};
use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

use crate::env::Fixture;
use crate::input::IStr;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Options of a puzzle binary.
#[derive(Debug, Default)]
pub struct Opts {
    /// Log debug messages.
    verbose: bool,
    /// Log every message, including single instructions.
    trace: bool,
    /// Output JSON lines.
    json: bool,
    /// Solve the given input rather than the declared fixture.
    input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(opts.log_level());
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--trace" => {
                    opts.trace = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn log_level(&self) -> log::LevelFilter {
        if self.trace {
            log::LevelFilter::Trace
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Solve a puzzle and emit its answer.
///
/// The answer is compared against `expected` unless another input was
/// provided with `--input`.
pub fn run<T, O, C>(opts: &Opts, fixture: Fixture, expected: C, solve: T) -> Result<()>
where
    T: FnOnce(IStr) -> Result<O>,
    O: fmt::Debug + Serialize + OutputEq<C>,
    C: fmt::Debug,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    let expected = match &opts.input {
        Some(..) => None,
        None => Some(expected),
    };

    let result = match &opts.input {
        Some(path) => solve_path(path, &path.display().to_string(), solve),
        None => solve_path(Path::new(fixture.read_path), fixture.path, solve),
    };

    let value = match result.and_then(|value| check(value, expected)) {
        Ok(value) => value,
        Err(error) => {
            if opts.json {
                o.error(format_args!("{error:#}"))?;
            }

            return Err(error);
        }
    };

    o.answer(&value)?;
    Ok(())
}

fn solve_path<T, O>(read_path: &Path, path: &str, solve: T) -> Result<O>
where
    T: FnOnce(IStr) -> Result<O>,
{
    let input = crate::env::input(read_path)?;
    log::debug!("solving {path} ({} bytes)", input.len());

    match solve(input) {
        Ok(value) => Ok(value),
        Err(error) => Err(error_context(path, input, error)),
    }
}

fn check<O, C>(value: O, expected: Option<C>) -> Result<O>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if let Some(expected) = &expected {
        if !value.output_eq(expected) {
            bail!("{value:?} (value) != {expected:?} (expected)");
        }
    }

    Ok(value)
}
