//! Loading of puzzle inputs.

use core::ops::Range;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::cli::LineCol;
use crate::input::{IStr, NL};

/// A fixture declared by a puzzle through [input!][crate::input!].
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Path relative to the crate declaring it, used in diagnostics.
    pub path: &'static str,
    /// Absolute path the fixture is read from.
    pub read_path: &'static str,
}

/// Read the input at the given path.
///
/// Input storage is leaked since it's much easier to deal with than
/// lifetimes, and it is only ever freed once the process exits *anyway*.
pub fn input(path: &Path) -> anyhow::Result<IStr> {
    return inner(path).with_context(|| anyhow!("{}", path.display()));

    fn inner(path: &Path) -> anyhow::Result<IStr> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        let data: &'static [u8] = Box::leak(buf.into_boxed_slice());
        Ok(IStr::new(data))
    }
}

/// Get the line and column of the start of the given span.
///
/// # Examples
///
/// ```
/// use lib::env::pos_from;
///
/// let pos = pos_from(b"abc\ndef\n", 5..6);
/// assert_eq!(pos.to_string(), "2:1");
/// ```
pub fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(head) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let (line, start) = memchr::memchr_iter(NL, head)
        .enumerate()
        .last()
        .map(|(line, n)| (line + 1, n + 1))
        .unwrap_or_default();

    LineCol::new(line, span.start - start)
}

/// Declare a fixture stored under the `inputs` directory of the calling
/// crate.
#[macro_export]
macro_rules! input {
    ($path:literal) => {
        $crate::env::Fixture {
            path: concat!("inputs/", $path),
            read_path: concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
        }
    };
}
