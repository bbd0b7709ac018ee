use core::fmt;

use crate::input::{IStr, IStrError};

/// Associate the location of an input error with the error.
///
/// Errors which did not originate from input parsing only get the path.
#[doc(hidden)]
pub fn error_context(path: &str, data: IStr, error: anyhow::Error) -> anyhow::Error {
    let pos = error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(|e| crate::env::pos_from(data.as_data(), e.span()));

    error.context(ErrorContext {
        path: path.into(),
        pos,
    })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.column)
    }
}

#[derive(Debug)]
struct ErrorContext {
    path: Box<str>,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}", path = self.path),
            None => self.path.fmt(f),
        }
    }
}
