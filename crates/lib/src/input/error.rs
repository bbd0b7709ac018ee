use core::fmt;
use core::ops::Range;

/// The kind of error raised while parsing input.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedLine,
    ExpectedTuple(usize),
    ArrayCapacity(usize),
    UnexpectedEof,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::ArrayCapacity(cap) => write!(f, "array out of capacity ({cap})"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
        }
    }
}

/// Error raised through string processing.
///
/// The span is expressed in byte offsets into the original input.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The span of input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for IStrError {}
