//! Input parser.

mod error;
mod iter;

use core::mem;
use core::ops;
use core::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::{BStr, ByteSlice};

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::{Iter, Lines};

type Result<T> = core::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// This is a cheap copyable cursor over the input, which keeps track of its
/// byte offset so that errors can be traced back to a line and column.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    data: &'static [u8],
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Byte offset of the cursor in the original input.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Iterate over the characters of the remaining input.
    ///
    /// Invalid UTF-8 is substituted with the replacement character.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let input = IStr::new(b"do()\xFF");
    /// assert!(input.chars().eq(['d', 'o', '(', ')', '\u{FFFD}']));
    /// ```
    #[inline]
    pub fn chars(&self) -> bstr::Chars<'static> {
        let data: &'static [u8] = self.data;
        data.chars()
    }

    /// Iterate over the lines of the remaining input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let input = IStr::new(b"abc\ndef\n");
    /// let lines = input.lines().map(|line| line.as_data()).collect::<Vec<_>>();
    /// assert_eq!(lines, [&b"abc"[..], &b"def"[..]]);
    /// ```
    #[inline]
    pub fn lines(&self) -> Lines {
        Lines::new(*self)
    }

    /// Construct an iterator over values in the current input.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Try to parse the next line as `T`, returns `Ok(None)` if there are no
    /// more lines.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Consume whitespace and return the number of newlines consumed.
    #[inline]
    pub fn ws(&mut self) -> Result<usize> {
        let Ws(n) = self.next::<Ws>()?;
        Ok(n)
    }

    /// Try to parse the next whitespace-separated word, returning the
    /// offset at which the word starts.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut word) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut word)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((s, value)))
    }

    /// Split once at the given byte or until the end of input, returning
    /// everything before it.
    pub(crate) fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let index = self.index;
            self.index += self.data.len();
            let data = mem::take(&mut self.data);
            return Some(IStr { data, index });
        };

        let head = self.slice(0..at)?;
        self.advance(at + 1);
        Some(head)
    }

    /// Find the first index from `n` matching the predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = &self.data[n..];
        self.index += n;
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        Some(Self {
            index: self.index.checked_add(range.start)?,
            data: self.data.get(range)?,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error raised by [FromInput::from_input] when there is no value.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if the input is exhausted.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $($ty:ident $id:ident),* $(,)?) => {
        impl<$($ty,)*> FromInput for ($($ty,)*)
        where
            $($ty: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                $(
                    let Some($id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($($id,)*)))
            }
        }
    }
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromInput for $ty {
                #[inline]
                fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                    let index = p.index;

                    let Some((n, string)) = p.try_next_word::<&str>()? else {
                        return Ok(None);
                    };

                    let Ok(value) = string.parse() else {
                        return Err(IStrError::new(index + n..p.index, ErrorKind::NotInteger(string)));
                    };

                    Ok(Some(value))
                }
            }
        )*
    };
}

integer!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl FromInput for char {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let (c, size) = bstr::decode_utf8(p.data);

        if size == 0 {
            return Ok(None);
        }

        let Some(c) = c else {
            return Err(IStrError::new(p.index..p.index + size, ErrorKind::NotUtf8));
        };

        p.advance(size);
        Ok(Some(c))
    }
}

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let input = *p;
        p.advance(p.len());
        Ok(Some(input))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        p.index += p.data.len();
        Ok(Some(mem::take(&mut p.data)))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl FromInput for &'static BStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        Ok(Some(BStr::new(data)))
    }
}

/// Parse until end of line.
pub struct Nl<T>(pub T);

impl<T> FromInput for Nl<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(mut line) = p.split_once(NL) else {
            return Ok(None);
        };

        Ok(Some(Self(line.next()?)))
    }
}

/// Consume whitespace and return the number of lines consumed.
pub struct Ws(pub usize);

impl FromInput for Ws {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let n = p.find(0, |b| !b.is_ascii_whitespace());
        let lines = memchr::memchr_iter(NL, &p.data[..n]).count();
        p.advance(n);
        Ok(Some(Self(lines)))
    }
}

impl<T, const N: usize> FromInput for ArrayVec<T, N>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = ArrayVec::new();

        while let Some(element) = T::try_from_input(p)? {
            if output.try_push(element).is_err() {
                return Err(IStrError::new(index..p.index, ErrorKind::ArrayCapacity(N)));
            }
        }

        Ok(Some(output))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}

#[cfg(test)]
mod tests {
    use arrayvec::ArrayVec;

    use super::{ErrorKind, IStr, Nl};

    #[test]
    fn test_pairs() {
        let mut input = IStr::new(b"3   4\n4   3\n\n");
        assert_eq!(input.try_line::<(u32, u32)>().unwrap(), Some((3, 4)));
        assert_eq!(input.try_line::<(u32, u32)>().unwrap(), Some((4, 3)));
        assert_eq!(input.try_line::<(u32, u32)>().unwrap(), None);
        assert!(input.is_empty());
    }

    #[test]
    fn test_line_of_values() {
        let mut input = IStr::new(b"7 6 4 2 1\n1 2\n");
        let line = input.line::<ArrayVec<u32, 8>>().unwrap();
        assert_eq!(&line[..], &[7, 6, 4, 2, 1]);
        let line = input.line::<Vec<u32>>().unwrap();
        assert_eq!(line, [1, 2]);
        assert!(matches!(
            input.line::<Vec<u32>>().unwrap_err().kind(),
            ErrorKind::ExpectedLine
        ));
    }

    #[test]
    fn test_array_capacity() {
        let mut input = IStr::new(b"1 2 3");
        let error = input.next::<ArrayVec<u32, 2>>().unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::ArrayCapacity(2)));
    }

    #[test]
    fn test_not_integer() {
        let mut input = IStr::new(b"1\nfoo 2");
        let Nl(n) = input.next::<Nl<u32>>().unwrap();
        assert_eq!(n, 1);

        let error = input.next::<u32>().unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::NotInteger("foo")));
        assert_eq!(error.span(), 2..5);
    }

    #[test]
    fn test_ws_and_chars() {
        let mut input = IStr::new(b" \n\n ab");
        assert_eq!(input.ws().unwrap(), 2);
        assert_eq!(input.index(), 4);
        assert_eq!(input.next::<char>().unwrap(), 'a');
        assert_eq!(input.next::<&str>().unwrap(), "b");
        assert!(input.try_next::<char>().unwrap().is_none());
    }

    #[test]
    fn test_iter() {
        let mut input = IStr::new(b"1 2 3 4");
        let values = input.iter::<u64>().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(values, [1, 2, 3, 4]);
    }
}
