use core::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError, NL};

/// Iterator over values parsed from an [IStr].
///
/// See [IStr::iter].
pub struct Iter<'a, T> {
    input: &'a mut IStr,
    _marker: PhantomData<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_next().transpose()
    }
}

/// Iterator over lines of an [IStr], not including the line terminator.
///
/// See [IStr::lines].
pub struct Lines {
    input: IStr,
}

impl Lines {
    pub(crate) fn new(input: IStr) -> Self {
        Self { input }
    }
}

impl Iterator for Lines {
    type Item = IStr;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.split_once(NL)
    }
}
