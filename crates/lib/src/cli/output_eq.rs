/// Helper trait to compare an answer with the expected answer of a puzzle.
///
/// This allows the expected value to be written as plain literals, like
/// `(161, 48)`, regardless of the exact types the puzzle produces.
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

impl<A, B, C, D> OutputEq<(C, D)> for (A, B)
where
    A: OutputEq<C>,
    B: OutputEq<D>,
{
    #[inline]
    fn output_eq(&self, other: &(C, D)) -> bool {
        self.0.output_eq(&other.0) && self.1.output_eq(&other.1)
    }
}

impl<A, B> OutputEq<Option<B>> for Option<A>
where
    A: OutputEq<B>,
{
    #[inline]
    fn output_eq(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.output_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! partial_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OutputEq<$ty> for $ty {
                #[inline]
                fn output_eq(&self, other: &Self) -> bool {
                    other == self
                }
            }
        )*
    };
}

partial_eq!(usize, isize, u32, u64, i32, i64, bool, ());
