//! Shared helpers for puzzle solutions.

pub mod cli;
pub mod env;
pub mod input;
mod macros;
pub mod metrics;
pub mod scan;
pub mod search;

pub use self::input::{FromInput, IStr, IStrError, Nl, Ws};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{IStr, Nl, Ws};
    pub use crate::metrics;
    pub use crate::scan::{Instruction, Scanner};
    pub use crate::search::WordSearch;
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}
