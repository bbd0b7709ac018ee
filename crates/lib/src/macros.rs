/// Declare the `main` function of a puzzle.
///
/// The solver receives the parsed fixture and its answer is compared
/// against `expect`.
///
/// ```ignore
/// use lib::prelude::*;
///
/// lib::entry!(input = "d01.txt", expect = (11, 31), solve);
///
/// fn solve(input: IStr) -> Result<(u64, u64)> {
///     todo!()
/// }
/// ```
#[macro_export]
macro_rules! entry {
    (input = $path:literal, expect = $expect:expr, $solve:path $(,)?) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            $crate::cli::run(&opts, $crate::input!($path), $expect, $solve)
        }
    };
}
