use lib::prelude::*;

lib::entry!(input = "d02.txt", expect = (2, 4), solve);

fn solve(mut input: IStr) -> Result<(usize, usize)> {
    let mut o1 = 0;
    let mut o2 = 0;

    while let Some(values) = input.try_line::<ArrayVec<i64>>()? {
        if values.is_empty() {
            continue;
        }

        ensure!(values.len() > 1, "report needs at least two levels");

        if metrics::is_safe(&values) {
            o1 += 1;
            o2 += 1;
            continue;
        }

        log::debug!(
            "{values:?}: {} monotonicity violations, {} change violations",
            metrics::monotonicity_violations(&values),
            metrics::change_violations(&values, metrics::MIN_CHANGE, metrics::MAX_CHANGE)?,
        );

        o2 += usize::from(metrics::is_safe_dampened(&values));
    }

    Ok((o1, o2))
}
