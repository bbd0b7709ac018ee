use lib::prelude::*;

lib::entry!(input = "d03.txt", expect = (161, 48), solve);

fn solve(input: IStr) -> Result<(i64, i64)> {
    let mut p1 = Scanner::new(false);
    let mut p2 = Scanner::new(true);

    for c in input.chars() {
        p1.feed(c)?;

        if let Some(instruction) = p2.step(c)? {
            log::debug!(
                "{instruction}: suppressed: {}, value: {}",
                p2.is_suppressed(),
                p2.value()
            );
        }
    }

    Ok((p1.value(), p2.value()))
}
