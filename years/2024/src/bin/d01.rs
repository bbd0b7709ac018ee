use lib::prelude::*;

lib::entry!(input = "d01.txt", expect = (11, 31), solve);

fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut a = Vec::new();
    let mut b = Vec::new();

    for value in input.iter::<(u64, u64)>() {
        let (left, right) = value?;
        a.push(left);
        b.push(right);
    }

    a.sort();
    b.sort();

    let o1 = metrics::manhattan_distance(&a, &b)?;
    let o2 = metrics::similarity_score(&a, &b)?;
    Ok((o1, o2))
}
