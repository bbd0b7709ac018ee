use lib::prelude::*;

lib::entry!(input = "d04.txt", expect = (18, 9), solve);

fn solve(input: IStr) -> Result<(usize, usize)> {
    let grid = WordSearch::new(input.as_data())?;

    log::debug!("grid is {} by {}", grid.rows_len(), grid.columns_len());

    Ok((grid.count_word(b"XMAS"), grid.x_mas_count()))
}
