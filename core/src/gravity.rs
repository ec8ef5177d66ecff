use crate::*;

/// One gravity pass over column `x`.
///
/// Scanning bottom to top, every Empty cell swaps in place with the nearest gem above it. Repeated
/// passes converge in at most `height` calls. Returns whether anything moved; out-of-range columns
/// are ignored.
pub fn settle_column(grid: &mut Grid, x: Coord) -> bool {
    if x >= grid.width() {
        return false;
    }

    let mut moved = false;
    for y in (0..grid.height()).rev() {
        if !grid[(x, y)].is_empty() {
            continue;
        }
        if let Some(above) = (0..y).rev().find(|&above| !grid[(x, above)].is_empty()) {
            grid.swap((x, y), (x, above));
            moved = true;
        }
    }
    moved
}

/// Runs [`settle_column`] once for every column.
pub fn settle_all(grid: &mut Grid) -> bool {
    let mut moved = false;
    for x in 0..grid.width() {
        moved |= settle_column(grid, x);
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(layout: &str) -> Grid {
        Grid::parse(layout).unwrap()
    }

    #[test]
    fn full_column_is_untouched() {
        let mut grid = Grid::new((3, 5));
        let before = grid.clone();

        for _ in 0..3 {
            assert!(!settle_column(&mut grid, 1));
        }

        assert_eq!(grid, before);
    }

    #[test]
    fn pass_drops_gems_into_gaps_below() {
        let mut grid = grid(
            "
            T
            S
            .
            O
            .
            ",
        );

        assert!(settle_column(&mut grid, 0));

        assert_eq!(grid, self::grid(".\n.\nT\nS\nO"));
    }

    #[test]
    fn repeated_passes_converge_within_height() {
        let mut grid = grid(
            "
            T
            S
            O
            .
            .
            .
            ",
        );

        let mut passes = 0;
        while !grid.is_settled() {
            settle_column(&mut grid, 0);
            passes += 1;
            assert!(passes <= usize::from(grid.height()));
        }

        assert_eq!(grid, self::grid(".\n.\n.\nT\nS\nO"));
    }

    #[test]
    fn settle_all_touches_every_column_once() {
        let mut grid = grid(
            "
            TH
            ..
            SD
            ",
        );

        assert!(settle_all(&mut grid));
        assert_eq!(grid, self::grid("..\nTH\nSD"));
        assert!(!settle_all(&mut grid));
    }

    #[test]
    fn empty_cells_at_the_top_stay_put() {
        let mut grid = grid("..\nTS");
        assert!(!settle_all(&mut grid));
        assert!(!settle_column(&mut grid, 5));
    }
}
