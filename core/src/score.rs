use serde::{Deserialize, Serialize};

use crate::*;

/// Score and combo bookkeeping for cascades.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    combo: u32,
}

impl ScoreTracker {
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Points for clearing `cleared` cells at the current combo: `5 * combo * n * floor(log2 n)`.
    ///
    /// The combo is only bumped after a batch is scored, so the opening batch of every cascade is
    /// worth nothing.
    pub fn delta_for(&self, cleared: usize) -> u64 {
        if cleared == 0 {
            return 0;
        }
        let cleared = cleared as u64;
        5u64.saturating_mul(self.combo.into())
            .saturating_mul(cleared)
            .saturating_mul(cleared.ilog2().into())
    }

    /// Clears every position in `positions` to Empty and adds the batch score. Returns the delta.
    pub fn process_deletions<'a>(
        &mut self,
        grid: &mut Grid,
        positions: impl IntoIterator<Item = &'a Coord2>,
    ) -> u64 {
        let mut cleared = 0;
        for &coords in positions {
            if let Some(cell) = grid.cell_at_mut(coords) {
                *cell = Cell::default();
                cleared += 1;
            }
        }

        let delta = self.delta_for(cleared);
        self.score = self.score.saturating_add(delta);
        delta
    }

    pub fn bump_combo(&mut self) {
        self.combo = self.combo.saturating_add(1);
    }

    pub fn reset_combo(&mut self) {
        self.combo = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn four_in_a_row_at_combo_one_scores_forty() {
        let mut grid = Grid::parse(
            "
            TTTTTT
            TSSSST
            ",
        )
        .unwrap();
        let mut tracker = ScoreTracker::default();
        tracker.bump_combo();
        let positions: BTreeSet<Coord2> = (1..=4).map(|x| (x, 1)).collect();

        let delta = tracker.process_deletions(&mut grid, &positions);

        assert_eq!(delta, 40);
        assert_eq!(tracker.score(), 40);
        assert!(positions.iter().all(|&pos| grid[pos].is_empty()));
        assert_eq!(grid.shape_at((0, 1)), Some(Shape::Triangle));
    }

    #[test]
    fn opening_batch_scores_zero() {
        let mut grid = Grid::new((4, 4));
        let mut tracker = ScoreTracker::default();
        let positions: BTreeSet<Coord2> = (0..4).map(|x| (x, 0)).collect();

        assert_eq!(tracker.process_deletions(&mut grid, &positions), 0);
        assert_eq!(tracker.score(), 0);
        assert!(positions.iter().all(|&pos| grid[pos].is_empty()));
    }

    #[test]
    fn delta_uses_floor_of_log2() {
        let mut tracker = ScoreTracker::default();
        tracker.bump_combo();
        tracker.bump_combo();

        assert_eq!(tracker.delta_for(0), 0);
        assert_eq!(tracker.delta_for(4), 5 * 2 * 4 * 2);
        assert_eq!(tracker.delta_for(7), 5 * 2 * 7 * 2);
        assert_eq!(tracker.delta_for(8), 5 * 2 * 8 * 3);
    }

    #[test]
    fn deletion_clears_selection_and_skips_out_of_range() {
        let mut grid = Grid::new((2, 2));
        grid.select((1, 1));
        let mut tracker = ScoreTracker::default();

        tracker.process_deletions(&mut grid, &[(1, 1), (5, 5)]);

        assert_eq!(grid[(1, 1)], Cell::default());
        assert_eq!(grid.selected(), None);
    }

    #[test]
    fn combo_resets() {
        let mut tracker = ScoreTracker::default();
        tracker.bump_combo();
        tracker.bump_combo();
        assert_eq!(tracker.combo(), 2);
        tracker.reset_combo();
        assert_eq!(tracker.combo(), 0);
    }
}
