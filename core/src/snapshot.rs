use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

use crate::*;

/// Read-only view of a [`GameState`] for hosts and tracing.
///
/// Rows are rendered with the layout symbols accepted by [`Grid::parse`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub rows: Vec<String>,
    pub selected: Option<Coord2>,
    pub score: u64,
    pub combo: u32,
    pub phase: Phase,
}

impl Snapshot {
    pub fn of(game: &GameState) -> Self {
        let rows = game
            .grid()
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(Shape::symbol).collect())
            .collect();
        Self {
            rows,
            selected: game.grid().selected(),
            score: game.score(),
            combo: game.combo(),
            phase: game.phase(),
        }
    }
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        Self::of(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn snapshot_uses_layout_symbols() {
        let grid = Grid::parse("TPS\nO.D").unwrap();
        let game = GameState::with_grid(GameConfig::default(), grid);

        let snapshot = Snapshot::of(&game);

        assert_eq!(snapshot.rows, vec!["TPS", "O.D"]);
        assert_eq!(snapshot.phase, Phase::Gravity);
        assert_eq!(snapshot.selected, None);
    }

    #[test]
    fn resting_gap_leaves_snapshot_idle() {
        let game = GameState::with_grid(GameConfig::default(), Grid::parse("T.S\nOPD").unwrap());

        let snapshot = Snapshot::of(&game);

        assert_eq!(snapshot.rows, vec!["T.S", "OPD"]);
        assert_eq!(snapshot.phase, Phase::Idle);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut game = GameState::with_grid(GameConfig::default(), Grid::parse("TS\nOH").unwrap());
        game.pointer_down((1, 0));

        let json = serde_json::to_value(Snapshot::from(&game)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "rows": ["TS", "OH"],
                "selected": [1, 0],
                "score": 0,
                "combo": 0,
                "phase": "Idle",
            })
        );
    }
}
