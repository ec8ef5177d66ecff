use serde::{Deserialize, Serialize};

use crate::*;

/// Turn phase, derived from the grid and the `changed` flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player.
    #[default]
    Idle,
    /// Gems are still falling into gaps.
    Gravity,
    /// The board is settled and a swap or deletion may have produced matches.
    Matching,
}

impl Phase {
    pub const fn is_resolving(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// What a single [`GameState::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The phase timer has not reached the threshold yet.
    Waiting,
    /// Idle phase step, nothing to do.
    Idle,
    /// One gravity pass ran over every column.
    Settled,
    /// A batch of matched cells was cleared.
    Cleared { cells: usize, delta: u64 },
    /// No matches were left; the cascade is over and the combo was reset.
    CascadeEnded,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        matches!(
            self,
            Self::Settled | Self::Cleared { .. } | Self::CascadeEnded
        )
    }
}

/// Complete game state: the grid, scoring, and the fixed-step phase sequencer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    tracker: ScoreTracker,
    timer: f64,
    changed: bool,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self::with_grid(config, Grid::new(config.size()))
    }

    /// Starts from an arbitrary grid; the size in `config` is replaced by the grid's own.
    pub fn with_grid(config: GameConfig, grid: Grid) -> Self {
        let config = GameConfig {
            size: grid.size(),
            ..config
        };
        Self {
            config,
            grid,
            tracker: ScoreTracker::default(),
            timer: 0.0,
            changed: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.tracker.score()
    }

    pub fn combo(&self) -> u32 {
        self.tracker.combo()
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// True from a swap until the cascade it started has fully resolved.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn phase(&self) -> Phase {
        if !self.grid.is_settled() {
            Phase::Gravity
        } else if self.changed {
            Phase::Matching
        } else {
            Phase::Idle
        }
    }

    /// Handles a pointer press on a grid cell.
    ///
    /// Ignored entirely while a swap or cascade is resolving. A swap restarts the phase timer and
    /// marks the board as changed, whether or not it formed a group.
    pub fn pointer_down(&mut self, coords: Coord2) -> SelectOutcome {
        if self.changed {
            log::trace!("ignoring press at {:?} while resolving", coords);
            return SelectOutcome::NoChange;
        }

        let outcome = selection::pointer_down(&mut self.grid, coords, self.config.min_group_size);
        if let SelectOutcome::Swapped {
            from,
            to,
            committed,
        } = outcome
        {
            log::debug!("swapped {:?} <-> {:?} (committed: {})", from, to, committed);
            self.timer = 0.0;
            self.changed = true;
        }
        outcome
    }

    /// Advances the phase timer by one fixed step and runs the current phase once the threshold is
    /// reached.
    pub fn tick(&mut self) -> TickOutcome {
        self.timer += self.config.step;
        if self.timer < self.config.threshold {
            return TickOutcome::Waiting;
        }
        self.timer = 0.0;

        let phase = self.phase();
        log::trace!("phase step: {:?}", phase);
        match phase {
            Phase::Gravity => {
                settle_all(&mut self.grid);
                TickOutcome::Settled
            }
            Phase::Matching => self.resolve_matches(),
            Phase::Idle => TickOutcome::Idle,
        }
    }

    /// Ticks until a phase step runs, returning its outcome.
    pub fn advance_phase(&mut self) -> TickOutcome {
        loop {
            match self.tick() {
                TickOutcome::Waiting => continue,
                outcome => return outcome,
            }
        }
    }

    fn resolve_matches(&mut self) -> TickOutcome {
        let matches = find_all_groups(&self.grid, self.config.min_group_size);
        if matches.is_empty() {
            log::debug!(
                "cascade ended at combo {}, score {}",
                self.tracker.combo(),
                self.tracker.score()
            );
            self.changed = false;
            self.tracker.reset_combo();
            return TickOutcome::CascadeEnded;
        }

        let delta = self.tracker.process_deletions(&mut self.grid, &matches);
        self.tracker.bump_combo();
        log::debug!(
            "cleared {} cells for {} points, combo now {}",
            matches.len(),
            delta,
            self.tracker.combo()
        );
        TickOutcome::Cleared {
            cells: matches.len(),
            delta,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
