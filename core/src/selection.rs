use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Selected(Coord2),
    Deselected,
    Moved { from: Coord2, to: Coord2 },
    /// The two cells were exchanged. `committed` is set when either side now forms a qualifying
    /// group, in which case the selection is cleared; otherwise the cursor stays on `to`.
    Swapped {
        from: Coord2,
        to: Coord2,
        committed: bool,
    },
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_swap(self) -> bool {
        matches!(self, Self::Swapped { .. })
    }
}

/// Applies a pointer press on `coords` to the selection.
///
/// Presses outside the board or on an Empty cell are ignored, so a gap is never selected. Pressing
/// the selected cell deselects it, pressing a neighbour of the selected cell swaps the two, and
/// pressing anything else moves the selection there.
pub fn pointer_down(grid: &mut Grid, coords: Coord2, min_group_size: usize) -> SelectOutcome {
    use SelectOutcome::*;

    match grid.shape_at(coords) {
        Some(shape) if !shape.is_empty() => {}
        _ => return NoChange,
    }

    match grid.selected() {
        Some(selected) if selected == coords => {
            grid.deselect_all();
            Deselected
        }
        Some(selected) if grid.is_orthogonally_adjacent(selected, coords) => {
            grid.swap(coords, selected);
            let committed = gem_group_size(grid, coords) >= min_group_size
                || gem_group_size(grid, selected) >= min_group_size;
            if committed {
                grid.deselect_all();
            } else {
                grid.select(coords);
            }
            Swapped {
                from: selected,
                to: coords,
                committed,
            }
        }
        Some(selected) => {
            grid.select(coords);
            Moved {
                from: selected,
                to: coords,
            }
        }
        None => {
            grid.select(coords);
            Selected(coords)
        }
    }
}
