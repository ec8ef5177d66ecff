use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The playfield, indexed by `(column, row)` with row 0 at the top.
///
/// At most one cell is selected at any time; every mutating method here keeps that true.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Deterministic starting board: the cell at `(x, y)` holds gem `y mod 6`.
    pub fn new(size: Coord2) -> Self {
        let size = (size.0.max(1), size.1.max(1));
        Self::from_fn(size, |(_, y)| Shape::from_index(y.into()))
    }

    pub fn from_fn(size: Coord2, mut shape_at: impl FnMut(Coord2) -> Shape) -> Self {
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            Cell::new(shape_at((x as Coord, y as Coord)))
        });
        Self { cells }
    }

    /// Builds a grid from rows of shape symbols (see [`Shape::symbol`]), top row first.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(layout: &str) -> Result<Self> {
        let rows = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Shape::from_symbol).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(GameError::InvalidBoardShape);
        }
        let size: Coord2 = (
            width.try_into().map_err(|_| GameError::InvalidSize)?,
            height.try_into().map_err(|_| GameError::InvalidSize)?,
        );

        Ok(Self::from_fn(size, |(x, y)| rows[usize::from(y)][usize::from(x)]))
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        (x as Coord, y as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn cell_at_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(coords.to_nd_index())
    }

    pub fn shape_at(&self, coords: Coord2) -> Option<Shape> {
        self.cell_at(coords).map(|cell| cell.shape)
    }

    /// Exchanges the full contents of two cells. No-op if either is out of range.
    pub fn swap(&mut self, a: Coord2, b: Coord2) {
        if self.contains(a) && self.contains(b) {
            self.cells.swap(a.to_nd_index(), b.to_nd_index());
        }
    }

    /// In-range orthogonal neighbours of `coords`; none when `coords` itself is out of range.
    pub fn neighbors4(&self, coords: Coord2) -> NeighborIter {
        if self.contains(coords) {
            self.cells.iter_neighbors(coords)
        } else {
            NeighborIter::new(coords, (0, 0))
        }
    }

    pub fn is_orthogonally_adjacent(&self, a: Coord2, b: Coord2) -> bool {
        self.contains(a) && self.contains(b) && is_orthogonally_adjacent(a, b)
    }

    pub fn selected(&self) -> Option<Coord2> {
        self.iter()
            .find(|(_, cell)| cell.selected)
            .map(|(coords, _)| coords)
    }

    pub fn deselect_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.selected = false;
        }
    }

    /// Makes `coords` the only selected cell. No-op if out of range.
    pub fn select(&mut self, coords: Coord2) {
        if !self.contains(coords) {
            return;
        }
        self.deselect_all();
        self.cells[coords.to_nd_index()].selected = true;
    }

    /// Maximal 4-connected same-shape component containing `coords`.
    ///
    /// Empty cells connect to each other like any other shape; callers that only care about gems
    /// filter those groups out. Returns nothing for out-of-range coordinates.
    pub fn flood_fill(&self, coords: Coord2) -> Vec<Coord2> {
        let mut visited = Array2::default(self.cells.dim());
        let mut group = Vec::new();
        self.fill_from(coords, &mut visited, &mut group);
        group
    }

    /// Stack based traversal shared by [`Grid::flood_fill`] and the match scan, which reuses one
    /// visited mask across all starting cells.
    pub(crate) fn fill_from(
        &self,
        start: Coord2,
        visited: &mut Array2<bool>,
        group: &mut Vec<Coord2>,
    ) {
        let Some(shape) = self.shape_at(start) else {
            return;
        };
        if visited[start.to_nd_index()] {
            return;
        }

        visited[start.to_nd_index()] = true;
        let mut to_visit = Vec::from([start]);
        while let Some(coords) = to_visit.pop() {
            group.push(coords);
            for neighbor in self.cells.iter_neighbors(coords) {
                let index = neighbor.to_nd_index();
                if !visited[index] && self.cells[index].shape == shape {
                    visited[index] = true;
                    to_visit.push(neighbor);
                }
            }
        }
    }

    pub fn contains_empty(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// True when no column has an Empty cell below a gem.
    pub fn is_settled(&self) -> bool {
        (0..self.width()).all(|x| {
            let mut seen_gem = false;
            (0..self.height()).all(|y| {
                let empty = self[(x, y)].is_empty();
                seen_gem |= !empty;
                !(seen_gem && empty)
            })
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    /// Shapes row by row, top row first.
    pub fn rows(&self) -> Vec<Vec<Shape>> {
        (0..self.height())
            .map(|y| (0..self.width()).map(|x| self[(x, y)].shape).collect())
            .collect()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", self[(x, y)].shape.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
