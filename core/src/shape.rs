use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Gem kinds, plus the `Empty` sentinel left behind by a deletion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Triangle,
    Square,
    Octa,
    Pentagon,
    Diamond,
    Hexagon,
    #[default]
    Empty,
}

impl Shape {
    /// Playable shapes in index order.
    pub const GEMS: [Self; 6] = [
        Self::Triangle,
        Self::Square,
        Self::Octa,
        Self::Pentagon,
        Self::Diamond,
        Self::Hexagon,
    ];

    /// Gem for `index`, wrapping around the six playable shapes.
    pub const fn from_index(index: usize) -> Self {
        Self::GEMS[index % Self::GEMS.len()]
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Character used by [`Grid::parse`](crate::Grid::parse) and the `Display` of a grid.
    pub const fn symbol(self) -> char {
        use Shape::*;
        match self {
            Triangle => 'T',
            Square => 'S',
            Octa => 'O',
            Pentagon => 'P',
            Diamond => 'D',
            Hexagon => 'H',
            Empty => '.',
        }
    }

    pub const fn from_symbol(symbol: char) -> Result<Self> {
        use Shape::*;
        Ok(match symbol {
            'T' => Triangle,
            'S' => Square,
            'O' => Octa,
            'P' => Pentagon,
            'D' => Diamond,
            'H' => Hexagon,
            '.' => Empty,
            other => return Err(GameError::UnknownShape(other)),
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub shape: Shape,
    pub selected: bool,
}

impl Cell {
    pub const fn new(shape: Shape) -> Self {
        Self {
            shape,
            selected: false,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.shape.is_empty()
    }
}
