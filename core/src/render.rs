//! Host-agnostic drawing model.
//!
//! Gem outlines live in a unit square and get scaled to the cell size when a [`Scene`] is built.
//! Hosts implement [`Canvas`] and replay the scene with [`Scene::draw`].

use alloc::vec::Vec;
use serde::Serialize;

use crate::*;

/// Reference cell edge length in canvas units.
pub const CELL_SIZE: u32 = 60;
/// Translucent black used for gem outlines and the selection frame.
pub const OUTLINE_COLOR: Rgba = Rgba::new(0, 0, 0, 89);
pub const OUTLINE_WIDTH: f32 = 1.0;
pub const SELECTION_WIDTH: f32 = 2.0;
/// Brightness of the inner facet relative to the gem colour, in percent.
pub const INNER_BRIGHTNESS: u16 = 70;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    const fn scale(self, sx: f32, sy: f32) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    const fn translate(self, tx: f32, ty: f32) -> Self {
        Self::new(self.x + tx, self.y + ty)
    }

    /// Shrinks a unit-square point slightly towards the centre so neighbouring gems don't touch.
    const fn inset(self) -> Self {
        self.scale(0.96, 0.96).translate(0.02, 0.02)
    }

    /// Halfway between this point and the centre of the unit square.
    const fn inner(self) -> Self {
        Self::new((self.x + 0.5) / 2.0, (self.y + 0.5) / 2.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Scales the colour channels by [`INNER_BRIGHTNESS`] percent, keeping alpha.
    pub fn dimmed(self) -> Self {
        let dim = |channel: u8| (u16::from(channel) * INNER_BRIGHTNESS / 100) as u8;
        Self::new(dim(self.r), dim(self.g), dim(self.b), self.a)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

const fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

// Triangle and pentagon overshoot the cell vertically and are squashed back in `unit_outline`.
const TRIANGLE: [Point; 4] = [p(0.1, 0.17), p(0.5, 0.0), p(0.9, 0.17), p(0.5, 1.4)];
const SQUARE: [Point; 4] = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
const OCTA: [Point; 8] = [
    p(0.25, 0.0),
    p(0.75, 0.0),
    p(1.0, 0.25),
    p(1.0, 0.75),
    p(0.75, 1.0),
    p(0.25, 1.0),
    p(0.0, 0.75),
    p(0.0, 0.25),
];
const PENTAGON: [Point; 5] = [p(0.15, 0.0), p(0.85, 0.0), p(1.0, 0.6), p(0.5, 1.1), p(0.0, 0.6)];
const DIAMOND: [Point; 4] = [p(0.5, 0.0), p(0.83, 0.5), p(0.5, 1.0), p(0.17, 0.5)];
const HEXAGON: [Point; 6] = [
    p(0.0, 0.5),
    p(0.26, 0.95),
    p(0.74, 0.95),
    p(1.0, 0.5),
    p(0.74, 0.05),
    p(0.26, 0.05),
];

impl Shape {
    pub const fn color(self) -> Rgba {
        use Shape::*;
        match self {
            Triangle => Rgba::rgb(139, 0, 139),
            Square => Rgba::rgb(224, 191, 38),
            Octa => Rgba::rgb(0, 127, 255),
            Pentagon => Rgba::rgb(255, 140, 0),
            Diamond => Rgba::rgb(169, 169, 169),
            Hexagon => Rgba::rgb(63, 127, 0),
            Empty => Rgba::rgb(255, 255, 255),
        }
    }

    const fn base_points(self) -> &'static [Point] {
        use Shape::*;
        match self {
            Triangle => &TRIANGLE,
            Square => &SQUARE,
            Octa => &OCTA,
            Pentagon => &PENTAGON,
            Diamond => &DIAMOND,
            Hexagon => &HEXAGON,
            Empty => &[],
        }
    }

    /// Outline of the gem within the unit square. Empty has no outline.
    pub fn unit_outline(self) -> Vec<Point> {
        use Shape::*;
        self.base_points()
            .iter()
            .map(|&point| match self {
                // the tall base shapes get squashed back into the cell
                Triangle => point.scale(1.0, 1.0 / 1.4),
                Pentagon => point.scale(1.0, 1.0 / 1.1),
                Square => point.inset(),
                _ => point,
            })
            .map(Point::inset)
            .collect()
    }
}

/// Polygons of one gem in canvas coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GemSprite {
    pub coords: Coord2,
    pub shape: Shape,
    pub outer: Vec<Point>,
    pub inner: Vec<Point>,
    pub fill: Rgba,
    pub inner_fill: Rgba,
}

impl GemSprite {
    pub fn new(shape: Shape, coords: Coord2, cell_size: f32) -> Self {
        let origin = Point::new(f32::from(coords.0) * cell_size, f32::from(coords.1) * cell_size);
        let to_canvas = |point: Point| point.scale(cell_size, cell_size).translate(origin.x, origin.y);
        let outline = shape.unit_outline();
        let fill = shape.color();
        Self {
            coords,
            shape,
            inner: outline.iter().map(|&point| to_canvas(point.inner())).collect(),
            outer: outline.into_iter().map(to_canvas).collect(),
            fill,
            inner_fill: fill.dimmed(),
        }
    }
}

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub gems: Vec<GemSprite>,
    pub selection: Option<Rect>,
}

impl Scene {
    pub fn from_grid(grid: &Grid, cell_size: u32) -> Self {
        let (width, height) = canvas_size(grid.size(), cell_size);
        let cell_size = cell_size as f32;
        let gems = grid
            .iter()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(coords, cell)| GemSprite::new(cell.shape, coords, cell_size))
            .collect();
        let selection = grid.selected().map(|(x, y)| Rect {
            x: f32::from(x) * cell_size,
            y: f32::from(y) * cell_size,
            width: cell_size,
            height: cell_size,
        });
        Self {
            width: width as f32,
            height: height as f32,
            gems,
            selection,
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        for gem in &self.gems {
            canvas.fill_polygon(&gem.outer, gem.fill);
            canvas.stroke_polygon(&gem.outer, OUTLINE_COLOR, OUTLINE_WIDTH);
            canvas.fill_polygon(&gem.inner, gem.inner_fill);
            canvas.stroke_polygon(&gem.inner, OUTLINE_COLOR, OUTLINE_WIDTH);
        }
        if let Some(rect) = self.selection {
            canvas.stroke_rect(rect, OUTLINE_COLOR, SELECTION_WIDTH);
        }
    }
}

/// Drawing surface implemented by the host.
pub trait Canvas {
    fn fill_polygon(&mut self, points: &[Point], color: Rgba);
    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, width: f32);
    fn stroke_rect(&mut self, rect: Rect, color: Rgba, width: f32);
}

/// Logical canvas size for a board of `size` cells.
pub const fn canvas_size(size: Coord2, cell_size: u32) -> (u32, u32) {
    (
        (size.0 as u32).saturating_mul(cell_size),
        (size.1 as u32).saturating_mul(cell_size),
    )
}

/// Maps a canvas position to the cell under it by integer division.
///
/// The result may still be outside the board; only negative or unrepresentable positions are
/// rejected here.
pub fn pixel_to_cell(px: i32, py: i32, cell_size: u32) -> Option<Coord2> {
    if cell_size == 0 {
        return None;
    }
    let axis = |pixel: i32| Coord::try_from(u32::try_from(pixel).ok()? / cell_size).ok();
    Some((axis(px)?, axis(py)?))
}
