use gemfall_core::{Canvas, Point, Rect, Rgba};
use yew::prelude::*;

/// Collects a scene as SVG nodes.
///
/// Shapes ignore pointer events so presses always land on the `<svg>` itself and its offsets stay
/// in board coordinates.
#[derive(Default)]
pub(crate) struct SvgCanvas {
    nodes: Vec<Html>,
}

impl SvgCanvas {
    pub(crate) fn into_html(self) -> Html {
        self.nodes.into_iter().collect()
    }
}

fn svg_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn svg_color(color: Rgba) -> String {
    format!(
        "rgba({},{},{},{})",
        color.r,
        color.g,
        color.b,
        f32::from(color.a) / 255.0
    )
}

impl Canvas for SvgCanvas {
    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        self.nodes.push(html! {
            <polygon points={svg_points(points)} fill={svg_color(color)} pointer-events="none"/>
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, width: f32) {
        self.nodes.push(html! {
            <polygon
                points={svg_points(points)}
                fill="none"
                stroke={svg_color(color)}
                stroke-width={width.to_string()}
                pointer-events="none"
            />
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, width: f32) {
        self.nodes.push(html! {
            <rect
                x={rect.x.to_string()}
                y={rect.y.to_string()}
                width={rect.width.to_string()}
                height={rect.height.to_string()}
                fill="none"
                stroke={svg_color(color)}
                stroke-width={width.to_string()}
                pointer-events="none"
            />
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemfall_core::{CELL_SIZE, Grid, OUTLINE_COLOR, Scene};

    #[test]
    fn points_are_space_separated_pairs() {
        let points = [Point::new(0.0, 1.5), Point::new(60.0, 2.0)];

        assert_eq!(svg_points(&points), "0,1.5 60,2");
        assert_eq!(svg_points(&[]), "");
    }

    #[test]
    fn colors_use_css_rgba() {
        assert_eq!(svg_color(Rgba::rgb(139, 0, 139)), "rgba(139,0,139,1)");
        assert_eq!(svg_color(Rgba::new(0, 0, 0, 0)), "rgba(0,0,0,0)");
        assert!(svg_color(OUTLINE_COLOR).starts_with("rgba(0,0,0,0.34"));
    }

    #[test]
    fn every_gem_becomes_four_nodes() {
        let mut grid = Grid::parse("TS\n.O").unwrap();
        grid.select((1, 1));
        let mut canvas = SvgCanvas::default();

        Scene::from_grid(&grid, CELL_SIZE).draw(&mut canvas);

        assert_eq!(canvas.nodes.len(), 3 * 4 + 1);
    }
}
