//! Geometry primitives shared by the layout passes.
//!
//! Coordinates follow the dendrogram convention: `x` grows rightwards across the
//! leaf row, `y` is the merge height (leaves sit at `y = 0`).

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// Horizontal midpoint of two child positions, lifted to the parent height.
pub fn midpoint_at(left: Point, right: Point, height: f64) -> Point {
    point((left.x + right.x) / 2.0, height)
}
