use clado_core::Tree;
use clado_core::geom::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for LayoutPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// An open polyline, vertices in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<LayoutPoint>,
}

impl Polyline {
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().map(LayoutPoint::from).collect(),
        }
    }
}

/// The bracket geometry of a laid-out dendrogram: one polyline per branch node.
///
/// The polylines form a geometric union; their order in the vector follows the
/// traversal (children before parents) but carries no drawing significance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DendrogramPath {
    pub polylines: Vec<Polyline>,
}

impl DendrogramPath {
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Bounding box of every vertex, `None` for the single-leaf (empty) path.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(
            self.polylines
                .iter()
                .flat_map(|pl| pl.points.iter().map(|p| (p.x, p.y))),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

/// Result of laying out a dendrogram: the composed drawable plus the
/// position-annotated tree (leaf payload, horizontal coordinate), kept for
/// caller-side post-processing such as placing labels at exact coordinates.
#[derive(Debug)]
pub struct Layout<A, S> {
    pub shape: S,
    pub positioned: Tree<(A, f64)>,
}
