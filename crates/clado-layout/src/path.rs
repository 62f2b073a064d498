//! Bracket path generation over a positioned tree.

use crate::model::{DendrogramPath, Polyline};
use clado_core::Tree;
use clado_core::geom::{Point, midpoint_at, point};

/// Computes the connecting bracket geometry for a tree whose leaves carry final
/// horizontal coordinates (`y` is implicit: 0 at leaves, the merge height at
/// branches).
///
/// Every branch contributes exactly one right-angle bracket
/// `(xl,yl) -> (xl,d) -> (xr,d) -> (xr,yr)` joining its two children at its own
/// height; the branch itself resolves to the horizontal midpoint of its children at
/// that height. A bare leaf yields an empty path.
///
/// Pure over the input tree. Crossing brackets from out-of-order coordinates or
/// non-monotonic heights are drawn as-is, not rejected.
pub fn dendrogram_path(tree: &Tree<f64>) -> DendrogramPath {
    let mut polylines = Vec::new();
    resolve(tree, &mut polylines);
    DendrogramPath { polylines }
}

/// Recursive descent; emits into the shared accumulator (children before parents)
/// and returns the subtree's resolved position.
fn resolve(tree: &Tree<f64>, out: &mut Vec<Polyline>) -> Point {
    match tree {
        Tree::Leaf(x) => point(*x, 0.0),
        Tree::Branch {
            height,
            left,
            right,
        } => {
            let l = resolve(left, out);
            let r = resolve(right, out);
            out.push(Polyline::from_points([
                l,
                point(l.x, *height),
                point(r.x, *height),
                r,
            ]));
            midpoint_at(l, r, *height)
        }
    }
}
