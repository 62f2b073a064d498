#![allow(dead_code)]

use clado_core::{Shape, Tree};
use clado_layout::{Polyline, Result};

/// Test stand-in for a drawable: records exactly how it was composed so tests can
/// assert on structure, with just enough width bookkeeping to drive placement.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Empty,
    Leaf { label: String, width: f64 },
    Stroke { points: Vec<(f64, f64)> },
    Atop(Box<Block>, Box<Block>),
    Beside(Box<Block>, Box<Block>),
    Above(Box<Block>, Box<Block>),
}

impl Block {
    pub fn leaf(label: &str, width: f64) -> Self {
        Block::Leaf {
            label: label.to_string(),
            width,
        }
    }

    /// Leaf labels in beside-order, for asserting the row layout.
    pub fn row_labels(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_labels(&mut out);
        out
    }

    fn collect_labels(&self, out: &mut Vec<String>) {
        match self {
            Block::Leaf { label, .. } => out.push(label.clone()),
            Block::Atop(a, b) | Block::Beside(a, b) | Block::Above(a, b) => {
                a.collect_labels(out);
                b.collect_labels(out);
            }
            Block::Empty | Block::Stroke { .. } => {}
        }
    }
}

impl Shape for Block {
    fn empty() -> Self {
        Block::Empty
    }

    fn width(&self) -> f64 {
        match self {
            Block::Empty => 0.0,
            Block::Leaf { width, .. } => *width,
            Block::Stroke { points } => {
                let xs = points.iter().map(|p| p.0);
                let min = xs.clone().fold(f64::INFINITY, f64::min);
                let max = xs.fold(f64::NEG_INFINITY, f64::max);
                if min.is_finite() { max - min } else { 0.0 }
            }
            Block::Atop(a, b) | Block::Above(a, b) => a.width().max(b.width()),
            Block::Beside(a, b) => a.width() + b.width(),
        }
    }

    fn atop(self, other: Self) -> Self {
        Block::Atop(Box::new(self), Box::new(other))
    }

    fn beside(self, other: Self) -> Self {
        Block::Beside(Box::new(self), Box::new(other))
    }

    fn above(self, other: Self) -> Self {
        Block::Above(Box::new(self), Box::new(other))
    }
}

/// Renderer assigning each label a width; panics on unknown labels so typos in
/// fixtures fail loudly.
pub fn render_widths<'a>(
    widths: &'a [(&'a str, f64)],
) -> impl FnMut(&&str) -> Result<Block> + 'a {
    move |label: &&str| {
        let width = widths
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, w)| *w)
            .unwrap_or_else(|| panic!("no width for leaf {label:?}"));
        Ok(Block::leaf(label, width))
    }
}

pub fn stroke_block(polyline: &Polyline) -> Block {
    Block::Stroke {
        points: polyline.points.iter().map(|p| (p.x, p.y)).collect(),
    }
}

/// The worked example from the docs: ((a, b) at height 1, c) merged at height 5.
pub fn abc() -> Tree<&'static str> {
    Tree::branch(
        5.0,
        Tree::branch(1.0, Tree::leaf("a"), Tree::leaf("b")),
        Tree::leaf("c"),
    )
}

/// Strictly left-nested chain of `n` leaves, the single-linkage worst case.
pub fn left_chain(n: usize) -> Tree<usize> {
    let mut tree = Tree::leaf(0);
    for i in 1..n {
        tree = Tree::branch(i as f64, tree, Tree::leaf(i));
    }
    tree
}

/// Leaf coordinates of a positioned tree, in drawing order.
pub fn leaf_xs<A>(tree: &Tree<(A, f64)>) -> Vec<f64> {
    tree.leaves().map(|(_, x)| *x).collect()
}
