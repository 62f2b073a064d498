//! Leaf placement: assigns every leaf a horizontal coordinate.
//!
//! Both strategies are single in-order walks threading their running state by
//! `&mut`. Single-linkage clustering routinely produces maximally unbalanced trees,
//! so anything per-branch (pairwise row concatenation, repeated re-measuring) would
//! go quadratic; the accumulator vector makes the whole pass linear in leaf count.

use crate::Result;
use clado_core::{Shape, Tree};

/// Places every leaf assuming the uniform `width`, returning the positioned tree and
/// the total row width (`leaf_count * width`).
///
/// Leaf `i` (left-to-right, 0-indexed) lands at `i * width`: coordinates are leaf
/// centers, normalized so the first leaf is centered on the origin. Branch nodes get
/// no coordinate here; the path generator derives theirs as child midpoints.
///
/// This is the fast path when every leaf is known to render at the same width;
/// unequal leaves are not detected and simply misalign.
pub fn fixed_width<A>(width: f64, tree: Tree<A>) -> (Tree<(A, f64)>, f64) {
    let mut cursor = 0.0;
    let positioned = place_fixed(width, tree, &mut cursor);
    (positioned, cursor)
}

fn place_fixed<A>(width: f64, tree: Tree<A>, cursor: &mut f64) -> Tree<(A, f64)> {
    match tree {
        Tree::Leaf(value) => {
            let x = *cursor;
            *cursor += width;
            Tree::Leaf((value, x))
        }
        Tree::Branch {
            height,
            left,
            right,
        } => {
            let left = place_fixed(width, *left, cursor);
            let right = place_fixed(width, *right, cursor);
            Tree::branch(height, left, right)
        }
    }
}

/// Places every leaf according to its rendered width.
///
/// Each leaf payload is rendered exactly once, in left-to-right order; the leaf is
/// centered on the cursor (`cursor + w/2`) and the cursor advances by the measured
/// width. Returns the positioned tree plus the rendered shapes in exact leaf order,
/// ready for the caller to concatenate into the leaf row.
///
/// Render failures propagate untouched.
pub fn variable_width<A, S, F>(mut render: F, tree: Tree<A>) -> Result<(Tree<(A, f64)>, Vec<S>)>
where
    S: Shape,
    F: FnMut(&A) -> Result<S>,
{
    let mut cursor = 0.0;
    let mut row = Vec::new();
    let positioned = place_variable(&mut render, tree, &mut cursor, &mut row)?;
    Ok((positioned, row))
}

fn place_variable<A, S, F>(
    render: &mut F,
    tree: Tree<A>,
    cursor: &mut f64,
    row: &mut Vec<S>,
) -> Result<Tree<(A, f64)>>
where
    S: Shape,
    F: FnMut(&A) -> Result<S>,
{
    match tree {
        Tree::Leaf(value) => {
            let shape = render(&value)?;
            let w = shape.width();
            let x = *cursor + w / 2.0;
            *cursor += w;
            row.push(shape);
            Ok(Tree::Leaf((value, x)))
        }
        Tree::Branch {
            height,
            left,
            right,
        } => {
            let left = place_variable(render, *left, cursor, row)?;
            let right = place_variable(render, *right, cursor, row)?;
            Ok(Tree::branch(height, left, right))
        }
    }
}

/// Strategy dispatch shared by the orchestration entry points: positions the tree
/// and yields the leaf shapes in row order.
///
/// `Fixed` renders the leftmost leaf once to establish the representative width,
/// then renders every leaf again for the row (1 + n render calls); `Variable` is a
/// single pass (exactly n calls).
pub(crate) fn place_leaves<A, S, F>(
    mode: crate::WidthMode,
    render: &mut F,
    tree: Tree<A>,
) -> Result<(Tree<(A, f64)>, Vec<S>)>
where
    S: Shape,
    F: FnMut(&A) -> Result<S>,
{
    match mode {
        crate::WidthMode::Fixed => {
            let width = render(tree.leftmost_leaf())?.width();
            let (positioned, _total) = fixed_width(width, tree);
            let mut row = Vec::with_capacity(positioned.leaf_count());
            for (value, _x) in positioned.leaves() {
                row.push(render(value)?);
            }
            Ok((positioned, row))
        }
        crate::WidthMode::Variable => variable_width(render, tree),
    }
}
