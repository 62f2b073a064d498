//! Customizable layout: per-arm decoration and caller-supplied layer combinators.

use crate::model::{Layout, Polyline};
use crate::{Result, WidthMode, place};
use clado_core::geom::{Point, midpoint_at, point};
use clado_core::{Shape, Tree};

/// Styling hooks for [`layout_custom`]. The defaults reproduce [`crate::layout`]
/// exactly, so a `Style::default()` with one hook replaced is the usual way in.
///
/// - `decorate` sees each half-bracket of every branch (left arm: left child up to
///   the horizontal midpoint; right arm: midpoint down to the right child) already
///   stroked into a shape, together with the positioned subtree that arm leads to.
///   Default: identity.
/// - `combine_leaves` folds the rendered leaf shapes into the leaf row,
///   left-to-right. Default: [`Shape::beside`].
/// - `combine_tree` composes the finished path layer with the leaf row. Default:
///   [`Shape::above`] (brackets stacked over the leaves, left-aligned).
pub struct Style<'a, A, S: Shape> {
    pub decorate: Box<dyn FnMut(&Tree<(A, f64)>, S) -> S + 'a>,
    pub combine_tree: Box<dyn FnMut(S, S) -> S + 'a>,
    pub combine_leaves: Box<dyn FnMut(S, S) -> S + 'a>,
}

impl<A, S: Shape> Default for Style<'_, A, S> {
    fn default() -> Self {
        Self {
            decorate: Box::new(|_subtree, shape| shape),
            combine_tree: Box::new(|paths, leaves| paths.above(leaves)),
            combine_leaves: Box::new(|row, item| row.beside(item)),
        }
    }
}

/// [`crate::layout`] with the composition opened up: each bracket arm is stroked
/// separately, passed through `style.decorate` with its subtree, and the two layers
/// are combined by the caller's hooks instead of the fixed beside/above folds.
pub fn layout_custom<A, S, R, K>(
    mode: WidthMode,
    mut render: R,
    mut stroke: K,
    mut style: Style<'_, A, S>,
    tree: Tree<A>,
) -> Result<Layout<A, S>>
where
    S: Shape,
    R: FnMut(&A) -> Result<S>,
    K: FnMut(&Polyline) -> S,
{
    let (positioned, row) = place::place_leaves(mode, &mut render, tree)?;

    let (_root, path_layer) = resolve(&positioned, &mut stroke, &mut style.decorate);
    let leaf_row = row
        .into_iter()
        .reduce(|acc, item| (style.combine_leaves)(acc, item))
        .unwrap_or_else(S::empty);

    Ok(Layout {
        shape: (style.combine_tree)(path_layer, leaf_row),
        positioned,
    })
}

/// Same position bookkeeping as the standard path generator, but each branch emits
/// two decorated half-arm shapes (meeting at the midpoint) instead of one polyline.
/// Shapes merge by `atop`, a constant number of combines per branch.
fn resolve<A, S, K, D>(tree: &Tree<(A, f64)>, stroke: &mut K, decorate: &mut D) -> (Point, S)
where
    S: Shape,
    K: FnMut(&Polyline) -> S,
    D: FnMut(&Tree<(A, f64)>, S) -> S,
{
    match tree {
        Tree::Leaf((_, x)) => (point(*x, 0.0), S::empty()),
        Tree::Branch {
            height,
            left,
            right,
        } => {
            let (l, below_l) = resolve(left, stroke, decorate);
            let (r, below_r) = resolve(right, stroke, decorate);
            let mid = midpoint_at(l, r, *height);

            let left_arm = Polyline::from_points([l, point(l.x, *height), mid]);
            let right_arm = Polyline::from_points([mid, point(r.x, *height), r]);
            let left_shape = decorate(left, stroke(&left_arm));
            let right_shape = decorate(right, stroke(&right_arm));

            let shape = left_shape.atop(right_shape).atop(below_l).atop(below_r);
            (mid, shape)
        }
    }
}
