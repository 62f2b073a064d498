#![forbid(unsafe_code)]

//! Headless dendrogram layout.
//!
//! Given a binary clustering tree ([`Tree`], from `clado-core`), this crate assigns
//! every leaf a horizontal coordinate and derives the right-angle bracket geometry
//! connecting children to parents at their merge heights. It never draws: the
//! caller supplies the leaf renderer and the polyline stroker, both producing an
//! opaque [`Shape`], and gets back the composed drawable plus the
//! position-annotated tree.
//!
//! ```no_run
//! # use clado_layout::{WidthMode, layout, Result};
//! # use clado_core::Tree;
//! # fn demo<S: clado_core::Shape>(
//! #     render: impl FnMut(&&str) -> Result<S>,
//! #     stroke: impl FnMut(&clado_layout::Polyline) -> S,
//! # ) -> Result<()> {
//! let tree = Tree::branch(
//!     5.0,
//!     Tree::branch(1.0, Tree::leaf("a"), Tree::leaf("b")),
//!     Tree::leaf("c"),
//! );
//! let out = layout(WidthMode::Variable, render, stroke, tree)?;
//! # let _ = out.shape;
//! # Ok(())
//! # }
//! ```

pub mod custom;
pub mod model;
pub mod path;
pub mod place;

pub use clado_core::{Shape, Tree};
pub use custom::{Style, layout_custom};
pub use model::{Bounds, DendrogramPath, Layout, LayoutPoint, Polyline};
pub use path::dendrogram_path;
pub use place::{fixed_width, variable_width};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("leaf render failed: {source}")]
    LeafRender {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl Error {
    /// Wraps a failure from the caller's leaf renderer. The layout never interprets
    /// it; it only carries it back out through `?`.
    pub fn leaf_render(
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Error::LeafRender {
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Leaf spacing strategy.
///
/// `Fixed` measures one representative leaf and spaces all leaves uniformly — valid
/// only when every leaf renders at that width (not checked; unequal leaves come out
/// misaligned, not as an error). `Variable` measures each leaf individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthMode {
    Fixed,
    Variable,
}

/// Lays out the dendrogram: places the leaves per `mode`, builds the bracket path,
/// and composes the stroked path layer above the left-aligned leaf row.
///
/// `render` is called once per leaf in left-to-right order (`Fixed` mode adds one
/// extra call up front to establish the representative width). Returns the composed
/// shape together with the positioned tree for caller-side post-processing.
pub fn layout<A, S, R, K>(
    mode: WidthMode,
    mut render: R,
    mut stroke: K,
    tree: Tree<A>,
) -> Result<Layout<A, S>>
where
    S: Shape,
    R: FnMut(&A) -> Result<S>,
    K: FnMut(&Polyline) -> S,
{
    let (positioned, row) = place::place_leaves(mode, &mut render, tree)?;

    let path = path::dendrogram_path(&positioned.map_ref(|(_, x)| *x));
    let path_layer = path
        .polylines
        .iter()
        .fold(S::empty(), |acc, polyline| acc.atop(stroke(polyline)));
    let leaf_row = row
        .into_iter()
        .reduce(Shape::beside)
        .unwrap_or_else(S::empty);

    Ok(Layout {
        shape: path_layer.above(leaf_row),
        positioned,
    })
}

/// [`layout`] when only the drawable is wanted.
pub fn dendrogram<A, S, R, K>(mode: WidthMode, render: R, stroke: K, tree: Tree<A>) -> Result<S>
where
    S: Shape,
    R: FnMut(&A) -> Result<S>,
    K: FnMut(&Polyline) -> S,
{
    Ok(layout(mode, render, stroke, tree)?.shape)
}
