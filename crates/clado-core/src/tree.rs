use serde::{Deserialize, Serialize};

/// Binary hierarchical-clustering tree.
///
/// Leaves hold the clustered payload; branches hold the merge height of their two
/// children. Trees are built once by the clustering producer and consumed read-only:
/// the layout passes in `clado-layout` return new trees (e.g. `Tree<(A, f64)>` with a
/// horizontal coordinate attached to every leaf) instead of mutating this one.
///
/// Merge heights are taken on trust. The drawn geometry is only plausible when every
/// branch is at least as high as the branches below it (see [`Tree::is_dendrogram`]);
/// nothing here enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tree<A> {
    Leaf(A),
    Branch {
        height: f64,
        left: Box<Tree<A>>,
        right: Box<Tree<A>>,
    },
}

impl<A> Tree<A> {
    pub fn leaf(value: A) -> Self {
        Tree::Leaf(value)
    }

    pub fn branch(height: f64, left: Tree<A>, right: Tree<A>) -> Self {
        Tree::Branch {
            height,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Merge height of the root: 0 for a bare leaf.
    pub fn height(&self) -> f64 {
        match self {
            Tree::Leaf(_) => 0.0,
            Tree::Branch { height, .. } => *height,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Branch { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Payload of the leftmost leaf, i.e. the first leaf in drawing order.
    pub fn leftmost_leaf(&self) -> &A {
        let mut node = self;
        loop {
            match node {
                Tree::Leaf(value) => return value,
                Tree::Branch { left, .. } => node = left,
            }
        }
    }

    /// In-order (left-to-right) traversal of the leaf payloads.
    pub fn leaves(&self) -> Leaves<'_, A> {
        Leaves { stack: vec![self] }
    }

    /// Structure-preserving transform of the leaf payloads.
    pub fn map<B, F: FnMut(A) -> B>(self, mut f: F) -> Tree<B> {
        self.map_inner(&mut f)
    }

    fn map_inner<B, F: FnMut(A) -> B>(self, f: &mut F) -> Tree<B> {
        match self {
            Tree::Leaf(value) => Tree::Leaf(f(value)),
            Tree::Branch {
                height,
                left,
                right,
            } => Tree::Branch {
                height,
                left: Box::new(left.map_inner(f)),
                right: Box::new(right.map_inner(f)),
            },
        }
    }

    /// Like [`Tree::map`] but borrows the payloads instead of consuming the tree.
    pub fn map_ref<B, F: FnMut(&A) -> B>(&self, mut f: F) -> Tree<B> {
        self.map_ref_inner(&mut f)
    }

    fn map_ref_inner<B, F: FnMut(&A) -> B>(&self, f: &mut F) -> Tree<B> {
        match self {
            Tree::Leaf(value) => Tree::Leaf(f(value)),
            Tree::Branch {
                height,
                left,
                right,
            } => Tree::Branch {
                height: *height,
                left: Box::new(left.map_ref_inner(f)),
                right: Box::new(right.map_ref_inner(f)),
            },
        }
    }

    /// Whether merge heights are monotonic: every branch at least as high as the
    /// branches in its subtrees. Clustering algorithms (single/complete/average
    /// linkage, UPGMA, ...) produce such trees; the layout passes assume it but never
    /// check it, so this is offered as a separate pre-flight query.
    pub fn is_dendrogram(&self) -> bool {
        self.monotonic_height().is_some()
    }

    /// Max branch height of the subtree, or `None` on a monotonicity violation.
    /// Leaves report negative infinity so a branch over two leaves is unconstrained.
    fn monotonic_height(&self) -> Option<f64> {
        match self {
            Tree::Leaf(_) => Some(f64::NEG_INFINITY),
            Tree::Branch {
                height,
                left,
                right,
            } => {
                let below = left.monotonic_height()?.max(right.monotonic_height()?);
                (*height >= below).then_some(*height)
            }
        }
    }
}

/// Iterator over leaf payloads in drawing order. Uses an explicit stack so deep
/// single-linkage style trees cannot overflow the call stack during iteration.
pub struct Leaves<'a, A> {
    stack: Vec<&'a Tree<A>>,
}

impl<'a, A> Iterator for Leaves<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A> {
        while let Some(node) = self.stack.pop() {
            match node {
                Tree::Leaf(value) => return Some(value),
                Tree::Branch { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}
