/// Capability required of the caller's drawable type.
///
/// The layout passes never draw anything themselves; they only measure widths and
/// describe how the caller's shapes combine. Any diagram/canvas type that can report
/// a width and be composed in these three ways can back a dendrogram:
///
/// - [`Shape::atop`] overlays two shapes in a shared coordinate frame (geometric
///   union; `empty` is the identity),
/// - [`Shape::beside`] places the second shape to the right of the first,
/// - [`Shape::above`] stacks the second shape below the first, left-aligned.
///
/// The exact positioning semantics of `beside`/`above` belong to the implementor;
/// the layout only relies on `beside` preserving left-to-right order so the leaf row
/// lines up with the computed leaf coordinates.
pub trait Shape: Sized {
    /// The empty drawing, identity for [`Shape::atop`].
    fn empty() -> Self;

    /// Horizontal extent, used to space leaves in variable-width mode.
    fn width(&self) -> f64;

    fn atop(self, other: Self) -> Self;

    fn beside(self, other: Self) -> Self;

    fn above(self, other: Self) -> Self;
}
