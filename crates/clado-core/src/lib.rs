#![forbid(unsafe_code)]

//! Dendrogram tree model (headless).
//!
//! Design goals:
//! - plain immutable values; layout passes are pure transforms
//! - no rendering here: drawing is abstracted behind the [`Shape`] capability
//! - deterministic, testable outputs

pub mod geom;
pub mod shape;
pub mod tree;

pub use shape::Shape;
pub use tree::Tree;
