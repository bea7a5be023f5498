//! Declarative constraint descriptions for anchorforge.
//!
//! This crate provides the typed vocabulary callers use instead of building
//! concrete constraints by hand:
//! - [`UnaryConstraint`] - descriptions on a single target (width, height,
//!   size, aspect ratio)
//! - [`BinaryConstraint`] - descriptions between two targets (edges, fill,
//!   spacing, relative dimensions, centering)
//! - [`UnaryKind`] / [`BinaryKind`] - mode-only selectors completed with a
//!   value later
//! - [`ConstrainExt`] - translate-and-activate methods on any layout target
//!
//! Translation is pure: a description plus its targets yields concrete
//! constraints and nothing else. Activation is separate and explicit, so the
//! mapping stays testable.
//!
//! # Example
//!
//! ```
//! use anchorforge_constraints::{BinaryConstraint, ConstrainExt, UnaryConstraint};
//! use anchorforge_core::View;
//!
//! let window = View::new();
//! let panel = View::new();
//! window.add_subview(&panel);
//!
//! // Pin the panel into its superview with an 8-point inset on every edge
//! // and give it a fixed height.
//! let edges = panel.constrain_to_superview([BinaryConstraint::fill_inset(8.0)]);
//! let height = panel.constrain([UnaryConstraint::height(44.0)]);
//!
//! assert_eq!(edges.len(), 4);
//! assert!(height[0].is_active());
//! ```

pub mod binary;
pub mod constrain;
pub mod kinds;
pub mod unary;

#[cfg(test)]
mod binary_tests;
#[cfg(test)]
mod kinds_tests;
#[cfg(all(test, feature = "serde"))]
mod serde_tests;

pub use binary::BinaryConstraint;
pub use constrain::ConstrainExt;
pub use kinds::{BinaryKind, UnaryKind};
pub use unary::UnaryConstraint;
