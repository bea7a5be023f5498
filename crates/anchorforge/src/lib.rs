//! anchorforge - Declarative constraint layout
//!
//! Describe layout relationships as typed values, let translation build the
//! concrete constraints, and let an adaptive controller re-derive them when
//! the environment changes.
//!
//! # Example
//!
//! ```rust
//! use anchorforge::prelude::*;
//!
//! let window = View::new();
//! let panel = View::new();
//! window.add_subview(&panel);
//!
//! // Fill the window with an 8-point inset; keep the panel square.
//! panel.constrain_to_superview([BinaryConstraint::fill_inset(8.0)]);
//! panel.constrain([UnaryConstraint::aspect_ratio(1.0)]);
//! ```

// Layout primitives
pub use anchorforge_core::{
    Anchor, AnchorKind, Attribute, ComparisonMode, Dimension, Insets, LayoutConstraint,
    LayoutGuide, LayoutItem, LayoutTarget, Priority, PriorityParseError, Size, View, XAxis, YAxis,
};

// Environment traits
pub use anchorforge_core::{Axis, SizeClass, SizeClassDependent, TextScaling, TextStyle, TraitState};

// Constraint descriptions and the activation API
pub use anchorforge_constraints::{
    BinaryConstraint, BinaryKind, ConstrainExt, UnaryConstraint, UnaryKind,
};

// Adaptive constraints
pub use anchorforge_adaptive::{rules, AdaptiveConstraint};

pub mod prelude {
    pub use super::{
        AdaptiveConstraint, BinaryConstraint, ComparisonMode, ConstrainExt, Insets, LayoutGuide,
        LayoutTarget, Priority, Size, SizeClass, SizeClassDependent, TraitState, UnaryConstraint,
        View,
    };
    pub use super::rules;
}
