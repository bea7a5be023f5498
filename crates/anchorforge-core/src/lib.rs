//! anchorforge-core - Layout primitives and shared value types
//!
//! This crate provides the fundamental abstractions for anchorforge:
//! - Views, layout guides and the [`LayoutTarget`] capability they share
//! - Typed directional anchors and concrete [`LayoutConstraint`]s
//! - Comparison modes and constraint priorities
//! - Trait state (size classes, text scaling) and size-class-dependent values
//!
//! Everything here is single-threaded by design: views and constraints are
//! `Rc`-backed handles meant to live on the thread that owns the UI.

pub mod anchor;
pub mod constraint;
pub mod geometry;
pub mod mode;
pub mod priority;
pub mod size_class;
pub mod target;
pub mod trait_state;
pub mod view;

#[cfg(test)]
mod environment_tests;

pub use anchor::{Anchor, AnchorKind, Attribute, Dimension, XAxis, YAxis};
pub use constraint::LayoutConstraint;
pub use geometry::{Insets, Size};
pub use mode::ComparisonMode;
pub use priority::{Priority, PriorityParseError};
pub use size_class::{Axis, SizeClass, SizeClassDependent};
pub use target::LayoutTarget;
pub use trait_state::{TextScaling, TextStyle, TraitState};
pub use view::{LayoutGuide, LayoutItem, View};
