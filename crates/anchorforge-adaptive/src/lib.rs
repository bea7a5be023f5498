//! Environment-adaptive constraints for anchorforge.
//!
//! An [`AdaptiveConstraint`] keeps exactly one generation of constraints
//! live for a view and hot-swaps it whenever the embedding application
//! forwards an environment change. The [`rules`] module provides factories
//! for the common cases: pick a description by size class, resolve a
//! size-class-dependent value into a kind, or scale a description by a
//! dynamic-type factor.
//!
//! # Example
//!
//! ```
//! use anchorforge_adaptive::rules;
//! use anchorforge_constraints::UnaryConstraint;
//! use anchorforge_core::{SizeClass, TraitState, View};
//!
//! let window = View::new();
//! window.set_trait_state(TraitState::new(SizeClass::Regular, SizeClass::Regular));
//! let panel = View::new();
//! window.add_subview(&panel);
//!
//! let mut width = rules::horizontal(
//!     UnaryConstraint::width(320.0),
//!     UnaryConstraint::width(200.0),
//!     &panel,
//! );
//! assert_eq!(width.active_constraints()[0].constant(), 320.0);
//!
//! window.set_trait_state(TraitState::new(SizeClass::Compact, SizeClass::Regular));
//! width.environment_changed();
//! assert_eq!(width.active_constraints()[0].constant(), 200.0);
//! ```

pub mod controller;
pub mod rules;


pub use controller::AdaptiveConstraint;
