//! The activation API on layout targets.

use anchorforge_core::{LayoutConstraint, LayoutTarget, Priority};

use crate::binary::BinaryConstraint;
use crate::unary::UnaryConstraint;

/// Applies constraint descriptions to layout targets.
///
/// Implemented for every [`LayoutTarget`]. Each method translates the given
/// descriptions, activates the result at the given priority (required when
/// unspecified) and returns the activated constraints.
///
/// The superview-relative methods return an empty list when the target has
/// no superview yet; an incomplete hierarchy is a valid non-error outcome
/// callers must expect.
pub trait ConstrainExt: LayoutTarget {
    /// Constrains this target using the given single-target descriptions.
    fn constrain<I>(&self, constraints: I) -> Vec<LayoutConstraint>
    where
        I: IntoIterator<Item = UnaryConstraint>,
    {
        self.constrain_with(Priority::REQUIRED, constraints)
    }

    /// Constrains this target at a priority.
    fn constrain_with<I>(&self, priority: Priority, constraints: I) -> Vec<LayoutConstraint>
    where
        I: IntoIterator<Item = UnaryConstraint>,
    {
        let built: Vec<LayoutConstraint> = constraints
            .into_iter()
            .flat_map(|description| description.constraints(self))
            .collect();
        activate_all(&built, priority);
        built
    }

    /// Constrains this target to another using the given descriptions.
    fn constrain_to<O, I>(&self, other: &O, constraints: I) -> Vec<LayoutConstraint>
    where
        O: LayoutTarget + ?Sized,
        I: IntoIterator<Item = BinaryConstraint>,
    {
        self.constrain_to_with(Priority::REQUIRED, other, constraints)
    }

    /// Constrains this target to another at a priority.
    fn constrain_to_with<O, I>(
        &self,
        priority: Priority,
        other: &O,
        constraints: I,
    ) -> Vec<LayoutConstraint>
    where
        O: LayoutTarget + ?Sized,
        I: IntoIterator<Item = BinaryConstraint>,
    {
        let built: Vec<LayoutConstraint> = constraints
            .into_iter()
            .flat_map(|description| description.constraints(self, other))
            .collect();
        activate_all(&built, priority);
        built
    }

    /// Constrains this target to its superview.
    fn constrain_to_superview<I>(&self, constraints: I) -> Vec<LayoutConstraint>
    where
        I: IntoIterator<Item = BinaryConstraint>,
    {
        self.constrain_to_superview_with(Priority::REQUIRED, constraints)
    }

    /// Constrains this target to its superview at a priority.
    fn constrain_to_superview_with<I>(
        &self,
        priority: Priority,
        constraints: I,
    ) -> Vec<LayoutConstraint>
    where
        I: IntoIterator<Item = BinaryConstraint>,
    {
        match self.superview() {
            Some(superview) => self.constrain_to_with(priority, &superview, constraints),
            None => Vec::new(),
        }
    }

    /// Constrains this target to its superview's layout margins guide.
    fn constrain_to_superview_margins<I>(&self, constraints: I) -> Vec<LayoutConstraint>
    where
        I: IntoIterator<Item = BinaryConstraint>,
    {
        self.constrain_to_superview_margins_with(Priority::REQUIRED, constraints)
    }

    /// Constrains this target to its superview's layout margins guide at a
    /// priority.
    fn constrain_to_superview_margins_with<I>(
        &self,
        priority: Priority,
        constraints: I,
    ) -> Vec<LayoutConstraint>
    where
        I: IntoIterator<Item = BinaryConstraint>,
    {
        match self.superview() {
            Some(superview) => {
                self.constrain_to_with(priority, &superview.layout_margins_guide(), constraints)
            }
            None => Vec::new(),
        }
    }

    /// Constrains this target to its superview's safe-area guide.
    fn constrain_to_superview_safe_area<I>(&self, constraints: I) -> Vec<LayoutConstraint>
    where
        I: IntoIterator<Item = BinaryConstraint>,
    {
        self.constrain_to_superview_safe_area_with(Priority::REQUIRED, constraints)
    }

    /// Constrains this target to its superview's safe-area guide at a
    /// priority.
    fn constrain_to_superview_safe_area_with<I>(
        &self,
        priority: Priority,
        constraints: I,
    ) -> Vec<LayoutConstraint>
    where
        I: IntoIterator<Item = BinaryConstraint>,
    {
        match self.superview() {
            Some(superview) => {
                self.constrain_to_with(priority, &superview.safe_area_guide(), constraints)
            }
            None => Vec::new(),
        }
    }
}

impl<T: LayoutTarget + ?Sized> ConstrainExt for T {}

/// Sets the priority on each constraint and activates it; activation itself
/// installs the constraint and clears the owning view's frame-translation
/// flag.
fn activate_all(constraints: &[LayoutConstraint], priority: Priority) {
    for constraint in constraints {
        constraint.set_priority(priority);
        constraint.activate();
    }
}
