//! The adaptive constraint controller.

use anchorforge_core::{LayoutConstraint, TraitState, View};

/// Keeps exactly one generation of constraints live for a view,
/// regenerating them whenever the owner reports an environment change.
///
/// The rule maps the view's current trait state to the constraint list for
/// that state (the controller activates whatever the rule has not already
/// activated); it runs once at construction and once per
/// [`environment_changed`](AdaptiveConstraint::environment_changed) call.
/// The controller never polls - the embedding application must forward its
/// environment-change notification into `environment_changed` every time.
///
/// The rule closure is stored as a generic parameter, fully monomorphized.
/// Dropping the controller does not deactivate the current generation;
/// constraints live until explicitly deactivated or their view is freed.
///
/// # Example
///
/// ```
/// use anchorforge_adaptive::AdaptiveConstraint;
/// use anchorforge_constraints::{ConstrainExt, UnaryConstraint};
/// use anchorforge_core::{SizeClass, View};
///
/// let view = View::new();
/// let target = view.clone();
/// let mut adaptive = AdaptiveConstraint::new(&view, move |state| {
///     let width = match state.horizontal {
///         SizeClass::Compact => 50.0,
///         _ => 100.0,
///     };
///     target.constrain([UnaryConstraint::width(width)])
/// });
///
/// assert_eq!(adaptive.active_constraints().len(), 1);
/// // ...later, from the view's environment-change notification:
/// adaptive.environment_changed();
/// ```
pub struct AdaptiveConstraint<R>
where
    R: Fn(&TraitState) -> Vec<LayoutConstraint>,
{
    view: View,
    rule: R,
    current: Vec<LayoutConstraint>,
}

impl<R> AdaptiveConstraint<R>
where
    R: Fn(&TraitState) -> Vec<LayoutConstraint>,
{
    /// Creates the controller and installs the initial generation by
    /// evaluating `rule` against the view's current trait state.
    ///
    /// A view attached nowhere reports the default (unspecified) trait
    /// state; the rule still runs against it.
    pub fn new(view: &View, rule: R) -> Self {
        let current = rule(&view.trait_state());
        activate(&current);
        tracing::debug!(
            view = ?view,
            constraints = current.len(),
            "installed initial adaptive constraint generation"
        );
        AdaptiveConstraint {
            view: view.clone(),
            rule,
            current,
        }
    }

    /// Re-derives the constraints for the view's current trait state.
    ///
    /// The previous generation is deactivated in full before the rule runs,
    /// so no two generations are ever active together. The swap runs to
    /// completion on the calling thread; callers never observe a partial
    /// state.
    pub fn environment_changed(&mut self) {
        let previous = self.current.len();
        for constraint in self.current.drain(..) {
            tracing::trace!(constraint = ?constraint, "deactivating");
            constraint.deactivate();
        }
        self.current = (self.rule)(&self.view.trait_state());
        activate(&self.current);
        tracing::debug!(
            view = ?self.view,
            previous,
            current = self.current.len(),
            "swapped adaptive constraint generation"
        );
    }

    /// The view this controller constrains.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The currently active generation.
    pub fn active_constraints(&self) -> &[LayoutConstraint] {
        &self.current
    }
}

/// Activates a freshly produced generation. Rules built on the regular
/// activation API have already done this; activating again is a no-op.
fn activate(constraints: &[LayoutConstraint]) {
    for constraint in constraints {
        constraint.activate();
    }
}
