//! Rule factories for common adaptive relationships.
//!
//! Each factory builds an [`AdaptiveConstraint`] whose rule picks or derives
//! a constraint description from the current trait state and applies it via
//! the regular activation API. An unspecified size class always counts as
//! regular.

use anchorforge_constraints::{
    BinaryConstraint, BinaryKind, ConstrainExt, UnaryConstraint, UnaryKind,
};
use anchorforge_core::{
    LayoutConstraint, LayoutTarget, SizeClass, SizeClassDependent, TextStyle, TraitState, View,
};

use crate::controller::AdaptiveConstraint;

fn pick<T: Copy>(state: &TraitState, regular: T, compact: T) -> T {
    match state.horizontal {
        SizeClass::Compact => compact,
        SizeClass::Regular | SizeClass::Unspecified => regular,
    }
}

/// Constrains the view by different descriptions in horizontally regular
/// and horizontally compact environments.
pub fn horizontal(
    regular: UnaryConstraint,
    compact: UnaryConstraint,
    view: &View,
) -> AdaptiveConstraint<impl Fn(&TraitState) -> Vec<LayoutConstraint>> {
    let target = view.clone();
    AdaptiveConstraint::new(view, move |state| {
        target.constrain([pick(state, regular, compact)])
    })
}

/// Constrains the view to another target by different descriptions in
/// horizontally regular and horizontally compact environments.
pub fn horizontal_between<O>(
    regular: BinaryConstraint,
    compact: BinaryConstraint,
    view: &View,
    other: &O,
) -> AdaptiveConstraint<impl Fn(&TraitState) -> Vec<LayoutConstraint>>
where
    O: LayoutTarget + Clone + 'static,
{
    let target = view.clone();
    let other = other.clone();
    AdaptiveConstraint::new(view, move |state| {
        target.constrain_to(&other, [pick(state, regular, compact)])
    })
}

/// Constrains the view by a kind whose value depends on the size class.
pub fn resolving(
    value: SizeClassDependent<f64>,
    kind: UnaryKind,
    view: &View,
) -> AdaptiveConstraint<impl Fn(&TraitState) -> Vec<LayoutConstraint>> {
    let target = view.clone();
    AdaptiveConstraint::new(view, move |state| {
        target.constrain([kind.with_value(*value.resolve(state))])
    })
}

/// Constrains the view to another target by a kind whose value depends on
/// the size class.
pub fn resolving_between<O>(
    value: SizeClassDependent<f64>,
    kind: BinaryKind,
    view: &View,
    other: &O,
) -> AdaptiveConstraint<impl Fn(&TraitState) -> Vec<LayoutConstraint>>
where
    O: LayoutTarget + Clone + 'static,
{
    let target = view.clone();
    let other = other.clone();
    AdaptiveConstraint::new(view, move |state| {
        target.constrain_to(&other, [kind.with_value(*value.resolve(state))])
    })
}

/// Constrains the view by `base` with every numeric payload multiplied by
/// the environment's scaling factor for `style`.
///
/// Scaling is linear for every payload, aspect ratios included; the
/// comparison mode is preserved.
pub fn text_scaled(
    base: UnaryConstraint,
    style: TextStyle,
    view: &View,
) -> AdaptiveConstraint<impl Fn(&TraitState) -> Vec<LayoutConstraint>> {
    let target = view.clone();
    AdaptiveConstraint::new(view, move |state| {
        target.constrain([base.scaled_by(state.text_scale(style))])
    })
}
