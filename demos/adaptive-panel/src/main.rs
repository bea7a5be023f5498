//! Adaptive Panel Example
//!
//! Builds a window containing a panel and a badge, pins them with
//! declarative constraints, then walks the environment through a size-class
//! change and a dynamic-type change, logging each constraint generation.
//!
//! Run with `RUST_LOG=debug` to see the controller's swap diagnostics.

use anchorforge::prelude::*;
use anchorforge::{TextScaling, TextStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn dump(label: &str, view: &View) {
    for constraint in view.installed_constraints() {
        info!(target: "adaptive_panel", "{label}: {constraint:?}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("adaptive_panel=info".parse().unwrap())
                .add_directive("anchorforge_adaptive=debug".parse().unwrap()),
        )
        .init();

    // A window that starts out horizontally regular.
    let window = View::new();
    window.set_trait_state(TraitState::new(SizeClass::Regular, SizeClass::Regular));

    let panel = View::new();
    window.add_subview(&panel);
    let badge = View::new();
    panel.add_subview(&badge);

    // Static constraints: the panel fills the window, the badge sits in the
    // panel's top-trailing corner.
    panel.constrain_to_superview([BinaryConstraint::fill_inset(12.0)]);
    badge.constrain_to_superview([BinaryConstraint::top(8.0), BinaryConstraint::trailing(8.0)]);
    badge.constrain([UnaryConstraint::aspect_ratio(1.0)]);

    // Adaptive constraints: a size-class-dependent side margin and a badge
    // width that follows the body text scale.
    let mut margin = rules::resolving_between(
        SizeClassDependent::horizontal(24.0, 8.0),
        anchorforge::BinaryKind::LEADING,
        &panel,
        &window,
    );
    let mut badge_width =
        rules::text_scaled(UnaryConstraint::width(44.0), TextStyle::Body, &badge);

    info!(target: "adaptive_panel", "initial generation (regular width)");
    dump("panel", &panel);
    dump("badge", &badge);

    // The window narrows; its owner forwards the change to every adaptive
    // constraint it holds.
    window.set_trait_state(TraitState::new(SizeClass::Compact, SizeClass::Regular));
    margin.environment_changed();
    badge_width.environment_changed();

    info!(target: "adaptive_panel", "after narrowing (compact width)");
    dump("panel", &panel);
    dump("badge", &badge);

    // The user cranks up the text size.
    window.set_trait_state(
        TraitState::new(SizeClass::Compact, SizeClass::Regular)
            .with_text_scaling(TextScaling::uniform(1.5)),
    );
    margin.environment_changed();
    badge_width.environment_changed();

    info!(target: "adaptive_panel", "after dynamic-type change (1.5x)");
    dump("badge", &badge);
}
