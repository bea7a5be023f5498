//! End-to-end coverage through the facade: describe, activate, adapt.

use anchorforge::prelude::*;
use anchorforge::TextStyle;
use anchorforge_test::hierarchy::attached_pair;
use anchorforge_test::states;

#[test]
fn pinning_a_panel_into_a_window() {
    let (window, panel) = attached_pair(states::regular_both());

    let edges = panel.constrain_to_superview([BinaryConstraint::fill_inset(8.0)]);
    let sizing = panel.constrain([UnaryConstraint::aspect_ratio(1.0)]);

    assert_eq!(edges.len(), 4);
    assert_eq!(sizing.len(), 1);
    assert_eq!(panel.installed_constraints().len(), 5);
    assert!(!panel.translates_frame_into_constraints());
    assert!(window.translates_frame_into_constraints());
}

#[test]
fn optional_constraints_carry_their_priority() {
    let (window, panel) = attached_pair(states::regular_both());
    let preferred = panel.constrain_to_with(
        Priority::DEFAULT_HIGH,
        &window,
        [BinaryConstraint::width(0.5)],
    );
    assert_eq!(preferred[0].priority(), Priority::DEFAULT_HIGH);
}

#[test]
fn a_size_class_swap_driven_from_the_window() {
    let (window, panel) = attached_pair(states::regular_width());

    let mut margin = rules::horizontal_between(
        BinaryConstraint::leading(24.0),
        BinaryConstraint::leading(8.0),
        &panel,
        &window,
    );
    let roomy = margin.active_constraints()[0].clone();
    assert_eq!(roomy.constant(), 24.0);

    // The window reports a narrower environment; its owner forwards the
    // change to every adaptive constraint it holds.
    window.set_trait_state(states::compact_width());
    margin.environment_changed();

    let tight = margin.active_constraints()[0].clone();
    assert!(!roomy.is_active());
    assert!(tight.is_active());
    assert_eq!(tight.constant(), 8.0);
    assert_eq!(panel.installed_constraints(), vec![tight]);
}

#[test]
fn dynamic_type_scales_a_fixed_width() {
    let (window, badge) = attached_pair(states::regular_both());
    let mut width = rules::text_scaled(UnaryConstraint::width(100.0), TextStyle::Body, &badge);
    assert_eq!(width.active_constraints()[0].constant(), 100.0);

    window.set_trait_state(states::text_scaled(1.5));
    width.environment_changed();
    assert_eq!(width.active_constraints()[0].constant(), 150.0);
}

#[test]
fn guides_participate_like_views() {
    let (window, panel) = attached_pair(states::regular_both());
    let content = LayoutGuide::new();
    window.add_layout_guide(&content);

    let built = panel.constrain_to(&content, [BinaryConstraint::centered()]);
    assert_eq!(built.len(), 2);
    assert!(built.iter().all(|c| c.is_active()));
    assert_eq!(panel.installed_constraints(), built);
}

#[test]
fn an_incomplete_hierarchy_yields_no_constraints() {
    let orphan = View::new();
    assert!(orphan
        .constrain_to_superview([BinaryConstraint::fill_inset(0.0)])
        .is_empty());
}
