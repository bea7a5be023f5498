//! Tests for two-target descriptions and their translation.

use anchorforge_core::{Attribute, ComparisonMode, Insets, LayoutItem, Size, View};

use super::binary::BinaryConstraint;

fn pair() -> (View, View) {
    (View::new(), View::new())
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_descriptions_use_equal_mode_and_neutral_values() {
    let (panel, window) = pair();
    for description in [
        BinaryConstraint::LEADING,
        BinaryConstraint::TRAILING,
        BinaryConstraint::TOP,
        BinaryConstraint::BOTTOM,
    ] {
        let built = description.constraints(&panel, &window);
        assert_eq!(built[0].relation(), ComparisonMode::Equal);
        assert_eq!(built[0].constant(), 0.0);
    }
    for description in [BinaryConstraint::WIDTH, BinaryConstraint::HEIGHT] {
        let built = description.constraints(&panel, &window);
        assert_eq!(built[0].relation(), ComparisonMode::Equal);
        assert_eq!(built[0].multiplier(), 1.0);
        assert_eq!(built[0].constant(), 0.0);
    }
    assert_eq!(
        BinaryConstraint::FILL.constraints(&panel, &window).len(),
        4
    );
    assert_eq!(BinaryConstraint::CENTERED, BinaryConstraint::centered());
}

// ============================================================================
// Fill and edges
// ============================================================================

#[test]
fn test_fill_expands_to_four_edges_with_inward_signs() {
    let (panel, window) = pair();
    let built = BinaryConstraint::fill_inset(8.0).constraints(&panel, &window);
    assert_eq!(built.len(), 4);

    let expected = [
        (Attribute::Leading, 8.0),
        (Attribute::Trailing, -8.0),
        (Attribute::Top, 8.0),
        (Attribute::Bottom, -8.0),
    ];
    for (constraint, (attribute, constant)) in built.iter().zip(expected) {
        assert_eq!(constraint.first_attribute(), attribute);
        assert_eq!(constraint.second_attribute(), Some(attribute));
        assert_eq!(constraint.constant(), constant);
        assert_eq!(constraint.relation(), ComparisonMode::Equal);
        assert_eq!(
            constraint.first_item(),
            Some(LayoutItem::View(panel.clone()))
        );
        assert_eq!(
            constraint.second_item(),
            Some(LayoutItem::View(window.clone()))
        );
    }
}

#[test]
fn test_fill_honors_each_edge_inset_independently() {
    let (panel, window) = pair();
    let built = BinaryConstraint::fill(Insets::new(1.0, 2.0, 3.0, 4.0)).constraints(&panel, &window);
    let constants: Vec<f64> = built.iter().map(|c| c.constant()).collect();
    // Order: leading, trailing, top, bottom.
    assert_eq!(constants, vec![2.0, -4.0, 1.0, -3.0]);
}

#[test]
fn test_leading_keeps_inset_sign() {
    let (panel, window) = pair();
    let built = BinaryConstraint::leading(12.0).constraints(&panel, &window);
    assert_eq!(built[0].constant(), 12.0);
    assert_eq!(built[0].first_attribute(), Attribute::Leading);
}

#[test]
fn test_trailing_negates_inset() {
    let (panel, window) = pair();
    let built = BinaryConstraint::trailing(12.0).constraints(&panel, &window);
    assert_eq!(built[0].constant(), -12.0);
}

#[test]
fn test_bottom_negates_inset() {
    let (panel, window) = pair();
    let built = BinaryConstraint::bottom(5.0).constraints(&panel, &window);
    assert_eq!(built[0].constant(), -5.0);
}

#[test]
fn test_horizontal_expands_to_both_edges_sharing_mode() {
    let (panel, window) = pair();
    let built = BinaryConstraint::horizontal(6.0)
        .with_mode(ComparisonMode::AtLeast)
        .constraints(&panel, &window);
    assert_eq!(built.len(), 2);
    assert_eq!(built[0].first_attribute(), Attribute::Leading);
    assert_eq!(built[0].constant(), 6.0);
    assert_eq!(built[1].first_attribute(), Attribute::Trailing);
    assert_eq!(built[1].constant(), -6.0);
    assert!(built.iter().all(|c| c.relation() == ComparisonMode::AtLeast));
}

#[test]
fn test_vertical_expands_to_both_edges() {
    let (panel, window) = pair();
    let built = BinaryConstraint::vertical(6.0).constraints(&panel, &window);
    assert_eq!(built.len(), 2);
    assert_eq!(built[0].first_attribute(), Attribute::Top);
    assert_eq!(built[1].first_attribute(), Attribute::Bottom);
}

// ============================================================================
// Spacing
// ============================================================================

#[test]
fn test_spacing_above_ties_top_to_reference_bottom() {
    let (panel, label) = pair();
    let built = BinaryConstraint::spacing_above(10.0).constraints(&panel, &label);
    assert_eq!(built.len(), 1);
    assert_eq!(built[0].first_attribute(), Attribute::Top);
    assert_eq!(built[0].second_attribute(), Some(Attribute::Bottom));
    assert_eq!(built[0].constant(), 10.0);
}

#[test]
fn test_spacing_below_ties_bottom_to_reference_top() {
    let (panel, label) = pair();
    let built = BinaryConstraint::spacing_below(10.0).constraints(&panel, &label);
    assert_eq!(built[0].first_attribute(), Attribute::Bottom);
    assert_eq!(built[0].second_attribute(), Some(Attribute::Top));
    assert_eq!(built[0].constant(), -10.0);
}

#[test]
fn test_spacing_before_ties_leading_to_reference_trailing() {
    let (panel, label) = pair();
    let built = BinaryConstraint::spacing_before(10.0).constraints(&panel, &label);
    assert_eq!(built[0].first_attribute(), Attribute::Leading);
    assert_eq!(built[0].second_attribute(), Some(Attribute::Trailing));
    assert_eq!(built[0].constant(), 10.0);
}

#[test]
fn test_spacing_after_ties_trailing_to_reference_leading() {
    let (panel, label) = pair();
    let built = BinaryConstraint::spacing_after(10.0).constraints(&panel, &label);
    assert_eq!(built[0].first_attribute(), Attribute::Trailing);
    assert_eq!(built[0].second_attribute(), Some(Attribute::Leading));
    assert_eq!(built[0].constant(), -10.0);
}

#[test]
fn test_spacing_honors_mode() {
    let (panel, label) = pair();
    let built = BinaryConstraint::spacing_above(10.0)
        .with_mode(ComparisonMode::AtLeast)
        .constraints(&panel, &label);
    assert_eq!(built[0].relation(), ComparisonMode::AtLeast);
}

// ============================================================================
// Dimensions
// ============================================================================

#[test]
fn test_width_multiplier() {
    let (panel, window) = pair();
    let built = BinaryConstraint::width(0.5).constraints(&panel, &window);
    assert_eq!(built.len(), 1);
    assert_eq!(built[0].first_attribute(), Attribute::Width);
    assert_eq!(built[0].second_attribute(), Some(Attribute::Width));
    assert_eq!(built[0].multiplier(), 0.5);
    assert_eq!(built[0].constant(), 0.0);
}

#[test]
fn test_size_expands_with_dimension_specific_constants() {
    let (panel, window) = pair();
    let description = BinaryConstraint::Size {
        multiplier: 1.0,
        constant: Size::new(10.0, 20.0),
        mode: ComparisonMode::Equal,
    };
    let built = description.constraints(&panel, &window);
    assert_eq!(built.len(), 2);
    assert_eq!(built[0].first_attribute(), Attribute::Width);
    assert_eq!(built[0].constant(), 10.0);
    assert_eq!(built[1].first_attribute(), Attribute::Height);
    assert_eq!(built[1].constant(), 20.0);
    assert!(built.iter().all(|c| c.relation() == ComparisonMode::Equal));
    assert!(built.iter().all(|c| c.multiplier() == 1.0));
}

#[test]
fn test_height_mode_is_honored() {
    let (panel, window) = pair();
    let built = BinaryConstraint::height(2.0)
        .with_mode(ComparisonMode::AtMost)
        .constraints(&panel, &window);
    assert_eq!(built[0].relation(), ComparisonMode::AtMost);
    assert_eq!(built[0].multiplier(), 2.0);
}

// ============================================================================
// Centering
// ============================================================================

#[test]
fn test_centering_carries_offset() {
    let (panel, window) = pair();
    let x = BinaryConstraint::horizontally_centered(5.0).constraints(&panel, &window);
    let y = BinaryConstraint::vertically_centered(-5.0).constraints(&panel, &window);
    assert_eq!(x[0].first_attribute(), Attribute::CenterX);
    assert_eq!(x[0].constant(), 5.0);
    assert_eq!(y[0].first_attribute(), Attribute::CenterY);
    assert_eq!(y[0].constant(), -5.0);
}

#[test]
fn test_centering_ignores_mode() {
    let (panel, window) = pair();
    let built = BinaryConstraint::horizontally_centered(5.0)
        .with_mode(ComparisonMode::AtLeast)
        .constraints(&panel, &window);
    assert_eq!(built[0].relation(), ComparisonMode::Equal);
}

#[test]
fn test_centered_is_always_offset_zero_on_both_axes() {
    let (panel, window) = pair();
    let built = BinaryConstraint::centered().constraints(&panel, &window);
    assert_eq!(built.len(), 2);
    assert_eq!(built[0].first_attribute(), Attribute::CenterX);
    assert_eq!(built[1].first_attribute(), Attribute::CenterY);
    assert!(built.iter().all(|c| c.constant() == 0.0));
    assert!(built.iter().all(|c| c.relation() == ComparisonMode::Equal));
}
