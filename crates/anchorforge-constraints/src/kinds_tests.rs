//! Tests for mode-only selectors.

use anchorforge_core::{ComparisonMode, Size};

use super::binary::BinaryConstraint;
use super::kinds::{BinaryKind, UnaryKind};
use super::unary::UnaryConstraint;

#[test]
fn test_unary_kind_completion() {
    assert_eq!(
        UnaryKind::WIDTH.with_value(100.0),
        UnaryConstraint::width(100.0)
    );
    assert_eq!(
        UnaryKind::Height(ComparisonMode::AtMost).with_value(44.0),
        UnaryConstraint::height(44.0).with_mode(ComparisonMode::AtMost)
    );
}

#[test]
fn test_unary_size_kind_completes_to_a_square() {
    assert_eq!(
        UnaryKind::SIZE.with_value(44.0),
        UnaryConstraint::size(Size::square(44.0))
    );
}

#[test]
fn test_binary_edge_kind_completes_to_an_inset() {
    assert_eq!(
        BinaryKind::LEADING.with_value(8.0),
        BinaryConstraint::leading(8.0)
    );
    assert_eq!(
        BinaryKind::Top(ComparisonMode::AtLeast).with_value(4.0),
        BinaryConstraint::top(4.0).with_mode(ComparisonMode::AtLeast)
    );
}

#[test]
fn test_binary_dimension_kind_completes_to_a_constant() {
    assert_eq!(
        BinaryKind::WIDTH.with_value(10.0),
        BinaryConstraint::Width {
            multiplier: 1.0,
            constant: 10.0,
            mode: ComparisonMode::Equal,
        }
    );
}

#[test]
fn test_centered_kind_completes_to_an_offset() {
    assert_eq!(
        BinaryKind::HorizontallyCentered.with_value(5.0),
        BinaryConstraint::horizontally_centered(5.0)
    );
}
