//! Tests for loading constraint declarations from TOML.
//!
//! Run with `--features serde`.

use anchorforge_core::ComparisonMode;
use serde::Deserialize;

use super::binary::BinaryConstraint;
use super::unary::UnaryConstraint;

#[derive(Deserialize)]
struct Declared {
    edges: Vec<BinaryConstraint>,
    sizing: Vec<UnaryConstraint>,
}

#[test]
fn test_declarations_load_from_toml() {
    let declared: Declared = toml::from_str(
        r#"
        edges = [
            { fill = { insets = { top = 8.0, leading = 8.0, bottom = 8.0, trailing = 8.0 } } },
            { vertical_spacing_above = { padding = 12.0, mode = "at_least" } },
            "centered",
        ]
        sizing = [
            { width = { value = 100.0 } },
            { aspect_ratio = { ratio = 1.5, mode = "at_most" } },
        ]
        "#,
    )
    .unwrap();

    assert_eq!(declared.edges[0], BinaryConstraint::fill_inset(8.0));
    assert_eq!(
        declared.edges[1],
        BinaryConstraint::spacing_above(12.0).with_mode(ComparisonMode::AtLeast)
    );
    assert_eq!(declared.edges[2], BinaryConstraint::centered());
    // Omitted modes default to equal.
    assert_eq!(declared.sizing[0], UnaryConstraint::width(100.0));
    assert_eq!(
        declared.sizing[1],
        UnaryConstraint::aspect_ratio(1.5).with_mode(ComparisonMode::AtMost)
    );
}

#[test]
fn test_omitted_multiplier_defaults_to_one() {
    let description: BinaryConstraint =
        toml::from_str(r#"width = { constant = 10.0 }"#).unwrap();
    assert_eq!(
        description,
        BinaryConstraint::Width {
            multiplier: 1.0,
            constant: 10.0,
            mode: ComparisonMode::Equal,
        }
    );
}

#[derive(serde::Serialize, Deserialize)]
struct Wrapper {
    constraints: Vec<BinaryConstraint>,
}

#[test]
fn test_round_trip() {
    let original = vec![
        BinaryConstraint::leading(8.0),
        BinaryConstraint::width(0.5),
        BinaryConstraint::vertically_centered(-2.0),
    ];
    let encoded = toml::to_string(&Wrapper {
        constraints: original.clone(),
    })
    .unwrap();
    let decoded: Wrapper = toml::from_str(&encoded).unwrap();
    assert_eq!(decoded.constraints, original);
}
