//! Ready-made trait states.

use anchorforge_core::{SizeClass, TextScaling, TraitState};

/// Regular on both axes.
pub fn regular_both() -> TraitState {
    TraitState::new(SizeClass::Regular, SizeClass::Regular)
}

/// Compact on both axes.
pub fn compact_both() -> TraitState {
    TraitState::new(SizeClass::Compact, SizeClass::Compact)
}

/// Horizontally regular, vertically compact.
pub fn regular_width() -> TraitState {
    TraitState::new(SizeClass::Regular, SizeClass::Compact)
}

/// Horizontally compact, vertically regular.
pub fn compact_width() -> TraitState {
    TraitState::new(SizeClass::Compact, SizeClass::Regular)
}

/// Both axes unspecified, as an unattached view reports.
pub fn unspecified() -> TraitState {
    TraitState::default()
}

/// Regular on both axes with a uniform text-scaling factor.
pub fn text_scaled(factor: f64) -> TraitState {
    regular_both().with_text_scaling(TextScaling::uniform(factor))
}
