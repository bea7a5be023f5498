//! Tests for size classes, trait state and size-class-dependent values.

use super::size_class::*;
use super::trait_state::*;

// ============================================================================
// Size classes
// ============================================================================

mod size_classes {
    use super::*;

    #[test]
    fn test_default_is_unspecified() {
        assert_eq!(SizeClass::default(), SizeClass::Unspecified);
    }

    #[test]
    fn test_axis_reads_its_own_class() {
        let state = TraitState::new(SizeClass::Regular, SizeClass::Compact);
        assert_eq!(Axis::Horizontal.size_class_in(&state), SizeClass::Regular);
        assert_eq!(Axis::Vertical.size_class_in(&state), SizeClass::Compact);
    }
}

// ============================================================================
// SizeClassDependent
// ============================================================================

mod size_class_dependent {
    use super::*;

    #[test]
    fn test_resolves_regular() {
        let value = SizeClassDependent::horizontal("wide", "narrow");
        let state = TraitState::new(SizeClass::Regular, SizeClass::Compact);
        assert_eq!(*value.resolve(&state), "wide");
    }

    #[test]
    fn test_resolves_compact() {
        let value = SizeClassDependent::horizontal("wide", "narrow");
        let state = TraitState::new(SizeClass::Compact, SizeClass::Regular);
        assert_eq!(*value.resolve(&state), "narrow");
    }

    #[test]
    fn test_unspecified_falls_back_to_regular() {
        let value = SizeClassDependent::horizontal(24.0, 8.0);
        assert_eq!(*value.resolve(&TraitState::default()), 24.0);
    }

    #[test]
    fn test_vertical_axis_ignores_horizontal_class() {
        let value = SizeClassDependent::vertical(24.0, 8.0);
        let state = TraitState::new(SizeClass::Compact, SizeClass::Regular);
        assert_eq!(*value.resolve(&state), 24.0);
    }
}

// ============================================================================
// Text scaling
// ============================================================================

mod text_scaling {
    use super::*;

    #[test]
    fn test_default_factor_is_one() {
        let state = TraitState::default();
        assert_eq!(state.text_scale(TextStyle::Body), 1.0);
    }

    #[test]
    fn test_uniform_factor() {
        let state = TraitState::default().with_text_scaling(TextScaling::uniform(1.5));
        assert_eq!(state.text_scale(TextStyle::Body), 1.5);
        assert_eq!(state.text_scale(TextStyle::Caption), 1.5);
    }

    #[test]
    fn test_style_override_beats_base() {
        let scaling = TextScaling::uniform(1.2).with_style(TextStyle::Headline, 2.0);
        let state = TraitState::default().with_text_scaling(scaling);
        assert_eq!(state.text_scale(TextStyle::Headline), 2.0);
        assert_eq!(state.text_scale(TextStyle::Footnote), 1.2);
    }
}
