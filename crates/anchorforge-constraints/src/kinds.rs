//! Mode-only constraint selectors.
//!
//! A kind names a constraint shape and comparison mode without its numeric
//! payload; `with_value` completes it into a full description. The adaptive
//! rules use kinds to pair one selector with values that vary by
//! environment.

use anchorforge_core::{ComparisonMode, Size};

use crate::binary::BinaryConstraint;
use crate::unary::UnaryConstraint;

/// A single-target constraint shape awaiting its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnaryKind {
    Width(ComparisonMode),
    Height(ComparisonMode),
    /// Completed with a square size.
    Size(ComparisonMode),
    AspectRatio(ComparisonMode),
}

impl UnaryKind {
    pub const WIDTH: UnaryKind = UnaryKind::Width(ComparisonMode::Equal);
    pub const HEIGHT: UnaryKind = UnaryKind::Height(ComparisonMode::Equal);
    pub const SIZE: UnaryKind = UnaryKind::Size(ComparisonMode::Equal);
    pub const ASPECT_RATIO: UnaryKind = UnaryKind::AspectRatio(ComparisonMode::Equal);

    /// Completes this kind with a value.
    pub fn with_value(self, value: f64) -> UnaryConstraint {
        match self {
            UnaryKind::Width(mode) => UnaryConstraint::Width { value, mode },
            UnaryKind::Height(mode) => UnaryConstraint::Height { value, mode },
            UnaryKind::Size(mode) => UnaryConstraint::Size {
                size: Size::square(value),
                mode,
            },
            UnaryKind::AspectRatio(mode) => UnaryConstraint::AspectRatio { ratio: value, mode },
        }
    }
}

/// A two-target constraint shape awaiting its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BinaryKind {
    Leading(ComparisonMode),
    Trailing(ComparisonMode),
    Top(ComparisonMode),
    Bottom(ComparisonMode),
    /// Completed with a centering offset.
    HorizontallyCentered,
    /// Completed with a centering offset.
    VerticallyCentered,
    /// Completed with a constant, at multiplier 1.
    Width(ComparisonMode),
    /// Completed with a constant, at multiplier 1.
    Height(ComparisonMode),
}

impl BinaryKind {
    pub const LEADING: BinaryKind = BinaryKind::Leading(ComparisonMode::Equal);
    pub const TRAILING: BinaryKind = BinaryKind::Trailing(ComparisonMode::Equal);
    pub const TOP: BinaryKind = BinaryKind::Top(ComparisonMode::Equal);
    pub const BOTTOM: BinaryKind = BinaryKind::Bottom(ComparisonMode::Equal);
    pub const WIDTH: BinaryKind = BinaryKind::Width(ComparisonMode::Equal);
    pub const HEIGHT: BinaryKind = BinaryKind::Height(ComparisonMode::Equal);

    /// Completes this kind with a value.
    pub fn with_value(self, value: f64) -> BinaryConstraint {
        match self {
            BinaryKind::Leading(mode) => BinaryConstraint::Leading { inset: value, mode },
            BinaryKind::Trailing(mode) => BinaryConstraint::Trailing { inset: value, mode },
            BinaryKind::Top(mode) => BinaryConstraint::Top { inset: value, mode },
            BinaryKind::Bottom(mode) => BinaryConstraint::Bottom { inset: value, mode },
            BinaryKind::HorizontallyCentered => {
                BinaryConstraint::HorizontallyCentered { offset: value }
            }
            BinaryKind::VerticallyCentered => {
                BinaryConstraint::VerticallyCentered { offset: value }
            }
            BinaryKind::Width(mode) => BinaryConstraint::Width {
                multiplier: 1.0,
                constant: value,
                mode,
            },
            BinaryKind::Height(mode) => BinaryConstraint::Height {
                multiplier: 1.0,
                constant: value,
                mode,
            },
        }
    }
}
