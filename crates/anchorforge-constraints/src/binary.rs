//! Constraint descriptions between two layout targets.

use anchorforge_core::{ComparisonMode, Insets, LayoutConstraint, LayoutTarget, Size};

#[cfg(feature = "serde")]
fn default_multiplier() -> f64 {
    1.0
}

/// A constraint description between a primary target and a reference
/// target.
///
/// Factory functions default the mode to [`ComparisonMode::Equal`],
/// multipliers to 1 and constants/offsets to 0.
///
/// Sign convention: trailing- and bottom-style insets and paddings are
/// negated during translation, so a positive value always moves the primary
/// target inward (or towards the reference for spacing descriptions).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BinaryConstraint {
    /// Constrains all four edges of the primary target to the reference's,
    /// each edge inset by its own value.
    Fill {
        #[cfg_attr(feature = "serde", serde(default))]
        insets: Insets,
    },
    /// Constrains the leading edges, inset by a given value.
    Leading {
        inset: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains the trailing edges, inset by a given value.
    Trailing {
        inset: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains the top edges, inset by a given value.
    Top {
        inset: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains the bottom edges, inset by a given value.
    Bottom {
        inset: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains both horizontal edges, sharing one inset and mode.
    Horizontal {
        inset: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains both vertical edges, sharing one inset and mode.
    Vertical {
        inset: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Spaces the primary target below the reference: its top edge against
    /// the reference's bottom edge.
    VerticalSpacingAbove {
        padding: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Spaces the primary target above the reference: its bottom edge
    /// against the reference's top edge.
    VerticalSpacingBelow {
        padding: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Spaces the primary target after the reference: its leading edge
    /// against the reference's trailing edge.
    HorizontalSpacingBefore {
        padding: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Spaces the primary target before the reference: its trailing edge
    /// against the reference's leading edge.
    HorizontalSpacingAfter {
        padding: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains the widths: `primary = reference * multiplier + constant`.
    Width {
        #[cfg_attr(feature = "serde", serde(default = "default_multiplier"))]
        multiplier: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        constant: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains the heights: `primary = reference * multiplier + constant`.
    Height {
        #[cfg_attr(feature = "serde", serde(default = "default_multiplier"))]
        multiplier: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        constant: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains both dimensions; expands to one width and one height
    /// constraint sharing the multiplier and mode, with dimension-specific
    /// constants.
    Size {
        #[cfg_attr(feature = "serde", serde(default = "default_multiplier"))]
        multiplier: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        constant: Size,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Centers the primary target horizontally inside the reference,
    /// shifted by an offset. Always an equality.
    HorizontallyCentered {
        #[cfg_attr(feature = "serde", serde(default))]
        offset: f64,
    },
    /// Centers the primary target vertically inside the reference, shifted
    /// by an offset. Always an equality.
    VerticallyCentered {
        #[cfg_attr(feature = "serde", serde(default))]
        offset: f64,
    },
    /// Centers the primary target on both axes with offset 0.
    Centered,
}

impl BinaryConstraint {
    /// Fill with no insets.
    pub const FILL: Self = Self::fill_inset(0.0);

    /// Leading edges pinned together.
    pub const LEADING: Self = Self::leading(0.0);

    /// Trailing edges pinned together.
    pub const TRAILING: Self = Self::trailing(0.0);

    /// Top edges pinned together.
    pub const TOP: Self = Self::top(0.0);

    /// Bottom edges pinned together.
    pub const BOTTOM: Self = Self::bottom(0.0);

    /// Equal widths.
    pub const WIDTH: Self = Self::width(1.0);

    /// Equal heights.
    pub const HEIGHT: Self = Self::height(1.0);

    /// Centered on both axes.
    pub const CENTERED: Self = Self::Centered;

    /// Fills the reference with per-edge insets.
    pub const fn fill(insets: Insets) -> Self {
        BinaryConstraint::Fill { insets }
    }

    /// Fills the reference with the same inset on every edge.
    pub const fn fill_inset(inset: f64) -> Self {
        BinaryConstraint::Fill {
            insets: Insets::uniform(inset),
        }
    }

    /// Pins the leading edges together, inset by a given value.
    pub const fn leading(inset: f64) -> Self {
        BinaryConstraint::Leading {
            inset,
            mode: ComparisonMode::Equal,
        }
    }

    /// Pins the trailing edges together, inset by a given value.
    pub const fn trailing(inset: f64) -> Self {
        BinaryConstraint::Trailing {
            inset,
            mode: ComparisonMode::Equal,
        }
    }

    /// Pins the top edges together, inset by a given value.
    pub const fn top(inset: f64) -> Self {
        BinaryConstraint::Top {
            inset,
            mode: ComparisonMode::Equal,
        }
    }

    /// Pins the bottom edges together, inset by a given value.
    pub const fn bottom(inset: f64) -> Self {
        BinaryConstraint::Bottom {
            inset,
            mode: ComparisonMode::Equal,
        }
    }

    /// Pins both horizontal edges, sharing one inset.
    pub const fn horizontal(inset: f64) -> Self {
        BinaryConstraint::Horizontal {
            inset,
            mode: ComparisonMode::Equal,
        }
    }

    /// Pins both vertical edges, sharing one inset.
    pub const fn vertical(inset: f64) -> Self {
        BinaryConstraint::Vertical {
            inset,
            mode: ComparisonMode::Equal,
        }
    }

    /// Spaces the primary target below the reference by `padding`.
    pub const fn spacing_above(padding: f64) -> Self {
        BinaryConstraint::VerticalSpacingAbove {
            padding,
            mode: ComparisonMode::Equal,
        }
    }

    /// Spaces the primary target above the reference by `padding`.
    pub const fn spacing_below(padding: f64) -> Self {
        BinaryConstraint::VerticalSpacingBelow {
            padding,
            mode: ComparisonMode::Equal,
        }
    }

    /// Spaces the primary target after the reference by `padding`.
    pub const fn spacing_before(padding: f64) -> Self {
        BinaryConstraint::HorizontalSpacingBefore {
            padding,
            mode: ComparisonMode::Equal,
        }
    }

    /// Spaces the primary target before the reference by `padding`.
    pub const fn spacing_after(padding: f64) -> Self {
        BinaryConstraint::HorizontalSpacingAfter {
            padding,
            mode: ComparisonMode::Equal,
        }
    }

    /// Relates the widths by a multiplier.
    pub const fn width(multiplier: f64) -> Self {
        BinaryConstraint::Width {
            multiplier,
            constant: 0.0,
            mode: ComparisonMode::Equal,
        }
    }

    /// Relates the heights by a multiplier.
    pub const fn height(multiplier: f64) -> Self {
        BinaryConstraint::Height {
            multiplier,
            constant: 0.0,
            mode: ComparisonMode::Equal,
        }
    }

    /// Relates both dimensions by a multiplier.
    pub const fn size(multiplier: f64) -> Self {
        BinaryConstraint::Size {
            multiplier,
            constant: Size::ZERO,
            mode: ComparisonMode::Equal,
        }
    }

    /// Centers horizontally, shifted by `offset`.
    pub const fn horizontally_centered(offset: f64) -> Self {
        BinaryConstraint::HorizontallyCentered { offset }
    }

    /// Centers vertically, shifted by `offset`.
    pub const fn vertically_centered(offset: f64) -> Self {
        BinaryConstraint::VerticallyCentered { offset }
    }

    /// Centers on both axes with offset 0.
    pub const fn centered() -> Self {
        BinaryConstraint::Centered
    }

    /// Returns the same description with a different comparison mode.
    ///
    /// Descriptions without a mode (fill and centering) are returned
    /// unchanged.
    pub const fn with_mode(self, mode: ComparisonMode) -> Self {
        match self {
            BinaryConstraint::Leading { inset, .. } => BinaryConstraint::Leading { inset, mode },
            BinaryConstraint::Trailing { inset, .. } => BinaryConstraint::Trailing { inset, mode },
            BinaryConstraint::Top { inset, .. } => BinaryConstraint::Top { inset, mode },
            BinaryConstraint::Bottom { inset, .. } => BinaryConstraint::Bottom { inset, mode },
            BinaryConstraint::Horizontal { inset, .. } => {
                BinaryConstraint::Horizontal { inset, mode }
            }
            BinaryConstraint::Vertical { inset, .. } => BinaryConstraint::Vertical { inset, mode },
            BinaryConstraint::VerticalSpacingAbove { padding, .. } => {
                BinaryConstraint::VerticalSpacingAbove { padding, mode }
            }
            BinaryConstraint::VerticalSpacingBelow { padding, .. } => {
                BinaryConstraint::VerticalSpacingBelow { padding, mode }
            }
            BinaryConstraint::HorizontalSpacingBefore { padding, .. } => {
                BinaryConstraint::HorizontalSpacingBefore { padding, mode }
            }
            BinaryConstraint::HorizontalSpacingAfter { padding, .. } => {
                BinaryConstraint::HorizontalSpacingAfter { padding, mode }
            }
            BinaryConstraint::Width {
                multiplier,
                constant,
                ..
            } => BinaryConstraint::Width {
                multiplier,
                constant,
                mode,
            },
            BinaryConstraint::Height {
                multiplier,
                constant,
                ..
            } => BinaryConstraint::Height {
                multiplier,
                constant,
                mode,
            },
            BinaryConstraint::Size {
                multiplier,
                constant,
                ..
            } => BinaryConstraint::Size {
                multiplier,
                constant,
                mode,
            },
            other => other,
        }
    }

    /// Builds the concrete constraints this description represents between
    /// the primary and reference targets, without activating them.
    pub fn constraints<P, R>(&self, primary: &P, reference: &R) -> Vec<LayoutConstraint>
    where
        P: LayoutTarget + ?Sized,
        R: LayoutTarget + ?Sized,
    {
        match *self {
            BinaryConstraint::Fill { insets } => vec![
                primary
                    .leading_anchor()
                    .constraint_equal_to(&reference.leading_anchor(), insets.leading),
                primary
                    .trailing_anchor()
                    .constraint_equal_to(&reference.trailing_anchor(), -insets.trailing),
                primary
                    .top_anchor()
                    .constraint_equal_to(&reference.top_anchor(), insets.top),
                primary
                    .bottom_anchor()
                    .constraint_equal_to(&reference.bottom_anchor(), -insets.bottom),
            ],
            BinaryConstraint::Leading { inset, mode } => vec![primary
                .leading_anchor()
                .constraint_to(&reference.leading_anchor(), mode, inset)],
            BinaryConstraint::Trailing { inset, mode } => vec![primary
                .trailing_anchor()
                .constraint_to(&reference.trailing_anchor(), mode, -inset)],
            BinaryConstraint::Top { inset, mode } => vec![primary
                .top_anchor()
                .constraint_to(&reference.top_anchor(), mode, inset)],
            BinaryConstraint::Bottom { inset, mode } => vec![primary
                .bottom_anchor()
                .constraint_to(&reference.bottom_anchor(), mode, -inset)],
            BinaryConstraint::Horizontal { inset, mode } => vec![
                primary
                    .leading_anchor()
                    .constraint_to(&reference.leading_anchor(), mode, inset),
                primary
                    .trailing_anchor()
                    .constraint_to(&reference.trailing_anchor(), mode, -inset),
            ],
            BinaryConstraint::Vertical { inset, mode } => vec![
                primary
                    .top_anchor()
                    .constraint_to(&reference.top_anchor(), mode, inset),
                primary
                    .bottom_anchor()
                    .constraint_to(&reference.bottom_anchor(), mode, -inset),
            ],
            BinaryConstraint::VerticalSpacingAbove { padding, mode } => vec![primary
                .top_anchor()
                .constraint_to(&reference.bottom_anchor(), mode, padding)],
            BinaryConstraint::VerticalSpacingBelow { padding, mode } => vec![primary
                .bottom_anchor()
                .constraint_to(&reference.top_anchor(), mode, -padding)],
            BinaryConstraint::HorizontalSpacingBefore { padding, mode } => vec![primary
                .leading_anchor()
                .constraint_to(&reference.trailing_anchor(), mode, padding)],
            BinaryConstraint::HorizontalSpacingAfter { padding, mode } => vec![primary
                .trailing_anchor()
                .constraint_to(&reference.leading_anchor(), mode, -padding)],
            BinaryConstraint::Width {
                multiplier,
                constant,
                mode,
            } => vec![primary.width_anchor().constraint_to_scaled(
                &reference.width_anchor(),
                mode,
                multiplier,
                constant,
            )],
            BinaryConstraint::Height {
                multiplier,
                constant,
                mode,
            } => vec![primary.height_anchor().constraint_to_scaled(
                &reference.height_anchor(),
                mode,
                multiplier,
                constant,
            )],
            BinaryConstraint::Size {
                multiplier,
                constant,
                mode,
            } => vec![
                primary.width_anchor().constraint_to_scaled(
                    &reference.width_anchor(),
                    mode,
                    multiplier,
                    constant.width,
                ),
                primary.height_anchor().constraint_to_scaled(
                    &reference.height_anchor(),
                    mode,
                    multiplier,
                    constant.height,
                ),
            ],
            BinaryConstraint::HorizontallyCentered { offset } => vec![primary
                .center_x_anchor()
                .constraint_equal_to(&reference.center_x_anchor(), offset)],
            BinaryConstraint::VerticallyCentered { offset } => vec![primary
                .center_y_anchor()
                .constraint_equal_to(&reference.center_y_anchor(), offset)],
            BinaryConstraint::Centered => vec![
                primary
                    .center_x_anchor()
                    .constraint_equal_to(&reference.center_x_anchor(), 0.0),
                primary
                    .center_y_anchor()
                    .constraint_equal_to(&reference.center_y_anchor(), 0.0),
            ],
        }
    }
}
