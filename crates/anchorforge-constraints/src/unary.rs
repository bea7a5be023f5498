//! Constraint descriptions involving a single layout target.

use anchorforge_core::{ComparisonMode, LayoutConstraint, LayoutTarget, Size};

/// A constraint description involving only one layout target.
///
/// Descriptions are plain immutable values: construct one, translate it
/// with [`constraints`](UnaryConstraint::constraints), and activate the
/// result (or let [`ConstrainExt`](crate::ConstrainExt) do both).
/// Factory functions default the mode to [`ComparisonMode::Equal`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnaryConstraint {
    /// Constrains the target to a given width.
    Width {
        value: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains the target to a given height.
    Height {
        value: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains the target to a given size; expands to one width and one
    /// height constraint.
    Size {
        size: Size,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
    /// Constrains the target's width to its own height times a ratio.
    AspectRatio {
        ratio: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        mode: ComparisonMode,
    },
}

impl UnaryConstraint {
    /// A fixed width.
    pub const fn width(value: f64) -> Self {
        UnaryConstraint::Width {
            value,
            mode: ComparisonMode::Equal,
        }
    }

    /// A fixed height.
    pub const fn height(value: f64) -> Self {
        UnaryConstraint::Height {
            value,
            mode: ComparisonMode::Equal,
        }
    }

    /// A fixed size.
    pub const fn size(size: Size) -> Self {
        UnaryConstraint::Size {
            size,
            mode: ComparisonMode::Equal,
        }
    }

    /// A fixed square size.
    pub const fn square(side: f64) -> Self {
        UnaryConstraint::size(Size::square(side))
    }

    /// A width-to-height aspect ratio.
    pub const fn aspect_ratio(ratio: f64) -> Self {
        UnaryConstraint::AspectRatio {
            ratio,
            mode: ComparisonMode::Equal,
        }
    }

    /// Returns the same description with a different comparison mode.
    pub const fn with_mode(self, mode: ComparisonMode) -> Self {
        match self {
            UnaryConstraint::Width { value, .. } => UnaryConstraint::Width { value, mode },
            UnaryConstraint::Height { value, .. } => UnaryConstraint::Height { value, mode },
            UnaryConstraint::Size { size, .. } => UnaryConstraint::Size { size, mode },
            UnaryConstraint::AspectRatio { ratio, .. } => {
                UnaryConstraint::AspectRatio { ratio, mode }
            }
        }
    }

    /// Returns the same description with every numeric payload multiplied
    /// by `factor`, preserving the mode.
    ///
    /// Aspect ratios scale the same linear way as widths and heights; the
    /// dynamic-type rules rely on that as an intentional simplification.
    pub fn scaled_by(self, factor: f64) -> Self {
        match self {
            UnaryConstraint::Width { value, mode } => UnaryConstraint::Width {
                value: value * factor,
                mode,
            },
            UnaryConstraint::Height { value, mode } => UnaryConstraint::Height {
                value: value * factor,
                mode,
            },
            UnaryConstraint::Size { size, mode } => UnaryConstraint::Size {
                size: Size::new(size.width * factor, size.height * factor),
                mode,
            },
            UnaryConstraint::AspectRatio { ratio, mode } => UnaryConstraint::AspectRatio {
                ratio: ratio * factor,
                mode,
            },
        }
    }

    /// Builds the concrete constraints this description represents for the
    /// given target, without activating them.
    pub fn constraints<T>(&self, target: &T) -> Vec<LayoutConstraint>
    where
        T: LayoutTarget + ?Sized,
    {
        match *self {
            UnaryConstraint::Width { value, mode } => {
                vec![target.width_anchor().constraint_constant(mode, value)]
            }
            UnaryConstraint::Height { value, mode } => {
                vec![target.height_anchor().constraint_constant(mode, value)]
            }
            UnaryConstraint::Size { size, mode } => vec![
                target.width_anchor().constraint_constant(mode, size.width),
                target
                    .height_anchor()
                    .constraint_constant(mode, size.height),
            ],
            UnaryConstraint::AspectRatio { ratio, mode } => vec![target
                .width_anchor()
                .constraint_to_scaled(&target.height_anchor(), mode, ratio, 0.0)],
        }
    }
}
