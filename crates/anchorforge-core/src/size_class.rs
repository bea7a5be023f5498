//! Size classes and values that depend on them.

use crate::trait_state::TraitState;

/// A coarse two-valued classification of available space along one axis.
///
/// `Unspecified` is what an environment reports before a target is attached
/// to a hierarchy; everywhere a choice is made it counts as `Regular`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeClass {
    /// No classification is available yet.
    #[default]
    Unspecified,
    /// Constrained space along the axis.
    Compact,
    /// Generous space along the axis.
    Regular,
}

/// The axis a size class describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// The current classification of this axis in the given trait state.
    pub fn size_class_in(self, state: &TraitState) -> SizeClass {
        match self {
            Axis::Horizontal => state.horizontal,
            Axis::Vertical => state.vertical,
        }
    }
}

/// A value that changes depending on the current size class of one axis.
///
/// Resolution treats `Unspecified` as `Regular`, matching how an unattached
/// view reports its environment.
///
/// # Examples
///
/// ```
/// use anchorforge_core::{SizeClass, SizeClassDependent, TraitState};
///
/// let spacing = SizeClassDependent::horizontal(24.0, 8.0);
/// let state = TraitState::new(SizeClass::Compact, SizeClass::Regular);
/// assert_eq!(*spacing.resolve(&state), 8.0);
/// assert_eq!(*spacing.resolve(&TraitState::default()), 24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeClassDependent<T> {
    /// The value for regular or unspecified size classes.
    pub regular: T,
    /// The value for compact size classes.
    pub compact: T,
    /// The axis whose classification picks the value.
    pub axis: Axis,
}

impl<T> SizeClassDependent<T> {
    /// Creates a value keyed on the horizontal size class.
    pub const fn horizontal(regular: T, compact: T) -> Self {
        SizeClassDependent {
            regular,
            compact,
            axis: Axis::Horizontal,
        }
    }

    /// Creates a value keyed on the vertical size class.
    pub const fn vertical(regular: T, compact: T) -> Self {
        SizeClassDependent {
            regular,
            compact,
            axis: Axis::Vertical,
        }
    }

    /// The value for the given size class.
    pub fn for_size_class(&self, size_class: SizeClass) -> &T {
        match size_class {
            SizeClass::Regular | SizeClass::Unspecified => &self.regular,
            SizeClass::Compact => &self.compact,
        }
    }

    /// The value for the given trait state, read along this value's axis.
    pub fn resolve(&self, state: &TraitState) -> &T {
        self.for_size_class(self.axis.size_class_in(state))
    }
}
