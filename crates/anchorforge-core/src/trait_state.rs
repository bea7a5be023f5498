//! Environment trait state: size classes and dynamic text scaling.

use std::collections::HashMap;

use crate::size_class::{Axis, SizeClass};

/// A named text style whose metrics may scale with user preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextStyle {
    LargeTitle,
    Title,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption,
}

/// Linear scaling factors for text styles.
///
/// The embedding environment decides the factors; constraint rules only
/// multiply by them. A style without an explicit override uses the base
/// factor, which defaults to 1.0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextScaling {
    /// Factor applied to every style without an override.
    pub base: f64,
    /// Per-style overrides.
    pub overrides: HashMap<TextStyle, f64>,
}

impl TextScaling {
    /// The same factor for every style.
    pub fn uniform(factor: f64) -> Self {
        TextScaling {
            base: factor,
            overrides: HashMap::new(),
        }
    }

    /// Sets an override for one style.
    pub fn with_style(mut self, style: TextStyle, factor: f64) -> Self {
        self.overrides.insert(style, factor);
        self
    }

    /// The scaling factor for the given style.
    pub fn factor(&self, style: TextStyle) -> f64 {
        self.overrides.get(&style).copied().unwrap_or(self.base)
    }
}

impl Default for TextScaling {
    fn default() -> Self {
        TextScaling::uniform(1.0)
    }
}

/// The current classification of the device/window context.
///
/// Views resolve their trait state from their own override or the nearest
/// ancestor's; a view attached nowhere resolves the default state, whose
/// size classes are [`SizeClass::Unspecified`].
///
/// # Examples
///
/// ```
/// use anchorforge_core::{Axis, SizeClass, TraitState};
///
/// let state = TraitState::new(SizeClass::Regular, SizeClass::Compact);
/// assert_eq!(state.size_class(Axis::Vertical), SizeClass::Compact);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitState {
    /// Horizontal size class.
    pub horizontal: SizeClass,
    /// Vertical size class.
    pub vertical: SizeClass,
    /// Text scaling preferences.
    pub text_scaling: TextScaling,
}

impl TraitState {
    /// Creates a trait state with the given size classes and default scaling.
    pub fn new(horizontal: SizeClass, vertical: SizeClass) -> Self {
        TraitState {
            horizontal,
            vertical,
            text_scaling: TextScaling::default(),
        }
    }

    /// Replaces the text scaling preferences.
    pub fn with_text_scaling(mut self, text_scaling: TextScaling) -> Self {
        self.text_scaling = text_scaling;
        self
    }

    /// The classification of the given axis.
    pub fn size_class(&self, axis: Axis) -> SizeClass {
        axis.size_class_in(self)
    }

    /// The linear scaling factor for the given text style.
    pub fn text_scale(&self, style: TextStyle) -> f64 {
        self.text_scaling.factor(style)
    }
}
