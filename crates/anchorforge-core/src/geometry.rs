//! Plain geometric value types used by constraint descriptions.

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The zero size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a size from a width and a height.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Creates a size with equal width and height.
    #[inline]
    pub const fn square(side: f64) -> Self {
        Size {
            width: side,
            height: side,
        }
    }
}

/// Per-edge insets for fill-style constraints.
///
/// Positive values always move the constrained target inward; the sign
/// flip for trailing and bottom edges happens during translation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl Insets {
    /// Zero insets on every edge.
    pub const ZERO: Insets = Insets {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    /// Creates insets from the four edge values.
    #[inline]
    pub const fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Insets {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Creates the same inset on every edge.
    #[inline]
    pub const fn uniform(inset: f64) -> Self {
        Insets {
            top: inset,
            leading: inset,
            bottom: inset,
            trailing: inset,
        }
    }
}
