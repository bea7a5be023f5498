//! Comparison modes for constraint construction.

use std::fmt;

/// How a constraint relates its two sides.
///
/// Every constraint description carries a mode; translation picks the
/// matching construction primitive on the anchor. `Equal` is the default
/// wherever a description supplies defaults.
///
/// # Example
///
/// ```
/// use anchorforge_core::ComparisonMode;
///
/// assert_eq!(ComparisonMode::default(), ComparisonMode::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComparisonMode {
    /// Both sides are equal.
    #[default]
    Equal,
    /// The first side is greater than or equal to the second.
    AtLeast,
    /// The first side is less than or equal to the second.
    AtMost,
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ComparisonMode::Equal => "==",
            ComparisonMode::AtLeast => ">=",
            ComparisonMode::AtMost => "<=",
        };
        f.write_str(symbol)
    }
}
