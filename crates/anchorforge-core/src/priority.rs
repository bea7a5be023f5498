//! Constraint priorities.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The priority of a layout constraint, between 0 and 1000.
///
/// Required constraints must be satisfied; lower priorities let the layout
/// system break a constraint in favour of a higher-priority one.
///
/// # Examples
///
/// ```
/// use anchorforge_core::Priority;
///
/// let p = Priority::new(750.0);
/// assert_eq!(p, Priority::DEFAULT_HIGH);
/// assert!(p < Priority::REQUIRED);
///
/// // Integer literals convert directly.
/// let q: Priority = 250.into();
/// assert_eq!(q, Priority::DEFAULT_LOW);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Priority(f32);

impl Priority {
    /// A constraint that must be satisfied.
    pub const REQUIRED: Priority = Priority(1000.0);

    /// The standard high priority for optional constraints.
    pub const DEFAULT_HIGH: Priority = Priority(750.0);

    /// The standard low priority for optional constraints.
    pub const DEFAULT_LOW: Priority = Priority(250.0);

    /// Creates a priority from a raw value.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is outside `0.0..=1000.0`; an out-of-range priority is
    /// a programmer error at the layout boundary.
    pub fn new(raw: f32) -> Self {
        assert!(
            (0.0..=1000.0).contains(&raw),
            "layout priority {raw} outside 0..=1000"
        );
        Priority(raw)
    }

    /// Returns the raw priority value.
    #[inline]
    pub const fn raw(self) -> f32 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::REQUIRED
    }
}

impl From<f32> for Priority {
    fn from(raw: f32) -> Self {
        Priority::new(raw)
    }
}

impl From<i32> for Priority {
    fn from(raw: i32) -> Self {
        Priority::new(raw as f32)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error parsing a [`Priority`] from a string.
#[derive(Debug, Error, PartialEq)]
pub enum PriorityParseError {
    /// The string is neither a named level nor a number.
    #[error("unknown priority level `{0}`")]
    Unknown(String),

    /// The numeric value is outside the valid range.
    #[error("priority {0} outside 0..=1000")]
    OutOfRange(f32),
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    /// Parses `"required"`, `"high"`, `"low"` (case-insensitive) or a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchorforge_core::Priority;
    ///
    /// assert_eq!("required".parse::<Priority>().unwrap(), Priority::REQUIRED);
    /// assert_eq!("500".parse::<Priority>().unwrap(), Priority::new(500.0));
    /// assert!("2000".parse::<Priority>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Priority::REQUIRED),
            "high" => Ok(Priority::DEFAULT_HIGH),
            "low" => Ok(Priority::DEFAULT_LOW),
            other => {
                let raw: f32 = other
                    .parse()
                    .map_err(|_| PriorityParseError::Unknown(s.to_string()))?;
                if (0.0..=1000.0).contains(&raw) {
                    Ok(Priority(raw))
                } else {
                    Err(PriorityParseError::OutOfRange(raw))
                }
            }
        }
    }
}
