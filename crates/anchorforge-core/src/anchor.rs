//! Typed directional anchors.
//!
//! An anchor is a handle to one geometric property of a view or guide. The
//! axis is part of the type, so a leading edge can never be constrained to a
//! top edge; dimension anchors additionally support multipliers and
//! constant-only constraints.

use std::fmt;
use std::marker::PhantomData;

use crate::constraint::LayoutConstraint;
use crate::mode::ComparisonMode;
use crate::view::{LayoutItem, TargetRef};

/// Geometric property addressed by an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Leading,
    Trailing,
    Top,
    Bottom,
    CenterX,
    CenterY,
    Width,
    Height,
}

mod sealed {
    pub trait Sealed {}
}

/// Marker for the axis family of an anchor.
pub trait AnchorKind: sealed::Sealed {}

/// Horizontal positions: leading, trailing, center-x.
pub struct XAxis;

/// Vertical positions: top, bottom, center-y.
pub struct YAxis;

/// Sizes: width, height.
pub struct Dimension;

impl sealed::Sealed for XAxis {}
impl sealed::Sealed for YAxis {}
impl sealed::Sealed for Dimension {}
impl AnchorKind for XAxis {}
impl AnchorKind for YAxis {}
impl AnchorKind for Dimension {}

/// A handle to one geometric property of a layout target.
pub struct Anchor<K: AnchorKind> {
    target: TargetRef,
    attribute: Attribute,
    _kind: PhantomData<K>,
}

impl<K: AnchorKind> Clone for Anchor<K> {
    fn clone(&self) -> Self {
        Anchor {
            target: self.target.clone(),
            attribute: self.attribute,
            _kind: PhantomData,
        }
    }
}

impl<K: AnchorKind> fmt::Debug for Anchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Anchor({:?})", self.attribute)
    }
}

impl<K: AnchorKind> Anchor<K> {
    pub(crate) fn new(target: TargetRef, attribute: Attribute) -> Self {
        Anchor {
            target,
            attribute,
            _kind: PhantomData,
        }
    }

    /// The property this anchor addresses.
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// The target this anchor belongs to, if it is still alive.
    pub fn item(&self) -> Option<LayoutItem> {
        self.target.item()
    }

    /// `self == other + constant`.
    pub fn constraint_equal_to(&self, other: &Anchor<K>, constant: f64) -> LayoutConstraint {
        self.build(other, ComparisonMode::Equal, 1.0, constant)
    }

    /// `self >= other + constant`.
    pub fn constraint_at_least(&self, other: &Anchor<K>, constant: f64) -> LayoutConstraint {
        self.build(other, ComparisonMode::AtLeast, 1.0, constant)
    }

    /// `self <= other + constant`.
    pub fn constraint_at_most(&self, other: &Anchor<K>, constant: f64) -> LayoutConstraint {
        self.build(other, ComparisonMode::AtMost, 1.0, constant)
    }

    /// Builds a constraint to another anchor of the same kind, picking the
    /// construction primitive that matches `mode`.
    pub fn constraint_to(
        &self,
        other: &Anchor<K>,
        mode: ComparisonMode,
        constant: f64,
    ) -> LayoutConstraint {
        match mode {
            ComparisonMode::Equal => self.constraint_equal_to(other, constant),
            ComparisonMode::AtLeast => self.constraint_at_least(other, constant),
            ComparisonMode::AtMost => self.constraint_at_most(other, constant),
        }
    }

    fn build(
        &self,
        other: &Anchor<K>,
        mode: ComparisonMode,
        multiplier: f64,
        constant: f64,
    ) -> LayoutConstraint {
        LayoutConstraint::new(
            self.target.clone(),
            self.attribute,
            Some((other.target.clone(), other.attribute)),
            mode,
            multiplier,
            constant,
        )
    }
}

impl Anchor<Dimension> {
    /// `self == other * multiplier + constant`.
    pub fn constraint_equal_to_scaled(
        &self,
        other: &Anchor<Dimension>,
        multiplier: f64,
        constant: f64,
    ) -> LayoutConstraint {
        self.build(other, ComparisonMode::Equal, multiplier, constant)
    }

    /// `self >= other * multiplier + constant`.
    pub fn constraint_at_least_scaled(
        &self,
        other: &Anchor<Dimension>,
        multiplier: f64,
        constant: f64,
    ) -> LayoutConstraint {
        self.build(other, ComparisonMode::AtLeast, multiplier, constant)
    }

    /// `self <= other * multiplier + constant`.
    pub fn constraint_at_most_scaled(
        &self,
        other: &Anchor<Dimension>,
        multiplier: f64,
        constant: f64,
    ) -> LayoutConstraint {
        self.build(other, ComparisonMode::AtMost, multiplier, constant)
    }

    /// Builds a scaled constraint to another dimension anchor, picking the
    /// construction primitive that matches `mode`.
    pub fn constraint_to_scaled(
        &self,
        other: &Anchor<Dimension>,
        mode: ComparisonMode,
        multiplier: f64,
        constant: f64,
    ) -> LayoutConstraint {
        match mode {
            ComparisonMode::Equal => self.constraint_equal_to_scaled(other, multiplier, constant),
            ComparisonMode::AtLeast => self.constraint_at_least_scaled(other, multiplier, constant),
            ComparisonMode::AtMost => self.constraint_at_most_scaled(other, multiplier, constant),
        }
    }

    /// `self == constant`.
    pub fn constraint_equal_constant(&self, constant: f64) -> LayoutConstraint {
        self.build_constant(ComparisonMode::Equal, constant)
    }

    /// `self >= constant`.
    pub fn constraint_at_least_constant(&self, constant: f64) -> LayoutConstraint {
        self.build_constant(ComparisonMode::AtLeast, constant)
    }

    /// `self <= constant`.
    pub fn constraint_at_most_constant(&self, constant: f64) -> LayoutConstraint {
        self.build_constant(ComparisonMode::AtMost, constant)
    }

    /// Builds a constant-only constraint, picking the construction
    /// primitive that matches `mode`.
    pub fn constraint_constant(&self, mode: ComparisonMode, constant: f64) -> LayoutConstraint {
        match mode {
            ComparisonMode::Equal => self.constraint_equal_constant(constant),
            ComparisonMode::AtLeast => self.constraint_at_least_constant(constant),
            ComparisonMode::AtMost => self.constraint_at_most_constant(constant),
        }
    }

    fn build_constant(&self, mode: ComparisonMode, constant: f64) -> LayoutConstraint {
        LayoutConstraint::new(
            self.target.clone(),
            self.attribute,
            None,
            mode,
            1.0,
            constant,
        )
    }
}
