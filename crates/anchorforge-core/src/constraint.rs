//! Concrete layout constraints.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::anchor::Attribute;
use crate::mode::ComparisonMode;
use crate::priority::Priority;
use crate::view::{LayoutItem, TargetRef};

struct ConstraintInner {
    first_target: TargetRef,
    first_attribute: Attribute,
    second: Option<(TargetRef, Attribute)>,
    relation: ComparisonMode,
    multiplier: f64,
    constant: f64,
    priority: Priority,
    active: bool,
}

/// One concrete linear relationship between two anchors, or between an
/// anchor and a constant.
///
/// A constraint does nothing until activated. Activation installs it on the
/// primary target's owning view and clears that view's implicit
/// frame-translation flag; deactivation uninstalls it. Constraints hold weak
/// target links, so they never keep a hierarchy alive, and they stay
/// installed until explicitly deactivated or their view is freed.
///
/// Handles are reference-counted; equality is handle identity.
#[derive(Clone)]
pub struct LayoutConstraint {
    inner: Rc<RefCell<ConstraintInner>>,
}

impl LayoutConstraint {
    /// Builds an inactive constraint.
    ///
    /// Non-finite multipliers or constants are programmer errors at the
    /// layout boundary and abort immediately.
    pub(crate) fn new(
        first_target: TargetRef,
        first_attribute: Attribute,
        second: Option<(TargetRef, Attribute)>,
        relation: ComparisonMode,
        multiplier: f64,
        constant: f64,
    ) -> Self {
        assert!(
            multiplier.is_finite(),
            "constraint multiplier must be finite"
        );
        assert!(constant.is_finite(), "constraint constant must be finite");
        LayoutConstraint {
            inner: Rc::new(RefCell::new(ConstraintInner {
                first_target,
                first_attribute,
                second,
                relation,
                multiplier,
                constant,
                priority: Priority::REQUIRED,
                active: false,
            })),
        }
    }

    /// The primary target, if it is still alive.
    pub fn first_item(&self) -> Option<LayoutItem> {
        self.inner.borrow().first_target.item()
    }

    /// The primary target's constrained attribute.
    pub fn first_attribute(&self) -> Attribute {
        self.inner.borrow().first_attribute
    }

    /// The reference target, if there is one and it is still alive.
    pub fn second_item(&self) -> Option<LayoutItem> {
        let inner = self.inner.borrow();
        inner.second.as_ref().and_then(|(target, _)| target.item())
    }

    /// The reference target's attribute, if the constraint has one.
    pub fn second_attribute(&self) -> Option<Attribute> {
        self.inner.borrow().second.as_ref().map(|(_, attr)| *attr)
    }

    /// The comparison relating the two sides.
    pub fn relation(&self) -> ComparisonMode {
        self.inner.borrow().relation
    }

    /// The multiplier applied to the reference side.
    pub fn multiplier(&self) -> f64 {
        self.inner.borrow().multiplier
    }

    /// The additive constant.
    pub fn constant(&self) -> f64 {
        self.inner.borrow().constant
    }

    /// The constraint's priority.
    pub fn priority(&self) -> Priority {
        self.inner.borrow().priority
    }

    /// Sets the constraint's priority.
    pub fn set_priority(&self, priority: Priority) {
        self.inner.borrow_mut().priority = priority;
    }

    /// Whether the constraint is currently active.
    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    /// Activates the constraint.
    ///
    /// Installs it on the primary target's owning view and clears that
    /// view's implicit frame-translation flag. When no owning view resolves
    /// (a guide not yet attached anywhere), both steps are no-ops and the
    /// constraint is merely marked active.
    pub fn activate(&self) {
        let owner = self.inner.borrow().first_target.owning_view();
        if let Some(view) = owner {
            view.set_translates_frame_into_constraints(false);
            view.install(self);
        }
        self.inner.borrow_mut().active = true;
    }

    /// Deactivates the constraint, uninstalling it from its owning view.
    pub fn deactivate(&self) {
        let owner = self.inner.borrow().first_target.owning_view();
        if let Some(view) = owner {
            view.uninstall(self);
        }
        self.inner.borrow_mut().active = false;
    }
}

impl PartialEq for LayoutConstraint {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for LayoutConstraint {}

impl fmt::Debug for LayoutConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        write!(f, "{:?} {}", inner.first_attribute, inner.relation)?;
        if let Some((_, attribute)) = &inner.second {
            write!(f, " {attribute:?}")?;
            if inner.multiplier != 1.0 {
                write!(f, " * {}", inner.multiplier)?;
            }
            if inner.constant != 0.0 {
                write!(f, " {} {}", if inner.constant < 0.0 { "-" } else { "+" }, inner.constant.abs())?;
            }
        } else {
            write!(f, " {}", inner.constant)?;
        }
        write!(f, " @{}", inner.priority)?;
        if inner.active {
            write!(f, " (active)")?;
        }
        Ok(())
    }
}
