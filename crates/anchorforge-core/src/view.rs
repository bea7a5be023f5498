//! Views and layout guides: the participants of the layout object graph.
//!
//! Both are cheap reference-counted handles. Parent and constraint-target
//! links are weak, so installed constraints never keep a hierarchy alive.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::constraint::LayoutConstraint;
use crate::trait_state::TraitState;

/// A participant of the layout system: a view or a layout guide.
#[derive(Clone)]
pub enum LayoutItem {
    View(View),
    Guide(LayoutGuide),
}

impl LayoutItem {
    /// Returns the view if this item is one.
    pub fn as_view(&self) -> Option<&View> {
        match self {
            LayoutItem::View(view) => Some(view),
            LayoutItem::Guide(_) => None,
        }
    }

    /// Returns the guide if this item is one.
    pub fn as_guide(&self) -> Option<&LayoutGuide> {
        match self {
            LayoutItem::View(_) => None,
            LayoutItem::Guide(guide) => Some(guide),
        }
    }
}

impl PartialEq for LayoutItem {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LayoutItem::View(a), LayoutItem::View(b)) => a == b,
            (LayoutItem::Guide(a), LayoutItem::Guide(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for LayoutItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutItem::View(view) => view.fmt(f),
            LayoutItem::Guide(guide) => guide.fmt(f),
        }
    }
}

/// Weak handle to an anchor's owner, stored inside anchors and constraints.
#[derive(Clone)]
pub(crate) enum TargetRef {
    View(Weak<RefCell<ViewInner>>),
    Guide(Weak<RefCell<GuideInner>>),
}

impl TargetRef {
    /// The view that owns this target: the view itself, or a guide's owner.
    pub(crate) fn owning_view(&self) -> Option<View> {
        match self {
            TargetRef::View(weak) => weak.upgrade().map(|inner| View { inner }),
            TargetRef::Guide(weak) => {
                let guide = weak.upgrade()?;
                let owner = guide.borrow().owning_view.clone()?;
                owner.upgrade().map(|inner| View { inner })
            }
        }
    }

    /// The target as a public item, if it is still alive.
    pub(crate) fn item(&self) -> Option<LayoutItem> {
        match self {
            TargetRef::View(weak) => weak.upgrade().map(|inner| LayoutItem::View(View { inner })),
            TargetRef::Guide(weak) => weak
                .upgrade()
                .map(|inner| LayoutItem::Guide(LayoutGuide { inner })),
        }
    }
}

pub(crate) struct ViewInner {
    superview: Option<Weak<RefCell<ViewInner>>>,
    subviews: Vec<View>,
    trait_state: Option<TraitState>,
    translates_frame_into_constraints: bool,
    installed: Vec<LayoutConstraint>,
    margins_guide: Option<LayoutGuide>,
    safe_area_guide: Option<LayoutGuide>,
}

impl Default for ViewInner {
    fn default() -> Self {
        ViewInner {
            superview: None,
            subviews: Vec::new(),
            trait_state: None,
            translates_frame_into_constraints: true,
            installed: Vec::new(),
            margins_guide: None,
            safe_area_guide: None,
        }
    }
}

/// A view: a node of the layout hierarchy.
///
/// Handles are reference-counted; cloning a `View` clones the handle, not
/// the node. Equality is handle identity.
///
/// # Examples
///
/// ```
/// use anchorforge_core::View;
///
/// let window = View::new();
/// let panel = View::new();
/// window.add_subview(&panel);
/// assert_eq!(panel.superview(), Some(window.clone()));
/// ```
#[derive(Clone, Default)]
pub struct View {
    pub(crate) inner: Rc<RefCell<ViewInner>>,
}

impl View {
    /// Creates a detached view.
    pub fn new() -> Self {
        View::default()
    }

    /// Adds `child` as a subview, removing it from any previous superview.
    pub fn add_subview(&self, child: &View) {
        child.remove_from_superview();
        child.inner.borrow_mut().superview = Some(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().subviews.push(child.clone());
    }

    /// Detaches this view from its superview, if any.
    pub fn remove_from_superview(&self) {
        if let Some(superview) = self.superview() {
            superview
                .inner
                .borrow_mut()
                .subviews
                .retain(|sibling| !Rc::ptr_eq(&sibling.inner, &self.inner));
            self.inner.borrow_mut().superview = None;
        }
    }

    /// The superview, if this view is attached to one.
    pub fn superview(&self) -> Option<View> {
        let weak = self.inner.borrow().superview.clone()?;
        weak.upgrade().map(|inner| View { inner })
    }

    /// Handles to the current subviews.
    pub fn subviews(&self) -> Vec<View> {
        self.inner.borrow().subviews.clone()
    }

    /// Overrides the trait state reported by this view and its descendants.
    pub fn set_trait_state(&self, state: TraitState) {
        self.inner.borrow_mut().trait_state = Some(state);
    }

    /// The current trait state: this view's override, the nearest
    /// ancestor's, or the default (unspecified) state when detached.
    pub fn trait_state(&self) -> TraitState {
        let mut current = Some(self.clone());
        while let Some(view) = current {
            if let Some(state) = view.inner.borrow().trait_state.clone() {
                return state;
            }
            current = view.superview();
        }
        TraitState::default()
    }

    /// Whether the view still converts its frame into implicit constraints.
    pub fn translates_frame_into_constraints(&self) -> bool {
        self.inner.borrow().translates_frame_into_constraints
    }

    /// Sets the implicit frame-translation flag.
    pub fn set_translates_frame_into_constraints(&self, flag: bool) {
        self.inner.borrow_mut().translates_frame_into_constraints = flag;
    }

    /// Handles to the constraints currently installed on this view.
    pub fn installed_constraints(&self) -> Vec<LayoutConstraint> {
        self.inner.borrow().installed.clone()
    }

    /// The guide representing this view's layout margins, created on first
    /// access.
    pub fn layout_margins_guide(&self) -> LayoutGuide {
        let mut inner = self.inner.borrow_mut();
        inner
            .margins_guide
            .get_or_insert_with(|| LayoutGuide::owned_by(&self.inner))
            .clone()
    }

    /// The guide representing this view's safe area, created on first
    /// access.
    pub fn safe_area_guide(&self) -> LayoutGuide {
        let mut inner = self.inner.borrow_mut();
        inner
            .safe_area_guide
            .get_or_insert_with(|| LayoutGuide::owned_by(&self.inner))
            .clone()
    }

    /// Attaches a free-standing guide to this view.
    pub fn add_layout_guide(&self, guide: &LayoutGuide) {
        guide.inner.borrow_mut().owning_view = Some(Rc::downgrade(&self.inner));
    }

    pub(crate) fn install(&self, constraint: &LayoutConstraint) {
        let mut inner = self.inner.borrow_mut();
        if !inner.installed.iter().any(|c| c == constraint) {
            inner.installed.push(constraint.clone());
        }
    }

    pub(crate) fn uninstall(&self, constraint: &LayoutConstraint) {
        self.inner.borrow_mut().installed.retain(|c| c != constraint);
    }

    pub(crate) fn target_ref(&self) -> TargetRef {
        TargetRef::View(Rc::downgrade(&self.inner))
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for View {}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "View({:p})", Rc::as_ptr(&self.inner))
    }
}

#[derive(Default)]
pub(crate) struct GuideInner {
    owning_view: Option<Weak<RefCell<ViewInner>>>,
}

/// A layout guide: a constraint target with no visual content of its own.
///
/// Guides participate in constraints exactly like views; their owning view
/// is where activation installs the resulting constraints.
#[derive(Clone, Default)]
pub struct LayoutGuide {
    pub(crate) inner: Rc<RefCell<GuideInner>>,
}

impl LayoutGuide {
    /// Creates a guide not yet attached to any view.
    pub fn new() -> Self {
        LayoutGuide::default()
    }

    /// The view this guide is attached to, if any.
    pub fn owning_view(&self) -> Option<View> {
        let weak = self.inner.borrow().owning_view.clone()?;
        weak.upgrade().map(|inner| View { inner })
    }

    fn owned_by(view: &Rc<RefCell<ViewInner>>) -> Self {
        LayoutGuide {
            inner: Rc::new(RefCell::new(GuideInner {
                owning_view: Some(Rc::downgrade(view)),
            })),
        }
    }

    pub(crate) fn target_ref(&self) -> TargetRef {
        TargetRef::Guide(Rc::downgrade(&self.inner))
    }
}

impl PartialEq for LayoutGuide {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for LayoutGuide {}

impl fmt::Debug for LayoutGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayoutGuide({:p})", Rc::as_ptr(&self.inner))
    }
}
