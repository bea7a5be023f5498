//! The view-or-guide capability shared by every constraint participant.

use crate::anchor::{Anchor, Attribute, Dimension, XAxis, YAxis};
use crate::view::{LayoutGuide, View};

/// Anything that can participate in constraints.
///
/// The trait exposes the directional anchors plus the two hierarchy lookups
/// translation and activation need: the owning view (where activation
/// installs constraints and clears the frame-translation flag) and the
/// superview (the implicit reference for superview-relative constraints).
pub trait LayoutTarget {
    /// The view that owns this target: a view is its own owner, a guide's
    /// owner is the view it is attached to.
    fn owning_view(&self) -> Option<View>;

    /// The superview of this target's owning view.
    fn superview(&self) -> Option<View>;

    fn leading_anchor(&self) -> Anchor<XAxis>;
    fn trailing_anchor(&self) -> Anchor<XAxis>;
    fn top_anchor(&self) -> Anchor<YAxis>;
    fn bottom_anchor(&self) -> Anchor<YAxis>;
    fn center_x_anchor(&self) -> Anchor<XAxis>;
    fn center_y_anchor(&self) -> Anchor<YAxis>;
    fn width_anchor(&self) -> Anchor<Dimension>;
    fn height_anchor(&self) -> Anchor<Dimension>;
}

impl LayoutTarget for View {
    fn owning_view(&self) -> Option<View> {
        Some(self.clone())
    }

    fn superview(&self) -> Option<View> {
        View::superview(self)
    }

    fn leading_anchor(&self) -> Anchor<XAxis> {
        Anchor::new(self.target_ref(), Attribute::Leading)
    }

    fn trailing_anchor(&self) -> Anchor<XAxis> {
        Anchor::new(self.target_ref(), Attribute::Trailing)
    }

    fn top_anchor(&self) -> Anchor<YAxis> {
        Anchor::new(self.target_ref(), Attribute::Top)
    }

    fn bottom_anchor(&self) -> Anchor<YAxis> {
        Anchor::new(self.target_ref(), Attribute::Bottom)
    }

    fn center_x_anchor(&self) -> Anchor<XAxis> {
        Anchor::new(self.target_ref(), Attribute::CenterX)
    }

    fn center_y_anchor(&self) -> Anchor<YAxis> {
        Anchor::new(self.target_ref(), Attribute::CenterY)
    }

    fn width_anchor(&self) -> Anchor<Dimension> {
        Anchor::new(self.target_ref(), Attribute::Width)
    }

    fn height_anchor(&self) -> Anchor<Dimension> {
        Anchor::new(self.target_ref(), Attribute::Height)
    }
}

impl LayoutTarget for LayoutGuide {
    fn owning_view(&self) -> Option<View> {
        LayoutGuide::owning_view(self)
    }

    fn superview(&self) -> Option<View> {
        LayoutGuide::owning_view(self).and_then(|view| view.superview())
    }

    fn leading_anchor(&self) -> Anchor<XAxis> {
        Anchor::new(self.target_ref(), Attribute::Leading)
    }

    fn trailing_anchor(&self) -> Anchor<XAxis> {
        Anchor::new(self.target_ref(), Attribute::Trailing)
    }

    fn top_anchor(&self) -> Anchor<YAxis> {
        Anchor::new(self.target_ref(), Attribute::Top)
    }

    fn bottom_anchor(&self) -> Anchor<YAxis> {
        Anchor::new(self.target_ref(), Attribute::Bottom)
    }

    fn center_x_anchor(&self) -> Anchor<XAxis> {
        Anchor::new(self.target_ref(), Attribute::CenterX)
    }

    fn center_y_anchor(&self) -> Anchor<YAxis> {
        Anchor::new(self.target_ref(), Attribute::CenterY)
    }

    fn width_anchor(&self) -> Anchor<Dimension> {
        Anchor::new(self.target_ref(), Attribute::Width)
    }

    fn height_anchor(&self) -> Anchor<Dimension> {
        Anchor::new(self.target_ref(), Attribute::Height)
    }
}
