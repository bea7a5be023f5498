//! Small view hierarchies with a known environment.

use anchorforge_core::{LayoutGuide, TraitState, View};

/// A root view reporting the given trait state.
pub fn window(state: TraitState) -> View {
    let root = View::new();
    root.set_trait_state(state);
    root
}

/// A fresh subview attached to `parent`.
pub fn attached_child(parent: &View) -> View {
    let child = View::new();
    parent.add_subview(&child);
    child
}

/// A window with the given trait state plus one attached child.
pub fn attached_pair(state: TraitState) -> (View, View) {
    let root = window(state);
    let child = attached_child(&root);
    (root, child)
}

/// A fresh guide attached to `view`.
pub fn guide_in(view: &View) -> LayoutGuide {
    let guide = LayoutGuide::new();
    view.add_layout_guide(&guide);
    guide
}
