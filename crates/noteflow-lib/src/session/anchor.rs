// Hash-Anchor Bridge
// Maps the navigation fragment `highlight-<id>` to an annotation id and
// back. The bridge is plain session state: the presentation layer writes the
// fragment it returns and drains the pending scroll target, so no component
// couples through global navigation state.

use crate::models::annotation::Annotation;

/// Fragment prefix for annotation anchors.
pub const FRAGMENT_PREFIX: &str = "highlight-";

/// Fragment referencing the given annotation.
pub fn fragment_for(id: &str) -> String {
    format!("{}{}", FRAGMENT_PREFIX, id)
}

/// Extract the annotation id from a fragment, tolerating a leading `#`.
/// Returns `None` for empty fragments and fragments of any other shape.
pub fn parse_fragment(fragment: &str) -> Option<&str> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .strip_prefix(FRAGMENT_PREFIX)
        .filter(|id| !id.is_empty())
}

/// Anchor state owned by the session.
#[derive(Debug, Default)]
pub struct AnchorBridge {
    /// Id of the annotation the fragment currently references.
    active: Option<String>,
    /// Annotation the viewer should scroll to next; drained by the viewer.
    pending_scroll: Option<Annotation>,
}

impl AnchorBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor to the given annotation and queue it as the scroll target.
    pub fn anchor_to(&mut self, annotation: Annotation) {
        self.active = Some(annotation.id.clone());
        self.pending_scroll = Some(annotation);
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Fragment for the active anchor, if any.
    pub fn fragment(&self) -> Option<String> {
        self.active.as_deref().map(fragment_for)
    }

    /// Hand the queued scroll target to the viewer exactly once.
    pub fn take_pending_scroll(&mut self) -> Option<Annotation> {
        self.pending_scroll.take()
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.pending_scroll = None;
    }

    /// Drop any reference to the given annotation id (it was deleted).
    /// Returns whether anything was cleared.
    pub fn forget(&mut self, id: &str) -> bool {
        let mut cleared = false;
        if self.active.as_deref() == Some(id) {
            self.active = None;
            cleared = true;
        }
        if self
            .pending_scroll
            .as_ref()
            .is_some_and(|annotation| annotation.id == id)
        {
            self.pending_scroll = None;
            cleared = true;
        }
        cleared
    }
}
