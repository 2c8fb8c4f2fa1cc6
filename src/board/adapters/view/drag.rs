//! Drag-and-drop capabilities.

use crate::board::services::TaskStore;

/// Media type used for task payloads.
pub const TEXT_PLAIN: &str = "text/plain";

/// Operation a drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// The item moves to the drop target.
    Move,
}

/// Data carried from a drag source to a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    media_type: String,
    data: String,
    effect_allowed: DropEffect,
}

impl DragPayload {
    /// Creates a payload with an explicit media type and effect.
    #[must_use]
    pub fn new(
        media_type: impl Into<String>,
        data: impl Into<String>,
        effect_allowed: DropEffect,
    ) -> Self {
        Self {
            media_type: media_type.into(),
            data: data.into(),
            effect_allowed,
        }
    }

    /// Creates a `text/plain` payload that allows moving.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self::new(TEXT_PLAIN, data, DropEffect::Move)
    }

    /// Returns the media type.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the carried data.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns the allowed effect.
    #[must_use]
    pub const fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    /// Returns `true` for `text/plain` payloads.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.media_type == TEXT_PLAIN
    }
}

/// A view that can be picked up and dragged.
pub trait Draggable {
    /// Starts a drag and returns the payload to carry.
    fn drag_start(&self) -> DragPayload;
}

/// A view that accepts dropped payloads.
pub trait DragTarget {
    /// Handles a payload hovering over the target.
    ///
    /// Returns `true` when the target accepts the payload.
    fn drag_over(&mut self, payload: &DragPayload) -> bool;

    /// Handles a payload released over the target.
    fn drop_payload(&mut self, payload: &DragPayload, store: &mut TaskStore);

    /// Handles a payload leaving the target without being dropped.
    fn drag_leave(&mut self);
}
