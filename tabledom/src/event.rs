/// What an event is dispatched on: the page viewport or one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Window,
    Element(String),
}

impl Target {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }
}

/// Host notifications. Both carry the state after the change, so handlers
/// never need to diff against a cached value.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Scroll position changed.
    Scroll { target: Target, left: f64, top: f64 },
    /// Viewport resized, or an observed element changed size.
    Resize {
        target: Target,
        width: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
}

impl Event {
    pub fn target(&self) -> &Target {
        match self {
            Event::Scroll { target, .. } | Event::Resize { target, .. } => target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Scroll { .. } => EventKind::Scroll,
            Event::Resize { .. } => EventKind::Resize,
        }
    }
}
