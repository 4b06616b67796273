//! Headless page: an element tree plus the viewport it is shown in.

use std::collections::VecDeque;

use crate::element::{self, Element};
use crate::event::{Event, EventKind, Target};
use crate::layout::{self, Rect};
use crate::listener::{ListenerId, Listeners};
use crate::scroll::ScrollOffset;
use crate::types::Style;

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll: ScrollOffset,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll: ScrollOffset::default(),
        }
    }
}

/// Element tree, viewport, listener registry and pending-event queue.
///
/// Every mutation that a browser would report (scrolling, resizing) queues an
/// [`Event`]. The owner drains the queue with [`Document::take_events`] and
/// routes each event to whoever subscribed through [`Document::listeners`].
#[derive(Debug)]
pub struct Document {
    root: Element,
    viewport: Viewport,
    listeners: Listeners,
    queue: VecDeque<Event>,
}

impl Document {
    pub fn new(root: Element, viewport: Viewport) -> Self {
        Self {
            root,
            viewport,
            listeners: Listeners::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        element::find_by_class(&self.root, class)
    }

    // ------------------------------------------------------------------
    // Tree mutation
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent_id`.
    /// Returns false when the parent does not exist.
    pub fn append_child(&mut self, parent_id: &str, mut child: Element) -> bool {
        let Some(parent) = self.get_mut(parent_id) else {
            return false;
        };
        layout::reflow(&mut child);
        log::trace!("[dom] append {} to {}", child.id, parent_id);
        match parent.content.children_mut() {
            Some(children) => children.push(child),
            None => parent.content = element::Content::Children(vec![child]),
        }
        true
    }

    /// Detach an element (and its subtree) from the document.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let removed = element::remove_element(&mut self.root, id);
        if removed.is_some() {
            log::trace!("[dom] removed {}", id);
        }
        removed
    }

    // ------------------------------------------------------------------
    // Styles
    // ------------------------------------------------------------------

    pub fn style(&self, id: &str) -> Option<&Style> {
        self.get(id).map(|e| &e.style)
    }

    /// Merge declarations into an element's inline style and re-derive any
    /// pixel-pinned boxes in its subtree.
    pub fn apply_style(&mut self, id: &str, style: &Style) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        element.style.merge(style);
        layout::reflow(element);
        true
    }

    /// Remove a single declaration. Returns the old value.
    pub fn remove_style(&mut self, id: &str, name: &str) -> Option<String> {
        let element = self.get_mut(id)?;
        let old = element.style.remove(name);
        layout::reflow(element);
        old
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Border box of an element in viewport coordinates: its document
    /// position minus the scroll offsets of every ancestor and the viewport.
    pub fn bounding_rect(&self, id: &str) -> Option<Rect> {
        let path = element::find_path(&self.root, id)?;
        let (target, ancestors) = path.split_last()?;
        let m = target.metrics;
        let mut rect = Rect::new(m.offset_left, m.offset_top, m.offset_width, m.offset_height);
        for ancestor in ancestors {
            rect = rect.scrolled_by(ancestor.scroll.left, ancestor.scroll.top);
        }
        Some(rect.scrolled_by(self.viewport.scroll.left, self.viewport.scroll.top))
    }

    pub fn scroll_position(&self, target: &Target) -> Option<ScrollOffset> {
        match target {
            Target::Window => Some(self.viewport.scroll),
            Target::Element(id) => self.get(id).map(|e| e.scroll),
        }
    }

    /// Scroll the viewport or an element, clamped to its scrollable range.
    /// Queues a scroll event and returns true if the offset changed.
    pub fn set_scroll(&mut self, target: &Target, left: f64, top: f64) -> bool {
        let requested = ScrollOffset::new(left, top);
        let (old, new) = match target {
            Target::Window => {
                let max_left = self.root.metrics.scroll_width - self.viewport.width;
                let max_top = self.root.metrics.scroll_height - self.viewport.height;
                let old = self.viewport.scroll;
                self.viewport.scroll = requested.clamped(max_left, max_top);
                (old, self.viewport.scroll)
            }
            Target::Element(id) => {
                let Some(element) = self.get_mut(id) else {
                    return false;
                };
                let old = element.scroll;
                element.scroll = requested.clamped(
                    element.metrics.max_scroll_left(),
                    element.metrics.max_scroll_top(),
                );
                (old, element.scroll)
            }
        };

        if old == new {
            return false;
        }
        self.queue.push_back(Event::Scroll {
            target: target.clone(),
            left: new.left,
            top: new.top,
        });
        true
    }

    /// Resize the viewport and queue a window resize event.
    pub fn resize_viewport(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
        let max_left = self.root.metrics.scroll_width - width;
        let max_top = self.root.metrics.scroll_height - height;
        self.viewport.scroll = self.viewport.scroll.clamped(max_left, max_top);
        self.queue.push_back(Event::Resize {
            target: Target::Window,
            width,
            height,
        });
    }

    /// Give an element a new outer size, keeping its scrollbar gutters, and
    /// queue a resize event for anyone observing it.
    pub fn resize_element(&mut self, id: &str, width: f64, height: f64) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        let m = &mut element.metrics;
        let gutter_width = m.gutter_width();
        let gutter_height = m.gutter_height();
        m.offset_width = width;
        m.offset_height = height;
        m.client_width = (width - gutter_width).max(0.0);
        m.client_height = (height - gutter_height).max(0.0);
        let max_left = m.max_scroll_left();
        let max_top = m.max_scroll_top();
        element.scroll = element.scroll.clamped(max_left, max_top);

        self.queue.push_back(Event::Resize {
            target: Target::element(id),
            width,
            height,
        });
        true
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn add_listener(&mut self, target: Target, kind: EventKind) -> ListenerId {
        self.listeners.add(target, kind)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Drain all pending events in the order they were queued.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }
}
