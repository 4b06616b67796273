use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::scroll::ScrollOffset;
use crate::types::{BoxMetrics, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Data key under which a detached clone remembers the id it was copied from.
pub const SOURCE_ID_KEY: &str = "source-id";

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    /// Lowercase tag name (`div`, `table`, `thead`, ...).
    pub tag: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Box model, as measured by the host
    pub metrics: BoxMetrics,
    pub scroll: ScrollOffset,

    // Inline style
    pub style: Style,

    // Custom data storage (data-* attributes)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            classes: Vec::new(),
            content: Content::None,
            metrics: BoxMetrics::default(),
            scroll: ScrollOffset::default(),
            style: Style::default(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn th(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::new("th")
        }
    }

    pub fn td(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::new("td")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    // Box model
    /// Place the border box at document coordinates, before any scrolling.
    pub fn offset(mut self, left: f64, top: f64) -> Self {
        self.metrics.offset_left = left;
        self.metrics.offset_top = top;
        self
    }

    /// Set both the outer and the client size; the element has no scrollbars.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.metrics.offset_width = width;
        self.metrics.offset_height = height;
        self.metrics.client_width = width;
        self.metrics.client_height = height;
        self.metrics.scroll_width = self.metrics.scroll_width.max(width);
        self.metrics.scroll_height = self.metrics.scroll_height.max(height);
        self
    }

    /// Set the client size separately from the outer size. The difference is
    /// the scrollbar gutter (plus borders).
    pub fn client_size(mut self, width: f64, height: f64) -> Self {
        self.metrics.client_width = width;
        self.metrics.client_height = height;
        self
    }

    /// Set the size of the scrollable content.
    pub fn scroll_size(mut self, width: f64, height: f64) -> Self {
        self.metrics.scroll_width = width;
        self.metrics.scroll_height = height;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Child elements with the given tag, in order.
    pub fn children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.content.children().iter().filter(move |c| c.is(tag))
    }

    pub fn first_child(&self) -> Option<&Element> {
        self.content.children().first()
    }

    /// Drop every direct child with the given tag.
    pub fn remove_children_by_tag(&mut self, tag: &str) {
        if let Some(children) = self.content.children_mut() {
            children.retain(|c| !c.is(tag));
        }
    }

    /// Deep copy for detached use. Every node in the copy gets a fresh id so
    /// it can live in the same tree as its source; the id it was copied from
    /// is kept under [`SOURCE_ID_KEY`]. Scroll offsets are not carried over.
    pub fn clone_detached(&self) -> Element {
        let mut copy = self.clone();
        detach(&mut copy);
        copy
    }

    pub fn source_id(&self) -> Option<&str> {
        self.data.get(SOURCE_ID_KEY).map(String::as_str)
    }
}

fn detach(element: &mut Element) {
    let fresh = generate_id(&format!("{}-clone", element.tag));
    let source = std::mem::replace(&mut element.id, fresh);
    element
        .data
        .entry(SOURCE_ID_KEY.to_string())
        .or_insert(source);
    element.scroll = ScrollOffset::default();

    if let Some(children) = element.content.children_mut() {
        for child in children {
            detach(child);
        }
    }
}
