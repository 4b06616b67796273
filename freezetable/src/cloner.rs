//! Detached copies of the live table for the overlays to show.
//!
//! Copies are taken once at attach time. Later edits to the live table are
//! not reflected in the overlays.

use tabledom::{Element, Style, px};

use crate::overlay::OverlayKind;

pub(crate) struct Cloner {
    base: Element,
    background: String,
}

impl Cloner {
    pub fn new(table: &Element, background: &str) -> Self {
        Self {
            base: table.clone_detached(),
            background: background.to_string(),
        }
    }

    /// Header rows only.
    pub fn head(&self) -> Element {
        let mut table = self.base.clone_detached();
        table.remove_children_by_tag("tbody");
        table.remove_children_by_tag("tfoot");
        self.backed(table)
    }

    /// The whole table; the overlay's width clips it to the frozen columns.
    pub fn column(&self) -> Element {
        self.backed(self.base.clone_detached())
    }

    /// The corner is a copy of the head overlay's copy, clipped like the
    /// column overlay.
    pub fn column_head(head_clone: &Element) -> Element {
        head_clone.clone_detached()
    }

    fn backed(&self, mut table: Element) -> Element {
        table.style.set("background-color", self.background.clone());
        table
    }
}

/// Purpose-tagged container holding one overlay's content.
pub(crate) fn wrap(kind: OverlayKind, id: &str, content: Element) -> Element {
    Element::div()
        .id(id)
        .class(kind.class())
        .style(Style::new().with("visibility", "hidden"))
        .child(content)
}

/// Floating scrollbar: an empty strip as wide as the table inside a
/// horizontally scrolling box.
pub(crate) fn scroll_bar(id: &str, table_width: f64) -> Element {
    let spacer = Element::div().style(
        Style::new()
            .with("width", px(table_width))
            .with("height", "1px"),
    );
    wrap(OverlayKind::ScrollBar, id, spacer)
}
