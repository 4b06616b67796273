#![allow(dead_code)]

use freezetable::{FreezeTable, OverlayKind};
use tabledom::{Document, Element, Style, Viewport};

pub const COLUMN_WIDTHS: [f64; 5] = [120.0, 80.0, 200.0, 150.0, 350.0];
pub const HEAD_HEIGHT: f64 = 40.0;
pub const ROW_HEIGHT: f64 = 30.0;
pub const ROWS: usize = 10;
pub const TABLE_WIDTH: f64 = 900.0;
pub const TABLE_HEIGHT: f64 = HEAD_HEIGHT + ROW_HEIGHT * ROWS as f64;

/// A 5-column table at document position (`left`, `top`).
pub fn table(left: f64, top: f64) -> Element {
    named_table("", left, top)
}

/// Same as [`table`], with every id prefixed so several fit on one page.
pub fn named_table(prefix: &str, left: f64, top: f64) -> Element {
    let head_row = Element::tr().children(
        COLUMN_WIDTHS
            .iter()
            .enumerate()
            .map(|(i, w)| Element::th(format!("Col {i}")).size(*w, HEAD_HEIGHT))
            .collect(),
    );
    let rows = (0..ROWS)
        .map(|r| {
            Element::tr().size(TABLE_WIDTH, ROW_HEIGHT).children(
                COLUMN_WIDTHS
                    .iter()
                    .map(|w| Element::td(format!("{r}")).size(*w, ROW_HEIGHT))
                    .collect(),
            )
        })
        .collect();

    Element::table()
        .id(format!("{prefix}table"))
        .offset(left, top)
        .size(TABLE_WIDTH, TABLE_HEIGHT)
        .child(
            Element::thead()
                .id(format!("{prefix}thead"))
                .size(TABLE_WIDTH, HEAD_HEIGHT)
                .child(head_row),
        )
        .child(
            Element::tbody()
                .id(format!("{prefix}tbody"))
                .size(TABLE_WIDTH, ROW_HEIGHT * ROWS as f64)
                .children(rows),
        )
}

/// Page-scroll wrapper: as tall as the table plus a horizontal scrollbar.
pub fn wrapper() -> Element {
    Element::div()
        .id("wrapper")
        .offset(10.0, 200.0)
        .size(400.0, TABLE_HEIGHT + 17.0)
        .client_size(400.0, TABLE_HEIGHT)
        .scroll_size(TABLE_WIDTH, TABLE_HEIGHT)
        .child(table(10.0, 200.0))
}

/// Page-scroll wrapper at (`left`, `top`) with prefixed ids.
pub fn named_wrapper(prefix: &str, left: f64, top: f64) -> Element {
    Element::div()
        .id(format!("{prefix}wrapper"))
        .offset(left, top)
        .size(400.0, TABLE_HEIGHT + 17.0)
        .client_size(400.0, TABLE_HEIGHT)
        .scroll_size(TABLE_WIDTH, TABLE_HEIGHT)
        .child(named_table(prefix, left, top))
}

/// Fixed-height wrapper with both scrollbars.
pub fn scrollable_wrapper() -> Element {
    Element::div()
        .id("wrapper")
        .offset(10.0, 200.0)
        .size(400.0, 200.0)
        .client_size(383.0, 183.0)
        .scroll_size(TABLE_WIDTH, TABLE_HEIGHT)
        .child(table(10.0, 200.0))
}

pub fn body() -> Element {
    Element::new("body")
        .id("body")
        .size(1000.0, 3000.0)
        .child(Element::div().id("navbar").offset(0.0, 0.0).size(1000.0, 56.0))
}

pub fn page_with(wrapper: Element) -> Document {
    Document::new(body().child(wrapper), Viewport::new(800.0, 600.0))
}

pub fn page() -> Document {
    page_with(wrapper())
}

pub fn overlay_count(doc: &Document) -> usize {
    OverlayKind::ORDER
        .iter()
        .map(|kind| doc.find_by_class(kind.class()).len())
        .sum()
}

pub fn overlay_style(doc: &Document, table: &FreezeTable, kind: OverlayKind) -> Style {
    let id = table.overlay_id(kind).expect("overlay built");
    doc.style(id).cloned().expect("overlay in document")
}
