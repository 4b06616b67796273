mod common;

use common::*;
use freezetable::{FreezeTable, OverlayKind, OverlayState, Options, Registry, pump};
use tabledom::{Document, Target, Viewport};

fn attach(doc: &mut Document, options: Options) -> FreezeTable {
    let mut registry = Registry::new();
    FreezeTable::attach(doc, &mut registry, "wrapper", options).unwrap()
}

fn scroll_left_of(doc: &Document, id: &str) -> f64 {
    doc.scroll_position(&Target::element(id)).unwrap().left
}

// ============================================================================
// Horizontal Mirroring
// ============================================================================

#[test]
fn test_head_mirrors_wrapper_within_one_tick() {
    let mut doc = page();
    let mut table = attach(&mut doc, Options::default());
    let head_id = table.overlay_id(OverlayKind::Head).unwrap().to_string();

    for left in [120.0, 37.5, 500.0, 0.0] {
        doc.set_scroll(&Target::element("wrapper"), left, 0.0);
        let events = doc.take_events();
        table.process_events(&mut doc, &events);
        assert_eq!(scroll_left_of(&doc, &head_id), left);
    }
}

#[test]
fn test_scroll_bar_mirrors_both_ways() {
    let mut doc = Document::new(body().child(wrapper()), Viewport::new(800.0, 400.0));
    let options = Options {
        scroll_bar: true,
        ..Default::default()
    };
    let mut table = attach(&mut doc, options);
    let bar_id = table.overlay_id(OverlayKind::ScrollBar).unwrap().to_string();
    let head_id = table.overlay_id(OverlayKind::Head).unwrap().to_string();

    // Scrollbar -> wrapper -> head
    doc.set_scroll(&Target::element(bar_id.clone()), 200.0, 0.0);
    table.pump(&mut doc);
    assert_eq!(scroll_left_of(&doc, "wrapper"), 200.0);
    assert_eq!(scroll_left_of(&doc, &head_id), 200.0);
    assert!(table.overlay_state(OverlayKind::Column).is_visible());

    // Wrapper -> scrollbar
    doc.set_scroll(&Target::element("wrapper"), 120.0, 0.0);
    table.pump(&mut doc);
    assert_eq!(scroll_left_of(&doc, &bar_id), 120.0);
    assert!(!doc.has_pending_events());
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_column_toggles_with_wrapper_scroll_left() {
    let mut doc = page();
    let mut table = attach(&mut doc, Options::default());
    assert_eq!(table.overlay_state(OverlayKind::Column), OverlayState::Hidden);

    doc.set_scroll(&Target::element("wrapper"), 40.0, 0.0);
    table.pump(&mut doc);
    assert_eq!(table.overlay_state(OverlayKind::Column), OverlayState::Visible);
    let column = overlay_style(&doc, &table, OverlayKind::Column);
    assert_eq!(column.get("visibility"), Some("visible"));
    assert_eq!(column.px("left"), Some(40.0));

    doc.set_scroll(&Target::element("wrapper"), 0.0, 0.0);
    table.pump(&mut doc);
    assert_eq!(table.overlay_state(OverlayKind::Column), OverlayState::Hidden);
    let column = overlay_style(&doc, &table, OverlayKind::Column);
    assert_eq!(column.get("visibility"), Some("hidden"));
}

#[test]
fn test_head_follows_page_scroll() {
    let mut doc = page();
    let mut table = attach(&mut doc, Options::default());
    assert_eq!(table.overlay_state(OverlayKind::Head), OverlayState::Hidden);

    // Table top passes the top of the viewport
    doc.set_scroll(&Target::Window, 0.0, 250.0);
    table.pump(&mut doc);
    assert!(table.overlay_state(OverlayKind::Head).is_visible());
    let head = overlay_style(&doc, &table, OverlayKind::Head);
    assert_eq!(head.px("top"), Some(0.0));
    assert_eq!(head.px("left"), Some(10.0));

    // Whole table scrolled away
    doc.set_scroll(&Target::Window, 0.0, 600.0);
    table.pump(&mut doc);
    assert_eq!(table.overlay_state(OverlayKind::Head), OverlayState::Hidden);
}

#[test]
fn test_corner_is_intersection() {
    let mut doc = page();
    let mut table = attach(&mut doc, Options::default());

    doc.set_scroll(&Target::Window, 0.0, 250.0);
    table.pump(&mut doc);
    assert!(table.overlay_state(OverlayKind::Head).is_visible());
    assert!(!table.overlay_state(OverlayKind::ColumnHead).is_visible());

    doc.set_scroll(&Target::element("wrapper"), 60.0, 0.0);
    table.pump(&mut doc);
    assert!(table.overlay_state(OverlayKind::ColumnHead).is_visible());

    doc.set_scroll(&Target::Window, 0.0, 0.0);
    table.pump(&mut doc);
    assert!(table.overlay_state(OverlayKind::Column).is_visible());
    assert!(!table.overlay_state(OverlayKind::ColumnHead).is_visible());
}

#[test]
fn test_horizontal_page_scroll_hides_overlays() {
    let mut doc = page();
    let mut table = attach(&mut doc, Options::default());
    doc.set_scroll(&Target::element("wrapper"), 60.0, 0.0);
    doc.set_scroll(&Target::Window, 0.0, 250.0);
    table.pump(&mut doc);
    assert!(table.overlay_state(OverlayKind::ColumnHead).is_visible());

    doc.set_scroll(&Target::Window, 50.0, 250.0);
    table.pump(&mut doc);
    assert!(table.is_horizontally_scrolled());
    for kind in [OverlayKind::Head, OverlayKind::Column, OverlayKind::ColumnHead] {
        assert_eq!(table.overlay_state(kind), OverlayState::Hidden, "{kind:?}");
    }

    doc.set_scroll(&Target::Window, 0.0, 250.0);
    table.pump(&mut doc);
    assert!(!table.is_horizontally_scrolled());
    assert!(table.overlay_state(OverlayKind::Head).is_visible());
}

#[test]
fn test_scroll_bar_visibility_tracks_wrapper_bottom() {
    let mut doc = Document::new(body().child(wrapper()), Viewport::new(800.0, 400.0));
    let options = Options {
        scroll_bar: true,
        ..Default::default()
    };
    let mut table = attach(&mut doc, options);

    // Wrapper bottom (557) below the viewport bottom (400)
    assert!(table.overlay_state(OverlayKind::ScrollBar).is_visible());
    let bar = overlay_style(&doc, &table, OverlayKind::ScrollBar);
    assert_eq!(bar.get("position"), Some("fixed"));
    assert_eq!(bar.px("top"), Some(383.0));

    // Wrapper fully on screen: its own scrollbar is visible
    doc.set_scroll(&Target::Window, 0.0, 200.0);
    table.pump(&mut doc);
    assert_eq!(table.overlay_state(OverlayKind::ScrollBar), OverlayState::Hidden);
}

// ============================================================================
// Scrollable Mode
// ============================================================================

#[test]
fn test_scrollable_overlays_follow_wrapper() {
    let mut doc = page_with(scrollable_wrapper());
    let options = Options {
        scrollable: true,
        ..Default::default()
    };
    let mut table = attach(&mut doc, options);
    let column_id = table.overlay_id(OverlayKind::Column).unwrap().to_string();

    assert_eq!(table.overlay_state(OverlayKind::Head), OverlayState::Hidden);

    doc.set_scroll(&Target::element("wrapper"), 0.0, 100.0);
    table.pump(&mut doc);
    assert!(table.overlay_state(OverlayKind::Head).is_visible());
    assert!(!table.overlay_state(OverlayKind::Column).is_visible());
    let head = overlay_style(&doc, &table, OverlayKind::Head);
    assert_eq!(head.get("position"), Some("absolute"));
    assert_eq!(head.px("top"), Some(100.0));
    assert_eq!(
        doc.scroll_position(&Target::element(column_id)).unwrap().top,
        100.0
    );

    doc.set_scroll(&Target::element("wrapper"), 60.0, 100.0);
    table.pump(&mut doc);
    assert!(table.overlay_state(OverlayKind::Column).is_visible());
    assert!(table.overlay_state(OverlayKind::ColumnHead).is_visible());
    let corner = overlay_style(&doc, &table, OverlayKind::ColumnHead);
    assert_eq!(corner.px("left"), Some(60.0));
    assert_eq!(corner.px("top"), Some(100.0));
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_unrelated_events_ignored() {
    let mut doc = page();
    let mut table = attach(&mut doc, Options::default());
    let before = overlay_style(&doc, &table, OverlayKind::Head);

    doc.get_mut("thead").unwrap().metrics.offset_height = 99.0;
    doc.resize_element("navbar", 1000.0, 80.0);
    table.pump(&mut doc);

    assert_eq!(overlay_style(&doc, &table, OverlayKind::Head), before);
}

#[test]
fn test_shared_page_updates_every_table() {
    let mut doc = page_with(named_wrapper("a-", 10.0, 200.0));
    assert!(doc.append_child("body", named_wrapper("b-", 10.0, 700.0)));
    let mut registry = Registry::new();
    let mut a = FreezeTable::attach(&mut doc, &mut registry, "a-wrapper", Options::default()).unwrap();
    let mut b = FreezeTable::attach(&mut doc, &mut registry, "b-wrapper", Options::default()).unwrap();
    assert_eq!(registry.len(), 2);

    doc.set_scroll(&Target::Window, 0.0, 250.0);
    pump(&mut doc, &mut [&mut a, &mut b]);
    assert!(a.overlay_state(OverlayKind::Head).is_visible());
    assert_eq!(b.overlay_state(OverlayKind::Head), OverlayState::Hidden);

    doc.set_scroll(&Target::Window, 0.0, 750.0);
    pump(&mut doc, &mut [&mut a, &mut b]);
    assert_eq!(a.overlay_state(OverlayKind::Head), OverlayState::Hidden);
    assert!(b.overlay_state(OverlayKind::Head).is_visible());

    // Wrapper scroll only reaches its own table
    doc.set_scroll(&Target::element("b-wrapper"), 40.0, 0.0);
    pump(&mut doc, &mut [&mut a, &mut b]);
    assert!(b.overlay_state(OverlayKind::Column).is_visible());
    assert_eq!(a.overlay_state(OverlayKind::Column), OverlayState::Hidden);
    assert!(!doc.has_pending_events());
}

#[test]
fn test_destroyed_widget_stops_listening() {
    let mut doc = page();
    let mut registry = Registry::new();
    let table = FreezeTable::attach(&mut doc, &mut registry, "wrapper", Options::default()).unwrap();
    table.destroy(&mut doc, &mut registry);

    doc.set_scroll(&Target::element("wrapper"), 40.0, 0.0);
    let events = doc.take_events();
    assert!(doc.listeners().matching(&events[0]).is_empty());
}
