use std::fs::File;

use freezetable::{FreezeTable, OverlayKind, Options, Registry};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{Document, Element, Target, Viewport};

const COLUMNS: [f64; 6] = [140.0, 90.0, 90.0, 220.0, 160.0, 300.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("freezetable.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut doc = page();
    let mut registry = Registry::new();
    let options = Options {
        fixed_navbar: "navbar".into(),
        scroll_bar: true,
        shadow: true,
        ..Default::default()
    };
    let mut table = FreezeTable::attach(&mut doc, &mut registry, "my-table", options)?;
    report("attached", &table);

    let steps = [
        ("page scrolled into table", Target::Window, 0.0, 420.0),
        ("table scrolled sideways", Target::element("my-table"), 180.0, 0.0),
        ("page scrolled sideways", Target::Window, 40.0, 420.0),
        ("page back", Target::Window, 0.0, 420.0),
        ("past the table", Target::Window, 0.0, 2000.0),
    ];
    for (label, target, left, top) in steps {
        doc.set_scroll(&target, left, top);
        table.pump(&mut doc);
        report(label, &table);
    }

    doc.resize_viewport(1280.0, 720.0);
    table.pump(&mut doc);
    report("viewport resized", &table);

    table.destroy(&mut doc, &mut registry);
    println!("destroyed; listeners left: {}", doc.listeners().len());
    Ok(())
}

fn report(label: &str, table: &FreezeTable) {
    let states: Vec<String> = OverlayKind::ORDER
        .iter()
        .map(|kind| format!("{:?}={:?}", kind, table.overlay_state(*kind)))
        .collect();
    println!("{label:<26} {}", states.join(" "));
}

fn page() -> Document {
    let width: f64 = COLUMNS.iter().sum();
    let head = Element::thead().size(width, 44.0).child(
        Element::tr().children(
            COLUMNS
                .iter()
                .enumerate()
                .map(|(i, w)| Element::th(format!("Header {i}")).size(*w, 44.0))
                .collect(),
        ),
    );
    let body = Element::tbody().size(width, 40.0 * 30.0).children(
        (0..30)
            .map(|r| {
                Element::tr().size(width, 40.0).children(
                    COLUMNS
                        .iter()
                        .map(|w| Element::td(format!("row {r}")).size(*w, 40.0))
                        .collect(),
                )
            })
            .collect(),
    );
    let table_height = 44.0 + 40.0 * 30.0;
    let table = Element::table()
        .id("data")
        .offset(20.0, 300.0)
        .size(width, table_height)
        .child(head)
        .child(body);
    let wrapper = Element::div()
        .id("my-table")
        .offset(20.0, 300.0)
        .size(600.0, table_height + 17.0)
        .client_size(600.0, table_height)
        .scroll_size(width, table_height)
        .child(table);

    let root = Element::new("body")
        .id("body")
        .size(1200.0, 4000.0)
        .child(Element::div().id("navbar").size(1200.0, 56.0))
        .child(wrapper);
    Document::new(root, Viewport::new(1024.0, 768.0))
}
