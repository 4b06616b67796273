//! Overlay sizes from live page measurements.
//!
//! Everything here is a pure function of [`Measurements`], so running it
//! twice on an unchanged page gives identical results.

use tabledom::{BoxMetrics, Document, Rect};

use crate::options::{Container, Options};

/// Height used for the floating scrollbar when the wrapper reports no gutter.
pub const DEFAULT_SCROLL_BAR_HEIGHT: f64 = 17.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything the geometry engine and the synchronizer read from the page
/// on one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measurements {
    pub wrapper: BoxMetrics,
    /// Wrapper border box in viewport coordinates.
    pub wrapper_rect: Rect,
    /// Table border box in viewport coordinates.
    pub table_rect: Rect,
    /// Outer height of the table's `thead`.
    pub head_height: f64,
    /// Widths of the cells in the first header row.
    pub header_cell_widths: Vec<f64>,
    pub navbar_height: f64,
    /// Area of the container currently on screen, in viewport coordinates.
    pub visible: Rect,
}

impl Measurements {
    /// Read the current page state. `None` if the wrapper or table has been
    /// removed from the page.
    pub fn read(
        doc: &Document,
        wrapper_id: &str,
        table_id: &str,
        container: &Container,
        navbar: Option<&str>,
    ) -> Option<Self> {
        let wrapper = doc.get(wrapper_id)?;
        let table = doc.get(table_id)?;
        let thead = table.children_by_tag("thead").next()?;
        let header_cell_widths: Vec<f64> = thead
            .children_by_tag("tr")
            .next()
            .map(|row| {
                row.content
                    .children()
                    .iter()
                    .filter(|cell| cell.is("th") || cell.is("td"))
                    .map(|cell| cell.metrics.offset_width)
                    .collect()
            })
            .unwrap_or_default();

        let visible = match container {
            Container::Window => {
                let viewport = doc.viewport();
                Rect::from_size(viewport.width, viewport.height)
            }
            Container::Element(id) => {
                let rect = doc.bounding_rect(id)?;
                let metrics = doc.get(id)?.metrics;
                Rect::new(rect.x, rect.y, metrics.client_width, metrics.client_height)
            }
        };

        let navbar_height = navbar
            .and_then(|id| doc.get(id))
            .map(|nav| nav.metrics.offset_height)
            .unwrap_or(0.0);

        Some(Self {
            wrapper: wrapper.metrics,
            wrapper_rect: doc.bounding_rect(wrapper_id)?,
            table_rect: doc.bounding_rect(table_id)?,
            head_height: thead.metrics.offset_height,
            header_cell_widths,
            navbar_height,
            visible,
        })
    }

    /// Where a fixed overlay's top edge sits: the top of the visible area,
    /// below the navbar.
    pub fn origin_top(&self) -> f64 {
        self.visible.top() + self.navbar_height
    }

    /// Height of the floating scrollbar.
    pub fn scroll_bar_height(&self) -> f64 {
        match self.wrapper.gutter_height() {
            h if h > 0.0 => h,
            _ => DEFAULT_SCROLL_BAR_HEIGHT,
        }
    }
}

/// Use `adjusted` unless a subtraction pushed it to zero or below.
fn floored(adjusted: f64, unadjusted: f64) -> f64 {
    if adjusted > 0.0 {
        adjusted
    } else {
        unadjusted.max(0.0)
    }
}

pub fn head_size(m: &Measurements, options: &Options) -> Size {
    let full = m.wrapper.offset_width;
    let width = if options.scrollable {
        floored(full - m.wrapper.gutter_width(), full)
    } else {
        full
    };
    Size::new(width, m.head_height)
}

pub fn column_size(m: &Measurements, options: &Options) -> Size {
    let columns = options.column_num as usize;
    if columns > m.header_cell_widths.len() {
        log::warn!(
            "[geometry] columnNum {} exceeds header cell count {}",
            columns,
            m.header_cell_widths.len()
        );
    }
    let cells: f64 = m.header_cell_widths.iter().take(columns).sum();
    let width = cells + f64::from(options.column_border_width);

    let height = if options.scrollable {
        let client = m.wrapper.client_height;
        floored(client - m.wrapper.gutter_height(), client)
    } else {
        m.table_rect.height
    };
    Size::new(width, height)
}

/// The corner takes its width from the column overlay as already placed,
/// hence the declared head/column-before-corner order.
pub fn column_head_size(m: &Measurements, column_width: f64) -> Size {
    Size::new(column_width.max(0.0), m.head_height)
}

pub fn scroll_bar_size(m: &Measurements) -> Size {
    Size::new(m.wrapper.client_width, m.scroll_bar_height())
}
