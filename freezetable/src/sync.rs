//! Per-tick visibility and placement of the overlays.

use tabledom::{ScrollOffset, Style, px};

use crate::geometry::Measurements;
use crate::options::Options;
use crate::overlay::OverlayKind;

/// What one scroll tick sees.
pub(crate) struct Tick<'a> {
    pub m: &'a Measurements,
    pub wrapper_scroll: ScrollOffset,
    /// The container itself is scrolled sideways.
    pub horizontally_scrolled: bool,
}

impl Tick<'_> {
    fn head_condition(&self, options: &Options) -> bool {
        if options.scrollable {
            return self.wrapper_scroll.top > 0.0;
        }
        let origin = self.m.origin_top();
        self.m.table_rect.top() < origin && origin < self.m.table_rect.bottom()
    }

    fn column_condition(&self, options: &Options) -> bool {
        options.column_keep || self.wrapper_scroll.left > 0.0
    }

    /// The floating scrollbar stands in for the wrapper's own while the
    /// table's header is on screen but the wrapper's bottom edge is not.
    fn scroll_bar_condition(&self) -> bool {
        let visible_bottom = self.m.visible.bottom();
        let rect = self.m.wrapper_rect;
        rect.top() + self.m.head_height < visible_bottom && rect.bottom() > visible_bottom
    }

    pub fn visible(&self, kind: OverlayKind, options: &Options) -> bool {
        if kind == OverlayKind::Column && options.column_keep {
            return true;
        }
        if self.horizontally_scrolled {
            return false;
        }
        match kind {
            OverlayKind::Head => self.head_condition(options),
            OverlayKind::Column => self.column_condition(options),
            OverlayKind::ColumnHead => {
                self.head_condition(options) && self.column_condition(options)
            }
            OverlayKind::ScrollBar => self.scroll_bar_condition(),
        }
    }

    /// Position declarations for an overlay on this tick.
    pub fn placement(&self, kind: OverlayKind, options: &Options) -> Style {
        let scroll = self.wrapper_scroll;
        let (position, top, left) = match kind {
            OverlayKind::ScrollBar => (
                "fixed",
                self.m.visible.bottom() - self.m.scroll_bar_height(),
                self.m.wrapper_rect.left(),
            ),
            // Absolute inside the scrolling wrapper: follow its scroll offset
            // to stay pinned to the visible corner.
            _ if options.scrollable => ("absolute", scroll.top, scroll.left),
            OverlayKind::Column => ("absolute", 0.0, scroll.left),
            OverlayKind::Head | OverlayKind::ColumnHead => {
                ("fixed", self.m.origin_top(), self.m.wrapper_rect.left())
            }
        };
        Style::new()
            .with("position", position)
            .with("top", px(top))
            .with("left", px(left))
    }
}
