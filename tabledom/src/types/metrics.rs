/// Box-model measurements of an element, in CSS pixels.
///
/// `offset_*` describe the border box in document coordinates before any
/// scrolling. `client_*` is the inner area excluding scrollbars, and
/// `scroll_*` is the full size of the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxMetrics {
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_width: f64,
    pub offset_height: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
}

impl BoxMetrics {
    /// Width taken by a vertical scrollbar (and borders).
    pub fn gutter_width(&self) -> f64 {
        (self.offset_width - self.client_width).max(0.0)
    }

    /// Height taken by a horizontal scrollbar (and borders).
    pub fn gutter_height(&self) -> f64 {
        (self.offset_height - self.client_height).max(0.0)
    }

    /// Largest valid horizontal scroll offset.
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Largest valid vertical scroll offset.
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gutters_never_negative() {
        let metrics = BoxMetrics {
            offset_width: 100.0,
            client_width: 120.0,
            offset_height: 50.0,
            client_height: 33.0,
            ..Default::default()
        };
        assert_eq!(metrics.gutter_width(), 0.0);
        assert_eq!(metrics.gutter_height(), 17.0);
    }
}
