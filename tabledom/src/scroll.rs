/// Scroll offset of a scrollable element or of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Clamp both axes into `0..=max`.
    pub fn clamped(self, max_left: f64, max_top: f64) -> Self {
        Self {
            left: self.left.clamp(0.0, max_left.max(0.0)),
            top: self.top.clamp(0.0, max_top.max(0.0)),
        }
    }
}
