mod rect;
mod reflow;

pub use rect::Rect;
pub use reflow::reflow;
