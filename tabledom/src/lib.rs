pub mod document;
pub mod element;
pub mod event;
pub mod layout;
pub mod listener;
pub mod scroll;
pub mod types;

pub use document::{Document, Viewport};
pub use element::Element;
pub use event::{Event, EventKind, Target};
pub use layout::Rect;
pub use listener::{ListenerId, Listeners};
pub use scroll::ScrollOffset;
pub use types::*;
