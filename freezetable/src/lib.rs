//! Frozen table headers and columns via cloned overlays.
//!
//! A [`FreezeTable`] attaches to a wrapper element holding a single table,
//! appends up to four overlay copies of parts of that table (header row,
//! leading columns, their corner, and a floating horizontal scrollbar), and
//! keeps them aligned with the live table as the page or the wrapper scrolls.

mod cloner;
mod error;
mod geometry;
mod options;
mod overlay;
mod registry;
mod sync;
mod table;

pub use error::{ConfigurationError, Error, StructuralError};
pub use geometry::{Measurements, Size};
pub use options::{Container, Options, ResolvedOptions};
pub use overlay::{OverlayKind, OverlayState};
pub use registry::Registry;
pub use table::{FreezeTable, pump};
