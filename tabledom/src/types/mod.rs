mod metrics;
mod style;

pub use metrics::BoxMetrics;
pub use style::{px, Style};
