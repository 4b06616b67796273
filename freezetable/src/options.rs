use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabledom::{Document, Style, Target};

use crate::error::ConfigurationError;

/// Sentinel for [`Options::container`] meaning the page viewport.
pub const WINDOW: &str = "window";

/// Caller options. Every field has a default, so a raw mapping only needs
/// the keys it wants to change; unknown keys and mistyped values are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Options {
    /// Id of a fixed navbar whose height offsets the overlays' vertical origin.
    pub fixed_navbar: String,
    /// Id of the scrollable ancestor driving scroll/resize, or `"window"`.
    pub container: String,
    pub freeze_head: bool,
    pub freeze_column: bool,
    pub freeze_column_head: bool,
    /// Floating horizontal scrollbar shown while the wrapper's own is off screen.
    pub scroll_bar: bool,
    /// Fixed-height wrapper that scrolls internally instead of the page.
    pub scrollable: bool,
    /// Number of leading columns frozen.
    pub column_num: u32,
    /// Keep the column overlay visible regardless of scroll position.
    pub column_keep: bool,
    pub shadow: bool,
    pub head_wrap_styles: BTreeMap<String, String>,
    pub column_wrap_styles: BTreeMap<String, String>,
    pub column_head_wrap_styles: BTreeMap<String, String>,
    pub scroll_bar_wrap_styles: BTreeMap<String, String>,
    /// Opaque fill behind cloned cells.
    pub background_color: String,
    /// Added to the summed header-cell widths of the column overlay.
    pub column_border_width: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fixed_navbar: String::new(),
            container: WINDOW.to_string(),
            freeze_head: true,
            freeze_column: true,
            freeze_column_head: true,
            scroll_bar: false,
            scrollable: false,
            column_num: 1,
            column_keep: false,
            shadow: false,
            head_wrap_styles: BTreeMap::new(),
            column_wrap_styles: BTreeMap::new(),
            column_head_wrap_styles: BTreeMap::new(),
            scroll_bar_wrap_styles: BTreeMap::new(),
            background_color: "white".to_string(),
            column_border_width: 1,
        }
    }
}

/// Which object's scroll and resize events drive the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    Window,
    Element(String),
}

impl Container {
    pub fn target(&self) -> Target {
        match self {
            Container::Window => Target::Window,
            Container::Element(id) => Target::element(id.clone()),
        }
    }
}

/// Options checked against the page they will be used on.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub options: Options,
    pub container: Container,
    pub navbar: Option<String>,
}

impl Options {
    /// Overlay a raw option mapping onto the defaults. `null` means "no
    /// options".
    pub fn from_json(raw: &Value) -> Result<Self, ConfigurationError> {
        if raw.is_null() {
            return Ok(Self::default());
        }
        Ok(Options::deserialize(raw)?)
    }

    /// Validate values and look up the elements the options refer to.
    pub fn resolve(self, doc: &Document) -> Result<ResolvedOptions, ConfigurationError> {
        if self.column_num == 0 {
            return Err(ConfigurationError::ColumnNumZero);
        }

        let navbar = match self.fixed_navbar.as_str() {
            "" => None,
            id if doc.contains(id) => Some(id.to_string()),
            id => return Err(ConfigurationError::NavbarNotFound(id.to_string())),
        };

        let container = match self.container.as_str() {
            "" | WINDOW => Container::Window,
            id if doc.contains(id) => Container::Element(id.to_string()),
            id => return Err(ConfigurationError::ContainerNotFound(id.to_string())),
        };

        Ok(ResolvedOptions {
            options: self,
            container,
            navbar,
        })
    }
}

pub(crate) fn to_style(map: &BTreeMap<String, String>) -> Style {
    map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}
