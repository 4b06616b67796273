use std::collections::BTreeMap;

/// Format a pixel length the way computed styles report it.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Inline style declarations, keyed by CSS property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    props: BTreeMap<String, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.props.insert(name.into(), value.into());
    }

    pub fn set_px(&mut self, name: impl Into<String>, value: f64) {
        self.set(name, px(value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.props.remove(name)
    }

    /// Read a property back as a pixel length. Anything that is not a plain
    /// `<number>px` value yields `None`.
    pub fn px(&self, name: &str) -> Option<f64> {
        self.get(name)?
            .trim()
            .strip_suffix("px")
            .and_then(|n| n.trim().parse().ok())
    }

    /// Overlay every declaration of `other` onto this style.
    pub fn merge(&mut self, other: &Style) {
        for (name, value) in &other.props {
            self.props.insert(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (name, value) in iter {
            style.set(name, value);
        }
        style
    }
}
