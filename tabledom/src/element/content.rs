use super::Element;

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

impl Content {
    pub fn children(&self) -> &[Element] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable access to the child list. Text and empty nodes have none.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match self {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }
}
