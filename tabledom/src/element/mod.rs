mod content;
mod node;

pub use content::Content;
pub use node::{Element, SOURCE_ID_KEY};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Some(children) = root.content.children_mut() {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the chain of elements from `root` down to the element with `id`.
/// The last entry is the element itself.
pub fn find_path<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.content.children() {
        if let Some(mut path) = find_path(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// Collect every element in the tree carrying `class`, in document order.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_class(root, class, &mut found);
    found
}

fn collect_by_class<'a>(element: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        found.push(element);
    }
    for child in element.content.children() {
        collect_by_class(child, class, found);
    }
}

/// Remove the element with `id` from the tree rooted at `root`.
/// The root itself cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let children = root.content.children_mut()?;

    if let Some(index) = children.iter().position(|c| c.id == id) {
        return Some(children.remove(index));
    }

    children.iter_mut().find_map(|child| remove_element(child, id))
}
