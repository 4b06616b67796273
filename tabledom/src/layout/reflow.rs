use crate::element::Element;

/// Recompute the box of every element in the subtree whose size is pinned
/// by an inline `width`/`height` pixel declaration.
///
/// This is not a layout engine: elements without explicit pixel sizes keep
/// whatever the host measured. Pinned elements get their outer and client
/// size from the declaration and their scroll size from the widest/tallest
/// child, and their scroll offset is clamped to the new range.
pub fn reflow(element: &mut Element) {
    if let Some(children) = element.content.children_mut() {
        for child in children.iter_mut() {
            reflow(child);
        }
    }

    let width = element.style.px("width");
    let height = element.style.px("height");
    if width.is_none() && height.is_none() {
        return;
    }

    let (content_width, content_height) = element
        .content
        .children()
        .iter()
        .fold((0.0_f64, 0.0_f64), |(w, h), child| {
            (
                w.max(child.metrics.offset_width),
                h.max(child.metrics.offset_height),
            )
        });

    let metrics = &mut element.metrics;
    if let Some(width) = width {
        metrics.offset_width = width;
        metrics.client_width = width;
        metrics.scroll_width = width.max(content_width);
    }
    if let Some(height) = height {
        metrics.offset_height = height;
        metrics.client_height = height;
        metrics.scroll_height = height.max(content_height);
    }

    let max_left = metrics.max_scroll_left();
    let max_top = metrics.max_scroll_top();
    element.scroll = element.scroll.clamped(max_left, max_top);
}
