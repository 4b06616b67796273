//! Widget lifecycle: validate, attach, route events, tear down.

use serde_json::Value;
use tabledom::{Document, Element, Event, EventKind, ListenerId, Style, Target};

use crate::cloner::{self, Cloner};
use crate::error::{Error, StructuralError};
use crate::geometry::{self, Measurements, Size};
use crate::options::{self, Container, Options, ResolvedOptions};
use crate::overlay::{Overlay, OverlayKind, OverlayState, Overlays};
use crate::registry::Registry;
use crate::sync::Tick;

/// Wrapper declarations the widget needs, every mode.
const WRAPPER_STYLE: [(&str, &str); 2] = [("position", "relative"), ("overflow-x", "auto")];

/// Extra wrapper declarations for scrollable mode.
const SCROLLABLE_WRAPPER_STYLE: [(&str, &str); 1] = [("overflow-y", "auto")];

/// Which handler a document listener feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subscription {
    ContainerScroll,
    ContainerResize,
    WrapperScroll,
    /// Resize observation of the wrapper element.
    WrapperResize,
    ScrollBarScroll,
}

type Builder = fn(&mut FreezeTable, &mut Document, &Cloner);

/// Overlays in build order, each with the option that enables it.
const BUILDERS: [(fn(&Options) -> bool, Builder); 4] = [
    (head_enabled, FreezeTable::build_head),
    (column_enabled, FreezeTable::build_column),
    (column_head_enabled, FreezeTable::build_column_head),
    (scroll_bar_enabled, FreezeTable::build_scroll_bar),
];

fn head_enabled(options: &Options) -> bool {
    options.freeze_head
}

fn column_enabled(options: &Options) -> bool {
    options.freeze_column
}

fn column_head_enabled(options: &Options) -> bool {
    options.freeze_column_head
}

fn scroll_bar_enabled(options: &Options) -> bool {
    options.scroll_bar
}

/// One attached widget. Owns its overlay elements and document listeners;
/// release both with [`FreezeTable::destroy`].
#[derive(Debug)]
pub struct FreezeTable {
    wrapper_id: String,
    /// Also the registry identifier.
    table_id: String,
    resolved: ResolvedOptions,
    overlays: Overlays,
    subscriptions: Vec<(ListenerId, Subscription)>,
    navbar_height: f64,
    horizontally_scrolled: bool,
    /// Wrapper declarations overwritten on attach, with their old values.
    saved_wrapper_style: Vec<(String, Option<String>)>,
}

impl FreezeTable {
    /// Attach to the table inside `wrapper_id`.
    ///
    /// All validation happens before the page is touched: on error nothing is
    /// appended, subscribed, or registered.
    pub fn attach(
        doc: &mut Document,
        registry: &mut Registry,
        wrapper_id: &str,
        options: Options,
    ) -> Result<Self, Error> {
        let table_id = validate_structure(doc, wrapper_id)?;
        registry.check(&table_id)?;
        let resolved = options.resolve(doc)?;
        registry.claim(&table_id)?;

        let opts = &resolved.options;
        let overlays = Overlays::new(wrapper_id, |kind| {
            options::to_style(match kind {
                OverlayKind::Head => &opts.head_wrap_styles,
                OverlayKind::Column => &opts.column_wrap_styles,
                OverlayKind::ColumnHead => &opts.column_head_wrap_styles,
                OverlayKind::ScrollBar => &opts.scroll_bar_wrap_styles,
            })
        });

        let mut table = Self {
            wrapper_id: wrapper_id.to_string(),
            table_id,
            resolved,
            overlays,
            subscriptions: Vec::new(),
            navbar_height: 0.0,
            horizontally_scrolled: false,
            saved_wrapper_style: Vec::new(),
        };

        log::debug!(
            "[freeze] attaching to {} (table {})",
            table.wrapper_id,
            table.table_id
        );
        table.prepare_wrapper(doc);
        table.build(doc);
        table.subscribe(doc);

        // Size and place everything once, even if nothing ever scrolls.
        table.resize(doc);
        table.on_container_scroll(doc);

        Ok(table)
    }

    /// Attach with a raw option mapping, e.g. parsed from a page attribute.
    pub fn attach_json(
        doc: &mut Document,
        registry: &mut Registry,
        wrapper_id: &str,
        options: &Value,
    ) -> Result<Self, Error> {
        let options = Options::from_json(options)?;
        Self::attach(doc, registry, wrapper_id, options)
    }

    /// Remove overlays and listeners, restore the wrapper, and free the
    /// table for a later attach.
    pub fn destroy(self, doc: &mut Document, registry: &mut Registry) {
        for (id, _) in &self.subscriptions {
            doc.remove_listener(*id);
        }
        for overlay in self.overlays.built() {
            doc.remove(&overlay.id);
        }
        for (name, old) in &self.saved_wrapper_style {
            match old {
                Some(value) => {
                    doc.apply_style(&self.wrapper_id, &Style::new().with(name.clone(), value.clone()));
                }
                None => {
                    doc.remove_style(&self.wrapper_id, name);
                }
            }
        }
        registry.release(&self.table_id);
        log::debug!("[freeze] destroyed {}", self.wrapper_id);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn wrapper_id(&self) -> &str {
        &self.wrapper_id
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn options(&self) -> &Options {
        &self.resolved.options
    }

    pub fn container(&self) -> &Container {
        &self.resolved.container
    }

    pub fn overlay_state(&self, kind: OverlayKind) -> OverlayState {
        self.overlays.get(kind).state
    }

    /// Document id of a built overlay's wrapper element.
    pub fn overlay_id(&self, kind: OverlayKind) -> Option<&str> {
        let overlay = self.overlays.get(kind);
        overlay.state.is_built().then_some(overlay.id.as_str())
    }

    pub fn navbar_height(&self) -> f64 {
        self.navbar_height
    }

    pub fn is_horizontally_scrolled(&self) -> bool {
        self.horizontally_scrolled
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Handle a batch drained from the document. Events this widget did not
    /// subscribe to are skipped; the batch is not consumed, so the same
    /// slice can be handed to other widgets on the page.
    pub fn process_events(&mut self, doc: &mut Document, events: &[Event]) {
        for event in events {
            let matched = doc.listeners().matching(event);
            let routes: Vec<Subscription> = self
                .subscriptions
                .iter()
                .filter(|(id, _)| matched.contains(id))
                .map(|(_, sub)| *sub)
                .collect();
            for sub in routes {
                log::trace!("[freeze] {:?} <- {:?}", sub, event);
                self.route(doc, sub);
            }
        }
    }

    /// Drain and handle events until the document is quiet, for a page with
    /// only this widget on it. Events meant for anything else are dropped;
    /// use [`pump`] when several tables share the document.
    pub fn pump(&mut self, doc: &mut Document) {
        pump(doc, &mut [self]);
    }

    fn route(&mut self, doc: &mut Document, sub: Subscription) {
        match sub {
            Subscription::ContainerScroll => self.on_container_scroll(doc),
            Subscription::ContainerResize | Subscription::WrapperResize => self.resize(doc),
            Subscription::WrapperScroll => self.sync(doc),
            Subscription::ScrollBarScroll => self.on_scroll_bar_scroll(doc),
        }
    }

    fn subscribe(&mut self, doc: &mut Document) {
        let container = self.resolved.container.target();
        let wrapper = Target::element(self.wrapper_id.clone());

        let mut wanted = vec![
            (container.clone(), EventKind::Scroll, Subscription::ContainerScroll),
            (container, EventKind::Resize, Subscription::ContainerResize),
            (wrapper.clone(), EventKind::Scroll, Subscription::WrapperScroll),
            (wrapper, EventKind::Resize, Subscription::WrapperResize),
        ];
        if let Some(id) = self.overlay_id(OverlayKind::ScrollBar) {
            wanted.push((
                Target::element(id),
                EventKind::Scroll,
                Subscription::ScrollBarScroll,
            ));
        }

        for (target, kind, sub) in wanted {
            let id = doc.add_listener(target, kind);
            self.subscriptions.push((id, sub));
        }
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    fn prepare_wrapper(&mut self, doc: &mut Document) {
        let Some(wrapper) = doc.get(&self.wrapper_id) else {
            return;
        };

        let mut wanted: Vec<(&str, &str)> = WRAPPER_STYLE.to_vec();
        if self.resolved.options.scrollable {
            wanted.extend(SCROLLABLE_WRAPPER_STYLE);
        }

        let mut style = Style::new();
        for (name, value) in wanted {
            if wrapper.style.get(name) == Some(value) {
                continue;
            }
            self.saved_wrapper_style
                .push((name.to_string(), wrapper.style.get(name).map(str::to_string)));
            style.set(name, value);
        }
        doc.apply_style(&self.wrapper_id, &style);
    }

    fn build(&mut self, doc: &mut Document) {
        let Some(table) = doc.get(&self.table_id) else {
            return;
        };
        let cloner = Cloner::new(table, &self.resolved.options.background_color);

        for (enabled, builder) in BUILDERS {
            if enabled(&self.resolved.options) {
                builder(self, doc, &cloner);
            }
        }
    }

    fn mount(&mut self, doc: &mut Document, kind: OverlayKind, element: Element) {
        let overlay = self.overlays.get_mut(kind);
        if doc.append_child(&self.wrapper_id, element) {
            overlay.state = OverlayState::Hidden;
            log::debug!("[freeze] built {:?} overlay {}", kind, overlay.id);
        }
    }

    fn build_head(&mut self, doc: &mut Document, cloner: &Cloner) {
        if self.overlays.is_built(OverlayKind::Head) {
            return;
        }
        let id = self.overlays.get(OverlayKind::Head).id.clone();
        self.mount(doc, OverlayKind::Head, cloner::wrap(OverlayKind::Head, &id, cloner.head()));
    }

    fn build_column(&mut self, doc: &mut Document, cloner: &Cloner) {
        if self.overlays.is_built(OverlayKind::Column) {
            return;
        }
        let id = self.overlays.get(OverlayKind::Column).id.clone();
        self.mount(
            doc,
            OverlayKind::Column,
            cloner::wrap(OverlayKind::Column, &id, cloner.column()),
        );
    }

    /// Copies the head overlay's clone, so head and column are built first
    /// when the caller did not enable them.
    fn build_column_head(&mut self, doc: &mut Document, cloner: &Cloner) {
        if self.overlays.is_built(OverlayKind::ColumnHead) {
            return;
        }
        self.build_head(doc, cloner);
        self.build_column(doc, cloner);

        let head_id = &self.overlays.get(OverlayKind::Head).id;
        let Some(head_clone) = doc.get(head_id).and_then(Element::first_child) else {
            return;
        };
        let content = Cloner::column_head(head_clone);
        let id = self.overlays.get(OverlayKind::ColumnHead).id.clone();
        self.mount(
            doc,
            OverlayKind::ColumnHead,
            cloner::wrap(OverlayKind::ColumnHead, &id, content),
        );
    }

    fn build_scroll_bar(&mut self, doc: &mut Document, _cloner: &Cloner) {
        if self.overlays.is_built(OverlayKind::ScrollBar) {
            return;
        }
        let Some(table_width) = doc.get(&self.table_id).map(|t| t.metrics.offset_width) else {
            return;
        };
        let id = self.overlays.get(OverlayKind::ScrollBar).id.clone();
        self.mount(doc, OverlayKind::ScrollBar, cloner::scroll_bar(&id, table_width));
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    fn measure(&self, doc: &Document) -> Option<Measurements> {
        let measured = Measurements::read(
            doc,
            &self.wrapper_id,
            &self.table_id,
            &self.resolved.container,
            self.resolved.navbar.as_deref(),
        );
        if measured.is_none() {
            log::debug!("[freeze] {} is no longer on the page", self.wrapper_id);
        }
        measured
    }

    /// Recompute every overlay's size, then re-place them.
    pub fn resize(&mut self, doc: &mut Document) {
        let Some(m) = self.measure(doc) else {
            return;
        };
        self.navbar_height = m.navbar_height;

        for kind in OverlayKind::ORDER {
            if !self.overlays.is_built(kind) {
                continue;
            }
            let size = self.size_of(doc, kind, &m);
            log::debug!("[geometry] {:?} -> {}x{}", kind, size.width, size.height);

            let mut style = Style::new();
            style.set_px("width", size.width);
            style.set_px("height", size.height);
            style.set("z-index", kind.z_index());
            style.set("overflow", "hidden");
            if kind == OverlayKind::ScrollBar {
                style.set("overflow-x", "scroll");
            }
            if self.resolved.options.shadow {
                style.set("box-shadow", kind.shadow());
            }
            self.apply(doc, kind, style);
        }

        self.sync(doc);
    }

    fn size_of(&self, doc: &Document, kind: OverlayKind, m: &Measurements) -> Size {
        let options = &self.resolved.options;
        match kind {
            OverlayKind::Head => geometry::head_size(m, options),
            OverlayKind::Column => geometry::column_size(m, options),
            OverlayKind::ColumnHead => {
                let column = &self.overlays.get(OverlayKind::Column).id;
                let width = doc
                    .style(column)
                    .and_then(|s| s.px("width"))
                    .unwrap_or_default();
                geometry::column_head_size(m, width)
            }
            OverlayKind::ScrollBar => geometry::scroll_bar_size(m),
        }
    }

    /// Write built-in declarations, then the caller's overrides on top.
    fn apply(&self, doc: &mut Document, kind: OverlayKind, mut style: Style) {
        let overlay: &Overlay = self.overlays.get(kind);
        style.merge(&overlay.overrides);
        doc.apply_style(&overlay.id, &style);
    }

    // ------------------------------------------------------------------
    // Scroll synchronization
    // ------------------------------------------------------------------

    fn on_container_scroll(&mut self, doc: &mut Document) {
        let target = self.resolved.container.target();
        let left = doc.scroll_position(&target).map(|s| s.left).unwrap_or(0.0);
        self.horizontally_scrolled = left > 0.0;
        self.sync(doc);
    }

    fn on_scroll_bar_scroll(&mut self, doc: &mut Document) {
        let Some(id) = self.overlay_id(OverlayKind::ScrollBar) else {
            return;
        };
        let Some(bar) = doc.scroll_position(&Target::element(id)) else {
            return;
        };
        let wrapper = Target::element(self.wrapper_id.clone());
        let top = doc.scroll_position(&wrapper).map(|s| s.top).unwrap_or(0.0);
        doc.set_scroll(&wrapper, bar.left, top);
    }

    /// Mirror the wrapper's scroll offset into the overlays, then decide
    /// visibility and placement from the mirrored state.
    fn sync(&mut self, doc: &mut Document) {
        let Some(wrapper_scroll) = doc.scroll_position(&Target::element(self.wrapper_id.clone()))
        else {
            return;
        };
        self.mirror(doc, wrapper_scroll.left, wrapper_scroll.top);

        let Some(m) = self.measure(doc) else {
            return;
        };
        let tick = Tick {
            m: &m,
            wrapper_scroll,
            horizontally_scrolled: self.horizontally_scrolled,
        };

        let options = self.resolved.options.clone();
        for kind in OverlayKind::ORDER {
            if !self.overlays.is_built(kind) {
                continue;
            }
            let visible = tick.visible(kind, &options);
            let mut style = tick.placement(kind, &options);
            style.set("visibility", if visible { "visible" } else { "hidden" });
            self.apply(doc, kind, style);

            let overlay = self.overlays.get_mut(kind);
            let state = if visible {
                OverlayState::Visible
            } else {
                OverlayState::Hidden
            };
            if overlay.state != state {
                log::trace!("[sync] {:?} {:?} -> {:?}", kind, overlay.state, state);
                overlay.state = state;
            }
        }
    }

    fn mirror(&self, doc: &mut Document, left: f64, top: f64) {
        if let Some(id) = self.overlay_id(OverlayKind::Head) {
            doc.set_scroll(&Target::element(id), left, 0.0);
        }
        if let Some(id) = self.overlay_id(OverlayKind::ScrollBar) {
            doc.set_scroll(&Target::element(id), left, 0.0);
        }
        if self.resolved.options.scrollable {
            if let Some(id) = self.overlay_id(OverlayKind::Column) {
                doc.set_scroll(&Target::element(id), 0.0, top);
            }
        }
    }
}

/// Check `wrapper > table > (thead, tbody)` and return the table's id.
/// Drain the document queue and hand every batch to each widget in turn,
/// until the document is quiet. Mirroring can queue follow-up events
/// (scrollbar -> wrapper); those go round again to every widget.
pub fn pump(doc: &mut Document, tables: &mut [&mut FreezeTable]) {
    while doc.has_pending_events() {
        let events = doc.take_events();
        for table in tables.iter_mut() {
            table.process_events(doc, &events);
        }
    }
}

fn validate_structure(doc: &Document, wrapper_id: &str) -> Result<String, StructuralError> {
    let wrapper = doc
        .get(wrapper_id)
        .ok_or_else(|| StructuralError::WrapperNotFound(wrapper_id.to_string()))?;
    let table = wrapper
        .first_child()
        .ok_or_else(|| StructuralError::MissingTable(wrapper_id.to_string()))?;

    if !table.is("table") {
        return Err(StructuralError::NotATable(table.id.clone()));
    }

    let has_head = table.children_by_tag("thead").next().is_some();
    let has_body = table.children_by_tag("tbody").next().is_some();
    if !has_head || !has_body {
        return Err(StructuralError::MissingSections(table.id.clone()));
    }

    Ok(table.id.clone())
}
