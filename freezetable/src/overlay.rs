use tabledom::Style;

/// The four overlays a widget can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Head,
    Column,
    ColumnHead,
    ScrollBar,
}

impl OverlayKind {
    /// Build and geometry order. The corner reads the column overlay's
    /// computed width, so it must come after head and column.
    pub const ORDER: [OverlayKind; 4] = [
        OverlayKind::Head,
        OverlayKind::Column,
        OverlayKind::ColumnHead,
        OverlayKind::ScrollBar,
    ];

    /// Class marker on the overlay's wrapper element.
    pub fn class(self) -> &'static str {
        match self {
            OverlayKind::Head => "clone-head-table-wrap",
            OverlayKind::Column => "clone-column-table-wrap",
            OverlayKind::ColumnHead => "clone-column-head-table-wrap",
            OverlayKind::ScrollBar => "clone-scroll-bar-wrap",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            OverlayKind::Head => "head",
            OverlayKind::Column => "column",
            OverlayKind::ColumnHead => "column-head",
            OverlayKind::ScrollBar => "scroll-bar",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Stacking order; the corner sits above both strips it joins.
    pub(crate) fn z_index(self) -> &'static str {
        match self {
            OverlayKind::Column => "1",
            OverlayKind::Head | OverlayKind::ScrollBar => "2",
            OverlayKind::ColumnHead => "3",
        }
    }

    pub(crate) fn shadow(self) -> &'static str {
        match self {
            OverlayKind::Head => "0px 6px 10px -5px rgba(159, 159, 160, 0.8)",
            OverlayKind::Column => "6px 0px 10px -5px rgba(159, 159, 160, 0.8)",
            OverlayKind::ColumnHead => "6px 6px 10px -5px rgba(159, 159, 160, 0.8)",
            OverlayKind::ScrollBar => "0px -6px 10px -5px rgba(159, 159, 160, 0.8)",
        }
    }
}

/// `Unbuilt → Hidden → Visible ⇄ Hidden`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Unbuilt,
    Hidden,
    Visible,
}

impl OverlayState {
    pub fn is_built(self) -> bool {
        self != OverlayState::Unbuilt
    }

    pub fn is_visible(self) -> bool {
        self == OverlayState::Visible
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Overlay {
    /// Id of the overlay's wrapper element in the document.
    pub id: String,
    pub state: OverlayState,
    /// Caller overrides, applied after every built-in declaration.
    pub overrides: Style,
}

/// One slot per [`OverlayKind`].
#[derive(Debug, Clone)]
pub(crate) struct Overlays {
    slots: [Overlay; 4],
}

impl Overlays {
    pub fn new(wrapper_id: &str, overrides: impl Fn(OverlayKind) -> Style) -> Self {
        let slot = |kind: OverlayKind| Overlay {
            id: format!("{wrapper_id}-{}-overlay", kind.slug()),
            state: OverlayState::Unbuilt,
            overrides: overrides(kind),
        };
        Self {
            slots: OverlayKind::ORDER.map(slot),
        }
    }

    pub fn get(&self, kind: OverlayKind) -> &Overlay {
        &self.slots[kind.index()]
    }

    pub fn get_mut(&mut self, kind: OverlayKind) -> &mut Overlay {
        &mut self.slots[kind.index()]
    }

    pub fn is_built(&self, kind: OverlayKind) -> bool {
        self.get(kind).state.is_built()
    }

    /// Built overlays in declared order.
    pub fn built(&self) -> impl Iterator<Item = &Overlay> {
        self.slots.iter().filter(|o| o.state.is_built())
    }
}
