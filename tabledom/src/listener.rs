use std::collections::BTreeMap;

use crate::event::{Event, EventKind, Target};

/// Handle returned when subscribing; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Subscriptions of interest in `(target, kind)` pairs.
///
/// The registry only records who listens to what; routing a matched event to
/// a handler is the subscriber's job.
#[derive(Debug, Default)]
pub struct Listeners {
    next: u64,
    entries: BTreeMap<ListenerId, (Target, EventKind)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: Target, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.entries.insert(id, (target, kind));
        id
    }

    /// Returns false if the listener was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Listeners subscribed to this event, in subscription order.
    pub fn matching(&self, event: &Event) -> Vec<ListenerId> {
        self.entries
            .iter()
            .filter(|(_, (target, kind))| target == event.target() && *kind == event.kind())
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_filters_by_target_and_kind() {
        let mut listeners = Listeners::new();
        let window_scroll = listeners.add(Target::Window, EventKind::Scroll);
        let _window_resize = listeners.add(Target::Window, EventKind::Resize);
        let _wrapper_scroll = listeners.add(Target::element("wrapper"), EventKind::Scroll);

        let event = Event::Scroll {
            target: Target::Window,
            left: 0.0,
            top: 10.0,
        };
        assert_eq!(listeners.matching(&event), vec![window_scroll]);
    }

    #[test]
    fn removed_listener_no_longer_matches() {
        let mut listeners = Listeners::new();
        let id = listeners.add(Target::Window, EventKind::Resize);
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert!(listeners.is_empty());
    }
}
