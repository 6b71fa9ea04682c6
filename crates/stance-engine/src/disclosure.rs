//! Disclosure state: which single event, if any, is shown expanded.

use crate::event::EventId;
use tracing::debug;

/// Rendering state of one event's detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Collapsed,
    Expanded,
}

/// Holds at most one open event id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: Option<EventId>,
}

impl Disclosure {
    /// Create a controller with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `id`, or close it if it is already open.
    pub fn toggle(&mut self, id: EventId) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
        debug!(%id, open = ?self.open, "toggled disclosure");
    }

    /// Close whatever is open.
    pub fn close(&mut self) {
        if let Some(id) = self.open {
            self.toggle(id);
        }
    }

    /// The currently open event.
    pub fn open(&self) -> Option<EventId> {
        self.open
    }

    /// Check if `id` is the open event.
    pub fn is_open(&self, id: EventId) -> bool {
        self.open == Some(id)
    }

    /// Panel state for `id`.
    pub fn panel(&self, id: EventId) -> Panel {
        if self.is_open(id) {
            Panel::Expanded
        } else {
            Panel::Collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: EventId = EventId(1);
    const B: EventId = EventId(2);

    #[test]
    fn test_starts_closed() {
        let d = Disclosure::new();
        assert_eq!(d.open(), None);
        assert_eq!(d.panel(A), Panel::Collapsed);
    }

    #[test]
    fn test_toggle_same_twice_closes() {
        let mut d = Disclosure::new();
        d.toggle(A);
        assert!(d.is_open(A));
        assert_eq!(d.panel(A), Panel::Expanded);

        d.toggle(A);
        assert_eq!(d.open(), None);
    }

    #[test]
    fn test_toggle_other_switches() {
        let mut d = Disclosure::new();
        d.toggle(A);
        d.toggle(B);
        assert_eq!(d.open(), Some(B));
        assert!(!d.is_open(A));
        assert_eq!(d.panel(A), Panel::Collapsed);
        assert_eq!(d.panel(B), Panel::Expanded);
    }

    #[test]
    fn test_at_most_one_expanded() {
        let ids: Vec<EventId> = (1..=5).map(EventId).collect();
        let mut d = Disclosure::new();
        for &id in ids.iter().chain(ids.iter().rev()).chain([EventId(3), EventId(3)].iter()) {
            d.toggle(id);
            let expanded = ids.iter().filter(|&&i| d.panel(i) == Panel::Expanded).count();
            assert!(expanded <= 1);
        }
    }

    #[test]
    fn test_close() {
        let mut d = Disclosure::new();
        d.close();
        assert_eq!(d.open(), None);

        d.toggle(B);
        d.close();
        assert_eq!(d.open(), None);
    }
}
