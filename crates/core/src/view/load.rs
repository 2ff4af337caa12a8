//! Mount/load lifecycle shared by the page controllers.
//!
//! A page hands out a [`LoadTicket`] when it starts a read and only applies
//! the result if the ticket is still current. Starting a newer load or
//! unmounting the page invalidates every outstanding ticket, so a response
//! that arrives late is dropped instead of being written into a page nobody
//! is looking at.

/// Proof that a load was started for a particular page epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Where a page is in its initial fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A read is in flight.
    Loading,
    /// The last read succeeded.
    Loaded,
    /// The last read failed; whatever was stored before is kept.
    Failed,
}

/// Epoch counter plus load state for one page instance.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    epoch: u64,
    state: LoadState,
    unmounted: bool,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, invalidating any earlier ticket. Starting a load on an
    /// unmounted page mounts it again.
    pub const fn begin(&mut self) -> LoadTicket {
        self.epoch += 1;
        self.unmounted = false;
        self.state = LoadState::Loading;
        LoadTicket(self.epoch)
    }

    /// Returns `true` if a result carrying `ticket` should still be applied.
    #[must_use]
    pub const fn accepts(&self, ticket: LoadTicket) -> bool {
        !self.unmounted && ticket.0 == self.epoch
    }

    /// Record the outcome of a load. Returns `false` (and changes nothing)
    /// for a stale ticket.
    pub const fn finish(&mut self, ticket: LoadTicket, succeeded: bool) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.state = if succeeded {
            LoadState::Loaded
        } else {
            LoadState::Failed
        };
        true
    }

    /// Tear the page down. Outstanding tickets become stale.
    pub const fn unmount(&mut self) {
        self.epoch += 1;
        self.unmounted = true;
    }

    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        !self.unmounted
    }
}

/// What a list section should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<'a, T> {
    /// Spinner.
    Loading,
    /// The "no results" branch. Also shown after a failed fetch.
    Empty,
    /// The visible subset, in stored order.
    Items(Vec<&'a T>),
}

impl<'a, T> ListView<'a, T> {
    /// Choose the branch for a derived subset.
    #[must_use]
    pub fn new(loading: bool, items: Vec<&'a T>) -> Self {
        if loading {
            Self::Loading
        } else if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }

    #[must_use]
    pub const fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The rendered items, empty for the loading and empty branches.
    #[must_use]
    pub fn items(&self) -> &[&'a T] {
        match self {
            Self::Items(items) => items,
            Self::Loading | Self::Empty => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_applies_current_ticket() {
        let mut lifecycle = Lifecycle::new();
        let ticket = lifecycle.begin();
        assert!(lifecycle.is_loading());
        assert!(lifecycle.finish(ticket, true));
        assert_eq!(lifecycle.state(), LoadState::Loaded);
    }

    #[test]
    fn test_newer_load_invalidates_older_ticket() {
        let mut lifecycle = Lifecycle::new();
        let first = lifecycle.begin();
        let second = lifecycle.begin();
        assert!(!lifecycle.finish(first, true));
        assert!(lifecycle.is_loading());
        assert!(lifecycle.finish(second, false));
        assert_eq!(lifecycle.state(), LoadState::Failed);
    }

    #[test]
    fn test_unmount_drops_late_results() {
        let mut lifecycle = Lifecycle::new();
        let ticket = lifecycle.begin();
        lifecycle.unmount();
        assert!(!lifecycle.accepts(ticket));
        assert!(!lifecycle.finish(ticket, true));
        assert!(!lifecycle.is_mounted());
    }

    #[test]
    fn test_remount_accepts_fresh_load() {
        let mut lifecycle = Lifecycle::new();
        let stale = lifecycle.begin();
        lifecycle.unmount();

        let fresh = lifecycle.begin();
        assert!(lifecycle.is_mounted());
        assert!(!lifecycle.finish(stale, true));
        assert!(lifecycle.finish(fresh, true));
        assert_eq!(lifecycle.state(), LoadState::Loaded);
    }

    #[test]
    fn test_list_view_branches() {
        let values = [1, 2];
        assert_eq!(ListView::<i32>::new(true, vec![&values[0]]), ListView::Loading);
        assert!(ListView::<i32>::new(false, Vec::new()).is_empty_state());
        let view = ListView::new(false, values.iter().collect());
        assert_eq!(view.items(), &[&1, &2]);
    }
}
