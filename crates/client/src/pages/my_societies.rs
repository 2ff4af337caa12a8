//! "My societies" page: the viewer's societies split by role.

use std::collections::HashSet;

use tracing::{debug, error, info};

use societies_core::view::{
    Lifecycle, ListView, LoadState, LoadTicket, QuickStats, RoleFilter, SocietyCard,
    filter_societies, partition_by_role,
};
use societies_core::{Route, Society, SocietyId};

use crate::api::{ApiError, SocietiesApi};

#[derive(Debug, Default)]
pub struct MySocietiesPage {
    lifecycle: Lifecycle,
    societies: Vec<Society>,
    filter: RoleFilter,
    join_requested: HashSet<SocietyId>,
}

impl MySocietiesPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the viewer's societies once. Failures are logged and leave the
    /// stored list as it was.
    pub async fn mount<A: SocietiesApi>(&mut self, api: &A) {
        let ticket = self.begin_load();
        let result = api.societies_by_user().await;
        self.finish_load(ticket, result);
    }

    pub const fn begin_load(&mut self) -> LoadTicket {
        self.lifecycle.begin()
    }

    /// Apply a fetch result. Returns `false` if the ticket is stale.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Society>, ApiError>,
    ) -> bool {
        if !self.lifecycle.accepts(ticket) {
            debug!("Ignoring stale societies response");
            return false;
        }
        let succeeded = match result {
            Ok(societies) => {
                debug!(count = societies.len(), "Societies loaded");
                self.societies = societies;
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch societies");
                false
            }
        };
        self.lifecycle.finish(ticket, succeeded)
    }

    pub const fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    #[must_use]
    pub const fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Nothing has arrived yet: before mount or while the fetch is out.
    const fn pending(&self) -> bool {
        matches!(self.lifecycle.state(), LoadState::Idle | LoadState::Loading)
    }

    #[must_use]
    pub fn societies(&self) -> &[Society] {
        &self.societies
    }

    #[must_use]
    pub const fn filter(&self) -> RoleFilter {
        self.filter
    }

    pub const fn set_filter(&mut self, filter: RoleFilter) {
        self.filter = filter;
    }

    /// Societies under the current role filter.
    #[must_use]
    pub fn visible(&self) -> ListView<'_, Society> {
        ListView::new(self.pending(), filter_societies(&self.societies, self.filter))
    }

    #[must_use]
    pub fn admin_view(&self) -> ListView<'_, Society> {
        let (admin, _) = partition_by_role(&self.societies);
        ListView::new(self.pending(), admin)
    }

    #[must_use]
    pub fn member_view(&self) -> ListView<'_, Society> {
        let (_, member) = partition_by_role(&self.societies);
        ListView::new(self.pending(), member)
    }

    #[must_use]
    pub fn stats(&self) -> QuickStats {
        QuickStats::from_societies(&self.societies)
    }

    /// Cards for the visible societies.
    #[must_use]
    pub fn cards(&self) -> Vec<SocietyCard> {
        self.visible()
            .items()
            .iter()
            .map(|society| {
                let mut card = SocietyCard::new(society);
                if self.join_requested.contains(&society.id) {
                    card.join();
                }
                card
            })
            .collect()
    }

    /// Press a card's join button. Local only, nothing is sent.
    pub fn join(&mut self, society: SocietyId) -> bool {
        if !self.societies.iter().any(|s| s.id == society) {
            return false;
        }
        let first = self.join_requested.insert(society);
        if first {
            info!(%society, "Join requested (local only)");
        }
        first
    }

    /// Route for a card click.
    #[must_use]
    pub const fn open(&self, society: SocietyId) -> Route {
        Route::Society(society)
    }

    /// Route for the search box, `None` for a blank query.
    #[must_use]
    pub fn search(&self, query: &str) -> Option<Route> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(Route::Search(query.to_string()))
    }
}
