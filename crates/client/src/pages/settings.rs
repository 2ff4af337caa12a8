//! Society settings page.

use tracing::{debug, error, info};

use societies_core::view::{
    Lifecycle, LoadTicket, SettingsEditor, SettingsPathError, SettingsTab, SettingsUpdate, Toast,
    Toasts,
};
use societies_core::{Route, SocietyId, SocietyInfo, SocietySettings};

use crate::api::{ApiError, SocietiesApi};

#[derive(Debug)]
pub struct SettingsPage {
    society_id: SocietyId,
    lifecycle: Lifecycle,
    editor: SettingsEditor,
    toasts: Toasts,
}

impl SettingsPage {
    /// Page over the hard-coded defaults until the fetch lands.
    #[must_use]
    pub fn new(society_id: SocietyId) -> Self {
        Self {
            society_id,
            lifecycle: Lifecycle::new(),
            editor: SettingsEditor::new(),
            toasts: Toasts::default(),
        }
    }

    #[must_use]
    pub const fn society_id(&self) -> SocietyId {
        self.society_id
    }

    pub async fn mount<A: SocietiesApi>(&mut self, api: &A) {
        let ticket = self.begin_load();
        let result = api.society_info(self.society_id).await;
        self.finish_load(ticket, result);
    }

    pub const fn begin_load(&mut self) -> LoadTicket {
        self.lifecycle.begin()
    }

    /// Apply a fetch result. On failure the form keeps what it had.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<SocietyInfo, ApiError>,
    ) -> bool {
        if !self.lifecycle.accepts(ticket) {
            debug!(society = %self.society_id, "Ignoring stale settings response");
            return false;
        }
        let succeeded = match result {
            Ok(info) => {
                self.editor.load(info.into_settings());
                true
            }
            Err(e) => {
                error!(society = %self.society_id, error = %e, "Failed to fetch society settings");
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

    #[must_use]
    pub const fn editor(&self) -> &SettingsEditor {
        &self.editor
    }

    #[must_use]
    pub const fn settings(&self) -> &SocietySettings {
        self.editor.settings()
    }

    #[must_use]
    pub const fn tab(&self) -> SettingsTab {
        self.editor.tab()
    }

    pub const fn select_tab(&mut self, tab: SettingsTab) {
        self.editor.select_tab(tab);
    }

    pub fn update(&mut self, update: SettingsUpdate) {
        self.editor.update(update);
    }

    /// Apply a `group.field=value` assignment.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown path or a value of the wrong shape.
    pub fn assign(&mut self, assignment: &str) -> Result<(), SettingsPathError> {
        self.update(SettingsUpdate::parse_assignment(assignment)?);
        Ok(())
    }

    /// Send the whole settings object, whichever tab is showing.
    pub async fn save<A: SocietiesApi>(&mut self, api: &A) -> bool {
        match api.update_info(self.society_id, self.editor.settings()).await {
            Ok(()) => {
                self.toasts.success("Settings saved");
                true
            }
            Err(e) => {
                error!(society = %self.society_id, error = %e, "Failed to save society settings");
                self.toasts.error("Could not save settings");
                false
            }
        }
    }

    #[must_use]
    pub const fn is_delete_confirmation_open(&self) -> bool {
        self.editor.is_delete_confirmation_open()
    }

    pub const fn request_delete(&mut self) {
        self.editor.open_delete_confirmation();
    }

    pub const fn cancel_delete(&mut self) {
        self.editor.cancel_delete();
    }

    /// Confirm the delete overlay. No delete endpoint exists; this only
    /// closes the overlay.
    pub fn confirm_delete(&mut self) -> bool {
        let confirmed = self.editor.confirm_delete();
        if confirmed {
            info!(society = %self.society_id, "Society deletion confirmed; no request sent");
        }
        confirmed
    }

    /// Leave the society. Returns the route to navigate to on success.
    pub async fn leave<A: SocietiesApi>(&self, api: &A) -> Option<Route> {
        match api.leave_society(self.society_id).await {
            Ok(()) => Some(Route::Societies),
            Err(e) => {
                error!(society = %self.society_id, error = %e, "Failed to leave society");
                None
            }
        }
    }

    /// Take the pending toasts, oldest first.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }
}
