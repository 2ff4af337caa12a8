//! Support page: contact form and FAQs.

use tracing::{error, info};

use societies_core::view::{ContactForm, ContactPanel, FaqBrowser};
use societies_core::Route;

use crate::api::SocietiesApi;

#[derive(Debug, Default)]
pub struct SupportPage {
    contact: ContactPanel,
    faqs: FaqBrowser,
}

impl SupportPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactPanel {
        &self.contact
    }

    /// The editable form, `None` while the confirmation panel shows.
    pub fn form_mut(&mut self) -> Option<&mut ContactForm> {
        self.contact.form_mut()
    }

    #[must_use]
    pub const fn faqs(&self) -> &FaqBrowser {
        &self.faqs
    }

    pub const fn faqs_mut(&mut self) -> &mut FaqBrowser {
        &mut self.faqs
    }

    /// Submit the form as a ticket. On success the form is replaced by the
    /// confirmation panel; failures are logged and the form is kept.
    pub async fn submit<A: SocietiesApi>(&mut self, api: &A) -> bool {
        let Some(form) = self.contact.form() else {
            return false;
        };
        let ticket = form.to_ticket();

        match api.create_ticket(&ticket).await {
            Ok(()) => {
                info!(category = %ticket.category, "Support ticket submitted");
                self.contact.mark_submitted();
                true
            }
            Err(e) => {
                error!(category = %ticket.category, error = %e, "Failed to submit support ticket");
                false
            }
        }
    }

    /// The confirmation panel's "send another" action.
    pub fn reset(&mut self) {
        self.contact.reset();
    }

    /// Link to the account page.
    #[must_use]
    pub const fn account_route(&self) -> Route {
        Route::Account
    }
}
