//! Contact form and FAQ browser state.

use std::collections::HashSet;

use crate::types::{BUNDLED_FAQS, Faq, FaqId, SupportTicket, TicketCategory};

/// The controlled contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub category: TicketCategory,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub const fn set_category(&mut self, category: TicketCategory) {
        self.category = category;
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Names of required fields that are still blank.
    ///
    /// Informational only: submission is not blocked on it.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.subject.trim().is_empty() {
            missing.push("subject");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }

    #[must_use]
    pub fn to_ticket(&self) -> SupportTicket {
        SupportTicket {
            category: self.category,
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// The contact section: either the form or the confirmation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactPanel {
    Form(ContactForm),
    Submitted,
}

impl Default for ContactPanel {
    fn default() -> Self {
        Self::Form(ContactForm::default())
    }
}

impl ContactPanel {
    /// The editable form, if the form is showing.
    pub fn form_mut(&mut self) -> Option<&mut ContactForm> {
        match self {
            Self::Form(form) => Some(form),
            Self::Submitted => None,
        }
    }

    #[must_use]
    pub const fn form(&self) -> Option<&ContactForm> {
        match self {
            Self::Form(form) => Some(form),
            Self::Submitted => None,
        }
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Swap the form for the confirmation panel.
    pub fn mark_submitted(&mut self) {
        *self = Self::Submitted;
    }

    /// The confirmation panel's reset action: back to a blank form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Expand/collapse and search state over the bundled FAQs.
#[derive(Debug, Clone, Default)]
pub struct FaqBrowser {
    open: HashSet<FaqId>,
    query: String,
}

impl FaqBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one entry. Returns whether it is now open.
    pub fn toggle(&mut self, id: FaqId) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_open(&self, id: FaqId) -> bool {
        self.open.contains(&id)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// FAQs whose question or answer contains the query (case-insensitive).
    #[must_use]
    pub fn visible(&self) -> Vec<&'static Faq> {
        let needle = self.query.trim().to_lowercase();
        BUNDLED_FAQS
            .iter()
            .filter(|faq| {
                needle.is_empty()
                    || faq.question.to_lowercase().contains(&needle)
                    || faq.answer.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
