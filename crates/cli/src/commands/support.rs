//! Support commands.

use societies_client::ApiClient;
use societies_client::pages::SupportPage;
use societies_core::TicketCategory;
use societies_core::view::FaqBrowser;

use super::CommandError;
use crate::render;

pub async fn ticket(
    api: &ApiClient,
    category: TicketCategory,
    subject: String,
    message: String,
) -> Result<(), CommandError> {
    let mut page = SupportPage::new();
    if let Some(form) = page.form_mut() {
        form.set_category(category);
        form.set_subject(subject);
        form.set_message(message);
        for field in form.missing_required() {
            tracing::warn!(field, "Required field is blank");
        }
    }

    if page.submit(api).await {
        render::line(&format!(
            "Thanks! Your {} ticket was sent. Manage your details at {}",
            category.label().to_lowercase(),
            page.account_route()
        ));
        Ok(())
    } else {
        Err(CommandError::Rejected("Submitting the ticket"))
    }
}

/// Print the bundled FAQs, expanded, filtered by `search`.
pub fn faqs(search: Option<&str>) {
    let mut browser = FaqBrowser::new();
    if let Some(query) = search {
        browser.set_query(query);
    }
    let visible = browser.visible();
    for faq in &visible {
        browser.toggle(faq.id);
    }
    render::faqs(&browser, &visible);
}
