//! Society settings commands.

use societies_client::ApiClient;
use societies_client::pages::SettingsPage;
use societies_core::SocietyId;
use societies_core::view::SettingsTab;

use super::CommandError;
use crate::render;

pub async fn show(api: &ApiClient, society: SocietyId, tab: SettingsTab) {
    let mut page = SettingsPage::new(society);
    page.mount(api).await;
    page.select_tab(tab);
    render::settings_panel(page.tab(), page.settings());
    page.unmount();
}

/// Apply every edit, then save the full settings object once.
pub async fn set(
    api: &ApiClient,
    society: SocietyId,
    assignments: &[String],
) -> Result<(), CommandError> {
    let mut page = SettingsPage::new(society);
    page.mount(api).await;

    for assignment in assignments {
        page.assign(assignment)?;
    }

    let saved = page.save(api).await;
    render::toasts(&page.drain_toasts());
    page.unmount();

    if saved {
        Ok(())
    } else {
        Err(CommandError::Rejected("Saving settings"))
    }
}

pub async fn leave(api: &ApiClient, society: SocietyId) -> Result<(), CommandError> {
    let page = SettingsPage::new(society);
    match page.leave(api).await {
        Some(route) => {
            render::line(&format!("Left society {society}. Continue at {route}"));
            Ok(())
        }
        None => Err(CommandError::Rejected("Leaving the society")),
    }
}

/// Open the delete confirmation and, with `confirm`, accept it. Nothing is
/// sent to the backend either way.
pub async fn delete(api: &ApiClient, society: SocietyId, confirm: bool) {
    let mut page = SettingsPage::new(society);
    page.mount(api).await;
    page.select_tab(SettingsTab::Danger);
    page.request_delete();

    if confirm {
        page.confirm_delete();
        render::line(
            "Deletion confirmed. Society deletion is not available yet; nothing was sent.",
        );
    } else {
        page.cancel_delete();
        render::line(&format!(
            "Deleting \"{}\" cannot be undone. Re-run with --confirm to proceed.",
            page.settings().general.name
        ));
    }
    page.unmount();
}
