//! "My societies" listing.

use societies_client::ApiClient;
use societies_client::pages::MySocietiesPage;
use societies_core::view::RoleFilter;

use crate::render;

/// Print the viewer's societies under `role`. With `search`, also print the
/// search route the query navigates to.
pub async fn list(api: &ApiClient, role: RoleFilter, search: Option<&str>) {
    let mut page = MySocietiesPage::new();
    page.mount(api).await;
    page.set_filter(role);

    render::quick_stats(&page.stats());
    match role {
        RoleFilter::All => {
            render::section("As admin");
            render::society_cards(&page.admin_view(), &page.cards());
            render::section("As member");
            render::society_cards(&page.member_view(), &page.cards());
        }
        RoleFilter::Admin | RoleFilter::Member => {
            render::section(&format!("Role: {role}"));
            render::society_cards(&page.visible(), &page.cards());
        }
    }

    if let Some(route) = search.and_then(|query| page.search(query)) {
        render::line(&format!("Search: {route}"));
    }
    page.unmount();
}
