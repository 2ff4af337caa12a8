//! Join request listing and decisions.

use societies_client::ApiClient;
use societies_client::pages::JoinRequestsPage;
use societies_core::view::{DecisionKind, DecisionPhase, StatusFilter};
use societies_core::{JoinRequestId, SocietyId};

use super::CommandError;
use crate::render;

pub async fn list(
    api: &ApiClient,
    society: SocietyId,
    status: StatusFilter,
    show: Option<JoinRequestId>,
) -> Result<(), CommandError> {
    let mut page = JoinRequestsPage::new(society);
    page.mount(api).await;
    page.set_filter(status);

    render::request_stats(&page.stats());
    render::section(&format!("Requests: {status}"));
    render::requests(&page.visible());

    if let Some(request) = show {
        if !page.select(request) {
            tracing::warn!(%request, "Join request not found");
        }
    }
    render::section("Details");
    render::request_details(page.selected());
    page.unmount();
    Ok(())
}

pub async fn approve(
    api: &ApiClient,
    society: SocietyId,
    request: JoinRequestId,
) -> Result<(), CommandError> {
    decide(api, society, request, DecisionKind::Approve).await
}

pub async fn reject(
    api: &ApiClient,
    society: SocietyId,
    request: JoinRequestId,
) -> Result<(), CommandError> {
    decide(api, society, request, DecisionKind::Reject).await
}

async fn decide(
    api: &ApiClient,
    society: SocietyId,
    request: JoinRequestId,
    kind: DecisionKind,
) -> Result<(), CommandError> {
    let mut page = JoinRequestsPage::new(society);
    page.mount(api).await;
    page.select(request);

    let phase = page.decide(api, request, kind).await?;
    render::request_details(page.requests().iter().find(|r| r.id == request));
    page.unmount();

    match phase {
        DecisionPhase::Confirmed => {
            render::line(&format!("Request {request}: {} confirmed", kind.target()));
            Ok(())
        }
        DecisionPhase::Applying | DecisionPhase::Failed { .. } => {
            Err(CommandError::Rejected("Join request decision"))
        }
    }
}
