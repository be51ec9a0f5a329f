use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Utc;

use super::invite::format_start;
use crate::auth::session::get_member_identity;
use crate::config::AppConfig;
use crate::errors::{render, AppError};
use crate::models::meeting::{classify, LifecycleState, MeetingRecord};
use crate::services::CallServiceClient;
use crate::templates_structs::{MeetingListItem, MeetingsListTemplate, PageContext};

/// GET /meetings — the signed-in user's meetings, upcoming and past.
pub async fn list(
    config: web::Data<AppConfig>,
    call_client: web::Data<CallServiceClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let identity = get_member_identity(&session).ok_or(AppError::Unauthenticated)?;

    let mut meetings = call_client.query_by_member(&identity.id).await?;
    let now = Utc::now();
    meetings.sort_by_key(|m| m.starts_at.unwrap_or(now));

    let mut upcoming = Vec::new();
    let mut past = Vec::new();
    for meeting in meetings {
        match classify(meeting.starts_at, meeting.ended_at, now) {
            LifecycleState::Ended => past.push(list_item(meeting, "ended")),
            LifecycleState::Upcoming => upcoming.push(list_item(meeting, "upcoming")),
            LifecycleState::Live => upcoming.push(list_item(meeting, "live")),
        }
    }
    // Most recently ended first
    past.reverse();

    let tmpl = MeetingsListTemplate {
        ctx: PageContext::from_session(&session, &config.app_name),
        upcoming,
        past,
    };
    render(tmpl)
}

fn list_item(meeting: MeetingRecord, status: &str) -> MeetingListItem {
    let title = meeting
        .description
        .clone()
        .unwrap_or_else(|| format!("Meeting {}", &meeting.id));
    let when_label = meeting
        .starts_at
        .map(format_start)
        .unwrap_or_else(|| "—".to_string());
    MeetingListItem {
        id: meeting.id,
        title,
        when_label,
        status: status.to_string(),
    }
}
