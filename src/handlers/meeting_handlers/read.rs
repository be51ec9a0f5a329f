use actix_session::Session;
use actix_web::{web, HttpResponse};
use askama::Template;
use chrono::Utc;
use serde::Deserialize;

use super::invite::format_start;
use crate::auth::csrf;
use crate::auth::session::{get_identity, get_member_identity, mark_setup_complete, setup_complete};
use crate::config::AppConfig;
use crate::errors::{render, AppError};
use crate::models::meeting::{resolve, select_screen, AccessDecision, MeetingScreen};
use crate::services::call_service::JoinCallRequest;
use crate::services::CallServiceClient;
use crate::templates_structs::{
    MeetingDeniedTemplate, MeetingEndedTemplate, MeetingLiveTemplate, MeetingNotFoundTemplate,
    MeetingSetupTemplate, MeetingUpcomingTemplate, PageContext,
};

#[derive(Deserialize)]
pub struct JoinForm {
    pub csrf_token: String,
    /// "Disable microphone and camera" lobby checkbox.
    #[serde(default)]
    pub disable_av: Option<String>,
}

/// GET /meeting/{id} — run the screen state machine and render the result.
///
/// Identity is optional here: guests and anonymous visitors may view public
/// meetings. Visitors with no identity at all get the sign-in / guest
/// choice before anything else, since access cannot be classified without
/// knowing who is asking.
pub async fn meeting_page(
    config: web::Data<AppConfig>,
    call_client: web::Data<CallServiceClient>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = path.into_inner();

    if get_identity(&session).is_none() {
        let target = format!("/login?next=/meeting/{meeting_id}");
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", target))
            .finish());
    }

    let meeting = call_client.fetch(&meeting_id).await?;
    let requester = get_member_identity(&session);
    let now = Utc::now();
    let is_setup = setup_complete(&session, &meeting_id);

    let ctx = PageContext::from_session(&session, &config.app_name);
    let screen = select_screen(meeting.as_ref(), requester.as_ref(), now, is_setup);

    match (screen, meeting) {
        (MeetingScreen::NotFound, _) | (_, None) => {
            let body = MeetingNotFoundTemplate { ctx }.render()?;
            Ok(HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(body))
        }
        (MeetingScreen::Denied, Some(_)) => {
            let body = MeetingDeniedTemplate { ctx }.render()?;
            Ok(HttpResponse::Forbidden()
                .content_type("text/html; charset=utf-8")
                .body(body))
        }
        (MeetingScreen::Upcoming, Some(meeting)) => {
            let starts_at_label = meeting
                .starts_at
                .map(format_start)
                .unwrap_or_else(|| "soon".to_string());
            render(MeetingUpcomingTemplate {
                ctx,
                meeting_id: meeting.id,
                starts_at_label,
                description: meeting.description,
            })
        }
        (MeetingScreen::Ended, Some(_)) => render(MeetingEndedTemplate { ctx }),
        (MeetingScreen::Setup, Some(meeting)) => render(MeetingSetupTemplate {
            ctx,
            meeting_id: meeting.id,
            description: meeting.description,
        }),
        (MeetingScreen::Live, Some(meeting)) => render(MeetingLiveTemplate {
            ctx,
            meeting_id: meeting.id,
            description: meeting.description,
            participant_count: meeting.participant_count,
        }),
    }
}

/// POST /meeting/{id}/join — the one-way lobby→live transition.
///
/// Re-checks access against a fresh record, registers the join with the
/// call service, then marks device setup complete for this session. The
/// flag never reverts, so refreshing the page lands back in the call.
pub async fn join(
    call_client: web::Data<CallServiceClient>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<JoinForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let meeting_id = path.into_inner();
    let meeting = call_client
        .fetch(&meeting_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let requester = get_member_identity(&session);
    if resolve(&meeting, requester.as_ref()) == AccessDecision::Deny {
        return Err(AppError::AccessDenied);
    }

    let av_enabled = form.disable_av.is_none();
    let handle = call_client
        .join(
            &meeting_id,
            &JoinCallRequest {
                audio: av_enabled,
                video: av_enabled,
            },
        )
        .await?;
    log::info!(
        "Join handshake complete for meeting {meeting_id} (session {})",
        handle.session_id
    );

    mark_setup_complete(&session, &meeting_id);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/meeting/{meeting_id}")))
        .finish())
}
