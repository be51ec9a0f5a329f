use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::csrf;
use crate::auth::session::{get_member_identity, set_flash};
use crate::auth::validate::{parse_starts_at, split_participant_emails, validate_description};
use crate::config::AppConfig;
use crate::errors::{render, AppError};
use crate::models::meeting::{dedup_members, MeetingMember, MeetingVisibility};
use crate::services::call_service::CreateCallRequest;
use crate::services::{CallServiceClient, IdentityClient};
use crate::templates_structs::{CreateMeetingTemplate, PageContext};

#[derive(Deserialize)]
pub struct CreateMeetingForm {
    pub csrf_token: String,
    #[serde(default)]
    pub description: String,
    /// datetime-local value; empty means start immediately.
    #[serde(default)]
    pub start_time: String,
    /// Comma- or newline-separated participant emails; empty means public.
    #[serde(default)]
    pub participants: String,
}

/// GET / — the create-meeting form.
pub async fn new_form(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let tmpl = CreateMeetingTemplate {
        ctx: PageContext::from_session(&session, &config.app_name),
        errors: Vec::new(),
        description: String::new(),
        start_time: String::new(),
        participants: String::new(),
    };
    render(tmpl)
}

/// POST /meetings — create a meeting on the call service.
///
/// A supplied participant list makes the meeting private; its emails are
/// resolved against the identity provider and unknown ones are dropped.
/// The member list is deduplicated with the creator always included.
pub async fn create(
    config: web::Data<AppConfig>,
    call_client: web::Data<CallServiceClient>,
    identity_client: web::Data<IdentityClient>,
    session: Session,
    form: web::Form<CreateMeetingForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let creator = get_member_identity(&session).ok_or(AppError::Unauthenticated)?;
    let now = Utc::now();

    let mut errors = Vec::new();
    if let Some(e) = validate_description(&form.description) {
        errors.push(e);
    }
    let starts_at = match parse_starts_at(&form.start_time, now) {
        Ok(parsed) => parsed,
        Err(e) => {
            errors.push(e);
            None
        }
    };

    if !errors.is_empty() {
        let tmpl = CreateMeetingTemplate {
            ctx: PageContext::from_session(&session, &config.app_name),
            errors,
            description: form.description.clone(),
            start_time: form.start_time.clone(),
            participants: form.participants.clone(),
        };
        return render(tmpl);
    }

    let emails = split_participant_emails(&form.participants);
    let visibility = if emails.is_empty() {
        MeetingVisibility::Public
    } else {
        MeetingVisibility::Private
    };

    let creation = async {
        let members = if visibility == MeetingVisibility::Private {
            let resolved = identity_client
                .resolve_emails(&emails)
                .await?
                .into_iter()
                .map(|id| MeetingMember::new(id.id))
                .collect();
            dedup_members(resolved, MeetingMember::new(creator.id.clone()))
        } else {
            Vec::new()
        };

        let description = {
            let trimmed = form.description.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let meeting_id = Uuid::new_v4().to_string();
        let req = CreateCallRequest {
            visibility,
            members,
            // Start-immediately meetings are live from the moment of creation
            starts_at: starts_at.unwrap_or(now),
            description,
        };
        call_client.create(&meeting_id, &req).await
    };

    match creation.await {
        Ok(record) => Ok(HttpResponse::SeeOther()
            .insert_header(("Location", format!("/meeting/{}/invite", record.id)))
            .finish()),
        Err(e) => {
            // Not retried; the user gets a generic notification
            log::error!("Meeting creation failed: {e}");
            set_flash(&session, "Failed to create meeting.");
            let tmpl = CreateMeetingTemplate {
                ctx: PageContext::from_session(&session, &config.app_name),
                errors: Vec::new(),
                description: form.description.clone(),
                start_time: form.start_time.clone(),
                participants: form.participants.clone(),
            };
            render(tmpl)
        }
    }
}
