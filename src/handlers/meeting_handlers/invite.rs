use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Local, Utc};

use crate::config::AppConfig;
use crate::errors::{render, AppError};
use crate::models::meeting::MeetingVisibility;
use crate::services::CallServiceClient;
use crate::templates_structs::{InviteTemplate, PageContext};

/// GET /meeting/{id}/invite — shareable link plus a prefilled email draft.
pub async fn invite_page(
    config: web::Data<AppConfig>,
    call_client: web::Data<CallServiceClient>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = path.into_inner();
    let meeting = call_client
        .fetch(&meeting_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let meeting_link = format!("{}/meeting/{}", config.base_url, meeting.id);
    let starts_at_label = meeting.starts_at.map(format_start);
    let mailto_link = mailto(
        &meeting_link,
        starts_at_label.as_deref(),
        meeting.description.as_deref(),
    );

    let tmpl = InviteTemplate {
        ctx: PageContext::from_session(&session, &config.app_name),
        meeting_link,
        mailto_link,
        starts_at_label,
        description: meeting.description.clone(),
        private: meeting.visibility == MeetingVisibility::Private,
        member_count: meeting.members.len(),
    };
    render(tmpl)
}

/// Human-readable start time in the server's local zone.
pub fn format_start(starts_at: DateTime<Utc>) -> String {
    starts_at
        .with_timezone(&Local)
        .format("%A, %B %e, %Y at %H:%M")
        .to_string()
}

/// Build the `mailto:` invitation the way the create page offers it:
/// subject and body carry the link, start time, and description.
pub fn mailto(meeting_link: &str, starts_at_label: Option<&str>, description: Option<&str>) -> String {
    let subject = match starts_at_label {
        Some(when) => format!("Join meeting at {when}"),
        None => "Join meeting".to_string(),
    };
    let mut body = format!("Join meeting at {meeting_link}.");
    if let Some(when) = starts_at_label {
        body.push_str(&format!("\n\nThe meeting starts at {when}."));
    }
    if let Some(desc) = description {
        body.push_str(&format!("\n\nDescription: {desc}"));
    }
    format!(
        "mailto:?subject={}&body={}",
        escape_component(&subject),
        escape_component(&body)
    )
}

/// Percent-escape a mailto component. `byte_serialize` emits '+' for
/// spaces, which mail clients take literally, so swap those for %20.
fn escape_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
