use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::errors::AppError;
use crate::models::meeting::classify;
use crate::services::CallServiceClient;

/// GET /meeting/{id}/state — live-state poll target for the meeting page.
///
/// The page script watches the lifecycle field and reloads when it changes
/// (a scheduled meeting going live, a live meeting being force-ended).
pub async fn live_state(
    call_client: web::Data<CallServiceClient>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = path.into_inner();

    let body = match call_client.fetch(&meeting_id).await? {
        None => serde_json::json!({ "found": false }),
        Some(meeting) => {
            let lifecycle = classify(meeting.starts_at, meeting.ended_at, Utc::now());
            serde_json::json!({
                "found": true,
                "lifecycle": lifecycle,
                "starts_at": meeting.starts_at,
                "ended_at": meeting.ended_at,
                "participant_count": meeting.participant_count,
            })
        }
    };

    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(body))
}
