use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::session::get_member_identity;
use crate::errors::AppError;
use crate::services::{token, CallServiceClient};

/// GET /api/token — sign a connection token for the vendor widget's
/// handshake. Guests and anonymous visitors get UNAUTHENTICATED; they
/// connect tokenless on the provider's guest path.
pub async fn issue(
    call_client: web::Data<CallServiceClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let identity = get_member_identity(&session).ok_or(AppError::Unauthenticated)?;

    let token = token::issue(call_client.api_secret(), &identity.id)?;
    log::debug!("Issued connection token for user {}", identity.id);

    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(serde_json::json!({ "token": token })))
}
