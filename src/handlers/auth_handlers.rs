use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::{csrf, guest, session::set_identity};
use crate::config::AppConfig;
use crate::errors::{render, AppError};
use crate::services::IdentityClient;
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
    #[serde(default)]
    pub next: String,
}

#[derive(Deserialize)]
pub struct GuestForm {
    pub csrf_token: String,
    #[serde(default)]
    pub next: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub next: String,
}

/// Only ever bounce to a local path, never to another origin.
fn safe_next(next: &str) -> &str {
    if next.starts_with('/') && !next.starts_with("//") {
        next
    } else {
        "/"
    }
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    // Already signed in — nothing to do here
    if crate::auth::session::get_member_identity(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", safe_next(&query.next)))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate {
        error: None,
        app_name: config.app_name.clone(),
        csrf_token,
        next: safe_next(&query.next).to_string(),
    };
    render(tmpl)
}

pub async fn login_submit(
    config: web::Data<AppConfig>,
    identity_client: web::Data<IdentityClient>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let verified = match identity_client
        .verify_credentials(form.email.trim(), &form.password)
        .await
    {
        Ok(v) => v,
        Err(e) => {
            log::error!("Identity provider rejected login call: {e}");
            let tmpl = LoginTemplate {
                error: Some("Sign-in is unavailable right now. Please try again.".to_string()),
                app_name: config.app_name.clone(),
                csrf_token: csrf::get_or_create_token(&session),
                next: safe_next(&form.next).to_string(),
            };
            return render(tmpl);
        }
    };

    match verified {
        Some(identity) => {
            set_identity(&session, &identity);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", safe_next(&form.next)))
                .finish())
        }
        None => {
            let tmpl = LoginTemplate {
                error: Some("Invalid email or password".to_string()),
                app_name: config.app_name.clone(),
                csrf_token: csrf::get_or_create_token(&session),
                next: safe_next(&form.next).to_string(),
            };
            render(tmpl)
        }
    }
}

/// POST /guest — mint an ephemeral identity so an unauthenticated visitor
/// can enter a public meeting. Nothing about the guest is persisted.
pub async fn continue_as_guest(
    session: Session,
    form: web::Form<GuestForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let identity = guest::generate();
    set_identity(&session, &identity);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", safe_next(&form.next)))
        .finish())
}

pub async fn logout(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
