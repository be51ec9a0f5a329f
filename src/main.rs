use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, middleware, web, App, HttpServer};

use huddle::auth;
use huddle::config::AppConfig;
use huddle::handlers;
use huddle::services::{CallServiceClient, IdentityClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Missing provider credentials are fatal: without them no meeting can
    // be fetched and no token signed.
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        log::error!("Configuration error: {e}");
        std::process::exit(1);
    });

    // Clients are constructed once here and handed to handlers by
    // reference through web::Data; they drop with the server.
    let call_client = CallServiceClient::new(&config);
    let identity_client = IdentityClient::new(&config);

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(call_client.clone()))
            .app_data(web::Data::new(identity_client.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            .route("/guest", web::post().to(handlers::auth_handlers::continue_as_guest))
            .route("/logout", web::post().to(handlers::auth_handlers::logout))
            // Meeting pages are reachable by guests; access is resolved inside
            .route("/meeting/{id}", web::get().to(handlers::meeting_handlers::meeting_page))
            .route("/meeting/{id}/join", web::post().to(handlers::meeting_handlers::join))
            .route("/meeting/{id}/state", web::get().to(handlers::meeting_handlers::live_state))
            .route("/api/token", web::get().to(handlers::token_handlers::issue))
            // Routes for signed-in users only
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_user))
                    .route("/", web::get().to(handlers::meeting_handlers::new_form))
                    .route("/meetings", web::post().to(handlers::meeting_handlers::create))
                    .route("/meetings", web::get().to(handlers::meeting_handlers::list))
                    .route("/meeting/{id}/invite", web::get().to(handlers::meeting_handlers::invite_page)),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
