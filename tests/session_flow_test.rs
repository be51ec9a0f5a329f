//! Session-surface tests over the real route table: login page render,
//! guest entry, and the signed-in gate on meeting creation.
//!
//! External services are never reached: the guest and gating flows are
//! purely session-local, and the provider-down login test points the
//! identity client at an unroutable address.

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use regex::Regex;

use huddle::auth;
use huddle::config::AppConfig;
use huddle::handlers;
use huddle::services::IdentityClient;

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        base_url: "http://127.0.0.1:8080".to_string(),
        app_name: "Huddle".to_string(),
        call_api_url: "http://127.0.0.1:9".to_string(),
        call_api_key: "test-key".to_string(),
        call_api_secret: "test-secret".to_string(),
        // Unroutable: any identity call fails fast
        identity_api_url: "http://127.0.0.1:9".to_string(),
        identity_api_key: "test-key".to_string(),
    }
}

macro_rules! init_app {
    () => {{
        let config = test_config();
        let identity_client = IdentityClient::new(&config);
        test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                        .cookie_secure(false)
                        .cookie_http_only(true)
                        .build(),
                )
                .app_data(web::Data::new(config))
                .app_data(web::Data::new(identity_client))
                .route("/login", web::get().to(handlers::auth_handlers::login_page))
                .route("/login", web::post().to(handlers::auth_handlers::login_submit))
                .route("/guest", web::post().to(handlers::auth_handlers::continue_as_guest))
                .service(
                    web::scope("")
                        .wrap(actix_web::middleware::from_fn(auth::middleware::require_user))
                        .route("/", web::get().to(handlers::meeting_handlers::new_form)),
                ),
        )
        .await
    }};
}

fn extract_csrf(body: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(body)
        .expect("login page should embed a csrf token")[1]
        .to_string()
}

#[actix_web::test]
async fn login_page_renders_with_csrf_token() {
    let app = init_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Sign in"));
    assert!(body.contains("Continue as guest"));
    extract_csrf(&body);
}

#[actix_web::test]
async fn anonymous_visitor_cannot_reach_the_create_page() {
    let app = init_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/login"
    );
}

#[actix_web::test]
async fn guest_entry_sets_a_session_and_bounces_to_the_meeting() {
    let app = init_app!();

    // First load the login page to get a session cookie + csrf token
    let resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
    let cookies: Vec<_> = resp.response().cookies().map(|c| c.into_owned()).collect();
    assert!(!cookies.is_empty(), "login page should start a session");
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    let csrf = extract_csrf(&body);

    let mut req = test::TestRequest::post().uri("/guest").set_form([
        ("csrf_token", csrf.as_str()),
        ("next", "/meeting/abc"),
    ]);
    for cookie in &cookies {
        req = req.cookie(cookie.clone());
    }
    let resp = test::call_service(&app, req.to_request()).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/meeting/abc"
    );
    // The guest identity lives in the (re-set) session cookie
    assert!(resp.response().cookies().next().is_some());
}

#[actix_web::test]
async fn guest_cannot_reach_the_create_page() {
    let app = init_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
    let cookies: Vec<_> = resp.response().cookies().map(|c| c.into_owned()).collect();
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    let csrf = extract_csrf(&body);

    let mut req = test::TestRequest::post()
        .uri("/guest")
        .set_form([("csrf_token", csrf.as_str()), ("next", "/")]);
    for cookie in &cookies {
        req = req.cookie(cookie.clone());
    }
    let resp = test::call_service(&app, req.to_request()).await;
    let guest_cookies: Vec<_> = resp.response().cookies().map(|c| c.into_owned()).collect();

    // Guests join meetings; they do not create them
    let mut req = test::TestRequest::get().uri("/");
    for cookie in &guest_cookies {
        req = req.cookie(cookie.clone());
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn guest_post_without_csrf_is_rejected() {
    let app = init_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/guest")
            .set_form([("csrf_token", "bogus"), ("next", "/")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn provider_outage_surfaces_as_a_friendly_login_error() {
    let app = init_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
    let cookies: Vec<_> = resp.response().cookies().map(|c| c.into_owned()).collect();
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    let csrf = extract_csrf(&body);

    let mut req = test::TestRequest::post().uri("/login").set_form([
        ("email", "user@example.com"),
        ("password", "hunter22"),
        ("csrf_token", csrf.as_str()),
        ("next", "/"),
    ]);
    for cookie in &cookies {
        req = req.cookie(cookie.clone());
    }
    let resp = test::call_service(&app, req.to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Sign-in is unavailable right now"));
}
