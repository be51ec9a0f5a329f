/// Application configuration, loaded once at startup from the environment.
///
/// The call service and identity provider credentials are hard requirements:
/// without them no token can be signed and no meeting can be fetched, so
/// startup aborts instead of limping along.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Public base URL used when building invitation links.
    pub base_url: String,
    /// Name shown in the navigation bar and page titles.
    pub app_name: String,

    /// Base URL of the external call service REST API.
    pub call_api_url: String,
    /// Call service API key (sent as a query parameter).
    pub call_api_key: String,
    /// Call service API secret (signs connection tokens).
    pub call_api_secret: String,

    /// Base URL of the identity provider REST API.
    pub identity_api_url: String,
    /// Identity provider API key (bearer auth).
    pub identity_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bind_addr: optional("BIND_ADDR", "127.0.0.1:8080"),
            base_url: optional("BASE_URL", "http://127.0.0.1:8080"),
            app_name: optional("APP_NAME", "Huddle"),
            call_api_url: required("CALL_API_URL")?,
            call_api_key: required("CALL_API_KEY")?,
            call_api_secret: required("CALL_API_SECRET")?,
            identity_api_url: required("IDENTITY_API_URL")?,
            identity_api_key: required("IDENTITY_API_KEY")?,
        })
    }
}

fn required(name: &str) -> Result<String, String> {
    match std::env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(format!("{name} is required but not set")),
    }
}

fn optional(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}
