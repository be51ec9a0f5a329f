// Template context structures for askama templates, organized by domain.

mod common;
mod meeting;

pub use common::*;
pub use meeting::*;

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_identity, take_flash};
use crate::models::identity::Identity;

/// Common context shared by all pages: who is looking, the flash message
/// from the previous request, and the CSRF token for any forms.
pub struct PageContext {
    pub identity: Option<Identity>,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub app_name: String,
}

impl PageContext {
    pub fn from_session(session: &Session, app_name: &str) -> Self {
        Self {
            identity: get_identity(session),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            app_name: app_name.to_string(),
        }
    }

    /// Signed-in non-guest user, for nav rendering.
    pub fn is_user(&self) -> bool {
        self.identity.as_ref().is_some_and(|id| !id.guest)
    }
}
