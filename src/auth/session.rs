use actix_session::Session;

use crate::models::identity::Identity;

const IDENTITY_KEY: &str = "identity";

/// The identity attached to this session, if any (authenticated or guest).
pub fn get_identity(session: &Session) -> Option<Identity> {
    session.get::<Identity>(IDENTITY_KEY).unwrap_or(None)
}

/// The identity for access-resolution purposes: guests count as absent,
/// since the provider forbids guest access to private meetings.
pub fn get_member_identity(session: &Session) -> Option<Identity> {
    get_identity(session).filter(|id| !id.guest)
}

pub fn set_identity(session: &Session, identity: &Identity) {
    let _ = session.insert(IDENTITY_KEY, identity);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

fn setup_key(meeting_id: &str) -> String {
    format!("setup_complete:{meeting_id}")
}

/// Whether the user already confirmed device setup for this meeting.
pub fn setup_complete(session: &Session, meeting_id: &str) -> bool {
    session
        .get::<bool>(&setup_key(meeting_id))
        .unwrap_or(None)
        .unwrap_or(false)
}

/// One-way: the flag is only ever set to true and never cleared while the
/// session lives, so the lobby cannot reappear mid-call.
pub fn mark_setup_complete(session: &Session, meeting_id: &str) {
    let _ = session.insert(setup_key(meeting_id), true);
}
