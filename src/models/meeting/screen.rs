use chrono::{DateTime, Utc};

use crate::models::identity::Identity;
use crate::models::meeting::access::{resolve, AccessDecision};
use crate::models::meeting::lifecycle::{classify, LifecycleState};
use crate::models::meeting::types::MeetingRecord;

/// What the meeting page should show, as one tagged union instead of a
/// chain of order-dependent boolean checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingScreen {
    /// Lookup by id missed.
    NotFound,
    /// The access resolver said no.
    Denied,
    /// Scheduled start is still in the future.
    Upcoming,
    /// The meeting has an observed end.
    Ended,
    /// Live, but the user has not confirmed device setup yet (lobby).
    Setup,
    /// Live and set up: the call view.
    Live,
}

/// The single total transition function for the meeting page.
///
/// Precedence: lookup miss, then access, then lifecycle. `setup_complete`
/// only gates the Setup→Live edge; it is session-scoped and monotonic
/// (set once when the user confirms device setup, never reset), so within
/// a session the lobby is a one-way door.
pub fn select_screen(
    meeting: Option<&MeetingRecord>,
    requester: Option<&Identity>,
    now: DateTime<Utc>,
    setup_complete: bool,
) -> MeetingScreen {
    let Some(meeting) = meeting else {
        return MeetingScreen::NotFound;
    };
    if resolve(meeting, requester) == AccessDecision::Deny {
        return MeetingScreen::Denied;
    }
    match classify(meeting.starts_at, meeting.ended_at, now) {
        LifecycleState::Upcoming => MeetingScreen::Upcoming,
        LifecycleState::Ended => MeetingScreen::Ended,
        LifecycleState::Live if setup_complete => MeetingScreen::Live,
        LifecycleState::Live => MeetingScreen::Setup,
    }
}
