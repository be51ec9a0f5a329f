use crate::models::identity::Identity;
use crate::models::meeting::types::{MeetingRecord, MeetingVisibility};

/// Outcome of the access check for one (meeting, requester) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

/// Decide whether `requester` may enter `meeting`.
///
/// Public meetings admit everyone, including absent (guest/anonymous)
/// requesters. Private meetings admit only requesters whose id appears in
/// the member list. Callers must handle lookup misses before calling this;
/// guests are passed as `None` since the provider forbids guest access to
/// private meetings anyway.
pub fn resolve(meeting: &MeetingRecord, requester: Option<&Identity>) -> AccessDecision {
    match meeting.visibility {
        MeetingVisibility::Public => AccessDecision::Allow,
        MeetingVisibility::Private => match requester {
            Some(who) if meeting.members.iter().any(|m| m.user_id == who.id) => {
                AccessDecision::Allow
            }
            _ => AccessDecision::Deny,
        },
    }
}
