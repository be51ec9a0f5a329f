use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether anyone may join or only listed members.
///
/// Fixed at creation time (a supplied participant list makes the meeting
/// private) and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingVisibility {
    Public,
    Private,
}

/// One entry in a meeting's member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingMember {
    pub user_id: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "member".to_string()
}

impl MeetingMember {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: default_role(),
        }
    }
}

/// A meeting as the call service reports it.
///
/// The call service owns this record; the app only reads and writes it
/// through that service's API. `starts_at`/`ended_at` are the live state
/// the lifecycle classifier consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: String,
    pub visibility: MeetingVisibility,
    #[serde(default)]
    pub members: Vec<MeetingMember>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    /// Presence counter reported by the call service.
    #[serde(default)]
    pub participant_count: u32,
}

/// Build the member list for a private meeting.
///
/// Appends the creator after the resolved participants, then deduplicates
/// by user id keeping the first occurrence, so order is preserved and the
/// creator is present exactly once.
pub fn dedup_members(resolved: Vec<MeetingMember>, creator: MeetingMember) -> Vec<MeetingMember> {
    let mut seen = HashSet::new();
    resolved
        .into_iter()
        .chain(std::iter::once(creator))
        .filter(|m| seen.insert(m.user_id.clone()))
        .collect()
}
