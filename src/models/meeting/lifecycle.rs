use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where a meeting is in its life, derived from call-service timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Upcoming,
    Live,
    Ended,
}

/// Classify a meeting relative to `now`.
///
/// An observed end always wins, even over a future scheduled start — that
/// is what a force-ended meeting looks like. Otherwise a strictly-future
/// scheduled start means upcoming, and everything else is live.
pub fn classify(
    starts_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> LifecycleState {
    if ended_at.is_some() {
        return LifecycleState::Ended;
    }
    match starts_at {
        Some(start) if start > now => LifecycleState::Upcoming,
        _ => LifecycleState::Live,
    }
}
