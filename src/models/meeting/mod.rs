pub mod access;
pub mod lifecycle;
pub mod screen;
pub mod types;

pub use access::{resolve, AccessDecision};
pub use lifecycle::{classify, LifecycleState};
pub use screen::{select_screen, MeetingScreen};
pub use types::{dedup_members, MeetingMember, MeetingRecord, MeetingVisibility};
