use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateMeetingTemplate {
    pub ctx: PageContext,
    pub errors: Vec<String>,
    // Submitted values, echoed back when validation fails.
    pub description: String,
    pub start_time: String,
    pub participants: String,
}

#[derive(Template)]
#[template(path = "invite.html")]
pub struct InviteTemplate {
    pub ctx: PageContext,
    pub meeting_link: String,
    pub mailto_link: String,
    pub starts_at_label: Option<String>,
    pub description: Option<String>,
    pub private: bool,
    pub member_count: usize,
}

/// One row on the meetings list page.
pub struct MeetingListItem {
    pub id: String,
    pub title: String,
    pub when_label: String,
    pub status: String,
}

#[derive(Template)]
#[template(path = "meetings/list.html")]
pub struct MeetingsListTemplate {
    pub ctx: PageContext,
    pub upcoming: Vec<MeetingListItem>,
    pub past: Vec<MeetingListItem>,
}

// One template per screen the meeting state machine can land on.

#[derive(Template)]
#[template(path = "meeting/not_found.html")]
pub struct MeetingNotFoundTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "meeting/denied.html")]
pub struct MeetingDeniedTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "meeting/upcoming.html")]
pub struct MeetingUpcomingTemplate {
    pub ctx: PageContext,
    pub meeting_id: String,
    pub starts_at_label: String,
    pub description: Option<String>,
}

#[derive(Template)]
#[template(path = "meeting/ended.html")]
pub struct MeetingEndedTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "meeting/setup.html")]
pub struct MeetingSetupTemplate {
    pub ctx: PageContext,
    pub meeting_id: String,
    pub description: Option<String>,
}

#[derive(Template)]
#[template(path = "meeting/live.html")]
pub struct MeetingLiveTemplate {
    pub ctx: PageContext,
    pub meeting_id: String,
    pub description: Option<String>,
    pub participant_count: u32,
}
