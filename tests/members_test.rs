//! Member-list deduplication tests — first occurrence wins, order is
//! preserved, the creator is always present exactly once.

use huddle::models::meeting::{dedup_members, MeetingMember};

fn ids(members: &[MeetingMember]) -> Vec<&str> {
    members.iter().map(|m| m.user_id.as_str()).collect()
}

#[test]
fn first_occurrence_wins_and_creator_is_kept() {
    // [A, B, A, C] plus creator A -> [A, B, C]
    let resolved = vec![
        MeetingMember::new("a"),
        MeetingMember::new("b"),
        MeetingMember::new("a"),
        MeetingMember::new("c"),
    ];
    let result = dedup_members(resolved, MeetingMember::new("a"));
    assert_eq!(ids(&result), vec!["a", "b", "c"]);
}

#[test]
fn creator_missing_from_list_is_appended() {
    let resolved = vec![MeetingMember::new("b"), MeetingMember::new("c")];
    let result = dedup_members(resolved, MeetingMember::new("a"));
    assert_eq!(ids(&result), vec!["b", "c", "a"]);
}

#[test]
fn empty_list_still_contains_creator() {
    let result = dedup_members(Vec::new(), MeetingMember::new("a"));
    assert_eq!(ids(&result), vec!["a"]);
}

#[test]
fn duplicates_collapse_to_one() {
    let resolved = vec![
        MeetingMember::new("a"),
        MeetingMember::new("a"),
        MeetingMember::new("a"),
    ];
    let result = dedup_members(resolved, MeetingMember::new("a"));
    assert_eq!(ids(&result), vec!["a"]);
}
