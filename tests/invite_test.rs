//! Invitation mailto builder tests.

use huddle::handlers::meeting_handlers::invite::mailto;

const LINK: &str = "http://127.0.0.1:8080/meeting/abc-123";

#[test]
fn bare_invitation_has_link_only() {
    let m = mailto(LINK, None, None);
    assert!(m.starts_with("mailto:?subject=Join%20meeting&body="));
    assert!(m.contains("meeting%2Fabc-123"));
    assert!(!m.contains("Description"));
}

#[test]
fn start_time_lands_in_subject_and_body() {
    let m = mailto(LINK, Some("Monday, March 2, 2026 at 14:00"), None);
    assert!(m.contains("subject=Join%20meeting%20at%20Monday"));
    assert!(m.contains("The%20meeting%20starts%20at%20Monday"));
}

#[test]
fn description_lands_in_body() {
    let m = mailto(LINK, None, Some("Quarterly sync & planning"));
    assert!(m.contains("Description%3A%20Quarterly%20sync%20%26%20planning"));
}

#[test]
fn no_raw_plus_or_ampersand_leaks_into_components() {
    let m = mailto(LINK, Some("3 + 4 pm"), Some("a & b"));
    // '+' would be read literally by mail clients, '&' would split the query
    let query = m.trim_start_matches("mailto:?");
    for part in query.split('&') {
        let value = part.splitn(2, '=').nth(1).unwrap_or("");
        assert!(!value.contains('+'), "unescaped '+' in {value}");
    }
    assert_eq!(query.split('&').count(), 2, "only subject and body expected");
}
