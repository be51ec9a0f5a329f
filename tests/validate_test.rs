//! Form validation tests — email shape, description length, start-time
//! parsing, and the participants textarea split.

use chrono::{Duration, Local, Utc};
use huddle::auth::validate::{
    parse_starts_at, split_participant_emails, validate_description, validate_email,
};

#[test]
fn valid_email_passes() {
    assert_eq!(validate_email("user@example.com"), None);
    assert_eq!(validate_email("  padded@example.com  "), None);
}

#[test]
fn bad_emails_fail() {
    assert!(validate_email("").is_some());
    assert!(validate_email("no-at-sign.example.com").is_some());
    assert!(validate_email("no-dot@example").is_some());
    let long = format!("{}@example.com", "x".repeat(250));
    assert!(validate_email(&long).is_some());
}

#[test]
fn description_up_to_500_chars_passes() {
    assert_eq!(validate_description(""), None);
    assert_eq!(validate_description(&"x".repeat(500)), None);
}

#[test]
fn description_over_500_chars_fails() {
    assert!(validate_description(&"x".repeat(501)).is_some());
}

#[test]
fn empty_start_time_means_start_immediately() {
    let now = Utc::now();
    assert_eq!(parse_starts_at("", now), Ok(None));
    assert_eq!(parse_starts_at("   ", now), Ok(None));
}

#[test]
fn future_start_time_parses() {
    let now = Utc::now();
    let in_an_hour = (Local::now() + Duration::hours(1))
        .format("%Y-%m-%dT%H:%M")
        .to_string();
    let parsed = parse_starts_at(&in_an_hour, now).expect("should parse");
    assert!(parsed.expect("should be Some") > now);
}

#[test]
fn past_start_time_is_rejected() {
    let now = Utc::now();
    assert!(parse_starts_at("2000-01-01T00:00", now).is_err());
}

#[test]
fn garbage_start_time_is_rejected() {
    let now = Utc::now();
    assert!(parse_starts_at("tomorrow-ish", now).is_err());
    assert!(parse_starts_at("2026-03-01", now).is_err());
}

#[test]
fn participants_split_on_commas_and_newlines() {
    let raw = "one@example.com, two@example.com\nthree@example.com\n\n ,";
    assert_eq!(
        split_participant_emails(raw),
        vec![
            "one@example.com".to_string(),
            "two@example.com".to_string(),
            "three@example.com".to_string(),
        ]
    );
}

#[test]
fn empty_participants_means_public() {
    assert!(split_participant_emails("").is_empty());
    assert!(split_participant_emails("  \n ,, ").is_empty());
}
