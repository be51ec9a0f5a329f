use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Validate the optional meeting description (empty is OK, 500 chars max).
pub fn validate_description(value: &str) -> Option<String> {
    if value.trim().chars().count() > 500 {
        return Some("Description must be at most 500 characters".to_string());
    }
    None
}

/// Parse the `datetime-local` start-time field into a UTC timestamp.
///
/// An empty field means "start immediately" and parses to `None`. A parsed
/// time must not lie in the past relative to `now`.
pub fn parse_starts_at(
    value: &str,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .map_err(|_| "Invalid start time, expected YYYY-MM-DDTHH:MM".to_string())?;
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| "Invalid start time".to_string())?;
    let utc = local.with_timezone(&Utc);
    if utc < now {
        return Err("Start time must not be in the past".to_string());
    }
    Ok(Some(utc))
}

/// Split the participant textarea into trimmed, non-empty email strings.
pub fn split_participant_emails(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
