use time::OffsetDateTime;

/// Coarse age of a report: minutes under an hour, hours under a day, then days.
pub fn format_age(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let minutes = (now - timestamp).whole_minutes().max(0);
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

pub fn active_label(count: usize) -> String {
    format!("{count} Active")
}
