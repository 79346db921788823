use chrono::{DateTime, Utc};

/// Short "how long ago" label for history entries
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - timestamp).num_seconds();

    if diff < 60 {
        format!("{}s ago", diff.max(0))
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else if diff < 86_400 {
        format!("{}h ago", diff / 3600)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}
