pub(crate) const INVALID_DATE: &str = "Invalid Date";

/// Formats an ISO-8601 date as a short readable date, e.g. `Nov 3, 2022`.
pub(crate) fn short(iso: &str) -> String {
    match parse(iso.trim()) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse(iso: &str) -> Option<chrono::NaiveDate> {
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(iso) {
        return Some(datetime.naive_utc().date());
    }

    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }

    chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}
