//! Parsing and formatting of human-readable sizes and durations

use std::time::Duration;

/// Parse strings such as `"1.2 GB"` or `"420 MB"` into megabytes.
///
/// Returns `None` for an unknown unit or a malformed number.
pub fn parse_memory_mb(text: &str) -> Option<f64> {
    let mut parts = text.split_whitespace();
    let value: f64 = parts.next()?.parse().ok()?;
    let unit = parts.next().unwrap_or("MB");

    let factor = match unit.to_ascii_uppercase().as_str() {
        "KB" | "KIB" => 1.0 / 1024.0,
        "MB" | "MIB" => 1.0,
        "GB" | "GIB" => 1024.0,
        "TB" | "TIB" => 1024.0 * 1024.0,
        _ => return None,
    };

    Some(value * factor)
}

/// Render megabytes the way the dashboard shows them (`"820 MB"`, `"1.5 GB"`).
pub fn format_memory_mb(mb: f64) -> String {
    if mb >= 1024.0 {
        format!("{:.1} GB", mb / 1024.0)
    } else {
        format!("{:.0} MB", mb)
    }
}

/// Format an uptime as `"2d 14h 32m"`, `"6h 42m"` or `"12m"`.
pub fn format_uptime(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Parse the output of [`format_uptime`] back into a duration.
pub fn parse_uptime(text: &str) -> Option<Duration> {
    let mut seconds = 0u64;
    let mut seen = false;

    for part in text.split_whitespace() {
        let (unit_at, _) = part.char_indices().last()?;
        let (number, unit) = part.split_at(unit_at);
        let value: u64 = number.parse().ok()?;
        let scale = match unit {
            "d" => 24 * 3600,
            "h" => 3600,
            "m" => 60,
            "s" => 1,
            _ => return None,
        };
        seconds = value
            .checked_mul(scale)
            .and_then(|amount| seconds.checked_add(amount))?;
        seen = true;
    }

    seen.then(|| Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gigabytes_and_megabytes() {
        let gb = parse_memory_mb("1.2 GB").unwrap();
        assert!((gb - 1228.8).abs() < 1e-9);
        assert_eq!(parse_memory_mb("420 MB"), Some(420.0));
        assert_eq!(parse_memory_mb("0 MB"), Some(0.0));
    }

    #[test]
    fn rejects_unknown_units_and_garbage() {
        assert_eq!(parse_memory_mb("12 parsecs"), None);
        assert_eq!(parse_memory_mb("lots"), None);
        assert_eq!(parse_memory_mb(""), None);
    }

    #[test]
    fn formats_memory() {
        assert_eq!(format_memory_mb(820.0), "820 MB");
        assert_eq!(format_memory_mb(1536.0), "1.5 GB");
    }

    #[test]
    fn formats_uptime_like_the_dashboard() {
        let d = Duration::from_secs(((2 * 24 + 14) * 60 + 32) * 60);
        assert_eq!(format_uptime(d), "2d 14h 32m");
        assert_eq!(format_uptime(Duration::from_secs((6 * 60 + 42) * 60)), "6h 42m");
        assert_eq!(format_uptime(Duration::from_secs(12 * 60 + 59)), "12m");
    }

    #[test]
    fn parses_uptime_strings() {
        assert_eq!(
            parse_uptime("1d 2h 12m"),
            Some(Duration::from_secs(((24 + 2) * 60 + 12) * 60))
        );
        assert_eq!(parse_uptime("6h 42m"), Some(Duration::from_secs((6 * 60 + 42) * 60)));
        assert_eq!(parse_uptime(""), None);
        assert_eq!(parse_uptime("Up 2 days"), None);
    }

    #[test]
    fn oversized_uptime_is_rejected() {
        assert_eq!(parse_uptime("18446744073709551615d"), None);
        assert_eq!(parse_uptime("18446744073709551615s 1s"), None);
        assert_eq!(
            parse_uptime("18446744073709551615s"),
            Some(Duration::from_secs(u64::MAX))
        );
    }
}
