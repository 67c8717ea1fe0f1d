use std::time::Duration;

/// Renders `MM:SS`, truncating to whole seconds. There is no hours field, so the minutes widen
/// past 99 instead of wrapping.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_boundaries() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(65)), "01:05");
        assert_eq!(format_elapsed(Duration::from_secs(3599)), "59:59");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "60:00");
    }

    #[test]
    fn test_format_truncates() {
        assert_eq!(format_elapsed(Duration::from_secs_f64(59.9)), "00:59");
        assert_eq!(format_elapsed(Duration::from_millis(999)), "00:00");
        assert_eq!(format_elapsed(Duration::from_millis(60_999)), "01:00");
    }

    #[test]
    fn test_format_widens_minutes() {
        assert_eq!(format_elapsed(Duration::from_secs(99 * 60 + 59)), "99:59");
        assert_eq!(format_elapsed(Duration::from_secs(6000)), "100:00");
        assert_eq!(format_elapsed(Duration::from_secs(1000 * 60 + 1)), "1000:01");
    }
}
