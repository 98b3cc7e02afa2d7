//! Clock-string rendering.

/// Render a second count as zero-padded `MM:SS`.
///
/// Minutes are not wrapped at 59, so a full hour renders as `60:00`.
pub fn format_minutes_seconds(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::format_minutes_seconds;

    #[test]
    fn pads_both_fields() {
        assert_eq!(format_minutes_seconds(0), "00:00");
        assert_eq!(format_minutes_seconds(9), "00:09");
        assert_eq!(format_minutes_seconds(61), "01:01");
    }

    #[test]
    fn renders_default_session() {
        assert_eq!(format_minutes_seconds(1500), "25:00");
    }

    #[test]
    fn full_hour_keeps_minutes_field() {
        assert_eq!(format_minutes_seconds(3600), "60:00");
        assert_eq!(format_minutes_seconds(3599), "59:59");
    }
}
