#[cfg(test)]
mod tests {
    use toggl_reporter::libs::formatter::{format_duration, round_to_seconds};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0), "00:00:00");
    }

    #[test]
    fn test_format_duration_hours_minutes_seconds() {
        assert_eq!(format_duration(3_661_000), "01:01:01");
        assert_eq!(format_duration(90_000), "00:01:30");
        assert_eq!(format_duration(59_000), "00:00:59");
        assert_eq!(format_duration(3_599_000), "00:59:59");
    }

    #[test]
    fn test_format_duration_rounds_half_away_from_zero() {
        assert_eq!(format_duration(499), "00:00:00");
        assert_eq!(format_duration(500), "00:00:01");
        assert_eq!(format_duration(1_499), "00:00:01");
        assert_eq!(format_duration(1_500), "00:00:02");
        assert_eq!(format_duration(59_500), "00:01:00");
    }

    #[test]
    fn test_format_duration_does_not_wrap_at_a_day() {
        assert_eq!(format_duration(24 * 3_600_000), "24:00:00");
        assert_eq!(format_duration(100 * 3_600_000), "100:00:00");
        assert_eq!(format_duration(999 * 3_600_000 + 59 * 60_000 + 59_000), "999:59:59");
    }

    #[test]
    fn test_format_duration_negative_passes_through() {
        assert_eq!(format_duration(-90_000), "-00:01:30");
        assert_eq!(format_duration(-400), "00:00:00");
    }

    #[test]
    fn test_round_to_seconds() {
        assert_eq!(round_to_seconds(0), 0);
        assert_eq!(round_to_seconds(999), 1);
        assert_eq!(round_to_seconds(2_500), 3);
        assert_eq!(round_to_seconds(-500), -1);
        assert_eq!(round_to_seconds(-499), 0);
    }
}
