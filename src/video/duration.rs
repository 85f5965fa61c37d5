/// `minutes:seconds`, minutes unbounded (no hour rollover)
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_duration(185), "3:05");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(3600), "60:00");
        assert_eq!(format_duration(7261), "121:01");
    }
}
