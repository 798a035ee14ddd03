//! Display formatting for follower and like counts.

/// Format a raw count the way the dashboard displays it: counts of a million
/// or more become `"<N.d>M"`, a thousand or more become `"<N.d>k"`, anything
/// smaller is the plain integer string.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn small_counts_are_plain_integers() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn thousands_get_k_suffix_with_one_decimal() {
        assert_eq!(format_count(1_000), "1.0k");
        assert_eq!(format_count(15_200), "15.2k");
        assert_eq!(format_count(999_949), "999.9k");
    }

    #[test]
    fn millions_get_m_suffix_with_one_decimal() {
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(2_500_000), "2.5M");
    }
}
