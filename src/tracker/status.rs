use crate::models::FeedingStatus;

/// Human label for a feeding status.
pub fn status_label(status: FeedingStatus) -> &'static str {
    match status {
        FeedingStatus::Overfeeding => "Overfeeding",
        FeedingStatus::SlightlyOver => "Slightly Overfeeding",
        FeedingStatus::Normal => "Normal",
        FeedingStatus::SlightlyUnder => "Slightly Underfeeding",
        FeedingStatus::Underfeeding => "Underfeeding",
    }
}

/// Days the supply should have lasted at the declared rate.
///
/// Same ceiling division the projection uses for the depletion date, so
/// the two derivations always agree for the same totals.
pub fn expected_days_to_deplete(total_grams: f64, expected_daily_grams: f64) -> i64 {
    (total_grams / expected_daily_grams).ceil() as i64
}

/// Sentence comparing how long the package lasted against expectation.
pub fn days_difference_message(actual_days: i64, expected_days: i64) -> String {
    let diff = expected_days - actual_days;
    if diff > 0 {
        let plural = if diff == 1 { "day" } else { "days" };
        format!("Finished {} {} earlier than expected", diff, plural)
    } else if diff < 0 {
        let late = -diff;
        let plural = if late == 1 { "day" } else { "days" };
        format!("Finished {} {} later than expected", late, plural)
    } else {
        "Finished right on schedule".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(FeedingStatus::Overfeeding), "Overfeeding");
        assert_eq!(status_label(FeedingStatus::SlightlyOver), "Slightly Overfeeding");
        assert_eq!(status_label(FeedingStatus::Normal), "Normal");
        assert_eq!(status_label(FeedingStatus::SlightlyUnder), "Slightly Underfeeding");
        assert_eq!(status_label(FeedingStatus::Underfeeding), "Underfeeding");
    }

    #[test]
    fn test_expected_days_rounds_up() {
        assert_eq!(expected_days_to_deplete(2000.0, 100.0), 20);
        assert_eq!(expected_days_to_deplete(2000.0, 300.0), 7);
        assert_eq!(expected_days_to_deplete(850.0, 100.0), 9);
    }

    #[test]
    fn test_days_difference_messages() {
        assert_eq!(
            days_difference_message(19, 20),
            "Finished 1 day earlier than expected"
        );
        assert_eq!(
            days_difference_message(25, 20),
            "Finished 5 days later than expected"
        );
        assert_eq!(days_difference_message(20, 20), "Finished right on schedule");
    }
}
