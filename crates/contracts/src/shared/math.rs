/// `round(part / whole * 100)`, `None` when `whole` is not positive
pub fn percent_of(part: f64, whole: f64) -> Option<i64> {
    if whole > 0.0 {
        Some((part / whole * 100.0).round() as i64)
    } else {
        None
    }
}

/// Relative change in whole percent, `None` when there is no previous value
pub fn trend_percent(current: f64, previous: f64) -> Option<i64> {
    if previous == 0.0 {
        None
    } else {
        Some(((current - previous) / previous * 100.0).round() as i64)
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1.0, 3.0), Some(33));
        assert_eq!(percent_of(2.0, 3.0), Some(67));
        assert_eq!(percent_of(5.0, 0.0), None);
        assert_eq!(percent_of(5.0, -1.0), None);
    }

    #[test]
    fn test_trend_percent() {
        assert_eq!(trend_percent(110.0, 100.0), Some(10));
        assert_eq!(trend_percent(85.0, 100.0), Some(-15));
        assert_eq!(trend_percent(10.0, 0.0), None);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(99.96), 100.0);
    }
}
