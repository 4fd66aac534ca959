//! Indian-locale number formatting for cards, tables and chart axes

/// Groups the integer digits the Indian way: last three, then pairs
///
/// # Examples
///
/// ```text
/// 1234567 -> 12,34,567
/// ```
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn signed(value: f64, body: impl FnOnce(f64) -> String) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-{}", body(-rounded))
    } else {
        body(rounded)
    }
}

/// Whole rupees, e.g. `₹2,34,500`
pub fn format_inr(value: f64) -> String {
    signed(value, |v| format!("₹{}", group_indian(v as u64)))
}

/// Whole number with Indian grouping
pub fn format_number(value: f64) -> String {
    signed(value, |v| group_indian(v as u64))
}

/// Axis labels: lakhs and thousands with one decimal
pub fn format_inr_compact(value: f64) -> String {
    if value >= 100_000.0 {
        format!("₹{:.1}L", value / 100_000.0)
    } else if value >= 1_000.0 {
        format!("₹{:.1}K", value / 1_000.0)
    } else {
        format!("₹{}", value.round())
    }
}

/// `94%`, or a dash when the ratio is undefined
pub fn format_percent(value: Option<i64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => "—".to_string(),
    }
}

/// `+11%`, `-4%`, `0%`
pub fn format_trend(value: i64) -> String {
    if value > 0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(234500), "2,34,500");
        assert_eq!(group_indian(1234567), "12,34,567");
        assert_eq!(group_indian(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(234_500.0), "₹2,34,500");
        assert_eq!(format_inr(44.6), "₹45");
        assert_eq!(format_inr(-1_500.0), "-₹1,500");
        assert_eq!(format_number(2_511_500.0), "25,11,500");
    }

    #[test]
    fn test_format_inr_compact() {
        assert_eq!(format_inr_compact(234_500.0), "₹2.3L");
        assert_eq!(format_inr_compact(45_260.0), "₹45.3K");
        assert_eq!(format_inr_compact(800.0), "₹800");
    }

    #[test]
    fn test_percent_and_trend() {
        assert_eq!(format_percent(Some(94)), "94%");
        assert_eq!(format_percent(None), "—");
        assert_eq!(format_trend(11), "+11%");
        assert_eq!(format_trend(-4), "-4%");
        assert_eq!(format_trend(0), "0%");
    }
}
