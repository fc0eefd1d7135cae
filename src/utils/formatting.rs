pub fn format_percent(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.2}%", s),
        None => "n/a".to_string(),
    }
}

pub fn format_chars(count: usize) -> String {
    if count < 1_000 {
        format!("{} chars", count)
    } else if count < 1_000_000 {
        format!("{:.1}k chars", count as f64 / 1_000.0)
    } else {
        format!("{:.1}M chars", count as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(72.727272)), "72.73%");
        assert_eq!(format_percent(Some(100.0)), "100.00%");
        assert_eq!(format_percent(None), "n/a");
    }

    #[test]
    fn test_format_chars() {
        assert_eq!(format_chars(11), "11 chars");
        assert_eq!(format_chars(2_500), "2.5k chars");
        assert_eq!(format_chars(3_200_000), "3.2M chars");
    }
}
