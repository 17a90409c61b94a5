use chrono::NaiveDate;

/// Short date used by toolbar chips, e.g. "Sep 1, 2025".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Long date used by full-width field triggers, e.g. "September 1, 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_short_date_has_no_day_padding() {
        assert_eq!(format_short_date(date(2025, 9, 1)), "Sep 1, 2025");
        assert_eq!(format_short_date(date(2025, 12, 31)), "Dec 31, 2025");
    }

    #[test]
    fn test_long_date_spells_out_month() {
        assert_eq!(format_long_date(date(2025, 9, 1)), "September 1, 2025");
    }
}
