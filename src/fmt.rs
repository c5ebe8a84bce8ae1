use chrono::{DateTime, Local, NaiveDate};

/// Format an amount with Indian digit grouping: ₹12,34,567.5
///
/// Up to three fraction digits are kept and trailing zeros dropped. The
/// minus sign follows the symbol: ₹-1,200
pub fn money(val: f64, symbol: &str) -> String {
    let negative = val < 0.0;
    let fixed = format!("{:.3}", val.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let dec_part = dec_part.trim_end_matches('0');

    let grouped = group_indian(int_part);
    let body = if dec_part.is_empty() {
        grouped
    } else {
        format!("{grouped}.{dec_part}")
    };

    if negative && body != "0" {
        format!("{symbol}-{body}")
    } else {
        format!("{symbol}{body}")
    }
}

/// Always-signed variant for ledger rows: +₹500 / -₹1,200
pub fn signed_money(val: f64, symbol: &str) -> String {
    if val < 0.0 {
        format!("-{}", money(val.abs(), symbol))
    } else {
        format!("+{}", money(val, symbol))
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// "Today" or "Yesterday" by calendar date, otherwise the elapsed time
/// rounded up to whole days: "N days ago".
pub fn relative_day(at: DateTime<Local>, now: DateTime<Local>) -> String {
    let date = at.date_naive();
    let today = now.date_naive();
    if date == today {
        return "Today".to_string();
    }
    if today.pred_opt() == Some(date) {
        return "Yesterday".to_string();
    }
    let elapsed_ms = (now - at).num_milliseconds().abs();
    let days = (elapsed_ms + MS_PER_DAY - 1) / MS_PER_DAY;
    format!("{days} days ago")
}

/// Jan 5, 2025
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56, "₹"), "₹1,234.56");
        assert_eq!(money(1234567.5, "₹"), "₹12,34,567.5");
        assert_eq!(money(100000.0, "₹"), "₹1,00,000");
        assert_eq!(money(-500.0, "₹"), "₹-500");
        assert_eq!(money(-1200.0, "₹"), "₹-1,200");
        assert_eq!(money(0.0, "₹"), "₹0");
        assert_eq!(money(-0.0001, "₹"), "₹0");
        assert_eq!(money(42.1, "$"), "$42.1");
        assert_eq!(money(0.1234, "₹"), "₹0.123");
    }

    #[test]
    fn test_signed_money() {
        assert_eq!(signed_money(2500.0, "₹"), "+₹2,500");
        assert_eq!(signed_money(-75.25, "₹"), "-₹75.25");
        assert_eq!(signed_money(0.0, "₹"), "+₹0");
    }

    fn at(y: i32, m: u32, day: u32, h: u32, min: u32) -> DateTime<Local> {
        d(y, m, day)
            .and_hms_opt(h, min, 0)
            .unwrap()
            .and_local_timezone(Local)
            .earliest()
            .unwrap()
    }

    #[test]
    fn test_relative_day() {
        let now = at(2025, 6, 10, 12, 0);
        assert_eq!(relative_day(at(2025, 6, 10, 1, 0), now), "Today");
        assert_eq!(relative_day(at(2025, 6, 9, 23, 0), now), "Yesterday");
        assert_eq!(relative_day(at(2025, 6, 9, 0, 30), now), "Yesterday");
        assert_eq!(relative_day(at(2025, 6, 12, 12, 0), now), "2 days ago");
    }

    #[test]
    fn test_relative_day_rounds_elapsed_up() {
        let now = at(2025, 6, 10, 12, 0);
        // 8 days and 1 hour back reads as 9 days.
        assert_eq!(relative_day(at(2025, 6, 2, 11, 0), now), "9 days ago");
        // Exactly 8 days back stays at 8.
        assert_eq!(relative_day(at(2025, 6, 2, 12, 0), now), "8 days ago");
        // Two calendar days back but under 48 hours still rounds to 2.
        assert_eq!(relative_day(at(2025, 6, 8, 23, 0), now), "2 days ago");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(d(2025, 1, 5)), "Jan 5, 2025");
        assert_eq!(short_date(d(2024, 12, 25)), "Dec 25, 2024");
    }
}
