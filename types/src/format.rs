//! Display formatting shared by the server and the components.

use jiff::{Timestamp, tz::TimeZone};

/// Group digits in threes, en-US style: `1234567` becomes `1,234,567`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount, e.g. `$124,567`.
pub fn currency(dollars: u64) -> String {
    format!("${}", thousands(dollars))
}

/// e.g. `Oct 18, 2026, 02:30 PM`.
pub fn activity_time(timestamp: Timestamp, tz: &TimeZone) -> String {
    timestamp
        .to_zoned(tz.clone())
        .strftime("%b %-d, %Y, %I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(89), "89");
        assert_eq!(thousands(567), "567");
        assert_eq!(thousands(1234), "1,234");
        assert_eq!(thousands(124_567), "124,567");
        assert_eq!(thousands(1_254_300), "1,254,300");
    }

    #[test]
    fn formats_dollars() {
        assert_eq!(currency(124_567), "$124,567");
        assert_eq!(currency(1_200), "$1,200");
    }

    #[test]
    fn formats_activity_time_in_zone() {
        let ts: Timestamp = "2026-10-18T14:30:00Z".parse().unwrap();
        assert_eq!(activity_time(ts, &TimeZone::UTC), "Oct 18, 2026, 02:30 PM");

        let ts: Timestamp = "2026-03-05T09:07:00Z".parse().unwrap();
        assert_eq!(activity_time(ts, &TimeZone::UTC), "Mar 5, 2026, 09:07 AM");
    }
}
