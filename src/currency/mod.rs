//! Fixed-locale currency and date formatting.
//!
//! Charts, lists, and insight text all render amounts through these
//! helpers, so the output stays byte-identical across the crate.

use chrono::{Datelike, NaiveDate};

/// Formats an amount as US dollars with thousands grouping, e.g.
/// `$1,234.56`. Negative amounts lead with the sign: `-$12.00`.
pub fn format_currency(amount: f64) -> String {
    let body = group_thousands(&format!("{:.2}", amount.abs()));
    if amount < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Formats a date as `Mar 1, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_label(date.month()),
        date.day(),
        date.year()
    )
}

fn group_thousands(body: &str) -> String {
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body, None),
    };
    let mut grouped = String::new();
    let mut count = 0;
    for ch in int_part.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(42.5), "$42.50");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1234567.0), "$1,234,567.00");
    }

    #[test]
    fn negative_amounts_lead_with_the_sign() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
    }

    #[test]
    fn formats_dates_with_short_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        assert_eq!(format_date(date), "Mar 1, 2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).expect("valid date");
        assert_eq!(format_date(date), "Dec 31, 2023");
    }
}
