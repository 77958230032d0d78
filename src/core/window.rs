use chrono::{Datelike, NaiveDate};

/// The report window: first through last day of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportWindow {
    /// Window for the calendar month containing `today`.
    ///
    /// Callers inject the date; core logic never reads the wall clock.
    pub fn month_of(today: NaiveDate) -> Self {
        let last_day = days_in_month(today.year(), today.month());
        Self {
            start: today.with_day(1).unwrap_or(today),
            end: today.with_day(last_day).unwrap_or(today),
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn window_covers_whole_month() {
        let window = ReportWindow::month_of(date(2026, 8, 6));
        assert_eq!(window.start, date(2026, 8, 1));
        assert_eq!(window.end, date(2026, 8, 31));
    }

    #[test]
    fn window_for_leap_february() {
        let window = ReportWindow::month_of(date(2024, 2, 15));
        assert_eq!(window.start, date(2024, 2, 1));
        assert_eq!(window.end, date(2024, 2, 29));
    }

    #[test]
    fn window_for_non_leap_february() {
        let window = ReportWindow::month_of(date(2023, 2, 10));
        assert_eq!(window.end, date(2023, 2, 28));
    }

    #[test]
    fn window_at_year_end() {
        let window = ReportWindow::month_of(date(2026, 12, 31));
        assert_eq!(window.start, date(2026, 12, 1));
        assert_eq!(window.end, date(2026, 12, 31));
    }

    #[test]
    fn window_start_never_after_end() {
        for month in 1..=12 {
            let window = ReportWindow::month_of(date(2025, month, 1));
            assert!(window.start <= window.end);
        }
    }

    #[test]
    fn century_leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2026));
    }

    #[test]
    fn days_per_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
    }
}
