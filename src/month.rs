use std::fmt::{self, Display};

use crate::error::ReportError;

/// The only months the reports know about. All input is assumed to fall in
/// this window; a date outside it is rejected rather than bucketed under a
/// made-up label. Widening this table to 12 months would change which rows
/// share a bucket, so don't.
pub const MONTH_NAMES: [&str; 3] = ["January", "February", "March"];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MonthLabel {
    January,
    February,
    March,
}

impl MonthLabel {
    fn from_index(index: usize) -> Option<MonthLabel> {
        match index {
            0 => Some(MonthLabel::January),
            1 => Some(MonthLabel::February),
            2 => Some(MonthLabel::March),
            _ => None,
        }
    }

    /// Resolve a `D/M/Y` date to its month bucket. Pure function: every
    /// aggregator that buckets by month calls this again for each row.
    pub fn resolve(date: &str) -> Result<MonthLabel, ReportError> {
        let month_number: usize = date
            .split('/')
            .nth(1)
            .and_then(|part| part.parse().ok())
            .ok_or_else(|| ReportError::MonthOutOfWindow(date.to_string()))?;

        month_number
            .checked_sub(1)
            .and_then(MonthLabel::from_index)
            .ok_or_else(|| ReportError::MonthOutOfWindow(date.to_string()))
    }
}

impl Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MONTH_NAMES[*self as usize])
    }
}

/// First positional part of a `D/M/Y` date, i.e. the calendar day.
pub fn day_part(date: &str) -> &str {
    date.split('/').next().unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod resolve {
        use super::*;

        #[test]
        fn resolves_each_month_in_window() {
            assert_eq!(MonthLabel::resolve("1/1/2023").unwrap(), MonthLabel::January);
            assert_eq!(MonthLabel::resolve("15/2/2023").unwrap(), MonthLabel::February);
            assert_eq!(MonthLabel::resolve("31/3/2023").unwrap(), MonthLabel::March);
        }

        #[test]
        fn rejects_month_past_the_window() {
            assert!(MonthLabel::resolve("5/4/2023").is_err());
            assert!(MonthLabel::resolve("25/12/2023").is_err());
        }

        #[test]
        fn rejects_month_zero() {
            assert!(MonthLabel::resolve("5/0/2023").is_err());
        }

        #[test]
        fn rejects_dates_without_a_month_part() {
            assert!(MonthLabel::resolve("15").is_err());
            assert!(MonthLabel::resolve("").is_err());
        }

        #[test]
        fn rejects_non_numeric_month() {
            assert!(MonthLabel::resolve("1/Feb/2023").is_err());
        }
    }

    mod day {
        use super::*;

        #[test]
        fn day_is_the_first_date_part() {
            assert_eq!(day_part("15/2/2023"), "15");
            assert_eq!(day_part("1/1/2023"), "1");
        }
    }

    #[test]
    fn labels_match_the_month_table() {
        assert_eq!(MonthLabel::January.to_string(), "January");
        assert_eq!(MonthLabel::February.to_string(), "February");
        assert_eq!(MonthLabel::March.to_string(), "March");
    }
}
