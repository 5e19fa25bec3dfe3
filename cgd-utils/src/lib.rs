//! Shared utility functions for CGD crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::NaiveDate;

    /// ISO format used for every date the pipeline writes.
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Formats accepted on input, tried in order.
    ///
    /// The JHU daily reports use US month-first dates, sometimes with a
    /// two-digit year. `%y` goes before `%Y` because `%Y` happily reads
    /// "20" as the year 20.
    pub const INPUT_FORMATS: [&str; 3] = [ISO_FORMAT, "%m/%d/%y", "%m/%d/%Y"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .map_err(|e| DateError(format!("{:?}: {}", s, e)))
    }

    /// Parse a date in any of [`INPUT_FORMATS`].
    ///
    /// A trailing time component ("2020-01-22 00:00:00") is dropped first.
    pub fn parse_date_flexible(s: &str) -> Result<NaiveDate, DateError> {
        let day = s.split_whitespace().next().unwrap_or("");
        INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
            .ok_or_else(|| DateError(format!("{:?} matches none of {:?}", s, INPUT_FORMATS)))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2020-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_flexible() {
            let jan22 = NaiveDate::from_ymd_opt(2020, 1, 22).unwrap();
            assert_eq!(parse_date_flexible("2020-01-22").unwrap(), jan22);
            assert_eq!(parse_date_flexible("1/22/2020").unwrap(), jan22);
            assert_eq!(parse_date_flexible("01/22/20").unwrap(), jan22);
            assert_eq!(parse_date_flexible(" 2020-01-22 00:00:00").unwrap(), jan22);
        }

        #[test]
        fn test_parse_flexible_rejects() {
            assert!(parse_date_flexible("").is_err());
            assert!(parse_date_flexible("22/01/2020").is_err());
            assert!(parse_date_flexible("2020-02-30").is_err());
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
