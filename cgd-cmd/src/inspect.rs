//! Data-quality report for a raw case file.

use anyhow::Context;
use cgd_cases::loader::read_rows_from_path;
use cgd_cases::record::{CaseRow, HEADERS};
use cgd_data::sampling::count_duplicates;
use cgd_utils::dates::{format_date, parse_date_flexible};
use chrono::NaiveDate;
use std::fmt;
use std::path::Path;

/// Summary of what a raw file contains before cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub rows: usize,
    /// Blank cells per column, in [`HEADERS`] order
    pub missing: Vec<(&'static str, usize)>,
    pub duplicates: usize,
    pub unparseable_dates: usize,
    pub date_span: Option<(NaiveDate, NaiveDate)>,
}

pub fn inspect_rows(rows: &[CaseRow]) -> InspectReport {
    let mut missing = [0usize; 8];
    for row in rows {
        for (count, blank) in missing.iter_mut().zip(row.missing_columns()) {
            *count += usize::from(blank);
        }
    }

    let mut unparseable_dates = 0;
    let mut date_span: Option<(NaiveDate, NaiveDate)> = None;
    for row in rows {
        match parse_date_flexible(&row.date) {
            Ok(date) => {
                date_span = Some(match date_span {
                    Some((first, last)) => (first.min(date), last.max(date)),
                    None => (date, date),
                });
            }
            Err(_) => unparseable_dates += 1,
        }
    }

    InspectReport {
        rows: rows.len(),
        missing: HEADERS.into_iter().zip(missing).collect(),
        duplicates: count_duplicates(rows),
        unparseable_dates,
        date_span,
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}", self.rows)?;
        writeln!(f, "Missing values:")?;
        for (column, count) in &self.missing {
            writeln!(f, "  {:<16}{}", column, count)?;
        }
        writeln!(f, "Exact duplicates: {}", self.duplicates)?;
        writeln!(f, "Unparseable dates: {}", self.unparseable_dates)?;
        match self.date_span {
            Some((first, last)) => write!(
                f,
                "Date span: {} to {}",
                format_date(&first),
                format_date(&last)
            ),
            None => write!(f, "Date span: none"),
        }
    }
}

pub fn run_inspect(input: &Path) -> anyhow::Result<()> {
    let rows = read_rows_from_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    println!("{}", inspect_rows(&rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgd_cases::loader::read_rows_from_str;

    const RAW_CSV: &str = r#"Province/State,Country/Region,Lat,Long,Date,Confirmed,Deaths,Recovered
,Afghanistan,33.9.391,67.7.09,2020-01-22,0,0,
,Afghanistan,33.9.391,67.7.09,2020-01-22,0,0,
Hubei,China,30.9.756,112.2.707,2020-01-24,444,17,28
,Italy,41.8.719,12.5.674,not a date,9172,463,724
"#;

    #[test]
    fn test_inspect_rows() {
        let rows = read_rows_from_str(RAW_CSV).unwrap();
        let report = inspect_rows(&rows);
        assert_eq!(report.rows, 4);
        assert_eq!(report.missing[0], ("Province/State", 3));
        assert_eq!(report.missing[7], ("Recovered", 2));
        assert_eq!(report.missing[2], ("Lat", 0));
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.unparseable_dates, 1);
        assert_eq!(
            report.date_span,
            Some((
                NaiveDate::from_ymd_opt(2020, 1, 22).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 24).unwrap()
            ))
        );

        let text = report.to_string();
        assert!(text.contains("Exact duplicates: 1"));
        assert!(text.ends_with("Date span: 2020-01-22 to 2020-01-24"));
    }

    #[test]
    fn test_inspect_empty() {
        let report = inspect_rows(&[]);
        assert_eq!(report.rows, 0);
        assert_eq!(report.date_span, None);
        assert!(report.to_string().ends_with("Date span: none"));
    }
}
