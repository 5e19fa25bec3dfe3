use crate::coordinate::{canonical_coordinate, normalize_coordinate, Axis};
use crate::error::{CaseError, Result};
use cgd_utils::dates::{format_date, parse_date_flexible};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column headers shared by the raw and cleaned CSV files.
pub const HEADERS: [&str; 8] = [
    "Province/State",
    "Country/Region",
    "Lat",
    "Long",
    "Date",
    "Confirmed",
    "Deaths",
    "Recovered",
];

/// One CSV row exactly as it appears in the file.
///
/// Every field is kept as text so that exact duplicates can be detected
/// before anything is parsed. Extra columns in the source (`Active`,
/// `WHO Region`, ...) are ignored on read.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Default, Serialize, Deserialize)]
pub struct CaseRow {
    #[serde(rename = "Province/State", default)]
    pub region: String,
    #[serde(rename = "Country/Region")]
    pub country: String,
    #[serde(rename = "Lat")]
    pub lat: String,
    #[serde(rename = "Long")]
    pub long: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Confirmed", default)]
    pub confirmed: String,
    #[serde(rename = "Deaths", default)]
    pub deaths: String,
    #[serde(rename = "Recovered", default)]
    pub recovered: String,
}

/// A single parsed observation of case counts for a region on a date.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CaseRecord {
    /// Province or state, absent for country-level rows
    pub region: Option<String>,
    pub country: String,
    /// Decimal degrees in [-90, 90]
    pub latitude: f64,
    /// Decimal degrees in [-180, 180]
    pub longitude: f64,
    pub date: NaiveDate,
    /// Counts are `None` when the source cell was blank
    pub confirmed: Option<u64>,
    pub deaths: Option<u64>,
    pub recovered: Option<u64>,
}

/// Identity of an observation: where and when.
pub type CaseKey<'a> = (Option<&'a str>, &'a str, NaiveDate);

fn parse_count(raw: &str, field: &'static str) -> Result<Option<u64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(Some(n));
    }
    // Spreadsheet exports sometimes write counts as "523.0"
    match trimmed.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(Some(f as u64)),
        _ => Err(CaseError::InvalidCount {
            field,
            raw: raw.to_string(),
        }),
    }
}

/// Missing counts are written back as blank cells.
pub fn count_cell(count: Option<u64>) -> String {
    count.map(|n| n.to_string()).unwrap_or_default()
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    parse_date_flexible(raw).map_err(|e| CaseError::InvalidDate(e.0))
}

fn parse_degrees(raw: &str, axis: Axis) -> Result<f64> {
    let degrees = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| CaseError::InvalidCoordinate {
            axis,
            raw: raw.to_string(),
            reason: e.to_string(),
        })?;
    axis.check(degrees, raw)
}

impl CaseRow {
    /// Parse a raw row, repairing its corrupted `Lat`/`Long` values.
    pub fn normalize(&self) -> Result<CaseRecord> {
        self.to_record(normalize_coordinate)
    }

    /// Parse a row from an already-cleaned file where `Lat`/`Long` are
    /// plain decimal degrees.
    pub fn parse_clean(&self) -> Result<CaseRecord> {
        self.to_record(parse_degrees)
    }

    /// Which of the eight columns are blank, in [`HEADERS`] order.
    pub fn missing_columns(&self) -> [bool; 8] {
        [
            &self.region,
            &self.country,
            &self.lat,
            &self.long,
            &self.date,
            &self.confirmed,
            &self.deaths,
            &self.recovered,
        ]
        .map(|field| field.trim().is_empty())
    }

    fn to_record<F>(&self, coordinate: F) -> Result<CaseRecord>
    where
        F: Fn(&str, Axis) -> Result<f64>,
    {
        let region = self.region.trim();
        Ok(CaseRecord {
            region: if region.is_empty() {
                None
            } else {
                Some(region.to_string())
            },
            country: self.country.trim().to_string(),
            latitude: coordinate(&self.lat, Axis::Latitude)?,
            longitude: coordinate(&self.long, Axis::Longitude)?,
            date: parse_date(&self.date)?,
            confirmed: parse_count(&self.confirmed, "Confirmed")?,
            deaths: parse_count(&self.deaths, "Deaths")?,
            recovered: parse_count(&self.recovered, "Recovered")?,
        })
    }
}

impl CaseRecord {
    pub fn key(&self) -> CaseKey<'_> {
        (self.region.as_deref(), self.country.as_str(), self.date)
    }

    /// Serialize back into the shared column layout with canonical
    /// degree strings and ISO dates.
    pub fn to_row(&self) -> CaseRow {
        CaseRow {
            region: self.region.clone().unwrap_or_default(),
            country: self.country.clone(),
            lat: canonical_coordinate(self.latitude),
            long: canonical_coordinate(self.longitude),
            date: format_date(&self.date),
            confirmed: count_cell(self.confirmed),
            deaths: count_cell(self.deaths),
            recovered: count_cell(self.recovered),
        }
    }

    /// Label used in tooltips: "Region, Country" or just the country.
    pub fn place_name(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {}", region, self.country),
            None => self.country.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(lat: &str, long: &str) -> CaseRow {
        CaseRow {
            region: "".to_string(),
            country: "Afghanistan".to_string(),
            lat: lat.to_string(),
            long: long.to_string(),
            date: "2020-01-22".to_string(),
            confirmed: "1200".to_string(),
            deaths: "3".to_string(),
            recovered: "".to_string(),
        }
    }

    #[test]
    fn test_normalize_row() {
        let record = row("33.9.391", "677.0.90").normalize().unwrap();
        assert_eq!(record.region, None);
        assert_eq!(record.latitude, 33.9391);
        assert_eq!(record.longitude, 67.709);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2020, 1, 22).unwrap());
        assert_eq!(record.confirmed, Some(1200));
        assert_eq!(record.recovered, None);

        // Five digits still mean four fractional ones
        let short = row("33.9.391", "67.7.09").normalize().unwrap();
        assert_eq!(short.longitude, 6.7709);
        assert_eq!(record.place_name(), "Afghanistan");
    }

    #[test]
    fn test_clean_round_trip() {
        let record = row("339391", "67709").normalize().unwrap();
        let written = record.to_row();
        assert_eq!(written.lat, "33.9391");
        assert_eq!(written.long, "6.7709");
        assert_eq!(written.parse_clean().unwrap(), record);
    }

    #[test]
    fn test_blank_counts_stay_blank() {
        let mut blank = row("32.4.279", "53.6880");
        blank.confirmed = "".to_string();
        blank.recovered = " ".to_string();
        let record = blank.normalize().unwrap();
        assert_eq!(record.confirmed, None);
        assert_eq!(record.deaths, Some(3));
        assert_eq!(record.recovered, None);

        let written = record.to_row();
        assert_eq!(written.confirmed, "");
        assert_eq!(written.deaths, "3");
        assert_eq!(written.recovered, "");
        assert_eq!(written.parse_clean().unwrap(), record);
    }

    #[test]
    fn test_bad_fields() {
        let mut bad_count = row("339391", "67709");
        bad_count.deaths = "-4".to_string();
        assert!(matches!(
            bad_count.normalize(),
            Err(CaseError::InvalidCount { field: "Deaths", .. })
        ));

        let mut bad_date = row("339391", "67709");
        bad_date.date = "yesterday".to_string();
        assert!(matches!(bad_date.normalize(), Err(CaseError::InvalidDate(_))));

        assert!(row("33.9391", "67.709").parse_clean().is_ok());
        assert!(row("339391", "67.709").parse_clean().is_err());
    }

    #[test]
    fn test_float_counts() {
        assert_eq!(parse_count("523.0", "Confirmed").unwrap(), Some(523));
        assert_eq!(parse_count("", "Confirmed").unwrap(), None);
        assert!(parse_count("523.5", "Confirmed").is_err());
    }

    #[test]
    fn test_missing_columns() {
        let missing = row("1", "2").missing_columns();
        assert_eq!(missing, [true, false, false, false, false, false, false, true]);
    }
}
