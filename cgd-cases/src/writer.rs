use crate::error::Result;
use crate::record::{CaseRecord, HEADERS};
use log::info;
use std::io::Write;
use std::path::Path;

/// Write cleaned records with the shared column layout.
///
/// Headers are always written, even for an empty set.
pub fn write_records<W: Write>(writer: W, records: &[CaseRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.serialize(record.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write cleaned records to `path`, replacing any existing file.
///
/// The CSV is rendered into memory first so a failure never leaves a
/// half-written file behind.
pub fn write_records_to_path(path: &Path, records: &[CaseRecord]) -> Result<()> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;
    std::fs::write(path, buffer)?;
    info!(
        "[CGD] writer: Wrote {} records to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_clean_records;
    use chrono::NaiveDate;

    #[test]
    fn test_write_then_load() {
        let records = vec![
            CaseRecord {
                region: Some("Hubei".to_string()),
                country: "China".to_string(),
                latitude: 30.9756,
                longitude: 112.2707,
                date: NaiveDate::from_ymd_opt(2020, 1, 22).unwrap(),
                confirmed: Some(444),
                deaths: Some(17),
                recovered: Some(28),
            },
            CaseRecord {
                region: None,
                country: "Italy".to_string(),
                latitude: 41.8719,
                longitude: -12.5674,
                date: NaiveDate::from_ymd_opt(2020, 3, 9).unwrap(),
                confirmed: Some(9172),
                deaths: Some(463),
                recovered: None,
            },
        ];
        let mut buffer = Vec::new();
        write_records(&mut buffer, &records).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("Province/State,Country/Region,Lat,Long,Date,Confirmed,Deaths,Recovered\n"));
        assert!(text.contains("Hubei,China,30.9756,112.2707,2020-01-22,444,17,28"));
        assert!(text.contains(",Italy,41.8719,-12.5674,2020-03-09,9172,463,\n"));
        assert_eq!(load_clean_records(&text).unwrap(), records);
    }

    #[test]
    fn test_empty_has_header() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
