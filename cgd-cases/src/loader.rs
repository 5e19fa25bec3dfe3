//! CSV loading for raw and cleaned case files.
//!
//! # CSV Format
//!
//! Both files carry headers. The columns that matter are
//! `Province/State,Country/Region,Lat,Long,Date,Confirmed,Deaths,Recovered`;
//! any others are skipped. Paths ending in `.gz` are decompressed on the fly.

use crate::error::Result;
use crate::record::{CaseRecord, CaseRow};
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read every row of a CSV stream without interpreting any field.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<CaseRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let rows = rdr
        .deserialize::<CaseRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    info!("[CGD] loader: Loaded {} rows", rows.len());
    Ok(rows)
}

/// Read raw rows from an in-memory CSV string.
pub fn read_rows_from_str(csv_data: &str) -> Result<Vec<CaseRow>> {
    read_rows(csv_data.as_bytes())
}

/// Read raw rows from a file, transparently handling gzip input.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<CaseRow>> {
    let file = BufReader::new(File::open(path)?);
    let is_gzip = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);
    if is_gzip {
        info!("[CGD] loader: Decompressing {}", path.display());
        read_rows(GzDecoder::new(file))
    } else {
        read_rows(file)
    }
}

/// Parse rows from a cleaned file (coordinates already in degrees).
///
/// Fails on the first row that does not parse; a cleaned file that no
/// longer satisfies its own invariants is not worth rendering.
pub fn parse_clean_rows(rows: &[CaseRow]) -> Result<Vec<CaseRecord>> {
    rows.iter().map(CaseRow::parse_clean).collect()
}

/// Load cleaned records from an in-memory CSV string.
pub fn load_clean_records(csv_data: &str) -> Result<Vec<CaseRecord>> {
    parse_clean_rows(&read_rows_from_str(csv_data)?)
}
