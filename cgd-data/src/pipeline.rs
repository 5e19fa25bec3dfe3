//! The cleaning pipeline and the dashboard preparation that follows it.
//!
//! Stage order is fixed: sample, then deduplicate the sample, then repair
//! coordinates. Sampling first means the drawn rows depend only on the
//! source file and the seed, not on how many duplicates it contains; the
//! cleaned set can therefore be smaller than `sample_size`.

use crate::classify::{classify_all, ClassifiedRecord};
use crate::filter::FilterEngine;
use crate::projection::project_all;
use crate::sampling::{deduplicate, sample, unique_keys};
use cgd_cases::error::Result;
use cgd_cases::record::{CaseRecord, CaseRow};
use log::info;
use serde::Serialize;

pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
pub const DEFAULT_SEED: u64 = 42;

/// Knobs for the cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Rows drawn from the source before deduplication
    pub sample_size: usize,
    /// RNG seed; the same seed and source always give the same sample
    pub seed: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Row counts at each stage of a cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CleaningReport {
    pub source_rows: usize,
    pub sampled_rows: usize,
    pub duplicates_removed: usize,
    pub key_conflicts_removed: usize,
    pub cleaned_rows: usize,
}

/// Output of [`clean`]: the cleaned records and how they were obtained.
#[derive(Debug, Clone)]
pub struct CleanedSet {
    pub records: Vec<CaseRecord>,
    pub report: CleaningReport,
}

/// Sample, deduplicate and normalize raw rows.
///
/// Any invalid coordinate, date or count aborts the whole run.
pub fn clean(raw: &[CaseRow], config: &PipelineConfig) -> Result<CleanedSet> {
    let sampled = sample(raw, config.sample_size, config.seed)?;
    let deduplicated = deduplicate(&sampled);
    let normalized = deduplicated
        .iter()
        .map(CaseRow::normalize)
        .collect::<Result<Vec<CaseRecord>>>()?;
    let normalized_rows = normalized.len();
    let records = unique_keys(normalized);

    let report = CleaningReport {
        source_rows: raw.len(),
        sampled_rows: sampled.len(),
        duplicates_removed: sampled.len() - deduplicated.len(),
        key_conflicts_removed: normalized_rows - records.len(),
        cleaned_rows: records.len(),
    };
    info!(
        "[CGD] pipeline: {} source rows -> {} sampled -> {} cleaned",
        report.source_rows, report.sampled_rows, report.cleaned_rows
    );
    Ok(CleanedSet { records, report })
}

/// Project and classify cleaned records for display.
pub fn prepare(records: Vec<CaseRecord>) -> Vec<ClassifiedRecord> {
    let projected = project_all(records);
    classify_all(projected)
}

/// Project, classify and hand the records to a fresh [`FilterEngine`].
pub fn build_engine(records: Vec<CaseRecord>) -> Result<FilterEngine> {
    FilterEngine::new(prepare(records))
}
