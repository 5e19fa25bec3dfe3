//! Cleaning run: raw CSV in, sampled and repaired CSV out.

use anyhow::Context;
use cgd_cases::loader::read_rows_from_path;
use cgd_cases::writer::write_records_to_path;
use cgd_data::pipeline::{clean, CleaningReport, PipelineConfig};
use log::info;
use std::path::Path;

/// Clean `input` into `output`.
///
/// Nothing is written unless every stage succeeds.
pub fn run_clean(
    input: &Path,
    output: &Path,
    sample_size: usize,
    seed: u64,
) -> anyhow::Result<()> {
    let config = PipelineConfig { sample_size, seed };
    let report = clean_file(input, output, &config)?;
    info!(
        "Clean complete. {} of {} rows written to {} ({} duplicates, {} key conflicts removed)",
        report.cleaned_rows,
        report.source_rows,
        output.display(),
        report.duplicates_removed,
        report.key_conflicts_removed
    );
    Ok(())
}

pub fn clean_file(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> anyhow::Result<CleaningReport> {
    let raw = read_rows_from_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let cleaned = clean(&raw, config)
        .with_context(|| format!("Failed to clean {}", input.display()))?;
    write_records_to_path(output, &cleaned.records)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(cleaned.report)
}
