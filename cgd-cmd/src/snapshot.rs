//! Export of the dashboard's render payload for a fixed selection.

use anyhow::{anyhow, Context};
use cgd_cases::loader::{parse_clean_rows, read_rows_from_path};
use cgd_data::filter::{FilterEngine, RiskFilter, Selection};
use cgd_data::pipeline::build_engine;
use cgd_data::render::RenderPayload;
use cgd_data::style::ViewMode;
use cgd_utils::dates::parse_date;
use log::info;
use std::path::Path;

/// Apply `date` and `risk` to `engine` in one step.
///
/// Unlike the interactive handlers, an unknown value here is an error:
/// the caller asked for something specific. On error the engine keeps
/// its previous selection.
pub fn apply_selection(
    engine: &mut FilterEngine,
    date: Option<&str>,
    risk: &str,
) -> anyhow::Result<()> {
    let date = match date {
        Some(date) => parse_date(date)?,
        None => engine.selection().date,
    };
    let risk: RiskFilter = risk.parse()?;
    engine.try_apply(Selection { date, risk })?;
    Ok(())
}

pub fn run_snapshot(
    input: &Path,
    output: &Path,
    date: Option<&str>,
    risk: &str,
    view: &str,
) -> anyhow::Result<()> {
    let view_mode: ViewMode = view.parse().map_err(|e: String| anyhow!(e))?;
    let rows = read_rows_from_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let records = parse_clean_rows(&rows)
        .with_context(|| format!("{} is not a cleaned case file", input.display()))?;

    let mut engine = build_engine(records)?;
    apply_selection(&mut engine, date, risk)?;

    let payload = RenderPayload::from_engine(&engine, view_mode);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Snapshot complete. {} points for {} / {} written to {}",
        payload.points.len(),
        payload.selection.date,
        payload.selection.risk,
        output.display()
    );
    Ok(())
}
