//! Seeded subsampling and duplicate removal.

use cgd_cases::error::{CaseError, Result};
use cgd_cases::record::{CaseKey, CaseRecord, CaseRow};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Select `n` rows without replacement, reproducibly for a given `seed`.
///
/// The chosen rows keep their relative order from `rows`. The source slice
/// is only borrowed so it can be sampled again with another seed.
pub fn sample<T: Clone>(rows: &[T], n: usize, seed: u64) -> Result<Vec<T>> {
    if rows.len() < n {
        return Err(CaseError::InsufficientData {
            needed: n,
            found: rows.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices = rand::seq::index::sample(&mut rng, rows.len(), n).into_vec();
    indices.sort_unstable();
    debug!("[CGD] sampling: Selected {} of {} rows (seed {})", n, rows.len(), seed);

    Ok(indices.into_iter().map(|i| rows[i].clone()).collect())
}

/// Drop rows that are identical in every column, keeping the first copy.
pub fn deduplicate(rows: &[CaseRow]) -> Vec<CaseRow> {
    let mut seen: HashSet<&CaseRow> = HashSet::with_capacity(rows.len());
    let unique: Vec<CaseRow> = rows
        .iter()
        .filter(|row| seen.insert(*row))
        .cloned()
        .collect();
    if unique.len() != rows.len() {
        debug!(
            "[CGD] sampling: Removed {} duplicate rows",
            rows.len() - unique.len()
        );
    }
    unique
}

/// Count rows that repeat an earlier row exactly.
pub fn count_duplicates(rows: &[CaseRow]) -> usize {
    let mut seen: HashSet<&CaseRow> = HashSet::with_capacity(rows.len());
    rows.iter().filter(|row| !seen.insert(*row)).count()
}

/// Keep one record per `(region, country, date)`.
///
/// Exact duplicates are already gone by this point; records that still
/// collide disagree on some count. The first one wins and the rest are
/// logged.
pub fn unique_keys(records: Vec<CaseRecord>) -> Vec<CaseRecord> {
    let keep: Vec<bool> = {
        let mut seen: HashSet<CaseKey<'_>> = HashSet::with_capacity(records.len());
        records
            .iter()
            .map(|record| {
                let first = seen.insert(record.key());
                if !first {
                    warn!(
                        "[CGD] sampling: Dropping conflicting row for {} on {}",
                        record.place_name(),
                        record.date
                    );
                }
                first
            })
            .collect()
    };
    records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect()
}
