//! Selection state and the filter that decides which records are drawn.
//!
//! The dashboard has two inputs, a date and a risk filter. Any change to
//! either one recomputes the displayed subset from scratch with
//! [`recompute`]. [`FilterEngine`] owns the record set and the current
//! [`Selection`]. Values outside the known dates or categories are logged
//! and ignored, leaving the last displayed subset as it was.

use crate::classify::ClassifiedRecord;
use cgd_cases::error::{CaseError, Result};
use cgd_cases::risk::RiskCategory;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::{fmt, str::FromStr};

/// Dropdown choice: every category, or just one.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum RiskFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl RiskFilter {
    /// Options in the order the dropdown lists them.
    pub const OPTIONS: [RiskFilter; 4] = [
        RiskFilter::All,
        RiskFilter::High,
        RiskFilter::Medium,
        RiskFilter::Low,
    ];

    pub fn matches(&self, risk: RiskCategory) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Low => risk == RiskCategory::Low,
            RiskFilter::Medium => risk == RiskCategory::Medium,
            RiskFilter::High => risk == RiskCategory::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskFilter::All => "All",
            RiskFilter::Low => "Low",
            RiskFilter::Medium => "Medium",
            RiskFilter::High => "High",
        }
    }
}

impl From<RiskCategory> for RiskFilter {
    fn from(risk: RiskCategory) -> Self {
        match risk {
            RiskCategory::Low => RiskFilter::Low,
            RiskCategory::Medium => RiskFilter::Medium,
            RiskCategory::High => RiskFilter::High,
        }
    }
}

impl fmt::Display for RiskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskFilter {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "All" => Ok(RiskFilter::All),
            other => other.parse::<RiskCategory>().map(RiskFilter::from),
        }
    }
}

/// What the user currently has selected.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Selection {
    pub date: NaiveDate,
    pub risk: RiskFilter,
}

impl Selection {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            risk: RiskFilter::All,
        }
    }

    pub fn with_risk(self, risk: RiskFilter) -> Self {
        Self { risk, ..self }
    }

    pub fn matches(&self, record: &ClassifiedRecord) -> bool {
        record.date() == self.date && self.risk.matches(record.risk())
    }
}

/// Records drawn for `selection`, in record-set order.
///
/// Pure: the same inputs always give the same output. No match is an
/// empty result, not an error.
pub fn recompute<'a>(
    selection: &Selection,
    records: &'a [ClassifiedRecord],
) -> Vec<&'a ClassifiedRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

fn recompute_indices(selection: &Selection, records: &[ClassifiedRecord]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| selection.matches(r).then_some(i))
        .collect()
}

/// Owner of the cleaned record set and the interactive selection.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    records: Vec<ClassifiedRecord>,
    dates: Vec<NaiveDate>,
    selection: Selection,
    displayed: Vec<usize>,
}

impl FilterEngine {
    /// Start on the earliest date with every category shown.
    pub fn new(records: Vec<ClassifiedRecord>) -> Result<Self> {
        let dates: Vec<NaiveDate> = records
            .iter()
            .map(|r| r.date())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let earliest = *dates.first().ok_or(CaseError::InsufficientData {
            needed: 1,
            found: 0,
        })?;
        let selection = Selection::new(earliest);
        let displayed = recompute_indices(&selection, &records);
        debug!(
            "[CGD] filter: {} records over {} dates, {} shown on {}",
            records.len(),
            dates.len(),
            displayed.len(),
            earliest
        );
        Ok(Self {
            records,
            dates,
            selection,
            displayed,
        })
    }

    /// Every record, in load order.
    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }

    /// Distinct dates, ascending. These are the slider stops.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Slider position of the selected date.
    pub fn date_index(&self) -> usize {
        self.dates
            .binary_search(&self.selection.date)
            .unwrap_or_default()
    }

    /// The subset currently on screen.
    pub fn displayed(&self) -> Vec<&ClassifiedRecord> {
        self.displayed.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    /// Apply `selection` after checking it against the known domains.
    pub fn try_apply(&mut self, selection: Selection) -> Result<()> {
        if self.dates.binary_search(&selection.date).is_err() {
            return Err(CaseError::UnknownSelection(format!(
                "date {} is not in the record set",
                selection.date
            )));
        }
        self.selection = selection;
        self.displayed = recompute_indices(&self.selection, &self.records);
        debug!(
            "[CGD] filter: {} / {} -> {} records",
            self.selection.date,
            self.selection.risk,
            self.displayed.len()
        );
        Ok(())
    }

    pub fn try_select_date(&mut self, date: NaiveDate) -> Result<()> {
        self.try_apply(Selection { date, ..self.selection })
    }

    pub fn try_select_date_index(&mut self, index: usize) -> Result<()> {
        let date = *self.dates.get(index).ok_or_else(|| {
            CaseError::UnknownSelection(format!(
                "date index {} is outside 0..{}",
                index,
                self.dates.len()
            ))
        })?;
        self.try_select_date(date)
    }

    pub fn try_select_risk(&mut self, risk: RiskFilter) -> Result<()> {
        self.try_apply(self.selection.with_risk(risk))
    }

    /// Interaction handler for the date control. Returns whether the
    /// selection was accepted.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        let result = self.try_select_date(date);
        Self::accept(result)
    }

    /// Interaction handler for the slider.
    pub fn select_date_index(&mut self, index: usize) -> bool {
        let result = self.try_select_date_index(index);
        Self::accept(result)
    }

    /// Interaction handler for the risk dropdown.
    pub fn select_risk(&mut self, risk: RiskFilter) -> bool {
        let result = self.try_select_risk(risk);
        Self::accept(result)
    }

    /// Interaction handler taking the dropdown's raw option value.
    pub fn select_risk_label(&mut self, label: &str) -> bool {
        let result = label
            .parse::<RiskFilter>()
            .and_then(|risk| self.try_select_risk(risk));
        Self::accept(result)
    }

    fn accept(result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("[CGD] filter: Ignoring selection: {}", e);
                false
            }
        }
    }
}
