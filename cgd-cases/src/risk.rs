use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Confirmed counts above this are `Medium` (unless also above `HIGH_THRESHOLD`).
pub const MEDIUM_THRESHOLD: u64 = 1_000;

/// Confirmed counts above this are `High`.
pub const HIGH_THRESHOLD: u64 = 10_000;

/// Three-level severity derived from a confirmed case count.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [RiskCategory::High, RiskCategory::Medium, RiskCategory::Low];

    /// Classify a confirmed case count.
    ///
    /// - `High`: confirmed > 10,000
    /// - `Medium`: 1,000 < confirmed <= 10,000
    /// - `Low`: confirmed <= 1,000
    pub fn classify(confirmed: u64) -> RiskCategory {
        if confirmed > HIGH_THRESHOLD {
            RiskCategory::High
        } else if confirmed > MEDIUM_THRESHOLD {
            RiskCategory::Medium
        } else {
            RiskCategory::Low
        }
    }

    /// Classify a count that may be missing. A blank count exceeds
    /// neither threshold, so it is `Low`.
    pub fn classify_reported(confirmed: Option<u64>) -> RiskCategory {
        confirmed.map_or(RiskCategory::Low, RiskCategory::classify)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskCategory {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(RiskCategory::Low),
            "Medium" => Ok(RiskCategory::Medium),
            "High" => Ok(RiskCategory::High),
            other => Err(CaseError::UnknownSelection(format!("risk category {:?}", other))),
        }
    }
}
