use crate::projection::ProjectedRecord;
use cgd_cases::record::CaseRecord;
use cgd_cases::risk::RiskCategory;
use chrono::NaiveDate;
use serde::Serialize;

/// A projected record together with the risk category its count implies.
///
/// The category is computed on construction and the record cannot be
/// changed afterwards, so the two never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    projected: ProjectedRecord,
    risk: RiskCategory,
}

impl ClassifiedRecord {
    pub fn new(projected: ProjectedRecord) -> Self {
        let risk = RiskCategory::classify_reported(projected.record().confirmed);
        Self { projected, risk }
    }

    pub fn risk(&self) -> RiskCategory {
        self.risk
    }

    pub fn record(&self) -> &CaseRecord {
        self.projected.record()
    }

    pub fn projected(&self) -> &ProjectedRecord {
        &self.projected
    }

    pub fn date(&self) -> NaiveDate {
        self.record().date
    }

    pub fn confirmed(&self) -> Option<u64> {
        self.record().confirmed
    }
}

pub fn classify_all(projected: Vec<ProjectedRecord>) -> Vec<ClassifiedRecord> {
    projected.into_iter().map(ClassifiedRecord::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(confirmed: Option<u64>) -> CaseRecord {
        CaseRecord {
            region: None,
            country: "Brazil".to_string(),
            latitude: -14.235,
            longitude: -51.9253,
            date: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            confirmed,
            deaths: None,
            recovered: None,
        }
    }

    #[test]
    fn test_category_follows_count() {
        let classified = classify_all(vec![
            ProjectedRecord::new(record(Some(1000))),
            ProjectedRecord::new(record(Some(1001))),
            ProjectedRecord::new(record(Some(10001))),
            ProjectedRecord::new(record(None)),
        ]);
        let risks: Vec<RiskCategory> = classified.iter().map(|r| r.risk()).collect();
        assert_eq!(
            risks,
            vec![
                RiskCategory::Low,
                RiskCategory::Medium,
                RiskCategory::High,
                RiskCategory::Low
            ]
        );
        assert_eq!(classified[2].confirmed(), Some(10001));
        assert_eq!(classified[3].confirmed(), None);
        assert!(classified[0].projected().y() < 0.0);
    }
}
