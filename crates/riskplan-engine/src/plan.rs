//! Plan aggregation
//!
//! Reduces the scored risk table into organization-level summary totals
//! and bundles it with the detail rows into an immutable snapshot.

use crate::table::RiskRecord;
use riskplan_common::RiskLevel;
use serde::{Deserialize, Serialize};

/// Organization-level summary counts and totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of assessed (asset × threat) pairs
    pub total_risks: usize,
    /// Records classified Critical
    pub critical_count: usize,
    /// Records classified High
    pub high_count: usize,
    /// Records classified Medium
    pub medium_count: usize,
    /// Records classified Low
    pub low_count: usize,
    /// Sum of estimated mitigation costs
    #[serde(rename = "estimated_total_mitigation_USD")]
    pub estimated_total_mitigation_usd: u64,
}

/// Exportable risk management plan snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Organization name
    pub organization: String,
    /// Preparer name
    pub prepared_by: String,
    /// Summary totals
    pub summary: PlanSummary,
    /// Detail rows in assessment order
    pub detailed_controls: Vec<RiskRecord>,
}

impl Plan {
    /// Aggregate a scored risk table into a plan.
    ///
    /// The four level counts partition the records exactly; an empty
    /// table yields an all-zero summary.
    pub fn build(
        organization: impl Into<String>,
        prepared_by: impl Into<String>,
        records: Vec<RiskRecord>,
    ) -> Self {
        let count_level =
            |level: RiskLevel| records.iter().filter(|r| r.risk_level == level).count();

        let summary = PlanSummary {
            total_risks: records.len(),
            critical_count: count_level(RiskLevel::Critical),
            high_count: count_level(RiskLevel::High),
            medium_count: count_level(RiskLevel::Medium),
            low_count: count_level(RiskLevel::Low),
            estimated_total_mitigation_usd: records.iter().map(|r| r.estimated_cost_usd).sum(),
        };
        tracing::debug!(
            total = summary.total_risks,
            critical = summary.critical_count,
            "aggregated risk plan"
        );

        Self {
            organization: organization.into(),
            prepared_by: prepared_by.into(),
            summary,
            detailed_controls: records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use riskplan_common::RiskAction;

    fn record(score: i64, cost: u64) -> RiskRecord {
        let level = RiskLevel::from_score(score);
        RiskRecord {
            asset_name: "A".into(),
            threat_name: "T".into(),
            likelihood: 0,
            impact: 0,
            risk_score: score,
            risk_level: level,
            recommended_action: RiskAction::from_level(level),
            recommended_note_full: String::new(),
            estimated_cost_usd: cost,
        }
    }

    #[test]
    fn test_counts_and_totals() {
        let records = vec![
            record(25, 50_000), // Critical
            record(12, 5_000),  // High
            record(6, 2_500),   // Medium
            record(1, 500),     // Low
            record(20, 50_000), // Critical
        ];
        let plan = Plan::build("Regional Health Clinic", "Risk Manager", records);

        assert_eq!(plan.summary.total_risks, 5);
        assert_eq!(plan.summary.critical_count, 2);
        assert_eq!(plan.summary.high_count, 1);
        assert_eq!(plan.summary.medium_count, 1);
        assert_eq!(plan.summary.low_count, 1);
        assert_eq!(plan.summary.estimated_total_mitigation_usd, 108_000);
    }

    #[test]
    fn test_empty_table() {
        let plan = Plan::build("Clinic", "RM", Vec::new());
        assert_eq!(plan.summary, PlanSummary::default());
        assert!(plan.detailed_controls.is_empty());
    }

    #[test]
    fn test_detail_order_preserved() {
        let records = vec![record(1, 0), record(25, 0), record(9, 0)];
        let plan = Plan::build("Clinic", "RM", records.clone());
        assert_eq!(plan.detailed_controls, records);
    }

    proptest! {
        #[test]
        fn prop_counts_partition_total(scores in proptest::collection::vec(-5i64..=30, 0..40)) {
            let records: Vec<RiskRecord> = scores.iter().map(|&s| record(s, 10)).collect();
            let plan = Plan::build("Clinic", "RM", records);

            let s = &plan.summary;
            prop_assert_eq!(
                s.critical_count + s.high_count + s.medium_count + s.low_count,
                s.total_risks
            );
            prop_assert_eq!(s.estimated_total_mitigation_usd, 10 * s.total_risks as u64);
        }
    }
}
