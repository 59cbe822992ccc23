//! Riskplan Engine
//!
//! Qualitative risk scoring for (asset × threat) pairs: classify each
//! likelihood × impact score into a risk level, recommend a treatment,
//! estimate a mitigation cost and aggregate everything into an
//! exportable plan.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        RISK ENGINE                              │
//! │                                                                 │
//! │  ┌────────────┐   ┌────────────┐   ┌──────────────────────┐    │
//! │  │   Asset    │   │   Threat   │   │      ScoreSheet      │    │
//! │  │  catalog   │   │  catalog   │   │ (per-pair overrides) │    │
//! │  └─────┬──────┘   └─────┬──────┘   └──────────┬───────────┘    │
//! │        │                │                     │                │
//! │  ┌─────▼────────────────▼─────────────────────▼───────────┐    │
//! │  │          ASSESSMENT PAIRS (cross-product)              │    │
//! │  └────────────────────────────┬───────────────────────────┘    │
//! │                               │                                │
//! │  ┌────────────────────────────▼───────────────────────────┐    │
//! │  │   RISK TABLE   score → level → action → cost → note    │    │
//! │  └────────────────────────────┬───────────────────────────┘    │
//! │                               │                                │
//! │  ┌──────────────┐  ┌──────────▼─────────┐  ┌──────────────┐   │
//! │  │  Cost model  │  │   Plan aggregator  │  │    Export    │   │
//! │  │  (config)    │  │  (summary counts)  │  │  JSON / CSV  │   │
//! │  └──────────────┘  └────────────────────┘  └──────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage is a pure function of its inputs: outputs are freshly
//! allocated, inputs never mutated, so calls are safe from any number
//! of threads as long as each call gets its own input snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assessment;
pub mod cost;
pub mod export;
pub mod plan;
pub mod table;

use thiserror::Error;

pub use assessment::{build_pairs, AssessmentPair, ScoreInput, ScoreSheet};
pub use cost::CostModel;
pub use export::{controls_to_csv, plan_to_json, write_controls_csv, write_plan_json};
pub use plan::{Plan, PlanSummary};
pub use riskplan_common::{Asset, RiskAction, RiskLevel, Threat, ValueTier};
pub use table::{build_risk_table, RiskRecord};

/// Engine error type.
///
/// Scoring and aggregation are total and never fail; only the export
/// surface can error.
#[derive(Debug, Error)]
pub enum RiskError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for the engine
pub type RiskResult<T> = Result<T, RiskError>;

/// Caller-side container for one assessment workflow.
///
/// Holds the editable catalogs, score sheet and cost model by value and
/// recomputes pairs, table and plan fresh on every call. No interior
/// mutability and no state shared between instances.
pub struct RiskEngine {
    /// Asset collection (row index = asset id)
    pub assets: Vec<Asset>,
    /// Threat collection (row index = threat id)
    pub threats: Vec<Threat>,
    /// Per-pair score overrides
    pub scores: ScoreSheet,
    /// Mitigation cost table
    pub cost_model: CostModel,
    /// Organization name stamped on the plan
    pub organization: String,
    /// Preparer name stamped on the plan
    pub prepared_by: String,
}

impl RiskEngine {
    /// Create an engine with the seed catalogs and default cost model
    pub fn new(organization: impl Into<String>, prepared_by: impl Into<String>) -> Self {
        Self {
            assets: riskplan_common::default_assets(),
            threats: riskplan_common::default_threats(),
            scores: ScoreSheet::new(),
            cost_model: CostModel::default(),
            organization: organization.into(),
            prepared_by: prepared_by.into(),
        }
    }

    /// Replace both catalogs (score sheet entries for removed rows simply stop matching)
    pub fn with_catalogs(mut self, assets: Vec<Asset>, threats: Vec<Threat>) -> Self {
        self.assets = assets;
        self.threats = threats;
        self
    }

    /// Replace the cost model
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    /// Record the score for one (asset, threat) pair
    pub fn set_score(&mut self, asset_id: usize, threat_id: usize, input: ScoreInput) {
        self.scores.set(asset_id, threat_id, input);
    }

    /// Current assessment pairs, regenerated from the catalogs
    pub fn pairs(&self) -> Vec<AssessmentPair> {
        build_pairs(&self.assets, &self.threats, &self.scores)
    }

    /// Scored risk table for the current inputs
    pub fn risk_table(&self) -> Vec<RiskRecord> {
        build_risk_table(&self.pairs(), &self.assets, &self.cost_model)
    }

    /// Aggregate the current inputs into a plan snapshot
    pub fn plan(&self) -> Plan {
        Plan::build(
            self.organization.clone(),
            self.prepared_by.clone(),
            self.risk_table(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workflow() {
        let engine = RiskEngine::new("Regional Health Clinic", "Risk Manager");
        let plan = engine.plan();

        // 5 assets × 5 threats, all defaulted to 3×3 = 9 → Medium
        assert_eq!(plan.summary.total_risks, 25);
        assert_eq!(plan.summary.medium_count, 25);
        assert_eq!(plan.summary.critical_count, 0);
        assert_eq!(plan.organization, "Regional Health Clinic");

        // Medium risk on a High asset: 25000 * 0.5 = 12500; on Medium: 5000 * 0.5
        let expected_total = 4 * 12_500 * 5 + 2_500 * 5;
        assert_eq!(plan.summary.estimated_total_mitigation_usd, expected_total as u64);
    }

    #[test]
    fn test_overrides_change_plan() {
        let mut engine = RiskEngine::new("Clinic", "RM");
        engine.set_score(0, 0, ScoreInput::new(4, 4));
        engine.set_score(2, 1, ScoreInput::new(1, 1));

        let plan = engine.plan();
        assert_eq!(plan.summary.critical_count, 1);
        assert_eq!(plan.summary.low_count, 1);
        assert_eq!(plan.summary.medium_count, 23);
        let s = &plan.summary;
        assert_eq!(
            s.critical_count + s.high_count + s.medium_count + s.low_count,
            s.total_risks
        );
    }

    #[test]
    fn test_recompute_is_fresh() {
        let mut engine = RiskEngine::new("Clinic", "RM");
        let before = engine.plan();
        engine.set_score(0, 0, ScoreInput::new(5, 5));
        let after = engine.plan();

        assert_eq!(before.summary.critical_count, 0);
        assert_eq!(after.summary.critical_count, 1);
    }

    #[test]
    fn test_empty_catalogs() {
        let engine = RiskEngine::new("Clinic", "RM").with_catalogs(Vec::new(), Vec::new());
        let plan = engine.plan();

        assert_eq!(plan.summary.total_risks, 0);
        assert_eq!(plan.summary.estimated_total_mitigation_usd, 0);
        assert!(plan.detailed_controls.is_empty());
    }

    #[test]
    fn test_detail_order_is_asset_major() {
        let mut engine = RiskEngine::new("Clinic", "RM");
        // Make the last pair critical; it must still come last
        engine.set_score(4, 4, ScoreInput::new(5, 5));

        let plan = engine.plan();
        let last = plan.detailed_controls.last().unwrap();
        assert_eq!(last.risk_level, RiskLevel::Critical);
        assert_eq!(last.asset_name, engine.assets[4].name);
        assert_eq!(last.threat_name, engine.threats[4].name);
    }
}
