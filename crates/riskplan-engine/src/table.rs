//! Risk table builder
//!
//! Joins assessment pairs with asset metadata, classifies each score and
//! attaches treatment advice plus an estimated mitigation cost. Pure
//! transformation: identical inputs produce identical records.

use crate::assessment::AssessmentPair;
use crate::cost::CostModel;
use riskplan_common::{Asset, RiskAction, RiskLevel, ValueTier};
use serde::{Deserialize, Serialize};

/// One scored row of the risk table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    /// Asset name
    pub asset_name: String,
    /// Threat name
    pub threat_name: String,
    /// Likelihood rating
    pub likelihood: i32,
    /// Impact rating
    pub impact: i32,
    /// likelihood × impact
    pub risk_score: i64,
    /// Level classified from the score
    pub risk_level: RiskLevel,
    /// Effective recommendation (binary Mitigate/Accept)
    pub recommended_action: RiskAction,
    /// Treatment note with the estimated cost appended
    pub recommended_note_full: String,
    /// Estimated mitigation cost in whole USD
    #[serde(rename = "estimated_cost_USD")]
    pub estimated_cost_usd: u64,
}

/// Score every pair and produce one record per row, order preserved.
///
/// The asset value tier is looked up by row index; a pair referencing a
/// missing asset falls back to the Medium tier rather than erroring.
pub fn build_risk_table(
    pairs: &[AssessmentPair],
    assets: &[Asset],
    cost_model: &CostModel,
) -> Vec<RiskRecord> {
    let records: Vec<RiskRecord> = pairs
        .iter()
        .map(|pair| score_pair(pair, assets, cost_model))
        .collect();
    tracing::debug!("scored {} assessment pairs", records.len());
    records
}

fn score_pair(pair: &AssessmentPair, assets: &[Asset], cost_model: &CostModel) -> RiskRecord {
    let risk_score = i64::from(pair.likelihood) * i64::from(pair.impact);
    let risk_level = RiskLevel::from_score(risk_score);

    let value_tier = assets
        .get(pair.asset_id)
        .map(|a| a.value_tier)
        .unwrap_or(ValueTier::Medium);
    let estimated_cost_usd = cost_model.estimate(value_tier, risk_level);

    let advice = risk_level.advice();
    let recommended_note_full = format!(
        "{} | Estimated mitigation cost: ${}",
        advice.note, estimated_cost_usd
    );

    RiskRecord {
        asset_name: pair.asset_name.clone(),
        threat_name: pair.threat_name.clone(),
        likelihood: pair.likelihood,
        impact: pair.impact,
        risk_score,
        risk_level,
        recommended_action: RiskAction::from_level(risk_level),
        recommended_note_full,
        estimated_cost_usd,
    }
}
