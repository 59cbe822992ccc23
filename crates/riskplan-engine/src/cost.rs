//! Mitigation cost model
//!
//! Base cost per asset value tier, scaled by a per-level multiplier.
//! The shipped defaults are the standard table; callers may deserialize
//! a custom model to reflect their own remediation economics.

use riskplan_common::{RiskLevel, ValueTier};
use serde::{Deserialize, Serialize};

/// Cost table: base USD per value tier, multiplier per risk level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Base cost for low-value assets
    pub base_low: u64,
    /// Base cost for medium-value assets
    pub base_medium: u64,
    /// Base cost for high-value assets
    pub base_high: u64,
    /// Multiplier for Low risk
    pub mult_low: f64,
    /// Multiplier for Medium risk
    pub mult_medium: f64,
    /// Multiplier for High risk
    pub mult_high: f64,
    /// Multiplier for Critical risk
    pub mult_critical: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            base_low: 500,
            base_medium: 5_000,
            base_high: 25_000,
            mult_low: 0.1,
            mult_medium: 0.5,
            mult_high: 1.0,
            mult_critical: 2.0,
        }
    }
}

impl CostModel {
    /// Base mitigation cost for an asset value tier
    pub fn base_cost(&self, tier: ValueTier) -> u64 {
        match tier {
            ValueTier::Low => self.base_low,
            ValueTier::Medium => self.base_medium,
            ValueTier::High => self.base_high,
        }
    }

    /// Cost multiplier for a risk level
    pub fn multiplier(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => self.mult_low,
            RiskLevel::Medium => self.mult_medium,
            RiskLevel::High => self.mult_high,
            RiskLevel::Critical => self.mult_critical,
        }
    }

    /// Estimated mitigation cost in whole USD, truncated
    pub fn estimate(&self, tier: ValueTier, level: RiskLevel) -> u64 {
        (self.base_cost(tier) as f64 * self.multiplier(level)) as u64
    }
}
