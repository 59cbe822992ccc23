//! Assessment pairs and per-pair score overrides
//!
//! Pairs are the full cross-product of the caller's asset and threat
//! collections, asset-major / threat-minor, regenerated fresh on every
//! call. Likelihood and impact default to 3 until overridden.

use riskplan_common::{Asset, Threat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-pair likelihood/impact/notes input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    /// Likelihood rating, nominally 1-5 (out-of-range values are accepted verbatim)
    pub likelihood: i32,
    /// Impact rating, nominally 1-5
    pub impact: i32,
    /// Free-form assessor notes
    pub notes: String,
}

impl Default for ScoreInput {
    fn default() -> Self {
        Self {
            likelihood: 3,
            impact: 3,
            notes: String::new(),
        }
    }
}

impl ScoreInput {
    /// Create a score input without notes
    pub fn new(likelihood: i32, impact: i32) -> Self {
        Self {
            likelihood,
            impact,
            notes: String::new(),
        }
    }

    /// Attach assessor notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Caller-held score overrides keyed by (asset_id, threat_id)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    entries: HashMap<(usize, usize), ScoreInput>,
}

impl ScoreSheet {
    /// Create an empty score sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score for one (asset, threat) pair
    pub fn set(&mut self, asset_id: usize, threat_id: usize, input: ScoreInput) {
        self.entries.insert((asset_id, threat_id), input);
    }

    /// Get the score for a pair, falling back to the default 3/3/""
    pub fn get(&self, asset_id: usize, threat_id: usize) -> ScoreInput {
        self.entries
            .get(&(asset_id, threat_id))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of explicit overrides
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any overrides have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One (asset × threat) row awaiting scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentPair {
    /// Row index of the asset in the caller's collection
    pub asset_id: usize,
    /// Asset name
    pub asset_name: String,
    /// Row index of the threat in the caller's collection
    pub threat_id: usize,
    /// Threat name
    pub threat_name: String,
    /// Likelihood rating
    pub likelihood: i32,
    /// Impact rating
    pub impact: i32,
    /// Assessor notes
    pub notes: String,
}

/// Build the full cross-product of assets and threats with scores applied.
///
/// Order is asset-major, threat-minor; empty collections yield an empty
/// vector.
pub fn build_pairs(assets: &[Asset], threats: &[Threat], scores: &ScoreSheet) -> Vec<AssessmentPair> {
    let mut pairs = Vec::with_capacity(assets.len() * threats.len());
    for (asset_id, asset) in assets.iter().enumerate() {
        for (threat_id, threat) in threats.iter().enumerate() {
            let input = scores.get(asset_id, threat_id);
            pairs.push(AssessmentPair {
                asset_id,
                asset_name: asset.name.clone(),
                threat_id,
                threat_name: threat.name.clone(),
                likelihood: input.likelihood,
                impact: input.impact,
                notes: input.notes,
            });
        }
    }
    pairs
}
