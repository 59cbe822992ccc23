//! Risk level classification and treatment recommendations

use serde::{Deserialize, Serialize};

/// Risk level derived from a likelihood × impact score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Acceptable residual risk, monitor only
    Low,
    /// Moderate risk, schedule controls
    Medium,
    /// Significant risk, urgent controls
    High,
    /// Immediate action required
    Critical,
}

impl RiskLevel {
    /// Classify a raw risk score into a level.
    ///
    /// Total over all integers: scores outside the usual [1,25] band
    /// still resolve through the same thresholds, no clamping.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 16 => RiskLevel::Critical,
            s if s >= 10 => RiskLevel::High,
            s if s >= 6 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    /// Treatment guidance for this level
    pub fn advice(&self) -> ActionAdvice {
        match self {
            RiskLevel::Critical => ActionAdvice {
                label: "Mitigate / Avoid",
                note: "Consider immediate isolation, emergency patching, rebuild; high-priority budget",
            },
            RiskLevel::High => ActionAdvice {
                label: "Mitigate / Transfer",
                note: "Apply controls, consider cyber-insurance for residual risk",
            },
            RiskLevel::Medium => ActionAdvice {
                label: "Mitigate",
                note: "Apply technical and procedural controls; schedule within 30 days",
            },
            RiskLevel::Low => ActionAdvice {
                label: "Accept",
                note: "Monitor and review periodically",
            },
        }
    }

    /// Get numeric value for sorting/comparison
    pub fn as_number(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }

    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Treatment guidance: a short action label plus a longer note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionAdvice {
    /// Action label, e.g. "Mitigate / Transfer"
    pub label: &'static str,
    /// Longer guidance note
    pub note: &'static str,
}

/// Effective recommendation recorded per assessment row.
///
/// Coarser than [`RiskLevel::advice`]: anything above Low collapses to
/// Mitigate. The richer advice label is kept for display legends only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskAction {
    /// Apply controls to reduce likelihood or impact
    Mitigate,
    /// Accept residual risk and monitor
    Accept,
}

impl RiskAction {
    /// Effective recommendation for a risk level
    pub fn from_level(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Medium | RiskLevel::High | RiskLevel::Critical => RiskAction::Mitigate,
            RiskLevel::Low => RiskAction::Accept,
        }
    }

    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAction::Mitigate => "Mitigate",
            RiskAction::Accept => "Accept",
        }
    }
}

impl std::fmt::Display for RiskAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
