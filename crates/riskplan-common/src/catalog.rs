//! Asset and threat catalogs
//!
//! Identity for both collections is the stable row index held by the
//! caller. Rows are immutable once referenced by an assessment pass.

use serde::{Deserialize, Serialize};

/// Coarse asset worth classification driving base mitigation cost
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValueTier {
    /// Low-value asset
    Low,
    /// Medium-value asset (default when unknown)
    #[default]
    Medium,
    /// High-value asset
    High,
}

impl ValueTier {
    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueTier::Low => "Low",
            ValueTier::Medium => "Medium",
            ValueTier::High => "High",
        }
    }
}

impl std::fmt::Display for ValueTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An asset under assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset name
    pub name: String,
    /// Worth classification
    pub value_tier: ValueTier,
    /// Owning team or department
    pub owner: String,
}

impl Asset {
    /// Create a new asset
    pub fn new(name: impl Into<String>, value_tier: ValueTier, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_tier,
            owner: owner.into(),
        }
    }
}

/// A threat scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    /// Threat name
    pub name: String,
    /// Threat category (e.g. "Malware", "Insider")
    pub category: String,
}

impl Threat {
    /// Create a new threat
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Seed asset catalog for the Regional Health Clinic scenario
pub fn default_assets() -> Vec<Asset> {
    vec![
        Asset::new(
            "Electronic Health Records (EHR) Database",
            ValueTier::High,
            "IT",
        ),
        Asset::new("On-prem SharePoint Document Portal", ValueTier::High, "Records"),
        Asset::new("Patient Workstations (Clinical)", ValueTier::Medium, "Operations"),
        Asset::new("Medical Imaging Storage (PACS)", ValueTier::High, "Radiology"),
        Asset::new("Billing & Financial Systems", ValueTier::High, "Finance"),
    ]
}

/// Seed threat catalog for the Regional Health Clinic scenario
pub fn default_threats() -> Vec<Threat> {
    vec![
        Threat::new("Ransomware / Data encryption", "Malware"),
        Threat::new(
            "Unauthorized access via unpatched web app (e.g., SharePoint zero-day)",
            "Vulnerability Exploit",
        ),
        Threat::new("Insider data exfiltration", "Insider"),
        Threat::new("Phishing leading to credential compromise", "Social Engineering"),
        Threat::new("Third-party vendor compromise", "Supply Chain"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogs() {
        let assets = default_assets();
        let threats = default_threats();

        assert_eq!(assets.len(), 5);
        assert_eq!(threats.len(), 5);
        assert_eq!(assets[0].value_tier, ValueTier::High);
        assert_eq!(assets[2].value_tier, ValueTier::Medium);
        assert_eq!(threats[0].category, "Malware");
    }

    #[test]
    fn test_value_tier_display() {
        assert_eq!(ValueTier::Low.to_string(), "Low");
        assert_eq!(ValueTier::High.as_str(), "High");
        assert_eq!(ValueTier::default(), ValueTier::Medium);
    }
}
