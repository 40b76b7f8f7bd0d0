use serde::{Deserialize, Serialize};

/// User's risk appetite, the one categorical input the model consumes.
///
/// The string form of each variant is the exact category value the model was
/// trained against; the loaded bundle declares which of these it knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskAppetite {
    Low,
    Medium,
    High,
}

impl RiskAppetite {
    /// All variants in form-display order.
    pub const ALL: [RiskAppetite; 3] = [RiskAppetite::Low, RiskAppetite::Medium, RiskAppetite::High];

    /// The category value passed to the predictor.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAppetite::Low => "Low",
            RiskAppetite::Medium => "Medium",
            RiskAppetite::High => "High",
        }
    }

    /// Short human description shown next to the selector.
    pub fn hint(&self) -> &'static str {
        match self {
            RiskAppetite::Low => "Capital preservation first",
            RiskAppetite::Medium => "Balanced risk and return",
            RiskAppetite::High => "Growth over stability",
        }
    }
}

impl std::fmt::Display for RiskAppetite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
