use crate::domain::risk_appetite::RiskAppetite;
use serde::{Deserialize, Serialize};

/// A user's financial profile as captured by the form.
///
/// Named fields keep the predictor's positional input contract explicit in
/// one place: encoding into the model's column order happens in the model
/// layer, never ad hoc. Values arrive already bounded by the form widgets and
/// are passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Annual income in dollars, positive.
    pub income: f64,
    pub age: u8,
    /// Net worth in dollars, non-negative.
    pub net_worth: f64,
    pub risk_appetite: RiskAppetite,
    pub investment_horizon_years: u8,
    pub expected_return_pct: f64,
    pub portfolio_volatility_pct: f64,
}
