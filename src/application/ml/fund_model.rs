use crate::domain::allocation::AllocationBreakdown;
use crate::domain::errors::{InferenceError, RetrievalError};
use crate::domain::profile::FinancialProfile;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;

/// Input columns in the order the model was trained against.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "Income",
    "Age",
    "Risk_Appetite",
    "Net_Worth",
    "Investment_Horizon",
    "Expected_Return",
    "Portfolio_Volatility",
];

/// Output columns, one per allocation category, in category order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "Stock_Allocation",
    "Bond_Allocation",
    "FD_Allocation",
    "ETF_Allocation",
    "Cash_Allocation",
    "Other_Allocation",
];

type HeadModel = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// One trained regression head, producing a single output column.
#[derive(Serialize, Deserialize)]
pub struct AllocationHead {
    output: String,
    model: HeadModel,
}

impl AllocationHead {
    pub fn new(output: impl Into<String>, model: HeadModel) -> Self {
        Self {
            output: output.into(),
            model,
        }
    }
}

/// The deserialized predictor bundle.
///
/// The artifact declares its own schema: the feature columns it was trained
/// on, the risk appetite levels it knows, and one regression head per output
/// column. Loading rejects any bundle whose declared schema differs from the
/// compiled-in contract, so a retrained artifact with different expectations
/// fails at provisioning time instead of producing misaligned predictions.
#[derive(Serialize, Deserialize)]
pub struct FundModel {
    features: Vec<String>,
    risk_levels: Vec<String>,
    heads: Vec<AllocationHead>,
}

impl FundModel {
    /// Assembles and validates a bundle from trained parts.
    pub fn assemble(
        features: Vec<String>,
        risk_levels: Vec<String>,
        heads: Vec<AllocationHead>,
    ) -> Result<Self, RetrievalError> {
        let model = Self {
            features,
            risk_levels,
            heads,
        };
        model.validate_schema()?;
        Ok(model)
    }

    /// Deserializes an artifact and checks its declared schema.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RetrievalError> {
        let model: FundModel = serde_json::from_slice(bytes)
            .map_err(|e| RetrievalError::Deserialize {
                reason: e.to_string(),
            })?;
        model.validate_schema()?;
        Ok(model)
    }

    fn validate_schema(&self) -> Result<(), RetrievalError> {
        if self.features.len() != FEATURE_COLUMNS.len()
            || self
                .features
                .iter()
                .zip(FEATURE_COLUMNS)
                .any(|(declared, expected)| declared != expected)
        {
            return Err(RetrievalError::SchemaMismatch {
                reason: format!(
                    "expected feature columns {:?}, artifact declares {:?}",
                    FEATURE_COLUMNS, self.features
                ),
            });
        }

        if self.risk_levels.is_empty() {
            return Err(RetrievalError::SchemaMismatch {
                reason: "artifact declares no risk appetite levels".to_string(),
            });
        }

        if self.heads.len() != OUTPUT_COLUMNS.len() {
            return Err(RetrievalError::SchemaMismatch {
                reason: format!(
                    "expected {} output heads, artifact has {}",
                    OUTPUT_COLUMNS.len(),
                    self.heads.len()
                ),
            });
        }

        for (head, expected) in self.heads.iter().zip(OUTPUT_COLUMNS) {
            if head.output != expected {
                return Err(RetrievalError::SchemaMismatch {
                    reason: format!(
                        "expected output column {}, artifact has {}",
                        expected, head.output
                    ),
                });
            }
        }

        Ok(())
    }

    pub fn feature_columns(&self) -> &[String] {
        &self.features
    }

    pub fn risk_levels(&self) -> &[String] {
        &self.risk_levels
    }

    fn risk_code(&self, value: &str) -> Result<f64, InferenceError> {
        self.risk_levels
            .iter()
            .position(|level| level == value)
            .map(|idx| idx as f64)
            .ok_or_else(|| InferenceError::UnknownRiskLevel {
                value: value.to_string(),
            })
    }

    /// Encodes a profile into the model's column order. Numeric fields pass
    /// through unmodified; only the risk appetite is mapped to its trained
    /// category code.
    pub fn feature_row(&self, profile: &FinancialProfile) -> Result<Vec<f64>, InferenceError> {
        let risk = self.risk_code(profile.risk_appetite.as_str())?;
        Ok(vec![
            profile.income,
            f64::from(profile.age),
            risk,
            profile.net_worth,
            f64::from(profile.investment_horizon_years),
            profile.expected_return_pct,
            profile.portfolio_volatility_pct,
        ])
    }

    /// Runs one profile through the six heads. Stateless and synchronous.
    pub fn predict(
        &self,
        profile: &FinancialProfile,
    ) -> Result<AllocationBreakdown, InferenceError> {
        let row = self.feature_row(profile)?;
        let input = DenseMatrix::from_2d_vec(&vec![row]).map_err(|e| InferenceError::Rejected {
            reason: e.to_string(),
        })?;

        let mut values = [0.0_f64; 6];
        for (slot, head) in values.iter_mut().zip(&self.heads) {
            let predictions =
                head.model
                    .predict(&input)
                    .map_err(|e| InferenceError::Rejected {
                        reason: e.to_string(),
                    })?;
            let value = predictions
                .first()
                .copied()
                .ok_or(InferenceError::ShapeMismatch {
                    expected: 1,
                    got: 0,
                })?;
            // Allocations are non-negative by contract; floor stray negatives.
            *slot = value.max(0.0);
        }

        Ok(AllocationBreakdown::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allocation::AllocationCategory;
    use crate::domain::risk_appetite::RiskAppetite;
    use smartcore::linear::linear_regression::LinearRegressionParameters;

    fn training_rows() -> Vec<Vec<f64>> {
        (0..12)
            .map(|i| {
                let i = i as f64;
                vec![
                    20_000.0 + 80_000.0 * i,
                    20.0 + 6.0 * i,
                    i % 3.0,
                    50_000.0 * (i + 1.0),
                    1.0 + 3.0 * i,
                    2.0 + i,
                    5.0 + 2.0 * i,
                ]
            })
            .collect()
    }

    fn fit_head(output: &str, targets: Vec<f64>) -> AllocationHead {
        let x = DenseMatrix::from_2d_vec(&training_rows()).expect("training matrix");
        let model = LinearRegression::fit(&x, &targets, LinearRegressionParameters::default())
            .expect("fit head");
        AllocationHead::new(output, model)
    }

    fn demo_model() -> FundModel {
        let bases = [35.0, 25.0, 15.0, 10.0, 10.0, 5.0];
        let heads = OUTPUT_COLUMNS
            .iter()
            .zip(bases)
            .map(|(output, base)| {
                let targets = (0..12).map(|i| base + 0.1 * i as f64).collect();
                fit_head(output, targets)
            })
            .collect();

        FundModel::assemble(
            FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec!["Low".to_string(), "Medium".to_string(), "High".to_string()],
            heads,
        )
        .expect("demo model")
    }

    fn sample_profile() -> FinancialProfile {
        FinancialProfile {
            income: 100_000.0,
            age: 30,
            net_worth: 500_000.0,
            risk_appetite: RiskAppetite::Medium,
            investment_horizon_years: 10,
            expected_return_pct: 7.0,
            portfolio_volatility_pct: 10.0,
        }
    }

    #[test]
    fn test_predict_returns_six_non_negative_values() {
        let model = demo_model();
        let breakdown = model.predict(&sample_profile()).expect("predict");

        let entries: Vec<_> = breakdown.entries().collect();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].0, AllocationCategory::Stock);
        assert_eq!(entries[5].0, AllocationCategory::Other);
        for (category, value) in entries {
            assert!(
                value >= 0.0,
                "{:?} allocation must be non-negative, got {}",
                category,
                value
            );
        }
    }

    #[test]
    fn test_negative_head_output_is_floored() {
        let mut heads: Vec<AllocationHead> = Vec::new();
        for (idx, output) in OUTPUT_COLUMNS.iter().enumerate() {
            // Third head trained on strictly negative targets.
            let targets: Vec<f64> = if idx == 2 {
                (0..12).map(|i| -40.0 - 0.1 * i as f64).collect()
            } else {
                (0..12).map(|i| 20.0 + 0.1 * i as f64).collect()
            };
            heads.push(fit_head(output, targets));
        }

        let model = FundModel::assemble(
            FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec!["Low".to_string(), "Medium".to_string(), "High".to_string()],
            heads,
        )
        .expect("model");

        let breakdown = model.predict(&sample_profile()).expect("predict");
        assert_eq!(breakdown.value(AllocationCategory::FixedDeposit), 0.0);
        assert!(breakdown.value(AllocationCategory::Stock) > 0.0);
    }

    #[test]
    fn test_unknown_risk_level_is_rejected() {
        let bases = [35.0, 25.0, 15.0, 10.0, 10.0, 5.0];
        let heads = OUTPUT_COLUMNS
            .iter()
            .zip(bases)
            .map(|(output, base)| {
                let targets = (0..12).map(|i| base + 0.1 * i as f64).collect();
                fit_head(output, targets)
            })
            .collect();

        // Trained without the High level.
        let model = FundModel::assemble(
            FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec!["Low".to_string(), "Medium".to_string()],
            heads,
        )
        .expect("model");

        let mut profile = sample_profile();
        profile.risk_appetite = RiskAppetite::High;

        match model.predict(&profile) {
            Err(InferenceError::UnknownRiskLevel { value }) => assert_eq!(value, "High"),
            other => panic!("expected UnknownRiskLevel, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_feature_row_preserves_order_and_values() {
        let model = demo_model();
        let row = model.feature_row(&sample_profile()).expect("encode");

        assert_eq!(
            row,
            vec![100_000.0, 30.0, 1.0, 500_000.0, 10.0, 7.0, 10.0]
        );
    }

    #[test]
    fn test_assemble_rejects_wrong_output_order() {
        let mut outputs: Vec<&str> = OUTPUT_COLUMNS.to_vec();
        outputs.swap(0, 1);
        let heads = outputs
            .iter()
            .map(|output| {
                let targets = (0..12).map(|i| 10.0 + 0.1 * i as f64).collect();
                fit_head(output, targets)
            })
            .collect();

        let result = FundModel::assemble(
            FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec!["Low".to_string()],
            heads,
        );
        assert!(matches!(
            result,
            Err(RetrievalError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_assemble_rejects_wrong_feature_columns() {
        let heads = OUTPUT_COLUMNS
            .iter()
            .map(|output| {
                let targets = (0..12).map(|i| 10.0 + 0.1 * i as f64).collect();
                fit_head(output, targets)
            })
            .collect();

        let result = FundModel::assemble(
            vec!["Income".to_string(), "Age".to_string()],
            vec!["Low".to_string()],
            heads,
        );
        assert!(matches!(
            result,
            Err(RetrievalError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_from_slice_rejects_garbage() {
        let result = FundModel::from_slice(b"not a model bundle");
        assert!(matches!(result, Err(RetrievalError::Deserialize { .. })));
    }

    #[test]
    fn test_artifact_round_trip_preserves_predictions() {
        let model = demo_model();
        let expected = model.predict(&sample_profile()).expect("predict");

        let bytes = serde_json::to_vec(&model).expect("serialize");
        let reloaded = FundModel::from_slice(&bytes).expect("reload");
        let actual = reloaded.predict(&sample_profile()).expect("predict");

        for ((_, a), (_, b)) in expected.entries().zip(actual.entries()) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}
