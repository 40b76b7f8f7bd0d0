use std::path::PathBuf;

/// Bounds enforced by the profile form widgets.
///
/// This is the only place input ranges are declared; downstream code passes
/// values through unmodified.
#[derive(Debug, Clone)]
pub struct InputBounds {
    pub income_min: f64,
    pub income_max: f64,
    pub net_worth_min: f64,
    pub net_worth_max: f64,
    pub age_min: u8,
    pub age_max: u8,
    pub horizon_min_years: u8,
    pub horizon_max_years: u8,
    pub expected_return_min_pct: f64,
    pub expected_return_max_pct: f64,
    pub volatility_min_pct: f64,
    pub volatility_max_pct: f64,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            income_min: 1_000.0,
            income_max: 1_000_000.0,
            net_worth_min: 0.0,
            net_worth_max: 10_000_000.0,
            age_min: 18,
            age_max: 100,
            horizon_min_years: 1,
            horizon_max_years: 40,
            expected_return_min_pct: 0.0,
            expected_return_max_pct: 20.0,
            volatility_min_pct: 0.0,
            volatility_max_pct: 30.0,
        }
    }
}

/// Application configuration. Everything is compiled in: the advisor takes no
/// CLI flags and reads no environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote source for the serialized model bundle.
    pub model_url: String,
    /// Local path the bundle is persisted to and loaded from.
    pub model_path: PathBuf,
    pub bounds: InputBounds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_url:
                "https://www.dropbox.com/scl/fi/ufmclyehxqk1vrgxkomci/fund_allocation_model.json?dl=1"
                    .to_string(),
            model_path: PathBuf::from("data/fund_allocation_model.json"),
            bounds: InputBounds::default(),
        }
    }
}
