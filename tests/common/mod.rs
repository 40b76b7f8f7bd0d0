//! Shared fixtures for the integration tests: a tiny deterministic model
//! bundle, unique artifact paths, and a canned one-shot HTTP server.
#![allow(dead_code)]

use fundsage::application::ml::fund_model::{
    AllocationHead, FundModel, FEATURE_COLUMNS, OUTPUT_COLUMNS,
};
use fundsage::config::{Config, InputBounds};
use fundsage::domain::profile::FinancialProfile;
use fundsage::domain::risk_appetite::RiskAppetite;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

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

/// A small bundle fitted on deterministic synthetic data. Predictions stay
/// positive across the configured input bounds.
pub fn demo_model() -> FundModel {
    demo_model_with_levels(vec![
        "Low".to_string(),
        "Medium".to_string(),
        "High".to_string(),
    ])
}

pub fn demo_model_with_levels(risk_levels: Vec<String>) -> FundModel {
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
        risk_levels,
        heads,
    )
    .expect("demo model")
}

/// The demo bundle serialized exactly as the artifact file stores it.
pub fn bundle_bytes() -> Vec<u8> {
    serde_json::to_vec(&demo_model()).expect("serialize bundle")
}

/// The end-to-end scenario profile.
pub fn sample_profile() -> FinancialProfile {
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

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// A unique artifact path under the system temp directory. The parent
/// directory is not created; the store is expected to handle that.
pub fn temp_artifact_path(tag: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir()
        .join(format!("fundsage-test-{}-{}-{}", tag, std::process::id(), n))
        .join("fund_allocation_model.json")
}

pub fn test_config(url: String, path: PathBuf) -> Config {
    Config {
        model_url: url,
        model_path: path,
        bounds: InputBounds::default(),
    }
}

/// Serves the given canned responses, one per connection, in order, then
/// stops accepting. Returns the URL to request.
pub fn serve_canned(responses: Vec<(u16, Vec<u8>)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("server addr");

    thread::spawn(move || {
        for (status, body) in responses {
            let (mut stream, _) = match listener.accept() {
                Ok(conn) => conn,
                Err(_) => return,
            };

            // The client sends no body; one read of the head is enough.
            let mut buf = [0_u8; 4096];
            let _ = stream.read(&mut buf);

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                _ => "Error",
            };
            let head = format!(
                "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                reason,
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });

    format!("http://{}/fund_allocation_model.json", addr)
}
