use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining or loading the model artifact.
///
/// Any of these is terminal for the session: no prediction can happen without
/// a loaded model.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("model download failed with status {status}")]
    DownloadStatus { status: u16 },

    #[error("model download failed: {reason}")]
    Transport { reason: String },

    #[error("failed to access model artifact at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not a valid serialized bundle: {reason}")]
    Deserialize { reason: String },

    #[error("model schema mismatch: {reason}")]
    SchemaMismatch { reason: String },
}

/// Errors raised when the loaded predictor rejects a profile.
///
/// Terminal for the one attempt only; the user may re-trigger.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("risk appetite '{value}' is not known to the loaded model")]
    UnknownRiskLevel { value: String },

    #[error("predictor rejected the input row: {reason}")]
    Rejected { reason: String },

    #[error("predictor returned {got} values where {expected} were expected")]
    ShapeMismatch { expected: usize, got: usize },
}
