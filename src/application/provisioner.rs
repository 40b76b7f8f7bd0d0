use crate::application::ml::fund_model::FundModel;
use crate::config::Config;
use crate::domain::errors::RetrievalError;
use crate::infrastructure::artifact_store::ArtifactStore;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Provisions the model artifact and owns the process-wide predictor handle.
///
/// Constructed once in `main` and handed to the UI; there is no ambient
/// global state. The first successful `predictor` call fetches (on cache
/// miss), deserializes, and caches the handle; every later call returns a
/// clone of the same `Arc`. A failed attempt caches nothing.
pub struct ModelProvisioner {
    url: String,
    path: PathBuf,
    store: ArtifactStore,
    loaded: Mutex<Option<Arc<FundModel>>>,
}

impl ModelProvisioner {
    pub fn new(config: &Config, store: ArtifactStore) -> Self {
        Self {
            url: config.model_url.clone(),
            path: config.model_path.clone(),
            store,
            loaded: Mutex::new(None),
        }
    }

    /// Returns the cached predictor handle, provisioning it on first use.
    pub fn predictor(&self) -> Result<Arc<FundModel>, RetrievalError> {
        let mut slot = match self.loaded.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(model) = slot.as_ref() {
            return Ok(Arc::clone(model));
        }

        if !self.path.exists() {
            info!("Model artifact missing at {:?}, fetching", self.path);
            self.store.download_to(&self.url, &self.path)?;
        }

        let bytes = self.store.read(&self.path)?;
        let model = FundModel::from_slice(&bytes)?;
        info!(
            "Loaded fund allocation model from {:?} ({} features, {} risk levels)",
            self.path,
            model.feature_columns().len(),
            model.risk_levels().len()
        );

        let handle = Arc::new(model);
        *slot = Some(Arc::clone(&handle));
        Ok(handle)
    }

    /// True once a handle has been cached for this process.
    pub fn is_loaded(&self) -> bool {
        match self.loaded.lock() {
            Ok(guard) => guard.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }
}
