use crate::domain::errors::RetrievalError;
use crate::infrastructure::http_client::HttpClientFactory;
use reqwest::Client;
use std::fs;
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::info;

/// Downloads and persists the model artifact.
///
/// The provisioning contract is synchronous, so the async client is driven
/// to completion on a dedicated current-thread runtime. A hung transfer
/// blocks the caller.
pub struct ArtifactStore {
    runtime: Runtime,
    client: Client,
}

impl ArtifactStore {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            client: HttpClientFactory::create_client(),
        })
    }

    /// Fetches `url` and writes the body verbatim to `dest`.
    ///
    /// The write is atomic: the body lands in a sibling temp file which is
    /// renamed into place, so a failed transfer never leaves a partial
    /// artifact for a later call to pick up.
    pub fn download_to(&self, url: &str, dest: &Path) -> Result<(), RetrievalError> {
        info!("Downloading model artifact from {}", url);

        let bytes = self.runtime.block_on(async {
            let response =
                self.client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| RetrievalError::Transport {
                        reason: e.to_string(),
                    })?;

            let status = response.status();
            if !status.is_success() {
                return Err(RetrievalError::DownloadStatus {
                    status: status.as_u16(),
                });
            }

            response.bytes().await.map_err(|e| RetrievalError::Transport {
                reason: e.to_string(),
            })
        })?;

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
            }
        }

        let temp_path = dest.with_extension("tmp");
        fs::write(&temp_path, &bytes).map_err(|e| io_error(&temp_path, e))?;
        fs::rename(&temp_path, dest).map_err(|e| io_error(dest, e))?;

        info!("Saved model artifact to {:?} ({} bytes)", dest, bytes.len());
        Ok(())
    }

    /// Reads the persisted artifact back for deserialization.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>, RetrievalError> {
        fs::read(path).map_err(|e| io_error(path, e))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> RetrievalError {
    RetrievalError::Io {
        path: path.to_path_buf(),
        source,
    }
}
