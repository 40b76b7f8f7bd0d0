use reqwest::Client;
use std::time::Duration;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Client used for the artifact download.
    ///
    /// Connect timeout only: the transfer itself runs for as long as the
    /// server keeps sending, and failures are terminal rather than retried.
    pub fn create_client() -> Client {
        Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}
