//! Image fetching and decoding
//!
//! The engine consumes decoded pixels through the [`ImageSource`] trait;
//! [`HttpImageSource`] is the production implementation covering remote
//! artwork URLs and local cover files.

use async_trait::async_trait;

use crate::error::ExtractError;
use crate::models::PixelGrid;

/// Collaborator that turns an image location into decoded pixels.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<PixelGrid, ExtractError>;
}

/// Fetches `http(s)://` locations over HTTP and treats anything else as a
/// local file path. Decoding runs on the blocking pool so large covers don't
/// stall the async runtime.
pub struct HttpImageSource {
    client: reqwest::Client,
}

impl HttpImageSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Reuse an existing client (shared connection pool).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpImageSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, location: &str) -> Result<PixelGrid, ExtractError> {
        let bytes = if location.starts_with("http://") || location.starts_with("https://") {
            self.client
                .get(location)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?
                .to_vec()
        } else {
            tokio::fs::read(location).await?
        };

        let grid = tokio::task::spawn_blocking(move || {
            let img = image::load_from_memory(&bytes)?;
            Ok::<_, ExtractError>(PixelGrid::from_image(&img))
        })
        .await??;

        Ok(grid)
    }
}
