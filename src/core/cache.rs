//! Single-flight result cache
//!
//! One computation per distinct artwork URL for the life of the process.
//! Each key owns a `tokio::sync::OnceCell`; concurrent callers for the same
//! uncomputed key await the one in-flight computation while unrelated keys
//! proceed in parallel. Failures are never cached: a failed computation
//! leaves the key's cell uninitialized, the failing caller receives
//! [`DominantColors::FALLBACK`], and the next call retries through the same
//! cell, so retries stay single-flight too.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell as SyncOnceCell;
use tokio::sync::OnceCell;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::Tuning;
use crate::core::pipeline;
use crate::error::ExtractError;
use crate::models::DominantColors;
use crate::quantize::{MmcqQuantizer, Quantizer};
use crate::source::{HttpImageSource, ImageSource};

/// Memoizing front of the extraction pipeline.
///
/// Generic over the two external collaborators so tests can substitute stubs;
/// [`ColorCache::with_defaults`] wires up the HTTP source and MMCQ quantizer.
pub struct ColorCache<S, Q> {
    entries: DashMap<String, Arc<OnceCell<DominantColors>>>,
    source: S,
    quantizer: Q,
    tuning: Tuning,
}

// Process-wide cache instance for embedders that want one shared memo
static GLOBAL_CACHE: SyncOnceCell<Arc<ColorCache<HttpImageSource, MmcqQuantizer>>> =
    SyncOnceCell::new();

impl ColorCache<HttpImageSource, MmcqQuantizer> {
    pub fn with_defaults() -> Self {
        Self::new(HttpImageSource::new(), MmcqQuantizer, Tuning::default())
    }

    /// The process-wide cache with default collaborators and tuning.
    pub fn global() -> Arc<Self> {
        GLOBAL_CACHE
            .get_or_init(|| Arc::new(Self::with_defaults()))
            .clone()
    }
}

impl<S: ImageSource, Q: Quantizer> ColorCache<S, Q> {
    pub fn new(source: S, quantizer: Q, tuning: Tuning) -> Self {
        Self {
            entries: DashMap::new(),
            source,
            quantizer,
            tuning,
        }
    }

    /// Resolve the dominant colors for an artwork URL.
    ///
    /// Never fails observably: an empty URL, fetch/decode/quantize error, or
    /// timeout yields [`DominantColors::FALLBACK`].
    pub async fn get(&self, image_url: &str) -> DominantColors {
        if image_url.is_empty() {
            return DominantColors::FALLBACK;
        }

        let cell = self
            .entries
            .entry(image_url.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        match cell.get_or_try_init(|| self.compute(image_url)).await {
            Ok(colors) => *colors,
            Err(e) => {
                warn!(url = image_url, error = %e, "color extraction failed, serving fallback");
                // The cell stays uninitialized and stays in the map: a later
                // call retries through it. Removing the entry here would let
                // a new caller insert a fresh cell and start a second
                // computation while a waiter is already retrying on this one.
                DominantColors::FALLBACK
            }
        }
    }

    /// Whether a successful result is already cached for this URL.
    pub fn is_cached(&self, image_url: &str) -> bool {
        self.entries
            .get(image_url)
            .map(|cell| cell.initialized())
            .unwrap_or(false)
    }

    async fn compute(&self, image_url: &str) -> Result<DominantColors, ExtractError> {
        debug!(url = image_url, "computing dominant colors");

        let work = async {
            let pixels = self.source.fetch(image_url).await?;
            let clusters = self.quantizer.quantize(
                &pixels,
                self.tuning.palette_size,
                self.tuning.sample_quality,
            )?;
            Ok::<_, ExtractError>(pipeline::resolve_colors(clusters, &pixels, &self.tuning))
        };

        timeout(self.tuning.timeout, work)
            .await
            .map_err(|_| ExtractError::Timeout(self.tuning.timeout))?
    }
}
