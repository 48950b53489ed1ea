//! Seam between the display and whatever produces the reading.

use async_trait::async_trait;

use super::error::FetchError;

/// Produces one numeric reading per call.
///
/// The display mounts call `fetch` exactly once; implementations must not
/// retry internally.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Perform the read and return the numeric value.
    async fn fetch(&self) -> Result<f64, FetchError>;
}
