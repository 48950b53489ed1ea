//! Remote reading acquisition.
//!
//! ```text
//! ReadingSource::fetch ──→ Result<f64, FetchError> ──→ AppEvent::Reading
//! ```
//!
//! The HTTP implementation performs one GET, requires a 2xx status and reads
//! a single numeric field from the JSON body.

mod client;
mod error;
mod source;

pub use client::{extract_reading, HttpReadingSource};
pub use error::FetchError;
pub use source::ReadingSource;
