// Core types for the Quran.com resource pipeline: caching, fallback data,
// parameter validation and the response envelope.

pub mod cache;
pub mod fallback;
pub mod params;
pub mod types;
pub mod validation;

pub use cache::{Cache, CacheStats};
pub use fallback::{get_fallback, FallbackDataset, FALLBACK_DATASET_VERSION};
pub use params::*;
pub use types::*;
pub use validation::{FieldIssue, Validate, ValidationError, Validator};
