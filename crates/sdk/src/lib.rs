//! # Quran SDK
//!
//! Async client for the Quran.com v4 API with per-kind caching, retry with
//! exponential backoff and offline fallback data for the reference lists.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quran_sdk::{QuranClient, QuranResult};
//! use quran_core::{ListChaptersParams, VerseByKeyParams};
//!
//! #[tokio::main]
//! async fn main() -> QuranResult<()> {
//!     let client = QuranClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     // Served from cache on the second call, from fallback data when offline
//!     let chapters = client.chapters().list(&ListChaptersParams::new("en")).await?;
//!     println!("{}", chapters.message());
//!
//!     let verse = client.verses().by_key(&VerseByKeyParams::new("2:255")).await?;
//!     println!("{}", verse.data);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod operation;
pub mod pipeline;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::{QuranClient, QuranClientBuilder};
pub use config::{ClientConfig, RetryConfig};
pub use error::{AttemptError, QuranError, QuranResult, TransportError};
pub use operation::Operation;
pub use pipeline::{Endpoint, Policy, Request, ResourceService};
pub use transport::{HttpTransport, Query, RetryingFetcher, Transport};

// Re-export core types for convenience
pub use quran_core::{
    FallbackReason, Payload, ResourceKind, ResourceResponse, ResponseEnvelope, SourceKind,
    ValidationError,
};
