//! # ai-cats
//!
//! Async Rust client for the [AI Cats](https://ai-cats.net) image
//! generation and search API.
//!
//! Provides typed methods for fetching generated cat images (raw bytes,
//! base64, or data URLs), searching the catalog, and reading image
//! metadata, themes, and counts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ai_cats::{CatsClient, RandomCatOptions, SearchOptions, Size, Theme};
//!
//! # async fn example() -> ai_cats::Result<()> {
//! let client = CatsClient::new();
//!
//! // A random 512x512 Halloween cat
//! let image = client
//!     .random(&RandomCatOptions::new().size(Size::S512).theme(Theme::Halloween))
//!     .await?;
//! let bytes = image.into_bytes()?;
//! std::fs::write("cat.jpg", &bytes).unwrap();
//!
//! // Search the catalog
//! let hits = client
//!     .search(&SearchOptions::new().query("orange").limit(5))
//!     .await?;
//! for hit in &hits {
//!     let info = client.info(&hit.id).await?;
//!     println!("{}: {}", hit.id, info.prompt);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{CatsClient, DEFAULT_ENDPOINT};
pub use error::{CatsError, Result};
pub use query::{GetByIdOptions, RandomCatOptions, SearchOptions, SimilarOptions};
pub use types::{CatInfo, ImageData, ResponseType, SearchResult, Size, Theme};
