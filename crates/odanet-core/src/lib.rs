// crates/odanet-core/src/lib.rs

//! # odanet-core
//!
//! The location and search-matching core of the Odanet room-rental
//! marketplace:
//!
//! - [`LocationDb`] — the static Turkish administrative hierarchy
//!   (city → district → neighborhood) with precomputed slugs.
//! - [`text`] — Turkish-aware text folding used for slugs and search keys.
//! - [`slug`] — unique, URL-safe slug generation for listings and
//!   seeker profiles.
//! - [`search`] — the autocomplete suggestion scan over the catalog.
//! - [`feed`] — round-robin interleaving of listings and seeker profiles
//!   into the home feed.
//!
//! Everything here is synchronous and pure; the only shared state is the
//! immutable catalog loaded once per process.

pub mod error;
pub mod feed;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod search;
pub mod slug;
pub mod text;
pub mod traits;
// Shared raw input (used by loaders of the catalog)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{OdanetError, Result};
// Export the model types
pub use crate::model::{build_location_db, CatalogStats, City, District, LocationDb, Neighborhood};
// Export the search surface
pub use crate::search::{suggest, Suggestion, MAX_SUGGESTIONS};
// Export slug generation
pub use crate::slug::{backfill_slugs, generate_slug, RandomSuffix, SuffixSource, SUFFIX_LEN};
// Export text utils
pub use crate::text::{equals_folded, fold_key};
// Export the feed interleaver
pub use crate::feed::{interleave_feed, FeedItem};
pub use crate::traits::NameMatch;
