// crates/odanet-core/src/prelude.rs

//! Convenience re-exports for consumers that want everything in scope.

pub use crate::error::{OdanetError, Result};
pub use crate::feed::{interleave_feed, FeedItem};
pub use crate::model::{CatalogStats, City, District, LocationDb, Neighborhood};
pub use crate::search::{suggest, Suggestion, MAX_SUGGESTIONS};
pub use crate::slug::{backfill_slugs, generate_slug, RandomSuffix, SuffixSource};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
