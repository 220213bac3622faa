// crates/odanet-core/src/search.rs

//! Autocomplete suggestions over the location catalog.
//!
//! A query-time linear scan; no index structure is built because the
//! catalog is tens of cities with at most a few dozen districts each,
//! so a full pass completes in well under a millisecond.

use crate::model::LocationDb;
use crate::text::fold_key;
use crate::traits::NameMatch;
use serde::Serialize;

/// Maximum number of suggestions returned by [`suggest`].
pub const MAX_SUGGESTIONS: usize = 10;

/// A single autocomplete suggestion.
///
/// Serializes as `{"kind":"city",...}` / `{"kind":"district",...}` with
/// camelCase field keys, matching the autocomplete endpoint's payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Suggestion {
    /// A city match. `slug_path` is the city slug.
    #[serde(rename_all = "camelCase")]
    City { city_name: String, slug_path: String },
    /// A district match. `slug_path` is `citySlug/districtSlug`.
    #[serde(rename_all = "camelCase")]
    District {
        city_name: String,
        district_name: String,
        slug_path: String,
    },
}

impl Suggestion {
    /// The composite slug path (`citySlug` or `citySlug/districtSlug`).
    pub fn slug_path(&self) -> &str {
        match self {
            Self::City { slug_path, .. } | Self::District { slug_path, .. } => slug_path,
        }
    }
}

/// Return up to [`MAX_SUGGESTIONS`] suggestions for a free-text query.
///
/// Matching is substring containment of the folded query in the precomputed
/// slug, OR case-insensitive containment of the raw query in the raw display
/// name. City matches come first, then district matches; within each group
/// results follow catalog definition order. There is no relevance scoring.
///
/// Every district is tested regardless of whether its parent city matched.
/// The scan enforces no minimum query length; the UI gates queries shorter
/// than two characters.
pub fn suggest(db: &LocationDb, query: &str) -> Vec<Suggestion> {
    let raw = query.trim();
    let folded = fold_key(raw);
    if folded.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();

    for city in db.cities() {
        if city.slug().contains(&folded) || city.name_contains(raw) {
            out.push(Suggestion::City {
                city_name: city.name().to_string(),
                slug_path: city.slug().to_string(),
            });
        }
    }

    for city in db.cities() {
        for district in city.districts() {
            if district.slug().contains(&folded) || district.name_contains(raw) {
                out.push(Suggestion::District {
                    city_name: city.name().to_string(),
                    district_name: district.name().to_string(),
                    slug_path: format!("{}/{}", city.slug(), district.slug()),
                });
            }
        }
    }

    out.truncate(MAX_SUGGESTIONS);
    out
}
