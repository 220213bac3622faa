// crates/odanet-core/src/raw.rs

//! Raw dataset structures as they come from JSON.
//!
//! These mirror the shipped `data/turkiye.json` file (display names only,
//! no slugs). We do not expose them from the public API; the catalog is
//! built from them once via [`crate::build_location_db`].

use serde::Deserialize;

/// Raw district entry. Neighborhoods are plain display names.
#[derive(Debug, Deserialize)]
pub struct DistrictRaw {
    pub name: String,
    #[serde(default)]
    pub neighborhoods: Vec<String>,
}

/// Raw city entry.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub name: String,
    #[serde(default)]
    pub districts: Vec<DistrictRaw>,
}

/// Top-level raw dataset.
#[derive(Debug, Deserialize)]
pub struct CatalogRaw {
    pub cities: Vec<CityRaw>,
}
