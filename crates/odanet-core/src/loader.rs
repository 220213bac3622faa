// crates/odanet-core/src/loader.rs

//! # Catalog loader
//!
//! The default dataset ships inside the crate (`data/turkiye.json`), so the
//! common path is allocation of the catalog once per process with no file
//! I/O. Custom datasets can be loaded from a path or any reader, which is
//! what the CLI's `--input` flag and the test fixtures use.

use crate::error::{OdanetError, Result};
use crate::model::{build_location_db, LocationDb};
use crate::raw::CatalogRaw;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// Single in-process cache so we only parse the bundled dataset once.
static CATALOG_CACHE: OnceCell<LocationDb> = OnceCell::new();

/// The Turkish administrative dataset bundled with the crate.
const BUNDLED_DATASET: &str = include_str!("../data/turkiye.json");

impl LocationDb {
    /// Load the catalog from the bundled dataset.
    ///
    /// Parses `data/turkiye.json` on first call and serves a clone of the
    /// process-wide cache afterwards. The catalog is immutable, so the
    /// clone is purely for ownership convenience; consumers that only need
    /// a reference can hold `&LocationDb` instead.
    pub fn load() -> Result<Self> {
        CATALOG_CACHE
            .get_or_try_init(|| Self::from_json_str(BUNDLED_DATASET))
            .cloned()
    }

    /// Build a catalog from a JSON string (see `data/turkiye.json` for the
    /// expected shape). Validates the slug uniqueness invariants.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: CatalogRaw = serde_json::from_str(json)?;
        let db = build_location_db(raw);
        db.validate()?;
        Ok(db)
    }

    /// Build a catalog from any reader yielding the dataset JSON.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let raw: CatalogRaw = serde_json::from_reader(reader)?;
        let db = build_location_db(raw);
        db.validate()?;
        Ok(db)
    }

    /// Build a catalog from a JSON file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            OdanetError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_reader(BufReader::new(file))
    }
}
