// crates/odanet-core/src/model.rs

//! The normalized location catalog.
//!
//! `LocationDb` → `Vec<City>` → `Vec<District>` → `Vec<Neighborhood>`.
//! Immutable after construction; every slug is derived from the display
//! name with [`fold_key`] at build time, so lookups are case-sensitive
//! exact matches against precomputed keys.

use crate::error::{OdanetError, Result};
use crate::raw::CatalogRaw;
use crate::text::fold_key;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A neighborhood in the catalog. Leaf node; carries no children.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Neighborhood {
    pub name: String,
    pub slug: String,
}

/// A district within a city. Slug uniqueness is scoped to the parent city.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub slug: String,
    pub neighborhoods: Vec<Neighborhood>,
}

/// A city entry. Slugs are unique across the whole catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub slug: String,
    pub districts: Vec<District>,
}

/// Top-level catalog structure.
///
/// The whole structure derives `Serialize` so the UI layer can ship it
/// wholesale to populate cascading location pickers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocationDb {
    pub cities: Vec<City>,
}

/// Simple aggregate statistics for the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogStats {
    pub cities: usize,
    pub districts: usize,
    pub neighborhoods: usize,
}

/// Convert raw JSON data into a `LocationDb`, folding every display name
/// into its slug.
pub fn build_location_db(raw: CatalogRaw) -> LocationDb {
    let cities = raw
        .cities
        .into_iter()
        .map(|c| {
            let districts = c
                .districts
                .into_iter()
                .map(|d| {
                    let neighborhoods = d
                        .neighborhoods
                        .into_iter()
                        .map(|n| Neighborhood {
                            slug: fold_key(&n),
                            name: n,
                        })
                        .collect();

                    District {
                        slug: fold_key(&d.name),
                        name: d.name,
                        neighborhoods,
                    }
                })
                .collect();

            City {
                slug: fold_key(&c.name),
                name: c.name,
                districts,
            }
        })
        .collect();

    LocationDb { cities }
}

impl LocationDb {
    /// All cities, in catalog definition order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Find a city by its precomputed slug (case-sensitive exact match).
    pub fn find_city_by_slug(&self, slug: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.slug == slug)
    }

    /// Find a district by city slug + district slug.
    pub fn find_district_by_slug(&self, city_slug: &str, district_slug: &str) -> Option<&District> {
        self.find_city_by_slug(city_slug)
            .and_then(|c| c.districts.iter().find(|d| d.slug == district_slug))
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            cities: self.cities.len(),
            districts: self.cities.iter().map(|c| c.districts.len()).sum(),
            neighborhoods: self
                .cities
                .iter()
                .flat_map(|c| &c.districts)
                .map(|d| d.neighborhoods.len())
                .sum(),
        }
    }

    /// Check the slug uniqueness invariants: city slugs globally unique,
    /// district slugs unique within their city, neighborhood slugs unique
    /// within their district.
    ///
    /// Called by the loaders so a malformed custom dataset fails fast
    /// instead of producing ambiguous lookups.
    pub fn validate(&self) -> Result<()> {
        let mut city_slugs = HashSet::new();
        for city in &self.cities {
            if !city_slugs.insert(city.slug.as_str()) {
                return Err(OdanetError::DuplicateSlug(city.slug.clone()));
            }
            let mut district_slugs = HashSet::new();
            for district in &city.districts {
                if !district_slugs.insert(district.slug.as_str()) {
                    return Err(OdanetError::DuplicateSlug(format!(
                        "{}/{}",
                        city.slug, district.slug
                    )));
                }
                let mut neighborhood_slugs = HashSet::new();
                for neighborhood in &district.neighborhoods {
                    if !neighborhood_slugs.insert(neighborhood.slug.as_str()) {
                        return Err(OdanetError::DuplicateSlug(format!(
                            "{}/{}/{}",
                            city.slug, district.slug, neighborhood.slug
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Find a district of this city by its slug.
    pub fn district(&self, slug: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.slug == slug)
    }
}

impl District {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }
}

impl Neighborhood {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for District {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Neighborhood {
    fn name_str(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{CityRaw, DistrictRaw};

    fn fixture() -> LocationDb {
        build_location_db(CatalogRaw {
            cities: vec![
                CityRaw {
                    name: "İstanbul".to_string(),
                    districts: vec![
                        DistrictRaw {
                            name: "Kadıköy".to_string(),
                            neighborhoods: vec!["Moda".to_string(), "Caferağa".to_string()],
                        },
                        DistrictRaw {
                            name: "Beşiktaş".to_string(),
                            neighborhoods: vec![],
                        },
                    ],
                },
                CityRaw {
                    name: "Çanakkale".to_string(),
                    districts: vec![],
                },
            ],
        })
    }

    #[test]
    fn slugs_derived_from_names() {
        let db = fixture();
        assert_eq!(db.cities[0].slug, "istanbul");
        assert_eq!(db.cities[0].districts[0].slug, "kadikoy");
        assert_eq!(db.cities[0].districts[0].neighborhoods[1].slug, "caferaga");
        assert_eq!(db.cities[1].slug, "canakkale");
    }

    #[test]
    fn find_city_is_exact_and_case_sensitive() {
        let db = fixture();
        assert_eq!(db.find_city_by_slug("istanbul").map(City::name), Some("İstanbul"));
        assert!(db.find_city_by_slug("Istanbul").is_none());
        assert!(db.find_city_by_slug("not-a-real-city").is_none());
    }

    #[test]
    fn find_district_scopes_to_city() {
        let db = fixture();
        let district = db.find_district_by_slug("istanbul", "kadikoy");
        assert_eq!(district.map(District::name), Some("Kadıköy"));
        assert!(db.find_district_by_slug("canakkale", "kadikoy").is_none());
    }

    #[test]
    fn stats_count_all_levels() {
        let stats = fixture().stats();
        assert_eq!(stats.cities, 2);
        assert_eq!(stats.districts, 2);
        assert_eq!(stats.neighborhoods, 2);
    }

    #[test]
    fn validate_accepts_fixture() {
        assert!(fixture().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_city_slugs() {
        let db = build_location_db(CatalogRaw {
            cities: vec![
                CityRaw {
                    name: "İzmir".to_string(),
                    districts: vec![],
                },
                CityRaw {
                    // Folds to the same slug as İzmir.
                    name: "izmir".to_string(),
                    districts: vec![],
                },
            ],
        });
        assert!(matches!(
            db.validate(),
            Err(OdanetError::DuplicateSlug(s)) if s == "izmir"
        ));
    }

    #[test]
    fn name_match_helpers() {
        let db = fixture();
        let city = &db.cities[0];
        assert!(city.is_named("istanbul"));
        assert!(city.name_contains("stan"));
        assert!(!city.is_named("ankara"));
    }

    #[test]
    fn picker_payload_serializes_names_and_slugs() {
        let json = serde_json::to_value(fixture()).unwrap();
        assert_eq!(json["cities"][0]["name"], "İstanbul");
        assert_eq!(json["cities"][0]["slug"], "istanbul");
        assert_eq!(json["cities"][0]["districts"][0]["neighborhoods"][0]["slug"], "moda");
    }
}
