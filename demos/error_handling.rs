//! Error handling example for odanet-rs
//!
//! This example demonstrates proper error handling and edge cases

use odanet_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Odanet Core Error Handling Example ===\n");

    // Example 1: Handling catalog load errors
    println!("--- Example 1: Loading catalog with error handling ---");
    match LocationDb::load() {
        Ok(db) => {
            println!("✓ Catalog loaded successfully");
            println!("  Cities: {}", db.stats().cities);
        }
        Err(e) => {
            eprintln!("✗ Failed to load catalog: {e}");
            return Err(e);
        }
    }
    println!();

    let db = LocationDb::load()?;

    // Example 2: Handling missing cities
    println!("--- Example 2: Searching for non-existent cities ---");
    for slug in ["atlantis", "gotham", "not-a-real-city"] {
        match db.find_city_by_slug(slug) {
            Some(city) => println!("  Found: {} ({})", city.name(), city.slug()),
            None => println!("  Not found: {slug}"),
        }
    }
    println!();

    // Example 3: Lookups are case-sensitive against precomputed slugs
    println!("--- Example 3: Slug lookups are exact ---");
    for slug in ["istanbul", "Istanbul", "İstanbul"] {
        match db.find_city_by_slug(slug) {
            Some(city) => println!("  Found: {} for {slug:?}", city.name()),
            None => println!("  Not found: {slug:?} (fold queries with fold_key first)"),
        }
    }
    println!("  fold_key(\"İstanbul\") = {:?}", fold_key("İstanbul"));
    println!();

    // Example 4: Custom datasets are validated on load
    println!("--- Example 4: Duplicate slugs are rejected ---");
    let duplicate = r#"{ "cities": [ { "name": "İzmir" }, { "name": "izmir" } ] }"#;
    match LocationDb::from_json_str(duplicate) {
        Ok(_) => println!("  Unexpectedly accepted"),
        Err(e) => println!("  Rejected as expected: {e}"),
    }
    println!();

    // Example 5: Empty seed fragments still yield a usable slug
    println!("--- Example 5: Slug generation never returns empty ---");
    let slug = generate_slug::<&str>(&[None, Some("")], &mut RandomSuffix);
    println!("  Slug from empty seeds: {slug}");

    Ok(())
}
