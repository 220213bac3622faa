//! Basic usage example for odanet-rs
//!
//! This example demonstrates how to:
//! - Load the location catalog
//! - Look up cities and districts by slug
//! - Run the autocomplete search
//! - Generate listing/seeker slugs
//! - Interleave a home feed

use odanet_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Odanet Core Basic Usage Example ===\n");

    // Load the catalog
    println!("Loading location catalog...");
    let db = LocationDb::load()?;
    println!("✓ Catalog loaded successfully\n");

    // Example 1: Catalog statistics
    println!("--- Example 1: Catalog statistics ---");
    let stats = db.stats();
    println!("Cities: {}", stats.cities);
    println!("Districts: {}", stats.districts);
    println!("Neighborhoods: {}", stats.neighborhoods);
    println!();

    // Example 2: Find a city by slug
    println!("--- Example 2: Find city by slug ---");
    if let Some(city) = db.find_city_by_slug("istanbul") {
        println!("Found: {}", city.name());
        println!("Slug: {}", city.slug());
        println!("Number of districts: {}", city.districts().len());
    }
    println!();

    // Example 3: Find a district and its neighborhoods
    println!("--- Example 3: District lookup ---");
    if let Some(district) = db.find_district_by_slug("istanbul", "kadikoy") {
        println!("District: {}", district.name());
        for n in district.neighborhoods().iter().take(3) {
            println!("- {} ({})", n.name(), n.slug());
        }
        println!(
            "... and {} more",
            district.neighborhoods().len().saturating_sub(3)
        );
    }
    println!();

    // Example 4: Autocomplete search, with and without diacritics
    println!("--- Example 4: Autocomplete search ---");
    for query in ["kadikoy", "Beşiktaş", "ank"] {
        let hits = suggest(&db, query);
        println!("suggest({query:?}) -> {} hit(s)", hits.len());
        for hit in hits.iter().take(3) {
            println!("  {}", hit.slug_path());
        }
    }
    println!();

    // Example 5: Slug generation for a new listing
    println!("--- Example 5: Slug generation ---");
    let slug = generate_slug(
        &[Some("Kadıköy'de eşyalı oda"), Some("Moda Caddesi")],
        &mut RandomSuffix,
    );
    println!("Listing slug: {slug}");
    println!();

    // Example 6: Home feed interleaving
    println!("--- Example 6: Feed interleaving ---");
    let seekers = vec!["Ayşe", "Mehmet"];
    let listings = vec!["Oda in Moda"];
    for item in interleave_feed(seekers, listings) {
        match item {
            FeedItem::Seeker(s) => println!("seeker:  {s}"),
            FeedItem::Listing(l) => println!("listing: {l}"),
        }
    }

    Ok(())
}
