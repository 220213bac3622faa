//! odanet-cli — Command-line interface for odanet-core
//!
//! This binary provides a simple way to inspect the bundled Turkish location
//! catalog from your terminal. It supports printing basic statistics,
//! listing cities and districts, running the autocomplete search, and
//! generating slugs the way the listing/seeker creation flow does.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ odanet stats
//!
//! - List all cities
//!   $ odanet cities
//!
//! - List districts / neighborhoods
//!   $ odanet districts istanbul
//!   $ odanet neighborhoods istanbul kadikoy
//!
//! - Autocomplete search (diacritics optional)
//!   $ odanet search kadikoy
//!
//! - Generate a slug from seed fragments
//!   $ odanet slug "Kadıköy'de eşyalı oda" "Moda Caddesi"
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the dataset bundled with the `odanet-core`
//! crate. Use `--input <path>` to point to a custom dataset JSON file with
//! the same shape.

mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use odanet_core::{generate_slug, suggest, LocationDb, RandomSuffix, Suggestion};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Load the catalog (custom dataset if --input was given)
    let db = match &args.input {
        Some(path) => LocationDb::load_from_path(path)?,
        None => LocationDb::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Catalog statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Districts: {}", stats.districts);
            println!("  Neighborhoods: {}", stats.neighborhoods);
        }

        Commands::Cities => {
            for city in db.cities() {
                println!("{} ({})", city.name(), city.slug());
            }
        }

        Commands::Districts { city } => match db.find_city_by_slug(&city) {
            Some(c) => {
                println!("Districts in {}:", c.name());
                for district in c.districts() {
                    println!("- {} ({}/{})", district.name(), c.slug(), district.slug());
                }
            }
            None => eprintln!("City {city} not found"),
        },

        Commands::Neighborhoods { city, district } => {
            match db.find_district_by_slug(&city, &district) {
                Some(d) => {
                    if d.neighborhoods().is_empty() {
                        println!("No neighborhoods recorded for {}", d.name());
                    } else {
                        println!("Neighborhoods in {}:", d.name());
                        for n in d.neighborhoods() {
                            println!("- {} ({})", n.name(), n.slug());
                        }
                    }
                }
                None => eprintln!("District {city}/{district} not found"),
            }
        }

        Commands::Search { query } => {
            let hits = suggest(&db, &query);
            if hits.is_empty() {
                println!("No suggestions for: {query}");
            } else {
                for hit in hits {
                    match hit {
                        Suggestion::City {
                            city_name,
                            slug_path,
                        } => println!("city      {city_name} ({slug_path})"),
                        Suggestion::District {
                            city_name,
                            district_name,
                            slug_path,
                        } => println!("district  {district_name}, {city_name} ({slug_path})"),
                    }
                }
            }
        }

        Commands::Slug { fragments } => {
            let fragments: Vec<Option<&str>> =
                fragments.iter().map(|f| Some(f.as_str())).collect();
            println!("{}", generate_slug(&fragments, &mut RandomSuffix));
        }
    }

    Ok(())
}
