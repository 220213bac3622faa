use clap::{Parser, Subcommand};

/// CLI arguments for odanet-cli
#[derive(Debug, Parser)]
#[command(
    name = "odanet",
    version,
    about = "CLI for querying and inspecting the Odanet location catalog"
)]
pub struct CliArgs {
    /// Path to a custom dataset JSON file (default: the bundled Türkiye dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// List all cities
    Cities,

    /// List all districts of a city
    Districts {
        /// City slug (e.g. istanbul)
        city: String,
    },

    /// List the neighborhoods of a district
    Neighborhoods {
        /// City slug (e.g. istanbul)
        city: String,
        /// District slug (e.g. kadikoy)
        district: String,
    },

    /// Autocomplete suggestions for a free-text query
    Search {
        /// Query text (diacritics optional, e.g. "kadikoy")
        query: String,
    },

    /// Generate a listing/seeker slug from seed fragments
    Slug {
        /// Seed fragments in order (e.g. title, address)
        fragments: Vec<String>,
    },
}
