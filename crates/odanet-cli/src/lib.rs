//! odanet-cli
//! ==========
//!
//! Command-line interface for the `odanet-core` location catalog.
//!
//! This crate primarily provides a binary (`odanet-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! odanet-cli --help
//! odanet-cli stats
//! odanet-cli search kadikoy
//! odanet-cli slug "Kadıköy'de eşyalı oda" "Moda Caddesi"
//! ```
//!
//! For programmatic access to the catalog and APIs, use the
//! [`odanet-core`] crate directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
