// src/lib.rs

//! Facade over `odanet-core` so the demo programs and downstream services can
//! depend on a single crate name. All functionality lives in the core crate.

pub use odanet_core::*;
