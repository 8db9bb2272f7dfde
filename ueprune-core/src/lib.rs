// ueprune-core/src/lib.rs

#![allow(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain (class names, descriptor resolution, generator contract)
// Depends on nothing else in the crate.
pub mod domain;

// 2. Infrastructure (Adapters)
// Config file, filesystem walks, the build tool process.
pub mod infrastructure;

// 3. Application (Use Cases)
// Remove, Clean, Locate, Regenerate, and the full prune sequence.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::PruneError;
