// ueprune-core/src/domain/ports/mod.rs

pub mod generator;

pub use generator::ProjectFileGenerator;
