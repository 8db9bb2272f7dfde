pub mod class;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod ports;
pub mod project;
pub mod removal;

// Handy re-exports to keep imports short elsewhere
pub use class::ClassName;
pub use descriptor::{DescriptorPath, DescriptorPolicy};
pub use error::DomainError;
pub use generator::{GeneratorInvocation, GeneratorOutcome};
pub use removal::{CleanOutcome, DeletePolicy, RemovalOutcome, RemovalReport};
