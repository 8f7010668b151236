// PregnancyGuide Domain
// This crate contains the business logic for the PregnancyGuide application

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Configuration read from the environment
pub mod config;

// Health checks and system status
pub mod health;

// Re-export the static table loading from the data crate for convenience
pub use pregnancy_guide_data::repository::{StaticDataRepository, TableCounts};
pub use pregnancy_guide_data::tables::TableSource;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
