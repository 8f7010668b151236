// Public entities for the PregnancyGuide API
// This module contains data structures that are shared across the application boundary

// Pregnancy tracker entities
pub mod tracker;

// Diet and exercise entities
pub mod recommendations;

// Assistant entities
pub mod assistant;

// Common entities for error handling
pub mod common;
