// Repository module structure
pub mod errors;
mod in_memory;
mod static_data;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use static_data::{StaticDataRepository, StaticDataRepositoryTrait, TableCounts};

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use static_data::tests;
