pub mod health;
pub mod tracker;
pub mod recommendations;
pub mod assistant;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use assistant::{ask_assistant, ask_assistant_stream};
pub use health::health_check;
pub use recommendations::{create_recommendations, get_recommendation_options};
pub use tracker::{get_week_content, track_pregnancy};
