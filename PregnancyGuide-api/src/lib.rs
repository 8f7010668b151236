// PregnancyGuide API
//
// HTTP surface over the pregnancy guide services.

pub mod api;
pub mod entities;
pub mod openapi;

pub use api::create_application;
pub use api::routes::{AppBuildError, AppState};
