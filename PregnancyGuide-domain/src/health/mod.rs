//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::assistant::AssistantStatus;
use pregnancy_guide_data::repository::TableCounts;

/// Component name of the static tables
pub const STATIC_DATA_COMPONENT: &str = "static_data";

/// Component name of the assistant backends
pub const ASSISTANT_COMPONENT: &str = "assistant";

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning with reduced capability
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the static tables
    /// Returns true if every table has rows, false if some are empty
    /// Returns an error if no table could be read at all
    async fn check_static_data_status(&self) -> Result<bool, String>;
}

/// Check the loaded table sizes
///
/// Returns:
/// - Ok(true) if every table has rows
/// - Ok(false) if some tables are empty
/// - Err if every table is empty
pub fn check_static_data_status(counts: &TableCounts) -> Result<bool, String> {
    let total = counts.diet + counts.meal_plans + counts.exercises + counts.weeks;
    if total == 0 {
        Err("No static data loaded".to_string())
    } else {
        Ok(!counts.has_empty_table())
    }
}

/// Health component for the static tables
pub fn static_data_component(counts: &TableCounts) -> HealthComponent {
    match check_static_data_status(counts) {
        Ok(true) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(false) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some(format!(
                "Some tables are empty (diet: {}, meal plans: {}, exercises: {}, weeks: {})",
                counts.diet, counts.meal_plans, counts.exercises, counts.weeks
            )),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    }
}

/// Health component for the assistant. Missing credentials are an expected
/// deployment and are only reported in the details.
pub fn assistant_component(status: &AssistantStatus) -> HealthComponent {
    if status.fully_configured() {
        return HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        };
    }

    let missing: Vec<&str> = [
        (status.llm_configured, "LLM"),
        (status.web_search_configured, "web search"),
        (status.video_search_configured, "video search"),
    ]
    .into_iter()
    .filter(|(configured, _)| !configured)
    .map(|(_, name)| name)
    .collect();

    HealthComponent {
        status: ComponentStatus::Healthy,
        details: Some(format!("Not configured: {}", missing.join(", "))),
    }
}

/// Overall status from component statuses
pub fn overall_status<'a, I>(components: I) -> SystemStatus
where
    I: IntoIterator<Item = &'a HealthComponent>,
{
    let statuses: Vec<&ComponentStatus> = components.into_iter().map(|c| &c.status).collect();

    if statuses.iter().any(|s| **s == ComponentStatus::Unhealthy) {
        SystemStatus::Unhealthy
    } else if statuses.iter().any(|s| **s == ComponentStatus::Degraded) {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    }
}

/// Get overall system health from table sizes and assistant configuration
pub fn get_system_health(counts: &TableCounts, assistant: &AssistantStatus) -> SystemHealth {
    let components: HashMap<String, HealthComponent> = vec![
        (STATIC_DATA_COMPONENT.to_string(), static_data_component(counts)),
        (ASSISTANT_COMPONENT.to_string(), assistant_component(assistant)),
    ]
    .into_iter()
    .collect();

    SystemHealth {
        status: overall_status(components.values()),
        components,
    }
}
