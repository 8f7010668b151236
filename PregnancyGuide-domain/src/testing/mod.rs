// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use pregnancy_guide_data::repository::tests::{
    diet_row, exercise_row, meal_row, week_row, MockStaticDataRepository,
};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::assistant::{AssistantAnswer, AssistantStatus, RelatedVideo};
use crate::health::{
    ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus, ASSISTANT_COMPONENT,
    STATIC_DATA_COMPONENT,
};
use crate::services::assistant::{AssistantService, AssistantServiceError, AssistantServiceTrait, AssistantSettings};
use crate::services::recommendations::{RecommendationService, RecommendationServiceTrait};
use crate::services::tracker::{TrackerService, TrackerServiceTrait};
use pregnancy_guide_data::clients::{ClientError, LlmClientTrait, VideoSearchClientTrait, WebSearchClientTrait};
use pregnancy_guide_data::models::VideoSearchResult;

/// Date the mock tracker treats as today
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}

/// Small hand-built tables covering every trimester of the recommendation form
pub fn fixture_repository() -> MockStaticDataRepository {
    MockStaticDataRepository::new()
        .with_diet(vec![
            diet_row("First Trimester", "Proteins", &["lean meat", "fish", "eggs", "beans", "dairy products"]),
            diet_row("First Trimester", "Whole Grains", &["whole wheat bread", "oats", "rye crackers"]),
            diet_row("Second Trimester", "Dairy or Alternatives", &["milk", "yogurt", "almond milk", "fortified soy drink"]),
        ])
        .with_meal_plans(vec![
            meal_row("First Trimester", "Breakfast", &["Oatmeal with milk", "Boiled egg", "Banana"]),
            meal_row("First Trimester", "Lunch", &["Whole wheat wrap", "Grilled chicken", "Mixed salad"]),
            meal_row("First Trimester", "Dinner", &["Brown rice", "Lentil curry"]),
            meal_row("First Trimester", "Snack", &["Greek yogurt", "Almonds"]),
        ])
        .with_exercises(vec![
            exercise_row("First Trimester", "Cardio", "Brisk Walking"),
            exercise_row("First Trimester", "Yoga", "Prenatal Sun Salutation"),
            exercise_row("Second Trimester", "Cardio", "Swimming"),
        ])
        .with_weeks((1..=41).map(week_row).collect())
}

/// Client double whose answers are fixed at construction
#[derive(Debug, Clone)]
pub struct StubLlmClient {
    answer: Option<String>,
    configured: bool,
}

impl StubLlmClient {
    /// Always answer with `answer`
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            configured: true,
        }
    }

    /// Always fail as an unconfigured client would
    pub fn unconfigured() -> Self {
        Self {
            answer: None,
            configured: false,
        }
    }
}

#[async_trait]
impl LlmClientTrait for StubLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, ClientError> {
        self.answer.clone().ok_or(ClientError::NotConfigured("Gemini"))
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

/// Web search double
#[derive(Debug, Clone)]
pub struct StubWebSearchClient {
    result: Result<Vec<String>, u16>,
}

impl StubWebSearchClient {
    /// Always return these links
    pub fn with_links(links: &[&str]) -> Self {
        Self {
            result: Ok(links.iter().map(|link| link.to_string()).collect()),
        }
    }

    /// Always fail with this HTTP status
    pub fn failing_with_status(status: u16) -> Self {
        Self { result: Err(status) }
    }
}

#[async_trait]
impl WebSearchClientTrait for StubWebSearchClient {
    async fn search_links(&self, _query: &str) -> Result<Vec<String>, ClientError> {
        self.result.clone().map_err(|status| ClientError::UnexpectedStatus {
            service: "Web search",
            status,
        })
    }
}

/// Video search double
#[derive(Debug, Clone)]
pub struct StubVideoSearchClient {
    videos: Option<Vec<VideoSearchResult>>,
}

impl StubVideoSearchClient {
    /// Always return videos with these ids
    pub fn with_videos(ids: &[&str]) -> Self {
        Self {
            videos: Some(
                ids.iter()
                    .map(|id| VideoSearchResult {
                        video_id: id.to_string(),
                        title: format!("Video {}", id),
                        channel_title: None,
                    })
                    .collect(),
            ),
        }
    }

    /// Always fail as an unconfigured client would
    pub fn unconfigured() -> Self {
        Self { videos: None }
    }
}

#[async_trait]
impl VideoSearchClientTrait for StubVideoSearchClient {
    async fn search_videos(&self, _query: &str, max_results: u32) -> Result<Vec<VideoSearchResult>, ClientError> {
        let videos = self.videos.clone().ok_or(ClientError::NotConfigured("YouTube"))?;
        Ok(videos.into_iter().take(max_results as usize).collect())
    }

    fn is_configured(&self) -> bool {
        self.videos.is_some()
    }
}

/// Assistant over stub clients that never touch the network
pub fn stub_assistant_service(
    llm: StubLlmClient,
    web_search: StubWebSearchClient,
    video_search: StubVideoSearchClient,
) -> AssistantService {
    AssistantService::new(
        Arc::new(llm),
        Arc::new(web_search),
        Arc::new(video_search),
        AssistantSettings {
            stream_word_delay: Duration::ZERO,
            ..AssistantSettings::default()
        },
    )
}

/// Mock implementation of the AssistantServiceTrait for testing
#[derive(Debug, Clone)]
pub struct MockAssistantService {
    answer: String,
    should_fail_validation: bool,
    warnings: Vec<String>,
}

impl Default for MockAssistantService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAssistantService {
    /// Create a mock that answers every question
    pub fn new() -> Self {
        Self {
            answer: "Stay hydrated and rest often.".to_string(),
            should_fail_validation: false,
            warnings: Vec::new(),
        }
    }

    /// Configure the mock to reject every question
    pub fn with_validation_failure(mut self) -> Self {
        self.should_fail_validation = true;
        self
    }

    /// Configure the answer text
    pub fn with_answer(mut self, answer: &str) -> Self {
        self.answer = answer.to_string();
        self
    }

    /// Add a warning to every answer
    pub fn with_warning(mut self, warning: &str) -> Self {
        self.warnings.push(warning.to_string());
        self
    }
}

#[async_trait]
impl AssistantServiceTrait for MockAssistantService {
    async fn ask(&self, question: &str) -> Result<AssistantAnswer, AssistantServiceError> {
        if self.should_fail_validation || question.trim().is_empty() {
            return Err(AssistantServiceError::ValidationError(
                "Validation failed - mock is configured to fail validation".to_string(),
            ));
        }

        Ok(AssistantAnswer {
            question: question.trim().to_string(),
            answer: Some(self.answer.clone()),
            links: vec!["https://example.com/pregnancy".to_string()],
            videos: vec![RelatedVideo::new("mock-video", "Mock video")],
            warnings: self.warnings.clone(),
        })
    }

    fn status(&self) -> AssistantStatus {
        AssistantStatus {
            llm_configured: true,
            web_search_configured: true,
            video_search_configured: true,
        }
    }

    fn stream_word_delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Static data component status
    static_data_status: ComponentStatus,
    /// System status
    system_status: SystemStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            static_data_status: ComponentStatus::Healthy,
            system_status: SystemStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with some empty tables
    pub fn with_degraded_static_data(mut self) -> Self {
        self.static_data_status = ComponentStatus::Degraded;
        self
    }

    /// Configure the mock with no tables at all
    pub fn with_unhealthy_static_data(mut self) -> Self {
        self.static_data_status = ComponentStatus::Unhealthy;
        self
    }

    /// Set the overall system status
    pub fn with_system_status(mut self, status: SystemStatus) -> Self {
        self.system_status = status;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components.insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            STATIC_DATA_COMPONENT.to_string(),
            HealthComponent {
                status: self.static_data_status.clone(),
                details: match self.static_data_status {
                    ComponentStatus::Healthy => None,
                    ComponentStatus::Degraded => Some("Some tables are empty".to_string()),
                    ComponentStatus::Unhealthy => Some("No static data loaded".to_string()),
                },
            },
        );

        components.insert(
            ASSISTANT_COMPONENT.to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status.clone(),
            components,
        }
    }

    async fn check_static_data_status(&self) -> Result<bool, String> {
        match self.static_data_status {
            ComponentStatus::Healthy => Ok(true),
            ComponentStatus::Degraded => Ok(false),
            ComponentStatus::Unhealthy => Err("No static data loaded".to_string()),
        }
    }
}

/// Factory function to create a tracker over the fixture tables with a fixed date
pub fn create_mock_tracker_service() -> impl TrackerServiceTrait {
    TrackerService::with_clock(fixture_repository(), fixed_today)
}

/// Factory function to create a recommendation service over the fixture tables
pub fn create_mock_recommendation_service() -> impl RecommendationServiceTrait {
    RecommendationService::from_repository(&fixture_repository())
}

/// Factory function to create a mock assistant service
pub fn create_mock_assistant_service() -> impl AssistantServiceTrait {
    MockAssistantService::new()
}

/// Factory function to create a mock health service
pub fn create_mock_health_service() -> impl HealthServiceTrait {
    MockHealthService::new()
}
