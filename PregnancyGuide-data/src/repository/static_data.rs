use tracing::debug;

use crate::models::{DietRecord, ExerciseRecord, MealPlanRecord, WeekContentRecord};
use crate::tables::{StaticTables, TableSource};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Row counts of the loaded tables, used for health reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableCounts {
    /// Diet nutrition rows
    pub diet: usize,
    /// Sample diet chart rows
    pub meal_plans: usize,
    /// Exercise routine rows
    pub exercises: usize,
    /// Per-week content rows
    pub weeks: usize,
}

impl TableCounts {
    /// True when any table has no rows
    pub fn has_empty_table(&self) -> bool {
        self.diet == 0 || self.meal_plans == 0 || self.exercises == 0 || self.weeks == 0
    }
}

/// Read-only access to the static tables
pub trait StaticDataRepositoryTrait: Send + Sync {
    /// All diet nutrition rows, in table order
    fn diet_records(&self) -> &[DietRecord];

    /// All sample diet chart rows, in table order
    fn meal_plan_records(&self) -> &[MealPlanRecord];

    /// All exercise routine rows, in table order
    fn exercise_records(&self) -> &[ExerciseRecord];

    /// Content row for a week, or `NotFound` when the table has no such week
    fn week_content(&self, week: u32) -> Result<WeekContentRecord, RepositoryError>;

    /// Row counts of every table
    fn table_counts(&self) -> TableCounts;
}

/// Repository over tables loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct StaticDataRepository {
    storage: InMemoryStorage,
}

impl StaticDataRepository {
    /// Create a repository over already loaded tables
    pub fn new(tables: StaticTables) -> Self {
        Self {
            storage: InMemoryStorage::new(tables),
        }
    }

    /// Load the tables from a source and wrap them
    pub fn load(source: &TableSource) -> Result<Self, RepositoryError> {
        let tables = StaticTables::load(source)?;
        Ok(Self::new(tables))
    }

    /// Repository over the tables bundled into the crate
    pub fn bundled() -> Result<Self, RepositoryError> {
        Self::load(&TableSource::Bundled)
    }
}

impl StaticDataRepositoryTrait for StaticDataRepository {
    fn diet_records(&self) -> &[DietRecord] {
        self.storage.diet()
    }

    fn meal_plan_records(&self) -> &[MealPlanRecord] {
        self.storage.meal_plans()
    }

    fn exercise_records(&self) -> &[ExerciseRecord] {
        self.storage.exercises()
    }

    fn week_content(&self, week: u32) -> Result<WeekContentRecord, RepositoryError> {
        debug!("Looking up content for week {}", week);
        self.storage
            .week(week)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("No content for week {}", week)))
    }

    fn table_counts(&self) -> TableCounts {
        TableCounts {
            diet: self.storage.diet().len(),
            meal_plans: self.storage.meal_plans().len(),
            exercises: self.storage.exercises().len(),
            weeks: self.storage.week_count(),
        }
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Repository over hand-built rows for testing
    #[derive(Debug, Clone, Default)]
    pub struct MockStaticDataRepository {
        tables: StaticTables,
    }

    impl MockStaticDataRepository {
        /// Create an empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Add diet rows
        pub fn with_diet(mut self, rows: Vec<DietRecord>) -> Self {
            self.tables.diet.extend(rows);
            self
        }

        /// Add sample diet chart rows
        pub fn with_meal_plans(mut self, rows: Vec<MealPlanRecord>) -> Self {
            self.tables.meal_plans.extend(rows);
            self
        }

        /// Add exercise rows
        pub fn with_exercises(mut self, rows: Vec<ExerciseRecord>) -> Self {
            self.tables.exercises.extend(rows);
            self
        }

        /// Add per-week rows
        pub fn with_weeks(mut self, rows: Vec<WeekContentRecord>) -> Self {
            self.tables.weeks.extend(rows);
            self
        }
    }

    impl StaticDataRepositoryTrait for MockStaticDataRepository {
        fn diet_records(&self) -> &[DietRecord] {
            &self.tables.diet
        }

        fn meal_plan_records(&self) -> &[MealPlanRecord] {
            &self.tables.meal_plans
        }

        fn exercise_records(&self) -> &[ExerciseRecord] {
            &self.tables.exercises
        }

        fn week_content(&self, week: u32) -> Result<WeekContentRecord, RepositoryError> {
            self.tables
                .weeks
                .iter()
                .find(|row| row.week == week)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("No content for week {}", week)))
        }

        fn table_counts(&self) -> TableCounts {
            TableCounts {
                diet: self.tables.diet.len(),
                meal_plans: self.tables.meal_plans.len(),
                exercises: self.tables.exercises.len(),
                weeks: self.tables.weeks.len(),
            }
        }
    }

    /// Build a diet row from string slices
    pub fn diet_row(trimester: &str, food_group: &str, examples: &[&str]) -> DietRecord {
        DietRecord {
            trimester: trimester.to_string(),
            food_group: food_group.to_string(),
            examples: examples.iter().map(|item| item.to_string()).collect(),
        }
    }

    /// Build a sample diet chart row from string slices
    pub fn meal_row(trimester: &str, meal: &str, food: &[&str]) -> MealPlanRecord {
        MealPlanRecord {
            trimester: trimester.to_string(),
            meal: meal.to_string(),
            food: food.iter().map(|item| item.to_string()).collect(),
        }
    }

    /// Build an exercise row
    pub fn exercise_row(trimester: &str, exercise_type: &str, exercise: &str) -> ExerciseRecord {
        ExerciseRecord {
            trimester: trimester.to_string(),
            exercise_type: exercise_type.to_string(),
            exercise: exercise.to_string(),
            description: format!("Warm up. Do {}. Cool down", exercise.to_lowercase()),
            video_id: format!("vid-{}", exercise.to_lowercase().replace(' ', "-")),
        }
    }

    /// Build a per-week row
    pub fn week_row(week: u32) -> WeekContentRecord {
        WeekContentRecord {
            week,
            baby_development: format!("Development notes for week {}", week),
            pregnancy_symptoms: vec!["Fatigue".to_string()],
            pregnancy_checklist: vec!["Drink water".to_string()],
            images: vec![format!("images/week{:02}.jpg", week)],
        }
    }

    #[test]
    fn test_bundled_repository_counts() {
        let repo = StaticDataRepository::bundled().unwrap();
        let counts = repo.table_counts();

        assert_eq!(counts.weeks, 41);
        assert!(!counts.has_empty_table());
    }

    #[test]
    fn test_week_content_lookup() {
        let repo = StaticDataRepository::bundled().unwrap();

        let week = repo.week_content(20).unwrap();
        assert_eq!(week.week, 20);
        assert!(!week.baby_development.is_empty());

        let missing = repo.week_content(42);
        assert!(matches!(missing, Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_clones_share_tables() {
        let repo = StaticDataRepository::bundled().unwrap();
        let clone = repo.clone();

        assert_eq!(
            repo.diet_records().as_ptr(),
            clone.diet_records().as_ptr(),
            "Cloned repository should share storage"
        );
    }

    #[test]
    fn test_mock_repository_reports_empty_tables() {
        let repo = MockStaticDataRepository::new().with_weeks(vec![week_row(1)]);
        let counts = repo.table_counts();

        assert_eq!(counts.weeks, 1);
        assert!(counts.has_empty_table());
        assert!(repo.week_content(1).is_ok());
    }
}
