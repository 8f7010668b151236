use std::sync::Arc;

use crate::models::{DietRecord, ExerciseRecord, MealPlanRecord, WeekContentRecord};
use crate::tables::StaticTables;

/// In-memory storage for the static tables
///
/// The tables are shared behind an `Arc` and never mutated after load, so
/// clones are cheap and safe to read from any number of tasks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<StaticTables>,
}

impl InMemoryStorage {
    /// Wrap loaded tables
    pub fn new(tables: StaticTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Diet nutrition rows
    pub fn diet(&self) -> &[DietRecord] {
        &self.tables.diet
    }

    /// Sample diet chart rows
    pub fn meal_plans(&self) -> &[MealPlanRecord] {
        &self.tables.meal_plans
    }

    /// Exercise routine rows
    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.tables.exercises
    }

    /// Find the content row for a week
    pub fn week(&self, week: u32) -> Option<&WeekContentRecord> {
        self.tables.weeks.iter().find(|row| row.week == week)
    }

    /// Number of per-week rows
    pub fn week_count(&self) -> usize {
        self.tables.weeks.len()
    }
}
