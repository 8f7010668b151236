//! Static table loading for the PregnancyGuide application
//!
//! The four tables (diet nutrition, sample diet chart, exercise routines and
//! per-week content) are read once from CSV, either from the copies bundled
//! into this crate or from a directory given at startup. Multi-item cells are
//! split into ordered lists here so nothing downstream re-parses them.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{split_items, DietRecord, ExerciseRecord, MealPlanRecord, WeekContentRecord};

/// File name of the diet nutrition table
pub const DIET_NUTRITION_FILE: &str = "diet_nutrition.csv";
/// File name of the sample diet chart table
pub const SAMPLE_DIET_CHART_FILE: &str = "sample_diet_chart.csv";
/// File name of the exercise routines table
pub const EXERCISE_ROUTINES_FILE: &str = "exercise_routines.csv";
/// File name of the per-week content table
pub const WEEKS_FILE: &str = "weeks.csv";

const BUNDLED_DIET_NUTRITION: &str = include_str!("../../data/diet_nutrition.csv");
const BUNDLED_SAMPLE_DIET_CHART: &str = include_str!("../../data/sample_diet_chart.csv");
const BUNDLED_EXERCISE_ROUTINES: &str = include_str!("../../data/exercise_routines.csv");
const BUNDLED_WEEKS: &str = include_str!("../../data/weeks.csv");

/// Separator used inside diet `examples` and meal `food` cells
const FOOD_ITEM_SEPARATOR: &str = ", ";
/// Separator used inside the per-week list cells
const WEEK_ITEM_SEPARATOR: &str = ";";

/// Table loading error
#[derive(Debug, Error)]
pub enum TableError {
    /// A table file could not be opened
    #[error("Failed to open table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table could not be parsed
    #[error("Failed to parse table {table}: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

/// Where the static tables are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// CSV copies compiled into the crate
    Bundled,
    /// A directory holding the four CSV files
    Directory(PathBuf),
}

impl TableSource {
    /// Build a source from an optional data directory
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => TableSource::Directory(dir),
            None => TableSource::Bundled,
        }
    }
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSource::Bundled => write!(f, "bundled tables"),
            TableSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Raw diet nutrition row as it appears in the CSV
#[derive(Debug, Deserialize)]
struct DietRow {
    trimester: String,
    food_group: String,
    examples: String,
}

/// Raw sample diet chart row
#[derive(Debug, Deserialize)]
struct MealPlanRow {
    trimester: String,
    meal: String,
    food: String,
}

/// Raw exercise routine row
#[derive(Debug, Deserialize)]
struct ExerciseRow {
    trimester: String,
    exercise_type: String,
    exercise: String,
    description: String,
    video_id: String,
}

/// Raw per-week content row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekRow {
    week: u32,
    baby_development: String,
    pregnancy_symptoms: String,
    pregnancy_checklist: String,
    images: String,
}

impl From<DietRow> for DietRecord {
    fn from(row: DietRow) -> Self {
        Self {
            trimester: row.trimester,
            food_group: row.food_group,
            examples: split_items(&row.examples, FOOD_ITEM_SEPARATOR, false),
        }
    }
}

impl From<MealPlanRow> for MealPlanRecord {
    fn from(row: MealPlanRow) -> Self {
        Self {
            trimester: row.trimester,
            meal: row.meal,
            food: split_items(&row.food, FOOD_ITEM_SEPARATOR, false),
        }
    }
}

impl From<ExerciseRow> for ExerciseRecord {
    fn from(row: ExerciseRow) -> Self {
        Self {
            trimester: row.trimester,
            exercise_type: row.exercise_type,
            exercise: row.exercise,
            description: row.description,
            video_id: row.video_id,
        }
    }
}

impl From<WeekRow> for WeekContentRecord {
    fn from(row: WeekRow) -> Self {
        Self {
            week: row.week,
            baby_development: row.baby_development,
            pregnancy_symptoms: split_items(&row.pregnancy_symptoms, WEEK_ITEM_SEPARATOR, true),
            pregnancy_checklist: split_items(&row.pregnancy_checklist, WEEK_ITEM_SEPARATOR, true),
            images: split_items(&row.images, WEEK_ITEM_SEPARATOR, true),
        }
    }
}

/// The four read-only tables, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct StaticTables {
    /// Diet nutrition rows
    pub diet: Vec<DietRecord>,
    /// Sample diet chart rows
    pub meal_plans: Vec<MealPlanRecord>,
    /// Exercise routine rows
    pub exercises: Vec<ExerciseRecord>,
    /// Per-week content rows
    pub weeks: Vec<WeekContentRecord>,
}

impl StaticTables {
    /// Load the tables from the given source
    pub fn load(source: &TableSource) -> Result<Self, TableError> {
        let tables = match source {
            TableSource::Bundled => Self::bundled()?,
            TableSource::Directory(dir) => Self::from_dir(dir)?,
        };

        info!(
            source = %source,
            diet = tables.diet.len(),
            meal_plans = tables.meal_plans.len(),
            exercises = tables.exercises.len(),
            weeks = tables.weeks.len(),
            "Static tables loaded"
        );

        Ok(tables)
    }

    /// Parse the tables compiled into the crate
    pub fn bundled() -> Result<Self, TableError> {
        Ok(Self {
            diet: read_table::<DietRow, _, _>(BUNDLED_DIET_NUTRITION.as_bytes(), DIET_NUTRITION_FILE)?,
            meal_plans: read_table::<MealPlanRow, _, _>(BUNDLED_SAMPLE_DIET_CHART.as_bytes(), SAMPLE_DIET_CHART_FILE)?,
            exercises: read_table::<ExerciseRow, _, _>(BUNDLED_EXERCISE_ROUTINES.as_bytes(), EXERCISE_ROUTINES_FILE)?,
            weeks: read_table::<WeekRow, _, _>(BUNDLED_WEEKS.as_bytes(), WEEKS_FILE)?,
        })
    }

    /// Read the four CSV files from a directory
    pub fn from_dir(dir: &Path) -> Result<Self, TableError> {
        Ok(Self {
            diet: read_table::<DietRow, _, _>(open_table(dir, DIET_NUTRITION_FILE)?, DIET_NUTRITION_FILE)?,
            meal_plans: read_table::<MealPlanRow, _, _>(open_table(dir, SAMPLE_DIET_CHART_FILE)?, SAMPLE_DIET_CHART_FILE)?,
            exercises: read_table::<ExerciseRow, _, _>(open_table(dir, EXERCISE_ROUTINES_FILE)?, EXERCISE_ROUTINES_FILE)?,
            weeks: read_table::<WeekRow, _, _>(open_table(dir, WEEKS_FILE)?, WEEKS_FILE)?,
        })
    }
}

fn open_table(dir: &Path, file_name: &str) -> Result<File, TableError> {
    let path = dir.join(file_name);
    debug!("Opening table {}", path.display());
    File::open(&path).map_err(|source| TableError::Io { path, source })
}

/// Deserialize every row of a headered CSV table and convert it to its storage model
fn read_table<Row, Record, R>(reader: R, table: &'static str) -> Result<Vec<Record>, TableError>
where
    Row: DeserializeOwned + Into<Record>,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    csv_reader
        .deserialize::<Row>()
        .map(|row| row.map(Into::into).map_err(|source| TableError::Csv { table, source }))
        .collect()
}
