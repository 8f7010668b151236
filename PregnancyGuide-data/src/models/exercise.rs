use serde::{Deserialize, Serialize};

/// Storage model for an exercise routine row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseRecord {
    /// Trimester label as written in the source table
    pub trimester: String,

    /// Exercise category (e.g. "Cardio", "Stretching")
    pub exercise_type: String,

    /// Exercise name
    pub exercise: String,

    /// Free-text instructions, sentences separated by ". "
    pub description: String,

    /// YouTube video identifier demonstrating the exercise
    pub video_id: String,
}
