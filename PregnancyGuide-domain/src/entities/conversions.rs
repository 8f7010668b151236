use tracing::warn;

use pregnancy_guide_data::models as data;

use crate::entities::assistant::RelatedVideo;
use crate::entities::gestation::Trimester;
use crate::entities::recommendations::{DietRecord, ExerciseRecord, Meal, MealPlanRecord, RecommendationCatalog};
use crate::entities::weekly::WeekContent;

// Conversion functions between data models and domain entities
// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert a diet row; rows with an unknown trimester label are rejected
pub fn convert_to_domain_diet(record: &data::DietRecord) -> Result<DietRecord, String> {
    let trimester = parse_trimester(&record.trimester)?;
    Ok(DietRecord {
        trimester,
        food_group: record.food_group.clone(),
        examples: record.examples.clone(),
    })
}

/// Convert a meal plan row; rows with an unknown trimester or meal label are rejected
pub fn convert_to_domain_meal_plan(record: &data::MealPlanRecord) -> Result<MealPlanRecord, String> {
    let trimester = parse_trimester(&record.trimester)?;
    let meal = Meal::from_label(&record.meal).ok_or_else(|| format!("Unknown meal label: {}", record.meal))?;
    Ok(MealPlanRecord {
        trimester,
        meal,
        food: record.food.clone(),
    })
}

/// Convert an exercise row; rows with an unknown trimester label are rejected
pub fn convert_to_domain_exercise(record: &data::ExerciseRecord) -> Result<ExerciseRecord, String> {
    let trimester = parse_trimester(&record.trimester)?;
    Ok(ExerciseRecord {
        trimester,
        exercise_type: record.exercise_type.clone(),
        exercise: record.exercise.clone(),
        description: record.description.clone(),
        video_id: record.video_id.clone(),
    })
}

/// Convert a week content row
pub fn convert_to_domain_week_content(record: data::WeekContentRecord) -> WeekContent {
    WeekContent {
        week: record.week,
        baby_development: record.baby_development,
        pregnancy_symptoms: record.pregnancy_symptoms,
        pregnancy_checklist: record.pregnancy_checklist,
        images: record.images,
    }
}

/// Convert a video search hit
pub fn convert_to_domain_video(result: data::VideoSearchResult) -> RelatedVideo {
    RelatedVideo::new(result.video_id, result.title)
}

/// Build the typed recommendation tables, skipping rows that cannot be converted
pub fn convert_to_domain_catalog(
    diet: &[data::DietRecord],
    meal_plans: &[data::MealPlanRecord],
    exercises: &[data::ExerciseRecord],
) -> RecommendationCatalog {
    RecommendationCatalog {
        diet: convert_rows("diet", diet, convert_to_domain_diet),
        meal_plans: convert_rows("meal plan", meal_plans, convert_to_domain_meal_plan),
        exercises: convert_rows("exercise", exercises, convert_to_domain_exercise),
    }
}

fn convert_rows<D, T>(table: &str, rows: &[D], convert: fn(&D) -> Result<T, String>) -> Vec<T> {
    rows.iter()
        .filter_map(|row| match convert(row) {
            Ok(converted) => Some(converted),
            Err(reason) => {
                warn!(table, %reason, "Skipping static row");
                None
            }
        })
        .collect()
}

fn parse_trimester(label: &str) -> Result<Trimester, String> {
    Trimester::from_label(label).ok_or_else(|| format!("Unknown trimester label: {}", label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_diet(trimester: &str) -> data::DietRecord {
        data::DietRecord {
            trimester: trimester.to_string(),
            food_group: "Proteins".to_string(),
            examples: vec!["lean meat".to_string(), "beans".to_string()],
        }
    }

    #[test]
    fn test_convert_to_domain_diet() {
        let converted = convert_to_domain_diet(&data_diet("First Trimester")).unwrap();

        assert_eq!(converted.trimester, Trimester::First);
        assert_eq!(converted.food_group, "Proteins");
        assert_eq!(converted.examples, vec!["lean meat", "beans"]);
    }

    #[test]
    fn test_convert_meal_plan_rejects_unknown_meal() {
        let record = data::MealPlanRecord {
            trimester: "Second Trimester".to_string(),
            meal: "Brunch".to_string(),
            food: vec!["Pancakes".to_string()],
        };

        let err = convert_to_domain_meal_plan(&record).unwrap_err();
        assert!(err.contains("Brunch"));
    }

    #[test]
    fn test_catalog_skips_unconvertible_rows() {
        let diet = vec![data_diet("First Trimester"), data_diet("Fourth Trimester")];
        let catalog = convert_to_domain_catalog(&diet, &[], &[]);

        assert_eq!(catalog.diet.len(), 1);
        assert!(catalog.meal_plans.is_empty());
    }

    #[test]
    fn test_convert_to_domain_video() {
        let video = convert_to_domain_video(data::VideoSearchResult {
            video_id: "xyz".to_string(),
            title: "Kegels".to_string(),
            channel_title: None,
        });

        assert_eq!(video.embed_url, "https://www.youtube.com/embed/xyz");
        assert_eq!(video.title, "Kegels");
    }
}
