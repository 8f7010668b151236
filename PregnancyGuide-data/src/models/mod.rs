// Storage models for the static tables and external service results
pub mod diet;
pub mod exercise;
pub mod meal_plan;
pub mod video;
pub mod week;

pub use diet::DietRecord;
pub use exercise::ExerciseRecord;
pub use meal_plan::MealPlanRecord;
pub use video::VideoSearchResult;
pub use week::WeekContentRecord;

/// Split a multi-item cell into its ordered items, dropping empty entries
pub(crate) fn split_items(value: &str, separator: &str, trim: bool) -> Vec<String> {
    value
        .split(separator)
        .map(|item| if trim { item.trim() } else { item })
        .filter(|item| !item.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_items;

    #[test]
    fn test_split_items_keeps_order() {
        let items = split_items("lean meat, fish, eggs", ", ", false);
        assert_eq!(items, vec!["lean meat", "fish", "eggs"]);
    }

    #[test]
    fn test_split_items_trims_and_drops_empty() {
        let items = split_items(" Nausea ;Fatigue; ;", ";", true);
        assert_eq!(items, vec!["Nausea", "Fatigue"]);
    }
}
