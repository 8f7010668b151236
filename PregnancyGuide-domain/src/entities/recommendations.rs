use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::gestation::Trimester;

/// Dietary restriction drawn from the fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Restriction {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No wheat, barley or rye
    GlutenFree,
    /// No milk, yogurt or cheese
    #[serde(rename = "lactose intolerant")]
    LactoseIntolerant,
}

impl Restriction {
    /// Every restriction, in form order
    pub const ALL: [Restriction; 4] = [
        Restriction::Vegetarian,
        Restriction::Vegan,
        Restriction::GlutenFree,
        Restriction::LactoseIntolerant,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Restriction::Vegetarian => "Vegetarian",
            Restriction::Vegan => "Vegan",
            Restriction::GlutenFree => "Gluten-Free",
            Restriction::LactoseIntolerant => "Lactose Intolerant",
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Restriction::ALL
            .into_iter()
            .find(|restriction| restriction.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label meaning "no restriction" in the restriction multi-select
pub const NO_RESTRICTION_LABEL: &str = "None";

/// Set of active restrictions for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSet {
    restrictions: BTreeSet<Restriction>,
}

impl RestrictionSet {
    /// Parse form labels, returning the set and any labels that were not recognized.
    /// "None" is accepted and contributes nothing.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> (Self, Vec<String>) {
        let mut set = RestrictionSet::default();
        let mut unrecognized = Vec::new();

        for label in labels {
            let label = label.as_ref();
            if label.trim().eq_ignore_ascii_case(NO_RESTRICTION_LABEL) {
                continue;
            }
            match Restriction::from_label(label) {
                Some(restriction) => {
                    set.restrictions.insert(restriction);
                }
                None => unrecognized.push(label.to_string()),
            }
        }

        (set, unrecognized)
    }

    /// Whether a restriction is active
    pub fn contains(&self, restriction: Restriction) -> bool {
        self.restrictions.contains(&restriction)
    }

    /// True when no restriction is active
    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }
}

/// Meal slot in the sample diet chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Meal {
    /// Table label
    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snack => "Snack",
        }
    }

    /// Parse a table label; any label mentioning a snack is a snack
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "breakfast" => Some(Meal::Breakfast),
            "lunch" => Some(Meal::Lunch),
            "dinner" => Some(Meal::Dinner),
            other if other.contains("snack") => Some(Meal::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How many meals a day the user prefers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealPreference {
    #[serde(rename = "2 main meals")]
    TwoMainMeals,
    #[serde(rename = "3 main meals")]
    ThreeMainMeals,
    #[serde(rename = "3 main meals with snacks")]
    ThreeMainMealsWithSnacks,
    #[serde(rename = "Flexible")]
    Flexible,
}

impl MealPreference {
    /// Every preference, in form order
    pub const ALL: [MealPreference; 4] = [
        MealPreference::TwoMainMeals,
        MealPreference::ThreeMainMeals,
        MealPreference::ThreeMainMealsWithSnacks,
        MealPreference::Flexible,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            MealPreference::TwoMainMeals => "2 main meals",
            MealPreference::ThreeMainMeals => "3 main meals",
            MealPreference::ThreeMainMealsWithSnacks => "3 main meals with snacks",
            MealPreference::Flexible => "Flexible",
        }
    }

    /// Parse an exact form label
    pub fn from_label(label: &str) -> Option<Self> {
        MealPreference::ALL.into_iter().find(|preference| preference.label() == label.trim())
    }

    /// Meals kept by this preference; `None` keeps every row
    pub fn allowed_meals(&self) -> Option<&'static [Meal]> {
        match self {
            MealPreference::TwoMainMeals => Some(&[Meal::Lunch, Meal::Dinner]),
            MealPreference::ThreeMainMeals => Some(&[Meal::Breakfast, Meal::Lunch, Meal::Dinner]),
            MealPreference::ThreeMainMealsWithSnacks | MealPreference::Flexible => None,
        }
    }
}

/// Diet nutrition row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecord {
    pub trimester: Trimester,
    pub food_group: String,
    pub examples: Vec<String>,
}

/// Sample diet chart row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanRecord {
    pub trimester: Trimester,
    pub meal: Meal,
    pub food: Vec<String>,
}

/// Exercise routine row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub trimester: Trimester,
    pub exercise_type: String,
    pub exercise: String,
    pub description: String,
    pub video_id: String,
}

impl ExerciseRecord {
    /// Description split into its sentences, as shown in a bullet list
    pub fn description_points(&self) -> Vec<String> {
        self.description
            .split(". ")
            .map(|point| point.trim())
            .filter(|point| !point.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Filtered diet row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecommendation {
    pub food_group: String,
    pub examples: Vec<String>,
}

/// Filtered meal plan row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub meal: Meal,
    pub food: Vec<String>,
}

/// Everything the recommendations page shows for one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub diet: Vec<DietRecommendation>,
    pub meal_plan: Vec<MealPlanEntry>,
    pub exercises: Vec<ExerciseRecord>,
}

/// Choices offered by the recommendations form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationOptions {
    pub trimesters: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub meal_preferences: Vec<String>,
    pub exercise_types: Vec<String>,
}

/// The three typed tables the filters run over, converted once from the data layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationCatalog {
    pub diet: Vec<DietRecord>,
    pub meal_plans: Vec<MealPlanRecord>,
    pub exercises: Vec<ExerciseRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restriction_labels_are_case_insensitive() {
        assert_eq!(Restriction::from_label("gluten-free"), Some(Restriction::GlutenFree));
        assert_eq!(Restriction::from_label(" LACTOSE INTOLERANT "), Some(Restriction::LactoseIntolerant));
        assert_eq!(Restriction::from_label("Keto"), None);
    }

    #[test]
    fn test_restriction_set_ignores_none() {
        let (set, unrecognized) = RestrictionSet::from_labels(&["None", "Vegan", "vegetarian", "Paleo"]);

        assert!(set.contains(Restriction::Vegan));
        assert!(set.contains(Restriction::Vegetarian));
        assert!(!set.contains(Restriction::GlutenFree));
        assert_eq!(unrecognized, vec!["Paleo".to_string()]);
        assert!(!set.is_empty());
        assert!(RestrictionSet::from_labels(&["None"]).0.is_empty());
    }

    #[test]
    fn test_meal_preference_allowed_meals() {
        assert_eq!(MealPreference::TwoMainMeals.allowed_meals(), Some(&[Meal::Lunch, Meal::Dinner][..]));
        assert_eq!(MealPreference::Flexible.allowed_meals(), None);
        assert_eq!(MealPreference::from_label("3 main meals with snacks"), Some(MealPreference::ThreeMainMealsWithSnacks));
        assert_eq!(MealPreference::from_label("5 small meals"), None);
    }

    #[test]
    fn test_meal_labels() {
        assert_eq!(Meal::from_label("Breakfast"), Some(Meal::Breakfast));
        assert_eq!(Meal::from_label("Mid-morning Snack"), Some(Meal::Snack));
        assert_eq!(Meal::from_label("Brunch"), None);
    }

    #[test]
    fn test_description_points() {
        let record = ExerciseRecord {
            trimester: Trimester::First,
            exercise_type: "Cardio".to_string(),
            exercise: "Brisk Walking".to_string(),
            description: "Walk briskly. Keep your posture upright. Aim for 30 minutes".to_string(),
            video_id: "abc".to_string(),
        };

        assert_eq!(
            record.description_points(),
            vec!["Walk briskly", "Keep your posture upright", "Aim for 30 minutes"]
        );
    }
}
