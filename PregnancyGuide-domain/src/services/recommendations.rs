use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::entities::conversions::convert_to_domain_catalog;
use crate::entities::gestation::Trimester;
use crate::entities::recommendations::{
    DietRecommendation, DietRecord, ExerciseRecord, MealPlanEntry, MealPlanRecord, MealPreference,
    RecommendationCatalog, RecommendationOptions, Recommendations, Restriction, RestrictionSet,
    NO_RESTRICTION_LABEL,
};
use pregnancy_guide_data::repository::StaticDataRepositoryTrait;

/// How a restriction keyword is compared with a food item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordMatching {
    /// Substring match on the item as written
    CaseSensitive,
    /// Substring match on the lowercased item
    CaseInsensitive,
}

/// Rows a restriction rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    /// Only rows of the named food group
    FoodGroup(&'static str),
    /// Every row
    AllRows,
}

/// One entry of a restriction rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionRule {
    pub restriction: Restriction,
    pub target: RuleTarget,
    pub keywords: &'static [&'static str],
    pub matching: KeywordMatching,
}

/// Rules applied to the diet nutrition table
pub const DIET_RESTRICTION_RULES: &[RestrictionRule] = &[
    RestrictionRule {
        restriction: Restriction::Vegetarian,
        target: RuleTarget::FoodGroup("Proteins"),
        keywords: &["meat", "fish"],
        matching: KeywordMatching::CaseSensitive,
    },
    RestrictionRule {
        restriction: Restriction::Vegan,
        target: RuleTarget::FoodGroup("Proteins"),
        keywords: &["meat", "fish", "dairy", "egg"],
        matching: KeywordMatching::CaseSensitive,
    },
    RestrictionRule {
        restriction: Restriction::GlutenFree,
        target: RuleTarget::FoodGroup("Whole Grains"),
        keywords: &["wheat", "barley", "rye"],
        matching: KeywordMatching::CaseSensitive,
    },
    RestrictionRule {
        restriction: Restriction::LactoseIntolerant,
        target: RuleTarget::FoodGroup("Dairy or Alternatives"),
        keywords: &["milk", "yogurt", "cheese"],
        matching: KeywordMatching::CaseSensitive,
    },
];

/// Rules applied to the sample diet chart
pub const MEAL_PLAN_RESTRICTION_RULES: &[RestrictionRule] = &[
    RestrictionRule {
        restriction: Restriction::LactoseIntolerant,
        target: RuleTarget::AllRows,
        keywords: &["milk", "yogurt", "cheese"],
        matching: KeywordMatching::CaseInsensitive,
    },
    RestrictionRule {
        restriction: Restriction::Vegetarian,
        target: RuleTarget::AllRows,
        keywords: &["chicken", "fish", "egg"],
        matching: KeywordMatching::CaseInsensitive,
    },
    RestrictionRule {
        restriction: Restriction::Vegan,
        target: RuleTarget::AllRows,
        keywords: &["milk", "yogurt", "cheese", "egg"],
        matching: KeywordMatching::CaseInsensitive,
    },
    RestrictionRule {
        restriction: Restriction::GlutenFree,
        target: RuleTarget::AllRows,
        keywords: &["wheat", "barley", "rye"],
        matching: KeywordMatching::CaseInsensitive,
    },
];

impl RuleTarget {
    fn applies_to(&self, food_group: Option<&str>) -> bool {
        match self {
            RuleTarget::AllRows => true,
            RuleTarget::FoodGroup(group) => food_group == Some(*group),
        }
    }
}

/// Drop every item containing any of the keywords, keeping the order of the rest
pub fn remove_matching_tokens(items: &[String], keywords: &[&str], matching: KeywordMatching) -> Vec<String> {
    items
        .iter()
        .filter(|item| {
            let candidate = match matching {
                KeywordMatching::CaseSensitive => item.to_string(),
                KeywordMatching::CaseInsensitive => item.to_lowercase(),
            };
            !keywords.iter().any(|keyword| candidate.contains(keyword))
        })
        .cloned()
        .collect()
}

fn apply_rules(
    items: &[String],
    food_group: Option<&str>,
    restrictions: &RestrictionSet,
    rules: &[RestrictionRule],
) -> Vec<String> {
    if restrictions.is_empty() {
        return items.to_vec();
    }

    rules
        .iter()
        .filter(|rule| restrictions.contains(rule.restriction) && rule.target.applies_to(food_group))
        .fold(items.to_vec(), |remaining, rule| {
            remove_matching_tokens(&remaining, rule.keywords, rule.matching)
        })
}

/// Diet rows for a trimester with restricted items removed, in table order
pub fn diet_recommendations(
    records: &[DietRecord],
    trimester: Trimester,
    restrictions: &RestrictionSet,
) -> Vec<DietRecommendation> {
    records
        .iter()
        .filter(|record| record.trimester == trimester)
        .map(|record| DietRecommendation {
            food_group: record.food_group.clone(),
            examples: apply_rules(
                &record.examples,
                Some(record.food_group.as_str()),
                restrictions,
                DIET_RESTRICTION_RULES,
            ),
        })
        .collect()
}

/// Sample diet chart rows for a trimester, with restricted foods removed and
/// rows limited to the meals of the preference. `None` keeps every meal.
pub fn meal_plan(
    records: &[MealPlanRecord],
    trimester: Trimester,
    restrictions: &RestrictionSet,
    preference: Option<MealPreference>,
) -> Vec<MealPlanEntry> {
    let allowed_meals = preference.and_then(|preference| preference.allowed_meals());

    records
        .iter()
        .filter(|record| record.trimester == trimester)
        .filter(|record| allowed_meals.map_or(true, |meals| meals.contains(&record.meal)))
        .map(|record| MealPlanEntry {
            meal: record.meal,
            food: apply_rules(&record.food, None, restrictions, MEAL_PLAN_RESTRICTION_RULES),
        })
        .collect()
}

/// Exercise rows for a trimester whose type was selected, in table order
pub fn exercise_recommendations<S: AsRef<str>>(
    records: &[ExerciseRecord],
    trimester: Trimester,
    exercise_types: &[S],
) -> Vec<ExerciseRecord> {
    records
        .iter()
        .filter(|record| record.trimester == trimester)
        .filter(|record| exercise_types.iter().any(|kind| kind.as_ref() == record.exercise_type))
        .cloned()
        .collect()
}

/// Distinct exercise types in order of first appearance
pub fn exercise_types(records: &[ExerciseRecord]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for record in records {
        if !types.contains(&record.exercise_type) {
            types.push(record.exercise_type.clone());
        }
    }
    types
}

/// One submission of the recommendations form, as labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationQuery {
    pub trimester: String,
    pub dietary_restrictions: Vec<String>,
    pub meal_preference: String,
    pub exercise_types: Vec<String>,
}

/// Trait for recommendation operations
pub trait RecommendationServiceTrait: Send + Sync {
    /// Filter the diet, meal plan and exercise tables for one submission
    fn recommend(&self, query: &RecommendationQuery) -> Recommendations;

    /// Vocabularies offered by the form
    fn options(&self) -> RecommendationOptions;
}

/// Recommendation service over tables converted once at construction
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: Arc<RecommendationCatalog>,
}

impl RecommendationService {
    /// Create a service from already converted tables
    pub fn new(catalog: RecommendationCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Create a service from the static data repository
    pub fn from_repository<R: StaticDataRepositoryTrait + ?Sized>(repository: &R) -> Self {
        let catalog = convert_to_domain_catalog(
            repository.diet_records(),
            repository.meal_plan_records(),
            repository.exercise_records(),
        );
        info!(
            diet = catalog.diet.len(),
            meal_plans = catalog.meal_plans.len(),
            exercises = catalog.exercises.len(),
            "Recommendation tables ready"
        );
        Self::new(catalog)
    }
}

impl RecommendationServiceTrait for RecommendationService {
    #[instrument(skip(self))]
    fn recommend(&self, query: &RecommendationQuery) -> Recommendations {
        let Some(trimester) = Trimester::from_label(&query.trimester) else {
            warn!(trimester = %query.trimester, "Unrecognized trimester, returning no recommendations");
            return Recommendations::default();
        };

        let (restrictions, unrecognized) = RestrictionSet::from_labels(&query.dietary_restrictions);
        if !unrecognized.is_empty() {
            warn!(?unrecognized, "Ignoring unrecognized dietary restrictions");
        }

        let preference = MealPreference::from_label(&query.meal_preference);
        if preference.is_none() {
            warn!(preference = %query.meal_preference, "Unrecognized meal preference, keeping every meal");
        }

        let recommendations = Recommendations {
            diet: diet_recommendations(&self.catalog.diet, trimester, &restrictions),
            meal_plan: meal_plan(&self.catalog.meal_plans, trimester, &restrictions, preference),
            exercises: exercise_recommendations(&self.catalog.exercises, trimester, &query.exercise_types),
        };

        debug!(
            diet = recommendations.diet.len(),
            meals = recommendations.meal_plan.len(),
            exercises = recommendations.exercises.len(),
            "Built recommendations"
        );

        recommendations
    }

    fn options(&self) -> RecommendationOptions {
        let mut dietary_restrictions = vec![NO_RESTRICTION_LABEL.to_string()];
        dietary_restrictions.extend(Restriction::ALL.iter().map(|restriction| restriction.label().to_string()));

        RecommendationOptions {
            trimesters: Trimester::ALL.iter().map(|trimester| trimester.label().to_string()).collect(),
            dietary_restrictions,
            meal_preferences: MealPreference::ALL
                .iter()
                .map(|preference| preference.label().to_string())
                .collect(),
            exercise_types: exercise_types(&self.catalog.exercises),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::recommendations::Meal;
    use pregnancy_guide_data::repository::StaticDataRepository;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn restrictions(labels: &[&str]) -> RestrictionSet {
        RestrictionSet::from_labels(labels).0
    }

    fn proteins() -> DietRecord {
        DietRecord {
            trimester: Trimester::First,
            food_group: "Proteins".to_string(),
            examples: strings(&["lean meat", "fish", "eggs", "beans", "lentils", "tofu", "dairy products", "nuts"]),
        }
    }

    fn bundled_service() -> RecommendationService {
        let repository = StaticDataRepository::bundled().unwrap();
        RecommendationService::from_repository(&repository)
    }

    #[test]
    fn test_remove_matching_tokens_case_sensitive() {
        let items = strings(&["Whole wheat bread", "wheat germ", "Rye toast", "oats"]);
        let kept = remove_matching_tokens(&items, &["wheat", "rye"], KeywordMatching::CaseSensitive);

        assert_eq!(kept, strings(&["Rye toast", "oats"]));
    }

    #[test]
    fn test_remove_matching_tokens_case_insensitive() {
        let items = strings(&["Whole wheat bread", "Rye toast", "oats"]);
        let kept = remove_matching_tokens(&items, &["wheat", "rye"], KeywordMatching::CaseInsensitive);

        assert_eq!(kept, strings(&["oats"]));
    }

    #[test]
    fn test_vegetarian_diet_removes_meat_and_fish() {
        let records = vec![proteins()];
        let result = diet_recommendations(&records, Trimester::First, &restrictions(&["Vegetarian"]));

        assert_eq!(
            result[0].examples,
            strings(&["eggs", "beans", "lentils", "tofu", "dairy products", "nuts"])
        );
    }

    #[test]
    fn test_vegan_and_vegetarian_union() {
        let records = vec![proteins()];
        let result = diet_recommendations(&records, Trimester::First, &restrictions(&["Vegetarian", "Vegan"]));

        assert_eq!(result[0].examples, strings(&["beans", "lentils", "tofu", "nuts"]));
    }

    #[test]
    fn test_diet_rules_only_touch_their_food_group() {
        let records = vec![
            proteins(),
            DietRecord {
                trimester: Trimester::First,
                food_group: "Fruits".to_string(),
                examples: strings(&["fish-shaped crackers", "apples"]),
            },
        ];
        let result = diet_recommendations(&records, Trimester::First, &restrictions(&["Vegetarian"]));

        assert_eq!(result[1].examples, strings(&["fish-shaped crackers", "apples"]));
    }

    #[test]
    fn test_unknown_restrictions_are_ignored() {
        let records = vec![proteins()];
        let result = diet_recommendations(&records, Trimester::First, &restrictions(&["None", "Keto"]));

        assert_eq!(result[0].examples, proteins().examples);
    }

    #[test]
    fn test_two_main_meals_without_restrictions() {
        let records = vec![
            MealPlanRecord {
                trimester: Trimester::Second,
                meal: Meal::Breakfast,
                food: strings(&["Whole wheat toast", "Scrambled eggs", "Orange juice"]),
            },
            MealPlanRecord {
                trimester: Trimester::Second,
                meal: Meal::Lunch,
                food: strings(&["Quinoa salad", "Baked fish"]),
            },
            MealPlanRecord {
                trimester: Trimester::Second,
                meal: Meal::Dinner,
                food: strings(&["Barley soup"]),
            },
            MealPlanRecord {
                trimester: Trimester::Second,
                meal: Meal::Snack,
                food: strings(&["Cheese cubes"]),
            },
        ];

        let result = meal_plan(
            &records,
            Trimester::Second,
            &RestrictionSet::default(),
            Some(MealPreference::TwoMainMeals),
        );

        let meals: Vec<Meal> = result.iter().map(|entry| entry.meal).collect();
        assert_eq!(meals, vec![Meal::Lunch, Meal::Dinner]);
        assert_eq!(result[0].food, strings(&["Quinoa salad", "Baked fish"]));
    }

    #[test]
    fn test_meal_plan_gluten_free_case_insensitive() {
        let records = vec![MealPlanRecord {
            trimester: Trimester::Third,
            meal: Meal::Breakfast,
            food: strings(&["Rye toast", "Peanut butter", "Glass of milk"]),
        }];

        let result = meal_plan(&records, Trimester::Third, &restrictions(&["Gluten-Free"]), None);
        assert_eq!(result[0].food, strings(&["Peanut butter", "Glass of milk"]));
    }

    #[test]
    fn test_exercise_recommendations_keep_table_order() {
        let service = bundled_service();
        let query = RecommendationQuery {
            trimester: "Second Trimester".to_string(),
            dietary_restrictions: vec![],
            meal_preference: "Flexible".to_string(),
            exercise_types: strings(&["Cardio", "Strength"]),
        };

        let result = service.recommend(&query);
        let names: Vec<&str> = result.exercises.iter().map(|record| record.exercise.as_str()).collect();

        assert_eq!(names, vec!["Swimming", "Stationary Cycling", "Wall Push-Ups"]);
        assert!(result.exercises.iter().all(|record| record.trimester == Trimester::Second));
    }

    #[test]
    fn test_no_exercise_types_selected() {
        let service = bundled_service();
        let query = RecommendationQuery {
            trimester: "First Trimester".to_string(),
            meal_preference: "3 main meals".to_string(),
            ..Default::default()
        };

        let result = service.recommend(&query);
        assert!(result.exercises.is_empty());
        assert_eq!(result.meal_plan.len(), 3);
        assert!(!result.diet.is_empty());
    }

    #[test]
    fn test_unknown_trimester_returns_empty() {
        let service = bundled_service();
        let query = RecommendationQuery {
            trimester: "Fourth Trimester".to_string(),
            exercise_types: strings(&["Cardio"]),
            ..Default::default()
        };

        assert_eq!(service.recommend(&query), Recommendations::default());
    }

    #[test]
    fn test_unknown_meal_preference_keeps_every_meal() {
        let service = bundled_service();
        let query = RecommendationQuery {
            trimester: "First Trimester".to_string(),
            meal_preference: "Five small meals".to_string(),
            ..Default::default()
        };

        assert_eq!(service.recommend(&query).meal_plan.len(), 4);
    }

    #[test]
    fn test_bundled_vegan_meal_plan() {
        let service = bundled_service();
        let query = RecommendationQuery {
            trimester: "First Trimester".to_string(),
            dietary_restrictions: strings(&["Vegan"]),
            meal_preference: "3 main meals with snacks".to_string(),
            ..Default::default()
        };

        let result = service.recommend(&query);
        let breakfast = result.meal_plan.iter().find(|entry| entry.meal == Meal::Breakfast).unwrap();
        assert_eq!(breakfast.food, strings(&["Banana"]));
    }

    #[test]
    fn test_no_restrictions_keep_every_item() {
        let records = vec![proteins()];
        let result = diet_recommendations(&records, Trimester::First, &RestrictionSet::default());

        assert_eq!(result[0].examples, proteins().examples);
    }

    #[test]
    fn test_bundled_vegan_first_trimester_diet() {
        let service = bundled_service();
        let query = RecommendationQuery {
            trimester: "First Trimester".to_string(),
            dietary_restrictions: strings(&["Vegan"]),
            ..Default::default()
        };

        let result = service.recommend(&query);
        let group = |name: &str| {
            result
                .diet
                .iter()
                .find(|row| row.food_group == name)
                .map(|row| row.examples.clone())
                .unwrap()
        };

        assert_eq!(group("Proteins"), strings(&["beans", "lentils", "tofu", "nuts"]));
        assert_eq!(
            group("Whole Grains"),
            strings(&["whole wheat bread", "brown rice", "oats", "quinoa", "barley", "rye crackers"])
        );
        assert_eq!(
            group("Dairy or Alternatives"),
            strings(&["milk", "yogurt", "cheese", "fortified soy milk", "calcium-set tofu"])
        );
        assert_eq!(group("Fruits"), strings(&["oranges", "bananas", "berries", "apples", "mangoes"]));
    }

    #[test]
    fn test_second_trimester_cardio_and_stretching() {
        let repository = StaticDataRepository::bundled().unwrap();
        let catalog = convert_to_domain_catalog(
            repository.diet_records(),
            repository.meal_plan_records(),
            repository.exercise_records(),
        );

        let result = exercise_recommendations(&catalog.exercises, Trimester::Second, &["Cardio", "Stretching"]);
        let names: Vec<&str> = result.iter().map(|record| record.exercise.as_str()).collect();

        assert_eq!(names, vec!["Swimming", "Stationary Cycling", "Side-Lying Hip Stretch"]);
        assert!(result.iter().all(|record| record.exercise_type != "Strength"));
    }

    #[test]
    fn test_options() {
        let options = bundled_service().options();

        assert_eq!(options.trimesters.len(), 3);
        assert_eq!(options.dietary_restrictions[0], "None");
        assert_eq!(options.dietary_restrictions.len(), 5);
        assert_eq!(options.meal_preferences.len(), 4);
        assert_eq!(options.exercise_types, strings(&["Cardio", "Strength", "Stretching", "Yoga", "Pelvic Floor"]));
    }
}
