use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecommendation {
    pub category: String,
    pub title: String,
    pub description: String,
    pub foods: Vec<String>,
    pub avoid: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecommendation {
    pub category: String,
    pub title: String,
    pub description: String,
    pub exercises: Vec<String>,
    pub duration: String,
    pub frequency: String,
    pub intensity: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalRecommendation {
    pub emotional_state: String,
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
    pub tips: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// breakfast, lunch, dinner or snack
    pub meal_type: String,
    pub title: String,
    pub foods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub recipe: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub calories: String,
    pub description: String,
    /// Rupiah range, e.g. "Rp 18.000 - 25.000"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub estimated_cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMenu {
    pub date: String,
    pub health_tip: String,
    pub breakfast: MealPlan,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakfast_alt: Vec<MealPlan>,
    pub lunch: MealPlan,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lunch_alt: Vec<MealPlan>,
    pub dinner: MealPlan,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dinner_alt: Vec<MealPlan>,
    pub snacks: Vec<MealPlan>,
    pub drinks: Vec<String>,
    pub fruits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_drinks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_fruits: Vec<String>,
    pub total_calories: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub total_estimated_cost: String,
}

/// Short dashboard hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    pub description: String,
    pub priority: String,
}
