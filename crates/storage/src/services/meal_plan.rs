use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::nutrition::{MacroBudget, round_to_i32};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealTemplate {
    pub name: &'static str,
    pub calorie_ratio: f64,
    pub suggested_time: &'static str,
}

/// One day of eating; the ratios sum to 1.0.
pub const MEAL_TEMPLATES: [MealTemplate; 5] = [
    MealTemplate {
        name: "Breakfast",
        calorie_ratio: 0.25,
        suggested_time: "08:00",
    },
    MealTemplate {
        name: "Morning Snack",
        calorie_ratio: 0.10,
        suggested_time: "10:30",
    },
    MealTemplate {
        name: "Lunch",
        calorie_ratio: 0.30,
        suggested_time: "13:00",
    },
    MealTemplate {
        name: "Afternoon Snack",
        calorie_ratio: 0.10,
        suggested_time: "16:00",
    },
    MealTemplate {
        name: "Dinner",
        calorie_ratio: 0.25,
        suggested_time: "19:30",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SampleMeal {
    pub meal_name: String,
    pub description: String,
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
    pub suggested_time: String,
}

impl SampleMeal {
    fn from_template(template: &MealTemplate, target_calories: i32, macros: &MacroBudget) -> Self {
        let share = |total: i32| round_to_i32(f64::from(total) * template.calorie_ratio);
        let calories = share(target_calories);

        Self {
            meal_name: template.name.to_string(),
            description: format!(
                "Sample {} with approximately {} kcal.",
                template.name.to_lowercase(),
                calories
            ),
            calories,
            protein_g: share(macros.protein_g),
            carbs_g: share(macros.carbs_g),
            fat_g: share(macros.fat_g),
            suggested_time: template.suggested_time.to_string(),
        }
    }
}

/// One day's meals proportioned from the daily budget. The result is
/// day-agnostic; callers repeat it for every day of the week.
pub fn generate_sample_daily_meals(target_calories: i32, macros: &MacroBudget) -> Vec<SampleMeal> {
    MEAL_TEMPLATES
        .iter()
        .map(|template| SampleMeal::from_template(template, target_calories, macros))
        .collect()
}
