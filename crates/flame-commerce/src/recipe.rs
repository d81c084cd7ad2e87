//! Home-cooking recipes.

use serde::{Deserialize, Serialize};

use crate::ids::RecipeId;

/// How hard a recipe is to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Nutrition per serving. Calories in kcal, the rest in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A recipe published for customers to cook at home.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    /// Steps, in order.
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

impl Recipe {
    /// Prep plus cook time, in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Nutrition for the whole recipe.
    pub fn total_nutrition(&self) -> Option<Nutrition> {
        self.nutrition.map(|per_serving| Nutrition {
            calories: per_serving.calories.saturating_mul(self.servings),
            protein: per_serving.protein.saturating_mul(self.servings),
            carbs: per_serving.carbs.saturating_mul(self.servings),
            fat: per_serving.fat.saturating_mul(self.servings),
        })
    }
}
