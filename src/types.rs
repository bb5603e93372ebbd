use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// TheMealDB exposes a fixed number of ingredient/measure slots per meal.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// One non-empty ingredient slot of a provider recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measure: String,
}

/// A recipe as returned by the provider. Read-only from our side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "MealRecord")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    /// Non-empty slots only, in slot order.
    pub ingredients: Vec<IngredientLine>,
    pub youtube: Option<String>,
    pub source: Option<String>,
    pub image: Option<String>,
}

impl Recipe {
    /// Number of non-empty ingredient slots.
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

/// Provider response envelope. `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<Recipe>>,
}

/// Raw provider shape. The numbered slot fields land in `slots` and are
/// folded into `Recipe::ingredients` exactly once, here.
#[derive(Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal", default)]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    image: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl From<MealRecord> for Recipe {
    fn from(record: MealRecord) -> Self {
        let mut ingredients: [Option<String>; MAX_INGREDIENT_SLOTS] = Default::default();
        let mut measures: [Option<String>; MAX_INGREDIENT_SLOTS] = Default::default();

        for (key, value) in record.slots {
            let Value::String(text) = value else {
                continue;
            };
            if let Some(slot) = key.strip_prefix("strIngredient").and_then(slot_index) {
                ingredients[slot] = Some(text);
            } else if let Some(slot) = key.strip_prefix("strMeasure").and_then(slot_index) {
                measures[slot] = Some(text);
            }
        }

        let ingredients = ingredients
            .into_iter()
            .zip(measures)
            .filter_map(|(ingredient, measure)| {
                let ingredient = ingredient.filter(|i| !i.is_empty())?;
                Some(IngredientLine {
                    ingredient,
                    measure: measure.unwrap_or_default(),
                })
            })
            .collect();

        Self {
            id: record.id,
            name: record.name.unwrap_or_default(),
            category: record.category,
            area: record.area,
            instructions: record.instructions,
            ingredients,
            youtube: record.youtube,
            source: record.source,
            image: record.image,
        }
    }
}

/// Parses the 1-based slot suffix of a provider field into a 0-based index.
fn slot_index(suffix: &str) -> Option<usize> {
    match suffix.parse::<usize>() {
        Ok(n) if (1..=MAX_INGREDIENT_SLOTS).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// A recipe stored in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// `ingredients[i]` pairs with `measures[i]`.
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub measures: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of `POST /saveRecipe`. Everything is optional on the wire so a
/// missing name surfaces as a validation failure from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSavedRecipe {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub measures: Vec<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Treats an explicit `null` list like a missing one.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&Recipe> for NewSavedRecipe {
    fn from(recipe: &Recipe) -> Self {
        let (ingredients, measures) = recipe
            .ingredients
            .iter()
            .map(|line| (line.ingredient.clone(), line.measure.clone()))
            .unzip();

        Self {
            name: Some(recipe.name.clone()),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            instructions: recipe.instructions.clone(),
            ingredients,
            measures,
            youtube: recipe.youtube.clone(),
            source: recipe.source.clone(),
            image: recipe.image.clone(),
        }
    }
}
