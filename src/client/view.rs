use std::fmt::{self, Display, Formatter};

use super::state::{ClientState, View};
use crate::types::{Recipe, SavedRecipe};

pub const NO_RESULTS: &str = "No recipes found.";
pub const EMPTY_COLLECTION: &str = "No recipes saved in your collection.";

/// Plain-text rendering of the client state.
pub struct Screen<'a>(pub &'a ClientState);

impl Display for Screen<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "Recipe Finder")?;

        if let Some(notice) = &state.notice {
            writeln!(f, "* {notice}")?;
        }
        if let Some(error) = &state.error {
            writeln!(f, "! {error}")?;
        }

        match state.view {
            View::SearchResults if !state.results.is_empty() => {
                let areas = state.area_options();
                let selected = state.selected_area.as_deref().unwrap_or("none");
                writeln!(f, "Filter by Area: [{}] (selected: {selected})", areas.join(", "))?;
                writeln!(f, "Search Results:")?;
                for (n, recipe) in state.results.iter().enumerate() {
                    write_result(f, n, recipe)?;
                }
            }
            View::SearchResults if state.shows_no_results() => writeln!(f, "{NO_RESULTS}")?,
            View::SearchResults => {}
            View::Collection if state.saved.is_empty() => writeln!(f, "{EMPTY_COLLECTION}")?,
            View::Collection => {
                writeln!(f, "My Collection:")?;
                for recipe in &state.saved {
                    write_saved(f, recipe)?;
                }
            }
        }
        Ok(())
    }
}

fn write_result(f: &mut Formatter<'_>, n: usize, recipe: &Recipe) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "[{n}] {}", recipe.name)?;
    write_details(f, &recipe.category, &recipe.area, &recipe.instructions)?;
    writeln!(f, "    Ingredients:")?;
    for line in &recipe.ingredients {
        writeln!(f, "      {} - {}", line.ingredient, line.measure)?;
    }
    write_links(f, &recipe.youtube, &recipe.source)
}

fn write_saved(f: &mut Formatter<'_>, recipe: &SavedRecipe) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "#{} {}", recipe.id, recipe.name)?;
    write_details(f, &recipe.category, &recipe.area, &recipe.instructions)?;
    writeln!(f, "    Ingredients:")?;
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        let measure = recipe.measures.get(i).map(String::as_str).unwrap_or_default();
        writeln!(f, "      {ingredient} - {measure}")?;
    }
    write_links(f, &recipe.youtube, &recipe.source)
}

fn write_details(
    f: &mut Formatter<'_>,
    category: &Option<String>,
    area: &Option<String>,
    instructions: &Option<String>,
) -> fmt::Result {
    writeln!(f, "    Category: {}", category.as_deref().unwrap_or_default())?;
    writeln!(f, "    Area: {}", area.as_deref().unwrap_or_default())?;
    writeln!(f, "    Instructions: {}", instructions.as_deref().unwrap_or_default())
}

fn write_links(f: &mut Formatter<'_>, youtube: &Option<String>, source: &Option<String>) -> fmt::Result {
    if let Some(url) = youtube.as_deref().filter(|u| !u.is_empty()) {
        writeln!(f, "    Watch on YouTube: {url}")?;
    }
    if let Some(url) = source.as_deref().filter(|u| !u.is_empty()) {
        writeln!(f, "    Source: {url}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::state::Action;
    use crate::types::IngredientLine;

    fn carbonara() -> Recipe {
        Recipe {
            id: "52982".into(),
            name: "Spaghetti alla Carbonara".into(),
            category: Some("Pasta".into()),
            area: Some("Italian".into()),
            instructions: Some("Boil pasta.".into()),
            ingredients: vec![
                IngredientLine { ingredient: "Spaghetti".into(), measure: "320g".into() },
                IngredientLine { ingredient: "Egg Yolks".into(), measure: "6".into() },
            ],
            youtube: Some("https://www.youtube.com/watch?v=3AAdKl1UYZs".into()),
            source: Some(String::new()),
            image: None,
        }
    }

    #[test]
    fn renders_result_cards() {
        let state = ClientState::default().apply(Action::SearchSucceeded(vec![carbonara()]));
        let text = Screen(&state).to_string();

        assert!(text.contains("Filter by Area: [Italian]"));
        assert!(text.contains("[0] Spaghetti alla Carbonara"));
        assert!(text.contains("Spaghetti - 320g"));
        assert!(text.contains("Watch on YouTube"));
        assert!(!text.contains("Source:"));
    }

    #[test]
    fn renders_no_results_for_empty_search() {
        let state = ClientState::default()
            .apply(Action::SetQuery("qqq".into()))
            .apply(Action::SearchSucceeded(vec![]));
        assert!(Screen(&state).to_string().contains(NO_RESULTS));
    }

    #[test]
    fn renders_empty_collection() {
        let state = ClientState::default().apply(Action::ShowCollection);
        let text = Screen(&state).to_string();
        assert!(text.contains(EMPTY_COLLECTION));
        assert!(!text.contains(NO_RESULTS));
    }

    #[test]
    fn error_is_shown_alongside_previous_results() {
        let state = ClientState::default()
            .apply(Action::SearchSucceeded(vec![carbonara()]))
            .apply(Action::SearchFailed);
        let text = Screen(&state).to_string();
        assert!(text.contains("! There was a problem fetching recipes"));
        assert!(text.contains("Spaghetti alla Carbonara"));
    }
}
