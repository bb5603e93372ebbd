use crate::types::{Recipe, SavedRecipe};

pub const SEARCH_ERROR: &str = "There was a problem fetching recipes. Please try again later.";
pub const SAVE_NOTICE: &str = "Successfully added to collection";

/// Which list the client is showing. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    SearchResults,
    Collection,
}

/// Everything the client displays, owned in one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    /// Current contents of the search box.
    pub query: String,
    /// Current result set. Filter and sort rewrite it in place; the
    /// unfiltered order is not kept.
    pub results: Vec<Recipe>,
    /// Area picked in the filter dropdown, if any.
    pub selected_area: Option<String>,
    /// Visible search failure.
    pub error: Option<String>,
    pub view: View,
    /// Last fetched collection.
    pub saved: Vec<SavedRecipe>,
    /// One-shot confirmation (e.g. after a save).
    pub notice: Option<String>,
}

/// Events that move the client from one state to the next.
#[derive(Debug, Clone)]
pub enum Action {
    SetQuery(String),
    /// Search button pressed; always leaves the collection view.
    ShowSearch,
    SearchSucceeded(Vec<Recipe>),
    SearchFailed,
    ShowCollection,
    CollectionLoaded(Vec<SavedRecipe>),
    SelectArea(Option<String>),
    ApplyAreaFilter,
    SortByIngredients,
    Saved,
    DismissNotice,
}

impl ClientState {
    /// Apply one action and return the resulting state.
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SetQuery(query) => self.query = query,
            Action::ShowSearch => self.view = View::SearchResults,
            Action::SearchSucceeded(results) => {
                self.results = results;
                self.error = None;
            }
            Action::SearchFailed => self.error = Some(SEARCH_ERROR.to_string()),
            Action::ShowCollection => self.view = View::Collection,
            Action::CollectionLoaded(saved) => self.saved = saved,
            Action::SelectArea(area) => self.selected_area = area.filter(|a| !a.is_empty()),
            Action::ApplyAreaFilter => {
                if let Some(area) = &self.selected_area {
                    self.results = filter_by_area(std::mem::take(&mut self.results), area);
                }
            }
            Action::SortByIngredients => sort_by_ingredient_count(&mut self.results),
            Action::Saved => self.notice = Some(SAVE_NOTICE.to_string()),
            Action::DismissNotice => self.notice = None,
        }
        self
    }

    /// Distinct areas of the current results, for the filter dropdown.
    pub fn area_options(&self) -> Vec<String> {
        area_options(&self.results)
    }

    /// The search view has nothing to show for a non-blank query.
    pub fn shows_no_results(&self) -> bool {
        self.view == View::SearchResults && self.results.is_empty() && !self.query.trim().is_empty()
    }

    /// The collection view is open and the collection is empty.
    pub fn shows_empty_collection(&self) -> bool {
        self.view == View::Collection && self.saved.is_empty()
    }
}

/// Distinct non-empty areas in first-seen order.
pub fn area_options(results: &[Recipe]) -> Vec<String> {
    let mut areas: Vec<String> = Vec::new();
    for area in results.iter().filter_map(|r| r.area.as_deref()) {
        if !area.is_empty() && !areas.iter().any(|a| a == area) {
            areas.push(area.to_string());
        }
    }
    areas
}

/// Keep only the recipes from `area`.
pub fn filter_by_area(results: Vec<Recipe>, area: &str) -> Vec<Recipe> {
    results
        .into_iter()
        .filter(|r| r.area.as_deref() == Some(area))
        .collect()
}

/// Stable ascending sort by number of ingredients.
pub fn sort_by_ingredient_count(results: &mut [Recipe]) {
    results.sort_by_key(Recipe::ingredient_count);
}
