use tracing::{error, info, warn};

use super::collection::CollectionBackend;
use super::provider::RecipeProvider;
use super::state::{Action, ClientState};
use crate::types::NewSavedRecipe;

/// Drives `ClientState` by issuing provider and collection calls.
///
/// Every method takes `&mut self`, so each user action runs to completion
/// before the next one starts. Responses are applied as they arrive.
pub struct RecipeApp<P, C> {
    provider: P,
    collection: C,
    state: ClientState,
}

impl<P: RecipeProvider, C: CollectionBackend> RecipeApp<P, C> {
    pub fn new(provider: P, collection: C) -> Self {
        Self {
            provider,
            collection,
            state: ClientState::default(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).apply(action);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(Action::SetQuery(query.into()));
    }

    /// Search for the current query. Blank queries only switch the view.
    pub async fn search(&mut self) {
        self.dispatch(Action::ShowSearch);
        let query = self.state.query.trim().to_string();
        if query.is_empty() {
            return;
        }

        match self.provider.search(&query).await {
            Ok(results) => {
                info!("Search {query:?} returned {} recipes", results.len());
                self.dispatch(Action::SearchSucceeded(results));
            }
            Err(e) => {
                warn!("There was a problem with the search request: {e}");
                self.dispatch(Action::SearchFailed);
            }
        }
    }

    /// Enter the collection view and refetch it.
    pub async fn show_collection(&mut self) {
        self.dispatch(Action::ShowCollection);
        self.refresh_collection().await;
    }

    async fn refresh_collection(&mut self) {
        match self.collection.list().await {
            Ok(saved) => self.dispatch(Action::CollectionLoaded(saved)),
            Err(e) => error!("Error fetching saved recipes: {e}"),
        }
    }

    pub fn select_area(&mut self, area: Option<String>) {
        self.dispatch(Action::SelectArea(area));
    }

    pub fn apply_area_filter(&mut self) {
        self.dispatch(Action::ApplyAreaFilter);
    }

    pub fn sort_by_ingredients(&mut self) {
        self.dispatch(Action::SortByIngredients);
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(Action::DismissNotice);
    }

    /// Save the result at `index` to the collection.
    /// Failures are logged and leave the visible state unchanged.
    pub async fn save(&mut self, index: usize) {
        let Some(recipe) = self.state.results.get(index) else {
            warn!("No search result at position {index}");
            return;
        };
        let payload = NewSavedRecipe::from(recipe);
        info!("Saving recipe {:?}", recipe.name);

        match self.collection.save(&payload).await {
            Ok(()) => {
                self.dispatch(Action::Saved);
                self.refresh_collection().await;
            }
            Err(e) => error!("Failed to save recipe {:?}: {e}", payload.name),
        }
    }
}
