//! The recipe-finder client: state container, its async driver, and a
//! terminal front end.

pub mod app;
pub mod collection;
pub mod provider;
pub mod repl;
pub mod state;
pub mod view;

pub use app::RecipeApp;
pub use collection::{CollectionBackend, CollectionClient};
pub use provider::{MealDbProvider, RecipeProvider};
pub use state::{Action, ClientState, View};
