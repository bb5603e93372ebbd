//! HTTP clients against locally bound servers: a stub provider and the real
//! collection router.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use recipe_finder::client::state::SEARCH_ERROR;
use recipe_finder::client::{
    CollectionBackend, CollectionClient, MealDbProvider, RecipeApp, RecipeProvider, View,
};
use recipe_finder::db::{open_in_memory, CollectionStore};
use recipe_finder::error::ClientError;
use recipe_finder::server::collection_router;
use recipe_finder::AppState;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Deserialize)]
struct SearchParams {
    s: String,
}

/// Mimics TheMealDB: two Italian dishes for "pasta", `null` otherwise.
async fn stub_search(Query(params): Query<SearchParams>) -> Json<Value> {
    if params.s != "pasta" {
        return Json(json!({ "meals": null }));
    }
    Json(json!({
        "meals": [
            {
                "idMeal": "1",
                "strMeal": "Lasagne",
                "strArea": "Italian",
                "strIngredient1": "Pasta sheets",
                "strIngredient2": "Mince",
                "strIngredient3": "Tomato",
                "strMeasure1": "12",
                "strMeasure2": "500g",
                "strMeasure3": "400g",
                "strMealThumb": "https://img.example/lasagne.jpg"
            },
            {
                "idMeal": "2",
                "strMeal": "Aglio e Olio",
                "strArea": "Italian",
                "strIngredient1": "Spaghetti",
                "strIngredient2": "Garlic",
                "strMeasure1": "200g",
                "strMeasure2": "4 cloves"
            }
        ]
    }))
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}

async fn spawn_provider() -> String {
    spawn(
        Router::new()
            .route("/search.php", get(stub_search))
            .route("/broken.php", get(|| async { StatusCode::SERVICE_UNAVAILABLE })),
    )
    .await
}

async fn spawn_collection() -> String {
    let store = CollectionStore::new(open_in_memory().unwrap());
    spawn(collection_router(Arc::new(AppState { store }))).await
}

#[tokio::test]
async fn provider_decodes_meals_and_null() {
    let base = spawn_provider().await;
    let provider = MealDbProvider::new(format!("{base}/search.php")).unwrap();

    let meals = provider.search("pasta").await.unwrap();
    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0].ingredient_count(), 3);
    assert_eq!(meals[1].ingredients[1].measure, "4 cloves");

    assert!(provider.search("nothing").await.unwrap().is_empty());
}

#[tokio::test]
async fn provider_reports_error_status() {
    let base = spawn_provider().await;
    let provider = MealDbProvider::new(format!("{base}/broken.php")).unwrap();

    let err = provider.search("pasta").await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE));
}

/// Address that nothing listens on.
async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}

#[tokio::test]
async fn unreachable_provider_is_a_network_error() {
    let base = closed_address().await;
    let provider = MealDbProvider::new(format!("{base}/search.php")).unwrap();

    let err = provider.search("pasta").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));

    let mut app = RecipeApp::new(provider, CollectionClient::new(base).unwrap());
    app.set_query("pasta");
    app.search().await;
    assert_eq!(app.state().error.as_deref(), Some(SEARCH_ERROR));
    assert!(app.state().results.is_empty());
}

#[tokio::test]
async fn collection_client_surfaces_validation_failure() {
    let base = spawn_collection().await;
    let client = CollectionClient::new(format!("{base}/")).unwrap();

    let err = client.save(&Default::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn search_sort_save_and_view_collection() {
    let provider_base = spawn_provider().await;
    let collection_base = spawn_collection().await;
    let mut app = RecipeApp::new(
        MealDbProvider::new(format!("{provider_base}/search.php")).unwrap(),
        CollectionClient::new(collection_base).unwrap(),
    );

    app.set_query("pasta");
    app.search().await;
    app.sort_by_ingredients();
    assert_eq!(app.state().results[0].name, "Aglio e Olio");

    app.save(1).await;
    app.show_collection().await;

    let state = app.state();
    assert_eq!(state.view, View::Collection);
    assert_eq!(state.saved.len(), 1);
    assert_eq!(state.saved[0].name, "Lasagne");
    assert_eq!(state.saved[0].ingredients, vec!["Pasta sheets", "Mince", "Tomato"]);
    assert_eq!(state.saved[0].measures, vec!["12", "500g", "400g"]);
    assert_eq!(state.saved[0].image.as_deref(), Some("https://img.example/lasagne.jpg"));
}
