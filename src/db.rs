use std::path::Path;

use rusqlite::{params, Connection, Row};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::types::{NewSavedRecipe, SavedRecipe};

// ─── Schema and queries ───────────────────────────────────────────────────────

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS saved_recipes (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        name         TEXT NOT NULL CHECK (name != ''),
        category     TEXT,
        area         TEXT,
        instructions TEXT,
        ingredients  TEXT NOT NULL DEFAULT '[]',
        measures     TEXT NOT NULL DEFAULT '[]',
        youtube      TEXT,
        source       TEXT,
        image        TEXT
    );";

/// Open (or create) the collection database at `path` and ensure the schema.
pub fn open_collection_db(path: impl AsRef<Path>) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA busy_timeout = 5000;",
    )?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

/// In-memory collection database. Used by tests.
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

/// Insert one saved recipe and return its generated id.
/// Ingredients and measures are stored as JSON arrays so their order survives.
pub fn insert_saved_recipe(conn: &Connection, recipe: &NewSavedRecipe) -> Result<i64, StoreError> {
    let name = match recipe.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(StoreError::Validation),
    };
    let ingredients = serde_json::to_string(&recipe.ingredients)?;
    let measures = serde_json::to_string(&recipe.measures)?;

    conn.execute(
        "INSERT INTO saved_recipes
             (name, category, area, instructions, ingredients, measures, youtube, source, image)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            name,
            recipe.category,
            recipe.area,
            recipe.instructions,
            ingredients,
            measures,
            recipe.youtube,
            recipe.source,
            recipe.image,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Fetch every saved recipe in insertion order.
pub fn get_all_saved_recipes(conn: &Connection) -> Result<Vec<SavedRecipe>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, category, area, instructions, ingredients, measures, youtube, source, image
         FROM saved_recipes
         ORDER BY id ASC",
    )?;

    let rows = stmt
        .query_map([], RawRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(RawRow::into_saved).collect()
}

/// Row as read from SQLite, before the JSON list columns are decoded.
struct RawRow {
    id: i64,
    name: String,
    category: Option<String>,
    area: Option<String>,
    instructions: Option<String>,
    ingredients: String,
    measures: String,
    youtube: Option<String>,
    source: Option<String>,
    image: Option<String>,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            area: row.get(3)?,
            instructions: row.get(4)?,
            ingredients: row.get(5)?,
            measures: row.get(6)?,
            youtube: row.get(7)?,
            source: row.get(8)?,
            image: row.get(9)?,
        })
    }

    fn into_saved(self) -> Result<SavedRecipe, StoreError> {
        Ok(SavedRecipe {
            id: self.id,
            name: self.name,
            category: self.category,
            area: self.area,
            instructions: self.instructions,
            ingredients: serde_json::from_str(&self.ingredients)?,
            measures: serde_json::from_str(&self.measures)?,
            youtube: self.youtube,
            source: self.source,
            image: self.image,
        })
    }
}

// ─── Shared handle ────────────────────────────────────────────────────────────

/// Shared handle to the collection database.
/// The connection sits behind an async mutex so route handlers can share it.
pub struct CollectionStore {
    conn: Mutex<Connection>,
}

impl CollectionStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub async fn save(&self, recipe: &NewSavedRecipe) -> Result<i64, StoreError> {
        let conn = self.conn.lock().await;
        insert_saved_recipe(&conn, recipe)
    }

    pub async fn list_all(&self) -> Result<Vec<SavedRecipe>, StoreError> {
        let conn = self.conn.lock().await;
        get_all_saved_recipes(&conn)
    }
}
