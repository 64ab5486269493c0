use serde::{Deserialize, Serialize};

/// A single cricket player profile as stored in the dataset
///
/// Records are loaded once at startup and never mutated. `slug` is the
/// only field guaranteed unique; `country` and `role` are stored with
/// whatever casing the dataset uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Unique identifier, used as the routing key (e.g., "virat-kohli")
    pub slug: String,

    /// Display name (e.g., "Virat Kohli")
    pub name: String,

    /// Player's nation, free-form casing as stored
    pub country: String,

    /// Playing role (e.g., "Batter", "Bowler", "All-rounder")
    pub role: String,

    /// Matches played across formats
    pub matches: u32,

    /// Career runs across formats
    pub runs: u32,

    /// Path to the player's image asset
    pub image: String,

    /// Optional free-text biography
    #[serde(default)]
    pub description: Option<String>,
}

/// Errors from directory lookups and dataset loading
///
/// `PlayerNotFound` is an expected outcome, not a fault: callers map it
/// to a "page does not exist" response. The remaining variants can only
/// occur while loading the dataset at startup.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No record with the given slug
    #[error("player '{0}' not found in directory")]
    PlayerNotFound(String),

    /// Dataset file could not be read
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not valid JSON for a list of player records
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share a slug; slugs must be unique
    #[error("duplicate slug '{0}' in dataset")]
    DuplicateSlug(String),

    /// A record has an empty required field
    #[error("record '{slug}' has an empty '{field}' field")]
    EmptyField { slug: String, field: &'static str },
}
