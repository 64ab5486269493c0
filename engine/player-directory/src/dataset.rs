use crate::types::{DirectoryError, PlayerRecord};
use std::path::Path;
use tracing::info;

/// Load and validate the player dataset from a JSON file
///
/// The file holds a JSON array of player records, one object per
/// player. Records with an empty `country` or `role` are rejected;
/// slug uniqueness is checked when the directory is built.
pub async fn load_players<P: AsRef<Path>>(
    file_path: P,
) -> Result<Vec<PlayerRecord>, DirectoryError> {
    info!("Loading player dataset from: {:?}", file_path.as_ref());

    let json_content = tokio::fs::read_to_string(&file_path).await?;
    let players: Vec<PlayerRecord> = serde_json::from_str(&json_content)?;

    validate_records(&players)?;

    info!("Loaded {} players from dataset", players.len());
    Ok(players)
}

fn validate_records(players: &[PlayerRecord]) -> Result<(), DirectoryError> {
    for player in players {
        if player.country.is_empty() {
            return Err(DirectoryError::EmptyField {
                slug: player.slug.clone(),
                field: "country",
            });
        }
        if player.role.is_empty() {
            return Err(DirectoryError::EmptyField { slug: player.slug.clone(), field: "role" });
        }
    }
    Ok(())
}
