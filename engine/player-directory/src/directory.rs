use crate::dataset::load_players;
use crate::types::{DirectoryError, PlayerRecord};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Player Directory - In-memory index over the fixed player collection
///
/// Holds the full dataset for the process lifetime and answers read-only
/// queries: lookup by slug, filtering by country/role, distinct values,
/// per-country counts, and top-N by runs. A slug index gives O(1)
/// lookups; every other operation is a linear scan, which is fine for a
/// dataset this size.
pub struct PlayerDirectory {
    /// All records in source order
    players: Vec<PlayerRecord>,

    /// Map from slug to index in `players`
    index_by_slug: HashMap<String, usize>,
}

impl PlayerDirectory {
    /// Build a directory from an already-validated collection
    ///
    /// Fails if two records share a slug; relative order of `players`
    /// is preserved and drives the "source order" guarantees of the
    /// filter and distinct operations.
    pub fn new(players: Vec<PlayerRecord>) -> Result<Self, DirectoryError> {
        let mut index_by_slug = HashMap::with_capacity(players.len());

        for (idx, player) in players.iter().enumerate() {
            if index_by_slug.insert(player.slug.clone(), idx).is_some() {
                return Err(DirectoryError::DuplicateSlug(player.slug.clone()));
            }
        }

        Ok(Self { players, index_by_slug })
    }

    /// Load the dataset from a JSON file and build the directory
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, DirectoryError> {
        let players = load_players(file_path).await?;
        let directory = Self::new(players)?;

        info!(
            "Directory ready: {} players, {} countries, {} roles",
            directory.len(),
            directory.distinct_countries().len(),
            directory.distinct_roles().len()
        );

        Ok(directory)
    }

    /// Look up a player by slug (exact, case-sensitive match)
    ///
    /// Slugs are generated, normalized keys, so unlike the country and
    /// role filters this comparison is deliberately case-sensitive. An
    /// absent slug is a normal outcome the caller maps to a 404.
    pub fn find_by_slug(&self, slug: &str) -> Result<&PlayerRecord, DirectoryError> {
        self.index_by_slug
            .get(slug)
            .map(|&idx| &self.players[idx])
            .ok_or_else(|| DirectoryError::PlayerNotFound(slug.to_string()))
    }

    /// All players whose country matches, case-insensitively
    ///
    /// Result order follows source order. An empty result is valid; the
    /// caller decides whether that means "no such country".
    pub fn filter_by_country(&self, country: &str) -> Vec<&PlayerRecord> {
        let country_lower = country.to_lowercase();
        self.players.iter().filter(|p| p.country.to_lowercase() == country_lower).collect()
    }

    /// All players whose role matches, case-insensitively
    pub fn filter_by_role(&self, role: &str) -> Vec<&PlayerRecord> {
        let role_lower = role.to_lowercase();
        self.players.iter().filter(|p| p.role.to_lowercase() == role_lower).collect()
    }

    /// Distinct country values in first-seen order
    ///
    /// Keeps the casing of each value's first occurrence; no sorting.
    pub fn distinct_countries(&self) -> Vec<&str> {
        Self::distinct_values(&self.players, |p| &p.country)
    }

    /// Distinct role values in first-seen order
    pub fn distinct_roles(&self) -> Vec<&str> {
        Self::distinct_values(&self.players, |p| &p.role)
    }

    fn distinct_values<'a, F>(players: &'a [PlayerRecord], field: F) -> Vec<&'a str>
    where
        F: Fn(&'a PlayerRecord) -> &'a str,
    {
        let mut seen = HashSet::new();
        let mut values = Vec::new();

        for player in players {
            let value = field(player);
            if seen.insert(value) {
                values.push(value);
            }
        }

        values
    }

    /// Player count per country, keyed by the literal stored value
    ///
    /// Grouping here is case-SENSITIVE while `filter_by_country` is
    /// case-insensitive: "India" and "india" count as two groups but
    /// filter as one. Callers that pair these operations should key
    /// lookups by the values `distinct_countries` returns.
    pub fn count_by_country(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for player in &self.players {
            *counts.entry(player.country.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// The `n` players with the most runs, descending
    ///
    /// Ties keep their source order (stable sort). Returns
    /// `min(n, len)` records.
    pub fn top_by_runs(&self, n: usize) -> Vec<&PlayerRecord> {
        let mut players: Vec<&PlayerRecord> = self.players.iter().collect();
        players.sort_by(|a, b| b.runs.cmp(&a.runs));
        players.truncate(n);
        players
    }

    /// All players in source order
    pub fn all_players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Number of players in the directory
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, country: &str, role: &str, runs: u32) -> PlayerRecord {
        PlayerRecord {
            slug: slug.to_string(),
            name: slug.replace('-', " "),
            country: country.to_string(),
            role: role.to_string(),
            matches: 100,
            runs,
            image: format!("/images/{slug}.jpg"),
            description: None,
        }
    }

    fn create_test_directory() -> PlayerDirectory {
        PlayerDirectory::new(vec![
            record("a", "India", "Batter", 100),
            record("b", "india", "Bowler", 50),
            record("c", "Australia", "Batter", 200),
            record("d", "England", "All-rounder", 200),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_slug() {
        let directory = create_test_directory();

        for player in directory.all_players() {
            let found = directory.find_by_slug(&player.slug).unwrap();
            assert_eq!(found, player);
        }

        let err = directory.find_by_slug("z").unwrap_err();
        assert!(matches!(err, DirectoryError::PlayerNotFound(ref slug) if slug == "z"));
    }

    #[test]
    fn test_find_by_slug_is_case_sensitive() {
        let directory = create_test_directory();
        assert!(directory.find_by_slug("A").is_err());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = PlayerDirectory::new(vec![
            record("a", "India", "Batter", 100),
            record("a", "Australia", "Bowler", 50),
        ]);
        assert!(matches!(result, Err(DirectoryError::DuplicateSlug(ref slug)) if slug == "a"));
    }

    #[test]
    fn test_filter_by_country_case_insensitive() {
        let directory = create_test_directory();

        let upper = directory.filter_by_country("INDIA");
        let lower = directory.filter_by_country("india");
        let mixed = directory.filter_by_country("India");

        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);

        // Both casings of India match, in source order
        let slugs: Vec<&str> = upper.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn test_filter_by_role() {
        let directory = create_test_directory();

        let batters = directory.filter_by_role("batter");
        let slugs: Vec<&str> = batters.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_unknown_value_yields_empty() {
        let directory = create_test_directory();
        assert!(directory.filter_by_country("Atlantis").is_empty());
        assert!(directory.filter_by_role("").is_empty());
    }

    #[test]
    fn test_distinct_countries_first_seen_order() {
        let directory = create_test_directory();

        // Distinct is exact-value: "India" and "india" are both kept,
        // each with the casing of its first occurrence
        assert_eq!(directory.distinct_countries(), vec!["India", "india", "Australia", "England"]);
        assert_eq!(directory.distinct_roles(), vec!["Batter", "Bowler", "All-rounder"]);
    }

    #[test]
    fn test_distinct_has_no_duplicates() {
        let directory = PlayerDirectory::new(vec![
            record("a", "India", "Batter", 1),
            record("b", "India", "Batter", 2),
            record("c", "India", "Bowler", 3),
        ])
        .unwrap();

        assert_eq!(directory.distinct_countries(), vec!["India"]);
        assert_eq!(directory.distinct_roles(), vec!["Batter", "Bowler"]);
    }

    #[test]
    fn test_count_by_country_groups_by_exact_value() {
        let directory = create_test_directory();
        let counts = directory.count_by_country();

        // Case-sensitive grouping: "India" and "india" are separate
        // keys even though filter_by_country merges them
        assert_eq!(counts.get("India"), Some(&1));
        assert_eq!(counts.get("india"), Some(&1));
        assert_eq!(counts.get("Australia"), Some(&1));
        assert_eq!(counts.get("England"), Some(&1));
        assert_eq!(counts.len(), directory.distinct_countries().len());

        assert_eq!(directory.filter_by_country("INDIA").len(), 2);
    }

    #[test]
    fn test_top_by_runs() {
        let directory = create_test_directory();

        let top = directory.top_by_runs(2);
        let slugs: Vec<&str> = top.iter().map(|p| p.slug.as_str()).collect();

        // c and d tie on 200 runs; c comes first in source order
        assert_eq!(slugs, vec!["c", "d"]);
    }

    #[test]
    fn test_top_by_runs_clamps_to_collection_size() {
        let directory = create_test_directory();

        assert_eq!(directory.top_by_runs(100).len(), directory.len());
        assert!(directory.top_by_runs(0).is_empty());

        let all = directory.top_by_runs(directory.len());
        let runs: Vec<u32> = all.iter().map(|p| p.runs).collect();
        assert_eq!(runs, vec![200, 200, 100, 50]);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let directory = create_test_directory();

        assert_eq!(directory.filter_by_country("India"), directory.filter_by_country("India"));
        assert_eq!(directory.distinct_roles(), directory.distinct_roles());
        assert_eq!(directory.count_by_country(), directory.count_by_country());
        assert_eq!(directory.top_by_runs(3), directory.top_by_runs(3));
    }

    #[test]
    fn test_empty_directory() {
        let directory = PlayerDirectory::new(Vec::new()).unwrap();

        assert!(directory.is_empty());
        assert!(directory.distinct_countries().is_empty());
        assert!(directory.count_by_country().is_empty());
        assert!(directory.top_by_runs(5).is_empty());
        assert!(directory.find_by_slug("a").is_err());
    }
}
