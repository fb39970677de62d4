//! Parsing of the catalog tables shipped with the crate.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use super::Catalog;
use crate::entities::{Genre, GenreCombination, Topic};
use crate::error::{CatalogError, Result};

const GENRES_TOML: &str = include_str!("../../data/genres.toml");
const TOPICS_TOML: &str = include_str!("../../data/topics.toml");
const COMBINATIONS_TOML: &str = include_str!("../../data/combinations.toml");

/// Process-wide shared copy of the shipped catalog.
static SHARED: Lazy<Result<Arc<Catalog>>> = Lazy::new(|| Catalog::builtin().map(Arc::new));

#[derive(Deserialize)]
struct GenreTable {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Deserialize)]
struct TopicTable {
    #[serde(default)]
    topics: Vec<Topic>,
}

#[derive(Deserialize)]
struct CombinationTable {
    #[serde(default)]
    combinations: Vec<GenreCombination>,
}

impl Catalog {
    /// Parse the catalog tables embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_strs(GENRES_TOML, TOPICS_TOML, COMBINATIONS_TOML)
    }

    /// The shipped catalog, parsed once per process.
    pub fn shared() -> Result<Arc<Catalog>> {
        SHARED.clone()
    }

    /// Parse caller-supplied TOML tables (`[[genres]]`, `[[topics]]`, `[[combinations]]`).
    pub fn from_toml_strs(genres: &str, topics: &str, combinations: &str) -> Result<Self> {
        let genres: GenreTable = parse_table("genres", genres)?;
        let topics: TopicTable = parse_table("topics", topics)?;
        let combinations: CombinationTable = parse_table("combinations", combinations)?;

        let catalog = Self::from_parts(genres.genres, topics.topics, combinations.combinations)?;
        debug!(
            genres = catalog.genres().len(),
            topics = catalog.topics().len(),
            combinations = catalog.combinations().len(),
            "Catalog tables parsed"
        );
        Ok(catalog)
    }
}

fn parse_table<T: DeserializeOwned>(table: &'static str, source: &str) -> Result<T> {
    toml::from_str(source).map_err(|e| CatalogError::Parse {
        table,
        message: e.to_string(),
    })
}
