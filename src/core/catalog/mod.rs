pub mod file;
pub mod http;

use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::warn;

use crate::config::CatalogConfig;
use crate::models::Movie;
use crate::utils::{Error, FilmQueryResult};

/// Supplies the full movie snapshot before any query runs.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn load(&self) -> FilmQueryResult<Vec<Movie>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Decode a JSON array of movies.
pub fn parse_catalog(json: &str) -> FilmQueryResult<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(json)?;
    warn_duplicate_titles(&movies);
    Ok(movies)
}

fn warn_duplicate_titles(movies: &[Movie]) {
    let mut seen = BTreeSet::new();
    for movie in movies {
        if !seen.insert(movie.title.as_str()) {
            warn!(target: "filmquery::catalog", title = %movie.title, "Duplicate title in catalog");
        }
    }
}

pub fn source_from_config(cfg: &CatalogConfig) -> FilmQueryResult<Box<dyn MovieSource>> {
    if let Some(url) = cfg.url.as_ref() {
        return Ok(Box::new(http::HttpSource::new(url.clone(), cfg.timeout_secs)?));
    }
    if let Some(path) = cfg.path.as_ref() {
        return Ok(Box::new(file::FileSource::new(path)));
    }
    Err(Error::Other(
        "catalog has no source: set catalog.path or catalog.url".to_string(),
    ))
}
