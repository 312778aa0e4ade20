use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::Movie;
use crate::utils::{Error, FilmQueryResult};

use super::{parse_catalog, MovieSource};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl MovieSource for FileSource {
    async fn load(&self) -> FilmQueryResult<Vec<Movie>> {
        debug!(target: "filmquery::catalog", path = %self.path.display(), "Reading catalog file");

        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::Other(format!(
                "Failed to read catalog file '{}': {e}",
                self.path.display()
            ))
        })?;

        let movies = parse_catalog(&json)?;
        info!(target: "filmquery::catalog", path = %self.path.display(), count = movies.len(), "Loaded catalog");
        Ok(movies)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
