use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::Movie;
use crate::utils::{Error, FilmQueryResult};

use super::{parse_catalog, MovieSource};

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String, timeout_secs: u64) -> FilmQueryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl MovieSource for HttpSource {
    async fn load(&self) -> FilmQueryResult<Vec<Movie>> {
        info!(target: "filmquery::catalog", url = %self.url, "Fetching catalog");

        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(target: "filmquery::catalog", status = %status, bytes = body.len(), "Catalog response");

        if !status.is_success() {
            return Err(Error::Other(format!(
                "Catalog fetch failed: HTTP {status} url={}",
                self.url
            )));
        }

        let movies = parse_catalog(&body)?;
        info!(target: "filmquery::catalog", url = %self.url, count = movies.len(), "Loaded catalog");
        Ok(movies)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
