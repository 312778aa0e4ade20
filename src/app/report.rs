use crate::config::{Config, ReportFormat};
use crate::core;
use crate::utils::FilmQueryResult;

/// Load the configured catalog, run every query once and render the result.
pub async fn run(config: &Config) -> FilmQueryResult<String> {
    let source = core::catalog::source_from_config(&config.catalog)?;
    tracing::info!("Loading catalog from '{}'", source.describe());
    let movies = source.load().await?;

    let engine = core::query::QueryEngine::new(&movies);
    if engine.is_empty() {
        tracing::warn!("Catalog '{}' is empty", source.describe());
    }

    let params = core::report::ReportParams::from(&config.report);
    let report = core::report::build_report(&engine, &params);

    match config.report.format {
        ReportFormat::Text => Ok(core::report::render_text(&report)),
        ReportFormat::Json => core::report::render_json(&report),
    }
}
