use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use serde::Serialize;

use crate::core::query::QueryEngine;
use crate::models::Movie;
use crate::utils::FilmQueryResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParams {
    pub year: i32,
    pub actor: String,
    pub director: String,
}

impl From<&crate::config::ReportConfig> for ReportParams {
    fn from(cfg: &crate::config::ReportConfig) -> Self {
        Self {
            year: cfg.year,
            actor: cfg.actor.clone(),
            director: cfg.director.clone(),
        }
    }
}

/// Results of every catalog query for one set of parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub year: i32,
    pub director: String,
    pub movies_by_year: Vec<&'a Movie>,
    pub all_actors: Vec<String>,
    pub movies_by_actor: BTreeMap<String, BTreeSet<String>>,
    pub self_portrayals: BTreeSet<String>,
    pub actors_in_directors_films: Vec<String>,
    pub acting_directors_most_recent_first: Vec<&'a Movie>,
    pub movies_by_category: BTreeMap<String, BTreeSet<&'a Movie>>,
}

pub fn build_report<'a>(engine: &QueryEngine<'a>, params: &ReportParams) -> Report<'a> {
    Report {
        year: params.year,
        director: params.director.clone(),
        movies_by_year: engine.movies_by_year(params.year),
        all_actors: engine.all_actors_alphabetical(),
        movies_by_actor: engine.movies_by_actor(&params.actor),
        self_portrayals: engine.actors_that_interpret_themselves(),
        actors_in_directors_films: engine.actors_in_directors_films_alphabetical(&params.director),
        acting_directors_most_recent_first: engine.movies_with_acting_directors_most_recent_first(),
        movies_by_category: engine.movies_by_year_grouped_by_category(params.year),
    }
}

fn movie_label(movie: &Movie) -> String {
    format!("{} ({})", movie.title, movie.release_year)
}

fn push_list<I, S>(out: &mut String, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut empty = true;
    for item in items {
        empty = false;
        let _ = writeln!(out, "  - {}", item.as_ref());
    }
    if empty {
        out.push_str("  (none)\n");
    }
}

pub fn render_text(report: &Report<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Movies released in {}:", report.year);
    push_list(&mut out, report.movies_by_year.iter().map(|m| movie_label(m)));

    out.push_str("All actors:\n");
    push_list(&mut out, &report.all_actors);

    for (actor, titles) in &report.movies_by_actor {
        let _ = writeln!(out, "Movies with {actor}:");
        push_list(&mut out, titles);
    }

    out.push_str("Actors playing themselves:\n");
    push_list(&mut out, &report.self_portrayals);

    let _ = writeln!(out, "Actors in movies directed by {}:", report.director);
    push_list(&mut out, &report.actors_in_directors_films);

    out.push_str("Movies with an acting director, most recent first:\n");
    push_list(
        &mut out,
        report.acting_directors_most_recent_first.iter().map(|m| movie_label(m)),
    );

    let _ = writeln!(out, "Movies released in {} by category:", report.year);
    if report.movies_by_category.is_empty() {
        out.push_str("  (none)\n");
    }
    for (category, movies) in &report.movies_by_category {
        let _ = writeln!(out, "  {category}:");
        for movie in movies {
            let _ = writeln!(out, "    - {}", movie_label(movie));
        }
    }

    out
}

pub fn render_json(report: &Report<'_>) -> FilmQueryResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
