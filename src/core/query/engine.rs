use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

use crate::models::Movie;

use super::group::group_into_sets;

/// Read-only queries over a borrowed movie snapshot.
///
/// The engine holds nothing but the reference: every call rescans the whole
/// slice, and names are compared byte-wise (`str` ordering).
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    movies: &'a [Movie],
}

impl<'a> QueryEngine<'a> {
    pub fn new(movies: &'a [Movie]) -> Self {
        Self { movies }
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movies released in `year`, in catalog order.
    pub fn movies_by_year(&self, year: i32) -> Vec<&'a Movie> {
        let movies: Vec<&'a Movie> = self
            .movies
            .iter()
            .filter(|m| m.release_year == year)
            .collect();
        debug!(target: "filmquery::query", year, count = movies.len(), "movies_by_year");
        movies
    }

    /// Every credited actor, deduplicated and sorted ascending.
    pub fn all_actors_alphabetical(&self) -> Vec<String> {
        let actors = sorted_unique(self.movies.iter().flat_map(|m| m.actors.iter()));
        debug!(target: "filmquery::query", count = actors.len(), "all_actors_alphabetical");
        actors
    }

    /// Titles featuring `actor`, keyed by the actor name.
    ///
    /// The map always has exactly one key, `actor`, even when no movie matches;
    /// callers rely on that shape, so an unknown actor maps to an empty set
    /// rather than producing an empty map.
    pub fn movies_by_actor(&self, actor: &str) -> BTreeMap<String, BTreeSet<String>> {
        let pairs = self
            .movies
            .iter()
            .filter(|m| m.actors.contains(actor))
            .map(|m| (actor.to_string(), m.title.clone()));

        let mut titles = group_into_sets(pairs);
        titles.entry(actor.to_string()).or_default();
        debug!(
            target: "filmquery::query",
            actor,
            count = titles.get(actor).map_or(0, BTreeSet::len),
            "movies_by_actor"
        );
        titles
    }

    /// Actors who played a character carrying their own name in some movie.
    pub fn actors_that_interpret_themselves(&self) -> BTreeSet<String> {
        let actors: BTreeSet<String> = self
            .movies
            .iter()
            .flat_map(|m| m.self_portrayals())
            .cloned()
            .collect();
        debug!(target: "filmquery::query", count = actors.len(), "actors_that_interpret_themselves");
        actors
    }

    /// Actors credited in at least one movie directed by `director`, sorted ascending.
    pub fn actors_in_directors_films_alphabetical(&self, director: &str) -> Vec<String> {
        let actors = sorted_unique(
            self.movies
                .iter()
                .filter(|m| m.directors.contains(director))
                .flat_map(|m| m.actors.iter()),
        );
        debug!(
            target: "filmquery::query",
            director,
            count = actors.len(),
            "actors_in_directors_films_alphabetical"
        );
        actors
    }

    /// Movies where a director also acts, newest first.
    ///
    /// Equal movies are kept once (first occurrence). The sort is stable, so
    /// movies sharing a year stay in catalog order.
    pub fn movies_with_acting_directors_most_recent_first(&self) -> Vec<&'a Movie> {
        let mut seen: HashSet<&'a Movie> = HashSet::new();
        let mut movies: Vec<&'a Movie> = self
            .movies
            .iter()
            .filter(|m| m.has_acting_director())
            .filter(|m| seen.insert(*m))
            .collect();

        movies.sort_by(|a, b| b.release_year.cmp(&a.release_year));
        debug!(
            target: "filmquery::query",
            count = movies.len(),
            "movies_with_acting_directors_most_recent_first"
        );
        movies
    }

    /// Movies released in `year`, grouped by each of their categories.
    ///
    /// A movie with several categories sits under each of them; categories
    /// without a movie that year are absent.
    pub fn movies_by_year_grouped_by_category(
        &self,
        year: i32,
    ) -> BTreeMap<String, BTreeSet<&'a Movie>> {
        let pairs = self
            .movies
            .iter()
            .filter(|m| m.release_year == year)
            .flat_map(|m| m.categories.iter().map(move |c| (c.clone(), m)));

        let groups = group_into_sets(pairs);
        debug!(
            target: "filmquery::query",
            year,
            categories = groups.len(),
            "movies_by_year_grouped_by_category"
        );
        groups
    }
}

fn sorted_unique<'m>(names: impl Iterator<Item = &'m String>) -> Vec<String> {
    names
        .collect::<BTreeSet<&String>>()
        .into_iter()
        .cloned()
        .collect()
}
