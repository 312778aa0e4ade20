use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One catalog entry. Collection fields are sets: order carries no meaning and
/// duplicates collapse on load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub release_year: i32,

    #[serde(default)]
    pub actors: BTreeSet<String>,
    #[serde(default)]
    pub directors: BTreeSet<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    /// Character name -> actors who played it, scoped to this movie.
    #[serde(default)]
    pub actors_by_character: BTreeMap<String, BTreeSet<String>>,
}

impl Movie {
    pub fn new(title: impl Into<String>, release_year: i32) -> Self {
        Self {
            title: title.into(),
            release_year,
            actors: BTreeSet::new(),
            directors: BTreeSet::new(),
            categories: BTreeSet::new(),
            actors_by_character: BTreeMap::new(),
        }
    }

    pub fn with_actors<I, S>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actors.extend(actors.into_iter().map(Into::into));
        self
    }

    pub fn with_directors<I, S>(mut self, directors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directors.extend(directors.into_iter().map(Into::into));
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_character<I, S>(mut self, character: impl Into<String>, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actors_by_character
            .entry(character.into())
            .or_default()
            .extend(actors.into_iter().map(Into::into));
        self
    }

    /// True when at least one director is also credited as an actor.
    pub fn has_acting_director(&self) -> bool {
        self.directors.iter().any(|d| self.actors.contains(d))
    }

    /// Names credited under a character that carries their own name.
    pub fn self_portrayals(&self) -> impl Iterator<Item = &String> {
        self.actors_by_character
            .iter()
            .filter(|(character, actors)| actors.contains(*character))
            .map(|(character, _)| character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_missing_sets() {
        let json = r#"{"title": "Zelig", "releaseYear": 1983, "actors": ["Woody Allen", "Woody Allen"]}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();

        assert_eq!(movie.title, "Zelig");
        assert_eq!(movie.release_year, 1983);
        assert_eq!(movie.actors.len(), 1);
        assert!(movie.directors.is_empty());
        assert!(movie.actors_by_character.is_empty());
    }

    #[test]
    fn acting_director_requires_same_person() {
        let acted = Movie::new("Unforgiven", 1992)
            .with_actors(["Clint Eastwood", "Gene Hackman"])
            .with_directors(["Clint Eastwood"]);
        let not_acted = Movie::new("Jaws", 1975)
            .with_actors(["Roy Scheider"])
            .with_directors(["Steven Spielberg"]);

        assert!(acted.has_acting_director());
        assert!(!not_acted.has_acting_director());
    }

    #[test]
    fn self_portrayal_needs_matching_character_and_actor() {
        let movie = Movie::new("Being John Malkovich", 1999)
            .with_character("John Malkovich", ["John Malkovich"])
            .with_character("Charlie Sheen", ["Charlie Sheen"])
            .with_character("Craig Schwartz", ["John Cusack"])
            .with_character("Mr. Smith", ["Keanu Reeves"]);

        let names: Vec<&String> = movie.self_portrayals().collect();
        assert_eq!(names, vec!["Charlie Sheen", "John Malkovich"]);
    }
}
