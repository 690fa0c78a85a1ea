use serde::Serialize;

use super::Movie;

/// Accepted movies in insertion order, unique by IMDb id.
#[derive(Serialize, Debug, Default, Clone)]
#[serde(transparent)]
pub struct MovieList {
    movies: Vec<Movie>,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `candidate` unless a movie with the same IMDb id is already
    /// listed. Returns whether the list changed.
    pub fn accept(&mut self, candidate: Movie) -> bool {
        if self.contains(&candidate.imdb_id) {
            tracing::info!(imdb_id = %candidate.imdb_id, "Movie already listed, ignoring");
            return false;
        }
        tracing::info!(imdb_id = %candidate.imdb_id, title = %candidate.title, "Adding movie to the list");
        self.movies.push(candidate);
        true
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|movie| movie.imdb_id == imdb_id)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
