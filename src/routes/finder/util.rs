use std::borrow::Cow;

use actix_web::{
    http::StatusCode,
    web::{self, get, post, put},
    HttpResponse, ResponseError, Scope,
};
use serde::Serialize;
use serde_json::json;
use tokio::sync::{Mutex, RwLock};
use tracing::Instrument;
use validator::ValidationError;

use super::{add_movie, get_finder, search_movie, update_query};
use crate::domain::{Finder, FinderError, FinderView, Movie, MovieList};
use crate::omdb::MovieLookup;

pub type SharedFinder = Mutex<Finder>;

pub fn finder_source() -> Scope {
    web::scope("/finder")
        .route("", get().to(get_finder))
        .route("/query", put().to(update_query))
        .route("/search", post().to(search_movie))
        .route("/add", post().to(add_movie))
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(
            ValidationError::new("Invalid length").with_message(Cow::from("title can't be empty"))
        );
    }
    Ok(())
}

impl ResponseError for FinderError {
    fn status_code(&self) -> StatusCode {
        match self {
            FinderError::EmptyQuery => StatusCode::BAD_REQUEST,
            FinderError::NoPreview => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

#[derive(Serialize, Debug)]
pub struct AddedMovie {
    pub added: bool,
    pub movie: Movie,
    pub movies: Vec<Movie>,
}

/// Runs one lookup, for `query` when given or else for the stored query. The
/// query is stored and the ticket issued under one lock; the lock is released
/// while the request is in flight and a newer search started meanwhile wins.
pub async fn search_movie_handler(
    finder: &SharedFinder,
    lookup: &dyn MovieLookup,
    query: Option<String>,
) -> Result<FinderView, FinderError> {
    let ticket = {
        let mut finder = finder.lock().await;
        let started = match query {
            Some(query) => finder.submit(query),
            None => finder.begin_search(),
        };
        match started {
            Ok(ticket) => ticket,
            Err(err) => {
                tracing::error!("Error: {}", err);
                return Err(err);
            }
        }
    };

    let lookup_span = tracing::info_span!(
        "Movie lookup",
        title = %ticket.query(),
        ticket = %ticket.id()
    );
    tracing::info!(title = %ticket.query(), "Calling the OMDb lookup");
    let outcome = lookup
        .find_by_title(ticket.query())
        .instrument(lookup_span)
        .await;

    let mut finder = finder.lock().await;
    finder.complete_search(&ticket, outcome);
    Ok(finder.view())
}

pub async fn add_movie_handler(
    finder: &SharedFinder,
    movies: &RwLock<MovieList>,
) -> Result<AddedMovie, FinderError> {
    let mut finder = finder.lock().await;
    let movie = match finder.confirm() {
        Ok(movie) => movie,
        Err(err) => {
            tracing::error!("Error: {}", err);
            return Err(err);
        }
    };
    let mut movies = movies.write().await;
    let added = movies.accept(movie.clone());
    Ok(AddedMovie {
        added,
        movie,
        movies: movies.movies().to_vec(),
    })
}
