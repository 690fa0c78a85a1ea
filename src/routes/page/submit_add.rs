use actix_web::{web::Data, HttpResponse};

use super::redirect_to_page;
use crate::routes::{add_movie_handler, SharedFinder, SharedMovieList};

pub async fn submit_add(finder: Data<SharedFinder>, movies: Data<SharedMovieList>) -> HttpResponse {
    match add_movie_handler(&finder, &movies).await {
        Ok(added) if !added.added => {
            tracing::info!(imdb_id = %added.movie.imdb_id, "Movie was already in the list");
        }
        Ok(_) => {}
        Err(err) => tracing::error!("Add failed: {}", err),
    }
    redirect_to_page()
}
