use actix_web::{web::Data, HttpResponse};
use serde_json::json;

use super::SharedMovieList;

pub async fn get_movie_list(movies: Data<SharedMovieList>) -> HttpResponse {
    let movies = movies.read().await;
    tracing::info!(count = movies.len(), "Listing accepted movies");
    HttpResponse::Ok().json(json!({
        "data": movies.movies()
    }))
}
