use actix_web::{web::Data, HttpResponse};
use serde_json::json;

use super::{add_movie_handler, SharedFinder};
use crate::domain::FinderError;
use crate::routes::SharedMovieList;

pub async fn add_movie(
    finder: Data<SharedFinder>,
    movies: Data<SharedMovieList>,
) -> Result<HttpResponse, FinderError> {
    let added = add_movie_handler(&finder, &movies).await?;
    Ok(HttpResponse::Ok().json(json!({
        "data": added
    })))
}
