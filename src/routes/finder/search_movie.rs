use actix_web::{web::Data, HttpResponse};
use serde_json::json;

use super::{search_movie_handler, SharedFinder};
use crate::domain::FinderError;
use crate::omdb::MovieLookup;

pub async fn search_movie(
    finder: Data<SharedFinder>,
    lookup: Data<dyn MovieLookup>,
) -> Result<HttpResponse, FinderError> {
    let view = search_movie_handler(&finder, lookup.get_ref(), None).await?;
    Ok(HttpResponse::Ok().json(json!({
        "data": view
    })))
}
