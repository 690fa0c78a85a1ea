use actix_web::{http::header::ContentType, web::Data, HttpResponse};

use super::render_page;
use crate::routes::{SharedFinder, SharedMovieList};

pub async fn get_page(finder: Data<SharedFinder>, movies: Data<SharedMovieList>) -> HttpResponse {
    let view = finder.lock().await.view();
    let movies = movies.read().await;
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(movies.movies(), &view))
}

pub fn redirect_to_page() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((actix_web::http::header::LOCATION, "/"))
        .finish()
}
