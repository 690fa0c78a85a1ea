use actix_web::{web, Scope};
use tokio::sync::RwLock;

use crate::domain::MovieList;

use super::get_movie_list;

pub type SharedMovieList = RwLock<MovieList>;

pub fn movie_source() -> Scope {
    web::scope("/movies").route("", web::get().to(get_movie_list))
}
