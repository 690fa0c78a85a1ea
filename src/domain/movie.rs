use serde::{Deserialize, Serialize};

use crate::omdb::{MovieData, POSTER_UNAVAILABLE};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/360x270.png?text=no%20preview";
pub const IMDB_TITLE_URL: &str = "https://www.imdb.com/title";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub imdb_id: String,
    pub imdb_url: String,
}

pub fn imdb_url(imdb_id: &str) -> String {
    format!("{}/{}", IMDB_TITLE_URL, imdb_id)
}

impl From<MovieData> for Movie {
    fn from(data: MovieData) -> Self {
        let img_url = if data.poster == POSTER_UNAVAILABLE {
            PLACEHOLDER_IMAGE_URL.to_string()
        } else {
            data.poster
        };
        Movie {
            title: data.title,
            description: data.plot,
            img_url,
            imdb_url: imdb_url(&data.imdb_id),
            imdb_id: data.imdb_id,
        }
    }
}
