use actix_web::{
    web::{Data, Form},
    HttpResponse,
};
use serde::Deserialize;
use validator::Validate;

use super::redirect_to_page;
use crate::omdb::MovieLookup;
use crate::routes::{search_movie_handler, validate_title, SharedFinder};

#[derive(Deserialize, Validate, Debug)]
pub struct SearchForm {
    #[validate(custom(function = "validate_title"))]
    pub query: String,
}

pub async fn submit_search(
    finder: Data<SharedFinder>,
    lookup: Data<dyn MovieLookup>,
    form: Form<SearchForm>,
) -> HttpResponse {
    let form = form.into_inner();
    if let Err(error) = form.validate() {
        tracing::error!("Rejected search form: {}", error);
        finder.lock().await.set_query(form.query);
        return redirect_to_page();
    }

    if let Err(err) = search_movie_handler(&finder, lookup.get_ref(), Some(form.query)).await {
        tracing::error!("Search failed: {}", err);
    }
    redirect_to_page()
}
