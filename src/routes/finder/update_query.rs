use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use serde::Deserialize;
use serde_json::json;

use super::SharedFinder;

#[derive(Deserialize, Debug)]
pub struct QueryBody {
    pub query: String,
}

pub async fn update_query(finder: Data<SharedFinder>, body: Json<QueryBody>) -> HttpResponse {
    let mut finder = finder.lock().await;
    finder.set_query(body.into_inner().query);
    tracing::debug!(query = %finder.query(), "Query updated");
    HttpResponse::Ok().json(json!({
        "data": finder.view()
    }))
}
