use actix_web::{web::Data, HttpResponse};
use serde_json::json;

use super::SharedFinder;

pub async fn get_finder(finder: Data<SharedFinder>) -> HttpResponse {
    let view = finder.lock().await.view();
    HttpResponse::Ok().json(json!({
        "data": view
    }))
}
