use crate::configuration::ApplicationSettings;
use crate::domain::{Finder, MovieList};
use crate::omdb::MovieLookup;
use crate::routes::{
    finder_source, get_page, health_check, movie_source, submit_add, submit_search,
    SharedFinder, SharedMovieList,
};

use actix_web::{
    dev::Server,
    web::{self, Data},
    App, HttpServer,
};
use std::net::TcpListener;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing_actix_web::TracingLogger;

use actix_cors::Cors;
use actix_web::http::header;

fn configure_cors(frontend_url: &str) -> Cors {
    let mut cors = Cors::default();
    cors = if frontend_url == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(frontend_url)
    };
    cors.allowed_methods(vec!["GET", "POST", "PUT"])
        .allowed_headers(vec![header::ACCEPT])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

pub fn run_server(
    listener: TcpListener,
    settings: &ApplicationSettings,
    lookup: Arc<dyn MovieLookup>,
) -> Result<Server, std::io::Error> {
    let finder: Data<SharedFinder> = Data::new(Mutex::new(Finder::new()));
    let movies: Data<SharedMovieList> = Data::new(RwLock::new(MovieList::new()));
    let lookup: Data<dyn MovieLookup> = Data::from(lookup);
    let frontend_url = settings.frontend_url.clone();

    tracing::info!(address = ?listener.local_addr().ok(), "Starting movie finder");
    let server: Server = HttpServer::new(move || {
        let cors = configure_cors(frontend_url.as_str());
        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(finder.clone())
            .app_data(movies.clone())
            .app_data(lookup.clone())
            .route("/", web::get().to(get_page))
            .route("/search", web::post().to(submit_search))
            .route("/add", web::post().to(submit_add))
            .route("/health_check", web::get().to(health_check))
            .service(movie_source())
            .service(finder_source())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
