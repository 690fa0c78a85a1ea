use dotenv::dotenv;
use movie_finder::configuration::get_configuration;
use movie_finder::omdb::OmdbClient;
use movie_finder::startup;
use movie_finder::telemetry::{get_subscriber, init_subscriber};
use movie_finder::util::check_for_necessary_settings;
use std::io::{Error, ErrorKind};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let subscriber = get_subscriber("movie_finder", "info", std::io::stdout);
    init_subscriber(subscriber).map_err(|err| Error::new(ErrorKind::Other, err.to_string()))?;

    let configuration = get_configuration("configuration").map_err(|err| {
        Error::new(
            ErrorKind::Other,
            format!("Failed to read `configuration.json`: {}", err),
        )
    })?;
    check_for_necessary_settings(&configuration)?;

    let lookup = OmdbClient::new(&configuration.omdb)
        .map_err(|err| Error::new(ErrorKind::Other, err.to_string()))?;
    let listener = TcpListener::bind(configuration.application.address())?;

    startup::run_server(listener, &configuration.application, Arc::new(lookup))?.await
}
