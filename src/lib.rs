pub mod configuration;
pub mod domain;
pub mod omdb;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod util;
