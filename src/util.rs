use crate::configuration::Settings;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ResponseMessage {
    pub message: String,
}

pub fn check_for_necessary_settings(settings: &Settings) -> Result<(), std::io::Error> {
    if settings.omdb.api_key.trim().is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "APP_OMDB__API_KEY must be set",
        ));
    }
    if settings.omdb.base_url.trim().is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "omdb.base_url must be set",
        ));
    }
    Ok(())
}
