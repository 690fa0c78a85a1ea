use serde::Deserialize;

/// Poster value OMDb uses when it has no image for a title.
pub const POSTER_UNAVAILABLE: &str = "N/A";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MovieData {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseError {
    #[serde(rename = "Error")]
    pub error: String,
}

// `Error` is tried first: OMDb sends it alongside `"Response": "False"`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LookupResponse {
    NotFound(ResponseError),
    Found(MovieData),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_payload_is_found() {
        let body = json!({
            "Title": "Forrest Gump",
            "Year": "1994",
            "Plot": "The history of the United States from the 1950s to the '70s...",
            "Poster": "https://m.media-amazon.com/images/M/forrest.jpg",
            "imdbID": "tt0109830",
            "Response": "True"
        });
        let response: LookupResponse = serde_json::from_value(body).unwrap();
        match response {
            LookupResponse::Found(data) => {
                assert_eq!(data.title, "Forrest Gump");
                assert_eq!(data.imdb_id, "tt0109830");
            }
            other => panic!("expected a movie, got {:?}", other),
        }
    }

    #[test]
    fn error_payload_is_not_found() {
        let body = json!({ "Response": "False", "Error": "Movie not found!" });
        let response: LookupResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            response,
            LookupResponse::NotFound(ResponseError {
                error: "Movie not found!".to_string()
            })
        );
    }

    #[test]
    fn payload_without_identifier_is_rejected() {
        let body = json!({ "Title": "Untitled", "Response": "True" });
        assert!(serde_json::from_value::<LookupResponse>(body).is_err());
    }
}
