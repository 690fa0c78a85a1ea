use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::Movie;
use crate::omdb::{LookupError, LookupResponse};

pub const NOT_FOUND_MESSAGE: &str = "Can't find a movie with such a title";
pub const FIND_LABEL: &str = "Find a movie";
pub const SEARCH_AGAIN_LABEL: &str = "Search again";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FinderError {
    #[error("title can't be empty")]
    EmptyQuery,

    #[error("there is no movie preview to add")]
    NoPreview,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinderState {
    Idle,
    Searching,
    Found,
    NotFound,
}

/// Identifies one submitted search. Only the most recently issued ticket may
/// update the finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    id: Uuid,
    query: String,
}

impl SearchTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FinderView {
    pub query: String,
    pub state: FinderState,
    pub is_loading: bool,
    pub has_error: bool,
    pub error_message: Option<&'static str>,
    pub preview: Option<Movie>,
    pub can_submit: bool,
    pub can_add: bool,
    pub submit_label: &'static str,
}

#[derive(Debug, Default)]
pub struct Finder {
    query: String,
    is_loading: bool,
    has_error: bool,
    preview: Option<Movie>,
    pending: Option<Uuid>,
}

impl Finder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn preview(&self) -> Option<&Movie> {
        self.preview.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Editing the query always clears a displayed error.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.has_error = false;
    }

    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn state(&self) -> FinderState {
        if self.is_loading {
            FinderState::Searching
        } else if self.has_error {
            FinderState::NotFound
        } else if self.preview.is_some() {
            FinderState::Found
        } else {
            FinderState::Idle
        }
    }

    pub fn begin_search(&mut self) -> Result<SearchTicket, FinderError> {
        if !self.can_submit() {
            return Err(FinderError::EmptyQuery);
        }
        let id = Uuid::new_v4();
        if let Some(previous) = self.pending.replace(id) {
            tracing::info!(%previous, "Superseding pending search");
        }
        self.is_loading = true;
        self.has_error = false;
        Ok(SearchTicket {
            id,
            query: self.query.trim().to_string(),
        })
    }

    /// Sets the query and starts the search in one step.
    pub fn submit(&mut self, query: impl Into<String>) -> Result<SearchTicket, FinderError> {
        self.set_query(query);
        self.begin_search()
    }

    /// Applies a lookup outcome. Returns `false` and leaves the finder
    /// untouched when `ticket` is not the latest one issued.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<LookupResponse, LookupError>,
    ) -> bool {
        if self.pending != Some(ticket.id) {
            tracing::info!(ticket = %ticket.id, "Discarding stale lookup response");
            return false;
        }
        self.pending = None;
        self.is_loading = false;

        match outcome {
            Ok(LookupResponse::Found(data)) => {
                let movie = Movie::from(data);
                tracing::info!(imdb_id = %movie.imdb_id, "Movie preview ready");
                self.preview = Some(movie);
                self.has_error = false;
            }
            Ok(LookupResponse::NotFound(err)) => {
                tracing::info!(query = %ticket.query, reason = %err.error, "No movie matched");
                self.fail();
            }
            Err(err) => {
                tracing::error!(query = %ticket.query, "Movie lookup failed: {}", err);
                self.fail();
            }
        }
        true
    }

    fn fail(&mut self) {
        self.has_error = true;
        self.preview = None;
    }

    /// Hands the preview over for insertion and resets the form.
    pub fn confirm(&mut self) -> Result<Movie, FinderError> {
        let movie = self.preview.take().ok_or(FinderError::NoPreview)?;
        self.query.clear();
        self.has_error = false;
        Ok(movie)
    }

    pub fn view(&self) -> FinderView {
        FinderView {
            query: self.query.clone(),
            state: self.state(),
            is_loading: self.is_loading,
            has_error: self.has_error,
            error_message: self.has_error.then_some(NOT_FOUND_MESSAGE),
            preview: self.preview.clone(),
            can_submit: self.can_submit(),
            can_add: self.preview.is_some(),
            submit_label: if self.preview.is_some() {
                SEARCH_AGAIN_LABEL
            } else {
                FIND_LABEL
            },
        }
    }
}
