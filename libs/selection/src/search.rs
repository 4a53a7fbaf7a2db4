use futures::future::LocalBoxFuture;

use crate::{config::WidgetConfig, UserRecord};

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Transport(String),
    #[error("Search returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Malformed search response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Anything able to answer a user query with records in relevance order.
pub trait UserSearch {
    fn search(&self, query: &str) -> LocalBoxFuture<'_, Result<Vec<UserRecord>, SearchError>>;
}

pub fn search_url(config: &WidgetConfig, query: &str) -> String {
    let mut url = config.endpoint.clone();
    if !url.ends_with('/') {
        url.push('/');
    }
    if let Some(role) = &config.role_filter {
        url.push_str(&urlencoding::encode(role));
        url.push('/');
    }
    url.push_str("?query=");
    url.push_str(&urlencoding::encode(query));
    url
}

/// Failures look exactly like "nothing found" to the user, they're only logged.
pub async fn search_or_empty<S: UserSearch + ?Sized>(search: &S, query: &str) -> Vec<UserRecord> {
    match search.search(query).await {
        Ok(users) => users,
        Err(e) => {
            log::error!("error fetching user data: {}", e);
            Vec::new()
        }
    }
}

/// Body of a failed request, `{"error": "..."}`.
#[derive(serde::Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

pub fn decode_response(status: u16, body: &str) -> Result<Vec<UserRecord>, SearchError> {
    if (200..300).contains(&status) {
        Ok(serde_json::from_str(body)?)
    } else {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.to_owned());
        Err(SearchError::Status { status, message })
    }
}
