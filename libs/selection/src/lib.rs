use serde::{Deserialize, Serialize};

pub mod config;
pub mod dispatch;
pub mod prefill;
pub mod search;
pub mod state;
pub mod widget;

pub use config::{ConfigError, WidgetConfig};
pub use dispatch::{QueryDispatcher, Ticket};
pub use search::{search_or_empty, search_url, SearchError, UserSearch};
pub use state::{Selection, Visibility};
pub use widget::{Action, CandidateView, Phase, Widget};

pub const NO_USERS_FOUND: &str = "No users found.";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserRecord {
    pub username: String,
    pub name: String,
}

impl UserRecord {
    pub fn new(username: &str, name: &str) -> Self {
        Self {
            username: username.to_owned(),
            name: name.to_owned(),
        }
    }

    pub fn profile_href(&self) -> String {
        format!("/profile/{}", self.username)
    }
}
