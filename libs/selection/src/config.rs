pub const DEFAULT_ENDPOINT: &str = "/api/search/user/";
pub const DEFAULT_FIELD_ID: &str = "selected-users-form-control";

pub const MAX_USERS_ATTRIBUTE: &str = "data-max-users";
pub const ROLE_ATTRIBUTE: &str = "data-role";
pub const ENDPOINT_ATTRIBUTE: &str = "data-endpoint";
pub const FIELD_ATTRIBUTE: &str = "data-field";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid maximum selection count: {0:?}")]
    InvalidMaximum(String),
}

/// Per-instance options, read from the mount element rather than page globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub max_selected: Option<usize>,
    pub role_filter: Option<String>,
    pub endpoint: String,
    pub field_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_selected: None,
            role_filter: None,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            field_id: DEFAULT_FIELD_ID.to_owned(),
        }
    }
}

impl WidgetConfig {
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let max_selected = match present(MAX_USERS_ATTRIBUTE) {
            Some(value) => Some(
                value
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidMaximum(value))?,
            ),
            None => None,
        };

        let defaults = Self::default();

        Ok(Self {
            max_selected,
            role_filter: present(ROLE_ATTRIBUTE),
            endpoint: present(ENDPOINT_ATTRIBUTE).unwrap_or(defaults.endpoint),
            field_id: present(FIELD_ATTRIBUTE).unwrap_or(defaults.field_id),
        })
    }

    pub fn with_max_selected(self, max_selected: usize) -> Self {
        Self {
            max_selected: Some(max_selected),
            ..self
        }
    }

    pub fn with_role_filter(self, role: &str) -> Self {
        Self {
            role_filter: Some(role.to_owned()),
            ..self
        }
    }
}
