use selection::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum MountError {
    #[error("No document available")]
    NoDocument,
    #[error("Query for {0:?} failed: {1}")]
    Query(String, String),
    #[error("Form field {0:?} not found")]
    MissingField(String),
    #[error("Element {0:?} is not an input")]
    NotAnInput(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
