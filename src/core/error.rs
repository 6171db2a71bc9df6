use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        Error::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
