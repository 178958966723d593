use thiserror::Error;

/// Failures surfaced by the page controllers.
///
/// Missing markup is a contract violation of the served page; callers log it
/// and abandon the operation instead of recovering.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("required element not found: {0}")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unsupported language code: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form is already being sent")]
    AlreadySending,
    #[error("form is not being sent")]
    NotSending,
}
