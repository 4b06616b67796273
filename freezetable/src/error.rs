use thiserror::Error;

/// The caller's options are invalid or point at elements that do not exist.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Unknown key or a value of the wrong type.
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("columnNum must be at least 1")]
    ColumnNumZero,

    #[error("fixed navbar element '{0}' not found")]
    NavbarNotFound(String),

    #[error("container element '{0}' not found")]
    ContainerNotFound(String),
}

/// The page does not have the shape the widget needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("wrapper element '{0}' not found")]
    WrapperNotFound(String),

    #[error("table element not found inside wrapper '{0}'")]
    MissingTable(String),

    #[error("element '{0}' is not a table element")]
    NotATable(String),

    #[error("table '{0}' must have both thead and tbody elements")]
    MissingSections(String),

    #[error("table '{0}' already initialized; cannot initialize the same table multiple times")]
    AlreadyInitialized(String),
}

/// Every way attaching can fail. Nothing is left attached on error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Structural(#[from] StructuralError),
}
