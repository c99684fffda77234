//! Error types for the site shell

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SiteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("Browser error: {0}")]
    Browser(String),
}
