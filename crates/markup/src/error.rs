use preflight_style::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Line {line}: {message} (section: {})", .section.as_deref().unwrap_or("none"))]
    Malformed {
        line: usize,
        section: Option<String>,
        message: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
