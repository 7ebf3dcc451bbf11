//! The unified error type of a conversion.

use preflight_layout::LayoutError;
use preflight_markup::ParseError;
use preflight_render_core::RenderError;
use preflight_style::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),
    #[error("Configuration rejected: {0}")]
    ConfigurationRejected(#[from] ConfigError),
    #[error("Layout impossible: {0}")]
    LayoutImpossible(String),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ParseError> for PipelineError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Config(config) => PipelineError::ConfigurationRejected(config),
            malformed @ ParseError::Malformed { .. } => {
                PipelineError::MalformedDocument(malformed.to_string())
            }
        }
    }
}

impl From<LayoutError> for PipelineError {
    fn from(e: LayoutError) -> Self {
        match e {
            LayoutError::Unsupported(feature) => PipelineError::UnsupportedFeature(feature),
            LayoutError::Render(render) => PipelineError::Render(render),
            impossible @ (LayoutError::ElementTooLarge { .. } | LayoutError::LeaderOverflow { .. }) => {
                PipelineError::LayoutImpossible(impossible.to_string())
            }
        }
    }
}
