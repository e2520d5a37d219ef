use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid input ({field}): {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("Viewport error: {0}")]
    Viewport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Color parse error: {0}")]
    ColorParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
