use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum VizError {
    #[error("Invalid region extent: {width}x{height}")]
    InvalidRegion { width: i64, height: i64 },

    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("No geocoding match for city '{query}'")]
    CityNotFound { query: String },

    #[error("HTTP request failed: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    #[error("Runtime error: {message}")]
    RuntimeError { message: String },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, VizError>;

#[allow(dead_code)]
impl VizError {
    /// Returns true if this error is recoverable (user can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            VizError::CityNotFound { .. }
                | VizError::HttpError { .. }
                | VizError::IoError { .. }
                | VizError::ImageLoadError { .. }
        )
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            VizError::InvalidRegion { .. } => "INVALID_REGION",
            VizError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            VizError::CityNotFound { .. } => "CITY_NOT_FOUND",
            VizError::HttpError { .. } => "HTTP_ERROR",
            VizError::RuntimeError { .. } => "RUNTIME_ERROR",
            VizError::SettingsError { .. } => "SETTINGS_ERROR",
            VizError::IoError { .. } => "IO_ERROR",
            VizError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Returns a user-friendly error message with a recovery suggestion
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            VizError::CityNotFound { .. } => "Check the spelling or try a larger nearby city.",
            VizError::HttpError { .. } => "Check your internet connection and try again.",
            VizError::ImageLoadError { .. } => {
                "The image file may be corrupted or in an unsupported format."
            }
            VizError::IoError { .. } => "File system error occurred. Check permissions.",
            _ => "An unexpected error occurred.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }
}
