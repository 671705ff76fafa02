use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to load font '{path}': {reason}")]
    FontLoadError { path: String, reason: String },
}

impl AssetError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AssetError::IoError(e) => format!("File operation failed: {}", e),
            AssetError::ImageError(e) => format!("Could not encode image: {}", e),
            AssetError::SerializationError(e) => format!("Could not serialize report: {}", e),
            AssetError::ConfigError { message } => format!("Configuration problem: {}", message),
            AssetError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AssetError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            AssetError::FontLoadError { path, .. } => {
                format!("Font '{}' could not be loaded", path)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AssetError::IoError(_) => {
                "Check that the input file exists and the output location is writable"
            }
            AssetError::ImageError(_) => "Check the JPEG quality setting and available disk space",
            AssetError::SerializationError(_) => "Re-run without --json",
            AssetError::ConfigError { .. } | AssetError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            AssetError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the config file or command line"
            }
            AssetError::FontLoadError { .. } => "Pass --font with a path to a TrueType font",
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AssetError::ConfigError { .. }
                | AssetError::ConfigValidationError { .. }
                | AssetError::InvalidConfigValueError { .. }
        )
    }

    /// 設定錯誤回傳 1，其餘執行期錯誤回傳 2
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
