use crate::utils::error::{AssetError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 輸入與輸出不可指向同一個檔案，否則原始文件會被覆寫
pub fn validate_distinct_paths(field_name: &str, input: &str, output: &str) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        return Err(AssetError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("input and output both point to '{}'", input),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("optimizer.input", "index.html").is_ok());
        assert!(validate_path("optimizer.input", "").is_err());
        assert!(validate_path("optimizer.input", "   ").is_err());
        assert!(validate_path("optimizer.input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("images.quality", 95u8, 1, 100).is_ok());
        assert!(validate_range("images.quality", 0u8, 1, 100).is_err());
        assert!(validate_range("images.quality", 101u8, 1, 100).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("optimizer", "index.html", "out.html").is_ok());
        assert!(validate_distinct_paths("optimizer", "index.html", "./index.html").is_ok());
        assert!(validate_distinct_paths("optimizer", "index.html", "index.html").is_err());
    }
}
