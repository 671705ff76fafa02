use crate::core::fonts::DEFAULT_FONT_PATH;
use crate::utils::error::{AssetError, Result};
use crate::utils::validation::{validate_distinct_paths, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_IMAGE_DIR: &str = "images/order-bump";
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
pub const DEFAULT_INPUT: &str = "index.html";
pub const DEFAULT_OUTPUT: &str = "index-optimized.html";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub images: ImageSettings,
    pub optimizer: OptimizerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub output_dir: String,
    pub font_path: String,
    pub quality: u8,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_IMAGE_DIR.to_string(),
            font_path: DEFAULT_FONT_PATH.to_string(),
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    pub input: String,
    pub output: String,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }
}

impl ToolConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AssetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AssetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASSET_DIR})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn apply_image_overrides(
        &mut self,
        output_dir: Option<String>,
        font_path: Option<String>,
        quality: Option<u8>,
    ) {
        if let Some(output_dir) = output_dir {
            self.images.output_dir = output_dir;
        }
        if let Some(font_path) = font_path {
            self.images.font_path = font_path;
        }
        if let Some(quality) = quality {
            self.images.quality = quality;
        }
    }

    pub fn apply_optimizer_overrides(&mut self, input: Option<String>, output: Option<String>) {
        if let Some(input) = input {
            self.optimizer.input = input;
        }
        if let Some(output) = output {
            self.optimizer.output = output;
        }
    }
}

impl Validate for ImageSettings {
    fn validate(&self) -> Result<()> {
        validate_path("images.output_dir", &self.output_dir)?;
        // 字型路徑可以不存在，載入失敗時會改用內建字型
        validate_path("images.font_path", &self.font_path)?;
        validate_range("images.quality", self.quality, 1, 100)
    }
}

impl Validate for OptimizerSettings {
    fn validate(&self) -> Result<()> {
        validate_path("optimizer.input", &self.input)?;
        validate_path("optimizer.output", &self.output)?;
        validate_distinct_paths("optimizer", &self.input, &self.output)
    }
}

impl Validate for ToolConfig {
    fn validate(&self) -> Result<()> {
        self.images.validate()?;
        self.optimizer.validate()
    }
}
