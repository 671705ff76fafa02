pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::cli::LocalStorage;
pub use config::toml_config::{ImageSettings, OptimizerSettings, ToolConfig};
pub use crate::core::{
    engine::AssetEngine, image_pipeline::ImagePipeline, optimize_pipeline::OptimizePipeline,
};
pub use domain::model::OptimizationReport;
pub use utils::error::{AssetError, Result};
