use crate::config::toml_config::OptimizerSettings;
use crate::core::minify::optimize_html;
use crate::core::{Document, OptimizationReport, Pipeline, Storage};
use crate::utils::error::{AssetError, Result};
use crate::utils::format::thousands;
use std::fmt;

pub struct OptimizedDocument {
    pub original_size: u64,
    pub html: String,
}

pub struct OptimizePipeline<S: Storage> {
    storage: S,
    settings: OptimizerSettings,
}

impl<S: Storage> OptimizePipeline<S> {
    pub fn new(storage: S, settings: OptimizerSettings) -> Self {
        Self { storage, settings }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for OptimizePipeline<S> {
    type Extracted = Document;
    type Transformed = OptimizedDocument;
    type Loaded = OptimizationReport;

    async fn extract(&self) -> Result<Document> {
        tracing::debug!("Reading {}", self.settings.input);
        let bytes = self.storage.read_file(&self.settings.input).await?;
        let html = String::from_utf8(bytes).map_err(|e| {
            AssetError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(Document {
            path: self.settings.input.clone(),
            html,
        })
    }

    async fn transform(&self, data: Document) -> Result<OptimizedDocument> {
        let original_size = data.html.len() as u64;
        let html = optimize_html(&data.html);
        tracing::debug!(
            "Optimized {}: {} -> {} bytes",
            data.path,
            original_size,
            html.len()
        );

        Ok(OptimizedDocument {
            original_size,
            html,
        })
    }

    async fn load(&self, result: OptimizedDocument) -> Result<OptimizationReport> {
        self.storage
            .write_file(&self.settings.output, result.html.as_bytes())
            .await?;

        Ok(OptimizationReport {
            output_path: self.settings.output.clone(),
            original_size: result.original_size,
            optimized_size: result.html.len() as u64,
        })
    }
}

impl fmt::Display for OptimizationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original size: {} bytes", thousands(self.original_size))?;
        writeln!(f, "Optimized size: {} bytes", thousands(self.optimized_size))?;
        write!(f, "Reduction: {:.1}%", self.reduction_percent())
    }
}
