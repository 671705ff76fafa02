pub mod canvas;
pub mod engine;
pub mod fonts;
pub mod image_pipeline;
pub mod minify;
pub mod optimize_pipeline;
pub mod scenes;

pub use crate::domain::model::{
    BoundingBox, Document, FontRole, OptimizationReport, PlaceholderSpec, Shape,
};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
