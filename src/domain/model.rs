use image::Rgb;
use serde::{Deserialize, Serialize};

/// 包含邊界的矩形範圍 `[x0, y0, x1, y1]`
pub type BoundingBox = [i32; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Subtitle,
    Banner,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Ellipse {
        bbox: BoundingBox,
        fill: Rgb<u8>,
    },
    Rectangle {
        bbox: BoundingBox,
        fill: Rgb<u8>,
    },
    Arc {
        bbox: BoundingBox,
        start: f32,
        end: f32,
        fill: Rgb<u8>,
        width: u32,
    },
    Text {
        center: (i32, i32),
        text: String,
        fill: Rgb<u8>,
        font: FontRole,
    },
}

#[derive(Debug, Clone)]
pub struct PlaceholderSpec {
    pub name: String,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub background: Rgb<u8>,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub path: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub output_path: String,
    pub original_size: u64,
    pub optimized_size: u64,
}

impl OptimizationReport {
    /// `(1 - optimized / original) * 100`，空白原始檔視為 0%
    pub fn reduction_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.optimized_size as f64 / self.original_size as f64) * 100.0
    }
}
