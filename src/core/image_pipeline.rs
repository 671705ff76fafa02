use crate::config::toml_config::ImageSettings;
use crate::core::canvas::Canvas;
use crate::core::fonts::FontSet;
use crate::core::{scenes, Pipeline, PlaceholderSpec, Shape, Storage};
use crate::utils::error::Result;
use std::path::Path;

pub struct ImageBatch {
    pub specs: Vec<PlaceholderSpec>,
    pub fonts: FontSet,
}

pub struct RenderedImage {
    pub file_name: String,
    pub canvas: Canvas,
}

pub struct ImagePipeline<S: Storage> {
    storage: S,
    settings: ImageSettings,
}

impl<S: Storage> ImagePipeline<S> {
    pub fn new(storage: S, settings: ImageSettings) -> Self {
        Self { storage, settings }
    }
}

/// 依序把 spec 裡的圖形畫到新的畫布上
pub fn render_placeholder(spec: &PlaceholderSpec, fonts: &FontSet) -> Canvas {
    let mut canvas = Canvas::new(spec.width, spec.height, spec.background);

    for shape in &spec.shapes {
        match shape {
            Shape::Ellipse { bbox, fill } => canvas.fill_ellipse(*bbox, *fill),
            Shape::Rectangle { bbox, fill } => canvas.fill_rectangle(*bbox, *fill),
            Shape::Arc {
                bbox,
                start,
                end,
                fill,
                width,
            } => canvas.arc(*bbox, *start, *end, *fill, *width),
            Shape::Text {
                center,
                text,
                fill,
                font,
            } => canvas.draw_text(*center, text, *fill, fonts.get(*font)),
        }
    }

    canvas
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for ImagePipeline<S> {
    type Extracted = ImageBatch;
    type Transformed = Vec<RenderedImage>;
    type Loaded = Vec<String>;

    async fn extract(&self) -> Result<ImageBatch> {
        let fonts = FontSet::load(&self.settings.font_path);
        if fonts.is_fallback() {
            tracing::debug!("Using built-in bitmap font for all labels");
        }

        Ok(ImageBatch {
            specs: scenes::all(),
            fonts,
        })
    }

    async fn transform(&self, data: ImageBatch) -> Result<Vec<RenderedImage>> {
        let rendered = data
            .specs
            .iter()
            .map(|spec| {
                tracing::debug!("Rendering {} ({} shapes)", spec.name, spec.shapes.len());
                RenderedImage {
                    file_name: spec.file_name.clone(),
                    canvas: render_placeholder(spec, &data.fonts),
                }
            })
            .collect();

        Ok(rendered)
    }

    async fn load(&self, result: Vec<RenderedImage>) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(result.len());

        for rendered in result {
            let jpeg = rendered.canvas.encode_jpeg(self.settings.quality)?;
            tracing::debug!("Writing {} ({} bytes)", rendered.file_name, jpeg.len());
            self.storage.write_file(&rendered.file_name, &jpeg).await?;

            println!("✅ Created {}", rendered.file_name);
            written.push(
                Path::new(&self.settings.output_dir)
                    .join(&rendered.file_name)
                    .to_string_lossy()
                    .into_owned(),
            );
        }

        Ok(written)
    }
}
