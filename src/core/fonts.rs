use crate::core::FontRole;
use crate::utils::error::{AssetError, Result};
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use std::sync::Arc;

pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";
pub const TITLE_SIZE: f32 = 36.0;
pub const SUBTITLE_SIZE: f32 = 24.0;

const BITMAP_GLYPH_WIDTH: u32 = 8;

#[derive(Clone)]
pub enum Typeface {
    /// TrueType/OpenType outlines rasterized at `scale` pixels.
    Outline { font: Arc<FontVec>, scale: PxScale },
    /// Built-in 8x8 bitmap font, each dot drawn as a `scale`x`scale` block.
    Bitmap { scale: u32 },
}

impl Default for Typeface {
    fn default() -> Self {
        Typeface::Bitmap { scale: 1 }
    }
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Typeface::Outline { scale, .. } => write!(f, "Outline({}px)", scale.y),
            Typeface::Bitmap { scale } => write!(f, "Bitmap(x{})", scale),
        }
    }
}

impl Typeface {
    pub fn text_width(&self, text: &str) -> f32 {
        match self {
            Typeface::Outline { font, scale } => {
                let font: &FontVec = font;
                let scaled = font.as_scaled(*scale);
                let mut width = 0.0;
                let mut previous = None;
                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(prev) = previous {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                width
            }
            Typeface::Bitmap { scale } => {
                (text.chars().count() as u32 * BITMAP_GLYPH_WIDTH * scale) as f32
            }
        }
    }

    pub fn is_outline(&self) -> bool {
        matches!(self, Typeface::Outline { .. })
    }
}

/// The typefaces a placeholder scene refers to by [`FontRole`].
#[derive(Debug, Clone)]
pub struct FontSet {
    pub title: Typeface,
    pub subtitle: Typeface,
    pub banner: Typeface,
}

impl FontSet {
    /// 嘗試載入指定字型；失敗時記錄警告並改用內建點陣字型
    pub fn load(path: &str) -> Self {
        match load_outline_font(path) {
            Ok(font) => {
                tracing::debug!("Loaded font from {}", path);
                let font = Arc::new(font);
                Self {
                    title: Typeface::Outline {
                        font: Arc::clone(&font),
                        scale: PxScale::from(TITLE_SIZE),
                    },
                    subtitle: Typeface::Outline {
                        font,
                        scale: PxScale::from(SUBTITLE_SIZE),
                    },
                    banner: Typeface::default(),
                }
            }
            Err(e) => {
                tracing::warn!("⚠️ {}, falling back to the built-in font", e);
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self {
            title: Typeface::default(),
            subtitle: Typeface::default(),
            banner: Typeface::default(),
        }
    }

    pub fn get(&self, role: FontRole) -> &Typeface {
        match role {
            FontRole::Title => &self.title,
            FontRole::Subtitle => &self.subtitle,
            FontRole::Banner => &self.banner,
        }
    }

    pub fn is_fallback(&self) -> bool {
        !self.title.is_outline()
    }
}

/// Reads the first face of a `.ttf`/`.otf`/`.ttc` file.
pub fn load_outline_font(path: &str) -> Result<FontVec> {
    let data = std::fs::read(path).map_err(|e| AssetError::FontLoadError {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    FontVec::try_from_vec_and_index(data, 0).map_err(|e| AssetError::FontLoadError {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_font_falls_back() {
        let fonts = FontSet::load("/definitely/not/a/font.ttc");
        assert!(fonts.is_fallback());
        assert!(!fonts.get(FontRole::Subtitle).is_outline());
    }

    #[test]
    fn test_invalid_font_data_falls_back() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"this is not a font").unwrap();

        let err = load_outline_font(temp_file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AssetError::FontLoadError { .. }));

        let fonts = FontSet::load(temp_file.path().to_str().unwrap());
        assert!(fonts.is_fallback());
    }

    #[test]
    fn test_bitmap_text_width() {
        assert_eq!(Typeface::Bitmap { scale: 1 }.text_width("WALLET"), 48.0);
        assert_eq!(Typeface::Bitmap { scale: 2 }.text_width("$$$"), 48.0);
        assert_eq!(Typeface::default().text_width(""), 0.0);
    }
}
