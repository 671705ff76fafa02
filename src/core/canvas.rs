use crate::core::fonts::Typeface;
use crate::core::BoundingBox;
use crate::utils::error::Result;
use ab_glyph::{point, Font, FontVec, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};

/// In-memory drawing surface. Coordinates outside the image are clipped.
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.pixels.get_pixel(x, y)
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.pixels.width() && (y as u32) < self.pixels.height()
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if self.contains(x, y) {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    fn blend(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
        if !self.contains(x, y) {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
        for channel in 0..3 {
            let mixed =
                dst.0[channel] as f32 * (1.0 - coverage) + color.0[channel] as f32 * coverage;
            dst.0[channel] = mixed.round() as u8;
        }
    }

    /// 填滿矩形，`bbox` 的四個邊界都包含在內
    pub fn fill_rectangle(&mut self, bbox: BoundingBox, color: Rgb<u8>) {
        let [x0, y0, x1, y1] = bbox;
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, color);
            }
        }
    }

    pub fn fill_ellipse(&mut self, bbox: BoundingBox, color: Rgb<u8>) {
        let geometry = EllipseGeometry::from_bbox(bbox);
        let [x0, y0, x1, y1] = bbox;
        for y in y0..=y1 {
            for x in x0..=x1 {
                if geometry.normalized_distance(x, y, 0.0) <= 1.0 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Strokes the part of the ellipse inscribed in `bbox` between `start` and
    /// `end` degrees, measured clockwise from 3 o'clock.
    pub fn arc(&mut self, bbox: BoundingBox, start: f32, end: f32, color: Rgb<u8>, width: u32) {
        let geometry = EllipseGeometry::from_bbox(bbox);
        let inset = width as f32;
        let [x0, y0, x1, y1] = bbox;

        for y in y0..=y1 {
            for x in x0..=x1 {
                if geometry.normalized_distance(x, y, 0.0) > 1.0 {
                    continue;
                }
                if geometry.has_interior(inset) && geometry.normalized_distance(x, y, inset) < 1.0
                {
                    continue;
                }
                // y 軸朝下，所以 atan2 的正角度就是順時針
                let mut angle = (y as f32 - geometry.cy)
                    .atan2(x as f32 - geometry.cx)
                    .to_degrees();
                if angle < 0.0 {
                    angle += 360.0;
                }
                if angle_in_sweep(angle, start, end) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draws `text` centered horizontally and vertically on `center`.
    pub fn draw_text(
        &mut self,
        center: (i32, i32),
        text: &str,
        color: Rgb<u8>,
        typeface: &Typeface,
    ) {
        let left = center.0 as f32 - typeface.text_width(text) / 2.0;

        match typeface {
            Typeface::Outline { font, scale } => {
                let font: &FontVec = font;
                let scaled = font.as_scaled(*scale);
                let baseline = center.1 as f32 + (scaled.ascent() + scaled.descent()) / 2.0;

                let mut caret = left;
                let mut previous = None;
                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(prev) = previous {
                        caret += scaled.kern(prev, id);
                    }
                    // glyph 0 是 .notdef，缺字時只前進不繪製
                    if id.0 != 0 {
                        let glyph = id.with_scale_and_position(*scale, point(caret, baseline));
                        if let Some(outlined) = font.outline_glyph(glyph) {
                            let bounds = outlined.px_bounds();
                            outlined.draw(|gx, gy, coverage| {
                                self.blend(
                                    bounds.min.x as i32 + gx as i32,
                                    bounds.min.y as i32 + gy as i32,
                                    color,
                                    coverage,
                                );
                            });
                        }
                    }
                    caret += scaled.h_advance(id);
                    previous = Some(id);
                }
            }
            Typeface::Bitmap { scale } => {
                let scale = *scale as i32;
                let top = center.1 - 4 * scale;
                let mut caret = left.round() as i32;

                for ch in text.chars() {
                    if let Some(rows) = BASIC_FONTS.get(ch) {
                        for (row, bits) in rows.iter().enumerate() {
                            for col in 0..8u8 {
                                if (bits >> col) & 1 == 1 {
                                    let px = caret + col as i32 * scale;
                                    let py = top + row as i32 * scale;
                                    self.fill_rectangle(
                                        [px, py, px + scale - 1, py + scale - 1],
                                        color,
                                    );
                                }
                            }
                        }
                    }
                    caret += 8 * scale;
                }
            }
        }
    }

    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        {
            let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
            encoder.encode_image(&self.pixels)?;
        }
        Ok(buffer)
    }
}

struct EllipseGeometry {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl EllipseGeometry {
    fn from_bbox(bbox: BoundingBox) -> Self {
        let [x0, y0, x1, y1] = bbox;
        Self {
            cx: (x0 + x1) as f32 / 2.0,
            cy: (y0 + y1) as f32 / 2.0,
            rx: ((x1 - x0) as f32 / 2.0).max(0.5),
            ry: ((y1 - y0) as f32 / 2.0).max(0.5),
        }
    }

    fn has_interior(&self, inset: f32) -> bool {
        self.rx > inset && self.ry > inset
    }

    /// `(dx/rx)^2 + (dy/ry)^2` for the ellipse shrunk by `inset` pixels.
    fn normalized_distance(&self, x: i32, y: i32, inset: f32) -> f32 {
        let dx = (x as f32 - self.cx) / (self.rx - inset);
        let dy = (y as f32 - self.cy) / (self.ry - inset);
        dx * dx + dy * dy
    }
}

fn angle_in_sweep(angle: f32, start: f32, end: f32) -> bool {
    if end - start >= 360.0 {
        return true;
    }
    let start = start.rem_euclid(360.0);
    let end = end.rem_euclid(360.0);
    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}
