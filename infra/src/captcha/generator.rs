//! JPEG captcha generator

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use rand::Rng;
use tracing::debug;

use mb_core::services::verification::CaptchaGenerator;

use super::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Pixels of scale applied to each 5x7 glyph
const GLYPH_SCALE: u32 = 4;

/// Horizontal cell reserved per character, including spacing
const CELL_WIDTH: u32 = GLYPH_WIDTH * GLYPH_SCALE + 8;

const MARGIN: u32 = 10;
const CANVAS_HEIGHT: u32 = 48;

/// Renders a random code onto a noisy canvas and encodes it as JPEG
///
/// Per-glyph vertical jitter and color, random noise lines and dot
/// speckle make the text awkward for naive OCR while staying readable.
pub struct JpegCaptcha {
    code_length: usize,
    quality: u8,
}

impl JpegCaptcha {
    pub fn new(code_length: usize, quality: u8) -> Self {
        Self {
            code_length,
            quality,
        }
    }

    fn random_text(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.code_length)
            .map(|_| font::ALPHABET[rng.gen_range(0..font::ALPHABET.len())] as char)
            .collect()
    }

    fn render(&self, text: &str) -> Result<Vec<u8>, String> {
        let mut rng = rand::thread_rng();
        let width = MARGIN * 2 + CELL_WIDTH * text.len() as u32;

        let mut canvas = RgbImage::from_pixel(width, CANVAS_HEIGHT, Rgb([245, 245, 240]));

        // Dot speckle under the text
        for _ in 0..(width * CANVAS_HEIGHT / 24) {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..CANVAS_HEIGHT);
            let shade = rng.gen_range(120..220);
            canvas.put_pixel(x, y, Rgb([shade, shade, shade]));
        }

        for (i, c) in text.chars().enumerate() {
            let rows = font::glyph(c)
                .ok_or_else(|| format!("character '{}' has no glyph", c))?;

            let color = Rgb([
                rng.gen_range(10..120),
                rng.gen_range(10..120),
                rng.gen_range(10..120),
            ]);
            let origin_x = MARGIN + CELL_WIDTH * i as u32 + rng.gen_range(0..5);
            let max_jitter = CANVAS_HEIGHT - GLYPH_HEIGHT * GLYPH_SCALE - 4;
            let origin_y = 2 + rng.gen_range(0..max_jitter);

            for (row_idx, row) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if !font::row_bit(*row, col) {
                        continue;
                    }
                    let base_x = origin_x + col * GLYPH_SCALE;
                    let base_y = origin_y + row_idx as u32 * GLYPH_SCALE;
                    for dx in 0..GLYPH_SCALE {
                        for dy in 0..GLYPH_SCALE {
                            let px = base_x + dx;
                            let py = base_y + dy;
                            if px < width && py < CANVAS_HEIGHT {
                                canvas.put_pixel(px, py, color);
                            }
                        }
                    }
                }
            }
        }

        // Noise lines over the text
        for _ in 0..4 {
            let color = Rgb([
                rng.gen_range(60..180),
                rng.gen_range(60..180),
                rng.gen_range(60..180),
            ]);
            let start = (
                rng.gen_range(0..width) as f32,
                rng.gen_range(0..CANVAS_HEIGHT) as f32,
            );
            let end = (
                rng.gen_range(0..width) as f32,
                rng.gen_range(0..CANVAS_HEIGHT) as f32,
            );
            draw_line_segment_mut(&mut canvas, start, end, color);
        }

        let mut buffer = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
        encoder
            .encode_image(&canvas)
            .map_err(|e| format!("JPEG encoding failed: {}", e))?;

        Ok(buffer)
    }
}

impl Default for JpegCaptcha {
    fn default() -> Self {
        Self::new(4, 80)
    }
}

impl CaptchaGenerator for JpegCaptcha {
    fn generate(&self) -> Result<(String, Vec<u8>), String> {
        let text = self.random_text();
        let image = self.render(&text)?;
        debug!(bytes = image.len(), "rendered captcha image");
        Ok((text, image))
    }
}
