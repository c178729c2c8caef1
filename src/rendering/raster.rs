/// Rasterizer: paint commands to an RGBA buffer, encoded as PNG.

use crate::rendering::layout::Direction;
use crate::rendering::paint::PaintCommand;
use crate::rendering::{CardImage, FontSet};
use crate::{CardSize, Error, Result};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};

pub struct Rasterizer {
    fonts: FontSet,
}

impl Rasterizer {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn rasterize(&self, commands: &[PaintCommand], size: CardSize) -> Result<CardImage> {
        if size.width == 0 || size.height == 0 {
            return Err(Error::RenderError(format!("empty card size {}x{}", size.width, size.height)));
        }
        let mut img = RgbaImage::new(size.width, size.height);

        for cmd in commands {
            match cmd {
                PaintCommand::Gradient { top, bottom } => fill_gradient(&mut img, *top, *bottom),
                PaintCommand::SolidRect { x, y, width, height, rgba } => {
                    fill_rect(&mut img, *x, *y, *width, *height, *rgba)
                }
                PaintCommand::Text {
                    x,
                    y,
                    width,
                    text,
                    px,
                    rgba,
                    font,
                    direction,
                } => match self.fonts.get(*font) {
                    Some(f) => draw_line(&mut img, f, text, *x, *y, *width, *px, *rgba, *direction),
                    None => log::debug!("no {:?} font loaded; skipping text line", font),
                },
            }
        }

        let mut png_data = Vec::new();
        PngEncoder::new(&mut png_data)
            .write_image(img.as_raw(), size.width, size.height, ColorType::Rgba8)
            .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;

        Ok(CardImage {
            width: size.width,
            height: size.height,
            png_data,
        })
    }
}

fn blend(px: &mut Rgba<u8>, rgb: [u8; 3], alpha: f32) {
    let a = alpha.clamp(0.0, 1.0);
    for (c, src) in px.0.iter_mut().take(3).zip(rgb) {
        *c = (src as f32 * a + *c as f32 * (1.0 - a)).round() as u8;
    }
    px.0[3] = 255;
}

fn fill_gradient(img: &mut RgbaImage, top: [u8; 3], bottom: [u8; 3]) {
    let h = img.height().max(2) - 1;
    for y in 0..img.height() {
        let t = y as f32 / h as f32;
        let rgb: [u8; 3] =
            std::array::from_fn(|i| (top[i] as f32 + (bottom[i] as f32 - top[i] as f32) * t).round() as u8);
        for x in 0..img.width() {
            img.put_pixel(x, y, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        }
    }
}

fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, width: u32, height: u32, rgba: [u8; 4]) {
    let x0 = x.max(0) as u32;
    let y0 = y.max(0) as u32;
    let x1 = (x.saturating_add(width as i32)).clamp(0, img.width() as i32) as u32;
    let y1 = (y.saturating_add(height as i32)).clamp(0, img.height() as i32) as u32;
    let alpha = rgba[3] as f32 / 255.0;
    for py in y0..y1 {
        for px in x0..x1 {
            blend(img.get_pixel_mut(px, py), [rgba[0], rgba[1], rgba[2]], alpha);
        }
    }
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32,
        0x0300..=0x036F
        | 0x0610..=0x061A
        | 0x064B..=0x065F
        | 0x0670
        | 0x06D6..=0x06DC
        | 0x06DF..=0x06E4
        | 0x06E7..=0x06E8
        | 0x06EA..=0x06ED)
}

/// Split a line into clusters: a base character with its trailing marks,
/// or a whole run of digits (numbers read left to right even in RTL text).
fn clusters(text: &str) -> Vec<Vec<char>> {
    let mut out: Vec<Vec<char>> = Vec::new();
    for c in text.chars() {
        let extend = match out.last() {
            Some(last) => {
                is_combining_mark(c) || (c.is_numeric() && last.iter().all(|d| d.is_numeric()))
            }
            None => false,
        };
        match out.last_mut() {
            Some(last) if extend => last.push(c),
            _ => out.push(vec![c]),
        }
    }
    out
}

/// Position a line's glyphs starting at x = 0. Marks share their base's
/// pen position. Returns the glyphs and the line's advance width.
fn shape_line(font: &Font<'static>, text: &str, px: f32, direction: Direction) -> (Vec<PositionedGlyph<'static>>, f32) {
    let scale = Scale::uniform(px);
    let ascent = font.v_metrics(scale).ascent;
    let mut clusters = clusters(text);
    if direction == Direction::Rtl {
        clusters.reverse();
    }

    let mut glyphs = Vec::new();
    let mut pen = 0.0f32;
    for cluster in clusters {
        let mut base_pen = pen;
        let mut advance = 0.0f32;
        for c in cluster {
            let g = font.glyph(c).scaled(scale);
            let w = g.h_metrics().advance_width;
            if is_combining_mark(c) {
                glyphs.push(g.positioned(point(base_pen, ascent)));
            } else {
                base_pen = pen + advance;
                glyphs.push(g.positioned(point(base_pen, ascent)));
                advance += w;
            }
        }
        pen += advance;
    }
    (glyphs, pen)
}

#[allow(clippy::too_many_arguments)]
fn draw_line(
    img: &mut RgbaImage,
    font: &Font<'static>,
    text: &str,
    x: i32,
    y: i32,
    width: u32,
    px: f32,
    rgba: [u8; 4],
    direction: Direction,
) {
    let (glyphs, line_w) = shape_line(font, text, px, direction);
    let offset_x = x as f32 + ((width as f32 - line_w) / 2.0).max(0.0);
    let (w, h) = (img.width() as i32, img.height() as i32);
    let alpha = rgba[3] as f32 / 255.0;

    for g in glyphs {
        if let Some(bb) = g.pixel_bounding_box() {
            g.draw(|gx, gy, v| {
                let px_x = offset_x as i32 + bb.min.x + gx as i32;
                let px_y = y + bb.min.y + gy as i32;
                if px_x >= 0 && px_y >= 0 && px_x < w && px_y < h {
                    blend(img.get_pixel_mut(px_x as u32, px_y as u32), [rgba[0], rgba[1], rgba[2]], v * alpha);
                }
            });
        }
    }
}
