//! Per-pixel rendering of a single icon: diagonal gradient background,
//! rounded-rectangle alpha mask, and the centered monogram overlay.

use crate::font;
use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::str::FromStr;

/// Sanity cap on the icon edge length. The largest shipped icon is 512 px;
/// anything past this is a caller bug, not a bigger icon.
pub const MAX_ICON_SIZE: u32 = 8192;

/// Visual constants for one icon set. All knobs the renderer reads live
/// here; nothing is global.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Gradient color at the top-left corner.
    pub gradient_start: Rgba<u8>,

    /// Gradient color toward the bottom-right corner.
    pub gradient_end: Rgba<u8>,

    /// Corner radius as a fraction of the edge length.
    pub corner_ratio: f32,

    /// Monogram drawn on top of the background.
    pub label: String,

    /// Fill color for the monogram.
    pub label_color: Rgba<u8>,

    /// Font size as a fraction of the edge length.
    pub label_scale: f32,

    /// Upward shift of the monogram as a fraction of the edge length,
    /// to optically balance it inside the rounded shape.
    pub label_lift: f32,

    /// Icons smaller than this skip the monogram entirely.
    pub label_min_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gradient_start: parse_color("#833ab4"),
            gradient_end: parse_color("#fcb045"),
            corner_ratio: 0.22,
            label: "IP".to_string(),
            label_color: parse_color("white"),
            label_scale: 0.45,
            label_lift: 0.05,
            label_min_size: 32,
        }
    }
}

/// Parse a CSS color string into an opaque RGBA pixel. Unparseable input
/// falls back to opaque white rather than failing.
pub fn parse_color(color: &str) -> Rgba<u8> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgba([
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
                255,
            ])
        })
        .unwrap_or(Rgba([255, 255, 255, 255]))
}

/// Render one icon as an in-memory RGBA buffer.
///
/// Pixels outside the rounded-rectangle silhouette keep their initial
/// fully-transparent value; every other pixel is fully opaque with a color
/// determined solely by its position. Icons at or above
/// `config.label_min_size` additionally get the monogram overlay.
pub fn render_icon(size: u32, config: &RenderConfig) -> Result<RgbaImage> {
    if size == 0 {
        anyhow::bail!("Icon size must be a positive number of pixels");
    }
    if size > MAX_ICON_SIZE {
        anyhow::bail!(
            "Icon size {size} exceeds the {MAX_ICON_SIZE} px sanity limit"
        );
    }

    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let corner_radius = (size as f32 * config.corner_ratio) as u32;

    for y in 0..size {
        for x in 0..size {
            if let Some(pixel) = shade_at(x, y, size, corner_radius, config) {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    if size >= config.label_min_size {
        draw_label(&mut img, size, config);
    }

    Ok(img)
}

/// Pure per-pixel shading decision: `None` means the pixel lies beyond a
/// rounded corner and stays transparent, otherwise the opaque gradient
/// color at `(x, y)`.
pub fn shade_at(
    x: u32,
    y: u32,
    size: u32,
    corner_radius: u32,
    config: &RenderConfig,
) -> Option<Rgba<u8>> {
    // Distance to the nearest vertical and horizontal edge.
    let dx = x.min(size - 1 - x);
    let dy = y.min(size - 1 - y);

    // Inside one of the four corner squares, keep only the quarter-circle.
    if dx < corner_radius && dy < corner_radius {
        let cx = (corner_radius - dx) as f32;
        let cy = (corner_radius - dy) as f32;
        if (cx * cx + cy * cy).sqrt() > corner_radius as f32 {
            return None;
        }
    }

    // Normalized position along the top-left → bottom-right diagonal.
    let t = (x + y) as f32 / (2 * size) as f32;
    let start = config.gradient_start;
    let end = config.gradient_end;
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;

    Some(Rgba([
        lerp(start[0], end[0]),
        lerp(start[1], end[1]),
        lerp(start[2], end[2]),
        255,
    ]))
}

/// Draw the monogram centered on the canvas, lifted slightly above true
/// center. Font lookup cannot fail: a missing system face degrades to the
/// builtin bitmap face.
fn draw_label(img: &mut RgbaImage, size: u32, config: &RenderConfig) {
    let px = (size as f32 * config.label_scale) as u32;
    let face = font::load_label_face();

    let (tw, th) = face.measure(&config.label, px);
    let tx = (size as i32 - tw as i32) / 2;
    let ty = (size as i32 - th as i32) / 2 - (size as f32 * config.label_lift) as i32;

    face.draw(img, &config.label, px, tx, ty, config.label_color);
}
