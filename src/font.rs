//! Monogram face lookup and drawing.
//!
//! Prefers a bold sans-serif TrueType face found on the host system and
//! rasterized through `rusttype`. When no candidate file is present the
//! builtin blocky bitmap face takes over, so face lookup never fails and
//! the overlay is always drawable.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::fs;

/// Bold sans-serif faces probed in order. The macOS Arial Bold path is the
/// historical preference; the rest cover common Linux and Windows installs.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// A face the monogram can be measured and drawn with.
pub enum LabelFace {
    /// A system TrueType face.
    Truetype(Font<'static>),
    /// The always-available scaled 5x7 bitmap face.
    Builtin,
}

/// Find a monogram face. Returns the first candidate TrueType file that
/// both reads and parses, falling back to [`LabelFace::Builtin`].
pub fn load_label_face() -> LabelFace {
    for path in FONT_CANDIDATES {
        if let Ok(data) = fs::read(path) {
            if let Some(font) = Font::try_from_vec(data) {
                return LabelFace::Truetype(font);
            }
        }
    }
    LabelFace::Builtin
}

impl LabelFace {
    /// Width and height of the tight pixel bounding box of `text` at
    /// `px` font units.
    pub fn measure(&self, text: &str, px: u32) -> (u32, u32) {
        match self {
            LabelFace::Truetype(font) => match layout_bbox(font, text, px) {
                Some((min_x, min_y, max_x, max_y)) => {
                    ((max_x - min_x) as u32, (max_y - min_y) as u32)
                }
                None => (0, 0),
            },
            LabelFace::Builtin => bitmap_measure(text, px),
        }
    }

    /// Draw `text` with its bounding-box top-left corner at `(tx, ty)`.
    /// Fully covered pixels land as `color` with alpha 255 regardless of
    /// what was underneath; anti-aliased edge pixels blend by coverage.
    pub fn draw(
        &self,
        img: &mut RgbaImage,
        text: &str,
        px: u32,
        tx: i32,
        ty: i32,
        color: Rgba<u8>,
    ) {
        match self {
            LabelFace::Truetype(font) => draw_truetype(img, font, text, px, tx, ty, color),
            LabelFace::Builtin => bitmap_draw(img, text, px, tx, ty, color),
        }
    }
}

/// Union of the pixel bounding boxes of `text` laid out at `px` units,
/// as `(min_x, min_y, max_x, max_y)`. `None` when nothing is rasterizable
/// (empty string, whitespace only).
fn layout_bbox(font: &Font, text: &str, px: u32) -> Option<(i32, i32, i32, i32)> {
    let scale = Scale::uniform(px as f32);
    let v_metrics = font.v_metrics(scale);

    let mut bbox: Option<(i32, i32, i32, i32)> = None;
    for glyph in font.layout(text, scale, point(0.0, v_metrics.ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            bbox = Some(match bbox {
                Some((min_x, min_y, max_x, max_y)) => (
                    min_x.min(bb.min.x),
                    min_y.min(bb.min.y),
                    max_x.max(bb.max.x),
                    max_y.max(bb.max.y),
                ),
                None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
            });
        }
    }
    bbox
}

fn draw_truetype(
    img: &mut RgbaImage,
    font: &Font,
    text: &str,
    px: u32,
    tx: i32,
    ty: i32,
    color: Rgba<u8>,
) {
    let Some((min_x, min_y, _, _)) = layout_bbox(font, text, px) else {
        return;
    };

    let scale = Scale::uniform(px as f32);
    let v_metrics = font.v_metrics(scale);
    let (width, height) = (img.width() as i32, img.height() as i32);

    for glyph in font.layout(text, scale, point(0.0, v_metrics.ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let x = tx + (bb.min.x - min_x) + gx as i32;
                let y = ty + (bb.min.y - min_y) + gy as i32;
                if x >= 0 && x < width && y >= 0 && y < height && coverage > 0.0 {
                    blend(img.get_pixel_mut(x as u32, y as u32), color, coverage);
                }
            });
        }
    }
}

/// Source-over blend of `src` onto `dst` at the given coverage. Alpha only
/// ever increases so the glyph punches through transparent corners.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    for c in 0..3 {
        dst[c] = (dst[c] as f32 * (1.0 - coverage) + src[c] as f32 * coverage) as u8;
    }
    dst[3] = dst[3].max((coverage * 255.0) as u8);
}

// Builtin bitmap face: 5x7 cells, one bit per pixel, scaled up by an
// integer factor so `px` roughly matches the requested glyph height.

const BITMAP_COLS: u32 = 5;
const BITMAP_ROWS: u32 = 7;

/// Rows top to bottom, bit 4 is the leftmost column.
fn bitmap_glyph(c: char) -> [u8; 7] {
    match c {
        'I' => [
            0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111,
        ],
        'P' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000,
        ],
        // Unknown characters render as a solid block.
        _ => [
            0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111,
        ],
    }
}

fn bitmap_scale(px: u32) -> u32 {
    (px / BITMAP_ROWS).max(1)
}

fn bitmap_measure(text: &str, px: u32) -> (u32, u32) {
    let n = text.chars().count() as u32;
    if n == 0 {
        return (0, 0);
    }
    let scale = bitmap_scale(px);
    // Cells plus one-cell gaps between characters.
    let width = (n * BITMAP_COLS + (n - 1)) * scale;
    (width, BITMAP_ROWS * scale)
}

fn bitmap_draw(img: &mut RgbaImage, text: &str, px: u32, tx: i32, ty: i32, color: Rgba<u8>) {
    let scale = bitmap_scale(px);
    let advance = ((BITMAP_COLS + 1) * scale) as i32;
    let (width, height) = (img.width() as i32, img.height() as i32);

    for (i, c) in text.chars().enumerate() {
        let glyph = bitmap_glyph(c);
        let origin_x = tx + i as i32 * advance;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..BITMAP_COLS {
                let mask = 1u8 << (BITMAP_COLS - 1 - col);
                if bits & mask == 0 {
                    continue;
                }
                let x0 = origin_x + (col * scale) as i32;
                let y0 = ty + (row as u32 * scale) as i32;
                for y in y0..y0 + scale as i32 {
                    for x in x0..x0 + scale as i32 {
                        if x >= 0 && x < width && y >= 0 && y < height {
                            img.put_pixel(x as u32, y as u32, color);
                        }
                    }
                }
            }
        }
    }
}
