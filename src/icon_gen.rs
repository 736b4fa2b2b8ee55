//! Driver: iterates the fixed size list, renders each icon, and writes the
//! PNGs into the output directory.

use crate::render::{render_icon, RenderConfig};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Every size the extension packaging expects, smallest first.
pub const ICON_SIZES: [u32; 8] = [16, 32, 48, 64, 96, 128, 256, 512];

/// Render and write the full icon set into `out_dir`, creating the
/// directory if needed. Existing files are overwritten. The first failed
/// write aborts the remaining sizes.
pub fn generate_icons(out_dir: &Path) -> Result<()> {
    let config = RenderConfig::default();

    create_dir_all(out_dir).context("Can't create output directory")?;

    for size in ICON_SIZES {
        let icon = render_icon(size, &config)?;
        let filename = format!("icon-{size}.png");
        save_png(&icon, &out_dir.join(&filename))?;
        println!("Created {filename}");
    }

    println!("Done!");
    Ok(())
}

/// The `images` directory next to the running executable, mirroring the
/// original layout of icons living alongside the generator itself.
pub fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Can't locate the running executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.join("images"))
}

// Encode with the strongest compression; output must be byte-identical
// across runs, which PngEncoder guarantees (no timestamps, no randomness).
fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .with_context(|| format!("Failed to encode {}", path.display()))?;

    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
