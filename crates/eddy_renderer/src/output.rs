//! Writing rendered grids out: PNG, plain PPM, and an ASCII approximation.
//!
//! The renderer itself never touches a display surface; these helpers are
//! for callers that want the grid on disk or in a terminal.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::{ImageBuffer, RenderError, RenderResult};

/// Characters from darkest to brightest.
pub const ASCII_RAMP: &str = " .:-=+*#%@";

/// Save as an 8-bit PNG. Channels are clamped, not gamma corrected.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    image::save_buffer(
        path.as_ref(),
        &image.to_rgb(),
        image.width,
        image.height,
        image::ColorType::Rgb8,
    )?;
    Ok(())
}

/// Save as a plain-text (P3) PPM.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a P3 PPM to any writer.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color.clamp().to_rgb8();
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// One character per pixel, one line per row, picked by luminance.
pub fn to_ascii(image: &ImageBuffer) -> String {
    let ramp: Vec<char> = ASCII_RAMP.chars().collect();
    let last = ramp.len() - 1;
    let mut out = String::with_capacity(image.pixels.len() + image.height as usize);

    for row in image.rows() {
        for color in row {
            let luminance = color.clamp().luminance();
            let index = ((luminance * last as f64).round() as usize).min(last);
            out.push(ramp[index]);
        }
        out.push('\n');
    }

    out
}

/// Save to `path`, picking the format from the extension
/// (`png`, `ppm`, or `txt` for ASCII).
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_png(image, path)?,
        "ppm" => save_ppm(image, path)?,
        "txt" => std::fs::write(path, to_ascii(image))?,
        _ => return Err(RenderError::UnsupportedFormat(path.display().to_string())),
    }

    info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
