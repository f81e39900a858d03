//! Image file writers.
//!
//! The renderer hands over gamma-corrected colors; this module only
//! quantizes them and picks an encoding from the file extension.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use glint_renderer::{color_to_rgb8, ImageBuffer};

/// Write the image as plain-text PPM (P3), one `R G B` triple per line.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb8(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

/// Save the image, choosing the format from the extension of `path`.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("ppm") => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_ppm(image, BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        Some("png") => {
            let buffer = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
                .context("Pixel buffer does not match image dimensions")?;
            buffer
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        _ => bail!(
            "Unsupported output format for {} (expected .ppm or .png)",
            path.display()
        ),
    }

    log::info!("Saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_renderer::Color;

    fn two_by_one() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set(1, 0, Color::new(0.25, 0.75, 0.0));
        image
    }

    #[test]
    fn test_write_ppm() {
        let mut bytes = Vec::new();
        write_ppm(&two_by_one(), &mut bytes).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 0 128\n64 192 0\n");
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join("glint_output.bmp");
        let err = save_image(&two_by_one(), &path).unwrap_err();
        assert!(err.to_string().contains("Unsupported output format"));
    }

    #[test]
    fn test_save_png() {
        let path = std::env::temp_dir().join(format!("glint_output_{}.png", std::process::id()));
        save_image(&two_by_one(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 128]);
    }
}
