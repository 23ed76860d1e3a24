//! Serializing a rendered image as PNG.

use image::png::PNGEncoder;
use image::{ColorType, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::RenderError;

/// Write `image` to `writer` as an 8-bit RGBA PNG.
pub fn encode_png<W: Write>(image: &RgbaImage, writer: W) -> Result<(), RenderError> {
    let raw: &[u8] = image;
    PNGEncoder::new(writer).encode(raw, image.width(), image.height(), ColorType::RGBA(8))?;
    Ok(())
}

/// Write `image` to a new file at `path` as PNG.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), RenderError> {
    let output = File::create(path)?;
    let mut output = BufWriter::new(output);
    encode_png(image, &mut output)?;
    output.flush()?;
    Ok(())
}
