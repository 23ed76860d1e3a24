// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image generation.
//!
//! Every pixel is independent of every other: map it to the plane,
//! count how long its orbit takes to escape, and look that count up
//! in the palette.  The single-threaded `generate` walks the image in
//! row-major order.  `generate_threaded` cuts the output buffer into
//! bands of whole rows and hands each band to exactly one scoped
//! thread, so no two threads ever touch the same memory and nothing
//! needs a lock.  Both produce identical images.

use image::{Rgba, RgbaImage};
use num::Complex;
use std::time::Instant;

use crate::error::RenderError;
use crate::escape::escape_within;
use crate::palette::Palette;
use crate::planes::{Pixel, PlaneMapper, Viewport};

const CHANNELS: usize = 4;

#[inline]
fn colour_at(plane: &PlaneMapper, palette: &Palette, pixel: &Pixel) -> Rgba<u8> {
    palette[escape_within(plane.pixel_to_point(pixel), palette.len())]
}

fn plane_for(width: u32, height: u32, center: Complex<f64>, radius: f64) -> PlaneMapper {
    PlaneMapper::new(width, height, Viewport { center, radius })
}

/// The raw escape counts for every pixel of a `width` by `height`
/// image, in row-major order.  Counts are in `0..limit`.
pub fn escape_counts(
    width: u32,
    height: u32,
    center: Complex<f64>,
    radius: f64,
    limit: usize,
) -> Vec<usize> {
    let plane = plane_for(width, height, center, radius);
    iproduct!(0..height, 0..width)
        .map(|(row, column)| escape_within(plane.pixel_to_point(&Pixel(column, row)), limit))
        .collect()
}

/// Render a `width` by `height` image of the viewport centered on
/// `center` with the given `radius`, on the calling thread.  The
/// palette's length is the iteration bound.  An image with no pixels
/// comes back empty.
pub fn generate(
    palette: &Palette,
    width: u32,
    height: u32,
    center: Complex<f64>,
    radius: f64,
) -> RgbaImage {
    let started = Instant::now();
    let plane = plane_for(width, height, center, radius);
    let mut image = RgbaImage::new(width, height);
    for (row, column) in iproduct!(0..height, 0..width) {
        image.put_pixel(column, row, colour_at(&plane, palette, &Pixel(column, row)));
    }
    debug!(
        "rendered {}x{} around {} (radius {}) in {:?}",
        width,
        height,
        center,
        radius,
        started.elapsed()
    );
    image
}

/// Paint one band of whole rows.  `pixels` is the band's slice of the
/// raw RGBA buffer and `first_row` the image row it starts at.
fn render_band(plane: &PlaneMapper, palette: &Palette, pixels: &mut [u8], first_row: usize) {
    let width = plane.integral_plane.0 as usize;
    for (i, rgba) in pixels.chunks_mut(CHANNELS).enumerate() {
        let pixel = Pixel((i % width) as u32, (first_row + i / width) as u32);
        rgba.copy_from_slice(&colour_at(plane, palette, &pixel).0);
    }
}

/// As `generate`, but with the rows shared out over `threads` scoped
/// threads.  Zero threads means one; there are never more threads
/// than rows.  The only failure is a render thread panicking.
pub fn generate_threaded(
    palette: &Palette,
    width: u32,
    height: u32,
    center: Complex<f64>,
    radius: f64,
    threads: usize,
) -> Result<RgbaImage, RenderError> {
    let started = Instant::now();
    let plane = plane_for(width, height, center, radius);
    let mut image = RgbaImage::new(width, height);
    if plane.is_empty() {
        return Ok(image);
    }

    let threads = threads.max(1).min(height as usize);
    let rows_per_band = (height as usize + threads - 1) / threads;
    let band_len = rows_per_band * width as usize * CHANNELS;

    {
        let plane = &plane;
        let bands: Vec<&mut [u8]> = image.chunks_mut(band_len).collect();
        debug!(
            "splitting {} rows into {} bands of up to {} rows",
            height,
            bands.len(),
            rows_per_band
        );
        crossbeam::scope(|spawner| {
            for (band, pixels) in bands.into_iter().enumerate() {
                spawner.spawn(move |_| {
                    render_band(plane, palette, pixels, band * rows_per_band);
                });
            }
        })
        .map_err(|_| RenderError::WorkerPanicked)?;
    }

    debug!(
        "rendered {}x{} around {} (radius {}) on {} threads in {:?}",
        width,
        height,
        center,
        radius,
        threads,
        started.elapsed()
    );
    Ok(image)
}
