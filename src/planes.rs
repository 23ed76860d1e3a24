//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0
//! (the image) and a rectangle on the complex plane described by its
//! center and radius (the viewport).
use num::Complex;

use crate::error::RenderError;
use crate::DEFAULT_RADIUS;

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub u32, pub u32);

/// Describes the x, y of a pixel in an image.  Yes, it's the exact
/// same as an IntegralPlane. Names are important.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// The region of the complex plane being looked at.  The radius is
/// half the horizontal extent; the vertical extent follows from the
/// shape of the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// The point of the complex plane at the middle of the image.
    pub center: Complex<f64>,
    /// Half the width of the viewport, in plane units.
    pub radius: f64,
}

impl Viewport {
    /// A checked constructor: both components of the center must be
    /// finite, and the radius must be positive with a finite width.
    pub fn new(center: Complex<f64>, radius: f64) -> Result<Viewport, RenderError> {
        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(RenderError::NonFiniteCenter {
                re: center.re,
                im: center.im,
            });
        }
        if !(radius * 2.0).is_finite() || radius <= 0.0 {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(Viewport { center, radius })
    }

    /// The horizontal extent of the viewport.
    pub fn zoom_width(&self) -> f64 {
        self.radius * 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            center: Complex::new(0.0, 0.0),
            radius: DEFAULT_RADIUS,
        }
    }
}

/// Maps pixels of an image onto the complex plane.  Pixels are square
/// in plane units whatever the shape of the image, and each pixel is
/// sampled at its center rather than at its corner.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The lower-right hand corner of the image, exclusive.
    pub integral_plane: IntegralPlane,
    /// The region of the complex plane the image covers.
    pub viewport: Viewport,
    // Width (and height) of one pixel in plane units.
    pixel_size: f64,
    // The sampling point of pixel 0,0.
    top_left: Complex<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the image and the viewport to
    /// spread over it.  An image with no pixels is allowed; it simply
    /// has nothing to map.
    pub fn new(width: u32, height: u32, viewport: Viewport) -> PlaneMapper {
        let zoom_width = viewport.zoom_width();
        let pixel_size = zoom_width / f64::from(width);
        let view_height = (f64::from(height) / f64::from(width)) * zoom_width;
        let top_left = Complex::new(
            (viewport.center.re - zoom_width / 2.0) + pixel_size / 2.0,
            (viewport.center.im - view_height / 2.0) + pixel_size / 2.0,
        );

        PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            viewport,
            pixel_size,
            top_left,
        }
    }

    /// The total number of pixels in the image.
    pub fn len(&self) -> usize {
        self.integral_plane.0 as usize * self.integral_plane.1 as usize
    }

    /// Describes that the image has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The distance, in plane units, between two neighbouring samples.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Given a pixel of the image, return the point of the complex
    /// plane at its center.  The pixel is expected to lie inside the
    /// image; pixels outside it map to points outside the viewport.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.top_left.re + f64::from(pixel.0) * self.pixel_size,
            self.top_left.im + f64::from(pixel.1) * self.pixel_size,
        )
    }
}

/// Converts pixel `x, y` of an `img_width` by `img_height` image into
/// the point of the complex plane it samples, for a view centered on
/// `center` and `zoom_width` plane units wide.
pub fn pixel_to_point(
    center: Complex<f64>,
    x: u32,
    y: u32,
    img_width: u32,
    img_height: u32,
    zoom_width: f64,
) -> Complex<f64> {
    let viewport = Viewport {
        center,
        radius: zoom_width / 2.0,
    };
    PlaneMapper::new(img_width, img_height, viewport).pixel_to_point(&Pixel(x, y))
}
