//! Errors raised around the rendering core.  The core itself (escape,
//! coordinate mapping, single-threaded generation) cannot fail; these
//! cover viewport validation, the worker threads, and encoding.

use failure::Fail;
use std::io;

/// Everything that can go wrong between a request and a PNG.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The viewport center has a NaN or infinite component.
    #[fail(display = "viewport center {}+{}i is not finite", re, im)]
    NonFiniteCenter {
        /// Real component of the rejected center.
        re: f64,
        /// Imaginary component of the rejected center.
        im: f64,
    },

    /// The viewport radius is zero, negative, or not finite.
    #[fail(display = "viewport radius {} must be a positive, finite number", _0)]
    InvalidRadius(f64),

    /// One of the render threads panicked before finishing its band.
    #[fail(display = "a render thread panicked")]
    WorkerPanicked,

    /// The PNG encoder, or the file it writes to, failed.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            RenderError::InvalidRadius(-1.5).to_string(),
            "viewport radius -1.5 must be a positive, finite number"
        );
        let err = RenderError::NonFiniteCenter {
            re: std::f64::NAN,
            im: 0.0,
        };
        assert_eq!(err.to_string(), "viewport center NaN+0i is not finite");
    }

    #[test]
    fn io_errors_are_wrapped() {
        let err: RenderError = io::Error::new(io::ErrorKind::Other, "disk full").into();
        assert!(err.cause().is_some());
        assert_eq!(err.to_string(), "could not write image: disk full");
    }
}
