//! The escape-time test at the heart of the Mandelbrot set.

use num::Complex;

use crate::{BAILOUT, MAX_ESCAPE};

/// This is our classic iterator function.  Starting from `z = c`, it
/// returns the iteration at which the orbit of `z = z * z + c` first
/// leaves the bailout circle, or `MAX_ESCAPE - 1` if it never does
/// within the bound.  The result is always in `0..MAX_ESCAPE`.
#[inline]
pub fn escape(c: Complex<f64>) -> usize {
    escape_within(c, MAX_ESCAPE)
}

/// As `escape`, but for an arbitrary number of escape counts.  The
/// result is always in `0..limit`, and `limit - 1` means "did not
/// escape".  A `limit` of zero is treated as one.
pub fn escape_within(c: Complex<f64>, limit: usize) -> usize {
    let last = limit.max(1) - 1;
    let mut z = c;
    for i in 0..last {
        if z.norm() > BAILOUT {
            return i;
        }
        z = z * z + c;
    }
    last
}
