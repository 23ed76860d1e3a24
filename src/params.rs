//! Turning loosely-typed request parameters into a render request.
//!
//! Nothing in here ever fails.  A parameter that is missing, doesn't
//! parse, or is out of range is replaced by its default, and the
//! request goes ahead.

use num::Complex;
use percent_encoding::percent_decode_str;
use std::str::FromStr;

use crate::error::RenderError;
use crate::planes::Viewport;
use crate::DEFAULT_RADIUS;

/// Parse `s` as a float, or give back `default`.  Non-finite values
/// ("NaN", "inf") count as unparseable.
pub fn safe_float(s: &str, default: f64) -> f64 {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() => f,
        _ => default,
    }
}

/// Parse `s` as an integer in `min..max`, or give back `default`.
pub fn safe_int(s: &str, min: i64, max: i64, default: i64) -> i64 {
    match i64::from_str(s) {
        Ok(i) if i >= min && i < max => i,
        _ => default,
    }
}

/// Given a string and a separator, returns the two values
/// separated by the separator, parsed with `safe_int` against the
/// same bounds and their own defaults.  Used for `WxH` sizes.
pub fn safe_pair(s: &str, separator: char, min: i64, max: i64, default: (i64, i64)) -> (i64, i64) {
    match s.find(separator) {
        None => default,
        Some(index) => (
            safe_int(&s[..index], min, max, default.0),
            safe_int(&s[index + 1..], min, max, default.1),
        ),
    }
}

/// The three numbers a render request carries: the center of the view
/// and its radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// Center of the view on the complex plane.
    pub center: Complex<f64>,
    /// Half the width of the view.  Always positive and finite.
    pub radius: f64,
}

impl Default for RenderRequest {
    fn default() -> Self {
        let viewport = Viewport::default();
        RenderRequest {
            center: viewport.center,
            radius: viewport.radius,
        }
    }
}

impl RenderRequest {
    /// Build a request from the raw `mx`, `my` and `radius` values,
    /// any of which may be absent.  A radius that isn't positive, or
    /// whose view width overflows, is treated like one that doesn't parse.
    pub fn from_values(mx: Option<&str>, my: Option<&str>, radius: Option<&str>) -> RenderRequest {
        let re = float_or_default("mx", mx, 0.0);
        let im = float_or_default("my", my, 0.0);
        let mut radius = float_or_default("radius", radius, DEFAULT_RADIUS);
        if radius <= 0.0 || !(radius * 2.0).is_finite() {
            warn!("radius {} is unusable, using {}", radius, DEFAULT_RADIUS);
            radius = DEFAULT_RADIUS;
        }
        RenderRequest {
            center: Complex::new(re, im),
            radius,
        }
    }

    /// Build a request from a URL query string such as
    /// `mx=-0.75&my=0.1&radius=0.5`.  Keys and values are URL-decoded
    /// (`%XX` escapes, `+` for space) and values trimmed.  A leading `?`
    /// is ignored, as are unknown keys; when a key repeats, the first
    /// value wins.
    pub fn from_query(query: &str) -> RenderRequest {
        let query = query.trim_start_matches('?');
        let mx = query_value(query, "mx");
        let my = query_value(query, "my");
        let radius = query_value(query, "radius");
        RenderRequest::from_values(mx.as_deref(), my.as_deref(), radius.as_deref())
    }

    /// The checked viewport this request asks for.
    pub fn viewport(&self) -> Result<Viewport, RenderError> {
        Viewport::new(self.center, self.radius)
    }
}

fn float_or_default(name: &str, value: Option<&str>, default: f64) -> f64 {
    let s = match value {
        None => return default,
        Some(s) => s,
    };
    let f = safe_float(s, std::f64::NAN);
    if f.is_nan() {
        warn!("could not parse {}={:?}, using {}", name, s, default);
        return default;
    }
    f
}

fn form_decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8_lossy();
    decoded.trim().to_string()
}

fn query_value(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| {
            pair.find('=')
                .map(|index| (&pair[..index], &pair[index + 1..]))
        })
        .find(|(k, _)| form_decode(k) == key)
        .map(|(_, v)| form_decode(v))
}
