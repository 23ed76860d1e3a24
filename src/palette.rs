//! A table of colours, one per escape count.
//!
//! The palette is built once, when the process starts, and only read
//! afterwards.  It is shared between concurrent renders by plain
//! reference (or `Arc`), never through a global.

use image::Rgba;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Index;

use crate::MAX_ESCAPE;

/// Fully transparent black.  Reserved for points that never escape,
/// i.e. the points considered to be inside the set.
pub const ESCAPE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// An immutable lookup table from escape count to colour.  Every entry
/// but the last is a random opaque colour; the last one, the count
/// reported for points that did not escape, is `ESCAPE_COLOR`.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colours: Vec<Rgba<u8>>,
}

impl Palette {
    /// A palette of `MAX_ESCAPE` colours drawn from the thread-local
    /// generator.  Two calls give two different palettes.
    pub fn random() -> Palette {
        Palette::from_rng(&mut rand::thread_rng())
    }

    /// A palette of `MAX_ESCAPE` colours that depends only on `seed`.
    pub fn seeded(seed: u64) -> Palette {
        Palette::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// A palette of `MAX_ESCAPE` colours drawn from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Palette {
        Palette::with_limit(rng, MAX_ESCAPE)
    }

    /// A palette with one colour per escape count in `0..limit`.  The
    /// palette always has at least the reserved entry.
    pub fn with_limit<R: Rng + ?Sized>(rng: &mut R, limit: usize) -> Palette {
        let limit = limit.max(1);
        let colours = (0..limit)
            .map(|i| {
                if i == limit - 1 {
                    ESCAPE_COLOR
                } else {
                    Rgba([rng.gen(), rng.gen(), rng.gen(), 255])
                }
            })
            .collect();
        Palette { colours }
    }

    /// The number of colours, which is also the iteration bound used
    /// when rendering with this palette.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Never true; a palette has at least the reserved entry.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// The colour for an escape count, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Rgba<u8>> {
        self.colours.get(index).cloned()
    }

    /// The colour given to points that never escaped.
    pub fn inside(&self) -> Rgba<u8> {
        self.colours[self.colours.len() - 1]
    }
}

impl Index<usize> for Palette {
    type Output = Rgba<u8>;

    fn index(&self, index: usize) -> &Rgba<u8> {
        &self.colours[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_one_colour_per_escape_count() {
        let palette = Palette::random();
        assert_eq!(palette.len(), MAX_ESCAPE);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(MAX_ESCAPE), None);
    }

    #[test]
    fn last_entry_is_reserved() {
        let palette = Palette::seeded(7);
        assert_eq!(palette[MAX_ESCAPE - 1], ESCAPE_COLOR);
        assert_eq!(palette.inside(), ESCAPE_COLOR);
    }

    #[test]
    fn other_entries_are_opaque() {
        let palette = Palette::random();
        for i in 0..MAX_ESCAPE - 1 {
            assert_eq!(palette[i].0[3], 255);
        }
    }

    #[test]
    fn lookups_are_stable() {
        let palette = Palette::random();
        let before = palette.clone();
        for _ in 0..3 {
            crate::render::generate(&palette, 16, 12, num::Complex::new(-0.5, 0.0), 1.5);
        }
        for i in 0..MAX_ESCAPE {
            assert_eq!(palette[i], before[i]);
            assert_eq!(palette.get(i), Some(before[i]));
        }
        assert_eq!(palette, before);
    }

    #[test]
    fn seeds_are_reproducible() {
        assert_eq!(Palette::seeded(42), Palette::seeded(42));
        assert_ne!(Palette::seeded(42), Palette::seeded(43));
    }

    #[test]
    fn tiny_palettes() {
        let mut rng = StdRng::seed_from_u64(1);
        let palette = Palette::with_limit(&mut rng, 0);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0], ESCAPE_COLOR);

        let palette = Palette::with_limit(&mut rng, 3);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[2], ESCAPE_COLOR);
        assert_eq!(palette[0].0[3], 255);
    }
}
