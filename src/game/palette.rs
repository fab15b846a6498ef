use rand::Rng;
use ratatui::style::Color;

use crate::constants::PALETTE_SIZE;

/// The six colors in play for the current game, addressed by index.
///
/// Entries are sampled independently, so two of them may collide; the
/// board only ever stores indices, never colors.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    pub fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut palette = Self::new([Color::Reset; PALETTE_SIZE]);
        palette.randomize(rng);
        palette
    }

    // Overwrites every entry with a fresh 24-bit RGB value
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for color in self.colors.iter_mut() {
            *color = Color::Rgb(rng.gen(), rng.gen(), rng.gen());
        }
    }

    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_palette_has_six_rgb_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = Palette::random(&mut rng);

        assert_eq!(palette.len(), PALETTE_SIZE);
        for index in 0..PALETTE_SIZE {
            assert!(matches!(palette.color(index), Some(Color::Rgb(..))));
        }
        assert_eq!(palette.color(PALETTE_SIZE), None);
    }

    #[test]
    fn randomize_is_reproducible_from_a_seed() {
        let a = Palette::random(&mut StdRng::seed_from_u64(42));
        let b = Palette::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let mut c = a;
        c.randomize(&mut StdRng::seed_from_u64(43));
        assert_ne!(a, c);
    }
}
