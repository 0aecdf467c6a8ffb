//! Random Source Port
//!
//! Abstract interface for the randomness behind simulated matches.

/// Source of uniform rolls in `[0, 1)`
pub trait RandomSource {
    /// Next roll in `[0, 1)`
    fn next_roll(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_roll(&mut self) -> f64 {
        (**self).next_roll()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_roll(&mut self) -> f64 {
        (**self).next_roll()
    }
}
