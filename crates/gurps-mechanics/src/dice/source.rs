//! Randomness sources for dice rolls.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// A uniform integer draw capability.
///
/// Every random decision in the engine goes through this trait, so tests
/// can replace the RNG with a scripted sequence.
pub trait RandomSource {
    /// Draw an integer uniformly from `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

impl RandomSource for StdRng {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

impl RandomSource for ThreadRng {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        (**self).draw(low, high)
    }
}

/// Pick one element of a non-empty slice uniformly.
///
/// Returns `None` for an empty slice without drawing.
pub fn choose<'a, T, S: RandomSource + ?Sized>(source: &mut S, items: &'a [T]) -> Option<&'a T> {
    let last = u32::try_from(items.len().checked_sub(1)?).ok()?;
    let index = source.draw(0, last) as usize;
    items.get(index)
}

/// A deterministic source that replays a fixed script of values.
///
/// Each draw takes the next scripted value and clamps it into the requested
/// range. The script starts over once exhausted; an empty script always
/// yields the lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<u32>,
    position: usize,
}

impl ScriptedSource {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            position: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.position
    }

    /// Returns true once every scripted value has been consumed at least once.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.clamp(low, high)
    }
}
