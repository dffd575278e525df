//! Endless symbol streams for the slot reels
//!
//! A [`ValueGenerator`] shuffles its alphabet once at construction and then
//! cycles through that fixed order forever. A [`SlotsGenerator`] advances one
//! independent value generator per slot in lockstep.

use rand::Rng;

use super::shuffle::shuffled;

/// Infinite stream over one shuffled copy of an alphabet
#[derive(Debug, Clone)]
pub struct ValueGenerator<T> {
    order: Vec<T>,
    cursor: usize,
}

impl<T: Clone> ValueGenerator<T> {
    /// Shuffle `alphabet` with the thread RNG
    pub fn new(alphabet: &[T]) -> Self {
        Self::with_rng(alphabet, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(alphabet: &[T], rng: &mut R) -> Self {
        Self {
            order: shuffled(alphabet, rng),
            cursor: 0,
        }
    }

    /// The shuffled order this generator cycles through
    #[allow(dead_code)]
    pub fn order(&self) -> &[T] {
        &self.order
    }
}

impl<T: Clone> Iterator for ValueGenerator<T> {
    type Item = T;

    /// Yields `None` only when the alphabet is empty
    fn next(&mut self) -> Option<T> {
        let value = self.order.get(self.cursor)?.clone();
        self.cursor = (self.cursor + 1) % self.order.len();
        Some(value)
    }
}

/// Composite stream yielding one symbol per slot on every pull
#[derive(Debug, Clone)]
pub struct SlotsGenerator<T> {
    reels: Vec<ValueGenerator<T>>,
}

impl<T: Clone> SlotsGenerator<T> {
    pub fn new(alphabet: &[T], slot_count: usize) -> Self {
        Self::with_rng(alphabet, slot_count, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(alphabet: &[T], slot_count: usize, rng: &mut R) -> Self {
        let reels = (0..slot_count)
            .map(|_| ValueGenerator::with_rng(alphabet, rng))
            .collect();
        Self { reels }
    }

    #[allow(dead_code)]
    pub fn slot_count(&self) -> usize {
        self.reels.len()
    }

    /// Shuffled order of every reel, in slot order
    #[allow(dead_code)]
    pub fn reel_orders(&self) -> Vec<Vec<T>> {
        self.reels.iter().map(|reel| reel.order().to_vec()).collect()
    }
}

impl<T: Clone> Iterator for SlotsGenerator<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        // Every reel advances exactly once, in slot order
        self.reels.iter_mut().map(|reel| reel.next()).collect()
    }
}
