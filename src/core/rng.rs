//! RNG module - seeded generator for apple placement
//!
//! A tiny xorshift32 keeps the core dependency-free and runs reproducible:
//! the same seed yields the same apple sequence, which the tests rely on.

/// Xorshift32 pseudo-random generator
#[derive(Debug, Clone)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Xorshift has a fixed point at 0.
        let state = if seed == 0 { 0x9e37_79b9 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Generate random value in range [0, max); `max` must be nonzero
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}
