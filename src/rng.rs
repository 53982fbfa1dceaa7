use rand::RngCore;

use crate::config::DEFAULT_SEED;

/// Deterministic 32-bit linear congruential generator.
///
/// Reproduces the apple-placement recurrence of the board firmware this
/// crate simulates: `seed = seed * 1103515245 + 12345` with wrapping 32-bit
/// arithmetic, output `(seed / 65536) % 32768`. With the default seed the
/// apple sequence is identical on every run, which the integration tests
/// rely on.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    /// Creates a generator from an explicit seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Advances the seed and returns the next 15-bit output.
    pub fn raw_draw(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (self.seed / 65_536) % 32_768
    }

    /// Returns a draw reduced modulo `max`.
    pub fn bounded(&mut self, max: u32) -> u32 {
        self.raw_draw() % max
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.raw_draw()
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.raw_draw()) << 32) | u64::from(self.raw_draw())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.raw_draw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
