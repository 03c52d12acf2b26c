//! Deterministic hash-based randomness for procedural geometry.
//!
//! Every value is a pure function of its key, so regenerating with the
//! same inputs reproduces the same geometry bit for bit on any platform.

/// splitmix64 finalizer
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Bit pattern of a float key, with -0.0 folded onto 0.0
fn float_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// A composable hash key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    pub const fn new(base: u64) -> Self {
        Self(base)
    }

    /// Fold an integer component into the key
    pub fn mix(self, value: u64) -> Self {
        Self(mix64(self.0.rotate_left(23) ^ value))
    }

    /// Fold a float component into the key
    pub fn mix_f64(self, value: f64) -> Self {
        self.mix(float_bits(value))
    }

    /// Uniform value in `[0, 1)` with 24 bits of precision
    pub fn unit(self) -> f32 {
        (mix64(self.0) >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform value in `[-0.5, 0.5)`
    pub fn centered(self) -> f32 {
        self.unit() - 0.5
    }
}

/// `seed -> [0, 1)`, pure and platform independent
pub fn seeded_random(seed: f64) -> f32 {
    Seed::new(0).mix_f64(seed).unit()
}
