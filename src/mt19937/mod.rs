//! MT19937 pseudo-random number generator with 31-bit output.
//!
//! Implements the classic Mersenne Twister of Matsumoto and Nishimura
//! (MT19937, 32-bit word, degree 624) with the standard Knuth-multiplier
//! seeding, exposed through the 31-bit output convention of the widely
//! copied JavaScript `MersenneTwister.random_int31()` (the full 32-bit
//! word shifted right by one). Word selection depends on this exact bit
//! stream, so the seeding and tempering constants must not be altered.

/// Degree of recurrence (state size in 32-bit words).
const N: usize = 624;

/// Middle word offset of the recurrence.
const M: usize = 397;

/// Coefficients of the rational normal form twist matrix.
const MATRIX_A: u32 = 0x9908_B0DF;

/// Most significant bit of a state word.
const UPPER_MASK: u32 = 0x8000_0000;

/// Least significant 31 bits of a state word.
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Knuth multiplier used for state initialization.
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// A deterministic source of 31-bit pseudo-random integers.
///
/// Implementations must advance internal state by exactly one step per
/// call and return values in `[0, 2^31 - 1]`, with the full output
/// stream determined by the seed. Any generator satisfying this
/// contract can drive word selection, but swapping generators changes
/// the words derived from every previously issued seed.
pub trait Int31Source {
    /// Return the next pseudo-random integer in `[0, 2^31 - 1]`.
    fn next_int31(&mut self) -> u32;
}

/// MT19937 generator state.
///
/// Each call site seeds its own instance; there is no process-wide
/// generator. Not cryptographically secure.
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Create a generator seeded with `seed`.
    ///
    /// The same seed always produces the same output stream.
    ///
    /// # Arguments
    /// * `seed` - 32-bit seed value.
    ///
    /// # Returns
    /// A freshly seeded `Mt19937`.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(state[i - 1] ^ (state[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        // index == N forces a twist before the first extraction.
        Mt19937 { state, index: N }
    }

    /// Regenerate the full state array (the "twist" step).
    fn twist(&mut self) {
        for i in 0..N {
            let x = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= MATRIX_A;
            }
            self.state[i] = self.state[(i + M) % N] ^ x_a;
        }
        self.index = 0;
    }

    /// Extract the next tempered 32-bit value.
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^ (y >> 18)
    }
}

impl Int31Source for Mt19937 {
    fn next_int31(&mut self) -> u32 {
        self.next_u32() >> 1
    }
}
