//! RKISS random number generator
//!
//! A small, fast generator from the KISS family (Bob Jenkins' "small
//! noncryptographic PRNG" as tuned by Heinz van Saanen). Four 64-bit words
//! of state, one add/sub/xor/rotate round per draw, no warm-up tables.
//!
//! # Algorithm
//!
//! ```text
//! e  = a - rotl(b, 7)
//! a' = b ^ rotl(c, 13)
//! b' = c + rotl(d, 37)
//! c' = d + e
//! d' = e + a'            -> output
//! ```
//!
//! All arithmetic wraps modulo 2^64.
//!
//! # Determinism
//!
//! Same seed → same sequence on every platform. Hash keys derived from this
//! generator are therefore stable across builds, which is what makes saved
//! positions and transposition-table debugging reproducible.

use super::draw::FromDraw;
use rand_core::{impls, RngCore};

/// Seed used by [`Generator::default`].
pub const DEFAULT_SEED: u32 = 73;

const INIT_A: u64 = 0xF1EA_5EED;
const INIT_BCD: u64 = 0xD4E1_2C77;

/// Circular left shift by a compile-time amount in `1..=63`.
#[inline(always)]
const fn rotl<const K: u32>(x: u64) -> u64 {
    const { assert!(K > 0 && K < 64, "rotation amount must be in 1..=63") };
    (x << K) | (x >> (64 - K))
}

/// Deterministic RKISS generator
///
/// Not suitable for anything security related: the state can be recovered
/// from a handful of outputs.
///
/// # Example
/// ```
/// use rkiss::Generator;
///
/// let mut rng = Generator::new(73);
/// let key = rng.next_u64();
/// let low: u32 = rng.next();
/// # let _ = (key, low);
/// ```
///
/// The state words stay private:
/// ```compile_fail
/// use rkiss::Generator;
///
/// let rng = Generator::default();
/// let words = rng.words();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl Generator {
    /// Create a generator and scramble it with `seed` mixing rounds
    ///
    /// A seed of 0 leaves the state at the fixed initial constants.
    ///
    /// # Example
    /// ```
    /// use rkiss::Generator;
    ///
    /// const KEYS: Generator = Generator::new(73);
    /// assert_eq!(KEYS, Generator::default());
    /// ```
    pub const fn new(seed: u32) -> Self {
        let mut rng = Self::from_words([INIT_A, INIT_BCD, INIT_BCD, INIT_BCD]);
        let mut round = 0;
        while round < seed {
            rng = rng.mixed();
            round += 1;
        }
        rng
    }

    const fn from_words(words: [u64; 4]) -> Self {
        let [a, b, c, d] = words;
        Self { a, b, c, d }
    }

    #[cfg(test)]
    const fn words(&self) -> [u64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// One mixing round. Pure function of the current state.
    #[inline(always)]
    const fn mixed(&self) -> Self {
        let e = self.a.wrapping_sub(rotl::<7>(self.b));
        let a = self.b ^ rotl::<13>(self.c);
        let b = self.c.wrapping_add(rotl::<37>(self.d));
        let c = self.d.wrapping_add(e);
        let d = e.wrapping_add(a);
        Self { a, b, c, d }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        *self = self.mixed();
        self.d
    }

    /// Generate the next raw 64-bit value
    ///
    /// Advances the state exactly once.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.step()
    }

    /// Generate the next value narrowed to `T`
    ///
    /// Uses one raw draw and keeps the low-order bits that fit in `T`.
    #[inline]
    pub fn next<T: FromDraw>(&mut self) -> T {
        T::from_draw(self.step())
    }

    /// Low 32 bits of the next raw draw.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.next()
    }

    /// `const` analog of [`Generator::next_u64`], returning `(value, next_state)`.
    ///
    /// # Example
    /// ```
    /// use rkiss::Generator;
    ///
    /// const FIRST: u64 = Generator::new(73).const_next().0;
    /// assert_eq!(FIRST, Generator::default().next_u64());
    /// ```
    pub const fn const_next(self) -> (u64, Self) {
        let next = self.mixed();
        (next.d, next)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Takes the top 53 bits of one raw draw, so every representable
    /// mantissa is reachable.
    ///
    /// # Example
    /// ```
    /// use rkiss::Generator;
    ///
    /// let mut rng = Generator::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.step();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use rkiss::Generator;
    ///
    /// let mut rng = Generator::new(12345);
    /// let square = rng.range(0, 64);
    /// assert!((0..64).contains(&square));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let span = max.wrapping_sub(min) as u64;
        min.wrapping_add((self.step() % span) as i64)
    }

    /// Overwrite `dest` with consecutive raw draws.
    pub fn fill(&mut self, dest: &mut [u64]) {
        for slot in dest.iter_mut() {
            *slot = self.step();
        }
    }

    /// Returns an array of `N` consecutive raw draws.
    ///
    /// # Example
    /// ```
    /// use rkiss::Generator;
    ///
    /// let mut rng = Generator::default();
    /// let side_keys: [u64; 2] = rng.array();
    /// assert_ne!(side_keys[0], side_keys[1]);
    /// ```
    pub fn array<const N: usize>(&mut self) -> [u64; N] {
        let mut array = [0; N];
        self.fill(&mut array);
        array
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
