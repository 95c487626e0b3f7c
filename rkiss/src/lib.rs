//! RKISS - Deterministic Hash-Key Generator
//!
//! Seedable pseudo-random number generator for building Zobrist-style hash
//! keys. Fast, platform independent and bit-for-bit reproducible.
//!
//! # Architecture
//!
//! - **rng**: The generator and its typed draws
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. State is only ever changed by a draw
//! 3. Not cryptographically secure
//!
//! # Example
//! ```
//! use rkiss::Generator;
//!
//! let mut rng = Generator::default();
//! let mut piece_square = [[0u64; 64]; 12];
//! for keys in piece_square.iter_mut() {
//!     rng.fill(keys);
//! }
//! let side_to_move = rng.next_u64();
//! # let _ = side_to_move;
//! ```

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{FromDraw, Generator, DEFAULT_SEED};
