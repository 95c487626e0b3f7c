//! Deterministic random number generation
//!
//! Uses the RKISS algorithm for fast, platform-independent hash keys.
//! CRITICAL: Same seed MUST produce the same keys on every build.

mod draw;
mod rkiss;

pub use draw::FromDraw;
pub use rkiss::{Generator, DEFAULT_SEED};
