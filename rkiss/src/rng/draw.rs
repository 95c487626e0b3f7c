//! Typed views over a raw 64-bit draw
//!
//! A typed draw keeps the low-order bits of the raw word that fit the
//! requested type. Only integer types up to 64 bits wide implement
//! [`FromDraw`]; the trait is sealed, so asking for a `u128` is a compile
//! error instead of a silently zero-extended value.

mod sealed {
    pub trait Sealed {}
}

/// Integer types that can be produced from one raw 64-bit draw.
///
/// # Example
/// ```
/// use rkiss::Generator;
///
/// let mut rng = Generator::new(7);
/// let byte: u8 = rng.next();
/// let signed: i32 = rng.next();
/// # let _ = (byte, signed);
/// ```
///
/// Wider types are rejected at compile time:
/// ```compile_fail
/// use rkiss::Generator;
///
/// let mut rng = Generator::default();
/// let wide: u128 = rng.next();
/// ```
pub trait FromDraw: sealed::Sealed + Sized {
    /// Narrow a raw word to `Self`, keeping its low-order bits.
    fn from_draw(word: u64) -> Self;
}

macro_rules! impl_from_draw {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromDraw for $ty {
                #[inline]
                fn from_draw(word: u64) -> Self {
                    // `as` between integers truncates to the low bits
                    word as $ty
                }
            }
        )*
    };
}

impl_from_draw!(u8, u16, u32, u64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    const WORD: u64 = 0xA23F_7E20_75FC_0663;

    #[test]
    fn test_unsigned_keeps_low_bits() {
        assert_eq!(u8::from_draw(WORD), 0x63);
        assert_eq!(u16::from_draw(WORD), 0x0663);
        assert_eq!(u32::from_draw(WORD), 0x75FC_0663);
        assert_eq!(u64::from_draw(WORD), WORD);
    }

    #[test]
    fn test_signed_reinterprets_low_bits() {
        assert_eq!(i8::from_draw(WORD), 0x63);
        assert_eq!(i8::from_draw(0xFF), -1);
        assert_eq!(i16::from_draw(0x8000), i16::MIN);
        assert_eq!(i32::from_draw(0x1_FFFF_FFFF), -1);
        assert_eq!(i64::from_draw(WORD), WORD as i64);
        assert_eq!(i64::from_draw(u64::MAX), -1);
    }
}
