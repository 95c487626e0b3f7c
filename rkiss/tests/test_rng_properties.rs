//! Property tests for the generator

use proptest::prelude::*;
use rkiss::Generator;

proptest! {
    #[test]
    fn prop_same_seed_same_sequence(seed in 0u32..2000) {
        let mut rng1 = Generator::new(seed);
        let mut rng2 = Generator::new(seed);
        for _ in 0..64 {
            prop_assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn prop_seed_counts_scrambling_rounds(seed in 0u32..500) {
        let mut stepped = Generator::new(0);
        for _ in 0..seed {
            stepped.next_u64();
        }
        prop_assert_eq!(stepped, Generator::new(seed));
    }

    #[test]
    fn prop_narrowing_keeps_low_bits(seed in 0u32..1000) {
        let raw = Generator::new(seed).next_u64();
        prop_assert_eq!(Generator::new(seed).next::<u32>(), raw as u32);
        prop_assert_eq!(Generator::new(seed).next::<u16>(), (raw & 0xFFFF) as u16);
        prop_assert_eq!(Generator::new(seed).next::<i8>(), (raw & 0xFF) as u8 as i8);
    }

    #[test]
    fn prop_range_within_bounds(seed in 0u32..1000, min in any::<i64>(), width in 1i64..1_000_000) {
        let max = min.saturating_add(width);
        prop_assume!(min < max);
        let value = Generator::new(seed).range(min, max);
        prop_assert!(value >= min && value < max);
    }
}
