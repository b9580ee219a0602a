/// Scale of wad fixed-point fractions and of a fully available magnitude.
pub const WAD: u64 = 1_000_000_000_000_000_000;

/// Round-up wad product: `ceil(magnitude * wad / 1e18)`.
///
/// This is the slashing arithmetic. Rounding up means the realized fraction
/// is never below the nominal one; whenever `magnitude * wad` is not an
/// exact multiple of 1e18 the result overshoots by one unit. The widened
/// return type carries products of out-of-range fractions without loss;
/// callers clamp against the available magnitude.
pub const fn mul_wad_up(magnitude: u64, wad: u64) -> u128 {
    (magnitude as u128 * wad as u128).div_ceil(WAD as u128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_products_do_not_round() {
        // 50% of a full wad of magnitude divides exactly.
        assert_eq!(mul_wad_up(WAD, WAD / 2), (WAD / 2) as u128);
        // 1% of 5e17 divides exactly.
        assert_eq!(
            mul_wad_up(500_000_000_000_000_000, 10_000_000_000_000_000),
            5_000_000_000_000_000
        );
    }

    #[test]
    fn inexact_products_round_up() {
        // 10% of 3 units: floor would be 0, the ceiling takes a whole unit.
        assert_eq!(mul_wad_up(3, 100_000_000_000_000_000), 1);
        // 1 wei of fraction against one unit still takes a whole unit.
        assert_eq!(mul_wad_up(1, 1), 1);
    }

    #[test]
    fn zero_fraction_takes_nothing() {
        assert_eq!(mul_wad_up(WAD, 0), 0);
        assert_eq!(mul_wad_up(0, WAD), 0);
    }

    #[test]
    fn full_fraction_takes_everything_exactly() {
        assert_eq!(mul_wad_up(123_456_789, WAD), 123_456_789);
        assert_eq!(mul_wad_up(u64::MAX, WAD), u64::MAX as u128);
    }

    proptest! {
        /// The result is the exact integer ceiling: at least the floor, at
        /// most one above it, and strictly above exactly when the product
        /// has a remainder.
        #[test]
        fn rounds_to_ceiling(magnitude in any::<u64>(), wad in 1..=WAD) {
            let product = magnitude as u128 * wad as u128;
            let floor = product / WAD as u128;
            let result = mul_wad_up(magnitude, wad);
            prop_assert!(result >= floor);
            prop_assert!(result <= floor + 1);
            prop_assert_eq!(result > floor, product % WAD as u128 != 0);
        }

        /// In-range fractions never take more than the full magnitude.
        #[test]
        fn in_range_fraction_is_bounded_by_magnitude(magnitude in any::<u64>(), wad in 1..=WAD) {
            prop_assert!(mul_wad_up(magnitude, wad) <= magnitude as u128);
        }
    }
}
