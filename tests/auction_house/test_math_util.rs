//! Tests for the Decimal math core

#[cfg(test)]
mod tests {

    use shared::errors::ErrorCode;
    use shared::utils::Decimal;
    use spl_math::uint::U256;

    mod basic_operations {

        use super::*;

        #[test]
        fn test_constants() {
            assert!(Decimal::ZERO.is_zero());
            assert_eq!(Decimal::ONE.0, U256::from(1u64));
        }

        #[test]
        fn test_from_conversions() {
            let num_u64 = Decimal::from_raw(100u64);
            assert_eq!(num_u64.0, U256::from(100u64));

            let num_u128 = Decimal::from_raw(100u128);
            assert_eq!(num_u128.0, U256::from(100u128));

            let num_u256 = Decimal::from_raw(U256::from(100u64));
            assert_eq!(num_u256.0, U256::from(100u64));
        }

        #[test]
        fn test_basic_arithmetic() {
            let a = Decimal::from_raw(100u64);
            let b = Decimal::from_raw(50u64);

            assert_eq!(a.add(&b).unwrap(), Decimal::from_raw(150u64));
            assert_eq!(a.sub(&b).unwrap(), Decimal::from_raw(50u64));
            assert_eq!(a.mul(&b).unwrap(), Decimal::from_raw(5000u64));
            assert_eq!(a.div(&b).unwrap(), Decimal::from_raw(2u64));
        }

        #[test]
        fn test_div_truncates_toward_zero() {
            let a = Decimal::from_raw(7u64);
            let b = Decimal::from_raw(2u64);

            assert_eq!(a.div(&b).unwrap(), Decimal::from_raw(3u64));
        }

        #[test]
        fn test_sub_underflow() {
            let a = Decimal::from_raw(1u64);
            let b = Decimal::from_raw(2u64);

            assert_eq!(a.sub(&b).err(), Some(ErrorCode::MathOverflow.into()));
        }

        #[test]
        fn test_div_by_zero() {
            let a = Decimal::from_raw(100u64);

            assert_eq!(
                a.div(&Decimal::ZERO).err(),
                Some(ErrorCode::MathOverflow.into())
            );
        }
    }

    mod pow_operations {

        use super::*;

        #[test]
        fn test_pow10() {
            assert_eq!(Decimal::pow10(0).unwrap(), Decimal::ONE);
            assert_eq!(Decimal::pow10(1).unwrap(), Decimal::from_raw(10u64));
            assert_eq!(
                Decimal::pow10(18).unwrap(),
                Decimal::from_raw(1_000_000_000_000_000_000u64)
            );
        }

        #[test]
        fn test_pow10_beyond_u64() {
            // 10^38 exceeds u64 range and must land in the U256 backing intact
            let value = Decimal::pow10(38).unwrap();
            assert_eq!(
                value,
                Decimal::from_raw(100_000_000_000_000_000_000_000_000_000_000_000_000u128)
            );
        }
    }

    mod ordering_operations {

        use super::*;

        #[test]
        fn test_ordering() {
            let small = Decimal::from_raw(100u64);
            let large = Decimal::from_raw(200u64);

            assert!(small < large);
            assert!(large > small);
            assert_eq!(small, Decimal::from_raw(100u64));
        }

        #[test]
        fn test_wide_products_stay_comparable() {
            // u64::MAX * u64::MAX overflows u128 but not the U256 backing
            let a = Decimal::from_raw(u64::MAX).mul(&Decimal::from_raw(u64::MAX)).unwrap();
            let b = Decimal::from_raw(u64::MAX).mul(&Decimal::from_raw(u64::MAX - 1)).unwrap();

            assert!(a > b);
        }
    }

    mod narrowing_operations {

        use super::*;

        #[test]
        fn test_to_u128_saturating() {
            assert_eq!(Decimal::from_raw(100u64).to_u128_saturating(), 100);
            assert_eq!(Decimal::from_raw(u128::MAX).to_u128_saturating(), u128::MAX);

            let oversized = Decimal::from_raw(u128::MAX)
                .mul(&Decimal::from_raw(2u64))
                .unwrap();
            assert_eq!(oversized.to_u128_saturating(), u128::MAX);
        }
    }
}
