//! Tests for the settlement fee math

#[cfg(test)]
mod tests {

    use auction_admin::state::FeeConfig;
    use shared::constants::MAX_FEE_BPS;

    fn setup_fee_config(fee_bps: u64) -> FeeConfig {
        let mut fee_config = FeeConfig::default();
        fee_config.fee_bps = fee_bps;
        fee_config
    }

    #[test]
    fn test_calc_fee() {
        let fee_config = setup_fee_config(250);

        assert_eq!(fee_config.calc_fee(10_000).unwrap(), 250);

        // floor(999 * 250 / 10_000) = floor(24.975)
        assert_eq!(fee_config.calc_fee(999).unwrap(), 24);

        assert_eq!(fee_config.calc_fee(0).unwrap(), 0);
    }

    #[test]
    fn test_calc_fee_zero_rate() {
        let fee_config = setup_fee_config(0);

        assert_eq!(fee_config.calc_fee(1_000_000).unwrap(), 0);
    }

    #[test]
    fn test_fee_below_gross() {
        // at the rate cap the fee stays strictly below any non-zero gross
        let fee_config = setup_fee_config(MAX_FEE_BPS);

        for raw_gross_amount in [1u64, 2, 9, 10_000, u64::MAX] {
            let fee = fee_config.calc_fee(raw_gross_amount).unwrap();
            assert!(fee < raw_gross_amount);
        }
    }

    #[test]
    fn test_settlement_split_conserves_funds() {
        let fee_config = setup_fee_config(250);

        // a 5 SOL high bid in lamports
        let raw_gross_amount = 5_000_000_000u64;
        let fee = fee_config.calc_fee(raw_gross_amount).unwrap();
        let seller_amount = raw_gross_amount - fee;

        assert_eq!(fee, 125_000_000);
        assert_eq!(seller_amount, 4_875_000_000);
        assert_eq!(fee + seller_amount, raw_gross_amount);
    }
}
