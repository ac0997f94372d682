//! Balance formatting helpers.  Whereas
//! [`crate::libs::base::client::BaseClient`] returns raw wei values,
//! these functions turn them into the human-readable strings the
//! session log prints.
use alloy::primitives::U256;

const ETH_DECIMALS: u8 = 18;

/// Format a raw wei balance as ETH.  The fractional part keeps only
/// significant digits; a whole-number balance prints with no decimal
/// point at all.
pub fn format_eth(wei: U256) -> String {
    let denom = U256::from(10u64).pow(U256::from(ETH_DECIMALS as u64));
    let whole = wei / denom;
    let frac = wei % denom;

    if frac.is_zero() {
        return whole.to_string();
    }

    let mut frac_str = pad_fraction(frac, ETH_DECIMALS);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}")
}

/// Format a raw token balance against the token's declared decimal
/// count.  The fractional remainder is zero-padded to exactly
/// `decimals` digits and never trimmed, so the printed precision
/// always matches what the contract declares.  A token with zero
/// decimals has no meaningful fractional part and prints as a bare
/// integer.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    let denom = U256::from(10u64).pow(U256::from(decimals as u64));
    let whole = amount / denom;
    let frac = amount % denom;

    format!("{whole}.{}", pad_fraction(frac, decimals))
}

fn pad_fraction(frac: U256, decimals: u8) -> String {
    let digits = frac.to_string();
    let width = decimals as usize;
    if digits.len() >= width {
        digits
    } else {
        let mut out = String::with_capacity(width);
        for _ in 0..width - digits.len() {
            out.push('0');
        }
        out.push_str(&digits);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eth_trims_trailing_zeros() {
        let wei = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_eth(wei), "1.5");
    }

    #[test]
    fn eth_whole_balance_has_no_point() {
        let wei = U256::from(2_000_000_000_000_000_000u128);
        assert_eq!(format_eth(wei), "2");
        assert_eq!(format_eth(U256::ZERO), "0");
    }

    #[test]
    fn eth_preserves_leading_fraction_zeros() {
        let wei = U256::from(1_000_000_000u64); // 1 gwei
        assert_eq!(format_eth(wei), "0.000000001");
    }

    #[test]
    fn units_zero_pads_to_declared_decimals() {
        let bal = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_units(bal, 18), "1.500000000000000000");
    }

    #[test]
    fn units_six_decimals() {
        assert_eq!(format_units(U256::from(1_234_567u64), 6), "1.234567");
    }

    #[test]
    fn units_zero_balance_keeps_declared_width() {
        assert_eq!(format_units(U256::ZERO, 6), "0.000000");
    }

    #[test]
    fn units_zero_decimals_prints_bare_integer() {
        assert_eq!(format_units(U256::from(42u64), 0), "42");
    }

    #[test]
    fn units_survives_values_beyond_u128() {
        // 10^60, far above u128::MAX
        let big = U256::from(10u64).pow(U256::from(60u64));
        let s = format_units(big, 18);
        assert!(s.contains('.'));
        assert_eq!(s.split('.').nth(1).unwrap().len(), 18);
    }
}
