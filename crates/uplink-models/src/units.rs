//! Decimal asset amount → integer minor units.
//!
//! Balance thresholds are written as human-readable BTC amounts
//! (`".0005"`) and carried in [`crate::BalanceThresholds`] as satoshi.
//! Parsing is exact: no floating point is involved.

use crate::error::ModelError;

/// Number of decimal places between BTC and satoshi.
pub const BTC_SCALE: u32 = 8;

/// Convert a decimal BTC amount to satoshi.
///
/// Accepts forms such as `"1"`, `"0.5"`, `".0005"` and `"0.00009"`.
/// Rejects signs, exponents, empty input and more than eight fractional
/// digits.
///
/// ```
/// use uplink_models::units::btc_to_satoshi;
///
/// assert_eq!(btc_to_satoshi(".0005").unwrap(), 50_000);
/// assert_eq!(btc_to_satoshi("0.00009").unwrap(), 9_000);
/// ```
pub fn btc_to_satoshi(amount: &str) -> Result<u64, ModelError> {
    to_minor_units(amount, BTC_SCALE)
}

/// Convert a decimal amount to an integer number of minor units at `scale`.
pub fn to_minor_units(amount: &str, scale: u32) -> Result<u64, ModelError> {
    let invalid = |reason: &str| ModelError::InvalidAmount {
        value: amount.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = amount.trim();
    let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("empty amount"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected decimal digits"));
    }
    let frac_len = u32::try_from(frac.len()).map_err(|_| invalid("amount too long"))?;
    if frac_len > scale {
        return Err(invalid(&format!("more than {scale} fractional digits")));
    }

    let overflow = || invalid("amount out of range");
    let multiplier = 10u64.checked_pow(scale).ok_or_else(overflow)?;
    let whole_units = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().map_err(|_| overflow())?
    };
    let frac_units = if frac.is_empty() {
        0
    } else {
        let padding = 10u64.checked_pow(scale - frac_len).ok_or_else(overflow)?;
        frac.parse::<u64>().map_err(|_| overflow())? * padding
    };

    whole_units
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(frac_units))
        .ok_or_else(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        assert_eq!(btc_to_satoshi(".0005").unwrap(), 50_000);
        assert_eq!(btc_to_satoshi(".0001").unwrap(), 10_000);
        assert_eq!(btc_to_satoshi("0.00009").unwrap(), 9_000);
    }

    #[test]
    fn whole_and_trailing_dot() {
        assert_eq!(btc_to_satoshi("2").unwrap(), 200_000_000);
        assert_eq!(btc_to_satoshi("2.").unwrap(), 200_000_000);
    }

    #[test]
    fn smallest_unit() {
        assert_eq!(btc_to_satoshi("0.00000001").unwrap(), 1);
    }

    #[test]
    fn rejects_excess_precision() {
        assert!(btc_to_satoshi("0.000000001").is_err());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", ".", "-1", "1e3", "0.5.1", "abc", "+1"] {
            assert!(btc_to_satoshi(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(btc_to_satoshi("999999999999999999").is_err());
    }

    #[test]
    fn other_scales() {
        assert_eq!(to_minor_units("1.5", 2).unwrap(), 150);
        assert_eq!(to_minor_units("7", 0).unwrap(), 7);
    }
}
