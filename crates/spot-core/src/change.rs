//! Percent change against the previously recorded price.

use crate::error::{CoreError, Result};
use crate::price::Price;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places the displayed percentage is rounded to.
const PERCENT_DECIMALS: u32 = 3;

/// Percentage change from `previous` to `current`.
///
/// Computed as `((current / previous) - 1) * 100`, rounded to 3 decimal
/// places with midpoints going away from zero. A zero previous price has
/// no defined change and yields `CoreError::ZeroBaseline`; callers decide
/// whether to surface or degrade it.
pub fn percent_change(previous: Price, current: Price) -> Result<Decimal> {
    if previous.is_zero() {
        return Err(CoreError::ZeroBaseline);
    }

    let change = (current.inner() / previous.inner() - Decimal::ONE) * Decimal::ONE_HUNDRED;
    Ok(change.round_dp_with_strategy(PERCENT_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
}
