use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{RenderError, Result, TokenSide};

/// Pool balances of the two tokens.
///
/// Zero balances are accepted and mean "not funded yet": the render pass
/// aborts before drawing anything. Non-finite or negative values are
/// rejected outright at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolReserves {
    token_a: f64,
    token_b: f64,
}

impl PoolReserves {
    pub fn new(token_a: f64, token_b: f64) -> Result<Self> {
        check_quantity("reserveA", token_a)?;
        check_quantity("reserveB", token_b)?;
        Ok(Self { token_a, token_b })
    }

    pub fn token_a(&self) -> f64 {
        self.token_a
    }

    pub fn token_b(&self) -> f64 {
        self.token_b
    }

    /// Both balances funded; nothing is drawn until then
    pub fn is_ready(&self) -> bool {
        self.token_a > 0.0 && self.token_b > 0.0
    }

    /// The invariant constant `k = reserveA * reserveB`
    pub fn product(&self) -> f64 {
        self.token_a * self.token_b
    }
}

/// Proposed one-sided deposits. Each positive amount independently
/// requests one overlay; both may be set to compare two hypothetical
/// swaps in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SwapAmounts {
    amount_a: f64,
    amount_b: f64,
}

impl SwapAmounts {
    pub fn new(amount_a: f64, amount_b: f64) -> Result<Self> {
        check_quantity("amountToSwapA", amount_a)?;
        check_quantity("amountToSwapB", amount_b)?;
        Ok(Self { amount_a, amount_b })
    }

    pub fn token_a_in(amount: f64) -> Result<Self> {
        Self::new(amount, 0.0)
    }

    pub fn token_b_in(amount: f64) -> Result<Self> {
        Self::new(0.0, amount)
    }

    pub fn amount_a(&self) -> f64 {
        self.amount_a
    }

    pub fn amount_b(&self) -> f64 {
        self.amount_b
    }
}

fn check_quantity(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RenderError::invalid_input(
            field,
            format!("must be finite, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(RenderError::invalid_input(
            field,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

/// Projected pool state after depositing one token into the pool,
/// holding `newReserveA * newReserveB = k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapProjection {
    /// Side of the pool the deposit goes into
    pub side: TokenSide,
    pub new_reserve_a: f64,
    pub new_reserve_b: f64,
    /// Quantity the swapper receives, rounded to 4 decimals for display
    pub output: Decimal,
}

impl SwapProjection {
    /// Deposit `amount_in` of token A; token B is withdrawn to hold `k`.
    pub fn token_a_in(reserves: &PoolReserves, amount_in: f64) -> Self {
        let k = reserves.product();
        let new_reserve_a = reserves.token_a() + amount_in;
        let new_reserve_b = k / new_reserve_a;
        Self {
            side: TokenSide::TokenA,
            new_reserve_a,
            new_reserve_b,
            output: quote(amount_in * reserves.token_b() / new_reserve_a),
        }
    }

    /// Deposit `amount_in` of token B; token A is withdrawn to hold `k`.
    pub fn token_b_in(reserves: &PoolReserves, amount_in: f64) -> Self {
        let k = reserves.product();
        let new_reserve_b = reserves.token_b() + amount_in;
        let new_reserve_a = k / new_reserve_b;
        Self {
            side: TokenSide::TokenB,
            new_reserve_a,
            new_reserve_b,
            output: quote(amount_in * reserves.token_a() / new_reserve_b),
        }
    }

    /// The token the swapper receives
    pub fn output_side(&self) -> TokenSide {
        self.side.other()
    }

    /// Label drawn next to the projected point, eg "9.0909 TokenB output"
    pub fn label(&self) -> String {
        format!("{} {} output", self.output, self.output_side())
    }
}

/// Round a displayed quantity to 4 decimals, midpoint away from zero
fn quote(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_reserves_reject_bad_values() {
        assert!(PoolReserves::new(f64::NAN, 100.0).is_err());
        assert!(PoolReserves::new(100.0, f64::INFINITY).is_err());
        assert!(PoolReserves::new(-1.0, 100.0).is_err());
        assert!(SwapAmounts::new(-0.5, 0.0).is_err());
        assert!(SwapAmounts::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_zero_reserve_is_not_ready() -> Result<()> {
        let reserves = PoolReserves::new(0.0, 100.0)?;
        assert!(!reserves.is_ready());
        let reserves = PoolReserves::new(100.0, 100.0)?;
        assert!(reserves.is_ready());
        Ok(())
    }

    #[test]
    fn test_invariant_preserved_by_projection() -> Result<()> {
        let reserves = PoolReserves::new(100.0, 100.0)?;
        let k = reserves.product();
        let projection = SwapProjection::token_a_in(&reserves, 10.0);
        let new_k = projection.new_reserve_a * projection.new_reserve_b;
        assert!(((new_k - k) / k).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_token_a_in_scenario() -> Result<()> {
        // 100/100 pool, deposit 10 A: k=10000, newA=110, newB=90.9090...
        let reserves = PoolReserves::new(100.0, 100.0)?;
        let projection = SwapProjection::token_a_in(&reserves, 10.0);
        assert_eq!(projection.new_reserve_a, 110.0);
        assert!((projection.new_reserve_b - 10000.0 / 110.0).abs() < 1e-12);
        assert_eq!(projection.output, dec!(9.0909));
        assert_eq!(projection.label(), "9.0909 TokenB output");
        Ok(())
    }

    #[test]
    fn test_token_b_in_scenario() -> Result<()> {
        let reserves = PoolReserves::new(100.0, 100.0)?;
        let projection = SwapProjection::token_b_in(&reserves, 20.0);
        assert_eq!(projection.new_reserve_b, 120.0);
        assert_eq!(projection.output, dec!(16.6667));
        assert_eq!(projection.label(), "16.6667 TokenA output");
        Ok(())
    }

    #[test]
    fn test_output_matches_reserve_delta() -> Result<()> {
        // amountIn * reserveB / newReserveA equals reserveB - newReserveB
        let reserves = PoolReserves::new(250.0, 800.0)?;
        let projection = SwapProjection::token_a_in(&reserves, 37.5);
        let delta = reserves.token_b() - projection.new_reserve_b;
        let output = quote(delta);
        assert_eq!(projection.output, output);
        Ok(())
    }

    #[test]
    fn test_quote_strips_trailing_zeros() {
        assert_eq!(quote(10.0).to_string(), "10");
        assert_eq!(quote(9.09090909).to_string(), "9.0909");
        assert_eq!(quote(16.66666667).to_string(), "16.6667");
    }
}
