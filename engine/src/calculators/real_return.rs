// Real (inflation-adjusted) return from a nominal return and an inflation rate.
use crate::error::FinanceError;
use shared::models::{ReturnInput, ReturnResult};

/// real = ((1 + nominal) / (1 + inflation)) - 1, with both rates given and
/// returned in percent.
///
/// Either rate may be negative. An inflation rate of exactly -100% zeroes
/// the denominator and is rejected. Both rates at zero is a valid input
/// (real = 0); see [`ReturnInput::is_trivial`] for callers that want to
/// skip showing it.
pub fn compute_real_return(input: &ReturnInput) -> Result<ReturnResult, FinanceError> {
    let nominal_percent = finite("nominal_rate_percent", input.nominal_rate_percent)?;
    let inflation_percent = finite("inflation_rate_percent", input.inflation_rate_percent)?;

    let nominal = nominal_percent / 100.0;
    let inflation = inflation_percent / 100.0;

    let denominator = 1.0 + inflation;
    if denominator == 0.0 {
        return Err(FinanceError::DivisionByZero { context: "1 + inflation rate" });
    }

    let real_percent = ((1.0 + nominal) / denominator - 1.0) * 100.0;
    if !real_percent.is_finite() {
        return Err(FinanceError::Overflow { context: "real return" });
    }
    Ok(ReturnResult {
        nominal_rate_percent: nominal_percent,
        inflation_rate_percent: inflation_percent,
        real_rate_percent: real_percent,
        inflation_drag_points: nominal_percent - real_percent,
    })
}

fn finite(field: &'static str, value: f64) -> Result<f64, FinanceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinanceError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::assert_close;

    fn rates(nominal: f64, inflation: f64) -> ReturnInput {
        ReturnInput { nominal_rate_percent: nominal, inflation_rate_percent: inflation }
    }

    #[test]
    fn test_real_return_eight_over_three() {
        let result = compute_real_return(&rates(8.0, 3.0)).unwrap();
        assert_close(result.real_rate_percent, (1.08 / 1.03 - 1.0) * 100.0);
        assert!((result.real_rate_percent - 4.854368).abs() < 1e-5);
        assert_close(result.nominal_rate_percent, 8.0);
        assert_close(result.inflation_rate_percent, 3.0);
        assert_close(result.inflation_drag_points, 8.0 - result.real_rate_percent);
    }

    #[test]
    fn test_ten_over_eight_is_about_1_85() {
        let result = compute_real_return(&rates(10.0, 8.0)).unwrap();
        assert!((result.real_rate_percent - 1.851852).abs() < 1e-5);
    }

    #[test]
    fn test_inflation_minus_100_is_division_by_zero() {
        for nominal in [-100.0, -5.0, 0.0, 8.0, 250.0] {
            let err = compute_real_return(&rates(nominal, -100.0)).unwrap_err();
            assert!(matches!(err, FinanceError::DivisionByZero { .. }), "nominal {}", nominal);
        }
    }

    #[test]
    fn test_zero_zero_is_valid() {
        let result = compute_real_return(&rates(0.0, 0.0)).unwrap();
        assert_eq!(result.real_rate_percent, 0.0);
        assert!(rates(0.0, 0.0).is_trivial());
    }

    #[test]
    fn test_deflation_raises_real_return() {
        let result = compute_real_return(&rates(2.0, -2.0)).unwrap();
        assert!(result.real_rate_percent > 2.0);
        assert!(result.inflation_drag_points < 0.0);
    }

    #[test]
    fn test_non_finite_rates_rejected() {
        assert!(matches!(
            compute_real_return(&rates(f64::NAN, 3.0)),
            Err(FinanceError::InvalidInput { field: "nominal_rate_percent", .. })
        ));
        assert!(matches!(
            compute_real_return(&rates(8.0, f64::NEG_INFINITY)),
            Err(FinanceError::InvalidInput { field: "inflation_rate_percent", .. })
        ));
    }

    #[test]
    fn test_overflowing_real_return_rejected() {
        let err = compute_real_return(&rates(1e308, -99.999999)).unwrap_err();
        assert_eq!(err, FinanceError::Overflow { context: "real return" });
    }

    #[test]
    fn test_repeated_calls_bit_identical() {
        let a = compute_real_return(&rates(7.3, 2.9)).unwrap();
        let b = compute_real_return(&rates(7.3, 2.9)).unwrap();
        assert_eq!(a.real_rate_percent.to_bits(), b.real_rate_percent.to_bits());
    }
}
