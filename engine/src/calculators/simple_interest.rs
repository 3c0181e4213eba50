// Simple (non-compounding) interest on a principal.
use crate::error::FinanceError;
use shared::models::{SimpleInterestInput, SimpleInterestResult};

/// interest = principal * rate% * years / 100.
///
/// Every field must be strictly positive; the first one that is not
/// (checked in the order principal, rate, years) is reported.
pub fn compute_simple_interest(input: &SimpleInterestInput) -> Result<SimpleInterestResult, FinanceError> {
    require_positive("principal", input.principal)?;
    require_positive("annual_rate_percent", input.annual_rate_percent)?;
    require_positive("years", input.years)?;

    let interest = input.principal * input.annual_rate_percent * input.years / 100.0;
    let total_amount = input.principal + interest;
    let growth_percent = interest / input.principal * 100.0;
    if !(interest.is_finite() && total_amount.is_finite() && growth_percent.is_finite()) {
        return Err(FinanceError::Overflow { context: "interest" });
    }

    Ok(SimpleInterestResult {
        interest,
        total_amount,
        growth_percent,
    })
}

fn require_positive(field: &'static str, value: f64) -> Result<(), FinanceError> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FinanceError::InvalidInput { field, value })
    }
}
