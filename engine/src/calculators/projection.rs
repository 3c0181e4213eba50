// Linear projection of net worth from a steady monthly surplus.
use shared::models::ProjectionResult;

/// current + monthly * 12 * years. No growth on savings is assumed.
///
/// Only meaningful for a positive `monthly_cash_flow`; the range of `years`
/// is the caller's business. Prefer [`project`] when the cash flow may be a
/// deficit.
pub fn project_future_net_worth(monthly_cash_flow: f64, current_net_worth: f64, years: u32) -> f64 {
    current_net_worth + future_savings(monthly_cash_flow, years)
}

/// `None` when there is no surplus to project.
pub fn project(monthly_cash_flow: f64, current_net_worth: f64, years: u32) -> Option<ProjectionResult> {
    if monthly_cash_flow <= 0.0 {
        return None;
    }

    Some(ProjectionResult {
        years,
        future_savings: future_savings(monthly_cash_flow, years),
        projected_net_worth: project_future_net_worth(monthly_cash_flow, current_net_worth, years),
    })
}

fn future_savings(monthly_cash_flow: f64, years: u32) -> f64 {
    monthly_cash_flow * 12.0 * years as f64
}
