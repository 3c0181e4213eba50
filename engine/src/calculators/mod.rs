// Finance calculators. Every function here is pure: no I/O, no logging, no
// shared state, so identical inputs always give bit-identical results.
pub mod cash_flow;
pub mod health;
pub mod net_worth;
pub mod projection;
pub mod real_return;
pub mod simple_interest;

pub use cash_flow::{compute_budget, expense_breakdown};
pub use health::assess_health;
pub use net_worth::compute_net_worth;
pub use projection::{project, project_future_net_worth};
pub use real_return::compute_real_return;
pub use simple_interest::compute_simple_interest;

use shared::models::LineItem;

/// Plain sum of the item amounts; an empty list sums to zero.
pub(crate) fn sum_items(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}
