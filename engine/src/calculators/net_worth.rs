// Net worth: assets minus liabilities.
use super::sum_items;
use shared::models::{NetWorthInput, NetWorthResult};

/// Same summation contract as the budget; a negative net worth is valid.
pub fn compute_net_worth(input: &NetWorthInput) -> NetWorthResult {
    let total_assets = sum_items(&input.assets);
    let total_liabilities = sum_items(&input.liabilities);

    NetWorthResult {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
    }
}
