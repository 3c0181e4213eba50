// Monthly budget: income against expenses.
use super::sum_items;
use shared::models::{BudgetInput, BudgetResult, ExpenseShare, LineItem};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Never fails: empty lists sum to zero and a deficit is a valid result.
pub fn compute_budget(input: &BudgetInput) -> BudgetResult {
    let total_income = sum_items(&input.income);
    let total_expenses = sum_items(&input.expenses);
    let monthly_cash_flow = total_income - total_expenses;

    BudgetResult {
        total_income,
        total_expenses,
        monthly_cash_flow,
        annual_cash_flow: monthly_cash_flow * MONTHS_PER_YEAR,
    }
}

/// Share of each non-zero expense in the total, in input order.
pub fn expense_breakdown(expenses: &[LineItem]) -> Vec<ExpenseShare> {
    let total = sum_items(expenses);
    if total <= 0.0 {
        return Vec::new();
    }

    expenses
        .iter()
        .filter(|item| item.amount > 0.0)
        .map(|item| ExpenseShare {
            name: item.name.clone(),
            amount: item.amount,
            share_percent: item.amount / total * 100.0,
        })
        .collect()
}
