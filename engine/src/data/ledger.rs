use serde::{Deserialize, Serialize};
use shared::models::{BudgetInput, LineItem, NetWorthInput};
use std::fmt;
use std::str::FromStr;

/// Which of the four dashboard lists a line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Income,
    Expense,
    Asset,
    Liability,
}

impl FromStr for LedgerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(LedgerKind::Income),
            "expense" => Ok(LedgerKind::Expense),
            "asset" => Ok(LedgerKind::Asset),
            "liability" => Ok(LedgerKind::Liability),
            other => Err(format!(
                "unknown kind '{}', expected income, expense, asset or liability",
                other
            )),
        }
    }
}

impl fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LedgerKind::Income => "income",
            LedgerKind::Expense => "expense",
            LedgerKind::Asset => "asset",
            LedgerKind::Liability => "liability",
        };
        f.write_str(s)
    }
}

/// Monthly income and expenses plus the asset and liability balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub income: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
    pub assets: Vec<LineItem>,
    pub liabilities: Vec<LineItem>,
}

impl Ledger {
    pub fn push(&mut self, kind: LedgerKind, item: LineItem) {
        match kind {
            LedgerKind::Income => self.income.push(item),
            LedgerKind::Expense => self.expenses.push(item),
            LedgerKind::Asset => self.assets.push(item),
            LedgerKind::Liability => self.liabilities.push(item),
        }
    }

    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len() + self.assets.len() + self.liabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn budget_input(&self) -> BudgetInput {
        BudgetInput {
            income: self.income.clone(),
            expenses: self.expenses.clone(),
        }
    }

    pub fn net_worth_input(&self) -> NetWorthInput {
        NetWorthInput {
            assets: self.assets.clone(),
            liabilities: self.liabilities.clone(),
        }
    }

    /// Sum of the asset lines whose name matches `name`, ignoring case.
    pub fn asset_total_named(&self, name: &str) -> f64 {
        let wanted = name.trim().to_lowercase();
        self.assets
            .iter()
            .filter(|item| item.name.trim().to_lowercase() == wanted)
            .map(|item| item.amount)
            .sum()
    }

    /// The household the dashboard starts with before any edits.
    pub fn default_household() -> Self {
        fn items(pairs: &[(&str, f64)]) -> Vec<LineItem> {
            pairs.iter().map(|(name, amount)| LineItem::new(*name, *amount)).collect()
        }

        Ledger {
            income: items(&[
                ("Salary", 50000.0),
                ("Freelance Income", 0.0),
                ("Investment Returns", 0.0),
                ("Other Income", 0.0),
            ]),
            expenses: items(&[
                ("Housing/Rent", 15000.0),
                ("Food & Groceries", 8000.0),
                ("Transportation", 5000.0),
                ("Utilities", 3000.0),
                ("Entertainment", 4000.0),
                ("Other Expenses", 5000.0),
            ]),
            assets: items(&[
                ("Cash & Savings", 100000.0),
                ("Investments", 50000.0),
                ("Property Value", 0.0),
                ("Vehicle Value", 0.0),
                ("Other Assets", 0.0),
            ]),
            liabilities: items(&[
                ("Home Loan", 0.0),
                ("Car Loan", 0.0),
                ("Personal Loan", 0.0),
                ("Credit Card Debt", 0.0),
                ("Other Debts", 0.0),
            ]),
        }
    }
}
