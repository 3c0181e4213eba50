use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named amount, e.g. "Salary" = 50000.0 or "Home Loan" = 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
    pub total_amount: f64,
    pub growth_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnInput {
    pub nominal_rate_percent: f64,
    pub inflation_rate_percent: f64,
}

impl ReturnInput {
    /// Both rates at zero. Still computable (real = 0), but front ends
    /// usually have nothing worth showing.
    pub fn is_trivial(&self) -> bool {
        self.nominal_rate_percent == 0.0 && self.inflation_rate_percent == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnResult {
    pub nominal_rate_percent: f64,
    pub inflation_rate_percent: f64,
    pub real_rate_percent: f64,
    /// Nominal minus real, in percentage points.
    pub inflation_drag_points: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub income: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub total_income: f64,
    pub total_expenses: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
}

impl BudgetResult {
    pub fn is_surplus(&self) -> bool {
        self.monthly_cash_flow >= 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetWorthInput {
    pub assets: Vec<LineItem>,
    pub liabilities: Vec<LineItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetWorthResult {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
}

impl NetWorthResult {
    pub fn is_positive(&self) -> bool {
        self.net_worth >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    SavingsRate,
    EmergencyFund,
    DebtToAsset,
    NetWorth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandStatus {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandScore {
    pub band: HealthBand,
    pub points: u32,
    pub status: BandStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => HealthLabel::Excellent,
            s if s >= 60 => HealthLabel::Good,
            s if s >= 40 => HealthLabel::Fair,
            _ => HealthLabel::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLabel::Excellent => "excellent",
            HealthLabel::Good => "good",
            HealthLabel::Fair => "fair",
            HealthLabel::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub savings_rate_percent: f64,
    pub expense_ratio_percent: f64,
    pub debt_to_asset_ratio_percent: f64,
    pub emergency_fund_months: f64,
    pub health_score: u32,
    pub bands: Vec<BandScore>,
    pub recommendations: Vec<String>,
    pub label: HealthLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub years: u32,
    pub future_savings: f64,
    pub projected_net_worth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub name: String,
    pub amount: f64,
    pub share_percent: f64,
}

/// Everything the dashboard shows for one ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub budget: BudgetResult,
    pub net_worth: NetWorthResult,
    pub cash_savings: f64,
    pub health: HealthAssessment,
    /// Only present when the monthly cash flow is a surplus.
    pub projection: Option<ProjectionResult>,
    pub expense_breakdown: Vec<ExpenseShare>,
}
