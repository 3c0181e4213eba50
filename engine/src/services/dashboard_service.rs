// Personal finance dashboard: budget, net worth, health score and projection
// for one ledger.
use chrono::Utc;
use shared::models::DashboardReport;

use crate::calculators::{assess_health, compute_budget, compute_net_worth, expense_breakdown, project};
use crate::config::EngineSettings;
use crate::data::Ledger;

pub struct DashboardService {
    settings: EngineSettings,
}

impl DashboardService {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Builds the full report. `projection_years` falls back to the
    /// configured default and is clamped into `1..=max_projection_years`.
    pub fn build_report(&self, ledger: &Ledger, projection_years: Option<u32>) -> DashboardReport {
        let budget = compute_budget(&ledger.budget_input());
        tracing::debug!(
            total_income = budget.total_income,
            total_expenses = budget.total_expenses,
            monthly_cash_flow = budget.monthly_cash_flow,
            "Computed budget"
        );

        let net_worth = compute_net_worth(&ledger.net_worth_input());
        tracing::debug!(
            total_assets = net_worth.total_assets,
            total_liabilities = net_worth.total_liabilities,
            net_worth = net_worth.net_worth,
            "Computed net worth"
        );

        let cash_savings = ledger.asset_total_named(&self.settings.cash_asset_name);
        if cash_savings == 0.0 && !ledger.assets.is_empty() {
            tracing::debug!(
                cash_asset_name = %self.settings.cash_asset_name,
                "No cash asset line found, emergency fund counts as empty"
            );
        }

        let health = assess_health(&budget, &net_worth, cash_savings);
        tracing::debug!(
            health_score = health.health_score,
            label = health.label.as_str(),
            recommendations = health.recommendations.len(),
            "Assessed financial health"
        );

        let years = self.clamp_years(projection_years.unwrap_or(self.settings.default_projection_years));
        let projection = project(budget.monthly_cash_flow, net_worth.net_worth, years);
        if projection.is_none() {
            tracing::debug!(monthly_cash_flow = budget.monthly_cash_flow, "No surplus, skipping projection");
        }

        let report = DashboardReport {
            generated_at: Utc::now(),
            budget,
            net_worth,
            cash_savings,
            health,
            projection,
            expense_breakdown: expense_breakdown(&ledger.expenses),
        };

        tracing::info!(
            items = ledger.len(),
            health_score = report.health.health_score,
            surplus = report.budget.is_surplus(),
            "Dashboard report built"
        );
        report
    }

    fn clamp_years(&self, requested: u32) -> u32 {
        let max = self.settings.max_projection_years.max(1);
        let years = requested.clamp(1, max);
        if years != requested {
            tracing::warn!(requested, used = years, max, "Projection years out of range, clamped");
        }
        years
    }
}
