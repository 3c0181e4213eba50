// Finance toolkit command line: one calculator per invocation.
use clap::{Parser, Subcommand};
use engine::calculators::{compute_real_return, compute_simple_interest};
use engine::config::EngineSettings;
use engine::data::{Ledger, LedgerCsvParser};
use engine::error::EngineError;
use engine::services::DashboardService;
use serde::Serialize;
use shared::models::{DashboardReport, ReturnInput, ReturnResult, SimpleInterestInput, SimpleInterestResult};
use shared::utils::{format_currency, format_percent};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "engine")]
#[command(version = "0.1.0")]
#[command(about = "Personal finance calculators: interest, real return and a budget dashboard.", long_about = None)]
struct Cli {
    /// Print the result as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (JSON); the bundled defaults are used otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simple interest on a principal
    Interest {
        #[arg(allow_negative_numbers = true)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        /// Time period in years
        #[arg(allow_negative_numbers = true)]
        years: f64,
    },

    /// Real return after inflation
    RealReturn {
        /// Nominal return in percent
        #[arg(allow_negative_numbers = true)]
        nominal: f64,
        /// Inflation rate in percent
        #[arg(allow_negative_numbers = true)]
        inflation: f64,
    },

    /// Budget, net worth and health score for a ledger
    Dashboard {
        /// Ledger CSV (kind;name;amount); the default household when omitted
        ledger: Option<PathBuf>,

        /// Years to project (1-20 with the default settings)
        #[arg(long)]
        years: Option<u32>,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), EngineError> {
    let settings = match &cli.config {
        Some(path) => EngineSettings::load_from_file(path)?,
        None => EngineSettings::load_default()?,
    };

    match cli.command {
        Commands::Interest { principal, rate, years } => {
            let input = SimpleInterestInput { principal, annual_rate_percent: rate, years };
            let result = compute_simple_interest(&input)?;
            emit(cli.json, &result, || interest_text(&settings, &input, &result))
        }
        Commands::RealReturn { nominal, inflation } => {
            let input = ReturnInput { nominal_rate_percent: nominal, inflation_rate_percent: inflation };
            let result = compute_real_return(&input)?;
            if input.is_trivial() && !cli.json {
                info!("Both rates are zero, nothing to compare");
            }
            emit(cli.json, &result, || real_return_text(&result))
        }
        Commands::Dashboard { ledger, years } => {
            let ledger = match ledger {
                Some(path) => LedgerCsvParser::load_from_path(&path)?,
                None => {
                    info!("No ledger given, using the default household");
                    Ledger::default_household()
                }
            };
            let service = DashboardService::new(settings);
            let report = service.build_report(&ledger, years);
            emit(cli.json, &report, || dashboard_text(service.settings(), &report))
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<(), EngineError> {
    if json {
        let out = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
        println!("{}", out);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn interest_text(settings: &EngineSettings, input: &SimpleInterestInput, result: &SimpleInterestResult) -> String {
    let money = |v: f64| format_currency(&settings.currency_symbol, v, settings.display_decimals);
    format!(
        "Simple Interest: {}\nTotal Amount:    {}\nGrowth:          {} on {} ({})",
        money(result.interest),
        money(result.total_amount),
        money(result.interest),
        money(input.principal),
        format_percent(result.growth_percent, 2)
    )
}

fn real_return_text(result: &ReturnResult) -> String {
    format!(
        "Nominal Return: {}\nInflation Rate: {}\nReal Return:    {}\nDifference:     {:.2} percentage points lost to inflation",
        format_percent(result.nominal_rate_percent, 2),
        format_percent(result.inflation_rate_percent, 2),
        format_percent(result.real_rate_percent, 2),
        result.inflation_drag_points
    )
}

fn dashboard_text(settings: &EngineSettings, report: &DashboardReport) -> String {
    let money = |v: f64| format_currency(&settings.currency_symbol, v, 0);
    let mut lines = vec![
        format!("Total Income:      {}", money(report.budget.total_income)),
        format!("Total Expenses:    {}", money(report.budget.total_expenses)),
        format!(
            "Monthly Cash Flow: {} ({})",
            money(report.budget.monthly_cash_flow),
            if report.budget.is_surplus() { "Surplus" } else { "Deficit" }
        ),
        format!("Total Assets:      {}", money(report.net_worth.total_assets)),
        format!("Total Liabilities: {}", money(report.net_worth.total_liabilities)),
        format!(
            "Net Worth:         {} ({})",
            money(report.net_worth.net_worth),
            if report.net_worth.is_positive() { "Positive" } else { "Negative" }
        ),
        String::new(),
        format!("Savings Rate:      {}", format_percent(report.health.savings_rate_percent, 1)),
        format!("Expense Ratio:     {}", format_percent(report.health.expense_ratio_percent, 1)),
        format!("Debt-to-Asset:     {}", format_percent(report.health.debt_to_asset_ratio_percent, 1)),
        format!("Emergency Fund:    {:.1} months", report.health.emergency_fund_months),
        String::new(),
        format!(
            "Financial Health Score: {}/100 ({})",
            report.health.health_score,
            report.health.label.as_str()
        ),
    ];

    if !report.health.recommendations.is_empty() {
        lines.push("Recommendations:".to_string());
        for (i, rec) in report.health.recommendations.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, rec));
        }
    }

    if let Some(projection) = &report.projection {
        lines.push(String::new());
        lines.push(format!(
            "Projected Savings:   {} in {} years",
            money(projection.future_savings),
            projection.years
        ));
        lines.push(format!(
            "Projected Net Worth: {} in {} years",
            money(projection.projected_net_worth),
            projection.years
        ));
    }

    lines.join("\n")
}
