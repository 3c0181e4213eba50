// Financial health score: four independent bands of up to 25 points each.
//
// Ratios whose denominator is zero degrade to 0 instead of failing, so the
// assessment itself has no error path.
use shared::models::{
    BandScore, BandStatus, BudgetResult, HealthAssessment, HealthBand, HealthLabel, NetWorthResult,
};

pub const BAND_MAX_POINTS: u32 = 25;
pub const BAND_PARTIAL_POINTS: u32 = 15;

pub const REC_SAVINGS_MODERATE: &str = "Increase your savings rate to 20% of income";
pub const REC_SAVINGS_WEAK: &str = "Critical: Increase savings rate - aim for at least 10%";
pub const REC_EMERGENCY_MODERATE: &str = "Build emergency fund to 6 months of expenses";
pub const REC_EMERGENCY_WEAK: &str = "Priority: Build emergency fund of 3-6 months expenses";
pub const REC_DEBT_MODERATE: &str = "Consider reducing debt-to-asset ratio below 30%";
pub const REC_DEBT_WEAK: &str = "High priority: Reduce debt burden";
pub const REC_NET_WORTH_WEAK: &str = "Focus on increasing assets and reducing liabilities";

/// Scores the budget and net worth, with `cash_savings` as the liquid
/// reserve for the emergency-fund band.
///
/// Recommendations come out in band order (savings, emergency fund, debt,
/// net worth); a band at full points adds none. Thresholds are inclusive and
/// compared against unrounded ratios.
pub fn assess_health(budget: &BudgetResult, net_worth: &NetWorthResult, cash_savings: f64) -> HealthAssessment {
    let savings_rate_percent = if budget.total_income > 0.0 && budget.monthly_cash_flow > 0.0 {
        budget.monthly_cash_flow / budget.total_income * 100.0
    } else {
        0.0
    };

    let expense_ratio_percent = if budget.total_income > 0.0 {
        budget.total_expenses / budget.total_income * 100.0
    } else {
        0.0
    };

    let debt_to_asset_ratio_percent = if net_worth.total_assets > 0.0 {
        net_worth.total_liabilities / net_worth.total_assets * 100.0
    } else {
        0.0
    };

    let emergency_fund_months = if budget.total_expenses > 0.0 {
        cash_savings / budget.total_expenses
    } else {
        0.0
    };

    let evaluated = [
        savings_band(savings_rate_percent),
        emergency_fund_band(emergency_fund_months),
        debt_band(debt_to_asset_ratio_percent),
        net_worth_band(net_worth.net_worth),
    ];

    let health_score = evaluated.iter().map(|(band, _)| band.points).sum();
    let recommendations = evaluated
        .iter()
        .filter_map(|(_, rec)| rec.as_ref().map(|r| r.to_string()))
        .collect();

    HealthAssessment {
        savings_rate_percent,
        expense_ratio_percent,
        debt_to_asset_ratio_percent,
        emergency_fund_months,
        health_score,
        bands: evaluated.iter().map(|(band, _)| *band).collect(),
        recommendations,
        label: HealthLabel::from_score(health_score),
    }
}

type Evaluated = (BandScore, Option<&'static str>);

fn strong(band: HealthBand) -> Evaluated {
    (BandScore { band, points: BAND_MAX_POINTS, status: BandStatus::Strong }, None)
}

fn moderate(band: HealthBand, rec: &'static str) -> Evaluated {
    (BandScore { band, points: BAND_PARTIAL_POINTS, status: BandStatus::Moderate }, Some(rec))
}

fn weak(band: HealthBand, rec: &'static str) -> Evaluated {
    (BandScore { band, points: 0, status: BandStatus::Weak }, Some(rec))
}

fn savings_band(rate_percent: f64) -> Evaluated {
    if rate_percent >= 20.0 {
        strong(HealthBand::SavingsRate)
    } else if rate_percent >= 10.0 {
        moderate(HealthBand::SavingsRate, REC_SAVINGS_MODERATE)
    } else {
        weak(HealthBand::SavingsRate, REC_SAVINGS_WEAK)
    }
}

fn emergency_fund_band(months: f64) -> Evaluated {
    if months >= 6.0 {
        strong(HealthBand::EmergencyFund)
    } else if months >= 3.0 {
        moderate(HealthBand::EmergencyFund, REC_EMERGENCY_MODERATE)
    } else {
        weak(HealthBand::EmergencyFund, REC_EMERGENCY_WEAK)
    }
}

fn debt_band(ratio_percent: f64) -> Evaluated {
    if ratio_percent <= 30.0 {
        strong(HealthBand::DebtToAsset)
    } else if ratio_percent <= 50.0 {
        moderate(HealthBand::DebtToAsset, REC_DEBT_MODERATE)
    } else {
        weak(HealthBand::DebtToAsset, REC_DEBT_WEAK)
    }
}

fn net_worth_band(net_worth: f64) -> Evaluated {
    if net_worth > 0.0 {
        strong(HealthBand::NetWorth)
    } else {
        weak(HealthBand::NetWorth, REC_NET_WORTH_WEAK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::assert_close;

    fn budget(income: f64, expenses: f64) -> BudgetResult {
        BudgetResult {
            total_income: income,
            total_expenses: expenses,
            monthly_cash_flow: income - expenses,
            annual_cash_flow: (income - expenses) * 12.0,
        }
    }

    fn net_worth(assets: f64, liabilities: f64) -> NetWorthResult {
        NetWorthResult { total_assets: assets, total_liabilities: liabilities, net_worth: assets - liabilities }
    }

    #[test]
    fn test_perfect_score() {
        // 30% savings, 10 months of reserve, 10% debt, positive net worth
        let assessment = assess_health(&budget(10000.0, 7000.0), &net_worth(100000.0, 10000.0), 70000.0);
        assert_eq!(assessment.health_score, 100);
        assert_eq!(assessment.label, HealthLabel::Excellent);
        assert!(assessment.recommendations.is_empty());
        assert_close(assessment.savings_rate_percent, 30.0);
        assert_close(assessment.expense_ratio_percent, 70.0);
        assert_close(assessment.debt_to_asset_ratio_percent, 10.0);
        assert_close(assessment.emergency_fund_months, 10.0);
    }

    #[test]
    fn test_original_default_household() {
        // income 50k, expenses 40k, cash 100k, investments 50k, no debt
        let assessment = assess_health(&budget(50000.0, 40000.0), &net_worth(150000.0, 0.0), 100000.0);
        assert_close(assessment.savings_rate_percent, 20.0);
        assert_close(assessment.emergency_fund_months, 2.5);
        assert_eq!(assessment.health_score, 75);
        assert_eq!(assessment.label, HealthLabel::Good);
        assert_eq!(assessment.recommendations, vec![REC_EMERGENCY_WEAK.to_string()]);
    }

    #[test]
    fn test_moderate_bands_and_recommendation_order() {
        // 15% savings, 4 months, 40% debt, positive net worth
        let assessment = assess_health(&budget(10000.0, 8500.0), &net_worth(100000.0, 40000.0), 34000.0);
        assert_eq!(assessment.health_score, 15 + 15 + 15 + 25);
        assert_eq!(
            assessment.recommendations,
            vec![REC_SAVINGS_MODERATE, REC_EMERGENCY_MODERATE, REC_DEBT_MODERATE]
        );
        assert!(assessment.bands.iter().take(3).all(|b| b.status == BandStatus::Moderate));
        assert_eq!(assessment.bands[3].status, BandStatus::Strong);
    }

    #[test]
    fn test_worst_case() {
        let assessment = assess_health(&budget(3000.0, 4000.0), &net_worth(10000.0, 30000.0), 0.0);
        assert_eq!(assessment.health_score, 0);
        assert_eq!(assessment.label, HealthLabel::Poor);
        assert_eq!(
            assessment.recommendations,
            vec![REC_SAVINGS_WEAK, REC_EMERGENCY_WEAK, REC_DEBT_WEAK, REC_NET_WORTH_WEAK]
        );
        // a deficit never yields a negative savings rate
        assert_eq!(assessment.savings_rate_percent, 0.0);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        // exactly 10% savings, exactly 3 months, exactly 50% debt
        let assessment = assess_health(&budget(10000.0, 9000.0), &net_worth(100000.0, 50000.0), 27000.0);
        assert_eq!(assessment.bands[0].points, BAND_PARTIAL_POINTS);
        assert_eq!(assessment.bands[1].points, BAND_PARTIAL_POINTS);
        assert_eq!(assessment.bands[2].points, BAND_PARTIAL_POINTS);

        // exactly 6 months is strong
        let assessment = assess_health(&budget(10000.0, 8000.0), &net_worth(100000.0, 25000.0), 48000.0);
        assert_eq!(assessment.bands[1].status, BandStatus::Strong);
        assert_eq!(assessment.bands[2].status, BandStatus::Strong);
    }

    #[test]
    fn test_zero_denominators_degrade_to_zero() {
        let assessment = assess_health(&budget(0.0, 0.0), &net_worth(0.0, 5000.0), 10000.0);
        assert_eq!(assessment.savings_rate_percent, 0.0);
        assert_eq!(assessment.expense_ratio_percent, 0.0);
        assert_eq!(assessment.debt_to_asset_ratio_percent, 0.0);
        assert_eq!(assessment.emergency_fund_months, 0.0);
        // 0% debt-to-asset still counts as healthy debt, net worth does not
        assert_eq!(assessment.bands[2].points, BAND_MAX_POINTS);
        assert_eq!(assessment.bands[3].points, 0);
        assert_eq!(assessment.health_score, 25);
    }

    #[test]
    fn test_zero_net_worth_is_not_positive() {
        let assessment = assess_health(&budget(10000.0, 5000.0), &net_worth(20000.0, 20000.0), 0.0);
        assert_eq!(assessment.bands[3].status, BandStatus::Weak);
        assert_eq!(assessment.recommendations.last().map(String::as_str), Some(REC_NET_WORTH_WEAK));
    }

    #[test]
    fn test_score_bounded_and_equals_band_sum() {
        let incomes = [0.0, 1000.0, 50000.0];
        let expenses = [0.0, 500.0, 45000.0, 60000.0];
        let assets = [0.0, 10000.0, 200000.0];
        let liabilities = [0.0, 4000.0, 90000.0, 500000.0];
        let cash = [0.0, 2000.0, 300000.0];

        for &i in &incomes {
            for &e in &expenses {
                for &a in &assets {
                    for &l in &liabilities {
                        for &c in &cash {
                            let assessment = assess_health(&budget(i, e), &net_worth(a, l), c);
                            let band_sum: u32 = assessment.bands.iter().map(|b| b.points).sum();
                            assert!(assessment.health_score <= 100);
                            assert_eq!(assessment.health_score, band_sum);
                            assert_eq!(assessment.bands.len(), 4);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_monotonic_in_cash_flow() {
        // income and expenses held fixed on the record, only the cash flow moves
        let nw = net_worth(100000.0, 20000.0);
        let mut previous = 0;
        for step in -50..=100 {
            let cash_flow = step as f64 * 100.0;
            let b = BudgetResult {
                total_income: 10000.0,
                total_expenses: 6000.0,
                monthly_cash_flow: cash_flow,
                annual_cash_flow: cash_flow * 12.0,
            };
            let score = assess_health(&b, &nw, 20000.0).health_score;
            assert!(score >= previous, "score dropped from {} to {} at cash flow {}", previous, score, cash_flow);
            previous = score;
        }
    }

    #[test]
    fn test_repeated_assessment_identical() {
        let b = budget(42000.0, 31000.0);
        let nw = net_worth(250000.0, 80000.0);
        assert_eq!(assess_health(&b, &nw, 90000.0), assess_health(&b, &nw, 90000.0));
    }
}
