use serde::Serialize;

/// One rendered row of the report: a service and its latest-day cost.
#[derive(Debug, Clone, Serialize)]
pub struct TopService {
    pub service: String,
    pub latest: f64,
}

/// The aggregated monthly report.
///
/// `top` rows carry latest-day costs; `other` and `total` sum entire
/// series across the period.
#[derive(Debug, Clone, Serialize)]
pub struct CostReport {
    pub top: Vec<TopService>,
    pub other: f64,
    pub total: f64,
}

/// Alert level for the monthly total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Good,
    Warning,
    Critical,
}

impl Severity {
    /// Classify a monthly total against the two thresholds.
    ///
    /// Both comparisons are strict: a total sitting exactly on either
    /// threshold lands in `Warning`.
    pub fn classify(total: f64, good_cost: f64, bad_cost: f64) -> Self {
        if total < good_cost {
            Self::Good
        } else if total > bad_cost {
            Self::Critical
        } else {
            Self::Warning
        }
    }

    /// Alert headline naming the threshold(s) that apply to this level.
    pub fn headline(&self, good_cost: f64, bad_cost: f64) -> String {
        match self {
            Self::Good => format!(
                ":tada: Billing is below US$ {:5.2}. Congrats! :confetti_ball:",
                good_cost
            ),
            Self::Critical => format!(
                ":money_with_wings: ATTENTION @here billing is way too high, above US$ {:5.2} :rotating_light:",
                bad_cost
            ),
            Self::Warning => format!(
                ":zany_face: ATTENTION @here billing is at a worrying level, above US$ {:5.2}. The limit is US$ {:5.2} :warning:",
                good_cost, bad_cost
            ),
        }
    }
}

/// The two-line alert summary: headline plus the current total.
pub fn summary_line(severity: Severity, total: f64, good_cost: f64, bad_cost: f64) -> String {
    format!(
        "{}\nCurrent billing is at: US$ {:5.2}",
        severity.headline(good_cost, bad_cost),
        total
    )
}
