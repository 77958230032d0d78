use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use colored::{control, Colorize};
use serde::Serialize;

use crate::cli::output::{OutputFormat, OutputOptions};
use crate::core::aggregate;
use crate::core::billing;
use crate::core::config::AppConfig;
use crate::core::formatter;
use crate::core::models::report::{summary_line, CostReport, Severity};
use crate::core::notify;
use crate::core::window::ReportWindow;

#[derive(Serialize)]
struct ReportPayload<'a> {
    start: NaiveDate,
    end: NaiveDate,
    severity: Severity,
    summary: &'a str,
    #[serde(flatten)]
    report: &'a CostReport,
}

/// Run the report pipeline: one billing query, aggregate, rank, render,
/// classify, deliver.
pub async fn run(month: Option<String>, no_post: bool, opts: &OutputOptions) -> Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    let settings = config.report;

    let anchor = match &month {
        Some(raw) => parse_month(raw)?,
        None => Utc::now().date_naive(),
    };
    let window = ReportWindow::month_of(anchor);

    if opts.verbose {
        eprintln!("Querying Cost Explorer from {} to {}", window.start, window.end);
    }

    let days = billing::fetch_month_costs(&window).await?;
    let ranked = aggregate::rank(aggregate::by_service(&days));
    let report = aggregate::summarize(&ranked, settings.top_services);

    let severity = Severity::classify(report.total, settings.good_cost, settings.bad_cost);
    let summary = summary_line(severity, report.total, settings.good_cost, settings.bad_cost);
    let table = formatter::render_table(&report, settings.name_width);

    if opts.format == OutputFormat::Json {
        let payload = ReportPayload {
            start: window.start,
            end: window.end,
            severity,
            summary: &summary,
            report: &report,
        };
        let json = if opts.pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };
        println!("{}", json);
        return Ok(());
    }

    let hook_url = if no_post { None } else { notify::webhook_from_env() };
    match hook_url {
        Some(url) => {
            notify::post(&url, &formatter::slack_message(&summary, &table)).await?;
            if opts.verbose {
                eprintln!("Report delivered to the Slack webhook");
            }
        }
        None => {
            control::set_override(opts.use_color);
            println!("Presenting the {} most expensive services", settings.top_services);
            let colored_summary = match severity {
                Severity::Good => summary.green(),
                Severity::Warning => summary.yellow(),
                Severity::Critical => summary.red(),
            };
            println!("{}", colored_summary);
            println!("{}", table);
        }
    }

    Ok(())
}

fn parse_month(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
        .with_context(|| format!("Invalid month {:?}, expected YYYY-MM", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_month_accepts_year_dash_month() {
        let date = parse_month("2026-02").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }

    #[test]
    fn parse_month_rejects_bad_input() {
        assert!(parse_month("Feb 2026").is_err());
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("2026").is_err());
    }

    #[test]
    fn payload_serializes_report_fields_inline() {
        let report = CostReport {
            top: vec![],
            other: 0.0,
            total: 4.2,
        };
        let summary = "all good";
        let payload = ReportPayload {
            start: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            severity: Severity::Good,
            summary,
            report: &report,
        };
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();
        assert_eq!(value["severity"], "good");
        assert_eq!(value["start"], "2026-08-01");
        assert!((value["total"].as_f64().unwrap() - 4.2).abs() < 1e-10);
    }
}
