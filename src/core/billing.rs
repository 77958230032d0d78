use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_costexplorer::types::{
    DateInterval, Dimension, DimensionValues, Expression, Granularity, GroupDefinition,
    GroupDefinitionType, ResultByTime,
};
use aws_sdk_costexplorer::Client;

use crate::core::models::costs::{DayCosts, ServiceCost};
use crate::core::window::ReportWindow;

const COST_METRIC: &str = "UnblendedCost";

/// Record types excluded from the report; these are adjustments, not
/// service spend.
const EXCLUDED_RECORD_TYPES: [&str; 4] = ["Credit", "Refund", "Upfront", "Support"];

/// Query Cost Explorer for per-service costs over the report window.
///
/// One request per invocation, monthly granularity, grouped by SERVICE.
/// Credentials and region come from the ambient AWS chain. Any failure
/// here is fatal to the run; the external scheduler owns retries.
pub async fn fetch_month_costs(window: &ReportWindow) -> Result<Vec<DayCosts>> {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let client = Client::new(&config);

    let period = DateInterval::builder()
        .start(window.start.format("%Y-%m-%d").to_string())
        .end(window.end.format("%Y-%m-%d").to_string())
        .build()
        .context("Failed to build the Cost Explorer time period")?;

    let mut excluded = DimensionValues::builder().key(Dimension::RecordType);
    for record_type in EXCLUDED_RECORD_TYPES {
        excluded = excluded.values(record_type);
    }
    let filter = Expression::builder()
        .not(Expression::builder().dimensions(excluded.build()).build())
        .build();

    let group_by = GroupDefinition::builder()
        .r#type(GroupDefinitionType::Dimension)
        .key("SERVICE")
        .build();

    let response = client
        .get_cost_and_usage()
        .time_period(period)
        .granularity(Granularity::Monthly)
        .filter(filter)
        .metrics(COST_METRIC)
        .group_by(group_by)
        .send()
        .await
        .context("Cost Explorer GetCostAndUsage request failed")?;

    convert_results(response.results_by_time())
}

/// Convert the SDK response into plain day records.
///
/// Amounts arrive as string-encoded decimals; a missing metric or a
/// malformed amount fails the run rather than producing a partial report.
fn convert_results(results: &[ResultByTime]) -> Result<Vec<DayCosts>> {
    let mut days = Vec::with_capacity(results.len());
    for result in results {
        let mut groups = Vec::new();
        for group in result.groups() {
            let service = group
                .keys()
                .first()
                .cloned()
                .context("Cost group is missing its service key")?;
            let raw_amount = group
                .metrics()
                .and_then(|metrics| metrics.get(COST_METRIC))
                .and_then(|value| value.amount())
                .with_context(|| format!("No {} amount for service '{}'", COST_METRIC, service))?;
            let amount: f64 = raw_amount.parse().with_context(|| {
                format!("Malformed cost amount {:?} for service '{}'", raw_amount, service)
            })?;
            groups.push(ServiceCost { service, amount });
        }
        days.push(DayCosts { groups });
    }
    Ok(days)
}
