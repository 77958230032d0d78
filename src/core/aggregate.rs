use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::models::costs::{DayCosts, RankedService};
use crate::core::models::report::{CostReport, TopService};

/// Fold every day's groups into a service -> day-ordered cost series map.
///
/// A service gains an entry the first time any day lists it; days where a
/// service has no group simply add nothing, so series may be shorter than
/// the window. Missing days are not zero-filled.
pub fn by_service(days: &[DayCosts]) -> HashMap<String, Vec<f64>> {
    let mut series: HashMap<String, Vec<f64>> = HashMap::new();
    for day in days {
        for group in &day.groups {
            series
                .entry(group.service.clone())
                .or_default()
                .push(group.amount);
        }
    }
    series
}

/// Order services descending by latest-day cost.
///
/// The sort key is the last element of each series, not the period total.
/// Order among services with equal latest-day costs is unspecified.
pub fn rank(series: HashMap<String, Vec<f64>>) -> Vec<RankedService> {
    let mut ranked: Vec<RankedService> = series
        .into_iter()
        .map(|(service, costs)| RankedService { service, costs })
        .collect();
    ranked.sort_by(|a, b| {
        b.latest()
            .partial_cmp(&a.latest())
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Partition ranked services into the report shape.
///
/// Top rows keep latest-day costs; "Other" sums the entire series of every
/// service beyond position `top_n`, and "Total" sums the entire series of
/// every service.
pub fn summarize(ranked: &[RankedService], top_n: usize) -> CostReport {
    let top = ranked
        .iter()
        .take(top_n)
        .map(|entry| TopService {
            service: entry.service.clone(),
            latest: entry.latest(),
        })
        .collect();

    let other = ranked
        .iter()
        .skip(top_n)
        .map(RankedService::period_total)
        .sum();

    let total = ranked.iter().map(RankedService::period_total).sum();

    CostReport { top, other, total }
}
