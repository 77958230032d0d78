use serde::Serialize;

/// One grouped cost entry: a service name and its cost for one report day.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCost {
    pub service: String,
    pub amount: f64,
}

/// All grouped cost entries for a single report day, in API order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayCosts {
    pub groups: Vec<ServiceCost>,
}

/// A service together with its day-ordered cost series.
///
/// Series are built only from days where the billing API returned a group
/// for the service, so a series can be shorter than the report window.
/// Every series holds at least one amount.
#[derive(Debug, Clone, Serialize)]
pub struct RankedService {
    pub service: String,
    pub costs: Vec<f64>,
}

impl RankedService {
    /// Latest-day cost. This is the ranking key, not the period total.
    pub fn latest(&self) -> f64 {
        self.costs.last().copied().unwrap_or(0.0)
    }

    /// Full-period cost across every day in the series.
    pub fn period_total(&self) -> f64 {
        self.costs.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_is_last_element() {
        let ranked = RankedService {
            service: "EC2".to_string(),
            costs: vec![1.0, 2.0, 3.5],
        };
        assert!((ranked.latest() - 3.5).abs() < 1e-10);
    }

    #[test]
    fn period_total_sums_every_day() {
        let ranked = RankedService {
            service: "EC2".to_string(),
            costs: vec![1.0, 2.0, 3.5],
        };
        assert!((ranked.period_total() - 6.5).abs() < 1e-10);
    }

    #[test]
    fn empty_series_defaults_to_zero() {
        let ranked = RankedService {
            service: "EC2".to_string(),
            costs: vec![],
        };
        assert!((ranked.latest() - 0.0).abs() < 1e-10);
        assert!((ranked.period_total() - 0.0).abs() < 1e-10);
    }
}
