//! Dashboard chart series

use super::types::{AccessPoint, ErrorRatePoint, TransferPoint};

/// HTTP 5xx errors across all microservices, 5 minute buckets
pub static ERROR_RATE: &[ErrorRatePoint] = &[
    ErrorRatePoint { time: "12:00", errors: 4, critical: 1 },
    ErrorRatePoint { time: "12:05", errors: 6, critical: 2 },
    ErrorRatePoint { time: "12:10", errors: 5, critical: 1 },
    ErrorRatePoint { time: "12:15", errors: 15, critical: 7 },
    ErrorRatePoint { time: "12:20", errors: 27, critical: 15 },
    ErrorRatePoint { time: "12:25", errors: 12, critical: 4 },
    ErrorRatePoint { time: "12:30", errors: 8, critical: 3 },
    ErrorRatePoint { time: "12:35", errors: 5, critical: 1 },
];

pub static ACCESS_ACTIVITY: &[AccessPoint] = &[
    AccessPoint { day: "Mon", logins: 120, elevations: 5, failed_logins: 15 },
    AccessPoint { day: "Tue", logins: 150, elevations: 8, failed_logins: 10 },
    AccessPoint { day: "Wed", logins: 130, elevations: 3, failed_logins: 20 },
    AccessPoint { day: "Thu", logins: 160, elevations: 12, failed_logins: 5 },
    AccessPoint { day: "Fri", logins: 180, elevations: 7, failed_logins: 12 },
    AccessPoint { day: "Sat", logins: 90, elevations: 2, failed_logins: 8 },
    AccessPoint { day: "Sun", logins: 80, elevations: 1, failed_logins: 5 },
];

pub static DATA_TRANSFER: &[TransferPoint] = &[
    TransferPoint { service: "API GW", egress_gb: 150, ingress_gb: 200 },
    TransferPoint { service: "Payment Svc", egress_gb: 50, ingress_gb: 70 },
    TransferPoint { service: "User Svc", egress_gb: 30, ingress_gb: 40 },
    // High egress, possible exfiltration
    TransferPoint { service: "Reporting DB", egress_gb: 250, ingress_gb: 10 },
    TransferPoint { service: "Auth Svc", egress_gb: 5, ingress_gb: 5 },
    TransferPoint { service: "File Share", egress_gb: 180, ingress_gb: 20 },
];

/// Formatter input shown under the charts
pub const DASHBOARD_NOTES: &str = "This dashboard presents a simulated overview of key security metrics as outlined in the project plan. The **Error-Rate Trends** chart tracks HTTP 5xx errors. **Privilege Elevations vs. Login Successes** monitors user access patterns. **Data Transfer by Service** helps identify anomalous data movements.

In a real SIEM, these charts would be powered by live log data and KQL/Elasticsearch DSL queries, with drill-down capabilities. The configuration of such dashboards (e.g., exported as JSON/NDJSON from Kibana or Azure Sentinel Workbooks) is a key deliverable for easy replication and version control.";

/// Largest value in a series, for chart bounds
pub fn series_max<T>(points: &[T], value: impl Fn(&T) -> u64) -> u64 {
    points.iter().map(value).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_max() {
        assert_eq!(series_max(ERROR_RATE, |p| p.errors), 27);
        assert_eq!(series_max(DATA_TRANSFER, |p| p.egress_gb.max(p.ingress_gb)), 250);
        assert_eq!(series_max::<AccessPoint>(&[], |p| p.logins), 0);
    }
}
