use vigil_core::models::{AggregateReport, CheckEntry, HealthStatus, ProbeResult};

use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = HealthStatus> {
    prop_oneof![
        Just(HealthStatus::Healthy),
        Just(HealthStatus::Degraded),
        Just(HealthStatus::Unhealthy),
    ]
}

proptest! {
    // Dominance law: the reduction equals the max severity in the set,
    // regardless of order or multiplicity.
    #[test]
    fn reduce_picks_max_severity(statuses in prop::collection::vec(status_strategy(), 0..20)) {
        let reduced = AggregateReport::reduce(statuses.iter().copied());
        let max = statuses
            .iter()
            .map(|s| s.severity())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(reduced.severity(), max);
    }

    // worst() is commutative and associative over any triple.
    #[test]
    fn worst_is_order_insensitive(a in status_strategy(), b in status_strategy(), c in status_strategy()) {
        let left = HealthStatus::worst(HealthStatus::worst(a, b), c);
        let right = HealthStatus::worst(a, HealthStatus::worst(b, c));
        prop_assert_eq!(left, right);
        prop_assert_eq!(HealthStatus::worst(a, b), HealthStatus::worst(b, a));
    }
}

#[test]
fn report_wire_shape() {
    let report = AggregateReport {
        status: HealthStatus::Degraded,
        timestamp: chrono::Utc::now(),
        version: "1.2.3".into(),
        environment: "staging".into(),
        uptime_seconds: 3600,
        checks: vec![CheckEntry {
            name: "cache".into(),
            result: ProbeResult::degraded("hit rate below 50%"),
        }],
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["version"], "1.2.3");
    assert_eq!(json["environment"], "staging");
    assert_eq!(json["uptime_seconds"], 3600);
    assert_eq!(json["checks"][0]["name"], "cache");
    assert_eq!(json["checks"][0]["status"], "degraded");
    // RFC3339 timestamp
    let ts = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[test]
fn execution_error_is_unhealthy_with_error_field() {
    let result = ProbeResult::execution_error("panicked: connection refused");
    assert_eq!(result.status, HealthStatus::Unhealthy);
    assert_eq!(result.error.as_deref(), Some("panicked: connection refused"));
    assert!(result.message.is_none());
}
