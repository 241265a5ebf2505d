use proptest::prelude::*;
use vehidiag_core::evaluator::evaluate;
use vehidiag_core::issue::Severity;
use vehidiag_core::reading::VehicleReading;
use vehidiag_core::rules::{RULE_GROUPS, NOMINAL_COMPONENT};

/// Readings spread across and beyond every threshold, including
/// out-of-range values the evaluator must still accept.
fn arb_reading() -> impl Strategy<Value = VehicleReading> {
    (
        (-40.0f64..160.0, -1.0f64..6.0, 8.0f64..18.0, 0.0f64..3.0),
        (-10.0f64..120.0, -10.0f64..120.0, 0.0f64..40_000.0),
    )
        .prop_map(
            |(
                (engine_temp, oil_pressure, battery_voltage, vibration_level),
                (brake_wear, coolant_level, km_since_service),
            )| VehicleReading {
                engine_temp,
                oil_pressure,
                battery_voltage,
                vibration_level,
                brake_wear,
                coolant_level,
                km_since_service,
            },
        )
}

/// Index of the rule group that can produce `component`.
fn group_index(component: &str) -> Option<usize> {
    RULE_GROUPS
        .iter()
        .position(|g| g.tiers.iter().any(|t| t.component == component))
}

// ── Report is never empty ────────────────────────────────────────────────

proptest! {
    #[test]
    fn report_is_never_empty(reading in arb_reading()) {
        let report = evaluate(&reading);
        prop_assert!(!report.is_empty());
        prop_assert!(report.len() <= RULE_GROUPS.len());
    }
}

// ── Deterministic and order-stable ───────────────────────────────────────

proptest! {
    #[test]
    fn evaluation_is_deterministic(reading in arb_reading()) {
        prop_assert_eq!(evaluate(&reading), evaluate(&reading));
    }
}

// ── At most one issue per group, emitted in group order ──────────────────

proptest! {
    #[test]
    fn groups_contribute_at_most_once_in_order(reading in arb_reading()) {
        let report = evaluate(&reading);
        if report.is_nominal() {
            return Ok(());
        }
        let indices: Vec<usize> = report
            .iter()
            .map(|i| group_index(&i.component).expect("component belongs to a group"))
            .collect();
        prop_assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "group indices not strictly increasing: {:?}",
            indices
        );
    }
}

// ── Sentinel appears only alone ──────────────────────────────────────────

proptest! {
    #[test]
    fn sentinel_only_when_nothing_fires(reading in arb_reading()) {
        let report = evaluate(&reading);
        let fired = RULE_GROUPS.iter().filter(|g| g.evaluate(&reading).is_some()).count();
        let sentinels = report.iter().filter(|i| i.component == NOMINAL_COMPONENT).count();
        if fired == 0 {
            prop_assert_eq!(sentinels, 1);
            prop_assert_eq!(report.issues()[0].severity, Severity::Low);
        } else {
            prop_assert_eq!(sentinels, 0);
            prop_assert_eq!(report.len(), fired);
        }
    }
}

// ── Battery tiers never overlap ──────────────────────────────────────────

proptest! {
    #[test]
    fn battery_reports_single_branch(voltage in 5.0f64..20.0) {
        let reading = VehicleReading { battery_voltage: voltage, ..VehicleReading::nominal() };
        let report = evaluate(&reading);
        let battery = report
            .iter()
            .filter(|i| group_index(&i.component) == Some(2))
            .count();
        let expected = usize::from(voltage < 12.2 || voltage > 14.8);
        prop_assert_eq!(battery, expected);
    }
}
