//! Diagnostic rule catalogue.
//!
//! Rules are plain data: each [`RuleGroup`] holds severity tiers checked in
//! order, first match wins. Groups are independent and [`RULE_GROUPS`] fixes
//! the order in which their issues appear in a report.
//!
//! All comparisons are strict, so a value sitting exactly on a threshold
//! falls through to the next (milder) tier.

use crate::issue::{Issue, Severity};
use crate::reading::{format_measurement as fmt, VehicleReading};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Engine temperature above which low coolant becomes critical (°C).
pub const ENGINE_TEMP_CRITICAL_C: f64 = 110.0;
/// Engine temperature considered elevated on its own (°C).
pub const ENGINE_TEMP_ELEVATED_C: f64 = 100.0;
/// Coolant level below which overheating is critical (%).
pub const COOLANT_LEVEL_LOW_PCT: f64 = 40.0;

pub const OIL_PRESSURE_CRITICAL_BAR: f64 = 1.2;
pub const OIL_PRESSURE_LOW_BAR: f64 = 1.5;
/// Distance since service that turns critically low oil pressure into a service fault (km).
pub const OIL_SERVICE_OVERDUE_KM: f64 = 8000.0;

pub const BATTERY_VERY_LOW_V: f64 = 11.8;
pub const BATTERY_LOW_V: f64 = 12.2;
pub const CHARGING_OVERVOLTAGE_V: f64 = 14.8;

pub const VIBRATION_EXCESSIVE_G: f64 = 1.2;
pub const VIBRATION_ELEVATED_G: f64 = 0.8;

pub const BRAKE_WEAR_CRITICAL_PCT: f64 = 80.0;
pub const BRAKE_WEAR_HIGH_PCT: f64 = 60.0;

pub const SERVICE_OVERDUE_KM: f64 = 15000.0;
pub const SERVICE_DUE_KM: f64 = 10000.0;

/// Component label of the sentinel issue emitted when no rule fires.
pub const NOMINAL_COMPONENT: &str = "No critical issues detected";

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// One severity level within a group.
#[derive(Clone, Copy)]
pub struct RuleTier {
    pub component: &'static str,
    pub severity: Severity,
    pub condition: fn(&VehicleReading) -> bool,
    /// Human-readable form of `condition`, for the rule listing.
    pub criteria: &'static str,
    pub reason: fn(&VehicleReading) -> String,
    pub action: &'static str,
}

impl RuleTier {
    fn issue(&self, reading: &VehicleReading) -> Issue {
        Issue {
            component: self.component.to_string(),
            severity: self.severity,
            reason: (self.reason)(reading),
            action: self.action.to_string(),
        }
    }
}

/// Mutually exclusive tiers over one or two related measurements.
#[derive(Clone, Copy)]
pub struct RuleGroup {
    pub name: &'static str,
    pub tiers: &'static [RuleTier],
}

impl RuleGroup {
    /// The issue for the first tier whose condition holds, if any.
    pub fn evaluate(&self, reading: &VehicleReading) -> Option<Issue> {
        self.tiers
            .iter()
            .find(|tier| (tier.condition)(reading))
            .map(|tier| tier.issue(reading))
    }
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// All rule groups, in report order.
pub const RULE_GROUPS: &[RuleGroup] = &[COOLING, OIL, BATTERY, VIBRATION, BRAKES, SERVICE];

// The High tier overlaps the Medium range (temp > 110 implies temp > 100);
// first match wins, so overheating with low coolant reports only once.
const COOLING: RuleGroup = RuleGroup {
    name: "cooling",
    tiers: &[
        RuleTier {
            component: "Engine cooling system",
            severity: Severity::High,
            condition: |r| {
                r.engine_temp > ENGINE_TEMP_CRITICAL_C && r.coolant_level < COOLANT_LEVEL_LOW_PCT
            },
            criteria: "engine_temp > 110 °C and coolant_level < 40 %",
            reason: |r| {
                format!(
                    "High engine temp ({}°C) and low coolant level ({}%).",
                    fmt(r.engine_temp),
                    fmt(r.coolant_level)
                )
            },
            action: "Immediate service recommended. Possible coolant leak, faulty pump or thermostat.",
        },
        RuleTier {
            component: "Engine",
            severity: Severity::Medium,
            condition: |r| r.engine_temp > ENGINE_TEMP_ELEVATED_C,
            criteria: "engine_temp > 100 °C",
            reason: |r| format!("Engine temp is elevated at {}°C.", fmt(r.engine_temp)),
            action: "Check coolant level, radiator and fan. Avoid long idling in traffic.",
        },
    ],
};

const OIL: RuleGroup = RuleGroup {
    name: "oil",
    tiers: &[
        RuleTier {
            component: "Lubrication / Oil system",
            severity: Severity::High,
            condition: |r| {
                r.oil_pressure < OIL_PRESSURE_CRITICAL_BAR
                    && r.km_since_service > OIL_SERVICE_OVERDUE_KM
            },
            criteria: "oil_pressure < 1.2 bar and km_since_service > 8000 km",
            reason: |r| {
                format!(
                    "Low oil pressure ({} bar) and high distance since last service ({} km).",
                    fmt(r.oil_pressure),
                    fmt(r.km_since_service)
                )
            },
            action: "Change oil and filter immediately. Possible pump or blockage issue.",
        },
        RuleTier {
            component: "Oil system",
            severity: Severity::Medium,
            condition: |r| r.oil_pressure < OIL_PRESSURE_LOW_BAR,
            criteria: "oil_pressure < 1.5 bar",
            reason: |r| format!("Oil pressure is on the lower side ({} bar).", fmt(r.oil_pressure)),
            action: "Check oil level and quality at next service.",
        },
    ],
};

// Undervoltage is checked before overvoltage; the three tiers cannot overlap.
const BATTERY: RuleGroup = RuleGroup {
    name: "battery",
    tiers: &[
        RuleTier {
            component: "Battery / Charging system",
            severity: Severity::High,
            condition: |r| r.battery_voltage < BATTERY_VERY_LOW_V,
            criteria: "battery_voltage < 11.8 V",
            reason: |r| format!("Battery voltage is very low ({} V).", fmt(r.battery_voltage)),
            action: "Check battery health and alternator. Risk of no-start condition.",
        },
        RuleTier {
            component: "Battery",
            severity: Severity::Medium,
            condition: |r| r.battery_voltage < BATTERY_LOW_V,
            criteria: "battery_voltage < 12.2 V",
            reason: |r| format!("Battery voltage is slightly low ({} V).", fmt(r.battery_voltage)),
            action: "Monitor starting behavior. Consider battery test.",
        },
        RuleTier {
            component: "Alternator / Regulator",
            severity: Severity::High,
            condition: |r| r.battery_voltage > CHARGING_OVERVOLTAGE_V,
            criteria: "battery_voltage > 14.8 V",
            reason: |r| {
                format!("Charging voltage is unusually high ({} V).", fmt(r.battery_voltage))
            },
            action: "Possible regulator fault. Risk of battery damage.",
        },
    ],
};

const VIBRATION: RuleGroup = RuleGroup {
    name: "vibration",
    tiers: &[
        RuleTier {
            component: "Drivetrain / Suspension",
            severity: Severity::High,
            condition: |r| r.vibration_level > VIBRATION_EXCESSIVE_G,
            criteria: "vibration_level > 1.2 g",
            reason: |r| {
                format!("Excessive vibration level detected ({} g).", fmt(r.vibration_level))
            },
            action: "Check wheel balance, suspension components and mounts.",
        },
        RuleTier {
            component: "Chassis / Tyres",
            severity: Severity::Medium,
            condition: |r| r.vibration_level > VIBRATION_ELEVATED_G,
            criteria: "vibration_level > 0.8 g",
            reason: |r| format!("Vibration is higher than normal ({} g).", fmt(r.vibration_level)),
            action: "Inspect tyres and alignment during next visit.",
        },
    ],
};

const BRAKES: RuleGroup = RuleGroup {
    name: "brakes",
    tiers: &[
        RuleTier {
            component: "Brake pads",
            severity: Severity::High,
            condition: |r| r.brake_wear > BRAKE_WEAR_CRITICAL_PCT,
            criteria: "brake_wear > 80 %",
            reason: |r| format!("Brake pad wear is {}%.", fmt(r.brake_wear)),
            action: "Replace pads as soon as possible to maintain braking performance.",
        },
        RuleTier {
            component: "Brake pads",
            severity: Severity::Medium,
            condition: |r| r.brake_wear > BRAKE_WEAR_HIGH_PCT,
            criteria: "brake_wear > 60 %",
            reason: |r| format!("Brake pad wear is {}%.", fmt(r.brake_wear)),
            action: "Plan pad replacement in upcoming service.",
        },
    ],
};

const SERVICE: RuleGroup = RuleGroup {
    name: "service",
    tiers: &[
        RuleTier {
            component: "General maintenance",
            severity: Severity::Medium,
            condition: |r| r.km_since_service > SERVICE_OVERDUE_KM,
            criteria: "km_since_service > 15000 km",
            reason: |r| format!("{} km since last service.", fmt(r.km_since_service)),
            action: "Overdue for general service. Fluids and filters may be degraded.",
        },
        RuleTier {
            component: "General maintenance",
            severity: Severity::Low,
            condition: |r| r.km_since_service > SERVICE_DUE_KM,
            criteria: "km_since_service > 10000 km",
            reason: |r| format!("{} km since last service.", fmt(r.km_since_service)),
            action: "Plan regular service soon.",
        },
    ],
};

/// The sentinel reported when every measurement is within range.
pub fn nominal_issue() -> Issue {
    Issue {
        component: NOMINAL_COMPONENT.to_string(),
        severity: Severity::Low,
        reason: "All monitored parameters are within normal range.".to_string(),
        action: "Continue normal use. Re-check after some time or before long trips.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
