//! Server-side HTML for the diagnostics page.
//!
//! One handlebars template (`templates/index.hbs`) holds the input form, an
//! optional validation banner and, after a successful submission, the report
//! table. Report rows are emitted in the order the evaluator produced them.

use std::sync::LazyLock;

use handlebars::{Handlebars, RenderError};
use html_escape::encode_double_quoted_attribute;
use serde::Serialize;
use vehidiag_core::issue::{DiagnosticReport, Severity};
use vehidiag_core::reading::{format_measurement, VehicleReading, FIELD_NAMES};

const PAGE_TEMPLATE: &str = "index";

/// Display label and unit for each form field, in [`FIELD_NAMES`] order.
const FIELD_LABELS: [(&str, &str); 7] = [
    ("Engine temperature", "°C"),
    ("Oil pressure", "bar"),
    ("Battery voltage", "V"),
    ("Vibration level", "g"),
    ("Brake pad wear", "%"),
    ("Coolant level", "%"),
    ("Distance since last service", "km"),
];

// Every `{{value}}` lands in element text or a double-quoted attribute, so
// escaping `& < > "` covers both.
static TEMPLATES: LazyLock<Handlebars<'static>> = LazyLock::new(|| {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(|s| encode_double_quoted_attribute(s).into_owned());
    registry
        .register_template_string(PAGE_TEMPLATE, include_str!("../templates/index.hbs"))
        .expect("embedded page template must parse");
    registry
});

/// Everything the page needs to render.
#[derive(Debug)]
pub struct PageContext<'a> {
    /// Text shown in each input, in [`FIELD_NAMES`] order.
    pub inputs: [String; 7],
    /// The evaluated reading, present only after a successful submission.
    pub reading: Option<&'a VehicleReading>,
    pub report: Option<&'a DiagnosticReport>,
    pub error: Option<&'a str>,
}

impl<'a> PageContext<'a> {
    /// A form pre-filled from `reading`, with no report.
    pub fn form(reading: &VehicleReading) -> Self {
        Self {
            inputs: reading.fields().map(|(_, v)| format_measurement(v)),
            reading: None,
            report: None,
            error: None,
        }
    }

    /// The form echoing `reading` plus its evaluated report.
    pub fn with_report(reading: &'a VehicleReading, report: &'a DiagnosticReport) -> Self {
        Self {
            reading: Some(reading),
            report: Some(report),
            ..Self::form(reading)
        }
    }

    /// The form echoing the submitted text with a validation message.
    pub fn with_error(inputs: [String; 7], error: &'a str) -> Self {
        Self {
            inputs,
            reading: None,
            report: None,
            error: Some(error),
        }
    }

    fn view(&self) -> PageView<'_> {
        let fields = FIELD_NAMES
            .iter()
            .zip(FIELD_LABELS)
            .zip(&self.inputs)
            .map(|((&name, (label, unit)), value)| FieldView {
                name,
                label,
                unit,
                value: value.as_str(),
            })
            .collect();

        let reading = self.reading.map(|reading| {
            reading
                .fields()
                .iter()
                .zip(FIELD_LABELS)
                .map(|(&(_, value), (label, unit))| MeasurementView {
                    label,
                    value: format_measurement(value),
                    unit,
                })
                .collect()
        });

        let issues = self.report.map(|report| {
            report
                .iter()
                .map(|issue| IssueView {
                    component: &issue.component,
                    severity: issue.severity,
                    class: severity_class(issue.severity),
                    reason: &issue.reason,
                    action: &issue.action,
                })
                .collect()
        });

        PageView {
            error: self.error,
            fields,
            reading,
            issues,
        }
    }
}

// ---------------------------------------------------------------------------
// Template data
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct PageView<'a> {
    error: Option<&'a str>,
    fields: Vec<FieldView<'a>>,
    reading: Option<Vec<MeasurementView>>,
    issues: Option<Vec<IssueView<'a>>>,
}

#[derive(Serialize)]
struct FieldView<'a> {
    name: &'static str,
    label: &'static str,
    unit: &'static str,
    value: &'a str,
}

#[derive(Serialize)]
struct MeasurementView {
    label: &'static str,
    value: String,
    unit: &'static str,
}

#[derive(Serialize)]
struct IssueView<'a> {
    component: &'a str,
    severity: Severity,
    class: &'static str,
    reason: &'a str,
    action: &'a str,
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "sev-high",
        Severity::Medium => "sev-medium",
        Severity::Low => "sev-low",
    }
}

/// Render the full HTML document.
pub fn render_page(ctx: &PageContext<'_>) -> Result<String, RenderError> {
    TEMPLATES.render(PAGE_TEMPLATE, &ctx.view())
}
