//! HTML rendering for the report email.

use tera::{Context, Tera};

use crate::error::NotifyError;
use crate::ReportEmail;

/// Registered with an `.html` name so Tera escapes the section texts.
const REPORT_TEMPLATE: &str = include_str!("../templates/report.html.tera");

/// Render the report email body.
///
/// The `ReportEmail` fields become the template context variables.
pub fn report_html(email: &ReportEmail) -> Result<String, NotifyError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report.html", REPORT_TEMPLATE)
        .map_err(|e| NotifyError::TemplateRender(e.to_string()))?;

    let value = serde_json::to_value(email)?;
    let context = Context::from_value(value)
        .map_err(|e| NotifyError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report.html", &context)?;
    Ok(rendered)
}
