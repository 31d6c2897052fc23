use serde::Serialize;

use crate::model::scores::EngineReport;

#[derive(Serialize)]
struct Envelope<'a> {
    tool: Tool,
    report: &'a EngineReport,
}

#[derive(Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

/// Aggregator contract: the report nests under `report`, tool identity
/// under `tool`, so downstream consumers can mix engines in one feed.
pub fn render_report_json(report: &EngineReport) -> serde_json::Result<String> {
    let envelope = Envelope {
        tool: Tool {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
        report,
    };
    let mut out = serde_json::to_string_pretty(&envelope)?;
    out.push('\n');
    Ok(out)
}
