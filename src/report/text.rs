use crate::model::gaps::Priority;
use crate::model::scores::EngineReport;

pub fn render_report_text(report: &EngineReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} Report\n", report.engine_name));
    out.push_str(&"=".repeat(report.engine_name.len() + 7));
    out.push_str("\n\n");

    out.push_str("1. Overall assessment\n");
    out.push_str(&format!(
        "Composite score: {:.1} ({})\n",
        report.overall.value, report.overall.band
    ));
    out.push_str(&format!("{}\n\n", overall_statement(report)));

    out.push_str("2. Dimension scores\n");
    for sub in &report.sub_scores {
        out.push_str(&format!(
            "{}: {:.1} ({}, {} observed)\n",
            sub.label, sub.score, sub.band, sub.observations
        ));
    }
    out.push('\n');

    out.push_str("3. Gaps\n");
    if report.gaps.is_empty() {
        out.push_str("No dimension is below its target.\n");
    } else {
        for gap in &report.gaps {
            out.push_str(&format!(
                "[{}] {}: {:.1} against a target of {:.0}\n",
                gap.priority.label(),
                gap.label,
                gap.current,
                gap.target
            ));
        }
    }
    out.push('\n');

    out.push_str("4. Recommendations\n");
    if report.recommendations.is_empty() {
        out.push_str("Nothing to recommend; keep measuring.\n");
    } else {
        for recommendation in &report.recommendations {
            out.push_str(&format!("- {recommendation}\n"));
        }
    }

    if !report.scenarios.is_empty() {
        out.push('\n');
        out.push_str("5. Financial scenarios\n");
        for scenario in &report.scenarios {
            let payback = if scenario.broke_even {
                format!("payback in month {}", scenario.payback_months)
            } else {
                "no payback within the horizon".to_string()
            };
            out.push_str(&format!(
                "{} (x{:.1}): {}, ROI {:.1}%, total benefit {:.2}\n",
                scenario.kind.label(),
                scenario.multiplier,
                payback,
                scenario.roi_percent,
                scenario.total_benefit
            ));
        }
    }

    out
}

fn overall_statement(report: &EngineReport) -> String {
    let high = report
        .gaps
        .iter()
        .filter(|gap| gap.priority == Priority::High)
        .count();
    if report.gaps.is_empty() {
        "Every measured dimension meets its target.".to_string()
    } else if high > 0 {
        format!(
            "{high} of {} lagging dimensions need immediate attention.",
            report.gaps.len()
        )
    } else {
        format!(
            "{} dimensions sit below target; none is critical.",
            report.gaps.len()
        )
    }
}
