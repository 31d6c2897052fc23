use super::*;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::gaps::{Gap, Priority};
use crate::model::scenario::{Scenario, ScenarioKind};
use crate::model::scores::{CompositeScore, SubScore};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("opsdiag_report_{}_{}", std::process::id(), id));
    dir
}

fn sample_report() -> EngineReport {
    EngineReport {
        engine: "burnout-risk",
        engine_name: "Burnout Risk",
        overall: CompositeScore {
            value: 62.5,
            band: "Critical",
        },
        sub_scores: vec![
            SubScore {
                dimension: "overtime",
                label: "Overtime Load",
                score: 80.0,
                band: "Critical",
                observations: 1,
            },
            SubScore {
                dimension: "engagement",
                label: "Engagement",
                score: 45.0,
                band: "High",
                observations: 1,
            },
        ],
        gaps: vec![Gap {
            dimension: "overtime",
            label: "Overtime Load",
            current: 20.0,
            target: 75.0,
            priority: Priority::High,
            action: "Cap weekly hours.",
        }],
        recommendations: vec!["Cap weekly hours.", "Escalate to leadership."],
        scenarios: Vec::new(),
    }
}

fn clean_report() -> EngineReport {
    EngineReport {
        gaps: Vec::new(),
        recommendations: Vec::new(),
        ..sample_report()
    }
}

#[test]
fn test_text_sections() {
    let rendered = text::render_report_text(&sample_report());

    assert!(rendered.starts_with("Burnout Risk Report\n===================\n"));
    assert!(rendered.contains("1. Overall assessment\n"));
    assert!(rendered.contains("Composite score: 62.5 (Critical)\n"));
    assert!(rendered.contains("1 of 1 lagging dimensions need immediate attention.\n"));
    assert!(rendered.contains("Overtime Load: 80.0 (Critical, 1 observed)\n"));
    assert!(rendered.contains("Engagement: 45.0 (High, 1 observed)\n"));
    assert!(rendered.contains("[High] Overtime Load: 20.0 against a target of 75\n"));
    assert!(rendered.contains("- Cap weekly hours.\n"));
    assert!(rendered.contains("- Escalate to leadership.\n"));
    assert!(!rendered.contains("5. Financial scenarios"));
}

#[test]
fn test_text_placeholders_when_clean() {
    let rendered = text::render_report_text(&clean_report());

    assert!(rendered.contains("Every measured dimension meets its target.\n"));
    assert!(rendered.contains("No dimension is below its target.\n"));
    assert!(rendered.contains("Nothing to recommend; keep measuring.\n"));
}

#[test]
fn test_text_scenario_lines() {
    let report = EngineReport {
        scenarios: vec![
            Scenario {
                kind: ScenarioKind::Conservative,
                multiplier: 0.7,
                payback_months: 8,
                broke_even: true,
                roi_percent: 404.0,
                total_benefit: 504_000.0,
            },
            Scenario {
                kind: ScenarioKind::Optimistic,
                multiplier: 1.3,
                payback_months: 36,
                broke_even: false,
                roi_percent: -12.5,
                total_benefit: 70_000.0,
            },
        ],
        ..sample_report()
    };
    let rendered = text::render_report_text(&report);

    assert!(rendered.contains("5. Financial scenarios\n"));
    assert!(rendered.contains(
        "Conservative (x0.7): payback in month 8, ROI 404.0%, total benefit 504000.00\n"
    ));
    assert!(rendered.contains(
        "Optimistic (x1.3): no payback within the horizon, ROI -12.5%, total benefit 70000.00\n"
    ));
}

#[test]
fn test_json_envelope_round_trips() {
    let rendered = json::render_report_json(&sample_report()).unwrap();
    assert!(rendered.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["tool"]["name"], "opsdiag");
    assert!(value["tool"]["version"].is_string());
    assert_eq!(value["report"]["engine"], "burnout-risk");
    assert_eq!(value["report"]["overall"]["value"], 62.5);
    assert_eq!(value["report"]["overall"]["band"], "Critical");
    assert_eq!(value["report"]["gaps"][0]["priority"], "High");
    assert_eq!(value["report"]["sub_scores"][1]["dimension"], "engagement");
    // Empty scenario lists stay out of the payload.
    assert!(value["report"].get("scenarios").is_none());
}

#[test]
fn test_json_includes_scenarios_when_present() {
    let report = EngineReport {
        scenarios: vec![Scenario {
            kind: ScenarioKind::Realistic,
            multiplier: 1.0,
            payback_months: 5,
            broke_even: true,
            roi_percent: 620.0,
            total_benefit: 720_000.0,
        }],
        ..sample_report()
    };
    let rendered = json::render_report_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["report"]["scenarios"][0]["kind"], "realistic");
    assert_eq!(value["report"]["scenarios"][0]["payback_months"], 5);
}

#[test]
fn test_write_reports_creates_both_files() {
    let dir = make_temp_dir();
    let report = sample_report();
    write_reports(&report, &dir, ReportFormat::Both).unwrap();

    let text_out = fs::read_to_string(dir.join("report.txt")).unwrap();
    let json_out = fs::read_to_string(dir.join("report.json")).unwrap();
    assert_eq!(text_out, text::render_report_text(&report));
    assert_eq!(json_out, json::render_report_json(&report).unwrap());
}

#[test]
fn test_write_reports_respects_format() {
    let dir = make_temp_dir();
    write_reports(&sample_report(), &dir, ReportFormat::Text).unwrap();

    assert!(dir.join("report.txt").exists());
    assert!(!dir.join("report.json").exists());
}
