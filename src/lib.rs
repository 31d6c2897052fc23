//! Deterministic scoring and recommendation engine for operational
//! business diagnostics. Eight built-in engines turn flat metrics or
//! questionnaire answers into a banded composite score, per-dimension
//! sub-scores, prioritized gaps, and recommendation lists.
//!
//! ```no_run
//! use opsdiag::{AssessmentInput, Engine, EngineKind};
//!
//! let engine = Engine::builtin(EngineKind::ScaleReadiness)?;
//! let input: AssessmentInput = serde_json::from_str(
//!     r#"{"fields": {
//!         "team_readiness": 80, "process_maturity": 70,
//!         "system_scalability": 60, "capital_runway": 90,
//!         "market_demand": 75
//!     }}"#,
//! )?;
//! let report = engine.compute(&input)?;
//! println!("{} ({})", report.overall.value, report.overall.band);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engines;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use engines::{builtin_engines, ConfigError, Engine, EngineKind, EngineOverrides};
pub use model::scores::EngineReport;
pub use model::{Answer, AssessmentInput};
pub use pipeline::ValidationError;
pub use report::{write_reports, ReportFormat};
