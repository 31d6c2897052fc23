use crate::model::bands::BandDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    OperationalHealth,
    CostLeakage,
    BreakEven,
    ScaleReadiness,
    BurnoutRisk,
    GovernanceMaturity,
    DecisionBottleneck,
    FundraiseFit,
}

impl EngineKind {
    pub const ALL: [EngineKind; 8] = [
        EngineKind::OperationalHealth,
        EngineKind::CostLeakage,
        EngineKind::BreakEven,
        EngineKind::ScaleReadiness,
        EngineKind::BurnoutRisk,
        EngineKind::GovernanceMaturity,
        EngineKind::DecisionBottleneck,
        EngineKind::FundraiseFit,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EngineKind::OperationalHealth => "operational-health",
            EngineKind::CostLeakage => "cost-leakage",
            EngineKind::BreakEven => "break-even",
            EngineKind::ScaleReadiness => "scale-readiness",
            EngineKind::BurnoutRisk => "burnout-risk",
            EngineKind::GovernanceMaturity => "governance-maturity",
            EngineKind::DecisionBottleneck => "decision-bottleneck",
            EngineKind::FundraiseFit => "fundraise-fit",
        }
    }

    pub fn from_id(id: &str) -> Option<EngineKind> {
        EngineKind::ALL.iter().copied().find(|kind| kind.id() == id)
    }
}

/// Outward orientation of the composite. Progress engines report the
/// weighted score as-is; exposure engines report its complement, so a
/// higher number always means more of what the engine is named after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Progress,
    Exposure,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub key: &'static str,
    pub min: f64,
    pub max: f64,
    pub required: bool,
    pub integer: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct QuestionDef {
    pub id: &'static str,
    pub prompt: &'static str,
    pub dimension: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Raw value is already on the 0..=100 scale.
    Percent,
    /// min(100, raw / cap * 100).
    PerUnitCap(f64),
    /// Computed from the validated fields by a named formula.
    Derived(Formula),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    PaybackSpeed,
    RoiStrength,
    BenefitCoverage,
    RunwayExtension,
    RevenueTraction,
    DilutionHeadroom,
    GrowthMomentum,
}

#[derive(Debug, Clone, Copy)]
pub struct DimensionDef {
    pub key: &'static str,
    pub label: &'static str,
    pub field: Option<&'static str>,
    pub weight: f64,
    pub inverted: bool,
    pub target: f64,
    pub scale: Scale,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AdviceDef {
    pub dimension: &'static str,
    pub band: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    AtOrAbove,
    Below,
}

#[derive(Debug, Clone, Copy)]
pub struct UrgentDef {
    pub trigger: Trigger,
    pub threshold: f64,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FinancialDef {
    pub investment_field: &'static str,
    pub benefit_field: &'static str,
    pub ramp_field: &'static str,
    pub horizon_months: u32,
    pub conservative: f64,
    pub optimistic: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct EngineDef {
    pub kind: EngineKind,
    pub name: &'static str,
    pub orientation: Orientation,
    pub fields: &'static [FieldDef],
    pub questions: &'static [QuestionDef],
    pub dimensions: &'static [DimensionDef],
    pub bands: &'static [BandDef],
    pub advice: &'static [AdviceDef],
    pub urgent: Option<UrgentDef>,
    pub financial: Option<FinancialDef>,
}

const OPERATIONAL_HEALTH_QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        id: "process_documented",
        prompt: "Core processes are documented and current",
        dimension: "par",
        weight: 0.5,
    },
    QuestionDef {
        id: "process_followed",
        prompt: "Day-to-day work follows the documented process",
        dimension: "par",
        weight: 0.5,
    },
    QuestionDef {
        id: "repetitive_automated",
        prompt: "Repetitive tasks run automated rather than by hand",
        dimension: "aq",
        weight: 0.5,
    },
    QuestionDef {
        id: "tool_integration",
        prompt: "Systems pass data between each other without re-keying",
        dimension: "aq",
        weight: 0.5,
    },
    QuestionDef {
        id: "context_switching",
        prompt: "People juggle many unrelated tasks in a typical day",
        dimension: "cls",
        weight: 0.5,
    },
    QuestionDef {
        id: "mental_overhead",
        prompt: "Tracking work status takes significant mental effort",
        dimension: "cls",
        weight: 0.5,
    },
    QuestionDef {
        id: "leadership_updates",
        prompt: "Leadership receives regular structured operational updates",
        dimension: "lv",
        weight: 0.5,
    },
    QuestionDef {
        id: "decision_visibility",
        prompt: "Decisions and their owners are visible to the team",
        dimension: "lv",
        weight: 0.5,
    },
    QuestionDef {
        id: "anomaly_detection",
        prompt: "Operational anomalies are detected quickly",
        dimension: "mttar",
        weight: 0.5,
    },
    QuestionDef {
        id: "anomaly_resolution",
        prompt: "Once detected, anomalies are resolved quickly",
        dimension: "mttar",
        weight: 0.5,
    },
];

const OPERATIONAL_HEALTH_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        key: "par",
        label: "Process Adherence Rate",
        field: None,
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Tighten process adherence routines.",
    },
    DimensionDef {
        key: "aq",
        label: "Automation Quotient",
        field: None,
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Raise automation coverage step by step.",
    },
    DimensionDef {
        key: "cls",
        label: "Cognitive Load Score",
        field: None,
        weight: 0.2,
        inverted: true,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep cognitive load per person in check.",
    },
    DimensionDef {
        key: "lv",
        label: "Leadership Visibility",
        field: None,
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep the leadership reporting cadence steady.",
    },
    DimensionDef {
        key: "mttar",
        label: "Anomaly Resolution Speed",
        field: None,
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep anomaly response drills current.",
    },
];

const OPERATIONAL_HEALTH_BANDS: &[BandDef] = &[
    BandDef { label: "Critical", low: 0.0 },
    BandDef { label: "NeedsImprovement", low: 50.0 },
    BandDef { label: "Good", low: 70.0 },
    BandDef { label: "Excellent", low: 85.0 },
];

const OPERATIONAL_HEALTH_ADVICE: &[AdviceDef] = &[
    AdviceDef {
        dimension: "par",
        band: "Critical",
        text: "Document core processes now, starting with the five that touch revenue.",
    },
    AdviceDef {
        dimension: "par",
        band: "NeedsImprovement",
        text: "Audit where documented process and daily practice diverge, then close the top three gaps.",
    },
    AdviceDef {
        dimension: "aq",
        band: "Critical",
        text: "Automate the single most repetitive manual task this quarter.",
    },
    AdviceDef {
        dimension: "aq",
        band: "NeedsImprovement",
        text: "Connect the tools your team re-keys data between and remove one manual handoff per month.",
    },
    AdviceDef {
        dimension: "cls",
        band: "Critical",
        text: "Cut parallel workstreams per person to two and batch interruptions into fixed windows.",
    },
    AdviceDef {
        dimension: "cls",
        band: "NeedsImprovement",
        text: "Reduce context switching by grouping similar work into dedicated blocks.",
    },
    AdviceDef {
        dimension: "lv",
        band: "Critical",
        text: "Stand up a weekly operating review so leadership sees status without chasing it.",
    },
    AdviceDef {
        dimension: "lv",
        band: "NeedsImprovement",
        text: "Publish decisions and their owners where the whole team can see them.",
    },
    AdviceDef {
        dimension: "mttar",
        band: "Critical",
        text: "Define who is paged when key metrics drift and rehearse the response path.",
    },
    AdviceDef {
        dimension: "mttar",
        band: "NeedsImprovement",
        text: "Shorten triage by alerting on the three most revenue-critical metrics.",
    },
];

const COST_LEAKAGE_FIELDS: &[FieldDef] = &[
    FieldDef { key: "manual_rework_hours", min: 0.0, max: 80.0, required: true, integer: false },
    FieldDef { key: "duplicate_tool_count", min: 0.0, max: 50.0, required: true, integer: true },
    FieldDef { key: "error_rate_pct", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "low_value_meeting_hours", min: 0.0, max: 60.0, required: false, integer: false },
    FieldDef { key: "unused_license_pct", min: 0.0, max: 100.0, required: false, integer: false },
];

const COST_LEAKAGE_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        key: "manual_rework",
        label: "Manual Rework",
        field: Some("manual_rework_hours"),
        weight: 0.30,
        inverted: true,
        target: 75.0,
        scale: Scale::PerUnitCap(20.0),
        action: "Keep rework hours visible and trending down.",
    },
    DimensionDef {
        key: "tool_sprawl",
        label: "Tool Sprawl",
        field: Some("duplicate_tool_count"),
        weight: 0.20,
        inverted: true,
        target: 75.0,
        scale: Scale::PerUnitCap(10.0),
        action: "Review the tool inventory against actual usage.",
    },
    DimensionDef {
        key: "error_correction",
        label: "Error Correction",
        field: Some("error_rate_pct"),
        weight: 0.20,
        inverted: true,
        target: 75.0,
        scale: Scale::Percent,
        action: "Track correction effort by root cause.",
    },
    DimensionDef {
        key: "meeting_load",
        label: "Meeting Load",
        field: Some("low_value_meeting_hours"),
        weight: 0.15,
        inverted: true,
        target: 75.0,
        scale: Scale::PerUnitCap(25.0),
        action: "Keep recurring meetings on a standing review list.",
    },
    DimensionDef {
        key: "license_waste",
        label: "License Waste",
        field: Some("unused_license_pct"),
        weight: 0.15,
        inverted: true,
        target: 75.0,
        scale: Scale::Percent,
        action: "Reconcile license seats against active users.",
    },
];

const COST_LEAKAGE_BANDS: &[BandDef] = &[
    BandDef { label: "Contained", low: 0.0 },
    BandDef { label: "Moderate", low: 25.0 },
    BandDef { label: "Elevated", low: 50.0 },
    BandDef { label: "Severe", low: 75.0 },
];

const COST_LEAKAGE_ADVICE: &[AdviceDef] = &[
    AdviceDef {
        dimension: "manual_rework",
        band: "Severe",
        text: "Manual rework is consuming whole workdays; map the rework loop and fix the upstream defect.",
    },
    AdviceDef {
        dimension: "manual_rework",
        band: "Elevated",
        text: "Track rework hours per week and eliminate the most frequent cause first.",
    },
    AdviceDef {
        dimension: "tool_sprawl",
        band: "Severe",
        text: "Consolidate overlapping tools and cancel duplicates at the next renewal date.",
    },
    AdviceDef {
        dimension: "tool_sprawl",
        band: "Elevated",
        text: "Inventory subscriptions and merge the two tools with the most overlap.",
    },
    AdviceDef {
        dimension: "error_correction",
        band: "Severe",
        text: "Error rates this high need a stop-the-line review of the process producing them.",
    },
    AdviceDef {
        dimension: "error_correction",
        band: "Elevated",
        text: "Add a lightweight check step where most corrections originate.",
    },
    AdviceDef {
        dimension: "meeting_load",
        band: "Severe",
        text: "Cut recurring meetings in half and move status updates to written form.",
    },
    AdviceDef {
        dimension: "meeting_load",
        band: "Elevated",
        text: "Audit recurring meetings and drop any without a decision owner.",
    },
    AdviceDef {
        dimension: "license_waste",
        band: "Severe",
        text: "Reclaim unused licenses before the next billing cycle.",
    },
    AdviceDef {
        dimension: "license_waste",
        band: "Elevated",
        text: "Review seat utilization quarterly and right-size contracts.",
    },
];

const BREAK_EVEN_FIELDS: &[FieldDef] = &[
    FieldDef { key: "initial_investment", min: 0.01, max: 1e12, required: true, integer: false },
    FieldDef { key: "monthly_benefit", min: 0.0, max: 1e9, required: true, integer: false },
    FieldDef { key: "ramp_up_months", min: 0.0, max: 24.0, required: false, integer: true },
];

const BREAK_EVEN_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        key: "payback_speed",
        label: "Payback Speed",
        field: None,
        weight: 0.40,
        inverted: false,
        target: 70.0,
        scale: Scale::Derived(Formula::PaybackSpeed),
        action: "Revisit the payback assumptions quarterly.",
    },
    DimensionDef {
        key: "roi_strength",
        label: "Return Strength",
        field: None,
        weight: 0.35,
        inverted: false,
        target: 70.0,
        scale: Scale::Derived(Formula::RoiStrength),
        action: "Validate the benefit estimate against realized numbers.",
    },
    DimensionDef {
        key: "benefit_coverage",
        label: "Benefit Coverage",
        field: None,
        weight: 0.25,
        inverted: false,
        target: 70.0,
        scale: Scale::Derived(Formula::BenefitCoverage),
        action: "Keep a contingency margin between benefits and outlay.",
    },
];

const BREAK_EVEN_BANDS: &[BandDef] = &[
    BandDef { label: "NotViable", low: 0.0 },
    BandDef { label: "Marginal", low: 40.0 },
    BandDef { label: "Viable", low: 60.0 },
    BandDef { label: "Strong", low: 80.0 },
];

const BREAK_EVEN_ADVICE: &[AdviceDef] = &[
    AdviceDef {
        dimension: "payback_speed",
        band: "NotViable",
        text: "Payback exceeds the planning horizon; reduce the upfront investment or phase it.",
    },
    AdviceDef {
        dimension: "payback_speed",
        band: "Marginal",
        text: "Shorten payback by negotiating deferred payment terms on the investment.",
    },
    AdviceDef {
        dimension: "roi_strength",
        band: "NotViable",
        text: "Projected return does not justify the outlay; revisit the benefit assumptions.",
    },
    AdviceDef {
        dimension: "roi_strength",
        band: "Marginal",
        text: "Strengthen return by targeting the highest-margin benefit stream first.",
    },
    AdviceDef {
        dimension: "benefit_coverage",
        band: "NotViable",
        text: "Projected benefits never cover the investment; rescope before committing.",
    },
    AdviceDef {
        dimension: "benefit_coverage",
        band: "Marginal",
        text: "Build contingency into the benefit estimate before approving spend.",
    },
];

const SCALE_READINESS_FIELDS: &[FieldDef] = &[
    FieldDef { key: "team_readiness", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "process_maturity", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "system_scalability", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "capital_runway", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "market_demand", min: 0.0, max: 100.0, required: true, integer: false },
];

const SCALE_READINESS_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        key: "team_readiness",
        label: "Team Readiness",
        field: Some("team_readiness"),
        weight: 0.25,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep hiring and training ahead of demand.",
    },
    DimensionDef {
        key: "process_maturity",
        label: "Process Maturity",
        field: Some("process_maturity"),
        weight: 0.20,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Standardize delivery before adding volume.",
    },
    DimensionDef {
        key: "system_scalability",
        label: "System Scalability",
        field: Some("system_scalability"),
        weight: 0.20,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Plan system capacity a cycle ahead of growth.",
    },
    DimensionDef {
        key: "capital_runway",
        label: "Capital Runway",
        field: Some("capital_runway"),
        weight: 0.20,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Protect runway while scaling spend.",
    },
    DimensionDef {
        key: "market_demand",
        label: "Market Demand",
        field: Some("market_demand"),
        weight: 0.15,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep demand evidence current as you grow.",
    },
];

const SCALE_READINESS_BANDS: &[BandDef] = &[
    BandDef { label: "NotReady", low: 0.0 },
    BandDef { label: "PartiallyReady", low: 40.0 },
    BandDef { label: "Ready", low: 65.0 },
    BandDef { label: "HighlyReady", low: 85.0 },
];

const SCALE_READINESS_ADVICE: &[AdviceDef] = &[
    AdviceDef {
        dimension: "team_readiness",
        band: "NotReady",
        text: "Hire or train for the two roles that block growth before adding demand.",
    },
    AdviceDef {
        dimension: "team_readiness",
        band: "PartiallyReady",
        text: "Cross-train key functions so growth does not hinge on single people.",
    },
    AdviceDef {
        dimension: "process_maturity",
        band: "NotReady",
        text: "Write down the delivery process end to end before scaling it.",
    },
    AdviceDef {
        dimension: "process_maturity",
        band: "PartiallyReady",
        text: "Standardize the most variable step in delivery.",
    },
    AdviceDef {
        dimension: "system_scalability",
        band: "NotReady",
        text: "Current systems will not survive a doubling of load; plan the upgrade before marketing spend.",
    },
    AdviceDef {
        dimension: "system_scalability",
        band: "PartiallyReady",
        text: "Load-test core systems against twice today's volume.",
    },
    AdviceDef {
        dimension: "capital_runway",
        band: "NotReady",
        text: "Secure at least twelve months of runway before committing to scale.",
    },
    AdviceDef {
        dimension: "capital_runway",
        band: "PartiallyReady",
        text: "Extend runway by tightening burn before expansion.",
    },
    AdviceDef {
        dimension: "market_demand",
        band: "NotReady",
        text: "Validate demand with paid pilots before building capacity.",
    },
    AdviceDef {
        dimension: "market_demand",
        band: "PartiallyReady",
        text: "Deepen demand evidence beyond early adopters.",
    },
];

const BURNOUT_RISK_FIELDS: &[FieldDef] = &[
    FieldDef { key: "average_overtime_hours", min: 0.0, max: 80.0, required: true, integer: false },
    FieldDef { key: "engagement_index", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "turnover_rate_pct", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "sick_days_per_quarter", min: 0.0, max: 30.0, required: false, integer: false },
    FieldDef { key: "after_hours_comms_pct", min: 0.0, max: 100.0, required: false, integer: false },
];

const BURNOUT_RISK_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        key: "overtime",
        label: "Overtime Load",
        field: Some("average_overtime_hours"),
        weight: 0.25,
        inverted: true,
        target: 75.0,
        scale: Scale::PerUnitCap(20.0),
        action: "Keep overtime exceptional, not structural.",
    },
    DimensionDef {
        key: "engagement",
        label: "Engagement",
        field: Some("engagement_index"),
        weight: 0.20,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep acting on engagement survey results.",
    },
    DimensionDef {
        key: "turnover",
        label: "Turnover",
        field: Some("turnover_rate_pct"),
        weight: 0.20,
        inverted: true,
        target: 75.0,
        scale: Scale::Percent,
        action: "Watch regretted attrition monthly.",
    },
    DimensionDef {
        key: "sick_leave",
        label: "Sick Leave",
        field: Some("sick_days_per_quarter"),
        weight: 0.15,
        inverted: true,
        target: 75.0,
        scale: Scale::PerUnitCap(15.0),
        action: "Watch sick-day clustering by team.",
    },
    DimensionDef {
        key: "after_hours",
        label: "After-Hours Load",
        field: Some("after_hours_comms_pct"),
        weight: 0.20,
        inverted: true,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep after-hours communication the exception.",
    },
];

const BURNOUT_RISK_BANDS: &[BandDef] = &[
    BandDef { label: "Low", low: 0.0 },
    BandDef { label: "Moderate", low: 30.0 },
    BandDef { label: "High", low: 45.0 },
    BandDef { label: "Critical", low: 60.0 },
];

const BURNOUT_RISK_ADVICE: &[AdviceDef] = &[
    AdviceDef {
        dimension: "overtime",
        band: "Critical",
        text: "Sustained overtime at this level precedes attrition; cap weekly hours and add capacity.",
    },
    AdviceDef {
        dimension: "overtime",
        band: "High",
        text: "Rotate on-call and deadline crunch so overtime is not concentrated on the same people.",
    },
    AdviceDef {
        dimension: "engagement",
        band: "Critical",
        text: "Engagement is critically low; run skip-level conversations within two weeks.",
    },
    AdviceDef {
        dimension: "engagement",
        band: "High",
        text: "Act visibly on the top engagement survey complaint.",
    },
    AdviceDef {
        dimension: "turnover",
        band: "Critical",
        text: "Turnover is compounding workload; prioritize backfill and exit-interview themes.",
    },
    AdviceDef {
        dimension: "turnover",
        band: "High",
        text: "Track regretted attrition monthly and address the leading cause.",
    },
    AdviceDef {
        dimension: "sick_leave",
        band: "Critical",
        text: "Sick leave at this rate signals exhaustion; audit workload distribution now.",
    },
    AdviceDef {
        dimension: "sick_leave",
        band: "High",
        text: "Rebalance workload where sick days cluster before it spreads.",
    },
    AdviceDef {
        dimension: "after_hours",
        band: "Critical",
        text: "After-hours traffic has been normalized; set and enforce quiet hours.",
    },
    AdviceDef {
        dimension: "after_hours",
        band: "High",
        text: "Move non-urgent communication to scheduled send.",
    },
];

const GOVERNANCE_MATURITY_FIELDS: &[FieldDef] = &[
    FieldDef { key: "documentation", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "board_oversight", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "compliance_controls", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "risk_management", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "financial_transparency", min: 0.0, max: 100.0, required: true, integer: false },
];

const GOVERNANCE_MATURITY_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        key: "documentation",
        label: "Documentation",
        field: Some("documentation"),
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep governance documents current.",
    },
    DimensionDef {
        key: "board_oversight",
        label: "Board Oversight",
        field: Some("board_oversight"),
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Hold the board cadence steady.",
    },
    DimensionDef {
        key: "compliance_controls",
        label: "Compliance Controls",
        field: Some("compliance_controls"),
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep control testing on the calendar.",
    },
    DimensionDef {
        key: "risk_management",
        label: "Risk Management",
        field: Some("risk_management"),
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep the risk register reviewed and owned.",
    },
    DimensionDef {
        key: "financial_transparency",
        label: "Financial Transparency",
        field: Some("financial_transparency"),
        weight: 0.2,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep financial reporting on a fixed calendar.",
    },
];

const GOVERNANCE_MATURITY_BANDS: &[BandDef] = &[
    BandDef { label: "Initial", low: 0.0 },
    BandDef { label: "Emerging", low: 25.0 },
    BandDef { label: "Established", low: 50.0 },
    BandDef { label: "Advanced", low: 75.0 },
];

const GOVERNANCE_MATURITY_ADVICE: &[AdviceDef] = &[
    AdviceDef {
        dimension: "documentation",
        band: "Initial",
        text: "Create the minimum governance pack: charters, policies, and decision rights.",
    },
    AdviceDef {
        dimension: "documentation",
        band: "Emerging",
        text: "Close documentation gaps for the processes regulators ask about first.",
    },
    AdviceDef {
        dimension: "board_oversight",
        band: "Initial",
        text: "Establish a board cadence with a standing agenda and pre-read.",
    },
    AdviceDef {
        dimension: "board_oversight",
        band: "Emerging",
        text: "Add independent review to the board calendar.",
    },
    AdviceDef {
        dimension: "compliance_controls",
        band: "Initial",
        text: "Map applicable obligations and assign an owner to each.",
    },
    AdviceDef {
        dimension: "compliance_controls",
        band: "Emerging",
        text: "Test key controls annually instead of assuming they run.",
    },
    AdviceDef {
        dimension: "risk_management",
        band: "Initial",
        text: "Stand up a risk register with owners and review dates.",
    },
    AdviceDef {
        dimension: "risk_management",
        band: "Emerging",
        text: "Quantify top risks and set explicit tolerances.",
    },
    AdviceDef {
        dimension: "financial_transparency",
        band: "Initial",
        text: "Produce monthly financials on a fixed calendar.",
    },
    AdviceDef {
        dimension: "financial_transparency",
        band: "Emerging",
        text: "Add variance commentary to monthly reporting.",
    },
];

const DECISION_BOTTLENECK_FIELDS: &[FieldDef] = &[
    FieldDef { key: "approval_layers", min: 0.0, max: 12.0, required: true, integer: true },
    FieldDef { key: "decision_latency_days", min: 0.0, max: 60.0, required: true, integer: false },
    FieldDef { key: "escalation_rate_pct", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "delegation_index", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "meeting_overhead_hours", min: 0.0, max: 40.0, required: false, integer: false },
];

const DECISION_BOTTLENECK_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        key: "approval_depth",
        label: "Approval Depth",
        field: Some("approval_layers"),
        weight: 0.25,
        inverted: true,
        target: 75.0,
        scale: Scale::PerUnitCap(6.0),
        action: "Keep approval chains as short as accountability allows.",
    },
    DimensionDef {
        key: "latency",
        label: "Decision Latency",
        field: Some("decision_latency_days"),
        weight: 0.25,
        inverted: true,
        target: 75.0,
        scale: Scale::PerUnitCap(14.0),
        action: "Track decision age alongside decision quality.",
    },
    DimensionDef {
        key: "escalation",
        label: "Escalation Pressure",
        field: Some("escalation_rate_pct"),
        weight: 0.20,
        inverted: true,
        target: 75.0,
        scale: Scale::Percent,
        action: "Keep escalation reserved for genuine exceptions.",
    },
    DimensionDef {
        key: "delegation",
        label: "Delegation",
        field: Some("delegation_index"),
        weight: 0.15,
        inverted: false,
        target: 75.0,
        scale: Scale::Percent,
        action: "Grow delegation with clear guardrails.",
    },
    DimensionDef {
        key: "meeting_overhead",
        label: "Meeting Overhead",
        field: Some("meeting_overhead_hours"),
        weight: 0.15,
        inverted: true,
        target: 75.0,
        scale: Scale::PerUnitCap(15.0),
        action: "Prefer written proposals over approval meetings.",
    },
];

const DECISION_BOTTLENECK_BANDS: &[BandDef] = &[
    BandDef { label: "Fluid", low: 0.0 },
    BandDef { label: "Congested", low: 30.0 },
    BandDef { label: "Bottlenecked", low: 55.0 },
    BandDef { label: "Gridlocked", low: 75.0 },
];

const DECISION_BOTTLENECK_ADVICE: &[AdviceDef] = &[
    AdviceDef {
        dimension: "approval_depth",
        band: "Gridlocked",
        text: "Approval chains this deep stall execution; delete the layers that never reject.",
    },
    AdviceDef {
        dimension: "approval_depth",
        band: "Bottlenecked",
        text: "Set approval thresholds so routine spend skips senior sign-off.",
    },
    AdviceDef {
        dimension: "latency",
        band: "Gridlocked",
        text: "Decisions are aging past usefulness; set a 48-hour default for reversible calls.",
    },
    AdviceDef {
        dimension: "latency",
        band: "Bottlenecked",
        text: "Timebox decision reviews and record the due date with the request.",
    },
    AdviceDef {
        dimension: "escalation",
        band: "Gridlocked",
        text: "Most decisions escalate; push authority down with written guardrails.",
    },
    AdviceDef {
        dimension: "escalation",
        band: "Bottlenecked",
        text: "Define which decision types genuinely need escalation.",
    },
    AdviceDef {
        dimension: "delegation",
        band: "Gridlocked",
        text: "Delegation is absent; assign owners with budget authority for recurring calls.",
    },
    AdviceDef {
        dimension: "delegation",
        band: "Bottlenecked",
        text: "Grow delegation by pairing new owners with a review period.",
    },
    AdviceDef {
        dimension: "meeting_overhead",
        band: "Gridlocked",
        text: "Decision meetings consume the calendar; move approvals to asynchronous review.",
    },
    AdviceDef {
        dimension: "meeting_overhead",
        band: "Bottlenecked",
        text: "Replace standing approval meetings with written proposals.",
    },
];

const FUNDRAISE_FIT_FIELDS: &[FieldDef] = &[
    FieldDef { key: "target_raise", min: 0.01, max: 1e12, required: true, integer: false },
    FieldDef { key: "monthly_burn", min: 0.01, max: 1e9, required: true, integer: false },
    FieldDef { key: "monthly_revenue", min: 0.0, max: 1e9, required: true, integer: false },
    FieldDef { key: "projected_monthly_gain", min: 0.0, max: 1e9, required: true, integer: false },
    FieldDef { key: "dilution_pct", min: 0.0, max: 100.0, required: true, integer: false },
    FieldDef { key: "monthly_growth_pct", min: 0.0, max: 100.0, required: false, integer: false },
    FieldDef { key: "ramp_up_months", min: 0.0, max: 24.0, required: false, integer: true },
];

const FUNDRAISE_FIT_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        key: "runway_extension",
        label: "Runway Extension",
        field: None,
        weight: 0.30,
        inverted: false,
        target: 70.0,
        scale: Scale::Derived(Formula::RunwayExtension),
        action: "Model runway under the round's worst plausible close.",
    },
    DimensionDef {
        key: "revenue_traction",
        label: "Revenue Traction",
        field: None,
        weight: 0.25,
        inverted: false,
        target: 70.0,
        scale: Scale::Derived(Formula::RevenueTraction),
        action: "Keep revenue coverage of burn improving quarter over quarter.",
    },
    DimensionDef {
        key: "growth_momentum",
        label: "Growth Momentum",
        field: None,
        weight: 0.25,
        inverted: false,
        target: 70.0,
        scale: Scale::Derived(Formula::GrowthMomentum),
        action: "Track growth by channel, not just in aggregate.",
    },
    DimensionDef {
        key: "dilution_headroom",
        label: "Dilution Headroom",
        field: None,
        weight: 0.20,
        inverted: false,
        target: 70.0,
        scale: Scale::Derived(Formula::DilutionHeadroom),
        action: "Model dilution across the next two rounds.",
    },
];

const FUNDRAISE_FIT_BANDS: &[BandDef] = &[
    BandDef { label: "NotReady", low: 0.0 },
    BandDef { label: "Emerging", low: 40.0 },
    BandDef { label: "Investable", low: 60.0 },
    BandDef { label: "StrongFit", low: 80.0 },
];

const FUNDRAISE_FIT_ADVICE: &[AdviceDef] = &[
    AdviceDef {
        dimension: "runway_extension",
        band: "NotReady",
        text: "The raise barely extends runway; raise more or cut net burn first.",
    },
    AdviceDef {
        dimension: "runway_extension",
        band: "Emerging",
        text: "Target at least eighteen months of runway from the round.",
    },
    AdviceDef {
        dimension: "revenue_traction",
        band: "NotReady",
        text: "Revenue coverage of burn is too thin for this raise; grow traction first.",
    },
    AdviceDef {
        dimension: "revenue_traction",
        band: "Emerging",
        text: "Show three quarters of revenue growth before the roadshow.",
    },
    AdviceDef {
        dimension: "growth_momentum",
        band: "NotReady",
        text: "Growth is flat and investors will price it as such; fix the growth engine before raising.",
    },
    AdviceDef {
        dimension: "growth_momentum",
        band: "Emerging",
        text: "Concentrate spend on the channel with proven payback to lift growth.",
    },
    AdviceDef {
        dimension: "dilution_headroom",
        band: "NotReady",
        text: "Dilution at this level impairs future rounds; negotiate valuation or stage the raise.",
    },
    AdviceDef {
        dimension: "dilution_headroom",
        band: "Emerging",
        text: "Model dilution across the next two rounds before accepting terms.",
    },
];

const OPERATIONAL_HEALTH: EngineDef = EngineDef {
    kind: EngineKind::OperationalHealth,
    name: "Operational Health Diagnostic",
    orientation: Orientation::Progress,
    fields: &[],
    questions: OPERATIONAL_HEALTH_QUESTIONS,
    dimensions: OPERATIONAL_HEALTH_DIMENSIONS,
    bands: OPERATIONAL_HEALTH_BANDS,
    advice: OPERATIONAL_HEALTH_ADVICE,
    urgent: Some(UrgentDef {
        trigger: Trigger::Below,
        threshold: 40.0,
        text: "Overall operational health is critical; pause new initiatives and run a stabilization sprint.",
    }),
    financial: None,
};

const COST_LEAKAGE: EngineDef = EngineDef {
    kind: EngineKind::CostLeakage,
    name: "Cost Leakage Scan",
    orientation: Orientation::Exposure,
    fields: COST_LEAKAGE_FIELDS,
    questions: &[],
    dimensions: COST_LEAKAGE_DIMENSIONS,
    bands: COST_LEAKAGE_BANDS,
    advice: COST_LEAKAGE_ADVICE,
    urgent: Some(UrgentDef {
        trigger: Trigger::AtOrAbove,
        threshold: 75.0,
        text: "Cost leakage is severe; freeze discretionary spend and launch a recovery review.",
    }),
    financial: None,
};

const BREAK_EVEN: EngineDef = EngineDef {
    kind: EngineKind::BreakEven,
    name: "Break-Even & ROI Model",
    orientation: Orientation::Progress,
    fields: BREAK_EVEN_FIELDS,
    questions: &[],
    dimensions: BREAK_EVEN_DIMENSIONS,
    bands: BREAK_EVEN_BANDS,
    advice: BREAK_EVEN_ADVICE,
    urgent: None,
    financial: Some(FinancialDef {
        investment_field: "initial_investment",
        benefit_field: "monthly_benefit",
        ramp_field: "ramp_up_months",
        horizon_months: 36,
        conservative: 0.7,
        optimistic: 1.3,
    }),
};

const SCALE_READINESS: EngineDef = EngineDef {
    kind: EngineKind::ScaleReadiness,
    name: "Scale Readiness Assessment",
    orientation: Orientation::Progress,
    fields: SCALE_READINESS_FIELDS,
    questions: &[],
    dimensions: SCALE_READINESS_DIMENSIONS,
    bands: SCALE_READINESS_BANDS,
    advice: SCALE_READINESS_ADVICE,
    urgent: None,
    financial: None,
};

const BURNOUT_RISK: EngineDef = EngineDef {
    kind: EngineKind::BurnoutRisk,
    name: "Burnout Risk Monitor",
    orientation: Orientation::Exposure,
    fields: BURNOUT_RISK_FIELDS,
    questions: &[],
    dimensions: BURNOUT_RISK_DIMENSIONS,
    bands: BURNOUT_RISK_BANDS,
    advice: BURNOUT_RISK_ADVICE,
    urgent: Some(UrgentDef {
        trigger: Trigger::AtOrAbove,
        threshold: 60.0,
        text: "Burnout risk is critical; intervene this week with workload relief and leadership attention.",
    }),
    financial: None,
};

const GOVERNANCE_MATURITY: EngineDef = EngineDef {
    kind: EngineKind::GovernanceMaturity,
    name: "Governance Maturity Model",
    orientation: Orientation::Progress,
    fields: GOVERNANCE_MATURITY_FIELDS,
    questions: &[],
    dimensions: GOVERNANCE_MATURITY_DIMENSIONS,
    bands: GOVERNANCE_MATURITY_BANDS,
    advice: GOVERNANCE_MATURITY_ADVICE,
    urgent: None,
    financial: None,
};

const DECISION_BOTTLENECK: EngineDef = EngineDef {
    kind: EngineKind::DecisionBottleneck,
    name: "Decision Bottleneck Audit",
    orientation: Orientation::Exposure,
    fields: DECISION_BOTTLENECK_FIELDS,
    questions: &[],
    dimensions: DECISION_BOTTLENECK_DIMENSIONS,
    bands: DECISION_BOTTLENECK_BANDS,
    advice: DECISION_BOTTLENECK_ADVICE,
    urgent: Some(UrgentDef {
        trigger: Trigger::AtOrAbove,
        threshold: 75.0,
        text: "Decision flow is gridlocked; delegate authority for routine decisions immediately.",
    }),
    financial: None,
};

const FUNDRAISE_FIT: EngineDef = EngineDef {
    kind: EngineKind::FundraiseFit,
    name: "Fundraise Fit Screen",
    orientation: Orientation::Progress,
    fields: FUNDRAISE_FIT_FIELDS,
    questions: &[],
    dimensions: FUNDRAISE_FIT_DIMENSIONS,
    bands: FUNDRAISE_FIT_BANDS,
    advice: FUNDRAISE_FIT_ADVICE,
    urgent: None,
    financial: Some(FinancialDef {
        investment_field: "target_raise",
        benefit_field: "projected_monthly_gain",
        ramp_field: "ramp_up_months",
        horizon_months: 36,
        conservative: 0.7,
        optimistic: 1.3,
    }),
};

const BUILTIN_ENGINES: &[EngineDef] = &[
    OPERATIONAL_HEALTH,
    COST_LEAKAGE,
    BREAK_EVEN,
    SCALE_READINESS,
    BURNOUT_RISK,
    GOVERNANCE_MATURITY,
    DECISION_BOTTLENECK,
    FUNDRAISE_FIT,
];

pub fn builtin_engines() -> &'static [EngineDef] {
    BUILTIN_ENGINES
}

pub fn engine_def(kind: EngineKind) -> &'static EngineDef {
    match kind {
        EngineKind::OperationalHealth => &OPERATIONAL_HEALTH,
        EngineKind::CostLeakage => &COST_LEAKAGE,
        EngineKind::BreakEven => &BREAK_EVEN,
        EngineKind::ScaleReadiness => &SCALE_READINESS,
        EngineKind::BurnoutRisk => &BURNOUT_RISK,
        EngineKind::GovernanceMaturity => &GOVERNANCE_MATURITY,
        EngineKind::DecisionBottleneck => &DECISION_BOTTLENECK,
        EngineKind::FundraiseFit => &FUNDRAISE_FIT,
    }
}
