use serde::Serialize;

use crate::model::scores::{round1, round2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Conservative,
    Realistic,
    Optimistic,
}

impl ScenarioKind {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "Conservative",
            ScenarioKind::Realistic => "Realistic",
            ScenarioKind::Optimistic => "Optimistic",
        }
    }
}

/// One benefit-multiplier variant of the projection. `payback_months` is
/// the first month where cumulative benefit covers the investment; when
/// that never happens within the horizon it reports the horizon length
/// itself and `broke_even` is false.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub multiplier: f64,
    pub payback_months: u32,
    pub broke_even: bool,
    pub roi_percent: f64,
    pub total_benefit: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub payback_months: Option<u32>,
    pub roi_percent: f64,
    pub total_benefit: f64,
    pub horizon_months: u32,
}

/// Month-by-month accumulation over the horizon. During the ramp the
/// monthly benefit scales linearly from zero to its full value.
pub fn project(investment: f64, monthly_benefit: f64, ramp_months: u32, horizon: u32) -> Projection {
    let mut cumulative = 0.0;
    let mut payback = None;

    for month in 1..=horizon {
        let ramp_factor = if ramp_months == 0 {
            1.0
        } else {
            (month as f64 / ramp_months as f64).min(1.0)
        };
        cumulative += monthly_benefit * ramp_factor;
        if payback.is_none() && cumulative >= investment {
            payback = Some(month);
        }
    }

    let roi_percent = if investment > 0.0 {
        (cumulative - investment) / investment * 100.0
    } else {
        0.0
    };

    Projection {
        payback_months: payback,
        roi_percent,
        total_benefit: cumulative,
        horizon_months: horizon,
    }
}

pub fn scenario(
    kind: ScenarioKind,
    multiplier: f64,
    investment: f64,
    monthly_benefit: f64,
    ramp_months: u32,
    horizon: u32,
) -> Scenario {
    let projection = project(investment, monthly_benefit * multiplier, ramp_months, horizon);
    Scenario {
        kind,
        multiplier,
        payback_months: projection.payback_months.unwrap_or(horizon),
        broke_even: projection.payback_months.is_some(),
        roi_percent: round1(projection.roi_percent),
        total_benefit: round2(projection.total_benefit),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scenario.rs"]
mod tests;
