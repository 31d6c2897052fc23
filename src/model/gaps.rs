use serde::Serialize;

/// Variant order doubles as sort order: High sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// A dimension sitting below its target. `current` and `target` are in
/// progress orientation, higher is better.
#[derive(Debug, Clone, Serialize)]
pub struct Gap {
    pub dimension: &'static str,
    pub label: &'static str,
    pub current: f64,
    pub target: f64,
    pub priority: Priority,
    pub action: &'static str,
}

pub fn priority_for(score: f64) -> Priority {
    if score < 50.0 {
        Priority::High
    } else if score < 70.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}
