/// A dimension after normalization. `score` always reads as progress,
/// higher is better, regardless of how the raw input was oriented.
/// Dimensions with zero observations carry no signal and are excluded
/// from aggregation.
#[derive(Debug, Clone)]
pub struct Dimension {
    pub key: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub target: f64,
    pub observations: usize,
    pub raw: f64,
    pub score: f64,
}

pub fn clamp100(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 100.0 {
        100.0
    } else {
        x
    }
}
