/// One classification band. `low` is inclusive; the band runs until the
/// next band's `low`, and the last band is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandDef {
    pub label: &'static str,
    pub low: f64,
}

/// Ordered band tables start at 0.0, so any non-negative score lands in
/// exactly one band. A value sitting on a boundary belongs to the higher
/// band.
pub fn band_for(bands: &[BandDef], score: f64) -> BandDef {
    let mut current = bands[0];
    for band in &bands[1..] {
        if score >= band.low {
            current = *band;
        }
    }
    current
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bands.rs"]
mod tests;
