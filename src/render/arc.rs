//! Arc angle normalization.

/// Pick the shorter way around for an arc between two angles in degrees.
///
/// Inputs are taken as given, not wrapped into [0, 360) first. When the
/// raw gap exceeds 180 degrees, 360 is subtracted from whichever angle is
/// numerically larger. A gap of exactly 180 is left alone.
pub fn normalize_arc_span(low: f64, high: f64) -> (f64, f64) {
    let (mut low, mut high) = (low, high);
    if (low - high).abs() > 180.0 {
        if high > low {
            high -= 360.0;
        } else {
            low -= 360.0;
        }
    }
    (low, high)
}

/// [`normalize_arc_span`], converted to radians for the canvas
pub fn arc_span_radians(low: f64, high: f64) -> (f64, f64) {
    let (low, high) = normalize_arc_span(low, high);
    (low.to_radians(), high.to_radians())
}
