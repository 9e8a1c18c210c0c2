use std::f64::consts::PI;

/// Area and circumference, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStats {
    pub area: f64,
    pub circumference: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn circle_stats(radius: f64) -> CircleStats {
    CircleStats {
        area: round2(PI * radius * radius),
        circumference: round2(2.0 * PI * radius),
    }
}
