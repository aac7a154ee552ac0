use std::fmt;

use serde::{Serialize, Serializer};

use crate::descriptive::mean;
use crate::distribution::t_distribution_p_value;
use crate::is_significant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

/// Qualitative reading of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    InsufficientData,
    Relationship {
        strength: Strength,
        direction: Direction,
    },
}

const WEAK_BELOW: f64 = 0.3;
const MODERATE_BELOW: f64 = 0.7;

impl Interpretation {
    pub fn from_coefficient(r: f64) -> Self {
        let strength = match r.abs() {
            x if x < WEAK_BELOW => Strength::Weak,
            x if x < MODERATE_BELOW => Strength::Moderate,
            _ => Strength::Strong,
        };
        let direction = if r >= 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        };
        Interpretation::Relationship {
            strength,
            direction,
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpretation::InsufficientData => write!(f, "Insufficient data"),
            Interpretation::Relationship {
                strength,
                direction,
            } => {
                let strength = match strength {
                    Strength::Weak => "Weak",
                    Strength::Moderate => "Moderate",
                    Strength::Strong => "Strong",
                };
                let direction = match direction {
                    Direction::Positive => "positive",
                    Direction::Negative => "negative",
                };
                write!(f, "{strength} {direction}")
            }
        }
    }
}

impl Serialize for Interpretation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    pub coefficient: f64,
    pub p_value: f64,
    pub n: usize,
    pub significant: bool,
    pub interpretation: Interpretation,
}

/// Pearson correlation of paired samples.
///
/// Pairs are taken positionally; a longer sequence's extra values are
/// ignored. Fewer than three pairs, or a constant sequence, yields a neutral
/// result labelled as insufficient data.
pub fn correlation(x: &[f64], y: &[f64]) -> CorrelationResult {
    let n = x.len().min(y.len());
    let neutral = CorrelationResult {
        coefficient: 0.0,
        p_value: 1.0,
        n,
        significant: false,
        interpretation: Interpretation::InsufficientData,
    };

    if n < 3 {
        return neutral;
    }

    let (x, y) = (&x[..n], &y[..n]);
    let mx = mean(x);
    let my = mean(y);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom <= 0.0 {
        return neutral;
    }

    let r = (sxy / denom).clamp(-1.0, 1.0);
    let df = n - 2;
    let unexplained = 1.0 - r * r;
    let t = if unexplained > 0.0 {
        r * (df as f64 / unexplained).sqrt()
    } else {
        f64::INFINITY.copysign(r)
    };
    let p_value = t_distribution_p_value(t, df);

    CorrelationResult {
        coefficient: r,
        p_value,
        n,
        significant: is_significant(p_value),
        interpretation: Interpretation::from_coefficient(r),
    }
}
