//! Easing functions
//!
//! Maps normalized time `t ∈ [0, 1]` to eased progress. Inputs outside the
//! unit range are clamped first, so callers can pass `elapsed / duration`
//! without guarding.

use serde::{Deserialize, Serialize};

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing function
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// `cubic-bezier(0.4, 0.0, 0.2, 1)`, the page-slide curve
    pub const fn standard() -> Self {
        Self::new(0.4, 0.0, 0.2, 1.0)
    }

    fn sample_x(&self, t: f32) -> f32 {
        bezier_component(self.x1, self.x2, t)
    }

    fn sample_y(&self, t: f32) -> f32 {
        bezier_component(self.y1, self.y2, t)
    }

    fn sample_dx(&self, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * self.x1 + 6.0 * u * t * (self.x2 - self.x1) + 3.0 * t * t * (1.0 - self.x2)
    }

    /// Solve for the curve parameter whose x equals `x`
    fn solve_t(&self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-5;

        // Newton-Raphson first, it converges in a handful of steps for
        // well-behaved curves.
        let mut t = x;
        for _ in 0..8 {
            let err = self.sample_x(t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Bisection fallback
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let value = self.sample_x(t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }

    pub fn apply(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        self.sample_y(self.solve_t(x))
    }
}

fn bezier_component(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Easing curve for a tween
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^2`
    #[default]
    EaseOutQuad,
    /// CSS cubic Bézier
    CubicBezier(CubicBezier),
}

impl Easing {
    /// The page-slide curve, `cubic-bezier(0.4, 0.0, 0.2, 1)`
    pub const fn standard() -> Self {
        Easing::CubicBezier(CubicBezier::standard())
    }

    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicBezier(curve) => curve.apply(t),
        }
    }
}
